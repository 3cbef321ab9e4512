//! JSON file backed stores
//!
//! Every store keeps its collection in one JSON array document inside the
//! data directory and guards each access with its own lock.

use async_trait::async_trait;
use std::{fmt::Debug, marker::PhantomData, path::Path};
use tokio::fs::create_dir_all;

use clearance_types::field_access::{
	FieldAccessSetting, NewFieldAccess, default_settings, next_setting_id,
};
use clearance_types::prelude::*;
use clearance_types::record::Record;
use clearance_types::store_adapter::{PolicyAdapter, RecordAdapter};
use clearance_types::utils::random_record_id;

mod file;

use file::JsonFile;

pub const POLICY_FILE: &str = "FieldAccessSettings.json";

/// File name of the store of a record kind
pub fn record_file_name<R: Record>() -> String {
	format!("{}.json", R::ENDPOINT)
}

// RecordAdapterJson //
//*******************//
#[derive(Debug)]
pub struct RecordAdapterJson<R> {
	file: JsonFile,
	_kind: PhantomData<fn() -> R>,
}

impl<R: Record> RecordAdapterJson<R> {
	pub async fn new(base_dir: Box<Path>) -> ClResult<Self> {
		create_dir_all(&base_dir).await?;
		let file = JsonFile::new(base_dir.join(record_file_name::<R>()));
		info!(path = ?file.path(), "Record store opened");
		Ok(Self { file, _kind: PhantomData })
	}
}

#[async_trait]
impl<R: Record> RecordAdapter<R> for RecordAdapterJson<R> {
	async fn list_records(&self) -> ClResult<Vec<R>> {
		self.file.read().await
	}

	async fn create_record(&self, mut record: R) -> ClResult<R> {
		if record.id().trim().is_empty() {
			record.set_id(random_record_id(R::ID_PREFIX));
		}
		let created = record.clone();
		self.file
			.modify(move |records: &mut Vec<R>| {
				records.push(record);
				Ok(())
			})
			.await?;
		debug!(endpoint = R::ENDPOINT, id = created.id(), "Record created");
		Ok(created)
	}

	async fn update_record(&self, id: &str, mut record: R) -> ClResult<R> {
		record.set_id(id.to_string());
		let updated = record.clone();
		self.file
			.modify(move |records: &mut Vec<R>| {
				let slot = records.iter_mut().find(|r| r.id() == id).ok_or(Error::NotFound)?;
				*slot = record;
				Ok(())
			})
			.await?;
		debug!(endpoint = R::ENDPOINT, id = id, "Record updated");
		Ok(updated)
	}

	async fn delete_record(&self, id: &str) -> ClResult<()> {
		self.file
			.modify(|records: &mut Vec<R>| {
				let pos = records.iter().position(|r| r.id() == id).ok_or(Error::NotFound)?;
				records.remove(pos);
				Ok(())
			})
			.await?;
		debug!(endpoint = R::ENDPOINT, id = id, "Record deleted");
		Ok(())
	}

	async fn replace_records(&self, records: Vec<R>) -> ClResult<()> {
		self.file.replace(&records).await?;
		info!(endpoint = R::ENDPOINT, count = records.len(), "Records replaced");
		Ok(())
	}
}

// PolicyAdapterJson //
//*******************//
#[derive(Debug)]
pub struct PolicyAdapterJson {
	file: JsonFile,
}

impl PolicyAdapterJson {
	pub async fn new(base_dir: Box<Path>) -> ClResult<Self> {
		create_dir_all(&base_dir).await?;
		let file = JsonFile::new(base_dir.join(POLICY_FILE));
		info!(path = ?file.path(), "Field access store opened");
		Ok(Self { file })
	}
}

#[async_trait]
impl PolicyAdapter for PolicyAdapterJson {
	async fn list_settings(&self) -> ClResult<Vec<FieldAccessSetting>> {
		self.file.read().await
	}

	async fn create_setting(&self, setting: NewFieldAccess) -> ClResult<u32> {
		let id = self
			.file
			.modify(|settings: &mut Vec<FieldAccessSetting>| {
				let id = next_setting_id(settings);
				settings.push(FieldAccessSetting {
					id,
					endpoint: setting.endpoint,
					field_name: setting.field_name,
					access_level: setting.access_level,
				});
				Ok(id)
			})
			.await?;
		debug!(id = id, "Field access setting created");
		Ok(id)
	}

	async fn update_setting(&self, id: u32, access_level: AccessLevel) -> ClResult<()> {
		self.file
			.modify(|settings: &mut Vec<FieldAccessSetting>| {
				let setting = settings.iter_mut().find(|s| s.id == id).ok_or(Error::NotFound)?;
				setting.access_level = access_level;
				Ok(())
			})
			.await?;
		debug!(id = id, access_level = %access_level, "Field access setting updated");
		Ok(())
	}

	async fn delete_setting(&self, id: u32) -> ClResult<()> {
		self.file
			.modify(|settings: &mut Vec<FieldAccessSetting>| {
				let pos = settings.iter().position(|s| s.id == id).ok_or(Error::NotFound)?;
				settings.remove(pos);
				Ok(())
			})
			.await?;
		debug!(id = id, "Field access setting deleted");
		Ok(())
	}

	async fn reset_settings(&self) -> ClResult<Vec<FieldAccessSetting>> {
		let defaults = default_settings();
		self.file.replace(&defaults).await?;
		info!(count = defaults.len(), "Field access settings reset to defaults");
		Ok(defaults)
	}
}

// vim: ts=4
