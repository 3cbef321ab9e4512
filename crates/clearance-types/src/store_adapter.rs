//! Adapter traits for the record and field access stores.
//!
//! Implementations own their backing storage exclusively and serialize every
//! read-modify-write cycle, so concurrent callers never interleave writes.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::field_access::{self, FieldAccessSetting, NewFieldAccess};
use crate::prelude::*;
use crate::record::Record;

#[async_trait]
pub trait RecordAdapter<R: Record>: Debug + Send + Sync {
	/// Returns every record in storage order, empty when nothing is stored yet
	async fn list_records(&self) -> ClResult<Vec<R>>;

	/// Looks up a record by id
	async fn read_record(&self, id: &str) -> ClResult<Option<R>> {
		Ok(self.list_records().await?.into_iter().find(|r| r.id() == id))
	}

	/// Appends a record, assigning a fresh id when it has none
	async fn create_record(&self, record: R) -> ClResult<R>;

	/// Replaces the record with the given id, keeping that id
	async fn update_record(&self, id: &str, record: R) -> ClResult<R>;

	async fn delete_record(&self, id: &str) -> ClResult<()>;

	/// Replaces the whole collection
	async fn replace_records(&self, records: Vec<R>) -> ClResult<()>;
}

#[async_trait]
pub trait PolicyAdapter: Debug + Send + Sync {
	/// Returns all settings in storage order
	async fn list_settings(&self) -> ClResult<Vec<FieldAccessSetting>>;

	/// Appends a setting and returns its id; duplicates are not rejected
	async fn create_setting(&self, setting: NewFieldAccess) -> ClResult<u32>;

	async fn update_setting(&self, id: u32, access_level: AccessLevel) -> ClResult<()>;

	async fn delete_setting(&self, id: u32) -> ClResult<()>;

	/// Overwrites the store with the built-in defaults
	async fn reset_settings(&self) -> ClResult<Vec<FieldAccessSetting>>;

	/// Governed fields of an endpoint, independent of the stored settings
	fn fields_for(&self, endpoint: &str) -> Vec<&'static str> {
		field_access::fields_for(endpoint)
	}

	/// Governed fields of an endpoint that have no setting yet
	async fn available_fields(&self, endpoint: &str) -> ClResult<Vec<&'static str>> {
		let settings = self.list_settings().await?;
		Ok(field_access::unconfigured_fields(endpoint, &settings))
	}
}

// vim: ts=4
