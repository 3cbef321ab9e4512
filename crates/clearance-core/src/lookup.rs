//! Filtered record lookups
//!
//! Glue between the record stores and the filter engine: fetch, match,
//! project, render.

use serde_json::Value;

use clearance_types::store_adapter::RecordAdapter;

use crate::app::{AppState, StoredRecord};
use crate::filter::{self, Projection};
use crate::prelude::*;

/// Exact, case-insensitive match on a governed field
pub fn find_by_field<R: StoredRecord>(records: Vec<R>, field: &str, value: &str) -> ClResult<R> {
	let value = value.trim();
	records
		.into_iter()
		.find(|record| record.field(field).is_some_and(|v| v.eq_ignore_ascii_case(value)))
		.ok_or(Error::NotFound)
}

/// Looks up one record by its lookup field and renders what the requester
/// may see of it
pub async fn request_record<R: StoredRecord>(
	app: &AppState,
	key: &str,
	requester: AccessLevel,
) -> ClResult<Value> {
	let records = R::adapter(app).list_records().await?;
	let record = find_by_field(records, R::LOOKUP_FIELD, key).inspect_err(|_| {
		debug!(endpoint = R::ENDPOINT, key = key, "Lookup miss");
	})?;

	let policy = app.policy().await?;
	let projection = filter::filter(&record, requester, &policy);
	info!(
		endpoint = R::ENDPOINT,
		record = record.id(),
		requester = %requester,
		full = projection.is_full(),
		"Record requested"
	);
	projection.render(app.opts.redaction_style)
}

/// Every record, projected for the requester
pub async fn filter_records<R: StoredRecord>(
	app: &AppState,
	requester: AccessLevel,
) -> ClResult<Vec<Value>> {
	let records = R::adapter(app).list_records().await?;
	let policy = app.policy().await?;
	filter::filter_all(&records, requester, &policy)
		.iter()
		.map(|projection: &Projection<R>| projection.render(app.opts.redaction_style))
		.collect()
}

/// Records the requester is cleared for as a whole, unprojected
pub async fn records_within_clearance<R: StoredRecord>(
	app: &AppState,
	requester: AccessLevel,
) -> ClResult<Vec<R>> {
	let records = R::adapter(app).list_records().await?;
	Ok(filter::within_clearance(records, requester))
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use std::sync::Arc;
	use tokio::sync::Mutex;

	use clearance_types::field_access::{
		FieldAccessSetting, NewFieldAccess, default_settings, next_setting_id,
	};
	use clearance_types::record::{Record, ServiceRecord, UserRecord};
	use clearance_types::store_adapter::PolicyAdapter;

	use crate::app::AppBuilderOpts;
	use crate::color::ColorMap;
	use crate::filter::{NO_ACCESS, PolicySource, RedactionStyle};

	#[derive(Debug)]
	struct MemoryRecords<R>(Mutex<Vec<R>>);

	impl<R> MemoryRecords<R> {
		fn new() -> Self {
			Self(Mutex::new(Vec::new()))
		}
	}

	#[async_trait]
	impl<R: Record> RecordAdapter<R> for MemoryRecords<R> {
		async fn list_records(&self) -> ClResult<Vec<R>> {
			Ok(self.0.lock().await.clone())
		}

		async fn create_record(&self, record: R) -> ClResult<R> {
			self.0.lock().await.push(record.clone());
			Ok(record)
		}

		async fn update_record(&self, _id: &str, record: R) -> ClResult<R> {
			Ok(record)
		}

		async fn delete_record(&self, _id: &str) -> ClResult<()> {
			Ok(())
		}

		async fn replace_records(&self, records: Vec<R>) -> ClResult<()> {
			*self.0.lock().await = records;
			Ok(())
		}
	}

	#[derive(Debug, Default)]
	struct MemoryPolicy(Mutex<Vec<FieldAccessSetting>>);

	#[async_trait]
	impl PolicyAdapter for MemoryPolicy {
		async fn list_settings(&self) -> ClResult<Vec<FieldAccessSetting>> {
			Ok(self.0.lock().await.clone())
		}

		async fn create_setting(&self, setting: NewFieldAccess) -> ClResult<u32> {
			let mut settings = self.0.lock().await;
			let id = next_setting_id(&settings);
			settings.push(FieldAccessSetting {
				id,
				endpoint: setting.endpoint,
				field_name: setting.field_name,
				access_level: setting.access_level,
			});
			Ok(id)
		}

		async fn update_setting(&self, _id: u32, _access_level: AccessLevel) -> ClResult<()> {
			Ok(())
		}

		async fn delete_setting(&self, _id: u32) -> ClResult<()> {
			Ok(())
		}

		async fn reset_settings(&self) -> ClResult<Vec<FieldAccessSetting>> {
			let defaults = default_settings();
			self.0.lock().await.clone_from(&defaults);
			Ok(defaults)
		}
	}

	async fn create_test_app(policy_source: PolicySource) -> AppState {
		let users = MemoryRecords::<UserRecord>::new();
		for (email, level) in [
			("alice@example.com", AccessLevel::Secret),
			("bob@example.com", AccessLevel::Public),
		] {
			let mut user =
				UserRecord::new("(555) 123-4567", email, "Some Name", "12 Main St", level);
			user.full_name_access_level = Some(AccessLevel::Confidential);
			users.create_record(user).await.unwrap();
		}
		let policy = MemoryPolicy::default();
		policy.reset_settings().await.unwrap();

		AppState {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:0".into(),
				redaction_style: RedactionStyle::NoAccess,
				policy_source,
				generate_count: 50,
			},
			user_adapter: Arc::new(users),
			service_adapter: Arc::new(MemoryRecords::<ServiceRecord>::new()),
			policy_adapter: Arc::new(policy),
			colors: ColorMap::new(),
		}
	}

	#[tokio::test]
	async fn test_request_record_case_insensitive() {
		let app = create_test_app(PolicySource::Table).await;
		let json = request_record::<UserRecord>(&app, "ALICE@Example.com", AccessLevel::Confidential)
			.await
			.unwrap();
		assert_eq!(json["email"], "alice@example.com");
		assert_eq!(json["fullName"], NO_ACCESS);
		assert_eq!(json["accessLevel"], "Secret");
	}

	#[tokio::test]
	async fn test_request_record_with_record_attributes() {
		let app = create_test_app(PolicySource::RecordAttributes).await;
		let json = request_record::<UserRecord>(&app, "alice@example.com", AccessLevel::Confidential)
			.await
			.unwrap();
		assert_eq!(json["fullName"], "Some Name");
		assert_eq!(json["email"], NO_ACCESS);
	}

	#[tokio::test]
	async fn test_request_record_not_found() {
		let app = create_test_app(PolicySource::Table).await;
		let res = request_record::<UserRecord>(&app, "nobody@example.com", AccessLevel::TopSecret)
			.await;
		assert!(matches!(res, Err(Error::NotFound)));

		let res = request_record::<ServiceRecord>(&app, "10.0.0.1", AccessLevel::TopSecret).await;
		assert!(matches!(res, Err(Error::NotFound)));
	}

	#[tokio::test]
	async fn test_filter_records_and_clearance() {
		let app = create_test_app(PolicySource::Table).await;

		let all = filter_records::<UserRecord>(&app, AccessLevel::Public).await.unwrap();
		assert_eq!(all.len(), 2);
		assert_eq!(all[0]["email"], NO_ACCESS);
		assert!(all[1]["id"].is_string());

		let cleared =
			records_within_clearance::<UserRecord>(&app, AccessLevel::Public).await.unwrap();
		assert_eq!(cleared.len(), 1);
		assert_eq!(cleared[0].email, "bob@example.com");
	}
}

// vim: ts=4
