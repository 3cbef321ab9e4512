//! App state type

use std::sync::Arc;

use clearance_types::record::{Record, ServiceRecord, UserRecord};
use clearance_types::store_adapter::{PolicyAdapter, RecordAdapter};

use crate::color::ColorMap;
use crate::filter::{Policy, PolicySource, PolicyTable, RecordFieldLevels, RedactionStyle};
use crate::prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,

	pub user_adapter: Arc<dyn RecordAdapter<UserRecord>>,
	pub service_adapter: Arc<dyn RecordAdapter<ServiceRecord>>,
	pub policy_adapter: Arc<dyn PolicyAdapter>,

	pub colors: ColorMap,
}

impl AppState {
	/// Current field policy according to the configured source
	pub async fn policy(&self) -> ClResult<Policy> {
		match self.opts.policy_source {
			PolicySource::Table => {
				let settings = self.policy_adapter.list_settings().await?;
				Ok(Policy::Table(PolicyTable::from_settings(&settings)))
			}
			PolicySource::RecordAttributes => Ok(Policy::RecordAttributes(RecordFieldLevels)),
		}
	}
}

pub type App = Arc<AppState>;

pub struct Adapters {
	pub user_adapter: Option<Arc<dyn RecordAdapter<UserRecord>>>,
	pub service_adapter: Option<Arc<dyn RecordAdapter<ServiceRecord>>>,
	pub policy_adapter: Option<Arc<dyn PolicyAdapter>>,
}

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	pub redaction_style: RedactionStyle,
	pub policy_source: PolicySource,
	/// Number of records created by a regenerate request
	pub generate_count: usize,
}

/// A record kind served by the API, bound to its store in the app state
pub trait StoredRecord: Record {
	/// Governed field used by filtered lookups
	const LOOKUP_FIELD: &'static str;

	fn adapter(app: &AppState) -> &dyn RecordAdapter<Self>;
}

impl StoredRecord for UserRecord {
	const LOOKUP_FIELD: &'static str = "email";

	fn adapter(app: &AppState) -> &dyn RecordAdapter<Self> {
		app.user_adapter.as_ref()
	}
}

impl StoredRecord for ServiceRecord {
	const LOOKUP_FIELD: &'static str = "ipAddress";

	fn adapter(app: &AppState) -> &dyn RecordAdapter<Self> {
		app.service_adapter.as_ref()
	}
}

// vim: ts=4
