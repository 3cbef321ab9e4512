//! Field access settings
//!
//! A setting assigns the minimum clearance needed to view one field of one
//! endpoint. Settings are joined to records by endpoint and field name.

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::record::{Record, ServiceRecord, UserRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAccessSetting {
	pub id: u32,
	pub endpoint: String,
	pub field_name: String,
	pub access_level: AccessLevel,
}

/// Input of an administrative insert, the id is assigned by the store
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFieldAccess {
	pub endpoint: String,
	pub field_name: String,
	pub access_level: AccessLevel,
}

impl NewFieldAccess {
	pub fn validate(&self) -> ClResult<()> {
		if self.endpoint.trim().is_empty() {
			return Err(Error::ValidationError("endpoint is required".into()));
		}
		if self.field_name.trim().is_empty() {
			return Err(Error::ValidationError("fieldName is required".into()));
		}
		Ok(())
	}
}

/// Known governed fields per endpoint
///
/// Independent of what is currently configured. Unknown endpoints have no
/// fields.
pub fn fields_for(endpoint: &str) -> Vec<&'static str> {
	if endpoint == UserRecord::ENDPOINT {
		UserRecord::field_names()
	} else if endpoint == ServiceRecord::ENDPOINT {
		ServiceRecord::field_names()
	} else {
		Vec::new()
	}
}

/// Known endpoint names
pub const ENDPOINTS: [&str; 2] = [UserRecord::ENDPOINT, ServiceRecord::ENDPOINT];

/// Id for the next inserted setting: max existing id + 1, or 1 when empty
pub fn next_setting_id(settings: &[FieldAccessSetting]) -> u32 {
	settings.iter().map(|s| s.id).max().map_or(1, |max| max + 1)
}

/// Built-in settings restored by a reset, ids 1..=8
pub fn default_settings() -> Vec<FieldAccessSetting> {
	const DEFAULTS: [(&str, &str, AccessLevel); 8] = [
		(UserRecord::ENDPOINT, "phone", AccessLevel::Public),
		(UserRecord::ENDPOINT, "email", AccessLevel::Confidential),
		(UserRecord::ENDPOINT, "fullName", AccessLevel::Secret),
		(UserRecord::ENDPOINT, "address", AccessLevel::TopSecret),
		(ServiceRecord::ENDPOINT, "service", AccessLevel::Public),
		(ServiceRecord::ENDPOINT, "address", AccessLevel::Confidential),
		(ServiceRecord::ENDPOINT, "ipAddress", AccessLevel::Secret),
		(ServiceRecord::ENDPOINT, "ipGateway", AccessLevel::TopSecret),
	];

	DEFAULTS
		.iter()
		.zip(1u32..)
		.map(|((endpoint, field_name, access_level), id)| FieldAccessSetting {
			id,
			endpoint: (*endpoint).to_string(),
			field_name: (*field_name).to_string(),
			access_level: *access_level,
		})
		.collect()
}

/// Fields of `endpoint` that have no setting yet, in field table order
pub fn unconfigured_fields(endpoint: &str, settings: &[FieldAccessSetting]) -> Vec<&'static str> {
	fields_for(endpoint)
		.into_iter()
		.filter(|field| !settings.iter().any(|s| s.endpoint == endpoint && s.field_name == *field))
		.collect()
}


// vim: ts=4
