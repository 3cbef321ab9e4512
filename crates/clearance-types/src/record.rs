//! Record kinds and their governed fields
//!
//! Each record kind carries a static dispatch table of its governed fields.
//! The access filter and the lookups resolve field names through that table,
//! so every governed field is known at compile time.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt::Debug;

use crate::prelude::*;
use crate::utils::{is_valid_email, is_valid_ipv4, is_valid_phone, random_record_id};

/// One governed field of a record kind
pub struct FieldDef<R> {
	/// Name used by field access settings and on the wire
	pub name: &'static str,
	/// Value accessor
	pub get: fn(&R) -> &str,
	/// Per-record required level for this field, if the record carries one
	pub level: fn(&R) -> Option<AccessLevel>,
}

/// Common contract of stored record kinds
pub trait Record: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
	/// Endpoint name, namespace of field access settings
	const ENDPOINT: &'static str;
	/// Prefix of generated ids
	const ID_PREFIX: &'static str;

	/// Governed fields in presentation order
	fn fields() -> &'static [FieldDef<Self>];

	fn id(&self) -> &str;
	fn set_id(&mut self, id: String);

	/// Minimum clearance required to see the record as a whole
	fn access_level(&self) -> AccessLevel;

	fn validate(&self) -> ClResult<()>;

	fn field_def(name: &str) -> Option<&'static FieldDef<Self>> {
		Self::fields().iter().find(|def| def.name == name)
	}

	fn field(&self, name: &str) -> Option<&str> {
		Self::field_def(name).map(|def| (def.get)(self))
	}

	fn field_names() -> Vec<&'static str> {
		Self::fields().iter().map(|def| def.name).collect()
	}
}

fn require_len(field: &str, value: &str, min: usize, max: usize) -> ClResult<()> {
	let len = value.trim().chars().count();
	if len < min || len > max {
		return Err(Error::ValidationError(format!(
			"{} must be between {} and {} characters",
			field, min, max
		)));
	}
	Ok(())
}

// UserRecord //
//************//
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
	#[serde(default)]
	pub id: String,
	pub phone: String,
	pub email: String,
	pub full_name: String,
	pub address: String,
	pub access_level: AccessLevel,

	// Per-record field levels (legacy governance source)
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone_access_level: Option<AccessLevel>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email_access_level: Option<AccessLevel>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub full_name_access_level: Option<AccessLevel>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub address_access_level: Option<AccessLevel>,
}

impl UserRecord {
	pub fn new(
		phone: impl Into<String>,
		email: impl Into<String>,
		full_name: impl Into<String>,
		address: impl Into<String>,
		access_level: AccessLevel,
	) -> Self {
		Self {
			id: random_record_id(Self::ID_PREFIX),
			phone: phone.into(),
			email: email.into(),
			full_name: full_name.into(),
			address: address.into(),
			access_level,
			phone_access_level: None,
			email_access_level: None,
			full_name_access_level: None,
			address_access_level: None,
		}
	}
}

static USER_FIELDS: [FieldDef<UserRecord>; 4] = [
	FieldDef { name: "phone", get: |r| r.phone.as_str(), level: |r| r.phone_access_level },
	FieldDef { name: "email", get: |r| r.email.as_str(), level: |r| r.email_access_level },
	FieldDef { name: "fullName", get: |r| r.full_name.as_str(), level: |r| r.full_name_access_level },
	FieldDef { name: "address", get: |r| r.address.as_str(), level: |r| r.address_access_level },
];

impl Record for UserRecord {
	const ENDPOINT: &'static str = "UserData";
	const ID_PREFIX: &'static str = "UD";

	fn fields() -> &'static [FieldDef<Self>] {
		&USER_FIELDS
	}

	fn id(&self) -> &str {
		&self.id
	}

	fn set_id(&mut self, id: String) {
		self.id = id;
	}

	fn access_level(&self) -> AccessLevel {
		self.access_level
	}

	fn validate(&self) -> ClResult<()> {
		if !is_valid_phone(&self.phone) {
			return Err(Error::ValidationError(format!("Invalid phone number: {}", self.phone)));
		}
		if !is_valid_email(&self.email) {
			return Err(Error::ValidationError(format!("Invalid email address: {}", self.email)));
		}
		require_len("fullName", &self.full_name, 2, 150)?;
		if self.address.trim().is_empty() {
			return Err(Error::ValidationError("address is required".into()));
		}
		Ok(())
	}
}

// ServiceRecord //
//***************//
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
	#[serde(default)]
	pub id: String,
	pub service: String,
	pub address: String,
	pub ip_address: String,
	pub ip_gateway: String,
	pub access_level: AccessLevel,

	// Per-record field levels (legacy governance source)
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub service_access_level: Option<AccessLevel>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub address_access_level: Option<AccessLevel>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ip_address_access_level: Option<AccessLevel>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ip_gateway_access_level: Option<AccessLevel>,
}

impl ServiceRecord {
	pub fn new(
		service: impl Into<String>,
		address: impl Into<String>,
		ip_address: impl Into<String>,
		ip_gateway: impl Into<String>,
		access_level: AccessLevel,
	) -> Self {
		Self {
			id: random_record_id(Self::ID_PREFIX),
			service: service.into(),
			address: address.into(),
			ip_address: ip_address.into(),
			ip_gateway: ip_gateway.into(),
			access_level,
			service_access_level: None,
			address_access_level: None,
			ip_address_access_level: None,
			ip_gateway_access_level: None,
		}
	}
}

static SERVICE_FIELDS: [FieldDef<ServiceRecord>; 4] = [
	FieldDef { name: "service", get: |r| r.service.as_str(), level: |r| r.service_access_level },
	FieldDef { name: "address", get: |r| r.address.as_str(), level: |r| r.address_access_level },
	FieldDef { name: "ipAddress", get: |r| r.ip_address.as_str(), level: |r| r.ip_address_access_level },
	FieldDef { name: "ipGateway", get: |r| r.ip_gateway.as_str(), level: |r| r.ip_gateway_access_level },
];

impl Record for ServiceRecord {
	const ENDPOINT: &'static str = "ServiceData";
	const ID_PREFIX: &'static str = "SD";

	fn fields() -> &'static [FieldDef<Self>] {
		&SERVICE_FIELDS
	}

	fn id(&self) -> &str {
		&self.id
	}

	fn set_id(&mut self, id: String) {
		self.id = id;
	}

	fn access_level(&self) -> AccessLevel {
		self.access_level
	}

	fn validate(&self) -> ClResult<()> {
		require_len("service", &self.service, 2, 100)?;
		require_len("address", &self.address, 5, 200)?;
		if !is_valid_ipv4(&self.ip_address) {
			return Err(Error::ValidationError(format!(
				"Invalid IP Address format: {}",
				self.ip_address
			)));
		}
		if !is_valid_ipv4(&self.ip_gateway) {
			return Err(Error::ValidationError(format!(
				"Invalid IP Gateway format: {}",
				self.ip_gateway
			)));
		}
		Ok(())
	}
}


// vim: ts=4
