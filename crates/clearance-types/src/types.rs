//! Request and response bodies shared by the API crates

use serde::{Deserialize, Serialize};

use crate::access_level::AccessLevel;

/// Filtered lookup of a user record by email
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLookupRequest {
	pub requester_access_level: AccessLevel,
	pub user_email: String,
}

/// Filtered lookup of a service record by IP address
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLookupRequest {
	pub requester_access_level: AccessLevel,
	pub ip_address: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearanceRequest {
	pub requester_access_level: AccessLevel,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLevelUpdate {
	pub access_level: AccessLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
	pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdResponse {
	pub id: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub version: &'static str,
}

// vim: ts=4
