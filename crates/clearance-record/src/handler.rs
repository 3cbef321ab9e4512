//! Record HTTP handlers
//!
//! The CRUD and filter handlers are generic over the record kind and are
//! mounted once per kind. Lookups differ only in their request body.

use axum::{
	Json,
	extract::{Path, State, rejection::JsonRejection},
	http::StatusCode,
};
use serde::Serialize;
use serde_json::Value;

use clearance_core::StoredRecord;
use clearance_core::lookup;
use clearance_types::record::{ServiceRecord, UserRecord};
use clearance_types::store_adapter::RecordAdapter;
use clearance_types::types::{
	ClearanceRequest, MessageResponse, ServiceLookupRequest, UserLookupRequest,
};

use crate::generator;
use crate::prelude::*;

/// Regenerates the synthetic records of one kind
pub trait Generate: StoredRecord {
	/// Noun used in messages
	const NOUN: &'static str;

	fn generate(count: usize) -> Vec<Self>;
}

impl Generate for UserRecord {
	const NOUN: &'static str = "user";

	fn generate(count: usize) -> Vec<Self> {
		generator::generate_users(count)
	}
}

impl Generate for ServiceRecord {
	const NOUN: &'static str = "service";

	fn generate(count: usize) -> Vec<Self> {
		generator::generate_services(count)
	}
}

/// GET /api/{endpoint} - List all records
pub async fn list_records<R: StoredRecord>(State(app): State<App>) -> ClResult<Json<Vec<R>>> {
	let records = R::adapter(&app).list_records().await?;
	Ok(Json(records))
}

/// POST /api/{endpoint} - Add a record
pub async fn post_record<R: StoredRecord>(
	State(app): State<App>,
	body: Result<Json<R>, JsonRejection>,
) -> ClResult<(StatusCode, Json<R>)> {
	let Json(record) = body?;
	record.validate()?;
	let created = R::adapter(&app).create_record(record).await?;
	info!(endpoint = R::ENDPOINT, id = created.id(), "Record added");
	Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/{endpoint}/{id} - Replace a record, keeping its id
pub async fn put_record<R: StoredRecord>(
	State(app): State<App>,
	Path(id): Path<String>,
	body: Result<Json<R>, JsonRejection>,
) -> ClResult<Json<R>> {
	let Json(record) = body?;
	record.validate()?;
	let updated = R::adapter(&app).update_record(&id, record).await?;
	info!(endpoint = R::ENDPOINT, id = %id, "Record updated");
	Ok(Json(updated))
}

/// DELETE /api/{endpoint}/{id} - Delete a record
pub async fn delete_record<R: StoredRecord>(
	State(app): State<App>,
	Path(id): Path<String>,
) -> ClResult<StatusCode> {
	R::adapter(&app).delete_record(&id).await?;
	info!(endpoint = R::ENDPOINT, id = %id, "Record deleted");
	Ok(StatusCode::NO_CONTENT)
}

/// POST /api/{endpoint}/generate - Replace all records with fresh synthetic ones
pub async fn post_generate<R: Generate>(
	State(app): State<App>,
) -> ClResult<Json<MessageResponse>> {
	let count = app.opts.generate_count;
	R::adapter(&app).replace_records(R::generate(count)).await?;
	info!(endpoint = R::ENDPOINT, count = count, "Records regenerated");
	Ok(Json(MessageResponse {
		message: format!("{} new {} records generated successfully.", count, R::NOUN),
	}))
}

/// POST /api/{endpoint}/accesslevel/{accessLevel} - Every record, filtered
pub async fn post_filter_all<R: StoredRecord>(
	State(app): State<App>,
	Path(access_level): Path<String>,
) -> ClResult<Json<Vec<Value>>> {
	let requester: AccessLevel = access_level.parse()?;
	let records = lookup::filter_records::<R>(&app, requester).await?;
	Ok(Json(records))
}

/// GET /api/{endpoint}/clearance/{accessLevel} - Records cleared as a whole
pub async fn get_within_clearance<R: StoredRecord>(
	State(app): State<App>,
	Path(access_level): Path<String>,
) -> ClResult<Json<Vec<R>>> {
	let requester: AccessLevel = access_level.parse()?;
	let records = lookup::records_within_clearance::<R>(&app, requester).await?;
	Ok(Json(records))
}

/// POST /api/UserData/request - One user by email, filtered
pub async fn post_user_request(
	State(app): State<App>,
	body: Result<Json<UserLookupRequest>, JsonRejection>,
) -> ClResult<Json<Value>> {
	let Json(req) = body?;
	if req.user_email.trim().is_empty() {
		return Err(Error::ValidationError("userEmail is required".into()));
	}
	let record =
		lookup::request_record::<UserRecord>(&app, &req.user_email, req.requester_access_level)
			.await?;
	Ok(Json(record))
}

/// POST /api/ServiceData/request - One service by IP address, filtered
pub async fn post_service_request(
	State(app): State<App>,
	body: Result<Json<ServiceLookupRequest>, JsonRejection>,
) -> ClResult<Json<Value>> {
	let Json(req) = body?;
	if req.ip_address.trim().is_empty() {
		return Err(Error::ValidationError("ipAddress is required".into()));
	}
	let record =
		lookup::request_record::<ServiceRecord>(&app, &req.ip_address, req.requester_access_level)
			.await?;
	Ok(Json(record))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResponse {
	pub user_data: Vec<UserRecord>,
	pub service_data: Vec<ServiceRecord>,
}

/// POST /api/ServiceData/combined - Users and services cleared as a whole
pub async fn post_combined(
	State(app): State<App>,
	body: Result<Json<ClearanceRequest>, JsonRejection>,
) -> ClResult<Json<CombinedResponse>> {
	let Json(req) = body?;
	let requester = req.requester_access_level;
	let user_data = lookup::records_within_clearance::<UserRecord>(&app, requester).await?;
	let service_data = lookup::records_within_clearance::<ServiceRecord>(&app, requester).await?;
	debug!(
		requester = %requester,
		users = user_data.len(),
		services = service_data.len(),
		"Combined clearance list"
	);
	Ok(Json(CombinedResponse { user_data, service_data }))
}

// vim: ts=4
