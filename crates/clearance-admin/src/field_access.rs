//! Field access settings handlers

use axum::{
	Json,
	extract::{Path, State, rejection::JsonRejection},
	http::StatusCode,
};

use clearance_types::field_access::{ENDPOINTS, FieldAccessSetting, NewFieldAccess};
use clearance_types::store_adapter::PolicyAdapter;
use clearance_types::types::{AccessLevelUpdate, IdResponse, MessageResponse};

use crate::prelude::*;

/// GET /api/FieldAccess - List all settings
pub async fn list_settings(State(app): State<App>) -> ClResult<Json<Vec<FieldAccessSetting>>> {
	let settings = app.policy_adapter.list_settings().await?;
	Ok(Json(settings))
}

/// POST /api/FieldAccess - Add a setting, returns its id
pub async fn post_setting(
	State(app): State<App>,
	body: Result<Json<NewFieldAccess>, JsonRejection>,
) -> ClResult<(StatusCode, Json<IdResponse>)> {
	let Json(setting) = body?;
	setting.validate()?;
	if !ENDPOINTS.contains(&setting.endpoint.as_str()) {
		warn!(endpoint = %setting.endpoint, "Setting added for an unknown endpoint");
	}

	let endpoint = setting.endpoint.clone();
	let field_name = setting.field_name.clone();
	let access_level = setting.access_level;
	let id = app.policy_adapter.create_setting(setting).await?;
	info!(
		id = id,
		endpoint = %endpoint,
		field = %field_name,
		access_level = %access_level,
		"Field access setting added"
	);
	Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// PUT /api/FieldAccess/{id} - Change the level of a setting
pub async fn put_setting(
	State(app): State<App>,
	Path(id): Path<u32>,
	body: Result<Json<AccessLevelUpdate>, JsonRejection>,
) -> ClResult<StatusCode> {
	let Json(update) = body?;
	app.policy_adapter.update_setting(id, update.access_level).await?;
	info!(id = id, access_level = %update.access_level, "Field access setting updated");
	Ok(StatusCode::OK)
}

/// DELETE /api/FieldAccess/{id}
pub async fn delete_setting(
	State(app): State<App>,
	Path(id): Path<u32>,
) -> ClResult<StatusCode> {
	app.policy_adapter.delete_setting(id).await?;
	info!(id = id, "Field access setting deleted");
	Ok(StatusCode::NO_CONTENT)
}

/// POST /api/FieldAccess/generate - Reset to the built-in defaults
pub async fn post_reset(State(app): State<App>) -> ClResult<Json<MessageResponse>> {
	let settings = app.policy_adapter.reset_settings().await?;
	info!(count = settings.len(), "Field access settings reset");
	Ok(Json(MessageResponse {
		message: "Field access settings reset to default successfully.".into(),
	}))
}

/// GET /api/FieldAccess/fields/{endpoint} - Governed fields of an endpoint
pub async fn get_fields(
	State(app): State<App>,
	Path(endpoint): Path<String>,
) -> ClResult<Json<Vec<&'static str>>> {
	Ok(Json(app.policy_adapter.fields_for(&endpoint)))
}

/// GET /api/FieldAccess/available-fields/{endpoint} - Governed fields without a setting
pub async fn get_available_fields(
	State(app): State<App>,
	Path(endpoint): Path<String>,
) -> ClResult<Json<Vec<&'static str>>> {
	let fields = app.policy_adapter.available_fields(&endpoint).await?;
	if fields.is_empty() {
		debug!(endpoint = %endpoint, "No unconfigured fields");
		return Err(Error::NotFound);
	}
	Ok(Json(fields))
}

// vim: ts=4
