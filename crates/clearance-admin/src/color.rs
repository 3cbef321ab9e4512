//! Color mapping handlers

use axum::{
	Json,
	extract::{Path, State, rejection::JsonRejection},
	http::StatusCode,
};

use clearance_types::color::{ColorMapping, ColorResponse, NewColorMapping};

use crate::prelude::*;

/// GET /api/Color/{number} - Color of a number, "unknown" when unmapped
pub async fn get_color(
	State(app): State<App>,
	Path(number): Path<String>,
) -> ClResult<Json<ColorResponse>> {
	let number: i32 = number
		.trim()
		.parse()
		.map_err(|_| Error::ValidationError(format!("not a number: {}", number)))?;
	Ok(Json(ColorResponse { color: app.colors.color_for(number) }))
}

/// GET /api/Color/mappings
pub async fn list_mappings(State(app): State<App>) -> Json<Vec<ColorMapping>> {
	Json(app.colors.list())
}

/// POST /api/Color/mappings
pub async fn post_mapping(
	State(app): State<App>,
	body: Result<Json<NewColorMapping>, JsonRejection>,
) -> ClResult<(StatusCode, Json<ColorMapping>)> {
	let Json(mapping) = body?;
	mapping.validate()?;
	let created = app.colors.add(mapping);
	info!(id = created.id, number = created.number, color = %created.color, "Color mapping added");
	Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/Color/mappings/{id}
pub async fn put_mapping(
	State(app): State<App>,
	Path(id): Path<u32>,
	body: Result<Json<NewColorMapping>, JsonRejection>,
) -> ClResult<Json<ColorMapping>> {
	let Json(mapping) = body?;
	mapping.validate()?;
	let updated = app.colors.update(id, mapping)?;
	info!(id = id, number = updated.number, color = %updated.color, "Color mapping updated");
	Ok(Json(updated))
}

/// DELETE /api/Color/mappings/{id}
pub async fn delete_mapping(State(app): State<App>, Path(id): Path<u32>) -> ClResult<StatusCode> {
	app.colors.delete(id)?;
	info!(id = id, "Color mapping deleted");
	Ok(StatusCode::NO_CONTENT)
}

// vim: ts=4
