//! API routes

use axum::{
	Json, Router,
	routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use clearance_admin::{color, field_access};
use clearance_core::app::VERSION;
use clearance_record::handler::{self, Generate};
use clearance_types::record::{ServiceRecord, UserRecord};
use clearance_types::types::HealthResponse;

use crate::prelude::*;

async fn get_health() -> Json<HealthResponse> {
	Json(HealthResponse { status: "ok", version: VERSION })
}

/// CRUD, regenerate and filter routes shared by every record kind
fn record_routes<R: Generate>(router: Router<App>) -> Router<App> {
	let base = format!("/api/{}", R::ENDPOINT);
	router
		.route(&base, get(handler::list_records::<R>).post(handler::post_record::<R>))
		.route(
			&format!("{}/{{id}}", base),
			put(handler::put_record::<R>).delete(handler::delete_record::<R>),
		)
		.route(&format!("{}/generate", base), post(handler::post_generate::<R>))
		.route(
			&format!("{}/accesslevel/{{access_level}}", base),
			post(handler::post_filter_all::<R>),
		)
		.route(
			&format!("{}/clearance/{{access_level}}", base),
			get(handler::get_within_clearance::<R>),
		)
}

pub fn init(app: App) -> Router {
	let router = Router::new()
		.route("/api/health", get(get_health))
		// Field access settings
		.route(
			"/api/FieldAccess",
			get(field_access::list_settings).post(field_access::post_setting),
		)
		.route(
			"/api/FieldAccess/{id}",
			put(field_access::put_setting).delete(field_access::delete_setting),
		)
		.route("/api/FieldAccess/generate", post(field_access::post_reset))
		.route("/api/FieldAccess/fields/{endpoint}", get(field_access::get_fields))
		.route(
			"/api/FieldAccess/available-fields/{endpoint}",
			get(field_access::get_available_fields),
		)
		// Color mappings
		.route("/api/Color/mappings", get(color::list_mappings).post(color::post_mapping))
		.route(
			"/api/Color/mappings/{id}",
			put(color::put_mapping).delete(color::delete_mapping),
		)
		.route("/api/Color/{number}", get(color::get_color))
		// Lookups
		.route("/api/UserData/request", post(handler::post_user_request))
		.route("/api/ServiceData/request", post(handler::post_service_request))
		.route("/api/ServiceData/combined", post(handler::post_combined));

	let router = record_routes::<UserRecord>(router);
	let router = record_routes::<ServiceRecord>(router);

	router
		.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
