//! Error type shared by every Clearance crate

use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Record, setting or lookup key does not exist
	NotFound,
	/// Malformed input (bad email, phone, IP format, missing field)
	ValidationError(String),
	/// Access level string matches no tier
	InvalidAccessLevel(String),
	/// Backing file could not be (de)serialized
	Serialization(String),
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	fn code(&self) -> &'static str {
		match self {
			Error::NotFound => "E-NOT-FOUND",
			Error::ValidationError(_) => "E-VALIDATION",
			Error::InvalidAccessLevel(_) => "E-ACCESS-LEVEL",
			Error::Serialization(_) | Error::Io(_) => "E-STORAGE",
			Error::Internal(_) => "E-INTERNAL",
		}
	}

	fn status(&self) -> StatusCode {
		match self {
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::ValidationError(_) | Error::InvalidAccessLevel(_) => StatusCode::BAD_REQUEST,
			Error::Serialization(_) | Error::Internal(_) | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Serialization(err.to_string())
	}
}

const ACCESS_LEVEL_MARKER: &str = "invalid access level: ";

/// Unreadable request bodies keep the JSON error contract. A bad tier name
/// surfaces from the access level deserializer with its own message.
impl From<JsonRejection> for Error {
	fn from(rejection: JsonRejection) -> Self {
		let text = rejection.body_text();
		match text.split_once(ACCESS_LEVEL_MARKER) {
			Some((_, rest)) => {
				let value = rest.split(" at line ").next().unwrap_or(rest);
				Self::InvalidAccessLevel(value.to_string())
			}
			None => Self::ValidationError(text),
		}
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::ValidationError(msg) => write!(f, "validation failed: {}", msg),
			Error::InvalidAccessLevel(value) => write!(f, "{}{}", ACCESS_LEVEL_MARKER, value),
			Error::Serialization(msg) => write!(f, "serialization error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = self.status();
		// Storage details stay in the log, the caller gets an opaque message
		let message = match &self {
			Error::NotFound => "Not found".to_string(),
			Error::ValidationError(_) | Error::InvalidAccessLevel(_) => self.to_string(),
			Error::Serialization(_) | Error::Internal(_) | Error::Io(_) => {
				tracing::error!(error = %self, "Request failed");
				"Internal server error".to_string()
			}
		};
		let body = serde_json::json!({
			"error": {
				"code": self.code(),
				"message": message,
			}
		});
		(status, Json(body)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::AccessLevelUpdate;

	#[test]
	fn test_status_mapping() {
		assert_eq!(Error::NotFound.status(), StatusCode::NOT_FOUND);
		assert_eq!(Error::ValidationError("x".into()).status(), StatusCode::BAD_REQUEST);
		assert_eq!(Error::InvalidAccessLevel("x".into()).status(), StatusCode::BAD_REQUEST);
		assert_eq!(
			Error::Io(std::io::Error::other("disk")).status(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
	}

	#[test]
	fn test_into_response_status() {
		let response = Error::NotFound.into_response();
		assert_eq!(response.status(), StatusCode::NOT_FOUND);

		let response = Error::Internal("boom".into()).into_response();
		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn test_json_rejection_mapping() {
		let rejection = Json::<AccessLevelUpdate>::from_bytes(br#"{"accessLevel":"Ultra"}"#)
			.expect_err("unknown tier accepted");
		let err = Error::from(rejection);
		assert!(matches!(&err, Error::InvalidAccessLevel(value) if value == "Ultra"));
		assert_eq!(err.code(), "E-ACCESS-LEVEL");

		let rejection = Json::<AccessLevelUpdate>::from_bytes(br#"{"accessLevel":9}"#)
			.expect_err("unknown rank accepted");
		assert!(matches!(Error::from(rejection), Error::InvalidAccessLevel(value) if value == "9"));

		let rejection = Json::<AccessLevelUpdate>::from_bytes(b"{}").expect_err("missing field accepted");
		let err = Error::from(rejection);
		assert!(matches!(&err, Error::ValidationError(msg) if msg.contains("accessLevel")));
		assert_eq!(err.status(), StatusCode::BAD_REQUEST);

		let rejection = Json::<AccessLevelUpdate>::from_bytes(b"{not json").expect_err("syntax accepted");
		assert_eq!(Error::from(rejection).code(), "E-VALIDATION");
	}
}

// vim: ts=4
