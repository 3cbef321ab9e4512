//! Number to color mappings

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Color reported for numbers without a mapping
pub const UNKNOWN_COLOR: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorMapping {
	pub id: u32,
	pub number: i32,
	pub color: String,
}

/// Input of an insert or update, the id comes from the store or the path
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewColorMapping {
	pub number: i32,
	pub color: String,
}

impl NewColorMapping {
	pub fn validate(&self) -> ClResult<()> {
		if self.color.trim().is_empty() {
			return Err(Error::ValidationError("color is required".into()));
		}
		Ok(())
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorResponse {
	pub color: String,
}

/// Built-in mappings: 1 green, 2 yellow, 3 red
pub fn default_mappings() -> Vec<ColorMapping> {
	[(1, "green"), (2, "yellow"), (3, "red")]
		.into_iter()
		.zip(1..)
		.map(|((number, color), id)| ColorMapping { id, number, color: color.into() })
		.collect()
}


// vim: ts=4
