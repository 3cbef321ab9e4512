//! In-memory number to color map
//!
//! Lives for the lifetime of the process and starts from the built-in
//! mappings on every start.

use parking_lot::RwLock;

use clearance_types::color::{ColorMapping, NewColorMapping, UNKNOWN_COLOR, default_mappings};

use crate::prelude::*;

#[derive(Debug)]
pub struct ColorMap {
	mappings: RwLock<Vec<ColorMapping>>,
}

impl ColorMap {
	pub fn new() -> Self {
		Self { mappings: RwLock::new(default_mappings()) }
	}

	/// Color of the first mapping for `number`, or "unknown"
	pub fn color_for(&self, number: i32) -> String {
		self.mappings
			.read()
			.iter()
			.find(|m| m.number == number)
			.map_or_else(|| UNKNOWN_COLOR.to_string(), |m| m.color.clone())
	}

	pub fn list(&self) -> Vec<ColorMapping> {
		self.mappings.read().clone()
	}

	pub fn add(&self, mapping: NewColorMapping) -> ColorMapping {
		let mut mappings = self.mappings.write();
		let id = mappings.iter().map(|m| m.id).max().map_or(1, |max| max + 1);
		let created = ColorMapping { id, number: mapping.number, color: mapping.color };
		mappings.push(created.clone());
		created
	}

	pub fn update(&self, id: u32, mapping: NewColorMapping) -> ClResult<ColorMapping> {
		let mut mappings = self.mappings.write();
		let existing = mappings.iter_mut().find(|m| m.id == id).ok_or(Error::NotFound)?;
		existing.number = mapping.number;
		existing.color = mapping.color;
		Ok(existing.clone())
	}

	pub fn delete(&self, id: u32) -> ClResult<()> {
		let mut mappings = self.mappings.write();
		let pos = mappings.iter().position(|m| m.id == id).ok_or(Error::NotFound)?;
		mappings.remove(pos);
		Ok(())
	}
}

impl Default for ColorMap {
	fn default() -> Self {
		Self::new()
	}
}


// vim: ts=4
