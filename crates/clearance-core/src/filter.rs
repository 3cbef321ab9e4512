//! Access filter engine
//!
//! Decides which part of a record a requester may see. A requester whose
//! clearance dominates the record's own level gets the record unchanged.
//! Anyone else gets a partial projection: every governed field is checked
//! against its required level and either shown or redacted. Fields without
//! a known requirement are redacted.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::str::FromStr;

use clearance_types::field_access::FieldAccessSetting;
use clearance_types::record::{FieldDef, Record};

use crate::prelude::*;

/// Wire rendering of a redacted field
pub const NO_ACCESS: &str = "No Access";

// RedactionStyle //
//****************//
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RedactionStyle {
	/// Render redacted fields as the string "No Access"
	#[default]
	NoAccess,
	/// Render redacted fields as JSON null
	Null,
}

impl RedactionStyle {
	fn marker(self) -> Value {
		match self {
			RedactionStyle::NoAccess => Value::String(NO_ACCESS.to_string()),
			RedactionStyle::Null => Value::Null,
		}
	}
}

impl FromStr for RedactionStyle {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"no-access" | "noaccess" | "no_access" => Ok(RedactionStyle::NoAccess),
			"null" => Ok(RedactionStyle::Null),
			_ => Err(Error::ValidationError(format!("unknown redaction style: {}", s))),
		}
	}
}

// PolicySource //
//**************//
/// Where field level requirements come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PolicySource {
	/// The field access settings table
	#[default]
	Table,
	/// Per-field levels stored on each record
	RecordAttributes,
}

impl FromStr for PolicySource {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"table" => Ok(PolicySource::Table),
			"record" | "record-attributes" | "record_attributes" => {
				Ok(PolicySource::RecordAttributes)
			}
			_ => Err(Error::ValidationError(format!("unknown policy source: {}", s))),
		}
	}
}

// Policy sources //
//****************//
/// Resolves the clearance required to see one field of a record
pub trait FieldPolicySource<R: Record> {
	fn required_level(&self, record: &R, field: &FieldDef<R>) -> Option<AccessLevel>;
}

/// Snapshot of the field access settings, keyed by endpoint and field name
#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
	levels: HashMap<String, HashMap<String, AccessLevel>>,
}

impl PolicyTable {
	/// Builds the lookup table. For duplicate (endpoint, field) pairs the
	/// last setting in list order wins.
	pub fn from_settings(settings: &[FieldAccessSetting]) -> Self {
		let mut levels: HashMap<String, HashMap<String, AccessLevel>> = HashMap::new();
		for setting in settings {
			levels
				.entry(setting.endpoint.clone())
				.or_default()
				.insert(setting.field_name.clone(), setting.access_level);
		}
		Self { levels }
	}

	pub fn lookup(&self, endpoint: &str, field_name: &str) -> Option<AccessLevel> {
		self.levels.get(endpoint)?.get(field_name).copied()
	}
}

impl<R: Record> FieldPolicySource<R> for PolicyTable {
	fn required_level(&self, _record: &R, field: &FieldDef<R>) -> Option<AccessLevel> {
		self.lookup(R::ENDPOINT, field.name)
	}
}

/// Reads the per-field levels carried by the record itself
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFieldLevels;

impl<R: Record> FieldPolicySource<R> for RecordFieldLevels {
	fn required_level(&self, record: &R, field: &FieldDef<R>) -> Option<AccessLevel> {
		(field.level)(record)
	}
}

/// The policy source selected by configuration
#[derive(Debug, Clone)]
pub enum Policy {
	Table(PolicyTable),
	RecordAttributes(RecordFieldLevels),
}

impl<R: Record> FieldPolicySource<R> for Policy {
	fn required_level(&self, record: &R, field: &FieldDef<R>) -> Option<AccessLevel> {
		match self {
			Policy::Table(table) => table.required_level(record, field),
			Policy::RecordAttributes(levels) => levels.required_level(record, field),
		}
	}
}

// Projection //
//************//
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldView {
	Visible(String),
	Redacted,
}

impl FieldView {
	pub fn is_redacted(&self) -> bool {
		matches!(self, FieldView::Redacted)
	}
}

/// What a requester gets to see of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection<R> {
	/// The stored record, unfiltered
	Full(R),
	/// Governed fields only, some of them redacted
	Partial { access_level: AccessLevel, fields: Vec<(&'static str, FieldView)> },
}

impl<R: Record> Projection<R> {
	pub fn is_full(&self) -> bool {
		matches!(self, Projection::Full(_))
	}

	/// View of a single governed field
	pub fn field(&self, name: &str) -> Option<FieldView> {
		match self {
			Projection::Full(record) => {
				record.field(name).map(|value| FieldView::Visible(value.to_string()))
			}
			Projection::Partial { fields, .. } => {
				fields.iter().find(|(field, _)| *field == name).map(|(_, view)| view.clone())
			}
		}
	}

	pub fn render(&self, style: RedactionStyle) -> ClResult<Value> {
		match self {
			Projection::Full(record) => Ok(serde_json::to_value(record)?),
			Projection::Partial { access_level, fields } => {
				let mut map = Map::with_capacity(fields.len() + 1);
				for (name, view) in fields {
					let value = match view {
						FieldView::Visible(value) => Value::String(value.clone()),
						FieldView::Redacted => style.marker(),
					};
					map.insert((*name).to_string(), value);
				}
				map.insert("accessLevel".to_string(), Value::String(access_level.to_string()));
				Ok(Value::Object(map))
			}
		}
	}
}

// Filter operations //
//*******************//
pub fn filter<R, P>(record: &R, requester: AccessLevel, policy: &P) -> Projection<R>
where
	R: Record,
	P: FieldPolicySource<R>,
{
	if requester.dominates(record.access_level()) {
		debug!(record = record.id(), requester = %requester, "Full access");
		return Projection::Full(record.clone());
	}

	let fields = R::fields()
		.iter()
		.map(|def| {
			let view = match policy.required_level(record, def) {
				Some(required) if requester.dominates(required) => {
					FieldView::Visible((def.get)(record).to_string())
				}
				Some(_) => FieldView::Redacted,
				None => {
					debug!(endpoint = R::ENDPOINT, field = def.name, "Ungoverned field redacted");
					FieldView::Redacted
				}
			};
			(def.name, view)
		})
		.collect::<Vec<_>>();

	debug!(
		record = record.id(),
		requester = %requester,
		redacted = fields.iter().filter(|(_, view)| view.is_redacted()).count(),
		"Partial access"
	);
	Projection::Partial { access_level: record.access_level(), fields }
}

pub fn filter_all<R, P>(records: &[R], requester: AccessLevel, policy: &P) -> Vec<Projection<R>>
where
	R: Record,
	P: FieldPolicySource<R>,
{
	records.iter().map(|record| filter(record, requester, policy)).collect()
}

/// Records whose own level the requester dominates, without field projection
pub fn within_clearance<R: Record>(
	records: impl IntoIterator<Item = R>,
	requester: AccessLevel,
) -> Vec<R> {
	records.into_iter().filter(|record| requester.dominates(record.access_level())).collect()
}


// vim: ts=4
