//! Clearance tiers
//!
//! Four totally ordered tiers. A requester whose level is greater than or
//! equal to a requirement dominates it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum AccessLevel {
	/// Accessible by anyone
	Public = 1,
	/// Restricted to authorized personnel
	Confidential = 2,
	/// Highly restricted
	Secret = 3,
	/// Maximum clearance
	TopSecret = 4,
}

impl AccessLevel {
	/// All tiers, lowest first
	pub const ALL: [AccessLevel; 4] = [
		AccessLevel::Public,
		AccessLevel::Confidential,
		AccessLevel::Secret,
		AccessLevel::TopSecret,
	];

	pub fn rank(self) -> u8 {
		self as u8
	}

	pub fn from_rank(rank: u8) -> Result<Self, Error> {
		match rank {
			1 => Ok(AccessLevel::Public),
			2 => Ok(AccessLevel::Confidential),
			3 => Ok(AccessLevel::Secret),
			4 => Ok(AccessLevel::TopSecret),
			_ => Err(Error::InvalidAccessLevel(rank.to_string())),
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			AccessLevel::Public => "Public",
			AccessLevel::Confidential => "Confidential",
			AccessLevel::Secret => "Secret",
			AccessLevel::TopSecret => "TopSecret",
		}
	}

	/// Whether this clearance is sufficient for `required`
	pub fn dominates(self, required: AccessLevel) -> bool {
		self >= required
	}
}

impl std::fmt::Display for AccessLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for AccessLevel {
	type Err = Error;

	/// Case-insensitive tier name
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		AccessLevel::ALL
			.into_iter()
			.find(|level| level.name().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| Error::InvalidAccessLevel(s.to_string()))
	}
}

/// Accepts the tier name (any case) or its integer rank
impl<'de> Deserialize<'de> for AccessLevel {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Repr {
			Name(String),
			Rank(u8),
		}

		match Repr::deserialize(deserializer)? {
			Repr::Name(name) => name.parse().map_err(serde::de::Error::custom),
			Repr::Rank(rank) => AccessLevel::from_rank(rank).map_err(serde::de::Error::custom),
		}
	}
}


// vim: ts=4
