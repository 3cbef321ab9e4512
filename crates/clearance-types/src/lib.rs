//! Shared types, store adapter traits, and core utilities for Clearance.
//!
//! This crate holds everything the server crates and the storage adapters
//! agree on: the clearance tiers, the record kinds with their governed
//! fields, the field access settings, and the adapter traits the stores
//! implement.

pub mod access_level;
pub mod color;
pub mod error;
pub mod field_access;
pub mod prelude;
pub mod record;
pub mod store_adapter;
pub mod types;
pub mod utils;

// vim: ts=4
