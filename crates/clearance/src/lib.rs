//! Clearance is a record service with field level, hierarchical access control.
//!
//! # Features
//!
//! - Two record collections (users, services) persisted as JSON documents
//! - Four ordered clearance tiers
//! - Per-field policy
//!     - global field access table (default)
//!     - or per-record field levels
//! - Partial views with redacted fields for under-cleared requesters
//! - Synthetic record generation for seeding
//! - A small number to color lookup

// Re-export shared types and adapter traits from clearance-types
pub use clearance_types::access_level;
pub use clearance_types::error;
pub use clearance_types::field_access;
pub use clearance_types::record;
pub use clearance_types::store_adapter;
pub use clearance_types::types;
pub use clearance_types::utils;

// Feature crate re-exports
pub use clearance_admin as admin;
pub use clearance_core::color;
pub use clearance_core::filter;
pub use clearance_core::lookup;
pub use clearance_record as records;

// Local modules
pub mod app;
pub mod prelude;
pub mod routes;

pub use app::AppBuilder;

// vim: ts=4
