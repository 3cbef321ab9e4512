//! Core of the Clearance record service.
//!
//! Holds the shared application state, the access filter engine and the
//! color map. The API crates build on these without touching storage
//! details.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod color;
pub mod filter;
pub mod lookup;
pub mod prelude;

pub use app::{Adapters, App, AppBuilderOpts, AppState, StoredRecord};
pub use color::ColorMap;
pub use filter::{FieldView, Policy, PolicySource, PolicyTable, Projection, RedactionStyle};

// vim: ts=4
