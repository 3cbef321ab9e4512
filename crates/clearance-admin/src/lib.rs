//! Field access and color mapping administration handlers

pub mod color;
pub mod field_access;

mod prelude;

// vim: ts=4
