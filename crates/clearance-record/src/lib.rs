//! Record API handlers and record generation

pub mod generator;
pub mod handler;

mod prelude;

// vim: ts=4
