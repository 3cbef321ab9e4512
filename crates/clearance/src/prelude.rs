pub use clearance_core::prelude::*;

// vim: ts=4
