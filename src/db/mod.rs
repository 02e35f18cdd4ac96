//! Database access layer.

pub mod queries;

pub use queries::*;
