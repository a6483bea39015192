//! Transistor Selection System
//!
//! Matches a load current to a switching transistor from a threshold catalog.
//! The builtin catalog is embedded JSON (see `parts/transistors.json`); users
//! can supply their own catalog file without recompiling.

pub mod catalog;
pub mod schema;

// Re-exports for convenience
pub use catalog::TransistorCatalog;
pub use schema::{TransistorPart, TransistorPartList};
