//! Catalog loading layer.
//!
//! - `source`: the [`CatalogSource`] trait and an in-memory implementation
//! - `json`: JSON file implementation used by the worker

pub mod json;
pub mod source;

pub use json::JsonCatalog;
pub use source::{CatalogSource, StaticCatalog};
