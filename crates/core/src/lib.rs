//! catalog-core
//!
//! Core library for turning a flat spreadsheet of equivalent cloud-provider
//! services into a Tier → Domain → Category hierarchy.
//!
//! This crate defines the record schema and reader, the hierarchy builder,
//! the YAML document writer/reader, and the flattening, query, and summary
//! views used by frontends.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends.

pub mod builder;
pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod flatten;
pub mod model;
pub mod providers;
pub mod query;
pub mod record;
pub mod slug;
pub mod summary;

pub use builder::{build_hierarchy, HierarchyBuilder};
pub use error::{CatalogError, CatalogResult, ErrorKind};
pub use model::{Category, Domain, Hierarchy, Services, Tier};
pub use providers::{Provider, ProviderCatalog};
pub use record::Record;
pub use slug::slugify;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
