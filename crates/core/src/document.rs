//! YAML rendering and parsing of a [`Hierarchy`].
//!
//! Sequences keep their order and every mapping keeps insertion order.
//! serde_yaml emits non-ASCII text as-is.

use std::fs;
use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::model::Hierarchy;

/// Render a hierarchy as a block-style YAML document.
pub fn hierarchy_to_yaml(hierarchy: &Hierarchy) -> CatalogResult<String> {
    serde_yaml::to_string(hierarchy).map_err(CatalogError::Serialize)
}

/// Parse a document previously produced by [`hierarchy_to_yaml`].
pub fn hierarchy_from_yaml(text: &str) -> CatalogResult<Hierarchy> {
    serde_yaml::from_str(text).map_err(CatalogError::Document)
}

/// Render `hierarchy` fully, then write it to `path`.
pub fn write_hierarchy(path: &Path, hierarchy: &Hierarchy) -> CatalogResult<()> {
    let yaml = hierarchy_to_yaml(hierarchy)?;
    fs::write(path, yaml)
        .map_err(|source| CatalogError::OutputAccess { path: path.to_path_buf(), source })
}

/// Read and parse a hierarchy document from `path`.
pub fn read_hierarchy(path: &Path) -> CatalogResult<Hierarchy> {
    let text = fs::read_to_string(path)
        .map_err(|source| CatalogError::InputAccess { path: path.to_path_buf(), source })?;
    hierarchy_from_yaml(&text)
}
