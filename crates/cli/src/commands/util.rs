use std::path::{Path, PathBuf};

use anyhow::Result;
use catalog_core::config::{resolve_against, CatalogContext};

use crate::canonicalize_or_current;

/// Canonicalize `root` and load its catalog context.
pub fn load_context(root: &str) -> Result<CatalogContext> {
    let root_path = canonicalize_or_current(root)?;
    CatalogContext::from_root(&root_path)
}

/// Use `flag` (resolved against the root) when given, else `configured`.
pub fn path_or(root: &Path, flag: Option<&str>, configured: &Path) -> PathBuf {
    match flag {
        Some(p) => resolve_against(root, p),
        None => configured.to_path_buf(),
    }
}
