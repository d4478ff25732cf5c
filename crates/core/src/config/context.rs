use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::{load_config, resolve_against, CatalogLayout, ConverterConfig};
use crate::providers::ProviderCatalog;

/// Convenience wrapper bundling layout, effective config, and resolved paths.
#[derive(Debug, Clone)]
pub struct CatalogContext {
    pub layout: CatalogLayout,
    pub config: ConverterConfig,
    pub catalog: ProviderCatalog,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl CatalogContext {
    /// Load the config (or defaults) for a given root.
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self> {
        let layout = CatalogLayout::new(root);
        let config = load_config(&layout)?;
        let catalog = config.catalog();
        let input_path = resolve_against(&layout.root, &config.input);
        let output_path = resolve_against(&layout.root, &config.output);
        Ok(Self { layout, config, catalog, input_path, output_path })
    }
}
