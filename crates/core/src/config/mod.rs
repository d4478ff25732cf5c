//! Converter configuration and on-disk layout.
//!
//! - `ConverterConfig`: serializable settings (paths, provider catalog).
//! - `CatalogLayout`: computed paths for the metadata directory and config file.
//! - `CatalogContext`: layout + effective config + resolved paths for a root.

mod context;
mod layout;

pub use context::CatalogContext;
pub use layout::CatalogLayout;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::providers::{Provider, ProviderCatalog};
use crate::record::{CATEGORY_COLUMN, DOMAIN_COLUMN, TIER_COLUMN};

pub const DEFAULT_INPUT: &str = "data.csv";
pub const DEFAULT_OUTPUT: &str = "data.yaml";
pub const CONFIG_VERSION: &str = "0.1.0";

/// Serializable converter settings, stored at `.catalog/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Human-friendly catalog name.
    pub name: String,
    /// Config format version.
    pub config_version: String,
    /// Source file, relative to the root unless absolute.
    pub input: String,
    /// Destination document, relative to the root unless absolute.
    pub output: String,
    /// Recognised provider columns, in output order.
    #[serde(default = "default_providers")]
    pub providers: Vec<Provider>,
}

fn default_providers() -> Vec<Provider> {
    ProviderCatalog::default().providers().to_vec()
}

impl ConverterConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config_version: CONFIG_VERSION.to_string(),
            input: DEFAULT_INPUT.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            providers: default_providers(),
        }
    }

    pub fn catalog(&self) -> ProviderCatalog {
        ProviderCatalog::new(self.providers.clone())
    }

    /// Reject provider lists that would make columns or keys ambiguous.
    pub fn validate(&self) -> Result<()> {
        if self.providers.is_empty() {
            bail!("Config must list at least one provider");
        }
        let reserved = [TIER_COLUMN, DOMAIN_COLUMN, CATEGORY_COLUMN];
        let mut columns = HashSet::new();
        let mut ids = HashSet::new();
        for provider in &self.providers {
            if provider.column.trim().is_empty() || provider.id.trim().is_empty() {
                bail!("Provider entries need a non-blank column and id");
            }
            if reserved.contains(&provider.column.as_str()) {
                bail!("Provider column '{}' clashes with a hierarchy column", provider.column);
            }
            if !columns.insert(provider.column.as_str()) {
                bail!("Duplicate provider column '{}'", provider.column);
            }
            if !ids.insert(provider.id.as_str()) {
                bail!("Duplicate provider id '{}'", provider.id);
            }
        }
        Ok(())
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new("service-catalog")
    }
}

/// Load the stored config, or the default when no config file exists.
pub fn load_config(layout: &CatalogLayout) -> Result<ConverterConfig> {
    if !layout.config_path.exists() {
        return Ok(ConverterConfig::default());
    }
    let config_json = std::fs::read_to_string(&layout.config_path).with_context(|| {
        format!("Failed to read catalog config at {}", layout.config_path.display())
    })?;
    let config: ConverterConfig =
        serde_json::from_str(&config_json).context("Failed to parse catalog config JSON")?;
    config.validate().context("Invalid catalog config")?;
    Ok(config)
}

/// Resolve a configured path against `root` unless it is already absolute.
pub fn resolve_against(root: &Path, configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
