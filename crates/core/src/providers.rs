//! Provider catalog: which source columns name a cloud provider and which
//! short identifier each one maps to in the generated document.

use serde::{Deserialize, Serialize};

/// Built-in provider columns, in output order.
pub const DEFAULT_PROVIDERS: &[(&str, &str)] = &[
    ("AWS", "aws"),
    ("Azure", "azure"),
    ("Google Cloud", "gcp"),
    ("Oracle Cloud (OCI)", "oracle"),
    ("Alibaba Cloud", "alibaba"),
    ("Tencent Cloud", "tencent"),
    ("IBM Cloud", "ibm"),
];

/// A single provider: the column header it is read from and its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Column header in the source file (e.g. `Google Cloud`).
    pub column: String,
    /// Key used in a category's `services` mapping (e.g. `gcp`).
    pub id: String,
}

impl Provider {
    pub fn new(column: impl Into<String>, id: impl Into<String>) -> Self {
        Self { column: column.into(), id: id.into() }
    }
}

/// Ordered list of recognised providers.
///
/// Order matters: it fixes the key order of every `services` mapping and the
/// column order of flattened output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderCatalog {
    providers: Vec<Provider>,
}

impl ProviderCatalog {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Look up a provider by its output identifier.
    pub fn by_id(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    /// Position of a provider identifier in catalog order.
    pub fn position_of_id(&self, id: &str) -> Option<usize> {
        self.providers.iter().position(|p| p.id == id)
    }

    /// Column headers in catalog order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|p| p.column.as_str())
    }
}

impl Default for ProviderCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_PROVIDERS.iter().map(|(column, id)| Provider::new(*column, *id)).collect())
    }
}
