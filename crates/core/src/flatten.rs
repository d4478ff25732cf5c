//! Hierarchy → flat rows, the inverse of the builder.

use std::io::Write;

use serde::Serialize;
use tracing::warn;

use crate::error::{CatalogError, CatalogResult};
use crate::model::Hierarchy;
use crate::providers::ProviderCatalog;
use crate::record::{CATEGORY_COLUMN, DOMAIN_COLUMN, TIER_COLUMN};

/// One category with its ancestors' names.
///
/// `services` is positional against the catalog used to flatten; an absent
/// service is an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatRow {
    pub tier: String,
    pub domain: String,
    pub category: String,
    pub id: String,
    pub services: Vec<String>,
}

impl FlatRow {
    /// Every searchable value of the row.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        [self.tier.as_str(), self.domain.as_str(), self.category.as_str(), self.id.as_str()]
            .into_iter()
            .chain(self.services.iter().map(String::as_str))
    }
}

/// Flatten a hierarchy into one row per category, in document order.
///
/// Service keys the catalog does not know are dropped with a warning.
pub fn flatten(hierarchy: &Hierarchy, catalog: &ProviderCatalog) -> Vec<FlatRow> {
    hierarchy
        .categories()
        .map(|(tier, domain, category)| {
            let mut services = vec![String::new(); catalog.len()];
            for (key, value) in &category.services {
                match catalog.position_of_id(key) {
                    Some(idx) => services[idx] = value.clone(),
                    None => warn!(
                        category = %category.name,
                        provider = %key,
                        "skipping service for unknown provider"
                    ),
                }
            }
            FlatRow {
                tier: tier.name.clone(),
                domain: domain.name.clone(),
                category: category.name.clone(),
                id: category.id.clone(),
                services,
            }
        })
        .collect()
}

/// Write rows as comma-delimited text readable by [`crate::record::read_records`].
pub fn write_rows<W: Write>(
    writer: W,
    rows: &[FlatRow],
    catalog: &ProviderCatalog,
) -> CatalogResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    let header = [TIER_COLUMN, DOMAIN_COLUMN, CATEGORY_COLUMN].into_iter().chain(catalog.columns());
    out.write_record(header).map_err(CatalogError::CsvWrite)?;

    for row in rows {
        let fields = [row.tier.as_str(), row.domain.as_str(), row.category.as_str()]
            .into_iter()
            .chain(row.services.iter().map(String::as_str));
        out.write_record(fields).map_err(CatalogError::CsvWrite)?;
    }

    out.flush().map_err(|err| CatalogError::CsvWrite(err.into()))
}
