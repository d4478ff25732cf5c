//! Flat source records and the delimited-text reader that produces them.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::error::{CatalogError, CatalogResult};
use crate::providers::ProviderCatalog;

pub const TIER_COLUMN: &str = "Tier";
pub const DOMAIN_COLUMN: &str = "Domain";
pub const CATEGORY_COLUMN: &str = "Category";

/// One source row.
///
/// `provider_values` is positional: entry `i` is the raw cell for the `i`th
/// provider of the catalog the record was read against. Values are stored
/// untrimmed; the builder normalizes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub tier: String,
    pub domain: String,
    pub category: String,
    pub provider_values: Vec<String>,
}

impl Record {
    pub fn new(
        tier: impl Into<String>,
        domain: impl Into<String>,
        category: impl Into<String>,
        provider_values: Vec<String>,
    ) -> Self {
        Self {
            tier: tier.into(),
            domain: domain.into(),
            category: category.into(),
            provider_values,
        }
    }

    /// Build a record from loose `column → value` pairs.
    ///
    /// Every required column and every provider column must be present;
    /// the first one missing yields [`CatalogError::MissingField`].
    pub fn from_fields<I, K, V>(
        fields: I,
        catalog: &ProviderCatalog,
        record: usize,
    ) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: HashMap<String, String> =
            fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        let mut take = |field: &str| {
            fields
                .remove(field)
                .ok_or_else(|| CatalogError::MissingField { record, field: field.to_string() })
        };

        let tier = take(TIER_COLUMN)?;
        let domain = take(DOMAIN_COLUMN)?;
        let category = take(CATEGORY_COLUMN)?;
        let provider_values =
            catalog.columns().map(&mut take).collect::<CatalogResult<Vec<_>>>()?;

        Ok(Self { tier, domain, category, provider_values })
    }
}

/// Column positions resolved from a header row.
#[derive(Debug, Clone)]
struct ColumnMap {
    tier: usize,
    domain: usize,
    category: usize,
    providers: Vec<(usize, String)>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord, catalog: &ProviderCatalog) -> CatalogResult<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| CatalogError::MissingColumn { column: column.to_string() })
        };

        Ok(Self {
            tier: find(TIER_COLUMN)?,
            domain: find(DOMAIN_COLUMN)?,
            category: find(CATEGORY_COLUMN)?,
            providers: catalog
                .columns()
                .map(|column| find(column).map(|idx| (idx, column.to_string())))
                .collect::<CatalogResult<Vec<_>>>()?,
        })
    }

    fn extract(&self, row: &StringRecord, record: usize) -> CatalogResult<Record> {
        let get = |idx: usize, field: &str| {
            row.get(idx)
                .map(str::to_string)
                .ok_or_else(|| CatalogError::MissingField { record, field: field.to_string() })
        };

        Ok(Record {
            tier: get(self.tier, TIER_COLUMN)?,
            domain: get(self.domain, DOMAIN_COLUMN)?,
            category: get(self.category, CATEGORY_COLUMN)?,
            provider_values: self
                .providers
                .iter()
                .map(|(idx, column)| get(*idx, column))
                .collect::<CatalogResult<Vec<_>>>()?,
        })
    }
}

/// Read every record from comma-delimited text with a header row.
///
/// Rows with a different column count than the header are rejected, as is a
/// header lacking any required or provider column. Nothing is returned
/// unless the whole input is well formed.
pub fn read_records<R: Read>(reader: R, catalog: &ProviderCatalog) -> CatalogResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = reader.headers().map_err(CatalogError::Csv)?.clone();
    let columns = ColumnMap::from_headers(&headers, catalog)?;

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row.map_err(CatalogError::Csv)?;
        records.push(columns.extract(&row, idx + 1)?);
    }
    Ok(records)
}

/// Open `path` and read every record from it.
pub fn read_records_from_path(
    path: &Path,
    catalog: &ProviderCatalog,
) -> CatalogResult<Vec<Record>> {
    let file = File::open(path)
        .map_err(|source| CatalogError::InputAccess { path: path.to_path_buf(), source })?;
    read_records(file, catalog)
}
