//! Folds flat records into a [`Hierarchy`].
//!
//! Tiers are keyed by trimmed display name; domains by trimmed display name
//! within their tier. Categories are never merged: each record appends one.
//! Order at every level is first-seen order.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Category, Domain, Hierarchy, Services, Tier};
use crate::providers::ProviderCatalog;
use crate::record::Record;

/// Accumulates records into a hierarchy.
///
/// The name indexes point into the ordered vectors, so lookups stay O(1)
/// while sibling order is whatever order nodes were first pushed in.
#[derive(Debug)]
pub struct HierarchyBuilder<'a> {
    catalog: &'a ProviderCatalog,
    tiers: Vec<Tier>,
    tier_index: HashMap<String, usize>,
    domain_index: HashMap<(usize, String), usize>,
    records: usize,
}

impl<'a> HierarchyBuilder<'a> {
    pub fn new(catalog: &'a ProviderCatalog) -> Self {
        Self {
            catalog,
            tiers: Vec::new(),
            tier_index: HashMap::new(),
            domain_index: HashMap::new(),
            records: 0,
        }
    }

    /// Number of records folded in so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Fold one record into the hierarchy.
    ///
    /// Fails without modifying the builder if the record does not carry a
    /// value for every catalog provider.
    pub fn push(&mut self, record: &Record) -> CatalogResult<()> {
        let record_no = self.records + 1;
        if record.provider_values.len() < self.catalog.len() {
            let missing = &self.catalog.providers()[record.provider_values.len()];
            return Err(CatalogError::MissingField {
                record: record_no,
                field: missing.column.clone(),
            });
        }

        let services = self.services_for(record);
        let tier_idx = self.tier_slot(record.tier.trim());
        let domain_idx = self.domain_slot(tier_idx, record.domain.trim());

        self.tiers[tier_idx].domains[domain_idx]
            .categories
            .push(Category::new(record.category.trim(), services));
        self.records = record_no;
        Ok(())
    }

    /// Consume the builder, returning the accumulated hierarchy.
    pub fn finish(self) -> Hierarchy {
        Hierarchy::new(self.tiers)
    }

    fn tier_slot(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.tier_index.get(name) {
            return idx;
        }
        let idx = self.tiers.len();
        let tier = Tier::new(name);
        debug!(tier = %tier.name, id = %tier.id, "new tier");
        self.tiers.push(tier);
        self.tier_index.insert(name.to_string(), idx);
        idx
    }

    fn domain_slot(&mut self, tier_idx: usize, name: &str) -> usize {
        let key = (tier_idx, name.to_string());
        if let Some(&idx) = self.domain_index.get(&key) {
            return idx;
        }
        let tier = &mut self.tiers[tier_idx];
        let idx = tier.domains.len();
        let domain = Domain::new(name);
        debug!(tier = %tier.name, domain = %domain.name, id = %domain.id, "new domain");
        tier.domains.push(domain);
        self.domain_index.insert(key, idx);
        idx
    }

    fn services_for(&self, record: &Record) -> Services {
        self.catalog
            .providers()
            .iter()
            .zip(&record.provider_values)
            .filter_map(|(provider, value)| {
                let value = value.trim();
                (!value.is_empty()).then(|| (provider.id.clone(), value.to_string()))
            })
            .collect()
    }
}

/// Build a hierarchy from records in order. Aborts on the first bad record.
pub fn build_hierarchy<'r, I>(records: I, catalog: &ProviderCatalog) -> CatalogResult<Hierarchy>
where
    I: IntoIterator<Item = &'r Record>,
{
    let mut builder = HierarchyBuilder::new(catalog);
    for record in records {
        builder.push(record)?;
    }
    Ok(builder.finish())
}
