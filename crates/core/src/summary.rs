//! Node counts and provider coverage for a hierarchy.

use serde::Serialize;

use crate::model::Hierarchy;
use crate::providers::ProviderCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierSummary {
    pub name: String,
    pub domains: usize,
    pub categories: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderCoverage {
    pub id: String,
    pub column: String,
    /// Categories naming a service for this provider.
    pub categories: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub tiers: usize,
    pub domains: usize,
    pub categories: usize,
    pub per_tier: Vec<TierSummary>,
    pub coverage: Vec<ProviderCoverage>,
}

impl CatalogSummary {
    pub fn from_hierarchy(hierarchy: &Hierarchy, catalog: &ProviderCatalog) -> Self {
        let per_tier = hierarchy
            .tiers
            .iter()
            .map(|tier| TierSummary {
                name: tier.name.clone(),
                domains: tier.domains.len(),
                categories: tier.category_count(),
            })
            .collect();

        let coverage = catalog
            .providers()
            .iter()
            .map(|provider| ProviderCoverage {
                id: provider.id.clone(),
                column: provider.column.clone(),
                categories: hierarchy
                    .categories()
                    .filter(|(_, _, c)| c.services.contains_key(&provider.id))
                    .count(),
            })
            .collect();

        Self {
            tiers: hierarchy.tier_count(),
            domains: hierarchy.domain_count(),
            categories: hierarchy.category_count(),
            per_tier,
            coverage,
        }
    }
}
