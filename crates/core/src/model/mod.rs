//! Hierarchical document model: Tier → Domain → Category.
//!
//! Field order on each node is the order keys appear in the rendered
//! document (`id`, `name`, then children).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::slug::slugify;

/// Provider identifier → service name, in provider catalog order.
pub type Services = IndexMap<String, String>;

/// The full output document: Tier nodes in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hierarchy {
    pub tiers: Vec<Tier>,
}

impl Hierarchy {
    pub fn new(tiers: Vec<Tier>) -> Self {
        Self { tiers }
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    pub fn domain_count(&self) -> usize {
        self.tiers.iter().map(|t| t.domains.len()).sum()
    }

    pub fn category_count(&self) -> usize {
        self.tiers.iter().map(Tier::category_count).sum()
    }

    /// First Tier with the given display name.
    pub fn tier(&self, name: &str) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.name == name)
    }

    /// Iterate every category together with its owning tier and domain.
    pub fn categories(&self) -> impl Iterator<Item = (&Tier, &Domain, &Category)> {
        self.tiers.iter().flat_map(|tier| {
            tier.domains.iter().flat_map(move |domain| {
                domain.categories.iter().map(move |category| (tier, domain, category))
            })
        })
    }
}

/// Top-level grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub domains: Vec<Domain>,
}

impl Tier {
    /// Create an empty tier whose id is derived from `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self { id: slugify(&name), name, domains: Vec::new() }
    }

    pub fn category_count(&self) -> usize {
        self.domains.iter().map(|d| d.categories.len()).sum()
    }

    /// First Domain with the given display name.
    pub fn domain(&self, name: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.name == name)
    }
}

/// Second-level grouping, owned by exactly one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Domain {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self { id: slugify(&name), name, categories: Vec::new() }
    }
}

/// Leaf node carrying one source row's provider services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub services: Services,
}

impl Category {
    pub fn new(name: impl Into<String>, services: Services) -> Self {
        let name = name.into();
        Self { id: slugify(&name), name, services }
    }
}
