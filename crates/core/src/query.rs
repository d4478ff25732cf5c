//! Filtering and faceting over flattened rows.

use std::collections::BTreeSet;

use crate::flatten::FlatRow;

/// Row filter: free-text search plus optional exact tier/domain selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    pub search: String,
    pub tier: Option<String>,
    pub domain: Option<String>,
}

impl RowFilter {
    pub fn matches(&self, row: &FlatRow) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search =
            needle.is_empty() || row.values().any(|v| v.to_lowercase().contains(&needle));
        let matches_tier = self.tier.as_deref().map_or(true, |t| row.tier == t);
        let matches_domain = self.domain.as_deref().map_or(true, |d| row.domain == d);
        matches_search && matches_tier && matches_domain
    }

    /// Rows that pass the filter, in input order.
    pub fn apply<'r>(&self, rows: &'r [FlatRow]) -> Vec<&'r FlatRow> {
        rows.iter().filter(|row| self.matches(row)).collect()
    }
}

/// Sorted distinct non-empty tier names.
pub fn unique_tiers(rows: &[FlatRow]) -> Vec<String> {
    rows.iter()
        .map(|r| r.tier.as_str())
        .filter(|t| !t.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Sorted distinct non-empty domain names, optionally within one tier.
pub fn unique_domains(rows: &[FlatRow], tier: Option<&str>) -> Vec<String> {
    rows.iter()
        .filter(|r| tier.map_or(true, |t| r.tier == t))
        .map(|r| r.domain.as_str())
        .filter(|d| !d.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
