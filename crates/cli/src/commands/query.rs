use anyhow::{Context, Result};
use catalog_core::document::read_hierarchy;
use catalog_core::flatten::{flatten, FlatRow};
use catalog_core::query::{unique_domains, unique_tiers, RowFilter};
use catalog_core::ProviderCatalog;
use serde::Serialize;

use crate::commands::{load_context, path_or};

#[derive(Debug, Serialize)]
pub struct QueryHit {
    pub tier: String,
    pub domain: String,
    pub category: String,
    pub id: String,
    pub services: Vec<ServiceEntry>,
}

#[derive(Debug, Serialize)]
pub struct ServiceEntry {
    pub provider: String,
    pub service: String,
}

impl QueryHit {
    fn from_row(row: &FlatRow, catalog: &ProviderCatalog) -> Self {
        let services = catalog
            .providers()
            .iter()
            .zip(&row.services)
            .filter(|(_, service)| !service.is_empty())
            .map(|(provider, service)| ServiceEntry {
                provider: provider.column.clone(),
                service: service.clone(),
            })
            .collect();
        Self {
            tier: row.tier.clone(),
            domain: row.domain.clone(),
            category: row.category.clone(),
            id: row.id.clone(),
            services,
        }
    }
}

/// List categories matching `filter`.
pub fn query_command(root: &str, input: Option<&str>, filter: RowFilter, json: bool) -> Result<()> {
    let ctx = load_context(root)?;
    let input_path = path_or(&ctx.layout.root, input, &ctx.output_path);
    let hierarchy = read_hierarchy(&input_path)
        .with_context(|| format!("Failed to load hierarchy from {}", input_path.display()))?;

    let rows = flatten(&hierarchy, &ctx.catalog);
    let hits: Vec<QueryHit> =
        filter.apply(&rows).into_iter().map(|row| QueryHit::from_row(row, &ctx.catalog)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    println!("Matched {} of {} categories", hits.len(), rows.len());
    if hits.is_empty() {
        println!("Tiers: {}", unique_tiers(&rows).join(", "));
        println!("Domains: {}", unique_domains(&rows, filter.tier.as_deref()).join(", "));
        return Ok(());
    }
    for hit in hits {
        println!("\n{} > {} > {} ({})", hit.tier, hit.domain, hit.category, hit.id);
        if hit.services.is_empty() {
            println!("  (no services)");
        }
        for entry in hit.services {
            println!("  {}: {}", entry.provider, entry.service);
        }
    }
    Ok(())
}
