use anyhow::{Context, Result};
use catalog_core::document::read_hierarchy;
use catalog_core::summary::CatalogSummary;

use crate::commands::{load_context, path_or};

/// Print node counts and per-provider coverage of the hierarchy document.
pub fn summary_command(root: &str, input: Option<&str>, json: bool) -> Result<()> {
    let ctx = load_context(root)?;
    let input_path = path_or(&ctx.layout.root, input, &ctx.output_path);
    let hierarchy = read_hierarchy(&input_path)
        .with_context(|| format!("Failed to load hierarchy from {}", input_path.display()))?;
    let summary = CatalogSummary::from_hierarchy(&hierarchy, &ctx.catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Catalog Summary");
    println!("===============");
    println!("Document: {}", input_path.display());
    println!("Tiers: {}", summary.tiers);
    println!("Domains: {}", summary.domains);
    println!("Categories: {}", summary.categories);
    if !summary.per_tier.is_empty() {
        println!("\nBy tier:");
        for tier in &summary.per_tier {
            println!("- {}: {} domains, {} categories", tier.name, tier.domains, tier.categories);
        }
    }
    println!("\nProvider coverage:");
    for provider in &summary.coverage {
        println!(
            "- {} ({}): {}/{}",
            provider.column, provider.id, provider.categories, summary.categories
        );
    }
    Ok(())
}
