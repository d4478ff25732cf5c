use std::fs;

use anyhow::{bail, Context, Result};
use catalog_core::config::{CatalogLayout, ConverterConfig};

use crate::commands::load_context;
use crate::{canonicalize_or_current, infer_catalog_name};

/// Write the default converter config under `<root>/.catalog/config.json`.
pub fn init_config_command(root: &str, force: bool) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let layout = CatalogLayout::new(&root_path);

    if layout.config_path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            layout.config_path.display()
        );
    }

    fs::create_dir_all(&layout.meta_dir)
        .with_context(|| format!("Failed to create meta dir: {}", layout.meta_dir.display()))?;

    let config = ConverterConfig::new(infer_catalog_name(&root_path));
    let json = serde_json::to_string_pretty(&config)?;
    fs::write(&layout.config_path, json).with_context(|| {
        format!("Failed to write catalog config: {}", layout.config_path.display())
    })?;

    println!("Initialized catalog config:");
    println!("  Name: {}", config.name);
    println!("  Root: {}", layout.root.display());
    println!("  Config: {}", layout.config_path.display());
    println!("  Input: {}", config.input);
    println!("  Output: {}", config.output);
    println!("  Providers: {}", config.providers.len());

    Ok(())
}

/// Print the effective provider catalog for `root`.
pub fn list_providers_command(root: &str, json: bool) -> Result<()> {
    let ctx = load_context(root)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ctx.catalog)?);
        return Ok(());
    }

    println!("Providers ({}):", ctx.catalog.len());
    for provider in ctx.catalog.providers() {
        println!("- {} -> {}", provider.column, provider.id);
    }
    Ok(())
}
