use anyhow::{Context, Result};
use catalog_core::convert::convert_file;

use crate::commands::{load_context, path_or};

/// Convert the source spreadsheet into the hierarchy document.
pub fn convert_command(root: &str, input: Option<&str>, output: Option<&str>) -> Result<()> {
    let ctx = load_context(root)?;
    let input_path = path_or(&ctx.layout.root, input, &ctx.input_path);
    let output_path = path_or(&ctx.layout.root, output, &ctx.output_path);

    let report = convert_file(&input_path, &output_path, &ctx.catalog).with_context(|| {
        format!("Failed to convert {} into {}", input_path.display(), output_path.display())
    })?;

    println!("Conversion complete.");
    println!("  Input: {}", report.input.display());
    println!("  Output: {}", report.output.display());
    println!("  Records: {}", report.records);
    println!(
        "  Tiers: {}, domains: {}, categories: {}",
        report.tiers, report.domains, report.categories
    );

    Ok(())
}
