use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use catalog_core::document::read_hierarchy;
use catalog_core::flatten::{flatten, write_rows};

use crate::commands::{load_context, path_or};

/// Flatten the hierarchy document back into delimited rows.
///
/// Writes to `output` when given, otherwise to stdout.
pub fn flatten_command(root: &str, input: Option<&str>, output: Option<&str>) -> Result<()> {
    let ctx = load_context(root)?;
    let input_path = path_or(&ctx.layout.root, input, &ctx.output_path);

    let hierarchy = read_hierarchy(&input_path)
        .with_context(|| format!("Failed to load hierarchy from {}", input_path.display()))?;
    let rows = flatten(&hierarchy, &ctx.catalog);

    match output {
        Some(out) => {
            let out_path = path_or(&ctx.layout.root, Some(out), &ctx.input_path);
            let file = File::create(&out_path)
                .with_context(|| format!("Failed to create {}", out_path.display()))?;
            write_rows(file, &rows, &ctx.catalog)
                .with_context(|| format!("Failed to write rows to {}", out_path.display()))?;
            eprintln!("Wrote {} rows to {}", rows.len(), out_path.display());
        }
        None => write_rows(io::stdout().lock(), &rows, &ctx.catalog)?,
    }

    Ok(())
}
