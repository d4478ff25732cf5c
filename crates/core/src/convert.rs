//! End-to-end conversion: delimited text in, hierarchy document out.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::builder::build_hierarchy;
use crate::document::write_hierarchy;
use crate::error::CatalogResult;
use crate::model::Hierarchy;
use crate::providers::ProviderCatalog;
use crate::record::read_records_from_path;

/// What a conversion produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
    pub tiers: usize,
    pub domains: usize,
    pub categories: usize,
}

impl ConversionReport {
    fn new(input: &Path, output: &Path, records: usize, hierarchy: &Hierarchy) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            records,
            tiers: hierarchy.tier_count(),
            domains: hierarchy.domain_count(),
            categories: hierarchy.category_count(),
        }
    }
}

/// Read `input`, build the hierarchy, and write it to `output`.
///
/// The document is rendered in full before the output file is touched, so a
/// failure while reading or building leaves no output behind.
pub fn convert_file(
    input: &Path,
    output: &Path,
    catalog: &ProviderCatalog,
) -> CatalogResult<ConversionReport> {
    let records = read_records_from_path(input, catalog)?;
    let hierarchy = build_hierarchy(&records, catalog)?;
    write_hierarchy(output, &hierarchy)?;

    let report = ConversionReport::new(input, output, records.len(), &hierarchy);
    info!(
        records = report.records,
        tiers = report.tiers,
        domains = report.domains,
        categories = report.categories,
        output = %output.display(),
        "wrote hierarchy"
    );
    Ok(report)
}

