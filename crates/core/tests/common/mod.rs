#![allow(dead_code)]

use catalog_core::{ProviderCatalog, Record};

/// Build a record against the default catalog from `(column, value)` pairs;
/// provider columns not listed are blank.
pub fn row(tier: &str, domain: &str, category: &str, services: &[(&str, &str)]) -> Record {
    let catalog = ProviderCatalog::default();
    let values = catalog
        .columns()
        .map(|column| {
            services
                .iter()
                .find(|(c, _)| *c == column)
                .map(|(_, v)| v.to_string())
                .unwrap_or_default()
        })
        .collect();
    Record::new(tier, domain, category, values)
}

pub const HEADER: &str =
    "Tier,Domain,Category,AWS,Azure,Google Cloud,Oracle Cloud (OCI),Alibaba Cloud,Tencent Cloud,IBM Cloud";
