mod common;

use catalog_core::summary::CatalogSummary;
use catalog_core::{build_hierarchy, ProviderCatalog};
use common::row;

#[test]
fn summary_counts_nodes_and_coverage() {
    let catalog = ProviderCatalog::default();
    let records = vec![
        row("Foundational", "Compute", "VMs", &[("AWS", "EC2"), ("Azure", "VMs")]),
        row("Foundational", "Compute", "Containers", &[("AWS", "ECS")]),
        row("Foundational", "Storage", "Blocks", &[]),
        row("Advanced", "AI", "Vision", &[("Google Cloud", "Vision AI")]),
    ];
    let hierarchy = build_hierarchy(&records, &catalog).unwrap();
    let summary = CatalogSummary::from_hierarchy(&hierarchy, &catalog);

    assert_eq!(summary.tiers, 2);
    assert_eq!(summary.domains, 3);
    assert_eq!(summary.categories, 4);

    assert_eq!(summary.per_tier[0].name, "Foundational");
    assert_eq!(summary.per_tier[0].domains, 2);
    assert_eq!(summary.per_tier[0].categories, 3);
    assert_eq!(summary.per_tier[1].categories, 1);

    let coverage: Vec<_> = summary.coverage.iter().map(|c| (c.id.as_str(), c.categories)).collect();
    assert_eq!(
        coverage,
        [
            ("aws", 2),
            ("azure", 1),
            ("gcp", 1),
            ("oracle", 0),
            ("alibaba", 0),
            ("tencent", 0),
            ("ibm", 0)
        ]
    );
}
