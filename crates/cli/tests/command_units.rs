mod common;

use std::fs;

use catalog_core::config::{CatalogLayout, ConverterConfig};
use catalog_core::query::RowFilter;
use catalog_core::Provider;
use common::write_sample_csv;
use service_catalog::commands::{
    convert_command, flatten_command, init_config_command, list_providers_command, query_command,
    summary_command,
};
use tempfile::tempdir;

#[test]
fn convert_then_flatten_round_trips_through_files() {
    let temp = tempdir().unwrap();
    let root = temp.path().to_string_lossy().to_string();
    write_sample_csv(temp.path());

    convert_command(&root, None, None).unwrap();
    flatten_command(&root, None, Some("flat.csv")).unwrap();
    convert_command(&root, Some("flat.csv"), Some("again.yaml")).unwrap();

    let first = fs::read_to_string(temp.path().join("data.yaml")).unwrap();
    let second = fs::read_to_string(temp.path().join("again.yaml")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn convert_uses_configured_providers() {
    let temp = tempdir().unwrap();
    let root = temp.path().to_string_lossy().to_string();
    let layout = CatalogLayout::new(temp.path());
    fs::create_dir_all(&layout.meta_dir).unwrap();

    let mut config = ConverterConfig::new("Two");
    config.input = "two.csv".into();
    config.providers = vec![Provider::new("Amazon", "aws"), Provider::new("Microsoft", "azure")];
    fs::write(&layout.config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    fs::write(temp.path().join("two.csv"), "Tier,Domain,Category,Amazon,Microsoft\nT,D,C,EC2,\n")
        .unwrap();

    convert_command(&root, None, None).unwrap();
    let yaml = fs::read_to_string(temp.path().join("data.yaml")).unwrap();
    assert!(yaml.contains("aws: EC2"));
    assert!(!yaml.contains("azure"));
}

#[test]
fn convert_reports_missing_input() {
    let temp = tempdir().unwrap();
    let root = temp.path().to_string_lossy().to_string();
    let err = convert_command(&root, None, None).unwrap_err();
    assert!(err.to_string().contains("Failed to convert"), "unexpected error: {err}");
    assert!(format!("{err:#}").contains("Failed to read input"), "unexpected error: {err:#}");
}

#[test]
fn init_config_writes_default_config() {
    let temp = tempdir().unwrap();
    let root = temp.path().to_string_lossy().to_string();
    init_config_command(&root, false).unwrap();

    let layout = CatalogLayout::new(temp.path());
    let config: ConverterConfig =
        serde_json::from_str(&fs::read_to_string(&layout.config_path).unwrap()).unwrap();
    assert_eq!(config.input, "data.csv");
    assert_eq!(config.output, "data.yaml");
    assert_eq!(config.providers.len(), 7);

    let err = init_config_command(&root, false).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn list_providers_errors_when_config_corrupt() {
    let temp = tempdir().unwrap();
    let root = temp.path().to_string_lossy().to_string();
    init_config_command(&root, false).unwrap();
    let layout = CatalogLayout::new(temp.path());
    fs::write(&layout.config_path, "not-json").unwrap();

    let err = list_providers_command(&root, true).unwrap_err();
    assert!(err.to_string().contains("Failed to parse catalog config JSON"));
}

#[test]
fn document_commands_require_a_document() {
    let temp = tempdir().unwrap();
    let root = temp.path().to_string_lossy().to_string();

    let err = summary_command(&root, None, false).unwrap_err();
    assert!(err.to_string().contains("Failed to load hierarchy"));
    let err = query_command(&root, None, RowFilter::default(), false).unwrap_err();
    assert!(err.to_string().contains("Failed to load hierarchy"));
    let err = flatten_command(&root, Some("missing.yaml"), None).unwrap_err();
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn query_with_no_matches_succeeds() {
    let temp = tempdir().unwrap();
    let root = temp.path().to_string_lossy().to_string();
    write_sample_csv(temp.path());
    convert_command(&root, None, None).unwrap();

    let filter = RowFilter { search: "mainframe".into(), ..Default::default() };
    query_command(&root, None, filter, false).unwrap();
    summary_command(&root, None, true).unwrap();
}
