use catalog_core::config::{load_config, CatalogContext, CatalogLayout, ConverterConfig};
use catalog_core::Provider;

#[test]
fn missing_config_falls_back_to_defaults() {
    let temp = tempfile::tempdir().unwrap();
    let ctx = CatalogContext::from_root(temp.path()).unwrap();

    assert_eq!(ctx.config, ConverterConfig::default());
    assert_eq!(ctx.input_path, temp.path().join("data.csv"));
    assert_eq!(ctx.output_path, temp.path().join("data.yaml"));
    assert_eq!(ctx.catalog.len(), 7);
    assert_eq!(ctx.catalog.by_id("gcp").unwrap().column, "Google Cloud");
}

#[test]
fn stored_config_overrides_paths_and_providers() {
    let temp = tempfile::tempdir().unwrap();
    let layout = CatalogLayout::new(temp.path());
    std::fs::create_dir_all(&layout.meta_dir).unwrap();

    let mut config = ConverterConfig::new("Hyperscalers");
    config.input = "sheets/services.csv".into();
    config.output = temp.path().join("out.yaml").display().to_string();
    config.providers = vec![Provider::new("AWS", "aws"), Provider::new("Azure", "azure")];
    std::fs::write(&layout.config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let ctx = CatalogContext::from_root(temp.path()).unwrap();
    assert_eq!(ctx.config.name, "Hyperscalers");
    assert_eq!(ctx.input_path, temp.path().join("sheets/services.csv"));
    assert_eq!(ctx.output_path, temp.path().join("out.yaml"));
    assert_eq!(ctx.catalog.columns().collect::<Vec<_>>(), ["AWS", "Azure"]);
}

#[test]
fn corrupt_config_is_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let layout = CatalogLayout::new(temp.path());
    std::fs::create_dir_all(&layout.meta_dir).unwrap();
    std::fs::write(&layout.config_path, "not-json").unwrap();

    let err = load_config(&layout).unwrap_err();
    assert!(err.to_string().contains("Failed to parse catalog config JSON"));
}

#[test]
fn validation_rejects_ambiguous_providers() {
    let mut config = ConverterConfig::default();
    config.validate().unwrap();

    config.providers.push(Provider::new("AWS", "aws2"));
    assert!(config.validate().unwrap_err().to_string().contains("Duplicate provider column"));

    config.providers = vec![Provider::new("Amazon", "aws"), Provider::new("AWS", "aws")];
    assert!(config.validate().unwrap_err().to_string().contains("Duplicate provider id"));

    config.providers = vec![Provider::new("Domain", "domain")];
    assert!(config.validate().unwrap_err().to_string().contains("clashes"));

    config.providers.clear();
    assert!(config.validate().is_err());
}

#[test]
fn config_without_providers_uses_default_catalog() {
    let temp = tempfile::tempdir().unwrap();
    let layout = CatalogLayout::new(temp.path());
    std::fs::create_dir_all(&layout.meta_dir).unwrap();
    std::fs::write(
        &layout.config_path,
        r#"{"name":"x","config_version":"0.1.0","input":"in.csv","output":"out.yaml"}"#,
    )
    .unwrap();

    let config = load_config(&layout).unwrap();
    assert_eq!(config.providers.len(), 7);
    assert_eq!(config.input, "in.csv");
}
