use std::path::Path;

use service_catalog::{canonicalize_or_current, infer_catalog_name};
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_resolves_existing_path() {
    let tmp = tempdir().expect("tempdir");
    let nested = tmp.path().join("nested");
    std::fs::create_dir_all(&nested).expect("create nested");

    let result = canonicalize_or_current(nested.to_str().unwrap()).expect("canonicalize nested");
    assert_eq!(result, nested.canonicalize().expect("canonicalize nested"));
}

#[test]
fn canonicalize_or_current_joins_missing_relative_path_with_cwd() {
    let cwd = std::env::current_dir().expect("cwd");
    let result = canonicalize_or_current("does-not-exist-yet").expect("canonicalize");
    assert_eq!(result, cwd.join("does-not-exist-yet"));
}

#[test]
fn infer_catalog_name_uses_last_path_component() {
    assert_eq!(infer_catalog_name(Path::new("/tmp/cloud-matrix")), "cloud-matrix");
}

#[test]
fn infer_catalog_name_falls_back_when_missing() {
    assert_eq!(infer_catalog_name(Path::new("/")), "service-catalog");
}
