use catalog_core::slugify;

#[test]
fn ampersand_collapses_to_single_hyphen() {
    assert_eq!(slugify("Data & Analytics"), "data-analytics");
}

#[test]
fn spaces_become_hyphens_and_case_folds() {
    assert_eq!(slugify("Google Cloud"), "google-cloud");
    assert_eq!(slugify("Virtual Machines"), "virtual-machines");
}

#[test]
fn punctuation_passes_through() {
    assert_eq!(slugify("Oracle Cloud (OCI)"), "oracle-cloud-(oci)");
    assert_eq!(slugify("AI/ML"), "ai/ml");
}

#[test]
fn ampersand_without_spaces_is_kept() {
    assert_eq!(slugify("R&D Tools"), "r&d-tools");
}

#[test]
fn slug_is_deterministic() {
    let name = "Security & Identity Management";
    assert_eq!(slugify(name), slugify(name));
    assert_eq!(slugify(name), "security-identity-management");
}

#[test]
fn empty_name_gives_empty_slug() {
    assert_eq!(slugify(""), "");
}
