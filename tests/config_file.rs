use std::fs;

use pattern_catalog::catalog;
use pattern_catalog::{CatalogConfig, CatalogError};
use tempfile::TempDir;

#[test]
fn loads_settings_from_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
color = false
headers = false
log_level = "debug"
patterns = ["facade", "Template-Method"]
"#,
    )
    .unwrap();

    let config = CatalogConfig::load(Some(&path)).unwrap();
    assert!(!config.color);
    assert!(!config.headers);
    assert_eq!(config.log_level, "debug");

    let entries = catalog::select(config.patterns.as_slice()).unwrap();
    let names: Vec<_> = entries.iter().map(|entry| entry.name).collect();
    assert_eq!(names, vec!["facade", "template_method"]);
}

#[test]
fn configured_selection_drives_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, "color = false\npatterns = [\"strategy\", \"state\"]\n").unwrap();

    let config = CatalogConfig::from_file(&path).unwrap();
    let entries = catalog::select(config.patterns.as_slice()).unwrap();
    let mut buf = Vec::new();
    catalog::run_entries(&entries, &config, &mut buf).unwrap();

    let output = String::from_utf8(buf).unwrap();
    assert!(output.starts_with("=== Strategy ===\nHELLO, WORLD!\nhello, world!\n\n=== State ===\n"));
    assert!(output.ends_with("Document is already published\n\n"));
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    let err = CatalogConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, CatalogError::ConfigRead { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "patterns = [unterminated").unwrap();

    assert!(matches!(
        CatalogConfig::load(Some(&path)),
        Err(CatalogError::ConfigParse(_))
    ));
}

#[test]
fn unknown_configured_pattern_is_rejected() {
    let config = CatalogConfig::from_toml_str("patterns = [\"command\", \"monad\"]").unwrap();
    let err = catalog::select(config.patterns.as_slice()).unwrap_err();
    assert!(err.to_string().contains("monad"));
}
