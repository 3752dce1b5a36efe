//! Tests for configuration loading.

use std::io::Write;
use std::path::PathBuf;
use tictac_timeline::AppConfig;
use tictac_timeline_core::SortOrder;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.log_filter(), "info");
    assert_eq!(*config.sort_order(), SortOrder::Ascending);
    assert!(*config.show_coordinates());
}

#[test]
fn test_fields_override_defaults() {
    let file = write_config(
        r#"
log_filter = "debug"
log_file = "/tmp/game.log"
sort_order = "descending"
show_coordinates = false
"#,
    );
    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/game.log"));
    assert_eq!(*config.sort_order(), SortOrder::Descending);
    assert!(!*config.show_coordinates());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let file = write_config("sort_order = sideways");
    let err = AppConfig::from_file(file.path()).expect_err("invalid");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");
    let err = AppConfig::load(Some(missing.as_path())).expect_err("missing");
    assert!(err.message.contains("Failed to read config file"));
}
