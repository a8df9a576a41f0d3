//! Config loading tests: TOML defaults, overrides, and validation.

use std::io::Write;

use proptype_core::config::extract_config::{DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_URL};
use proptype_core::errors::{ConfigError, ProptypeErrorCode};
use proptype_core::ProptypeConfig;

#[test]
fn empty_toml_yields_defaults() {
    let config = ProptypeConfig::from_toml("").unwrap();
    assert_eq!(config.extract.effective_source_url(), DEFAULT_SOURCE_URL);
    assert_eq!(config.extract.effective_output_path(), DEFAULT_OUTPUT_PATH);
    assert_eq!(config.extract.effective_timeout_secs(), 30);
    assert!(config
        .extract
        .effective_user_agent()
        .starts_with("proptype-extract/"));
    assert!(config.access.is_empty());
    assert_eq!(config.observability.log_filter, "info");
}

#[test]
fn partial_sections_keep_other_defaults() {
    let toml = r#"
        [extract]
        timeout_secs = 5

        [access]
        monster = ["lastCopyableMonster"]
        location = ["lastAdventure", "nextAdventure"]
    "#;
    let config = ProptypeConfig::from_toml(toml).unwrap();
    assert_eq!(config.extract.effective_timeout_secs(), 5);
    assert_eq!(config.extract.effective_source_url(), DEFAULT_SOURCE_URL);
    assert_eq!(config.access.monster, vec!["lastCopyableMonster"]);
    assert_eq!(config.access.location.len(), 2);
    assert!(config.access.boolean.is_empty());
}

#[test]
fn non_http_source_url_is_rejected() {
    let toml = r#"
        [extract]
        source_url = "file:///tmp/Modifiers.java"
    "#;
    let err = ProptypeConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "extract.source_url"));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn zero_timeout_is_rejected() {
    let err = ProptypeConfig::from_toml("[extract]\ntimeout_secs = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn malformed_toml_reports_parse_error() {
    let err = ProptypeConfig::from_toml("[extract\nsource_url = 1").unwrap_err();
    assert!(matches!(err, ConfigError::TomlParse(_)));
    assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
}

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[observability]\nlog_filter = \"debug\"").unwrap();
    let config = ProptypeConfig::from_file(file.path()).unwrap();
    assert_eq!(config.observability.log_filter, "debug");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = ProptypeConfig::from_file(&path).unwrap_err();
    match err {
        ConfigError::Read { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Read error, got {other:?}"),
    }
}
