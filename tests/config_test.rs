//! Tests for TOML configuration loading.

use console_tictactoe::GameConfig;
use std::io::Write;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(config.log_filter(), "warn");
    assert!(!*config.show_history());
}

#[test]
fn test_file_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"debug\"\nshow_history = true").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log_filter(), "debug");
    assert!(*config.show_history());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_history = true").unwrap();

    let config = GameConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_history = \"sometimes\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
