//! Loading configuration from disk.

use std::io::Write;
use std::path::PathBuf;
use strictly_timetravel::TimetravelConfig;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "log_file = \"session.log\"\nlog_filter = \"strictly_timetravel=debug\"\nmouse = false"
    )
    .expect("write config");

    let config = TimetravelConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.log_file(), &PathBuf::from("session.log"));
    assert_eq!(config.log_filter(), "strictly_timetravel=debug");
    assert!(!*config.mouse());
    assert!(!*config.reverse_moves());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = TimetravelConfig::load_or_default(dir.path().join("absent.toml"))
        .expect("defaults");
    assert_eq!(config, TimetravelConfig::default());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "mouse = \"sometimes\"").expect("write config");

    let err = TimetravelConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
