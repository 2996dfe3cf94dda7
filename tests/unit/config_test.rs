//! Tests for configuration loading

use std::fs;

use bountyboard::config::{AppConfig, ConfigError};
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_from_file_merges_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("event.toml");
    fs::write(
        &path,
        r#"
        [server]
        port = 9000

        [admin]
        password = "s3cret"
        "#,
    )
    .unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.admin.password, "s3cret");
    assert_eq!(config.scoring.max_score, 900);
    assert_eq!(config.sites.len(), 5);
    assert_eq!(config.bind_addr(), "0.0.0.0:9000");
}

#[test]
fn test_custom_sites_replace_defaults() {
    let config = AppConfig::parse(
        r#"
        [[sites]]
        id = 6
        name = "Travel Blog"
        markup_file = "trip.html"
        stylesheet_file = "trip.css"
        "#,
    )
    .unwrap();
    assert_eq!(config.sites.len(), 1);
    assert_eq!(config.site(6).unwrap().markup_file, "trip.html");
    assert!(config.site(1).is_none());
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_invalid_toml_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[server\nport = ").unwrap();

    let err = AppConfig::from_file(&path).unwrap_err();
    match err {
        ConfigError::Parse { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_explicit_path_must_exist() {
    let dir = TempDir::new().unwrap();
    assert!(AppConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
}

#[test]
#[serial]
fn test_discovers_config_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bountyboard.toml"), "[storage]\ndata_dir = \"event-data\"\n").unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let loaded = AppConfig::load(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(loaded.unwrap().storage.data_dir, std::path::PathBuf::from("event-data"));
}

#[test]
fn test_env_lookup_overrides() {
    let mut config = AppConfig::default();
    config
        .apply_env_overrides(|key| match key {
            "BOUNTYBOARD_PORT" => Some(" 8181 ".to_string()),
            "BOUNTYBOARD_ADMIN_PASSWORD" => Some("hunter2".to_string()),
            _ => None,
        })
        .unwrap();
    assert_eq!(config.server.port, 8181);
    assert_eq!(config.admin.password, "hunter2");

    let err = config
        .apply_env_overrides(|key| (key == "BOUNTYBOARD_PORT").then(|| "eighty".to_string()))
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnv { value, .. } if value == "eighty"));
}
