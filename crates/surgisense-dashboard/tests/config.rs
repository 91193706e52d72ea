use surgisense_client::DEFAULT_API_BASE;
use surgisense_core::models::recovery::RecoveryProfile;
use surgisense_dashboard::config::{
    DashboardConfig, load_config_from, resolve_api_base_with, save_config_to,
};

#[test]
fn save_then_load_keeps_recovery_profile() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = DashboardConfig::new("http://10.0.0.5:8000");
    config.recovery = Some(RecoveryProfile::new("Priya", "ACL Reconstruction", "2026-10-11", 90).unwrap());

    let path = save_config_to(dir.path(), &config).unwrap();
    assert_eq!(path, dir.path().join("config.json"));
    assert!(!dir.path().join("config.json.tmp").exists());

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.api_base, "http://10.0.0.5:8000");
    assert_eq!(loaded.recovery, config.recovery);
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = save_config_to(dir.path(), &DashboardConfig::default()).unwrap();
    let mode = std::fs::metadata(path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "api_base": "http://localhost:9000", "created_at": "2026-01-05T09:00:00Z" }"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.api_base, "http://localhost:9000");
    assert!(config.recovery.is_none());
}

#[test]
fn newer_config_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 7, "api_base": "x", "created_at": "2026-01-05T09:00:00Z" }"#,
    )
    .unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("written by a newer SurgiSense"));
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config_from(&dir.path().join("config.json")).is_err());
}

#[test]
fn api_base_precedence() {
    let config = DashboardConfig::new("http://from-config:8000");

    assert_eq!(
        resolve_api_base_with(Some("http://flag:1"), Some("http://env:2"), &config),
        "http://flag:1"
    );
    assert_eq!(
        resolve_api_base_with(None, Some("http://env:2"), &config),
        "http://env:2"
    );
    assert_eq!(
        resolve_api_base_with(Some("  "), None, &config),
        "http://from-config:8000"
    );
    assert_eq!(
        resolve_api_base_with(None, Some(""), &DashboardConfig::new("")),
        DEFAULT_API_BASE
    );
}
