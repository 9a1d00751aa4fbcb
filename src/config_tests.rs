use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 6006);
    assert_eq!(config.site_title, "Vitrine");
    assert_eq!(config.out_dir, PathBuf::from("vitrine-static"));
    assert!(config.theme.is_none());
}

#[test]
fn test_load_full_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vitrine.json");
    fs::write(
        &path,
        r#"{
            "host": "0.0.0.0",
            "port": 7007,
            "site_title": "Design System",
            "out_dir": "public",
            "theme": "themes/light.json"
        }"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 7007);
    assert_eq!(config.site_title, "Design System");
    assert_eq!(config.out_dir, PathBuf::from("public"));
    assert_eq!(config.theme, Some(PathBuf::from("themes/light.json")));
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vitrine.json");
    fs::write(&path, r#"{"port": 9000}"#).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.port, 9000);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.site_title, "Vitrine");
}

#[test]
fn test_missing_explicit_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, VitrineError::Config(_)));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_malformed_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vitrine.json");
    fs::write(&path, "{ port: oops").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, VitrineError::Config(_)));
}

#[test]
fn test_absent_theme_is_not_serialized() {
    let json = serde_json::to_string(&Config::default()).unwrap();
    assert!(!json.contains("theme"));
}
