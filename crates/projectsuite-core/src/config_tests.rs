//! Config module tests

use crate::config::{CONFIG_KEYS, Config, DashboardConfig, DataConfig};
use crate::domain::projects::ViewType;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(config.data.file.is_none());
    assert!(config.data.seed_demo);
    assert_eq!(config.export.directory, PathBuf::from("."));
    assert_eq!(config.view.default, ViewType::Projects);
    assert_eq!(config.dashboard.recent_notifications, 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.set("data.file", "/tmp/projects.json").unwrap();
    config.set("view.default", "Kanban").unwrap();
    config.set("dashboard.recent_notifications", "5").unwrap();
    config.save_to(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[dashboard]"));
    assert!(contents.contains("default = \"kanban\""));

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[data]\nseed_demo = false\n").unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert!(!loaded.data.seed_demo);
    assert_eq!(loaded.dashboard, DashboardConfig::default());
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[dashboard]\nrecent_notifications = 0\n").unwrap();
    assert!(Config::load_from(&path).is_err());

    std::fs::write(&path, "not = [valid").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_set_validates_values() {
    let mut config = Config::default();
    assert!(config.set("view.default", "gallery").is_err());
    assert!(config.set("data.seed_demo", "maybe").is_err());
    assert!(config.set("dashboard.recent_notifications", "0").is_err());
    assert!(config.set("export.directory", "  ").is_err());
    assert!(config.set("theme.dark", "true").is_err());
    assert_eq!(config, Config::default());
}

#[test]
fn test_clearing_data_file() {
    let mut config = Config {
        data: DataConfig {
            file: Some(PathBuf::from("a.json")),
            seed_demo: true,
        },
        ..Config::default()
    };
    config.set("data.file", "").unwrap();
    assert!(config.data.file.is_none());
    assert!(config.get("data.file").unwrap().contains("not set"));
}

#[test]
fn test_list_covers_every_key() {
    let listed = Config::default().list().unwrap();
    let keys: Vec<&str> = listed.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, CONFIG_KEYS.to_vec());
    assert!(listed.contains(&("view.default".to_string(), "projects".to_string())));
}

#[test]
fn test_unknown_key_points_to_list() {
    let err = Config::default().get("llm.model").unwrap_err();
    assert!(err.to_string().contains("projectsuite config list"));
}

#[test]
fn test_reset_at_removes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    Config::default().save_to(&path).unwrap();
    assert!(path.exists());

    Config::reset_at(&path).unwrap();
    assert!(!path.exists());
    // Resetting twice is fine
    Config::reset_at(&path).unwrap();
}
