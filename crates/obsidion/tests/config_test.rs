//! Tests for layered configuration loading.

use obsidion::{CacheBackend, ObsidionConfig};
use std::time::Duration;

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("obsidion.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_bundled_defaults() {
    let config = ObsidionConfig::bundled_defaults().unwrap();

    assert_eq!(config.defaults().prefix(), "/");
    assert_eq!(config.defaults().locale(), "en-US");
    assert_eq!(config.defaults().regional_format(), "en-US");
    assert_eq!(*config.cache().backend(), CacheBackend::Memory);
    assert_eq!(config.cache().ttl(), Duration::from_secs(28_800));
    assert_eq!(*config.cache().max_entries(), 10_000);
    assert_eq!(config.cache().connect_timeout(), Duration::from_secs(2));
    assert_eq!(*config.cache().reconnect_retries(), 2);
    assert_eq!(*config.database().max_connections(), 10);
    assert!(*config.database().run_migrations());
    assert_eq!(config.logging().level(), "info");
    assert!(!*config.logging().json());
}

#[test]
fn test_file_overrides_bundled_values() {
    let (_dir, path) = write_config(
        r#"
[defaults]
prefix = "!"

[cache]
backend = "redis"
url = "redis://localhost:6379"
ttl_seconds = 60

[logging]
json = true
"#,
    );

    let config = ObsidionConfig::from_file(&path).unwrap();

    assert_eq!(config.defaults().prefix(), "!");
    // Untouched keys keep their bundled values
    assert_eq!(config.defaults().locale(), "en-US");
    assert_eq!(*config.cache().backend(), CacheBackend::Redis);
    assert_eq!(config.cache().url().as_deref(), Some("redis://localhost:6379"));
    assert_eq!(config.cache().ttl(), Duration::from_secs(60));
    assert_eq!(*config.cache().max_entries(), 10_000);
    assert!(*config.logging().json());
    assert_eq!(config.logging().level(), "info");
}

#[test]
fn test_explicit_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = ObsidionConfig::load(Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
}

#[test]
fn test_wrong_type_is_rejected() {
    let (_dir, path) = write_config(
        r#"
[cache]
ttl_seconds = "eight hours"
"#,
    );

    let err = ObsidionConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse configuration"));
}

#[test]
fn test_unknown_backend_is_rejected() {
    let (_dir, path) = write_config(
        r#"
[cache]
backend = "memcached"
"#,
    );

    assert!(ObsidionConfig::from_file(&path).is_err());
}
