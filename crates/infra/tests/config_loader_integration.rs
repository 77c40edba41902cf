//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use familylegacy_domain::StorageBackend;
use familylegacy_infra::config;
use tempfile::Builder;

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write to temp file");
    file
}

#[test]
fn test_load_config_from_toml_file() {
    let file = write_config(
        ".toml",
        r#"
        [server]
        host = "0.0.0.0"
        port = 8080

        [database]
        backend = "sqlite"
        path = "/var/lib/familylegacy/app.db"
        pool_size = 16

        [auth]
        user_header = "x-forwarded-user"

        [cache]
        enabled = false
        "#,
    );

    let config = config::load_from_file(Some(file.path().to_path_buf()))
        .expect("Failed to load config from TOML file");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.database.backend, StorageBackend::Sqlite);
    assert_eq!(config.database.pool_size, 16);
    assert_eq!(config.auth.user_header, "x-forwarded-user");
    assert!(!config.cache.enabled);
    // Untouched sections keep their defaults
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.cache.ttl_seconds, 60);
}

#[test]
fn test_load_config_from_json_file() {
    let file = write_config(
        ".json",
        r#"{
            "database": { "backend": "memory" },
            "auth": { "dev_user_id": "local-dev" },
            "logging": { "level": "debug", "json": true }
        }"#,
    );

    let config = config::load_from_file(Some(file.path().to_path_buf()))
        .expect("Failed to load config from JSON file");

    assert_eq!(config.database.backend, StorageBackend::Memory);
    assert_eq!(config.auth.dev_user_id.as_deref(), Some("local-dev"));
    assert_eq!(config.auth.user_header, "x-user-id");
    assert!(config.logging.json);
    assert_eq!(config.server.port, 5000);
}

#[test]
fn test_invalid_config_is_rejected() {
    let zero_pool = write_config(".toml", "[database]\npool_size = 0\n");
    assert!(config::load_from_file(Some(zero_pool.path().to_path_buf())).is_err());

    let broken = write_config(".json", "{ not json");
    assert!(config::load_from_file(Some(broken.path().to_path_buf())).is_err());

    let unsupported = write_config(".yaml", "server: {}\n");
    assert!(config::load_from_file(Some(unsupported.path().to_path_buf())).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let result = config::load_from_file(Some(dir.path().join("absent.toml")));
    assert!(result.is_err());
}
