//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If any `FAMILYLEGACY_*` variable is set, build the config from the
//!    environment (unset variables keep their defaults)
//! 2. Otherwise probe for a config file and load it
//! 3. With neither, run on defaults
//!
//! ## Environment Variables
//! - `FAMILYLEGACY_HOST`, `FAMILYLEGACY_PORT`: HTTP bind address
//! - `FAMILYLEGACY_DB_BACKEND`: `sqlite` or `memory`
//! - `FAMILYLEGACY_DB_PATH`: SQLite database file path
//! - `FAMILYLEGACY_DB_POOL_SIZE`: Connection pool size
//! - `FAMILYLEGACY_USER_HEADER`: Header carrying the authenticated user id
//! - `FAMILYLEGACY_DEV_USER_ID`: Fallback identity for local development
//! - `FAMILYLEGACY_CACHE_ENABLED`: Whether the profile cache is on
//! - `FAMILYLEGACY_CACHE_TTL_SECONDS`, `FAMILYLEGACY_CACHE_MAX_CAPACITY`
//! - `FAMILYLEGACY_LOG_LEVEL`, `FAMILYLEGACY_LOG_JSON`
//!
//! ## File Locations
//! The loader probes `config.{json,toml}` and `familylegacy.{json,toml}` in
//! the working directory, its two parents, and next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use familylegacy_domain::{Config, PlatformError, Result, StorageBackend};

const ENV_PREFIX: &str = "FAMILYLEGACY_";

const CONFIG_FILE_NAMES: &[&str] =
    &["config.json", "config.toml", "familylegacy.json", "familylegacy.toml"];

/// Load configuration with automatic fallback strategy
///
/// Environment variables win when any `FAMILYLEGACY_*` variable is set; an
/// invalid value is an error rather than a silent fallback.
pub fn load() -> Result<Config> {
    if env_configured() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No configuration found, using defaults");
            Ok(Config::default())
        }
    }
}

fn env_configured() -> bool {
    std::env::vars().any(|(key, _)| key.starts_with(ENV_PREFIX))
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `PlatformError::Config` if no `FAMILYLEGACY_*` variable is set, or
/// if a set variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    if !env_configured() {
        return Err(PlatformError::Config(format!("No {ENV_PREFIX}* environment variables set")));
    }

    let mut config = Config::default();

    if let Some(host) = env_opt("FAMILYLEGACY_HOST") {
        config.server.host = host;
    }
    if let Some(port) = env_parse::<u16>("FAMILYLEGACY_PORT")? {
        config.server.port = port;
    }

    if let Some(backend) = env_opt("FAMILYLEGACY_DB_BACKEND") {
        config.database.backend = StorageBackend::from_str(&backend)
            .map_err(|e| PlatformError::Config(format!("Invalid storage backend: {}", e)))?;
    }
    if let Some(path) = env_opt("FAMILYLEGACY_DB_PATH") {
        config.database.path = path;
    }
    if let Some(pool_size) = env_parse::<u32>("FAMILYLEGACY_DB_POOL_SIZE")? {
        config.database.pool_size = pool_size;
    }

    if let Some(header) = env_opt("FAMILYLEGACY_USER_HEADER") {
        config.auth.user_header = header.to_ascii_lowercase();
    }
    config.auth.dev_user_id = env_opt("FAMILYLEGACY_DEV_USER_ID").or(config.auth.dev_user_id);

    if let Some(enabled) = env_bool("FAMILYLEGACY_CACHE_ENABLED")? {
        config.cache.enabled = enabled;
    }
    if let Some(ttl) = env_parse::<u64>("FAMILYLEGACY_CACHE_TTL_SECONDS")? {
        config.cache.ttl_seconds = ttl;
    }
    if let Some(capacity) = env_parse::<u64>("FAMILYLEGACY_CACHE_MAX_CAPACITY")? {
        config.cache.max_capacity = capacity;
    }

    if let Some(level) = env_opt("FAMILYLEGACY_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = env_bool("FAMILYLEGACY_LOG_JSON")? {
        config.logging.json = json;
    }

    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is detected by
/// extension (`.json` or `.toml`).
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PlatformError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            PlatformError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PlatformError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PlatformError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PlatformError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(PlatformError::Config(format!("Unsupported config format: {}", extension))),
    }
}

fn validate(config: &Config) -> Result<()> {
    if config.database.pool_size == 0 {
        return Err(PlatformError::Config("database.pool_size must be greater than 0".into()));
    }
    if config.auth.user_header.trim().is_empty() {
        return Err(PlatformError::Config("auth.user_header must not be empty".into()));
    }
    if config.database.backend == StorageBackend::Sqlite && config.database.path.trim().is_empty()
    {
        return Err(PlatformError::Config("database.path is required for sqlite".into()));
    }
    Ok(())
}

/// Probe the standard locations for a configuration file
///
/// Returns the first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }
    let exe_dir = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf));
    if let Some(exe_dir) = exe_dir {
        dirs.extend([exe_dir.clone(), exe_dir.join(".."), exe_dir.join("../..")]);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| PlatformError::Config(format!("Invalid value for {}: {}", key, e)))
        })
        .transpose()
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str) -> Result<Option<bool>> {
    env_opt(key)
        .map(|raw| match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(PlatformError::Config(format!("Invalid value for {}: {}", key, raw))),
        })
        .transpose()
}
