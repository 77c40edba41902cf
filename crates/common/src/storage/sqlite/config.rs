//! SQLite connection pool configuration

use std::time::Duration;

use crate::storage::error::{StorageError, StorageResult};

/// SQLite pool configuration
#[derive(Debug, Clone)]
pub struct SqlitePoolConfig {
    /// Maximum number of connections in the pool
    pub max_size: u32,

    /// Connection timeout
    pub connection_timeout: Duration,

    /// Busy timeout for SQLite operations
    pub busy_timeout: Duration,

    /// Enable WAL journal mode
    pub enable_wal: bool,

    /// Enable foreign key constraints
    pub enable_foreign_keys: bool,
}

impl SqlitePoolConfig {
    /// Default configuration with a custom pool size
    pub fn with_max_size(max_size: u32) -> Self {
        Self { max_size, ..Self::default() }
    }

    /// Ensure all values are within acceptable ranges
    pub fn validate(&self) -> StorageResult<()> {
        if self.max_size == 0 {
            return Err(StorageError::InvalidConfig(
                "max_size must be greater than 0".to_string(),
            ));
        }
        if self.connection_timeout.is_zero() {
            return Err(StorageError::InvalidConfig(
                "connection_timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SqlitePoolConfig {
    fn default() -> Self {
        Self {
            max_size: 8,
            connection_timeout: Duration::from_secs(5),
            busy_timeout: Duration::from_millis(5000),
            enable_wal: true,
            enable_foreign_keys: true,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for storage::sqlite::config.
    use super::*;

    /// Tests the default configuration values for the SQLite pool.
    #[test]
    fn test_default_config() {
        let config = SqlitePoolConfig::default();

        assert_eq!(config.max_size, 8, "Default pool size should be 8");
        assert_eq!(
            config.busy_timeout,
            Duration::from_millis(5000),
            "Default busy timeout should be 5000ms"
        );
        assert!(config.enable_wal, "WAL mode should be enabled by default");
        assert!(config.enable_foreign_keys, "Foreign keys should be enabled by default");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_pool_size_is_invalid() {
        let config = SqlitePoolConfig::with_max_size(0);
        assert!(matches!(config.validate(), Err(StorageError::InvalidConfig(_))));
    }
}
