//! Application context - dependency injection container

use std::sync::Arc;

use familylegacy_core::{
    AdminService, ProfileRepository, ProfileService, TicketRepository, TicketService,
};
use familylegacy_domain::{Config, PlatformError, Result, StorageBackend};
use familylegacy_infra::{
    CachedProfileRepository, DbManager, InMemoryProfileRepository, InMemoryTicketRepository,
    PoolMetrics, ProfileCacheConfig, SqliteProfileRepository, SqliteTicketRepository,
};
use tracing::info;

use crate::auth::{HeaderIdentityResolver, IdentityResolver};

/// Shared handle passed to every handler as axum state.
pub type SharedContext = Arc<AppContext>;

/// Storage actually wired behind the repository ports.
enum Storage {
    Sqlite(Arc<DbManager>),
    Memory,
}

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub profile_service: Arc<ProfileService>,
    pub ticket_service: Arc<TicketService>,
    pub admin_service: Arc<AdminService>,
    pub identity: Arc<dyn IdentityResolver>,
    storage: Storage,
}

impl AppContext {
    /// Build repositories for the configured backend and wire the services.
    pub fn new(config: Config) -> Result<Self> {
        let (storage, profiles, tickets): (
            Storage,
            Arc<dyn ProfileRepository>,
            Arc<dyn TicketRepository>,
        ) = match config.database.backend {
            StorageBackend::Sqlite => {
                let db =
                    Arc::new(DbManager::open(&config.database.path, config.database.pool_size)?);
                (
                    Storage::Sqlite(Arc::clone(&db)),
                    Arc::new(SqliteProfileRepository::new(Arc::clone(&db))),
                    Arc::new(SqliteTicketRepository::new(db)),
                )
            }
            StorageBackend::Memory => (
                Storage::Memory,
                Arc::new(InMemoryProfileRepository::new()),
                Arc::new(InMemoryTicketRepository::new()),
            ),
        };

        let profiles: Arc<dyn ProfileRepository> = if config.cache.enabled {
            let cache_config = ProfileCacheConfig::from(&config.cache);
            Arc::new(CachedProfileRepository::new(profiles, cache_config))
        } else {
            profiles
        };

        let identity: Arc<dyn IdentityResolver> =
            Arc::new(HeaderIdentityResolver::from_config(&config.auth));

        let ctx = Self {
            profile_service: Arc::new(ProfileService::new(Arc::clone(&profiles))),
            ticket_service: Arc::new(TicketService::new(
                Arc::clone(&tickets),
                Arc::clone(&profiles),
            )),
            admin_service: Arc::new(AdminService::new(profiles, tickets)),
            identity,
            storage,
            config,
        };

        info!(
            storage = ctx.storage_label(),
            cache_enabled = ctx.config.cache.enabled,
            user_header = %ctx.config.auth.user_header,
            "application context initialised"
        );
        Ok(ctx)
    }

    /// Replace the identity resolver, e.g. with a token-verifying adapter.
    #[must_use]
    pub fn with_identity(mut self, identity: Arc<dyn IdentityResolver>) -> Self {
        self.identity = identity;
        self
    }

    pub fn storage_label(&self) -> &'static str {
        match self.storage {
            Storage::Sqlite(_) => "sqlite",
            Storage::Memory => "memory",
        }
    }

    /// Probe the storage backend. The in-memory backend is always healthy and
    /// has no pool to report.
    pub async fn check_storage(&self) -> Result<Option<PoolMetrics>> {
        match &self.storage {
            Storage::Sqlite(db) => {
                let db = Arc::clone(db);
                tokio::task::spawn_blocking(move || -> Result<Option<PoolMetrics>> {
                    db.health_check()?;
                    Ok(Some(db.pool_metrics()))
                })
                .await
                .map_err(|e| PlatformError::Internal(format!("health check task failed: {e}")))?
            }
            Storage::Memory => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn memory_backend_is_labelled() {
        let mut config = Config::default();
        config.database.backend = StorageBackend::Memory;
        let ctx = AppContext::new(config).unwrap();
        assert_eq!(ctx.storage_label(), "memory");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn sqlite_backend_creates_database_and_passes_health() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.database.path = dir.path().join("nested/app.db").to_string_lossy().into_owned();
        config.database.pool_size = 2;

        let ctx = AppContext::new(config).unwrap();
        assert_eq!(ctx.storage_label(), "sqlite");
        assert!(dir.path().join("nested/app.db").exists());
        let metrics = ctx.check_storage().await.unwrap().expect("sqlite reports pool metrics");
        assert!(metrics.connections_acquired > 0);
    }
}
