//! Profile read cache with moka
//!
//! Decorates any `ProfileRepository` with positive and negative caches keyed
//! by user id.
//!
//! # Architecture
//!
//! - **Positive Cache**: stores profiles returned by the inner repository
//! - **Negative Cache**: stores "no profile" results for repeated lookups
//! - **Error Handling**: errors are propagated and never cached
//! - **Invalidation**: `create`, `update` and `delete` evict the user's
//!   entries after the inner write succeeds

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use familylegacy_core::ProfileRepository;
use familylegacy_domain::constants::{DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECS};
use familylegacy_domain::{CacheConfig, Profile, ProfileChanges, Result as DomainResult};
use moka::future::Cache;
use tracing::debug;

/// Profile cache configuration
#[derive(Debug, Clone)]
pub struct ProfileCacheConfig {
    /// Time-to-live for cache entries
    pub ttl: Duration,

    /// Maximum number of entries in each cache
    pub max_capacity: u64,
}

impl Default for ProfileCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            max_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl From<&CacheConfig> for ProfileCacheConfig {
    fn from(config: &CacheConfig) -> Self {
        Self { ttl: Duration::from_secs(config.ttl_seconds), max_capacity: config.max_capacity }
    }
}

impl ProfileCacheConfig {
    /// Log configuration at startup
    pub fn log_config(&self) {
        tracing::info!(
            ttl_seconds = self.ttl.as_secs(),
            max_capacity = self.max_capacity,
            "profile cache configuration loaded"
        );
    }
}

/// Read-through cache in front of a `ProfileRepository`
pub struct CachedProfileRepository {
    inner: Arc<dyn ProfileRepository>,
    positive_cache: Cache<String, Profile>,
    negative_cache: Cache<String, ()>,
}

impl CachedProfileRepository {
    pub fn new(inner: Arc<dyn ProfileRepository>, config: ProfileCacheConfig) -> Self {
        config.log_config();

        let positive_cache =
            Cache::builder().time_to_live(config.ttl).max_capacity(config.max_capacity).build();
        let negative_cache =
            Cache::builder().time_to_live(config.ttl).max_capacity(config.max_capacity).build();

        Self { inner, positive_cache, negative_cache }
    }

    async fn invalidate(&self, user_id: &str) {
        self.positive_cache.invalidate(user_id).await;
        self.negative_cache.invalidate(user_id).await;
        debug!(user_id, "profile cache entry invalidated");
    }
}

#[async_trait]
impl ProfileRepository for CachedProfileRepository {
    async fn get(&self, user_id: &str) -> DomainResult<Option<Profile>> {
        if self.negative_cache.get(user_id).await.is_some() {
            debug!(user_id, "profile negative cache hit");
            return Ok(None);
        }
        if let Some(profile) = self.positive_cache.get(user_id).await {
            debug!(user_id, "profile cache hit");
            return Ok(Some(profile));
        }

        debug!(user_id, "profile cache miss, querying repository");
        match self.inner.get(user_id).await? {
            Some(profile) => {
                self.positive_cache.insert(user_id.to_string(), profile.clone()).await;
                Ok(Some(profile))
            }
            None => {
                self.negative_cache.insert(user_id.to_string(), ()).await;
                Ok(None)
            }
        }
    }

    async fn create(&self, profile: Profile) -> DomainResult<Profile> {
        let user_id = profile.user_id.clone();
        let created = self.inner.create(profile).await?;
        self.invalidate(&user_id).await;
        Ok(created)
    }

    async fn update(&self, user_id: &str, changes: ProfileChanges) -> DomainResult<Profile> {
        let updated = self.inner.update(user_id, changes).await?;
        self.invalidate(user_id).await;
        Ok(updated)
    }

    async fn list_all(&self) -> DomainResult<Vec<Profile>> {
        self.inner.list_all().await
    }

    async fn delete(&self, user_id: &str) -> DomainResult<()> {
        self.inner.delete(user_id).await?;
        self.invalidate(user_id).await;
        Ok(())
    }
}
