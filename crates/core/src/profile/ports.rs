//! Port interfaces for profile persistence
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for profile operations.

use async_trait::async_trait;
use familylegacy_domain::{Profile, ProfileChanges, Result};

/// Trait for profile persistence and retrieval, keyed by user id
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Get the profile owned by `user_id`, if any
    async fn get(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Insert a new profile
    ///
    /// Fails with `Conflict` when `profile.user_id` already owns a profile.
    async fn create(&self, profile: Profile) -> Result<Profile>;

    /// Apply `changes` to the profile owned by `user_id`
    ///
    /// Fails with `NotFound` when no profile exists.
    async fn update(&self, user_id: &str, changes: ProfileChanges) -> Result<Profile>;

    /// List every profile, oldest first (admin use only)
    async fn list_all(&self) -> Result<Vec<Profile>>;

    /// Delete the profile owned by `user_id`
    ///
    /// Fails with `NotFound` when no profile exists.
    async fn delete(&self, user_id: &str) -> Result<()>;
}
