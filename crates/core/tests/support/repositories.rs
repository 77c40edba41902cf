//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for the core repository ports, enabling
//! deterministic service tests without database dependencies.

use std::sync::Mutex;

use async_trait::async_trait;
use familylegacy_core::{ProfileRepository, TicketRepository};
use familylegacy_domain::{
    PlatformError, Profile, ProfileChanges, Result as DomainResult, Role, Ticket,
};

/// In-memory mock for `ProfileRepository`.
///
/// Keeps profiles in insertion order and enforces user id uniqueness.
#[derive(Default)]
pub struct MockProfileRepository {
    profiles: Mutex<Vec<Profile>>,
}

impl MockProfileRepository {
    /// Seed a profile directly, bypassing onboarding rules.
    pub fn seed(&self, profile: Profile) {
        self.profiles.lock().unwrap().push(profile);
    }

    /// Seed a bare profile for `user_id` with `role`.
    pub fn seed_role(&self, user_id: &str, role: Role) {
        self.seed(Profile::new(user_id, role, chrono::Utc::now()));
    }

    pub fn len(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn get(&self, user_id: &str) -> DomainResult<Option<Profile>> {
        Ok(self.profiles.lock().unwrap().iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn create(&self, profile: Profile) -> DomainResult<Profile> {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.iter().any(|p| p.user_id == profile.user_id) {
            return Err(PlatformError::Conflict("Profile already exists".into()));
        }
        profiles.push(profile.clone());
        Ok(profile)
    }

    async fn update(&self, user_id: &str, changes: ProfileChanges) -> DomainResult<Profile> {
        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles
            .iter_mut()
            .find(|p| p.user_id == user_id)
            .ok_or_else(|| PlatformError::NotFound("Profile not found".into()))?;
        changes.apply_to(profile);
        Ok(profile.clone())
    }

    async fn list_all(&self) -> DomainResult<Vec<Profile>> {
        Ok(self.profiles.lock().unwrap().clone())
    }

    async fn delete(&self, user_id: &str) -> DomainResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        let before = profiles.len();
        profiles.retain(|p| p.user_id != user_id);
        if profiles.len() == before {
            return Err(PlatformError::NotFound("Profile not found".into()));
        }
        Ok(())
    }
}

/// In-memory mock for `TicketRepository`.
#[derive(Default)]
pub struct MockTicketRepository {
    tickets: Mutex<Vec<Ticket>>,
}

impl MockTicketRepository {
    pub fn seed(&self, ticket: Ticket) {
        self.tickets.lock().unwrap().push(ticket);
    }
}

#[async_trait]
impl TicketRepository for MockTicketRepository {
    async fn create(&self, ticket: Ticket) -> DomainResult<Ticket> {
        self.tickets.lock().unwrap().push(ticket.clone());
        Ok(ticket)
    }

    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<Ticket>> {
        Ok(self.tickets.lock().unwrap().iter().filter(|t| t.user_id == user_id).cloned().collect())
    }

    async fn list_all(&self) -> DomainResult<Vec<Ticket>> {
        Ok(self.tickets.lock().unwrap().clone())
    }
}
