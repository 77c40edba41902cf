use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use familylegacy_core::ProfileRepository;
use familylegacy_domain::{PlatformError, Profile, ProfileChanges, Result as DomainResult};

/// `ProfileRepository` keyed by user id on a sharded concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    profiles: DashMap<String, Profile>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self, user_id: &str) -> DomainResult<Option<Profile>> {
        Ok(self.profiles.get(user_id).map(|entry| entry.value().clone()))
    }

    async fn create(&self, profile: Profile) -> DomainResult<Profile> {
        // The entry lock makes check-and-insert atomic per user id.
        match self.profiles.entry(profile.user_id.clone()) {
            Entry::Occupied(_) => Err(PlatformError::Conflict("Profile already exists".into())),
            Entry::Vacant(slot) => {
                slot.insert(profile.clone());
                Ok(profile)
            }
        }
    }

    async fn update(&self, user_id: &str, changes: ProfileChanges) -> DomainResult<Profile> {
        let mut entry = self
            .profiles
            .get_mut(user_id)
            .ok_or_else(|| PlatformError::NotFound("Profile not found".into()))?;
        changes.apply_to(entry.value_mut());
        Ok(entry.value().clone())
    }

    async fn list_all(&self) -> DomainResult<Vec<Profile>> {
        let mut profiles: Vec<Profile> =
            self.profiles.iter().map(|entry| entry.value().clone()).collect();
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(profiles)
    }

    async fn delete(&self, user_id: &str) -> DomainResult<()> {
        self.profiles
            .remove(user_id)
            .map(|_| ())
            .ok_or_else(|| PlatformError::NotFound("Profile not found".into()))
    }
}
