//! Administrative listing and statistics
//!
//! Each operation first authorizes the caller against a role allow-list using
//! the caller's own profile.

use std::sync::Arc;

use familylegacy_domain::constants::{
    ADMIN_DELETE_ROLES, ADMIN_STATS_ROLES, ADMIN_TICKETS_ROLES, ADMIN_USERS_ROLES,
};
use familylegacy_domain::{
    AdminStats, PlatformError, Profile, Result, Role, SubscriptionStatus, SubscriptionTier, Ticket,
    TicketStatus,
};
use tracing::{info, warn};

use crate::entitlement::effective_subscription_status;
use crate::profile::ports::ProfileRepository;
use crate::ticket::ports::TicketRepository;

pub struct AdminService {
    profiles: Arc<dyn ProfileRepository>,
    tickets: Arc<dyn TicketRepository>,
}

impl AdminService {
    pub fn new(profiles: Arc<dyn ProfileRepository>, tickets: Arc<dyn TicketRepository>) -> Self {
        Self { profiles, tickets }
    }

    /// Resolve the caller's profile and check its role against `allowed`.
    ///
    /// A caller without a profile is treated as forbidden, not missing.
    pub async fn authorize(&self, caller_id: &str, allowed: &[Role]) -> Result<Profile> {
        let Some(caller) = self.profiles.get(caller_id).await? else {
            warn!(caller_id, "admin access attempted without a profile");
            return Err(PlatformError::Forbidden("profile required".into()));
        };

        if !allowed.contains(&caller.role) {
            warn!(caller_id, role = %caller.role, "admin access denied");
            return Err(PlatformError::Forbidden(format!(
                "role '{}' is not permitted",
                caller.role
            )));
        }

        Ok(caller)
    }

    pub async fn list_users(&self, caller_id: &str) -> Result<Vec<Profile>> {
        self.authorize(caller_id, ADMIN_USERS_ROLES).await?;
        self.profiles.list_all().await
    }

    pub async fn list_tickets(&self, caller_id: &str) -> Result<Vec<Ticket>> {
        self.authorize(caller_id, ADMIN_TICKETS_ROLES).await?;
        self.tickets.list_all().await
    }

    pub async fn stats(&self, caller_id: &str) -> Result<AdminStats> {
        self.authorize(caller_id, ADMIN_STATS_ROLES).await?;
        let profiles = self.profiles.list_all().await?;
        let tickets = self.tickets.list_all().await?;
        Ok(compute_stats(&profiles, &tickets))
    }

    pub async fn delete_user(&self, caller_id: &str, target_user_id: &str) -> Result<()> {
        self.authorize(caller_id, ADMIN_DELETE_ROLES).await?;
        self.profiles.delete(target_user_id).await?;
        info!(caller_id, target_user_id, "profile deleted by admin");
        Ok(())
    }
}

pub fn compute_stats(profiles: &[Profile], tickets: &[Ticket]) -> AdminStats {
    let mut stats = AdminStats { total_profiles: profiles.len() as u64, ..AdminStats::default() };

    for profile in profiles {
        if profile.role.is_staff() {
            stats.staff_profiles += 1;
        } else if profile.role == Role::Family {
            stats.family_profiles += 1;
        } else {
            stats.pro_profiles += 1;
        }
        if profile.has_paid_one_time_fee {
            stats.paid_one_time_fee += 1;
        }
        if effective_subscription_status(profile) == SubscriptionStatus::Active {
            stats.active_subscriptions += 1;
        }
        match profile.subscription_tier {
            SubscriptionTier::Gold => stats.tiers.gold += 1,
            SubscriptionTier::Platinum => stats.tiers.platinum += 1,
            SubscriptionTier::Uranium => stats.tiers.uranium += 1,
            SubscriptionTier::None => {}
        }
        if profile.marketplace_access {
            stats.marketplace_enabled += 1;
        }
    }

    stats.open_tickets =
        tickets.iter().filter(|ticket| ticket.status != TicketStatus::Closed).count() as u64;

    stats
}
