//! Shared test helpers for `familylegacy-core` integration tests.
//!
//! These helpers provide lightweight in-memory mocks so that service tests
//! can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod repositories;

use std::sync::Arc;

use familylegacy_core::{AdminService, ProfileService, TicketService};
pub use repositories::{MockProfileRepository, MockTicketRepository};

/// Services wired against a shared pair of mock repositories.
pub struct Harness {
    pub profiles: Arc<MockProfileRepository>,
    pub tickets: Arc<MockTicketRepository>,
    pub profile_service: ProfileService,
    pub ticket_service: TicketService,
    pub admin_service: AdminService,
}

impl Harness {
    pub fn new() -> Self {
        let profiles = Arc::new(MockProfileRepository::default());
        let tickets = Arc::new(MockTicketRepository::default());
        Self {
            profile_service: ProfileService::new(profiles.clone()),
            ticket_service: TicketService::new(tickets.clone(), profiles.clone()),
            admin_service: AdminService::new(profiles.clone(), tickets.clone()),
            profiles,
            tickets,
        }
    }
}
