//! Port interfaces for support tickets

use async_trait::async_trait;
use familylegacy_domain::{Result, Ticket};

/// Trait for ticket persistence
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Save a new ticket
    async fn create(&self, ticket: Ticket) -> Result<Ticket>;

    /// Tickets raised by `user_id`, oldest first
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Ticket>>;

    /// Every ticket, oldest first (staff use only)
    async fn list_all(&self) -> Result<Vec<Ticket>>;
}
