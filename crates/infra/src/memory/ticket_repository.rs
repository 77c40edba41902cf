use async_trait::async_trait;
use dashmap::DashMap;
use familylegacy_core::TicketRepository;
use familylegacy_domain::{Result as DomainResult, Ticket};

/// Tickets grouped by owning user id.
#[derive(Debug, Default)]
pub struct InMemoryTicketRepository {
    by_user: DashMap<String, Vec<Ticket>>,
}

impl InMemoryTicketRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn create(&self, ticket: Ticket) -> DomainResult<Ticket> {
        self.by_user.entry(ticket.user_id.clone()).or_default().push(ticket.clone());
        Ok(ticket)
    }

    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<Ticket>> {
        Ok(self.by_user.get(user_id).map(|tickets| tickets.value().clone()).unwrap_or_default())
    }

    async fn list_all(&self) -> DomainResult<Vec<Ticket>> {
        let mut tickets: Vec<Ticket> =
            self.by_user.iter().flat_map(|entry| entry.value().clone()).collect();
        tickets.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(tickets)
    }
}
