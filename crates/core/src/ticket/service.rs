//! Ticket service - users raising support requests

use std::sync::Arc;

use chrono::Utc;
use familylegacy_domain::constants::{MAX_TICKET_BODY_LENGTH, MAX_TICKET_SUBJECT_LENGTH};
use familylegacy_domain::{PlatformError, Result, Ticket};
use tracing::info;

use super::ports::TicketRepository;
use crate::profile::ports::ProfileRepository;

pub struct TicketService {
    tickets: Arc<dyn TicketRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl TicketService {
    pub fn new(tickets: Arc<dyn TicketRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { tickets, profiles }
    }

    /// Open a ticket for `user_id`. Only onboarded users may raise tickets.
    pub async fn open(&self, user_id: &str, subject: &str, body: &str) -> Result<Ticket> {
        let subject = require_text("subject", subject, MAX_TICKET_SUBJECT_LENGTH)?;
        let body = require_text("body", body, MAX_TICKET_BODY_LENGTH)?;

        if self.profiles.get(user_id).await?.is_none() {
            return Err(PlatformError::NotFound("Profile not found".into()));
        }

        let ticket = self.tickets.create(Ticket::open(user_id, subject, body, Utc::now())).await?;
        info!(user_id, ticket_id = %ticket.id, "support ticket opened");
        Ok(ticket)
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Ticket>> {
        self.tickets.list_for_user(user_id).await
    }
}

fn require_text<'a>(field: &str, value: &'a str, max_len: usize) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlatformError::invalid(field, format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > max_len {
        return Err(PlatformError::invalid(
            field,
            format!("{field} must be at most {max_len} characters"),
        ));
    }
    Ok(trimmed)
}
