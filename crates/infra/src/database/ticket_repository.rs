//! Support ticket repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use familylegacy_core::TicketRepository as TicketRepositoryPort;
use familylegacy_domain::{Result as DomainResult, Ticket, TicketStatus};
use rusqlite::{params, Row, ToSql};
use tokio::task;

use super::manager::DbManager;
use super::profile_repository::{from_millis, parse_column, to_millis};
use crate::errors::{map_join_error, map_storage_error, InfraError};

pub struct SqliteTicketRepository {
    db: Arc<DbManager>,
}

impl SqliteTicketRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    async fn query(&self, sql: &'static str, user_id: Option<String>) -> DomainResult<Vec<Ticket>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Ticket>> {
            let conn = db.get_connection()?;
            let mut stmt = conn.prepare(sql).map_err(map_sql_error)?;
            let args: Vec<&dyn ToSql> = user_id.iter().map(|id| id as &dyn ToSql).collect();
            let rows = stmt.query_map(args.as_slice(), map_ticket_row).map_err(map_sql_error)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

#[async_trait]
impl TicketRepositoryPort for SqliteTicketRepository {
    async fn create(&self, ticket: Ticket) -> DomainResult<Ticket> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Ticket> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO tickets (id, user_id, subject, body, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    ticket.id,
                    ticket.user_id,
                    ticket.subject,
                    ticket.body,
                    ticket.status.as_str(),
                    to_millis(ticket.created_at),
                ],
            )
            .map_err(map_storage_error)?;
            Ok(ticket)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<Ticket>> {
        self.query(
            "SELECT id, user_id, subject, body, status, created_at FROM tickets
             WHERE user_id = ?1 ORDER BY created_at ASC, rowid ASC",
            Some(user_id.to_string()),
        )
        .await
    }

    async fn list_all(&self) -> DomainResult<Vec<Ticket>> {
        self.query(
            "SELECT id, user_id, subject, body, status, created_at FROM tickets
             ORDER BY created_at ASC, rowid ASC",
            None,
        )
        .await
    }
}

fn map_ticket_row(row: &Row<'_>) -> rusqlite::Result<Ticket> {
    Ok(Ticket {
        id: row.get(0)?,
        user_id: row.get(1)?,
        subject: row.get(2)?,
        body: row.get(3)?,
        status: parse_column::<TicketStatus>(row, 4)?,
        created_at: from_millis(row, 5)?,
    })
}

fn map_sql_error(err: rusqlite::Error) -> familylegacy_domain::PlatformError {
    InfraError::from(err).into()
}
