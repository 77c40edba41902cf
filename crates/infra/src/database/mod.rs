//! Database implementations

pub mod manager;
pub mod profile_repository;
pub mod ticket_repository;

pub use familylegacy_common::storage::PoolMetrics;
pub use manager::DbManager;
pub use profile_repository::SqliteProfileRepository;
pub use ticket_repository::SqliteTicketRepository;
