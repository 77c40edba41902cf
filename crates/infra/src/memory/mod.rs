//! In-memory repository implementations
//!
//! Used for the `memory` storage backend and in tests. Data lives only as
//! long as the process.

pub mod profile_repository;
pub mod ticket_repository;

pub use profile_repository::InMemoryProfileRepository;
pub use ticket_repository::InMemoryTicketRepository;
