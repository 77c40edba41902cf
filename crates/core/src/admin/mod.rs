pub mod service;

pub use service::{compute_stats, AdminService};
