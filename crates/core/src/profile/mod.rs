pub mod ports;
pub mod service;

pub use service::{MockPayment, ProfileService, ProfileUpdate};
