//! Read caches layered over repository ports

pub mod profile_cache;

pub use profile_cache::{CachedProfileRepository, ProfileCacheConfig};
