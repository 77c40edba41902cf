//! Connection acquisition counters for the SQLite pool.

use std::sync::atomic::{AtomicU64, Ordering};

use super::types::PoolMetrics;

/// Lock-free counters updated on every `get_sqlite_connection` call.
#[derive(Debug, Default)]
pub struct StorageMetrics {
    acquired: AtomicU64,
    timeouts: AtomicU64,
    errors: AtomicU64,
    total_wait_ms: AtomicU64,
}

impl StorageMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_acquired(&self, wait_ms: u64) {
        self.acquired.fetch_add(1, Ordering::Relaxed);
        self.total_wait_ms.fetch_add(wait_ms, Ordering::Relaxed);
    }

    pub fn record_timeout(&self) {
        self.timeouts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of the counters.
    pub fn snapshot(&self) -> PoolMetrics {
        let acquired = self.acquired.load(Ordering::Relaxed);
        let total_wait_ms = self.total_wait_ms.load(Ordering::Relaxed);

        PoolMetrics {
            connections_acquired: acquired,
            connections_timeout: self.timeouts.load(Ordering::Relaxed),
            connections_error: self.errors.load(Ordering::Relaxed),
            avg_acquisition_time_ms: total_wait_ms.checked_div(acquired).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_wait_time_over_acquisitions() {
        let metrics = StorageMetrics::new();
        metrics.record_acquired(100);
        metrics.record_acquired(200);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.connections_acquired, 2);
        assert_eq!(snapshot.avg_acquisition_time_ms, 150);
    }

    #[test]
    fn failures_are_counted_separately() {
        let metrics = StorageMetrics::new();
        metrics.record_timeout();
        metrics.record_error();
        metrics.record_error();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.connections_timeout, 1);
        assert_eq!(snapshot.connections_error, 2);
        assert_eq!(snapshot.connections_acquired, 0);
        assert_eq!(snapshot.avg_acquisition_time_ms, 0);
    }
}
