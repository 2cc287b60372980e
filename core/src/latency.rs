//! Simulated network latency for the in-memory backend.
//!
//! # Design
//! Each operation suspends exactly once, before touching the record
//! store, for the duration configured here. The profile is plain data
//! injected through the composition root, so tests run with
//! [`LatencyProfile::zero`] and stay deterministic.

use std::time::Duration;

use tokio::time::sleep;

/// Per-operation artificial delays standing in for network round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub list: Duration,
    pub get: Duration,
    pub search: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(800),
            get: Duration::from_millis(500),
            search: Duration::from_millis(600),
            create: Duration::from_millis(1000),
            update: Duration::from_millis(800),
            delete: Duration::from_millis(500),
        }
    }
}

impl LatencyProfile {
    /// All-zero profile for deterministic tests.
    pub fn zero() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            search: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

/// Suspend for the simulated round-trip. A zero duration returns
/// without sleeping.
pub(crate) async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        sleep(delay).await;
    }
}
