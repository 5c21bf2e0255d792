//! Blind-oracle metrics.
//!
//! Besides the core counters, the blind oracle records how often the signal it
//! was fed turned out wrong. Both counters stay at zero when the evictor is fed
//! the exact oracle signal of a trace whose first `k` pages are distinct.

extern crate alloc;

use super::{CoreMetrics, PagingMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Metrics of a [`PredictiveEvictor`](crate::PredictiveEvictor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictiveMetrics {
    /// Core metrics common to all simulators.
    pub core: CoreMetrics,
    /// Hits whose stored prediction differed from the position of the hit.
    pub mispredicted_hits: u64,
    /// Evictions whose victim's predicted next use had already passed.
    pub expired_evictions: u64,
}

impl PredictiveMetrics {
    /// Creates metrics for a simulator with `capacity` slots.
    pub fn new(capacity: u64) -> Self {
        Self {
            core: CoreMetrics::new(capacity),
            mispredicted_hits: 0,
            expired_evictions: 0,
        }
    }

    /// Converts the metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert(
            "expired_evictions".to_string(),
            self.expired_evictions as f64,
        );
        metrics.insert(
            "mispredicted_hits".to_string(),
            self.mispredicted_hits as f64,
        );
        metrics
    }
}

impl PagingMetrics for PredictiveMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "BlindOracle"
    }
}
