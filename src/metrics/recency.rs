//! LRU Metrics
//!
//! Metrics specific to the least recently used policy.

extern crate alloc;

use super::{CoreMetrics, PagingMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;

/// Metrics of a [`RecencyEvictor`](crate::RecencyEvictor).
///
/// LRU has no policy-specific counters, so this only wraps [`CoreMetrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecencyMetrics {
    /// Core metrics common to all simulators.
    pub core: CoreMetrics,
}

impl RecencyMetrics {
    /// Creates metrics for a simulator with `capacity` slots.
    pub fn new(capacity: u64) -> Self {
        Self {
            core: CoreMetrics::new(capacity),
        }
    }

    /// Converts the metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        self.core.to_btreemap()
    }
}

impl PagingMetrics for RecencyMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
