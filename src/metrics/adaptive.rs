//! Adaptive Evictor Metrics
//!
//! The adaptive evictor's own fault counter includes a penalty of `k` faults
//! for every switch between its shadows, so it is generally higher than either
//! shadow's count. Switch activity is reported next to the core metrics.

extern crate alloc;

use super::{CoreMetrics, PagingMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Metrics of an [`AdaptiveEvictor`](crate::AdaptiveEvictor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptiveMetrics {
    /// Core metrics of the adaptive evictor itself. `core.faults` includes
    /// switch penalties.
    pub core: CoreMetrics,
    /// Number of times the followed branch changed.
    pub switches: u64,
    /// Faults charged as switch penalties (`switches * k`).
    pub penalty_faults: u64,
}

impl AdaptiveMetrics {
    /// Creates metrics for an evictor with `capacity` slots.
    pub fn new(capacity: u64) -> Self {
        Self {
            core: CoreMetrics::new(capacity),
            switches: 0,
            penalty_faults: 0,
        }
    }

    /// Charges one switch: `k` faults without a request.
    pub fn record_switch(&mut self) {
        self.switches += 1;
        self.penalty_faults += self.core.capacity;
        self.core.faults += self.core.capacity;
    }

    /// Converts the metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("penalty_faults".to_string(), self.penalty_faults as f64);
        metrics.insert("switches".to_string(), self.switches as f64);
        metrics
    }
}

impl PagingMetrics for AdaptiveMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "Combined"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_charges_capacity() {
        let mut m = AdaptiveMetrics::new(4);
        m.record_switch();
        m.record_switch();
        assert_eq!(m.switches, 2);
        assert_eq!(m.penalty_faults, 8);
        assert_eq!(m.core.faults, 8);
        assert_eq!(m.core.requests, 0);

        let map = m.to_btreemap();
        assert_eq!(map.get("switches"), Some(&2.0));
        assert_eq!(map.get("penalty_faults"), Some(&8.0));
    }
}
