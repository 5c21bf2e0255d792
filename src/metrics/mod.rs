//! Paging Metrics System
//!
//! Provides the counters every simulator keeps while it consumes a trace,
//! reported through BTreeMap-based metric maps. Each policy tracks its own
//! specific metrics while implementing the common [`PagingMetrics`] trait.
//!
//! Metric maps are `BTreeMap`s, so keys always come out in sorted order.
//!
//! # Fault accounting
//!
//! The fault counter only ever increases. Warm-up steps (the first `k` steps
//! of a trace) are faults for every policy and are also counted separately in
//! `warmup_faults`.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod adaptive;
pub mod predictive;
pub mod recency;

pub use adaptive::AdaptiveMetrics;
pub use predictive::PredictiveMetrics;
pub use recency::RecencyMetrics;

/// Common metrics tracked by all simulators.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreMetrics {
    /// Total number of trace steps presented to the simulator.
    pub requests: u64,

    /// Steps whose page was already resident.
    pub hits: u64,

    /// Steps whose page had to be loaded, including warm-up.
    pub faults: u64,

    /// Faults taken while the slot table was still filling.
    pub warmup_faults: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,

    /// Number of slots, `k`.
    pub capacity: u64,
}

impl CoreMetrics {
    /// Creates a new metrics record for a simulator with `capacity` slots.
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Records a hit.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.hits += 1;
    }

    /// Records a warm-up fault: the page is loaded into a free slot.
    pub fn record_warmup_fault(&mut self) {
        self.requests += 1;
        self.faults += 1;
        self.warmup_faults += 1;
    }

    /// Records a fault that evicted a resident page.
    pub fn record_eviction_fault(&mut self) {
        self.requests += 1;
        self.faults += 1;
        self.evictions += 1;
    }

    /// Hit rate between 0.0 and 1.0, or 0.0 before the first request.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fault rate between 0.0 and 1.0, or 0.0 before the first request.
    pub fn fault_rate(&self) -> f64 {
        if self.requests > 0 {
            self.faults as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Convert core metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("capacity".to_string(), self.capacity as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("faults".to_string(), self.faults as f64);
        metrics.insert("hits".to_string(), self.hits as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("warmup_faults".to_string(), self.warmup_faults as f64);

        metrics.insert("fault_rate".to_string(), self.fault_rate());
        metrics.insert("hit_rate".to_string(), self.hit_rate());

        metrics
    }
}

/// Trait that all simulators implement for metrics reporting.
///
/// Lets a driver collect and compare metrics across policies without knowing
/// which simulator produced them.
pub trait PagingMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Policy name for identification, e.g. `"LRU"`.
    fn algorithm_name(&self) -> &'static str;
}
