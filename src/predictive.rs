//! Blind-Oracle Paging
//!
//! Simulates a fixed-capacity page cache that evicts using a supplied next-use
//! signal. Fed the exact oracle signal this is Belady's optimal policy; fed a
//! perturbed signal it models a learned reuse predictor.
//!
//! # Algorithm
//!
//! - The first `k` steps are unconditional faults. Each fills the next free
//!   slot and stores that step's signal value as the slot's metric.
//! - On a hit, the resident slot's metric is replaced by the current signal
//!   value.
//! - On a fault, the slot with the largest metric is evicted (the lowest slot
//!   index wins ties) and receives the requested page and current signal value.
//!
//! # Performance Characteristics
//!
//! - Access: O(k), a linear scan over the slots
//! - Space: O(k)

extern crate alloc;

use crate::entry::{Access, Slot};
use crate::error::{check_capacity, check_signal, Result};
use crate::metrics::{PagingMetrics, PredictiveMetrics};
use crate::slots::SlotTable;
use crate::{PageId, Position};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

/// Fixed-capacity cache evicting the page with the furthest predicted next use.
///
/// # Examples
///
/// ```
/// use core::num::NonZeroUsize;
/// use paging_rs::{Access, PredictiveEvictor};
///
/// let mut cache = PredictiveEvictor::new(NonZeroUsize::new(2).unwrap());
/// assert_eq!(cache.access(1, 3), Access::Fault); // warm-up
/// assert_eq!(cache.access(2, 5), Access::Fault); // warm-up
/// assert_eq!(cache.access(1, 6), Access::Hit);
/// assert_eq!(cache.access(3, 7), Access::Fault); // evicts page 1 (next use 6)
/// assert!(!cache.contains(1));
/// assert_eq!(cache.faults(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PredictiveEvictor {
    slots: SlotTable,
    steps: usize,
    metrics: PredictiveMetrics,
}

impl PredictiveEvictor {
    /// Creates an empty evictor with `cap` slots.
    pub fn new(cap: NonZeroUsize) -> Self {
        PredictiveEvictor {
            slots: SlotTable::new(cap),
            steps: 0,
            metrics: PredictiveMetrics::new(cap.get() as u64),
        }
    }

    /// Number of slots.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.slots.cap()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` before the first access.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.len() == 0
    }

    /// Number of trace steps consumed so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Total faults so far, including warm-up.
    #[inline]
    pub fn faults(&self) -> u64 {
        self.metrics.core.faults
    }

    /// Returns `true` if `page` is resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.find(page).is_some()
    }

    /// The slot array, in slot order.
    pub fn slots(&self) -> &[Slot] {
        self.slots.as_slice()
    }

    /// Metrics collected so far.
    pub fn metrics(&self) -> &PredictiveMetrics {
        &self.metrics
    }

    pub(crate) fn copy_pages_into(&self, out: &mut Vec<PageId>) {
        self.slots.copy_pages_into(out);
    }

    /// Presents the next trace step: `page` is requested and, according to the
    /// signal, will next be used at 1-based position `next_use`.
    pub fn access(&mut self, page: PageId, next_use: Position) -> Access {
        self.steps += 1;
        let position = self.steps;

        if !self.slots.is_full() {
            self.slots.push(page, next_use);
            self.metrics.core.record_warmup_fault();
            return Access::Fault;
        }

        if let Some(index) = self.slots.find(page) {
            if self.slots.as_slice()[index].metric != position {
                self.metrics.mispredicted_hits += 1;
            }
            self.slots.set_metric(index, next_use);
            self.metrics.core.record_hit();
            return Access::Hit;
        }

        if let Some(index) = self.slots.max_metric_index() {
            let victim = self.slots.replace(index, page, next_use);
            if victim.metric <= position {
                self.metrics.expired_evictions += 1;
            }
        }
        self.metrics.core.record_eviction_fault();
        Access::Fault
    }
}

impl PagingMetrics for PredictiveEvictor {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

/// Runs a blind-oracle cache with `k` slots over `trace`, using `signal` as
/// the next-use predictions, and returns the number of faults.
///
/// Fails with [`Error::InvalidParameter`](crate::Error::InvalidParameter) if
/// `k == 0`, `k > trace.len()` or `signal.len() != trace.len()`.
///
/// # Examples
///
/// ```
/// use paging_rs::{annotate_oracle, simulate_predictive};
///
/// let trace = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3];
/// let oracle = annotate_oracle(&trace);
/// assert_eq!(simulate_predictive(3, &trace, &oracle).unwrap(), 6);
/// ```
pub fn simulate_predictive(k: usize, trace: &[PageId], signal: &[Position]) -> Result<u64> {
    let cap = check_capacity(k, trace.len())?;
    check_signal(trace.len(), signal.len())?;

    let mut cache = PredictiveEvictor::new(cap);
    for (&page, &next_use) in trace.iter().zip(signal) {
        let _ = cache.access(page, next_use);
    }

    log::debug!(
        "blind oracle: k={} n={} faults={} mispredicted_hits={}",
        k,
        trace.len(),
        cache.faults(),
        cache.metrics().mispredicted_hits
    );
    Ok(cache.faults())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::annotate_oracle;
    use std::vec::Vec;

    fn cache(cap: usize) -> PredictiveEvictor {
        PredictiveEvictor::new(NonZeroUsize::new(cap).unwrap())
    }

    #[test]
    fn test_warmup_faults_fill_slots_in_order() {
        let mut c = cache(3);
        assert!(c.is_empty());
        for (page, next) in [(4, 9), (5, 8), (6, 7)] {
            assert_eq!(c.access(page, next), Access::Fault);
        }
        let pages: Vec<PageId> = c.slots().iter().map(|s| s.page).collect();
        assert_eq!(pages, Vec::from([4, 5, 6]));
        assert_eq!(c.metrics().core.warmup_faults, 3);
        assert_eq!(c.faults(), 3);
    }

    #[test]
    fn test_hit_refreshes_prediction() {
        let mut c = cache(2);
        c.access(1, 3);
        c.access(2, 10);
        assert_eq!(c.access(1, 20), Access::Hit);
        assert_eq!(c.slots()[0].metric, 20);
        // Page 1 now has the furthest prediction and is evicted.
        assert_eq!(c.access(3, 5), Access::Fault);
        assert!(!c.contains(1));
        assert!(c.contains(2));
        assert!(c.contains(3));
    }

    #[test]
    fn test_ties_evict_lowest_slot() {
        let mut c = cache(3);
        c.access(1, 9);
        c.access(2, 9);
        c.access(3, 4);
        assert_eq!(c.access(7, 5), Access::Fault);
        assert_eq!(c.slots()[0].page, 7);
        assert_eq!(c.slots()[1].page, 2);
    }

    #[test]
    fn test_exact_oracle_reports_no_mispredictions() {
        let trace = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5, 1];
        let oracle = annotate_oracle(&trace);
        let mut c = cache(3);
        for (&page, &next) in trace.iter().zip(&oracle) {
            c.access(page, next);
        }
        assert_eq!(c.metrics().mispredicted_hits, 0);
        assert_eq!(c.metrics().expired_evictions, 0);
    }

    #[test]
    fn test_stale_prediction_is_counted() {
        let mut c = cache(2);
        c.access(1, 2); // claims page 1 recurs at step 2
        c.access(2, 100);
        // Step 3: page 3 faults and evicts page 2 (furthest); page 1's
        // prediction of step 2 has expired but it is not the victim.
        c.access(3, 50);
        assert_eq!(c.metrics().expired_evictions, 0);
        // Step 4: page 1 hits although it was predicted for step 2.
        assert_eq!(c.access(1, 60), Access::Hit);
        assert_eq!(c.metrics().mispredicted_hits, 1);
    }

    #[test]
    fn test_simulate_known_trace() {
        let trace = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3];
        let oracle = annotate_oracle(&trace);
        assert_eq!(simulate_predictive(3, &trace, &oracle), Ok(6));
    }

    #[test]
    fn test_simulate_rejects_bad_input() {
        let trace = [1, 2, 3];
        let signal = [4, 4, 4];
        assert!(simulate_predictive(0, &trace, &signal).is_err());
        assert!(simulate_predictive(4, &trace, &signal).is_err());
        assert!(simulate_predictive(2, &trace, &signal[..2]).is_err());
    }
}
