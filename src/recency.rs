//! Least Recently Used Paging
//!
//! Simulates a fixed-capacity page cache that evicts the page whose last access
//! is oldest. It needs no next-use signal.
//!
//! # Algorithm
//!
//! Each slot stores the 0-based step index of its page's last access.
//!
//! - The first `k` steps are unconditional faults that fill the slots in order.
//! - A hit overwrites the resident slot's metric with the current step index.
//! - A fault evicts the slot with the smallest metric (lowest slot index on
//!   ties).
//!
//! Since a trace step has a unique index, ties can only arise between warm-up
//! duplicates, which never happen for generated traces.
//!
//! # Performance Characteristics
//!
//! - Access: O(k)
//! - Space: O(k)

extern crate alloc;

use crate::entry::{Access, Slot};
use crate::error::{check_capacity, Result};
use crate::metrics::{PagingMetrics, RecencyMetrics};
use crate::slots::SlotTable;
use crate::PageId;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

/// Fixed-capacity LRU cache over page ids.
///
/// # Examples
///
/// ```
/// use core::num::NonZeroUsize;
/// use paging_rs::{Access, RecencyEvictor};
///
/// let mut cache = RecencyEvictor::new(NonZeroUsize::new(2).unwrap());
/// cache.access(1);
/// cache.access(2);
/// assert_eq!(cache.access(1), Access::Hit);
/// assert_eq!(cache.access(3), Access::Fault); // page 2 is least recently used
/// assert!(cache.contains(1));
/// assert!(!cache.contains(2));
/// ```
#[derive(Debug, Clone)]
pub struct RecencyEvictor {
    slots: SlotTable,
    steps: usize,
    metrics: RecencyMetrics,
}

impl RecencyEvictor {
    /// Creates an empty LRU cache with `cap` slots.
    pub fn new(cap: NonZeroUsize) -> Self {
        RecencyEvictor {
            slots: SlotTable::new(cap),
            steps: 0,
            metrics: RecencyMetrics::new(cap.get() as u64),
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

    /// The slot array, in slot order. Metrics are last-access step indices.
    pub fn slots(&self) -> &[Slot] {
        self.slots.as_slice()
    }

    /// Metrics collected so far.
    pub fn metrics(&self) -> &RecencyMetrics {
        &self.metrics
    }

    pub(crate) fn copy_pages_into(&self, out: &mut Vec<PageId>) {
        self.slots.copy_pages_into(out);
    }

    /// Presents the next trace step requesting `page`.
    pub fn access(&mut self, page: PageId) -> Access {
        let step = self.steps;
        self.steps += 1;

        if !self.slots.is_full() {
            self.slots.push(page, step);
            self.metrics.core.record_warmup_fault();
            return Access::Fault;
        }

        if let Some(index) = self.slots.find(page) {
            self.slots.set_metric(index, step);
            self.metrics.core.record_hit();
            return Access::Hit;
        }

        if let Some(index) = self.slots.min_metric_index() {
            self.slots.replace(index, page, step);
        }
        self.metrics.core.record_eviction_fault();
        Access::Fault
    }
}

impl PagingMetrics for RecencyEvictor {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

/// Runs an LRU cache with `k` slots over `trace` and returns the number of
/// faults.
///
/// Fails with [`Error::InvalidParameter`](crate::Error::InvalidParameter) if
/// `k == 0` or `k > trace.len()`.
///
/// # Examples
///
/// ```
/// use paging_rs::simulate_recency;
///
/// let thrash = [1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4];
/// assert_eq!(simulate_recency(3, &thrash).unwrap(), 12);
/// ```
pub fn simulate_recency(k: usize, trace: &[PageId]) -> Result<u64> {
    let cap = check_capacity(k, trace.len())?;

    let mut cache = RecencyEvictor::new(cap);
    for &page in trace {
        let _ = cache.access(page);
    }

    log::debug!(
        "lru: k={} n={} faults={}",
        k,
        trace.len(),
        cache.faults()
    );
    Ok(cache.faults())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn cache(cap: usize) -> RecencyEvictor {
        RecencyEvictor::new(NonZeroUsize::new(cap).unwrap())
    }

    #[test]
    fn test_metric_is_last_access_step() {
        let mut c = cache(3);
        c.access(5);
        c.access(6);
        c.access(7);
        assert_eq!(c.access(5), Access::Hit);
        let metrics: std::vec::Vec<usize> = c.slots().iter().map(|s| s.metric).collect();
        assert_eq!(metrics, std::vec![3, 1, 2]);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut c = cache(3);
        for page in [1, 2, 3, 1, 2] {
            c.access(page);
        }
        assert_eq!(c.access(4), Access::Fault);
        assert!(!c.contains(3));
        assert_eq!(c.slots()[2].page, 4);
    }

    #[test]
    fn test_mixed_trace() {
        let trace = [1, 2, 3, 4, 2, 1, 5, 6, 2, 1, 2, 3, 7, 6, 3, 2, 1, 2, 3, 6];
        assert_eq!(simulate_recency(4, &trace), Ok(10));
    }

    #[test]
    fn test_cyclic_trace_thrashes() {
        let trace = [1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4];
        assert_eq!(simulate_recency(3, &trace), Ok(12));
    }

    #[test]
    fn test_capacity_equal_to_length() {
        let trace = [9, 8, 7];
        assert_eq!(simulate_recency(3, &trace), Ok(3));
    }

    #[test]
    fn test_rejects_bad_capacity() {
        assert!(simulate_recency(0, &[1, 2]).is_err());
        assert!(simulate_recency(3, &[1, 2]).is_err());
    }

    #[test]
    fn test_metrics_report() {
        let mut c = cache(2);
        for page in [1, 2, 1, 3] {
            c.access(page);
        }
        let report = PagingMetrics::metrics(&c);
        assert_eq!(report.get("faults"), Some(&3.0));
        assert_eq!(report.get("hits"), Some(&1.0));
        assert_eq!(report.get("evictions"), Some(&1.0));
        assert_eq!(c.algorithm_name(), "LRU");
    }
}
