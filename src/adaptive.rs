//! Adaptive Paging
//!
//! Runs a [`PredictiveEvictor`] and a [`RecencyEvictor`] side by side as
//! shadows over the same trace and follows whichever one is faulting less.
//! The adaptive evictor's own fault count is what a real cache would pay by
//! mirroring the followed shadow, plus `k` faults each time it changes sides.
//!
//! # Algorithm
//!
//! The first `k` steps are warm-up: every counter faults and the visible cache
//! fills in trace order. Every later step runs three phases in order:
//!
//! 1. **Switch check.** If the followed shadow's fault count exceeds
//!    `(1 + thr)` times the other shadow's, follow the other one instead,
//!    charge `k` penalty faults and copy the new shadow's resident pages into
//!    the visible cache.
//! 2. **Predictive shadow.** Advance it. A fault while following it costs one
//!    adaptive fault and refreshes the visible cache.
//! 3. **Recency shadow.** Same, for LRU.
//!
//! Both shadows advance on every step no matter which one is followed.
//!
//! ```text
//!              lru > (1+thr)·blind
//!     ┌─────────┐ ───────────────▶ ┌─────────────┐
//!     │ Recency │                  │ Predictive  │
//!     └─────────┘ ◀─────────────── └─────────────┘
//!              blind > (1+thr)·lru
//! ```
//!
//! The visible cache is a value snapshot owned by the adaptive evictor; later
//! shadow mutations never show through it.

extern crate alloc;

use crate::config::{AdaptiveConfig, Policy};
use crate::entry::Access;
use crate::error::{check_capacity, check_signal, Error, Result};
use crate::metrics::{AdaptiveMetrics, PagingMetrics};
use crate::predictive::PredictiveEvictor;
use crate::recency::RecencyEvictor;
use crate::{PageId, Position};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

/// Evictor that follows either a blind-oracle or an LRU shadow, switching
/// between them on a relative fault threshold.
///
/// # Examples
///
/// ```
/// use paging_rs::config::{AdaptiveConfig, Policy};
/// use paging_rs::{annotate_oracle, AdaptiveEvictor};
///
/// let trace = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3];
/// let oracle = annotate_oracle(&trace);
///
/// let mut cache = AdaptiveEvictor::new(AdaptiveConfig::new(3, 0.0)).unwrap();
/// for (&page, &next_use) in trace.iter().zip(&oracle) {
///     cache.access(page, next_use);
/// }
///
/// assert_eq!(cache.following(), Policy::Predictive);
/// assert_eq!(cache.metrics().switches, 1);
/// assert_eq!(cache.faults(), 10);
/// assert_eq!(cache.resident(), &[3, 2, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveEvictor {
    config: AdaptiveConfig,
    cap: NonZeroUsize,
    following: Policy,
    predictive: PredictiveEvictor,
    recency: RecencyEvictor,
    visible: Vec<PageId>,
    steps: usize,
    metrics: AdaptiveMetrics,
}

impl AdaptiveEvictor {
    /// Creates an adaptive evictor after validating `config`.
    pub fn new(config: AdaptiveConfig) -> Result<Self> {
        config.validate()?;
        let cap = NonZeroUsize::new(config.capacity)
            .ok_or_else(|| Error::invalid("k", "cache capacity must be at least 1"))?;

        Ok(AdaptiveEvictor {
            config,
            cap,
            following: config.initial_policy,
            predictive: PredictiveEvictor::new(cap),
            recency: RecencyEvictor::new(cap),
            visible: Vec::with_capacity(cap.get()),
            steps: 0,
            metrics: AdaptiveMetrics::new(cap.get() as u64),
        })
    }

    /// The configuration this evictor was built from.
    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    /// Number of slots.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    /// The shadow currently followed.
    #[inline]
    pub fn following(&self) -> Policy {
        self.following
    }

    /// Pages in the visible cache, in the slot order of the shadow they were
    /// last copied from.
    pub fn resident(&self) -> &[PageId] {
        &self.visible
    }

    /// The blind-oracle shadow.
    pub fn predictive(&self) -> &PredictiveEvictor {
        &self.predictive
    }

    /// The LRU shadow.
    pub fn recency(&self) -> &RecencyEvictor {
        &self.recency
    }

    /// Number of trace steps consumed so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The adaptive fault count, including switch penalties.
    #[inline]
    pub fn faults(&self) -> u64 {
        self.metrics.core.faults
    }

    /// Metrics collected so far.
    pub fn metrics(&self) -> &AdaptiveMetrics {
        &self.metrics
    }

    /// Presents the next trace step: `page` is requested and the signal
    /// predicts its next use at 1-based position `next_use`.
    ///
    /// Returns the outcome for the followed shadow after any switch this step
    /// triggered. Switch penalties are visible through [`faults`](Self::faults)
    /// only.
    pub fn access(&mut self, page: PageId, next_use: Position) -> Access {
        self.steps += 1;

        if self.steps <= self.cap.get() {
            let _ = self.predictive.access(page, next_use);
            let _ = self.recency.access(page);
            self.visible.push(page);
            self.metrics.core.record_warmup_fault();
            return Access::Fault;
        }

        if self.should_switch() {
            self.switch();
        }

        let predicted = self.predictive.access(page, next_use);
        if predicted.is_fault() && self.following == Policy::Predictive {
            self.predictive.copy_pages_into(&mut self.visible);
        }

        let recent = self.recency.access(page);
        if recent.is_fault() && self.following == Policy::Recency {
            self.recency.copy_pages_into(&mut self.visible);
        }

        let outcome = match self.following {
            Policy::Predictive => predicted,
            Policy::Recency => recent,
        };
        match outcome {
            Access::Hit => self.metrics.core.record_hit(),
            Access::Fault => self.metrics.core.record_eviction_fault(),
        }
        outcome
    }

    fn shadow_faults(&self, policy: Policy) -> u64 {
        match policy {
            Policy::Predictive => self.predictive.faults(),
            Policy::Recency => self.recency.faults(),
        }
    }

    fn should_switch(&self) -> bool {
        let followed = self.shadow_faults(self.following) as f64;
        let other = self.shadow_faults(self.following.other()) as f64;
        followed > (1.0 + self.config.threshold) * other
    }

    fn switch(&mut self) {
        let from = self.following;
        self.following = from.other();
        self.metrics.record_switch();
        match self.following {
            Policy::Predictive => self.predictive.copy_pages_into(&mut self.visible),
            Policy::Recency => self.recency.copy_pages_into(&mut self.visible),
        }

        log::debug!(
            "adaptive: step {} switching {} -> {} (lru={}, blind={}, total={})",
            self.steps,
            from,
            self.following,
            self.recency.faults(),
            self.predictive.faults(),
            self.metrics.core.faults
        );
    }
}

impl PagingMetrics for AdaptiveEvictor {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

/// Runs the adaptive evictor with `k` slots and switch threshold `thr`,
/// starting out on the LRU shadow, and returns its fault count.
///
/// Fails with [`Error::InvalidParameter`] if `k == 0`, `k > trace.len()`,
/// `signal.len() != trace.len()` or `thr` is negative or NaN.
///
/// # Examples
///
/// ```
/// use paging_rs::{annotate_oracle, simulate_adaptive};
///
/// let trace = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3];
/// let oracle = annotate_oracle(&trace);
/// assert_eq!(simulate_adaptive(3, &trace, &oracle, 0.0).unwrap(), 10);
/// ```
pub fn simulate_adaptive(
    k: usize,
    trace: &[PageId],
    signal: &[Position],
    threshold: f64,
) -> Result<u64> {
    simulate_adaptive_with(AdaptiveConfig::new(k, threshold), trace, signal)
}

/// Runs the adaptive evictor described by `config` over `trace` and returns
/// its fault count.
///
/// Same preconditions as [`simulate_adaptive`].
pub fn simulate_adaptive_with(
    config: AdaptiveConfig,
    trace: &[PageId],
    signal: &[Position],
) -> Result<u64> {
    config.validate()?;
    check_capacity(config.capacity, trace.len())?;
    check_signal(trace.len(), signal.len())?;

    let mut cache = AdaptiveEvictor::new(config)?;
    for (&page, &next_use) in trace.iter().zip(signal) {
        let _ = cache.access(page, next_use);
    }

    log::debug!(
        "adaptive: k={} n={} thr={} faults={} switches={} following={}",
        config.capacity,
        trace.len(),
        config.threshold,
        cache.faults(),
        cache.metrics().switches,
        cache.following()
    );
    Ok(cache.faults())
}
