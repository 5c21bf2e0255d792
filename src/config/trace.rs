//! Configuration for the synthetic trace generator.
//!
//! # Choosing parameters
//!
//! - **`hot_set`** (`k`): size of the hot pool. The generator seeds the trace
//!   with pages `1..=k`, and the simulators use the same `k` as their capacity
//!   in the usual experiments.
//! - **`universe`** (`N`): pages are drawn from `1..=N`. The ratio `k / N`
//!   controls how large the cold pool is.
//! - **`repeat_probability`** (`e`): chance that a step revisits a hot page
//!   rather than promoting a cold one. Higher values give stronger locality.
//!
//! ```text
//! e = 0.0  → every step after warm-up promotes a cold page (little reuse)
//! e = 1.0  → the trace only ever revisits pages 1..=k
//! ```

extern crate alloc;

use crate::error::{check_probability, Error, Result};
use crate::PageId;
use core::fmt;

/// Configuration for [`TraceGenerator`](crate::TraceGenerator).
///
/// # Examples
///
/// ```
/// use paging_rs::config::TraceConfig;
///
/// let config = TraceConfig {
///     hot_set: 5,
///     universe: 20,
///     length: 100,
///     repeat_probability: 0.5,
/// };
/// assert!(config.validate().is_ok());
///
/// // The hot set cannot be larger than the universe.
/// let bad = TraceConfig { universe: 4, ..config };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct TraceConfig {
    /// Size of the hot pool, `k`.
    pub hot_set: usize,
    /// Number of distinct pages, `N`.
    pub universe: usize,
    /// Length of the generated trace, `n`.
    pub length: usize,
    /// Probability of revisiting a hot page, `e`.
    pub repeat_probability: f64,
}

impl TraceConfig {
    /// Checks `1 ≤ k ≤ N`, `k ≤ n`, `N` fits a [`PageId`] and `e ∈ [0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.hot_set == 0 {
            return Err(Error::invalid("k", "hot set size must be at least 1"));
        }
        if self.hot_set > self.universe {
            return Err(Error::invalid(
                "k",
                alloc::format!(
                    "hot set size {} exceeds universe size {}",
                    self.hot_set,
                    self.universe
                ),
            ));
        }
        if self.hot_set > self.length {
            return Err(Error::invalid(
                "k",
                alloc::format!(
                    "hot set size {} exceeds trace length {}",
                    self.hot_set,
                    self.length
                ),
            ));
        }
        if PageId::try_from(self.universe).is_err() {
            return Err(Error::invalid(
                "N",
                alloc::format!("universe size {} does not fit a page id", self.universe),
            ));
        }
        check_probability("e", self.repeat_probability)
    }
}

impl fmt::Debug for TraceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceConfig")
            .field("hot_set", &self.hot_set)
            .field("universe", &self.universe)
            .field("length", &self.length)
            .field("repeat_probability", &self.repeat_probability)
            .finish()
    }
}
