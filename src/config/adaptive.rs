//! Configuration for the adaptive evictor.
//!
//! The adaptive evictor runs a predictive and a recency shadow side by side and
//! reports the faults of whichever one it is following. It switches when the
//! followed shadow has faulted more than `(1 + threshold)` times the other one.
//!
//! `initial_policy` selects the branch followed before any switch. Recency is
//! the default.

extern crate alloc;

use crate::error::{Error, Result};
use core::fmt;

/// The shadow policy an [`AdaptiveEvictor`](crate::AdaptiveEvictor) follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// Follow the least recently used shadow.
    #[default]
    Recency,
    /// Follow the blind-oracle shadow.
    Predictive,
}

impl Policy {
    /// The branch a switch moves to.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Policy::Recency => Policy::Predictive,
            Policy::Predictive => Policy::Recency,
        }
    }

    /// Short name used in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Recency => "LRU",
            Policy::Predictive => "BlindOracle",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for an [`AdaptiveEvictor`](crate::AdaptiveEvictor).
///
/// # Examples
///
/// ```
/// use paging_rs::config::{AdaptiveConfig, Policy};
///
/// let config = AdaptiveConfig::new(4, 0.15);
/// assert_eq!(config.initial_policy, Policy::Recency);
///
/// let predictive_first = AdaptiveConfig { initial_policy: Policy::Predictive, ..config };
/// assert!(predictive_first.validate().is_ok());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct AdaptiveConfig {
    /// Number of slots, `k`. Also the fault penalty charged per switch.
    pub capacity: usize,
    /// Relative fault margin before switching, `thr`.
    pub threshold: f64,
    /// Branch followed before the first switch.
    pub initial_policy: Policy,
}

impl AdaptiveConfig {
    /// Creates a configuration that starts out following recency.
    pub fn new(capacity: usize, threshold: f64) -> Self {
        Self {
            capacity,
            threshold,
            initial_policy: Policy::default(),
        }
    }

    /// Checks `k ≥ 1` and `thr ≥ 0`. NaN thresholds are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::invalid("k", "cache capacity must be at least 1"));
        }
        if self.threshold.is_nan() || self.threshold < 0.0 {
            return Err(Error::invalid(
                "thr",
                alloc::format!("switch threshold must be >= 0, got {}", self.threshold),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for AdaptiveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptiveConfig")
            .field("capacity", &self.capacity)
            .field("threshold", &self.threshold)
            .field("initial_policy", &self.initial_policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_other() {
        assert_eq!(Policy::Recency.other(), Policy::Predictive);
        assert_eq!(Policy::Predictive.other(), Policy::Recency);
        assert_eq!(Policy::default(), Policy::Recency);
    }

    #[test]
    fn test_adaptive_config_validation() {
        assert!(AdaptiveConfig::new(3, 0.0).validate().is_ok());
        assert!(AdaptiveConfig::new(3, f64::INFINITY).validate().is_ok());
        assert!(AdaptiveConfig::new(0, 0.1).validate().is_err());
        assert!(matches!(
            AdaptiveConfig::new(3, -0.1).validate(),
            Err(Error::InvalidParameter { name: "thr", .. })
        ));
        assert!(AdaptiveConfig::new(3, f64::NAN).validate().is_err());
    }
}
