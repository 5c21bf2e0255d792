//! Configuration for next-use signal perturbation.

use crate::error::{check_probability, Result};
use core::fmt;

/// Configuration for [`NoiseInjector`](crate::NoiseInjector).
///
/// `probability` (`t`) is the chance that any single signal entry is
/// replaced; `window` (`w`) is the width of the range the replacement is
/// drawn from.
///
/// # Examples
///
/// ```
/// use paging_rs::config::NoiseConfig;
///
/// let config = NoiseConfig { probability: 0.3, window: 200 };
/// assert!(config.validate().is_ok());
/// assert!(NoiseConfig { probability: 1.2, window: 2 }.validate().is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct NoiseConfig {
    /// Probability of corrupting an entry, `t`.
    pub probability: f64,
    /// Width of the replacement window, `w`.
    pub window: usize,
}

impl NoiseConfig {
    /// A configuration that leaves every signal untouched.
    pub fn exact() -> Self {
        Self {
            probability: 0.0,
            window: 0,
        }
    }

    /// Checks `t ∈ [0, 1]`. Negative windows are unrepresentable.
    pub fn validate(&self) -> Result<()> {
        check_probability("t", self.probability)
    }
}

impl fmt::Debug for NoiseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseConfig")
            .field("probability", &self.probability)
            .field("window", &self.window)
            .finish()
    }
}
