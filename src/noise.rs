//! Next-Use Signal Perturbation
//!
//! Models an imperfect reuse predictor by corrupting an exact next-use signal.
//! Each entry is independently replaced, with probability `t`, by a value drawn
//! uniformly from a window of width `w`:
//!
//! ```text
//! lo  = max(i + 2, h[i] - floor(w / 2))
//! out = uniform integer in [lo, lo + w)        (w > 0)
//! out = lo                                     (w = 0)
//! ```
//!
//! The upper bound `lo + w` is exclusive, matching a truncated uniform draw
//! over a width-`w` interval. When `lo + w` overflows the draw runs up to
//! `Position::MAX` inclusive.
//!
//! `i` is the 0-based index, so `i + 2` is the first position strictly after
//! the current one and a corrupted prediction never points at or before the
//! step it annotates.

extern crate alloc;

use crate::config::NoiseConfig;
use crate::Position;
use crate::Result;
use alloc::vec::Vec;
use rand::Rng;

/// Applies [`NoiseConfig`] to next-use signals.
///
/// # Examples
///
/// ```
/// use paging_rs::config::NoiseConfig;
/// use paging_rs::NoiseInjector;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let injector = NoiseInjector::new(NoiseConfig { probability: 1.0, window: 4 }).unwrap();
/// let noisy = injector.inject(&[10, 10, 10], &mut StdRng::seed_from_u64(9));
///
/// for (i, &value) in noisy.iter().enumerate() {
///     let lo = (i + 2).max(10 - 2);
///     assert!(value >= lo && value < lo + 4);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NoiseInjector {
    config: NoiseConfig,
}

impl NoiseInjector {
    /// Creates an injector after validating `config`.
    pub fn new(config: NoiseConfig) -> Result<Self> {
        config.validate()?;
        Ok(NoiseInjector { config })
    }

    /// The configuration this injector was built from.
    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// Returns a perturbed copy of `signal`.
    pub fn inject<R: Rng + ?Sized>(&self, signal: &[Position], rng: &mut R) -> Vec<Position> {
        let window = self.config.window;
        let mut corrupted = 0usize;

        let noisy = signal
            .iter()
            .enumerate()
            .map(|(index, &exact)| {
                if !rng.gen_bool(self.config.probability) {
                    return exact;
                }
                corrupted += 1;
                let lo = (index + 2).max(exact.saturating_sub(window / 2));
                if window == 0 {
                    return lo;
                }
                match lo.checked_add(window) {
                    Some(hi) => rng.gen_range(lo..hi),
                    None => rng.gen_range(lo..=Position::MAX),
                }
            })
            .collect();

        log::trace!(
            "corrupted {}/{} signal entries (t={}, w={})",
            corrupted,
            signal.len(),
            self.config.probability,
            window
        );
        noisy
    }
}

/// Perturbs `signal` with corruption probability `t` and window width `w`.
///
/// Fails with [`Error::InvalidParameter`](crate::Error::InvalidParameter) if
/// `t` lies outside `[0, 1]`.
pub fn inject_noise<R: Rng + ?Sized>(
    signal: &[Position],
    probability: f64,
    window: usize,
    rng: &mut R,
) -> Result<Vec<Position>> {
    let injector = NoiseInjector::new(NoiseConfig {
        probability,
        window,
    })?;
    Ok(injector.inject(signal, rng))
}
