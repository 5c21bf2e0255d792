//! Synthetic Reference Trace Generation
//!
//! Produces page reference traces with tunable locality from a rotating
//! hot/cold partition of the page universe.
//!
//! # Algorithm
//!
//! Pages `1..=k` form the initial hot pool and are emitted, in order, as the
//! first `k` steps. Pages `k+1..=N` form the cold pool. Every later step draws
//! one hot candidate and one cold candidate uniformly at random, then:
//!
//! - with probability `e` emits the hot candidate and leaves both pools alone;
//! - otherwise emits the cold candidate and swaps it with the hot candidate, so
//!   the hot pool always holds exactly `k` pages.
//!
//! ```text
//!   hot  [ 1  2  3 ]          cold [ 4  5  6  7 ]
//!            │ promote 6 ──────────────────┘
//!   hot  [ 1  6  3 ]          cold [ 4  5  2  7 ]
//! ```
//!
//! When `N == k` the cold pool is empty and every step revisits a hot page.
//!
//! # Randomness
//!
//! The generator never touches a global RNG; callers pass any [`rand::Rng`],
//! typically a seeded `StdRng`, so a trace is reproducible from its seed.

extern crate alloc;

use crate::config::TraceConfig;
use crate::error::{Error, Result};
use crate::PageId;
use alloc::vec::Vec;
use rand::Rng;

/// Generator for hot/cold rotating reference traces.
///
/// # Examples
///
/// ```
/// use paging_rs::config::TraceConfig;
/// use paging_rs::TraceGenerator;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let generator = TraceGenerator::new(TraceConfig {
///     hot_set: 3,
///     universe: 10,
///     length: 50,
///     repeat_probability: 0.7,
/// })
/// .unwrap();
///
/// let trace = generator.generate(&mut StdRng::seed_from_u64(1));
/// assert_eq!(trace.len(), 50);
/// assert_eq!(&trace[..3], &[1, 2, 3]);
/// assert!(trace.iter().all(|&p| (1..=10).contains(&p)));
/// ```
#[derive(Debug, Clone)]
pub struct TraceGenerator {
    config: TraceConfig,
    hot_set: PageId,
    universe: PageId,
}

impl TraceGenerator {
    /// Creates a generator after validating `config`.
    pub fn new(config: TraceConfig) -> Result<Self> {
        config.validate()?;
        let universe = PageId::try_from(config.universe)
            .map_err(|_| Error::invalid("N", "universe size does not fit a page id"))?;
        let hot_set = PageId::try_from(config.hot_set)
            .map_err(|_| Error::invalid("k", "hot set size does not fit a page id"))?;
        Ok(TraceGenerator {
            config,
            hot_set,
            universe,
        })
    }

    /// The configuration this generator was built from.
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Generates one trace of `config.length` pages.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<PageId> {
        let length = self.config.length;
        let repeat = self.config.repeat_probability;

        let mut hot: Vec<PageId> = (1..=self.hot_set).collect();
        let mut cold: Vec<PageId> = (self.hot_set + 1..=self.universe).collect();

        let mut trace = Vec::with_capacity(length);
        trace.extend_from_slice(&hot);

        let mut promotions = 0usize;
        for _ in hot.len()..length {
            let h = rng.gen_range(0..hot.len());
            let c = if cold.is_empty() {
                None
            } else {
                Some(rng.gen_range(0..cold.len()))
            };
            let revisit = rng.gen_bool(repeat);

            match c {
                Some(c) if !revisit => {
                    trace.push(cold[c]);
                    core::mem::swap(&mut hot[h], &mut cold[c]);
                    promotions += 1;
                }
                _ => trace.push(hot[h]),
            }
        }

        log::trace!(
            "generated trace: n={} k={} N={} e={} promotions={}",
            length,
            self.hot_set,
            self.universe,
            repeat,
            promotions
        );
        trace
    }
}

/// Generates a trace of length `n` over pages `1..=N` with a hot set of `k`
/// pages and revisit probability `e`.
///
/// Fails with [`Error::InvalidParameter`] if `k == 0`, `k > N`, `k > n` or
/// `e` lies outside `[0, 1]`.
pub fn generate_trace<R: Rng + ?Sized>(
    k: usize,
    universe: usize,
    length: usize,
    repeat_probability: f64,
    rng: &mut R,
) -> Result<Vec<PageId>> {
    let generator = TraceGenerator::new(TraceConfig {
        hot_set: k,
        universe,
        length,
        repeat_probability,
    })?;
    Ok(generator.generate(rng))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;
    use std::vec::Vec;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_prefix_is_one_to_k() {
        for seed in 0..10 {
            let trace = generate_trace(6, 40, 300, 0.4, &mut rng(seed)).unwrap();
            assert_eq!(trace.len(), 300);
            assert_eq!(&trace[..6], &[1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_pages_stay_in_universe() {
        let trace = generate_trace(4, 9, 500, 0.3, &mut rng(3)).unwrap();
        assert!(trace.iter().all(|&p| (1..=9).contains(&p)));
    }

    #[test]
    fn test_full_repeat_never_leaves_hot_set() {
        let trace = generate_trace(4, 50, 400, 1.0, &mut rng(11)).unwrap();
        assert!(trace.iter().all(|&p| (1..=4).contains(&p)));
    }

    #[test]
    fn test_full_repeat_with_length_k_is_identity() {
        let trace = generate_trace(5, 5, 5, 1.0, &mut rng(0)).unwrap();
        assert_eq!(trace, Vec::from([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_zero_repeat_always_promotes() {
        // Each emitted page comes from the cold pool, while the page emitted
        // one step earlier was just promoted into the hot pool.
        let k = 3;
        let trace = generate_trace(k, 30, 200, 0.0, &mut rng(5)).unwrap();
        let initial: BTreeSet<PageId> = (1..=3).collect();
        assert!(!initial.contains(&trace[k]));
        for pair in trace[k..].windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_empty_cold_pool_revisits() {
        let trace = generate_trace(3, 3, 60, 0.0, &mut rng(2)).unwrap();
        assert!(trace.iter().all(|&p| (1..=3).contains(&p)));
    }

    #[test]
    fn test_same_seed_same_trace() {
        let a = generate_trace(5, 20, 100, 0.5, &mut rng(42)).unwrap();
        let b = generate_trace(5, 20, 100, 0.5, &mut rng(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(generate_trace(0, 5, 5, 0.5, &mut rng(0)).is_err());
        assert!(generate_trace(6, 5, 10, 0.5, &mut rng(0)).is_err());
        assert!(generate_trace(5, 10, 4, 0.5, &mut rng(0)).is_err());
        assert!(generate_trace(5, 10, 20, 1.5, &mut rng(0)).is_err());
        assert!(generate_trace(5, 10, 20, -0.5, &mut rng(0)).is_err());
    }
}
