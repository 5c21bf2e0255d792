//! Correctness Tests for the Paging Pipeline
//!
//! Validates each stage against small hand-checked traces, then checks the
//! properties that must hold for any seeded random run.
//!
//! ## Test Strategy
//! - Fixed traces with known fault counts for every policy
//! - Seeded random traces for bounds and determinism
//! - Explicit checks of which page is resident after an eviction

use paging_rs::config::{AdaptiveConfig, NoiseConfig, Policy, TraceConfig};
use paging_rs::{
    annotate_oracle, generate_trace, inject_noise, run_trial, simulate_adaptive,
    simulate_adaptive_with, simulate_predictive, simulate_recency, AdaptiveEvictor, Error,
    PageId, PredictiveEvictor, RecencyEvictor, TrialConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::num::NonZeroUsize;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

const KNOWN: [PageId; 10] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3];

// ============================================================================
// TRACE GENERATION
// ============================================================================

#[test]
fn test_trace_length_and_prefix() {
    init_logging();
    let grid = [
        (1, 1, 1, 0.0),
        (3, 3, 50, 0.5),
        (5, 50, 300, 0.0),
        (5, 50, 300, 1.0),
        (20, 200, 2000, 0.5),
    ];
    for (i, &(k, universe, n, e)) in grid.iter().enumerate() {
        let trace = generate_trace(k, universe, n, e, &mut rng(i as u64)).unwrap();
        assert_eq!(trace.len(), n);
        let prefix: Vec<PageId> = (1..=k as PageId).collect();
        assert_eq!(&trace[..k], prefix.as_slice());
        assert!(trace.iter().all(|&p| p >= 1 && p as usize <= universe));
    }
}

#[test]
fn test_trace_rejects_invalid_parameters() {
    let mut r = rng(0);
    assert!(matches!(
        generate_trace(10, 5, 100, 0.5, &mut r),
        Err(Error::InvalidParameter { name: "k", .. })
    ));
    assert!(generate_trace(10, 50, 5, 0.5, &mut r).is_err());
    assert!(matches!(
        generate_trace(5, 50, 100, 1.1, &mut r),
        Err(Error::InvalidParameter { name: "e", .. })
    ));
}

// ============================================================================
// ORACLE AND NOISE
// ============================================================================

#[test]
fn test_oracle_known_annotation() {
    assert_eq!(
        annotate_oracle(&[1, 2, 3, 4, 5, 1, 2, 3, 4, 1]),
        vec![6, 7, 8, 9, 11, 10, 11, 11, 11, 11]
    );
}

#[test]
fn test_noise_stays_in_window() {
    // t = 0.3, w = 2: every entry lies in [lo, lo + 2] with
    // lo = max(i + 2, h - 1) for 0-based i.
    let h = [1, 2, 3, 4, 5];
    for seed in 0..50 {
        let noisy = inject_noise(&h, 0.3, 2, &mut rng(seed)).unwrap();
        assert_eq!(noisy.len(), h.len());
        for (i, (&exact, &value)) in h.iter().zip(&noisy).enumerate() {
            if value == exact {
                continue;
            }
            let lo = (i + 2).max(exact.saturating_sub(1));
            assert!(value >= lo && value <= lo + 2, "seed {seed} index {i}");
        }
    }
}

#[test]
fn test_noise_rejects_invalid_probability() {
    assert!(matches!(
        inject_noise(&[2, 3], -0.1, 4, &mut rng(0)),
        Err(Error::InvalidParameter { name: "t", .. })
    ));
}

// ============================================================================
// PREDICTIVE (BLIND ORACLE) CORRECTNESS
// ============================================================================
// With the exact signal, the blind oracle is Belady's algorithm:
// - evicts the page whose next use is furthest away
// - ties go to the lowest slot

#[test]
fn test_predictive_known_trace() {
    init_logging();
    let oracle = annotate_oracle(&KNOWN);
    assert_eq!(simulate_predictive(3, &KNOWN, &oracle), Ok(6));
}

#[test]
fn test_predictive_evicts_furthest_next_use() {
    let oracle = annotate_oracle(&KNOWN);
    let mut cache = PredictiveEvictor::new(NonZeroUsize::new(3).unwrap());
    for (&page, &next_use) in KNOWN[..4].iter().zip(&oracle) {
        cache.access(page, next_use);
    }
    // Page 3 is next used at position 10, after pages 1 (5) and 2 (6).
    assert!(!cache.contains(3));
    assert!(cache.contains(1));
    assert!(cache.contains(2));
    assert!(cache.contains(4));
}

#[test]
fn test_predictive_rejects_misaligned_signal() {
    let oracle = annotate_oracle(&KNOWN);
    assert!(matches!(
        simulate_predictive(3, &KNOWN, &oracle[1..]),
        Err(Error::InvalidParameter { name: "signal", .. })
    ));
    assert!(simulate_predictive(0, &KNOWN, &oracle).is_err());
    assert!(simulate_predictive(11, &KNOWN, &oracle).is_err());
}

// ============================================================================
// RECENCY (LRU) CORRECTNESS
// ============================================================================

#[test]
fn test_recency_known_traces() {
    let mixed = [1, 2, 3, 4, 2, 1, 5, 6, 2, 1, 2, 3, 7, 6, 3, 2, 1, 2, 3, 6];
    assert_eq!(simulate_recency(4, &mixed), Ok(10));

    let cycle = [1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4];
    assert_eq!(simulate_recency(3, &cycle), Ok(12));
}

#[test]
fn test_recency_evicts_least_recently_used() {
    let mut cache = RecencyEvictor::new(NonZeroUsize::new(3).unwrap());
    for page in [1, 2, 3, 2, 1] {
        cache.access(page);
    }
    cache.access(4);
    assert!(!cache.contains(3));
    cache.access(5);
    assert!(!cache.contains(2));
    assert!(cache.contains(1));
}

// ============================================================================
// ADAPTIVE CORRECTNESS
// ============================================================================

#[test]
fn test_adaptive_known_trace() {
    init_logging();
    let oracle = annotate_oracle(&KNOWN);
    assert_eq!(simulate_adaptive(3, &KNOWN, &oracle, 0.0), Ok(10));
}

#[test]
fn test_adaptive_initial_policy_is_configurable() {
    let oracle = annotate_oracle(&KNOWN);
    let lru_first = AdaptiveConfig::new(3, 0.0);
    let blind_first = AdaptiveConfig {
        initial_policy: Policy::Predictive,
        ..lru_first
    };
    assert_eq!(simulate_adaptive_with(lru_first, &KNOWN, &oracle), Ok(10));
    assert_eq!(simulate_adaptive_with(blind_first, &KNOWN, &oracle), Ok(6));
}

#[test]
fn test_adaptive_without_switch_equals_lru() {
    for seed in 0..10 {
        let mut r = rng(seed);
        let trace = generate_trace(5, 50, 500, 0.6, &mut r).unwrap();
        let oracle = annotate_oracle(&trace);
        let noisy = inject_noise(&oracle, 0.5, 50, &mut r).unwrap();

        let mut cache = AdaptiveEvictor::new(AdaptiveConfig::new(5, f64::INFINITY)).unwrap();
        for (&page, &next_use) in trace.iter().zip(&noisy) {
            cache.access(page, next_use);
        }
        assert_eq!(cache.metrics().switches, 0);
        assert_eq!(Ok(cache.faults()), simulate_recency(5, &trace));
    }
}

#[test]
fn test_adaptive_rejects_negative_threshold() {
    let oracle = annotate_oracle(&KNOWN);
    assert!(matches!(
        simulate_adaptive(3, &KNOWN, &oracle, -0.01),
        Err(Error::InvalidParameter { name: "thr", .. })
    ));
}

// ============================================================================
// PROPERTIES OVER RANDOM TRACES
// ============================================================================

#[test]
fn test_simulations_are_idempotent() {
    let mut r = rng(99);
    let trace = generate_trace(8, 80, 2000, 0.5, &mut r).unwrap();
    let oracle = annotate_oracle(&trace);
    let noisy = inject_noise(&oracle, 0.5, 200, &mut r).unwrap();

    assert_eq!(
        simulate_predictive(8, &trace, &noisy),
        simulate_predictive(8, &trace, &noisy)
    );
    assert_eq!(simulate_recency(8, &trace), simulate_recency(8, &trace));
    assert_eq!(
        simulate_adaptive(8, &trace, &noisy, 0.15),
        simulate_adaptive(8, &trace, &noisy, 0.15)
    );
}

#[test]
fn test_fault_counters_never_decrease() {
    let mut r = rng(5);
    let trace = generate_trace(6, 60, 1000, 0.5, &mut r).unwrap();
    let oracle = annotate_oracle(&trace);
    let noisy = inject_noise(&oracle, 0.7, 300, &mut r).unwrap();
    let cap = NonZeroUsize::new(6).unwrap();

    let mut blind = PredictiveEvictor::new(cap);
    let mut lru = RecencyEvictor::new(cap);
    let mut adaptive = AdaptiveEvictor::new(AdaptiveConfig::new(6, 0.0)).unwrap();
    let mut last = (0, 0, 0);
    for (&page, &next_use) in trace.iter().zip(&noisy) {
        blind.access(page, next_use);
        lru.access(page);
        adaptive.access(page, next_use);
        let now = (blind.faults(), lru.faults(), adaptive.faults());
        assert!(now.0 >= last.0 && now.1 >= last.1 && now.2 >= last.2);
        last = now;
    }
}

#[test]
fn test_exact_oracle_is_optimal() {
    for seed in 0..10 {
        let mut r = rng(seed);
        let trace = generate_trace(4, 40, 800, 0.5, &mut r).unwrap();
        let oracle = annotate_oracle(&trace);
        let noisy = inject_noise(&oracle, 0.8, 100, &mut r).unwrap();

        let opt = simulate_predictive(4, &trace, &oracle).unwrap();
        assert!(opt <= simulate_recency(4, &trace).unwrap());
        assert!(opt <= simulate_predictive(4, &trace, &noisy).unwrap());
    }
}

#[test]
fn test_trial_pipeline_is_reproducible() {
    init_logging();
    let config = TrialConfig {
        trace: TraceConfig {
            hot_set: 10,
            universe: 100,
            length: 3000,
            repeat_probability: 0.5,
        },
        noise: NoiseConfig {
            probability: 0.5,
            window: 200,
        },
        threshold: 0.15,
        initial_policy: Policy::Recency,
    };
    let a = run_trial(&config, &mut rng(17)).unwrap();
    let b = run_trial(&config, &mut rng(17)).unwrap();
    assert_eq!(a, b);
    assert!(a.optimal <= a.predictive && a.optimal <= a.recency);
}
