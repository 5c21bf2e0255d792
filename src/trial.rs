//! Single Trial Pipeline
//!
//! Chains every stage once: generate a trace, annotate the exact next-use
//! signal, perturb it, and count faults under each policy. The simulators all
//! use the trace's hot-set size `k` as their capacity.

use crate::adaptive::simulate_adaptive_with;
use crate::config::{AdaptiveConfig, NoiseConfig, Policy, TraceConfig};
use crate::noise::NoiseInjector;
use crate::oracle::annotate_oracle;
use crate::predictive::simulate_predictive;
use crate::recency::simulate_recency;
use crate::trace::TraceGenerator;
use crate::Result;
use rand::Rng;

/// Parameters of one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialConfig {
    /// Trace shape. `trace.hot_set` is also the cache capacity.
    pub trace: TraceConfig,
    /// Perturbation applied to the exact signal.
    pub noise: NoiseConfig,
    /// Switch threshold of the adaptive evictor.
    pub threshold: f64,
    /// Branch the adaptive evictor follows first.
    pub initial_policy: Policy,
}

impl TrialConfig {
    /// The adaptive evictor configuration this trial runs with.
    pub fn adaptive(&self) -> AdaptiveConfig {
        AdaptiveConfig {
            capacity: self.trace.hot_set,
            threshold: self.threshold,
            initial_policy: self.initial_policy,
        }
    }

    /// Validates every stage's parameters.
    pub fn validate(&self) -> Result<()> {
        self.trace.validate()?;
        self.noise.validate()?;
        self.adaptive().validate()
    }
}

/// Fault counts of one trial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Blind oracle fed the exact signal (Belady's optimum).
    pub optimal: u64,
    /// Blind oracle fed the perturbed signal.
    pub predictive: u64,
    /// LRU.
    pub recency: u64,
    /// Adaptive evictor fed the perturbed signal.
    pub adaptive: u64,
}

/// Runs one trial of the full pipeline, drawing all randomness from `rng`.
///
/// The trace is drawn before the noise, so a trial is reproducible from the
/// state of `rng` alone.
///
/// # Examples
///
/// ```
/// use paging_rs::config::{NoiseConfig, Policy, TraceConfig};
/// use paging_rs::{run_trial, TrialConfig};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let config = TrialConfig {
///     trace: TraceConfig { hot_set: 4, universe: 40, length: 500, repeat_probability: 0.5 },
///     noise: NoiseConfig { probability: 0.5, window: 50 },
///     threshold: 0.15,
///     initial_policy: Policy::Recency,
/// };
/// let outcome = run_trial(&config, &mut StdRng::seed_from_u64(3)).unwrap();
/// assert!(outcome.optimal <= outcome.predictive);
/// assert!(outcome.optimal <= outcome.recency);
/// ```
pub fn run_trial<R: Rng + ?Sized>(config: &TrialConfig, rng: &mut R) -> Result<TrialOutcome> {
    config.validate()?;
    let k = config.trace.hot_set;

    let trace = TraceGenerator::new(config.trace)?.generate(rng);
    let exact = annotate_oracle(&trace);
    let noisy = NoiseInjector::new(config.noise)?.inject(&exact, rng);

    let outcome = TrialOutcome {
        optimal: simulate_predictive(k, &trace, &exact)?,
        predictive: simulate_predictive(k, &trace, &noisy)?,
        recency: simulate_recency(k, &trace)?,
        adaptive: simulate_adaptive_with(config.adaptive(), &trace, &noisy)?,
    };

    log::debug!("trial {:?}: {:?}", config, outcome);
    Ok(outcome)
}
