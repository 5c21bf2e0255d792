// Data models for paging experiments

use clap::ValueEnum;
use paging_rs::config::{NoiseConfig, Policy, TraceConfig};
use paging_rs::{Error, TrialConfig};
use serde::Serialize;
use std::fmt;

/// Canned parameter sets for the two reference experiments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Regime {
    /// e = 0.5, t = 0.5, w = 200: LRU does worse than the predictions
    #[value(name = "1")]
    RecencyWorse,
    /// e = 0.6, t = 0.7, w = 1000: the predictions do worse than LRU
    #[value(name = "2")]
    PredictionsWorse,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::RecencyWorse => "regime-1",
            Regime::PredictionsWorse => "regime-2",
        }
    }

    /// Base parameters shared by every point of a sweep in this regime
    pub fn base(&self) -> Params {
        let (repeat_probability, noise_probability, window) = match self {
            Regime::RecencyWorse => (0.5, 0.5, 200),
            Regime::PredictionsWorse => (0.6, 0.7, 1000),
        };
        Params {
            k: 20,
            universe: 200,
            length: 10_000,
            repeat_probability,
            noise_probability,
            window,
            threshold: 0.15,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The parameter varied across a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Axis {
    /// Cache size and hot-set size, with N = 10k
    K,
    /// Noise window width
    W,
    /// Revisit probability of the trace generator
    E,
    /// Corruption probability of the noise injector
    T,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::K => "k",
            Axis::W => "w",
            Axis::E => "e",
            Axis::T => "t",
        }
    }

    /// Values swept when none are given on the command line
    pub fn default_values(&self) -> Vec<f64> {
        match self {
            Axis::K => vec![5.0, 10.0, 15.0, 20.0, 25.0, 30.0],
            Axis::W => vec![10.0, 200.0, 300.0, 500.0, 700.0, 1000.0],
            Axis::E | Axis::T => vec![0.2, 0.3, 0.5, 0.7, 0.8],
        }
    }

    fn is_integral(&self) -> bool {
        matches!(self, Axis::K | Axis::W)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full parameter set of one sweep point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub k: usize,
    pub universe: usize,
    pub length: usize,
    pub repeat_probability: f64,
    pub noise_probability: f64,
    pub window: usize,
    pub threshold: f64,
}

impl Params {
    /// Returns a copy with `axis` set to `value`
    pub fn with(&self, axis: Axis, value: f64) -> Result<Params, Error> {
        if axis.is_integral() && (value < 0.0 || value.fract() != 0.0 || !value.is_finite()) {
            return Err(Error::InvalidParameter {
                name: axis.as_str(),
                reason: format!("sweep value {value} is not a non-negative integer"),
            });
        }

        let mut params = *self;
        match axis {
            Axis::K => {
                params.k = value as usize;
                params.universe = params.k.checked_mul(10).ok_or_else(|| Error::InvalidParameter {
                    name: "k",
                    reason: format!("sweep value {value} overflows the page universe"),
                })?;
            }
            Axis::W => params.window = value as usize,
            Axis::E => params.repeat_probability = value,
            Axis::T => params.noise_probability = value,
        }
        Ok(params)
    }

    /// The single-trial configuration for these parameters
    pub fn trial_config(&self, initial_policy: Policy) -> TrialConfig {
        TrialConfig {
            trace: TraceConfig {
                hot_set: self.k,
                universe: self.universe,
                length: self.length,
                repeat_probability: self.repeat_probability,
            },
            noise: NoiseConfig {
                probability: self.noise_probability,
                window: self.window,
            },
            threshold: self.threshold,
            initial_policy,
        }
    }
}

/// Configuration for a sweep
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Base parameters
    pub regime: Regime,
    /// Swept parameter
    pub axis: Axis,
    /// Values taken by the swept parameter, in report order
    pub values: Vec<f64>,
    /// Independent trials per sweep point
    pub trials: usize,
    /// Worker threads
    pub threads: usize,
    /// Base seed; every trial's RNG is derived from it
    pub seed: u64,
    /// Branch the adaptive evictor starts on
    pub initial_policy: Policy,
}

/// Averages over the trials of one sweep point
#[derive(Debug, Clone, PartialEq)]
pub struct PointSummary {
    pub axis: Axis,
    pub value: f64,
    pub params: Params,
    pub trials: u64,
    pub optimal: f64,
    pub predictive: f64,
    pub recency: f64,
    pub adaptive: f64,
}

impl PointSummary {
    /// Average competitive ratio of a fault count against OPT
    pub fn ratio(&self, faults: f64) -> f64 {
        if self.optimal > 0.0 {
            faults / self.optimal
        } else {
            0.0
        }
    }
}

/// CSV export row for sweep results
#[derive(Debug, Serialize)]
pub struct CsvResultRow {
    pub regime: String,
    pub axis: String,
    pub value: f64,
    pub k: usize,
    pub universe: usize,
    pub length: usize,
    pub e: f64,
    pub t: f64,
    pub w: usize,
    pub thr: f64,
    pub trials: u64,
    pub opt_faults: f64,
    pub blind_oracle_faults: f64,
    pub lru_faults: f64,
    pub combined_faults: f64,
    pub blind_oracle_ratio: f64,
    pub lru_ratio: f64,
    pub combined_ratio: f64,
}

impl CsvResultRow {
    pub fn new(regime: Regime, point: &PointSummary) -> Self {
        Self {
            regime: regime.as_str().to_string(),
            axis: point.axis.as_str().to_string(),
            value: point.value,
            k: point.params.k,
            universe: point.params.universe,
            length: point.params.length,
            e: point.params.repeat_probability,
            t: point.params.noise_probability,
            w: point.params.window,
            thr: point.params.threshold,
            trials: point.trials,
            opt_faults: point.optimal,
            blind_oracle_faults: point.predictive,
            lru_faults: point.recency,
            combined_faults: point.adaptive,
            blind_oracle_ratio: point.ratio(point.predictive),
            lru_ratio: point.ratio(point.recency),
            combined_ratio: point.ratio(point.adaptive),
        }
    }
}
