//! Sweep runner for paging experiments
//!
//! Expands an [`ExperimentConfig`] into sweep points and runs the trials of
//! every point on a scoped thread pool. Each trial owns its own RNG, seeded
//! from the base seed, the point index and the trial index, so the averages do
//! not depend on the number of worker threads or on scheduling order.
//!
//! Per-point fault totals live behind a single `parking_lot::Mutex`. A trial
//! holds the lock only to add four counters, while the simulation itself runs
//! unlocked.

use std::time::Instant;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scoped_threadpool::Pool;

use paging_rs::{run_trial, Error, TrialConfig};

use crate::models::{ExperimentConfig, Params, PointSummary};
use crate::stats::Totals;

/// Derives the RNG seed of trial `trial` at sweep point `point`.
///
/// A splitmix64 finalizer over the three inputs; neighbouring points and
/// trials get unrelated streams.
pub fn trial_seed(base: u64, point: usize, trial: usize) -> u64 {
    let mut z = base
        .wrapping_add((point as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add((trial as u64).wrapping_mul(0xD1B5_4A32_D192_ED03));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

struct SweepPoint {
    value: f64,
    params: Params,
    trial: TrialConfig,
}

/// Runs a parameter sweep
pub struct SweepRunner {
    config: ExperimentConfig,
}

impl SweepRunner {
    /// Create a new sweep runner
    pub fn new(config: ExperimentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    fn points(&self) -> Result<Vec<SweepPoint>, Error> {
        let base = self.config.regime.base();
        self.config
            .values
            .iter()
            .map(|&value| {
                let params = base.with(self.config.axis, value)?;
                let trial = params.trial_config(self.config.initial_policy);
                trial.validate()?;
                Ok(SweepPoint {
                    value,
                    params,
                    trial,
                })
            })
            .collect()
    }

    /// Run every trial of every point and return the per-point averages in
    /// the order of `config.values`.
    ///
    /// All points are validated before any trial starts.
    pub fn run(&self) -> Result<Vec<PointSummary>, Error> {
        let points = self.points()?;
        let trials = self.config.trials;
        let threads = self.config.threads.max(1);
        let seed = self.config.seed;
        let axis = self.config.axis;

        log::info!(
            "sweeping {} over {} points x {} trials on {} threads ({})",
            axis,
            points.len(),
            trials,
            threads,
            self.config.regime
        );
        let start = Instant::now();

        let totals: Mutex<Vec<Totals>> = Mutex::new(vec![Totals::default(); points.len()]);
        let failure: Mutex<Option<Error>> = Mutex::new(None);

        let mut pool = Pool::new(u32::try_from(threads).unwrap_or(u32::MAX));
        pool.scoped(|scope| {
            for (index, point) in points.iter().enumerate() {
                for trial in 0..trials {
                    let totals = &totals;
                    let failure = &failure;
                    scope.execute(move || {
                        let mut rng = StdRng::seed_from_u64(trial_seed(seed, index, trial));
                        match run_trial(&point.trial, &mut rng) {
                            Ok(outcome) => {
                                let mut totals = totals.lock();
                                let entry = &mut totals[index];
                                entry.record(&outcome);
                                if entry.trials == trials as u64 {
                                    log::info!(
                                        "point {}={} finished ({} trials)",
                                        axis,
                                        point.value,
                                        trials
                                    );
                                }
                            }
                            Err(err) => {
                                failure.lock().get_or_insert(err);
                            }
                        }
                    });
                }
            }
        });

        if let Some(err) = failure.into_inner() {
            return Err(err);
        }

        log::info!("sweep finished in {:.2?}", start.elapsed());

        let totals = totals.into_inner();
        Ok(points
            .iter()
            .zip(totals)
            .map(|(point, total)| total.summarize(axis, point.value, point.params))
            .collect())
    }
}
