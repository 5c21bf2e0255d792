#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ generate     │──▶│ annotate     │──▶│ inject       │
//! │ trace        │   │ oracle       │   │ noise        │
//! └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!        │ pages            │ exact h          │ noisy h
//!        ▼                  ▼                  ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  PredictiveEvictor │ RecencyEvictor │ AdaptiveEvictor│
//! └─────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//!                     fault counts
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use paging_rs::{annotate_oracle, inject_noise, generate_trace};
//! use paging_rs::{simulate_adaptive, simulate_predictive, simulate_recency};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let trace = generate_trace(5, 20, 200, 0.5, &mut rng).unwrap();
//! let oracle = annotate_oracle(&trace);
//! let noisy = inject_noise(&oracle, 0.2, 7, &mut rng).unwrap();
//!
//! let opt = simulate_predictive(5, &trace, &oracle).unwrap();
//! let blind = simulate_predictive(5, &trace, &noisy).unwrap();
//! let lru = simulate_recency(5, &trace).unwrap();
//! let combined = simulate_adaptive(5, &trace, &noisy, 0.15).unwrap();
//!
//! assert!(opt <= lru);
//! assert!(blind >= 5 && combined >= 5);
//! ```
//!
//! ## Policies
//!
//! | Policy | Metric per slot | Evicts |
//! |--------|-----------------|--------|
//! | [`PredictiveEvictor`] | predicted next use | largest predicted next use |
//! | [`RecencyEvictor`] | last access step | smallest last access step |
//! | [`AdaptiveEvictor`] | follows one of the above | whatever the followed shadow evicts |
//!
//! Ties on the metric always resolve to the lowest slot index.

#![no_std]

extern crate alloc;

/// Identifier of a page in a reference trace.
///
/// Pages are numbered from 1 up to the universe size `N`.
pub type PageId = u32;

/// A 1-based position in a reference trace.
///
/// Next-use signals are expressed in positions; a page that never recurs in a
/// trace of length `n` carries the sentinel `n + 1`.
pub type Position = usize;

/// Error type shared by every operation in the crate.
pub mod error;

/// Slot entry and access outcome types.
pub mod entry;

/// Fixed-capacity slot storage with linear scans.
///
/// **Note**: internal infrastructure shared by the simulators. Eviction
/// tie-breaks depend on scanning slots in index order.
pub(crate) mod slots;

/// Configuration structures for the generators and the adaptive evictor.
pub mod config;

/// Metrics collection and reporting for all simulators.
pub mod metrics;

/// Synthetic reference trace generation with a rotating hot set.
pub mod trace;

/// Exact next-use annotation of a trace.
pub mod oracle;

/// Perturbation of a next-use signal to model an imperfect predictor.
pub mod noise;

/// Blind-oracle paging: evicts the page predicted to be used furthest away.
pub mod predictive;

/// Least recently used paging.
pub mod recency;

/// Adaptive paging that follows whichever of the two shadow policies is
/// currently faulting less.
pub mod adaptive;

/// One end-to-end run of the generate / annotate / perturb / simulate pipeline.
pub mod trial;

pub use adaptive::{simulate_adaptive, simulate_adaptive_with, AdaptiveEvictor};
pub use config::{AdaptiveConfig, NoiseConfig, Policy, TraceConfig};
pub use entry::{Access, Slot};
pub use error::{Error, Result};
pub use noise::{inject_noise, NoiseInjector};
pub use oracle::annotate_oracle;
pub use predictive::{simulate_predictive, PredictiveEvictor};
pub use recency::{simulate_recency, RecencyEvictor};
pub use trace::{generate_trace, TraceGenerator};
pub use trial::{run_trial, TrialConfig, TrialOutcome};
