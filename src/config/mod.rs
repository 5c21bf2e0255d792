//! Simulation Configuration Module
//!
//! This module provides configuration structures for the randomized pipeline
//! stages and for the adaptive evictor. Each component has its own dedicated
//! configuration struct with public fields.
//!
//! # Design Philosophy
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Checked**: `validate()` reports every malformed combination as
//!   [`Error::InvalidParameter`](crate::Error::InvalidParameter) before any work starts
//! - **No boilerplate**: No builder methods needed
//!
//! | Config | Consumer | Description |
//! |--------|----------|-------------|
//! | `TraceConfig` | [`TraceGenerator`](crate::TraceGenerator) | Hot/cold rotating trace |
//! | `NoiseConfig` | [`NoiseInjector`](crate::NoiseInjector) | Signal corruption |
//! | `AdaptiveConfig` | [`AdaptiveEvictor`](crate::AdaptiveEvictor) | Switch threshold and starting branch |
//!
//! The predictive and recency evictors only take a capacity, so they have no
//! dedicated configuration struct.
//!
//! # Examples
//!
//! ```
//! use paging_rs::config::{AdaptiveConfig, Policy, TraceConfig};
//!
//! let trace = TraceConfig {
//!     hot_set: 20,
//!     universe: 200,
//!     length: 10_000,
//!     repeat_probability: 0.5,
//! };
//! assert!(trace.validate().is_ok());
//!
//! let adaptive = AdaptiveConfig {
//!     capacity: 20,
//!     threshold: 0.15,
//!     initial_policy: Policy::Recency,
//! };
//! assert!(adaptive.validate().is_ok());
//! ```

pub mod adaptive;
pub mod noise;
pub mod trace;

pub use adaptive::{AdaptiveConfig, Policy};
pub use noise::NoiseConfig;
pub use trace::TraceConfig;
