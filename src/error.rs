//! Error Types
//!
//! Every public operation validates its parameters up front and reports a
//! malformed combination as [`Error::InvalidParameter`] before any trace or
//! cache state is built. A page that is not resident is never an error; it is
//! the fault path of a simulator.

extern crate alloc;

use alloc::string::String;
use core::num::NonZeroUsize;
use thiserror::Error;

/// Errors reported by trace generation, signal perturbation and simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter, or a combination of parameters, is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human readable description of the violated constraint.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Rejects probabilities outside `[0, 1]`, including NaN.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid(
            name,
            alloc::format!("must lie in [0, 1], got {value}"),
        ))
    }
}

/// Validates a simulator's capacity against the trace it will consume.
pub(crate) fn check_capacity(capacity: usize, trace_len: usize) -> Result<NonZeroUsize> {
    let cap = NonZeroUsize::new(capacity)
        .ok_or_else(|| Error::invalid("k", "cache capacity must be at least 1"))?;
    if capacity > trace_len {
        return Err(Error::invalid(
            "k",
            alloc::format!("capacity {capacity} exceeds trace length {trace_len}"),
        ));
    }
    Ok(cap)
}

/// Validates that a next-use signal is aligned with its trace.
pub(crate) fn check_signal(trace_len: usize, signal_len: usize) -> Result<()> {
    if trace_len == signal_len {
        Ok(())
    } else {
        Err(Error::invalid(
            "signal",
            alloc::format!("length {signal_len} does not match trace length {trace_len}"),
        ))
    }
}
