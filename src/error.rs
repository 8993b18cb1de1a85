//! Error types shared by the numeric core
//!
//! Every fallible operation of the crate returns [`Result<T>`]. The error kinds
//! are local to one operation: nothing is retried, nothing is partially
//! committed.
//!
//! The stability advisory of the finite-difference scheme is *not* an error,
//! see [`StabilityWarning`](crate::solver::StabilityWarning).

use thiserror::Error;

/// Errors raised by interval mapping, quadrature, projection and the solvers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiffusionError {
    /// An interval with zero (or non-finite) length was used as a mapping
    /// source/target or as a quadrature range
    #[error("degenerate interval [{start}, {end}] used in {context}")]
    Domain {
        start: f64,
        end: f64,
        context: &'static str,
    },

    /// A numerical parameter is out of its admissible range
    #[error("invalid {parameter}: {reason}")]
    Configuration {
        parameter: &'static str,
        reason: String,
    },

    /// A grid-backed function was sampled outside its index range
    #[error("position {position} maps to index {index} outside [0, {len})")]
    Index {
        position: f64,
        index: f64,
        len: usize,
    },
}

impl DiffusionError {
    pub(crate) fn configuration(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            parameter,
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, DiffusionError>;
