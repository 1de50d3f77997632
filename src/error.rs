//! Error types for fastapprox
//!
//! The kernels themselves never return errors: domain violations and
//! singularities are reported through IEEE-754 sentinels (NaN, ±Infinity).
//! These types exist for the [`checked`](crate::checked) layer, which turns
//! sentinels into values callers can match on, and for parsing
//! [`Precision`](crate::Precision) names.

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using fastapprox's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked layer and configuration parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Input lies outside the domain of the operation (e.g. `log(-1)`)
    #[error("Input {input} outside valid domain of '{op}' ({dtype})")]
    Domain {
        /// The operation name
        op: &'static str,
        /// The offending input, widened to f64
        input: f64,
        /// Width of the evaluated scalar
        dtype: DType,
    },

    /// Operation produced NaN from a NaN input
    #[error("Result of '{op}' is not a number ({dtype})")]
    NotANumber {
        /// The operation name
        op: &'static str,
        /// Width of the evaluated scalar
        dtype: DType,
    },

    /// Operation produced a signed infinity (pole or overflow)
    #[error("Result of '{op}' is infinite for input {input} ({dtype})")]
    Infinite {
        /// The operation name
        op: &'static str,
        /// The input that produced the infinity, widened to f64
        input: f64,
        /// Width of the evaluated scalar
        dtype: DType,
    },

    /// A precision name that is not one of `auto`, `fast`, `balanced`, `high`
    #[error("Unknown precision '{0}' (expected auto, fast, balanced or high)")]
    UnknownPrecision(String),
}

impl Error {
    /// Create a domain error
    pub fn domain(op: &'static str, input: f64, dtype: DType) -> Self {
        Self::Domain { op, input, dtype }
    }

    /// Create an infinite-result error
    pub fn infinite(op: &'static str, input: f64, dtype: DType) -> Self {
        Self::Infinite { op, input, dtype }
    }

    /// Name of the operation that failed, if the error came from an evaluation
    pub fn op(&self) -> Option<&'static str> {
        match self {
            Self::Domain { op, .. } | Self::NotANumber { op, .. } | Self::Infinite { op, .. } => {
                Some(*op)
            }
            Self::UnknownPrecision(_) => None,
        }
    }
}
