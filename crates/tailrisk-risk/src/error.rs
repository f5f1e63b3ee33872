//! Error types for risk calculations.

use tailrisk_math::MathError;
use thiserror::Error;

/// Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during risk calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// An input parameter is outside its domain.
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// No simulated return fell at or below the VaR threshold.
    #[error("empty loss tail: no return in a sample of {sample_size} is <= threshold {threshold}")]
    DegenerateTail {
        /// The percentile threshold.
        threshold: f64,
        /// Size of the simulated sample.
        sample_size: usize,
    },

    /// A risk measure came out NaN or infinite.
    #[error("{measure} is not finite")]
    NonFiniteResult {
        /// The measure that overflowed.
        measure: &'static str,
    },

    /// Statistical routine failed.
    #[error("calculation failed: {0}")]
    Math(#[from] MathError),
}

impl RiskError {
    /// Creates an invalid parameter error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true for input validation failures.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
