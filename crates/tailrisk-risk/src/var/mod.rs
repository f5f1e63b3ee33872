//! Value at Risk (VaR) and Expected Shortfall (ES) calculations.
//!
//! VaR is the one-day loss not exceeded with probability equal to the
//! confidence level; ES is the average loss beyond it. Both are reported as
//! positive loss magnitudes in the currency of the portfolio value.

mod historical;
mod parametric;

pub use historical::*;
pub use parametric::*;

use serde::{Deserialize, Serialize};
use tailrisk_math::statistics::{histogram, Histogram};

use crate::error::{RiskError, RiskResult};

/// VaR calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaRMethod {
    /// Closed-form normal (variance-covariance)
    Parametric,
    /// Historical simulation over a synthetic sample
    Historical,
}

impl std::fmt::Display for VaRMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parametric => write!(f, "parametric"),
            Self::Historical => write!(f, "historical"),
        }
    }
}

/// A VaR / ES pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskEstimate {
    /// Value at Risk (positive loss)
    pub value_at_risk: f64,
    /// Expected Shortfall (positive loss)
    pub expected_shortfall: f64,
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
    /// Method used for calculation
    pub method: VaRMethod,
}

impl RiskEstimate {
    pub(crate) fn new(
        value_at_risk: f64,
        expected_shortfall: f64,
        confidence_level: f64,
        method: VaRMethod,
    ) -> RiskResult<Self> {
        if !value_at_risk.is_finite() {
            return Err(RiskError::NonFiniteResult {
                measure: "value at risk",
            });
        }
        if !expected_shortfall.is_finite() {
            return Err(RiskError::NonFiniteResult {
                measure: "expected shortfall",
            });
        }
        Ok(Self {
            value_at_risk,
            expected_shortfall,
            confidence_level,
            method,
        })
    }
}

impl std::fmt::Display for RiskEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VaR({:.0}%): {:.2}, ES: {:.2} [{}]",
            self.confidence_level * 100.0,
            self.value_at_risk,
            self.expected_shortfall,
            self.method
        )
    }
}

/// Simulated daily returns in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReturnSample(Vec<f64>);

impl ReturnSample {
    /// Number of returns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the sample holds no returns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the sample.
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Equal-width histogram of the returns.
    pub fn histogram(&self, bins: usize) -> RiskResult<Histogram> {
        Ok(histogram(&self.0, bins)?)
    }
}

impl From<ReturnSample> for Vec<f64> {
    fn from(sample: ReturnSample) -> Self {
        sample.0
    }
}

/// Result of a historical simulation.
///
/// Carries the two return levels a chart marks: the percentile threshold
/// and the mean of the returns at or below it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalEstimate {
    /// VaR and ES
    pub estimate: RiskEstimate,
    /// Return at the (1 − confidence) percentile
    pub threshold: f64,
    /// Mean return of the tail
    pub tail_mean: f64,
    /// Number of returns at or below the threshold
    pub tail_count: usize,
    /// The simulated returns
    pub sample: ReturnSample,
}
