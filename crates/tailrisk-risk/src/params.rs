//! Estimator inputs.
//!
//! Both types validate on construction, so an estimator holding a
//! `RiskParameters` never needs to re-check the domain.

use serde::Serialize;
use tracing::warn;

use crate::error::{RiskError, RiskResult};

/// Smallest window for which a percentile and a tail mean are meaningful.
pub const MIN_WINDOW_SIZE: usize = 2;

/// Distribution and portfolio inputs shared by both estimators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskParameters {
    portfolio_value: f64,
    mean_return: f64,
    volatility: f64,
    confidence_level: f64,
}

impl RiskParameters {
    /// Creates validated risk parameters.
    ///
    /// # Arguments
    ///
    /// * `portfolio_value` - Current portfolio value, > 0
    /// * `mean_return` - Daily mean return as a decimal (e.g., 0.001)
    /// * `volatility` - Daily return standard deviation, > 0
    /// * `confidence_level` - Confidence level in (0, 1) (e.g., 0.95)
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidParameter`] for any value outside its
    /// domain, including NaN and infinities. Values are never clamped.
    pub fn new(
        portfolio_value: f64,
        mean_return: f64,
        volatility: f64,
        confidence_level: f64,
    ) -> RiskResult<Self> {
        let params = Self {
            portfolio_value,
            mean_return,
            volatility,
            confidence_level,
        };
        if let Err(e) = params.check() {
            warn!("rejected risk parameters: {}", e);
            return Err(e);
        }
        Ok(params)
    }

    fn check(&self) -> RiskResult<()> {
        if !(self.portfolio_value.is_finite() && self.portfolio_value > 0.0) {
            return Err(RiskError::invalid(
                "portfolio_value",
                format!("must be positive and finite, got {}", self.portfolio_value),
            ));
        }
        if !self.mean_return.is_finite() {
            return Err(RiskError::invalid(
                "mean_return",
                format!("must be finite, got {}", self.mean_return),
            ));
        }
        if !(self.volatility.is_finite() && self.volatility > 0.0) {
            return Err(RiskError::invalid(
                "volatility",
                format!("must be positive and finite, got {}", self.volatility),
            ));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(RiskError::invalid(
                "confidence_level",
                format!("must be strictly between 0 and 1, got {}", self.confidence_level),
            ));
        }
        let alpha = self.tail_probability();
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(RiskError::invalid(
                "confidence_level",
                format!(
                    "tail probability 1 - {} rounds to {}",
                    self.confidence_level, alpha
                ),
            ));
        }
        Ok(())
    }

    /// Portfolio value.
    pub fn portfolio_value(&self) -> f64 {
        self.portfolio_value
    }

    /// Daily mean return.
    pub fn mean_return(&self) -> f64 {
        self.mean_return
    }

    /// Daily volatility.
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Confidence level.
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Tail probability α = 1 − confidence level.
    pub fn tail_probability(&self) -> f64 {
        1.0 - self.confidence_level
    }

    /// Percentile rank of the VaR threshold, α × 100.
    pub fn percentile_rank(&self) -> f64 {
        self.tail_probability() * 100.0
    }

    /// Same parameters with a different portfolio value.
    pub fn with_portfolio_value(self, portfolio_value: f64) -> RiskResult<Self> {
        Self::new(
            portfolio_value,
            self.mean_return,
            self.volatility,
            self.confidence_level,
        )
    }

    /// Same parameters with a different volatility.
    pub fn with_volatility(self, volatility: f64) -> RiskResult<Self> {
        Self::new(
            self.portfolio_value,
            self.mean_return,
            volatility,
            self.confidence_level,
        )
    }

    /// Same parameters with a different confidence level.
    pub fn with_confidence_level(self, confidence_level: f64) -> RiskResult<Self> {
        Self::new(
            self.portfolio_value,
            self.mean_return,
            self.volatility,
            confidence_level,
        )
    }
}

/// Number of simulated days in a historical sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HistoricalWindow(usize);

impl HistoricalWindow {
    /// Creates a window of `size` days.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidParameter`] if `size` is below
    /// [`MIN_WINDOW_SIZE`].
    pub fn new(size: usize) -> RiskResult<Self> {
        if size < MIN_WINDOW_SIZE {
            let err = RiskError::invalid(
                "window_size",
                format!("must be at least {}, got {}", MIN_WINDOW_SIZE, size),
            );
            warn!("rejected historical window: {}", err);
            return Err(err);
        }
        Ok(Self(size))
    }

    /// Number of days.
    pub fn size(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for HistoricalWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.0)
    }
}
