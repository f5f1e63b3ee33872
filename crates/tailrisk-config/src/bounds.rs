//! Dashboard input ranges.
//!
//! These are narrower than the estimator domain. They are checked on
//! request and reported as validation errors; nothing is clamped.

use serde::{Deserialize, Serialize};

use crate::error::{errors_to_result, ConfigResult, ValidationError};
use crate::scenario::ScenarioConfig;

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl ValueRange {
    /// Creates a range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True if `x` lies in `[min, max]`.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

impl std::fmt::Display for ValueRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Recognized ranges for each scenario input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    /// Portfolio value range.
    pub portfolio_value: ValueRange,
    /// Daily mean return range.
    pub mean_return: ValueRange,
    /// Daily volatility range.
    pub volatility: ValueRange,
    /// Confidence level range.
    pub confidence_level: ValueRange,
    /// Smallest historical window.
    pub min_window_days: usize,
    /// Largest historical window.
    pub max_window_days: usize,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self::dashboard()
    }
}

impl InputBounds {
    /// The slider ranges of the interactive dashboard.
    pub const fn dashboard() -> Self {
        Self {
            portfolio_value: ValueRange::new(10_000.0, 10_000_000.0),
            mean_return: ValueRange::new(-0.05, 0.05),
            volatility: ValueRange::new(0.005, 0.1),
            confidence_level: ValueRange::new(0.90, 0.99),
            min_window_days: 50,
            max_window_days: 1000,
        }
    }

    /// Lists every input of `config` that falls outside these bounds.
    pub fn violations(&self, config: &ScenarioConfig) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let checks = [
            ("portfolio_value", config.portfolio_value, self.portfolio_value),
            ("mean_return", config.mean_return, self.mean_return),
            ("volatility", config.volatility, self.volatility),
            ("confidence_level", config.confidence_level, self.confidence_level),
        ];
        for (field, value, range) in checks {
            if !range.contains(value) {
                errors.push(ValidationError::with_rule(
                    field,
                    format!("{} is outside {}", value, range),
                    "dashboard_range",
                ));
            }
        }

        if config.window_days < self.min_window_days || config.window_days > self.max_window_days {
            errors.push(ValidationError::with_rule(
                "window_days",
                format!(
                    "{} is outside [{}, {}]",
                    config.window_days, self.min_window_days, self.max_window_days
                ),
                "dashboard_range",
            ));
        }

        errors
    }

    /// Fails if any input is outside these bounds.
    pub fn check(&self, config: &ScenarioConfig) -> ConfigResult<()> {
        errors_to_result(self.violations(config))
    }
}
