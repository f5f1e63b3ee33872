//! Scenario configuration and built-in presets.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tailrisk_risk::params::{HistoricalWindow, RiskParameters};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Number of histogram bins the dashboard draws.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

// =============================================================================
// SCENARIO CONFIG
// =============================================================================

/// The inputs of one risk calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Scenario name/identifier.
    pub name: String,

    /// Description of this scenario.
    #[serde(default)]
    pub description: Option<String>,

    /// Portfolio value in currency units.
    #[serde(default = "default_portfolio_value")]
    pub portfolio_value: f64,

    /// Daily mean return as a decimal.
    #[serde(default = "default_mean_return")]
    pub mean_return: f64,

    /// Daily return volatility as a decimal.
    #[serde(default = "default_volatility")]
    pub volatility: f64,

    /// Confidence level in (0, 1).
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,

    /// Number of simulated days for historical simulation.
    #[serde(default = "default_window_days")]
    pub window_days: usize,

    /// Random seed for reproducibility (None = OS entropy).
    #[serde(default)]
    pub seed: Option<u64>,

    /// Histogram bins for the simulated sample.
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,

    /// Whether this scenario is read-only. Only presets set this.
    #[serde(default, skip_deserializing)]
    pub read_only: bool,
}

fn default_portfolio_value() -> f64 {
    1_000_000.0
}

fn default_mean_return() -> f64 {
    0.001
}

fn default_volatility() -> f64 {
    0.02
}

fn default_confidence_level() -> f64 {
    0.95
}

fn default_window_days() -> usize {
    250
}

fn default_histogram_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Preset::Default.config()
    }
}

impl ScenarioConfig {
    /// Creates a new scenario with the reset values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            portfolio_value: default_portfolio_value(),
            mean_return: default_mean_return(),
            volatility: default_volatility(),
            confidence_level: default_confidence_level(),
            window_days: default_window_days(),
            seed: None,
            histogram_bins: default_histogram_bins(),
            read_only: false,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the portfolio value.
    #[must_use]
    pub fn with_portfolio_value(mut self, value: f64) -> Self {
        self.portfolio_value = value;
        self
    }

    /// Sets the daily mean return.
    #[must_use]
    pub fn with_mean_return(mut self, mean_return: f64) -> Self {
        self.mean_return = mean_return;
        self
    }

    /// Sets the daily volatility.
    #[must_use]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Sets the confidence level.
    #[must_use]
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Sets the historical window length in days.
    #[must_use]
    pub fn with_window_days(mut self, window_days: usize) -> Self {
        self.window_days = window_days;
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the histogram bin count.
    #[must_use]
    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    /// Renames the scenario and clears the read-only flag.
    #[must_use]
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self.read_only = false;
        self
    }

    /// Validated estimator parameters.
    pub fn risk_parameters(&self) -> ConfigResult<RiskParameters> {
        Ok(RiskParameters::new(
            self.portfolio_value,
            self.mean_return,
            self.volatility,
            self.confidence_level,
        )?)
    }

    /// Validated historical window.
    pub fn window(&self) -> ConfigResult<HistoricalWindow> {
        Ok(HistoricalWindow::new(self.window_days)?)
    }

    /// Loads a scenario from a `.toml` or `.json` file.
    ///
    /// Missing numeric fields take the reset values. The result is
    /// validated against the estimator domain, not the dashboard bounds.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let config: Self = match extension.as_str() {
            "toml" => toml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        debug!(name = %config.name, path = %path.display(), "loaded scenario");
        config.validate_or_error()?;
        Ok(config)
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        if let Err(e) = self.risk_parameters() {
            errors.push(domain_error(e));
        }

        if let Err(e) = self.window() {
            errors.push(domain_error(e));
        }

        if self.histogram_bins == 0 {
            errors.push(ValidationError::with_rule(
                "histogram_bins",
                "Histogram needs at least one bin",
                "positive_bins",
            ));
        }

        errors
    }
}

fn domain_error(err: ConfigError) -> ValidationError {
    match err {
        ConfigError::Risk(tailrisk_risk::RiskError::InvalidParameter { field, reason }) => {
            ValidationError::with_rule(field, reason, "estimator_domain")
        }
        other => ValidationError::new("scenario", other.to_string()),
    }
}

// =============================================================================
// PRESETS
// =============================================================================

/// Built-in scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Reset values.
    Default,
    /// Lab 1: compare parametric vs historical.
    Lab1,
    /// Lab 2: higher volatility impact.
    Lab2,
    /// Lab 3: changing confidence level.
    Lab3,
    /// Lab 4: extreme event simulation with a short window.
    Lab4,
    /// Lab 5: longer history.
    Lab5,
}

impl Preset {
    /// All presets in display order.
    pub const ALL: [Preset; 6] = [
        Preset::Default,
        Preset::Lab1,
        Preset::Lab2,
        Preset::Lab3,
        Preset::Lab4,
        Preset::Lab5,
    ];

    /// Registry name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Lab1 => "lab1",
            Self::Lab2 => "lab2",
            Self::Lab3 => "lab3",
            Self::Lab4 => "lab4",
            Self::Lab5 => "lab5",
        }
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Default => "Reset parameters",
            Self::Lab1 => "Compare parametric vs historical",
            Self::Lab2 => "Higher volatility impact",
            Self::Lab3 => "Changing confidence level",
            Self::Lab4 => "Extreme event simulation (short window)",
            Self::Lab5 => "Backtesting scenario with longer history",
        }
    }

    /// The scenario this preset stands for.
    pub fn config(self) -> ScenarioConfig {
        let base = ScenarioConfig::new(self.name()).with_description(self.description());
        let config = match self {
            Self::Default => base,
            Self::Lab1 => base.with_mean_return(0.0005).with_volatility(0.015),
            Self::Lab2 => base.with_volatility(0.05),
            Self::Lab3 => base.with_confidence_level(0.99),
            Self::Lab4 => base.with_volatility(0.03).with_window_days(50),
            Self::Lab5 => base.with_window_days(500),
        };
        ScenarioConfig {
            read_only: true,
            ..config
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == key || (key == "reset" && *p == Self::Default))
            .ok_or_else(|| ConfigError::NotFound { key: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_presets_match_dashboard_labs() {
        let lab1 = Preset::Lab1.config();
        assert_eq!(lab1.mean_return, 0.0005);
        assert_eq!(lab1.volatility, 0.015);
        assert_eq!(lab1.window_days, 250);

        let lab4 = Preset::Lab4.config();
        assert_eq!(lab4.volatility, 0.03);
        assert_eq!(lab4.window_days, 50);

        assert_eq!(Preset::Lab3.config().confidence_level, 0.99);
        assert_eq!(Preset::Lab5.config().window_days, 500);

        for preset in Preset::ALL {
            let config = preset.config();
            assert!(config.read_only);
            assert_eq!(config.portfolio_value, 1_000_000.0);
            assert!(config.is_valid(), "{} invalid", preset);
        }
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("LAB2".parse::<Preset>().unwrap(), Preset::Lab2);
        assert_eq!("reset".parse::<Preset>().unwrap(), Preset::Default);
        assert!("lab9".parse::<Preset>().is_err());
    }

    #[test]
    fn test_validation_collects_domain_errors() {
        let config = ScenarioConfig::new("")
            .with_volatility(0.0)
            .with_window_days(1)
            .with_histogram_bins(0);
        let errors = config.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["name", "volatility", "window_size", "histogram_bins"]);
    }

    #[test]
    fn test_risk_parameters_conversion() {
        let params = ScenarioConfig::new("x").risk_parameters().unwrap();
        assert_eq!(params.volatility(), 0.02);
        assert!(ScenarioConfig::new("x")
            .with_confidence_level(1.0)
            .risk_parameters()
            .is_err());
    }

    #[test]
    fn test_from_toml_file_with_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "name = \"desk\"\nvolatility = 0.03\nseed = 11").unwrap();

        let config = ScenarioConfig::from_file(file.path()).unwrap();
        assert_eq!(config.name, "desk");
        assert_eq!(config.volatility, 0.03);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.confidence_level, 0.95);
        assert_eq!(config.histogram_bins, DEFAULT_HISTOGRAM_BINS);
        assert!(!config.read_only);
    }

    #[test]
    fn test_read_only_not_loaded_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "name = \"locked\"\nread_only = true").unwrap();

        let config = ScenarioConfig::from_file(file.path()).unwrap();
        assert!(!config.read_only);

        let json = serde_json::to_string(&Preset::Lab1.config()).unwrap();
        let round: ScenarioConfig = serde_json::from_str(&json).unwrap();
        assert!(!round.read_only);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"name": "j", "confidence_level": 0.99, "window_days": 1000}}"#
        )
        .unwrap();

        let config = ScenarioConfig::from_file(file.path()).unwrap();
        assert_eq!(config.confidence_level, 0.99);
        assert_eq!(config.window_days, 1000);
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "name = \"bad\"\nconfidence_level = 1.0").unwrap();
        assert!(matches!(
            ScenarioConfig::from_file(file.path()),
            Err(ConfigError::Validation { .. })
        ));

        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(matches!(
            ScenarioConfig::from_file(file.path()),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
