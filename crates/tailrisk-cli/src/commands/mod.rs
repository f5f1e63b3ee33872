//! CLI command implementations.

pub mod compare;
pub mod historical;
pub mod parametric;
pub mod presets;

// Re-export submodules for convenience
pub use compare::CompareArgs;
pub use historical::HistoricalArgs;
pub use parametric::ParametricArgs;
pub use presets::PresetsArgs;

use std::path::PathBuf;

use clap::Args;
use tailrisk_config::{InputBounds, ScenarioConfig, ScenarioManager};
use tracing::debug;

use crate::error::CliResult;
use crate::output::{print_warning, KeyValue};

/// Scenario selection shared by every calculation command.
///
/// The base scenario comes from `--config` or `--preset`; individual flags
/// override its fields.
#[derive(Args, Debug, Clone, Default)]
pub struct ScenarioArgs {
    /// Built-in preset to start from (default, lab1..lab5)
    #[arg(long, default_value = "default", conflicts_with = "config")]
    pub preset: String,

    /// Scenario file (.toml or .json) to start from
    #[arg(long, env = "TAILRISK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Portfolio value
    #[arg(short, long)]
    pub portfolio: Option<f64>,

    /// Daily mean return as a decimal (e.g., 0.001)
    #[arg(long, allow_negative_numbers = true)]
    pub mu: Option<f64>,

    /// Daily volatility as a decimal (e.g., 0.02)
    #[arg(long)]
    pub sigma: Option<f64>,

    /// Confidence level (e.g., 0.95)
    #[arg(short, long)]
    pub confidence: Option<f64>,

    /// Historical window in days
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Random seed for reproducible historical samples
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the dashboard range check (the estimator domain is still enforced)
    #[arg(long)]
    pub unbounded: bool,
}

impl ScenarioArgs {
    /// Builds the scenario and checks it against the dashboard ranges.
    pub fn resolve(&self) -> CliResult<ScenarioConfig> {
        let mut config = match &self.config {
            Some(path) => ScenarioConfig::from_file(path)?,
            None => ScenarioManager::new().get(&self.preset)?,
        };

        if let Some(v) = self.portfolio {
            config.portfolio_value = v;
        }
        if let Some(v) = self.mu {
            config.mean_return = v;
        }
        if let Some(v) = self.sigma {
            config.volatility = v;
        }
        if let Some(v) = self.confidence {
            config.confidence_level = v;
        }
        if let Some(v) = self.window {
            config.window_days = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        if !self.unbounded {
            InputBounds::dashboard().check(&config)?;
        }

        debug!(?config, "resolved scenario");
        Ok(config)
    }
}

/// Notes on stderr that an unseeded sample will differ on the next run.
pub fn warn_unseeded(config: &ScenarioConfig, quiet: bool) {
    if config.seed.is_none() && !quiet {
        print_warning("No seed given; the simulated sample changes between runs");
    }
}

/// Input rows shown above every result table.
pub fn scenario_rows(config: &ScenarioConfig, include_window: bool) -> Vec<KeyValue> {
    let mut rows = vec![
        KeyValue::new("Scenario", config.name.clone()),
        KeyValue::from_currency("Portfolio Value", config.portfolio_value),
        KeyValue::from_percent("Daily Mean Return (μ)", config.mean_return, 3),
        KeyValue::from_percent("Daily Volatility (σ)", config.volatility, 3),
        KeyValue::from_percent("Confidence Level", config.confidence_level, 1),
    ];
    if include_window {
        rows.push(KeyValue::new(
            "Historical Window",
            format!("{} days", config.window_days),
        ));
        rows.push(KeyValue::new(
            "Seed",
            config
                .seed
                .map_or_else(|| "entropy".to_string(), |s| s.to_string()),
        ));
    }
    rows
}
