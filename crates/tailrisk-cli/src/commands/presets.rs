//! Presets command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tailrisk_config::Preset;

use crate::cli::OutputFormat;
use crate::output::{format_currency, print_header, print_output};

/// Arguments for the presets command.
#[derive(Args, Debug)]
pub struct PresetsArgs {}

#[derive(Debug, Clone, Serialize, Tabled)]
struct PresetRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Portfolio")]
    portfolio_value: String,
    #[tabled(rename = "μ")]
    mean_return: f64,
    #[tabled(rename = "σ")]
    volatility: f64,
    #[tabled(rename = "Confidence")]
    confidence_level: f64,
    #[tabled(rename = "Window")]
    window_days: usize,
}

impl From<Preset> for PresetRow {
    fn from(preset: Preset) -> Self {
        let config = preset.config();
        Self {
            name: preset.name().to_string(),
            description: preset.description().to_string(),
            portfolio_value: format_currency(config.portfolio_value),
            mean_return: config.mean_return,
            volatility: config.volatility,
            confidence_level: config.confidence_level,
            window_days: config.window_days,
        }
    }
}

/// Execute the presets command.
pub fn execute(_args: PresetsArgs, format: OutputFormat) -> Result<()> {
    let rows: Vec<PresetRow> = Preset::ALL.into_iter().map(PresetRow::from).collect();

    if matches!(format, OutputFormat::Table) {
        print_header("Built-in Scenarios");
    }
    print_output(&rows, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_presets() {
        let rows: Vec<PresetRow> = Preset::ALL.into_iter().map(PresetRow::from).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].name, "default");
        assert_eq!(rows[0].portfolio_value, "1000000.00");
        assert_eq!(rows[4].window_days, 50);
        assert_eq!(rows[3].confidence_level, 0.99);
    }
}
