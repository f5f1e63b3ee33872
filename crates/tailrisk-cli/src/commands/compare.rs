//! Compare command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tailrisk_config::ScenarioConfig;
use tailrisk_math::sampling::random_source;
use tailrisk_risk::compare::{compare, RiskComparison};

use crate::cli::OutputFormat;
use crate::commands::{scenario_rows, warn_unseeded, ScenarioArgs};
use crate::error::CliResult;
use crate::output::{format_currency, print_header, print_output, print_single};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,
}

/// One row of the side-by-side table.
#[derive(Debug, Clone, Serialize, Tabled)]
struct MethodRow {
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "VaR")]
    var: String,
    #[tabled(rename = "ES")]
    es: String,
}

#[derive(Serialize)]
struct CompareOutput<'a> {
    scenario: &'a ScenarioConfig,
    parametric: tailrisk_risk::var::RiskEstimate,
    historical: tailrisk_risk::var::RiskEstimate,
    var_difference: f64,
    es_difference: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    var_relative_difference: Option<f64>,
}

/// Execute the compare command.
pub fn execute(args: CompareArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let config = args.scenario.resolve()?;
    warn_unseeded(&config, quiet);
    let cmp = run(&config)?;

    match format {
        OutputFormat::Table => {
            print_header("Scenario");
            print_output(&scenario_rows(&config, true), format)?;
            print_header("Parametric vs Historical");
            print_output(&method_rows(&cmp), format)?;
        }
        OutputFormat::Json => print_single(&CompareOutput {
            scenario: &config,
            parametric: cmp.parametric,
            historical: cmp.historical.estimate,
            var_difference: cmp.var_difference(),
            es_difference: cmp.es_difference(),
            var_relative_difference: cmp.var_relative_difference(),
        })?,
        OutputFormat::Csv => print_output(&method_rows(&cmp), format)?,
        OutputFormat::Minimal => println!(
            "parametric VaR: {}, ES: {}; historical VaR: {}, ES: {}",
            format_currency(cmp.parametric.value_at_risk),
            format_currency(cmp.parametric.expected_shortfall),
            format_currency(cmp.historical.estimate.value_at_risk),
            format_currency(cmp.historical.estimate.expected_shortfall)
        ),
    }

    Ok(())
}

fn run(config: &ScenarioConfig) -> CliResult<RiskComparison> {
    let params = config.risk_parameters()?;
    let window = config.window()?;
    let mut rng = random_source(config.seed);
    Ok(compare(&params, window, &mut rng)?)
}

fn method_rows(cmp: &RiskComparison) -> Vec<MethodRow> {
    let relative = cmp
        .var_relative_difference()
        .map(|r| format!(" ({:+.1}%)", r * 100.0))
        .unwrap_or_default();

    vec![
        MethodRow {
            method: "Parametric".into(),
            var: format_currency(cmp.parametric.value_at_risk),
            es: format_currency(cmp.parametric.expected_shortfall),
        },
        MethodRow {
            method: format!("Historical ({} obs)", cmp.historical.sample.len()),
            var: format_currency(cmp.historical.estimate.value_at_risk),
            es: format_currency(cmp.historical.estimate.expected_shortfall),
        },
        MethodRow {
            method: "Difference".into(),
            var: format!("{}{}", format_currency(cmp.var_difference()), relative),
            es: format_currency(cmp.es_difference()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailrisk_config::Preset;

    #[test]
    fn test_method_rows() {
        let config = Preset::Lab1.config().with_seed(11);
        let cmp = run(&config).unwrap();

        let rows = method_rows(&cmp);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].method, "Parametric");
        assert_eq!(rows[1].method, "Historical (250 obs)");
        assert!(rows[2].var.contains('%'));
    }
}
