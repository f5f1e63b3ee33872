//! Parametric command implementation.
//!
//! Closed-form VaR and ES under normally distributed returns.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tailrisk_config::ScenarioConfig;
use tailrisk_risk::var::{parametric_var_es, RiskEstimate};

use crate::cli::OutputFormat;
use crate::commands::{scenario_rows, ScenarioArgs};
use crate::error::CliResult;
use crate::output::{format_currency, print_header, print_output, print_single, KeyValue};

/// Arguments for the parametric command.
#[derive(Args, Debug)]
pub struct ParametricArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,
}

#[derive(Serialize)]
struct ParametricOutput<'a> {
    scenario: &'a ScenarioConfig,
    estimate: RiskEstimate,
}

/// Execute the parametric command.
pub fn execute(args: ParametricArgs, format: OutputFormat) -> Result<()> {
    let config = args.scenario.resolve()?;
    let estimate = calculate(&config)?;

    match format {
        OutputFormat::Table => {
            print_header("Parametric Method");
            let mut rows = scenario_rows(&config, false);
            rows.push(KeyValue::new("", ""));
            rows.extend(estimate_rows(&estimate));
            print_output(&rows, format)?;
        }
        OutputFormat::Json => print_single(&ParametricOutput {
            scenario: &config,
            estimate,
        })?,
        OutputFormat::Csv => print_output(&estimate_rows(&estimate), format)?,
        OutputFormat::Minimal => println!(
            "VaR: {}, ES: {}",
            format_currency(estimate.value_at_risk),
            format_currency(estimate.expected_shortfall)
        ),
    }

    Ok(())
}

fn calculate(config: &ScenarioConfig) -> CliResult<RiskEstimate> {
    let params = config.risk_parameters()?;
    Ok(parametric_var_es(&params)?)
}

/// VaR and ES rows.
pub fn estimate_rows(estimate: &RiskEstimate) -> Vec<KeyValue> {
    vec![
        KeyValue::from_currency("VaR", estimate.value_at_risk),
        KeyValue::from_currency("ES", estimate.expected_shortfall),
    ]
}
