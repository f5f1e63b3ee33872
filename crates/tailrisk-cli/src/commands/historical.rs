//! Historical command implementation.
//!
//! Draws a synthetic return sample and reports empirical VaR and ES.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use tailrisk_config::ScenarioConfig;
use tailrisk_math::sampling::random_source;
use tailrisk_math::statistics::Histogram;
use tailrisk_risk::var::{historical_var_es, HistoricalEstimate, RiskEstimate};

use crate::cli::OutputFormat;
use crate::commands::parametric::estimate_rows;
use crate::commands::{scenario_rows, warn_unseeded, ScenarioArgs};
use crate::error::CliResult;
use crate::output::{
    format_currency, print_header, print_info, print_output, print_single, KeyValue,
};

/// Width of the longest histogram bar in characters.
const BAR_WIDTH: usize = 40;

/// Arguments for the historical command.
#[derive(Args, Debug)]
pub struct HistoricalArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Show a histogram of the simulated returns
    #[arg(long)]
    pub histogram: bool,

    /// Number of histogram bins (defaults to the scenario's setting)
    #[arg(long, requires = "histogram")]
    pub bins: Option<usize>,

    /// Write the simulated returns to a CSV file
    #[arg(long)]
    pub sample_out: Option<PathBuf>,
}

#[derive(Serialize)]
struct HistoricalOutput<'a> {
    scenario: &'a ScenarioConfig,
    estimate: RiskEstimate,
    threshold: f64,
    tail_mean: f64,
    tail_count: usize,
    sample_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    histogram: Option<Histogram>,
}

/// Execute the historical command.
pub fn execute(args: HistoricalArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut config = args.scenario.resolve()?;
    if let Some(bins) = args.bins {
        config.histogram_bins = bins;
    }

    warn_unseeded(&config, quiet);
    let (result, histogram) = simulate(&config, args.histogram)?;

    if let Some(ref path) = args.sample_out {
        write_sample(path, &result)?;
    }

    match format {
        OutputFormat::Table => {
            print_header("Historical Simulation Method");
            let mut rows = scenario_rows(&config, true);
            rows.push(KeyValue::new("", ""));
            rows.extend(estimate_rows(&result.estimate));
            rows.extend(marker_rows(&result));
            print_output(&rows, format)?;

            if let Some(ref h) = histogram {
                print_header("Simulated Returns");
                print_histogram(h, &result);
            }
            if let (Some(path), false) = (&args.sample_out, quiet) {
                print_info(&format!(
                    "Wrote {} returns to {}",
                    result.sample.len(),
                    path.display()
                ));
            }
        }
        OutputFormat::Json => print_single(&HistoricalOutput {
            scenario: &config,
            estimate: result.estimate,
            threshold: result.threshold,
            tail_mean: result.tail_mean,
            tail_count: result.tail_count,
            sample_size: result.sample.len(),
            histogram,
        })?,
        OutputFormat::Csv => {
            let mut rows = estimate_rows(&result.estimate);
            rows.extend(marker_rows(&result));
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => println!(
            "VaR: {}, ES: {}",
            format_currency(result.estimate.value_at_risk),
            format_currency(result.estimate.expected_shortfall)
        ),
    }

    Ok(())
}

/// Runs the historical estimator and, when asked, bins the sample.
fn simulate(
    config: &ScenarioConfig,
    with_histogram: bool,
) -> CliResult<(HistoricalEstimate, Option<Histogram>)> {
    let params = config.risk_parameters()?;
    let window = config.window()?;
    let mut rng = random_source(config.seed);
    let result = historical_var_es(&params, window, &mut rng)?;

    let histogram = if with_histogram {
        Some(result.sample.histogram(config.histogram_bins)?)
    } else {
        None
    };
    Ok((result, histogram))
}

/// Threshold and tail rows.
pub fn marker_rows(result: &HistoricalEstimate) -> Vec<KeyValue> {
    vec![
        KeyValue::from_percent("VaR Threshold Return", result.threshold, 4),
        KeyValue::from_percent("ES Mean Tail Return", result.tail_mean, 4),
        KeyValue::new(
            "Tail Observations",
            format!("{} of {}", result.tail_count, result.sample.len()),
        ),
    ]
}

/// Writes the sample in draw order, one return per row.
fn write_sample(path: &Path, result: &HistoricalEstimate) -> CliResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["day", "return"])?;
    for (day, r) in result.sample.as_slice().iter().enumerate() {
        wtr.write_record([(day + 1).to_string(), r.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Renders the histogram as text bars, marking the VaR and ES bins.
fn print_histogram(histogram: &Histogram, result: &HistoricalEstimate) {
    let max = histogram.max_count().max(1);
    let var_bin = histogram.bin_index(result.threshold);
    let es_bin = histogram.bin_index(result.tail_mean);

    for (i, bin) in histogram.bins().iter().enumerate() {
        let len = bin.count * BAR_WIDTH / max;
        let bar = "█".repeat(len);
        let bar = if bin.upper <= result.threshold {
            bar.as_str().red()
        } else {
            bar.as_str().cyan()
        };
        let pad = " ".repeat(BAR_WIDTH - len);

        let mut markers = Vec::new();
        if var_bin == Some(i) {
            markers.push("◀ VaR threshold".red().bold().to_string());
        }
        if es_bin == Some(i) {
            markers.push("◀ ES".yellow().bold().to_string());
        }

        println!(
            "{:>8.3}% │{}{} {:>4} {}",
            bin.midpoint() * 100.0,
            bar,
            pad,
            bin.count,
            markers.join(" ")
        );
    }
}
