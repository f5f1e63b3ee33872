//! Tailrisk CLI - Value at Risk and Expected Shortfall from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Parametric VaR/ES with the default scenario
//! tailrisk parametric
//!
//! # Historical simulation for lab 4, reproducible, with a histogram
//! tailrisk historical --preset lab4 --seed 42 --histogram
//!
//! # Both methods side by side, overriding volatility
//! tailrisk compare --sigma 0.035 --window 500
//!
//! # List the built-in presets
//! tailrisk presets
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli);

    // Set up output format
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Parametric(args) => commands::parametric::execute(args, format)?,
        Commands::Historical(args) => commands::historical::execute(args, format, cli.quiet)?,
        Commands::Compare(args) => commands::compare::execute(args, format, cli.quiet)?,
        Commands::Presets(args) => commands::presets::execute(args, format)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout stays parseable in json/csv modes.
fn init_logging(cli: &Cli) {
    let default_filter = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
