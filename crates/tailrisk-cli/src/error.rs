//! CLI error types.

use tailrisk_config::ConfigError;
use tailrisk_risk::RiskError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Scenario could not be built or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Calculation(#[from] RiskError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            CliError::Io(err.into())
        } else {
            CliError::Serialization(err.to_string())
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
