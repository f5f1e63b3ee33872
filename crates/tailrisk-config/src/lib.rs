//! Tailrisk Configuration Layer
//!
//! This crate replaces dashboard slider state with explicit values: a
//! [`ScenarioConfig`] holds the five estimator inputs plus an optional
//! random seed, and is passed into each calculation.
//!
//! # Features
//!
//! - **Scenarios**: Portfolio value, mean return, volatility, confidence, window
//! - **Presets**: The reset values and five lab scenarios as named factories
//! - **Input Bounds**: The dashboard ranges, checked explicitly and never clamped
//! - **Scenario Manager**: Registry of presets and user scenarios, file loading
//!
//! # Example
//!
//! ```rust
//! use tailrisk_config::{Preset, ScenarioConfig, ScenarioManager};
//!
//! let manager = ScenarioManager::new();
//!
//! // Lab 2: higher volatility
//! let lab2 = manager.get("lab2").unwrap();
//! assert_eq!(lab2.volatility, 0.05);
//! assert_eq!(lab2, Preset::Lab2.config());
//!
//! // Register a custom scenario derived from the defaults
//! let custom = ScenarioConfig::new("stressed")
//!     .with_volatility(0.08)
//!     .with_confidence_level(0.99)
//!     .with_seed(7);
//! manager.register(custom).unwrap();
//!
//! let params = manager.get("stressed").unwrap().risk_parameters().unwrap();
//! assert_eq!(params.confidence_level(), 0.99);
//! ```
//!
//! # Presets
//!
//! - `default` - Reset values (€1m, μ 0.1%, σ 2%, 95%, 250 days)
//! - `lab1` - Parametric vs historical
//! - `lab2` - Higher volatility
//! - `lab3` - Higher confidence level
//! - `lab4` - Short window
//! - `lab5` - Longer history

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod bounds;
mod error;
mod manager;
mod scenario;

pub use bounds::{InputBounds, ValueRange};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use manager::ScenarioManager;
pub use scenario::{Preset, ScenarioConfig, DEFAULT_HISTOGRAM_BINS};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bounds::InputBounds;
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::manager::ScenarioManager;
    pub use crate::scenario::{Preset, ScenarioConfig};
}
