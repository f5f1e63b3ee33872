//! # tailrisk-risk
//!
//! Downside risk analytics for a single-asset portfolio.
//!
//! This crate provides two independent estimators of one-day risk:
//!
//! - **Parametric**: closed-form VaR and ES under normally distributed returns
//! - **Historical simulation**: empirical VaR and ES from a freshly drawn
//!   synthetic return sample
//! - **Comparison**: both methods side by side on the same inputs
//!
//! Both estimates are positive loss magnitudes in the currency of the
//! portfolio value.
//!
//! ## Example
//!
//! ```rust
//! use tailrisk_risk::prelude::*;
//! use tailrisk_math::sampling::random_source;
//!
//! let params = RiskParameters::new(1_000_000.0, 0.001, 0.02, 0.95)?;
//! let parametric = parametric_var_es(&params)?;
//! assert!(parametric.expected_shortfall > parametric.value_at_risk);
//!
//! let window = HistoricalWindow::new(250)?;
//! let mut rng = random_source(Some(42));
//! let historical = historical_var_es(&params, window, &mut rng)?;
//! assert_eq!(historical.sample.len(), 250);
//! # Ok::<(), tailrisk_risk::RiskError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod api;
pub mod compare;
mod error;
pub mod params;
pub mod var;

pub use error::{RiskError, RiskResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::api::{compute_historical, compute_parametric};
    pub use crate::compare::{compare, RiskComparison};
    pub use crate::params::{HistoricalWindow, RiskParameters};
    pub use crate::var::{
        historical_var_es, parametric_var_es, HistoricalEstimate, ReturnSample, RiskEstimate,
        VaRMethod,
    };
    pub use crate::{RiskError, RiskResult};
}
