//! # Tailrisk Math
//!
//! Statistical utilities for the Tailrisk VaR/ES library.
//!
//! This crate provides:
//!
//! - **Distributions**: Standard normal density, CDF and quantile function
//! - **Statistics**: Empirical percentiles, means, tail averages, histograms
//! - **Sampling**: Normal return sampler over an injectable random source
//!
//! ## Design Philosophy
//!
//! - **Explicit randomness**: every draw goes through a caller-supplied `rand::Rng`
//! - **Numerical Stability**: NaN inputs are rejected rather than propagated
//! - **Small surface**: only what the risk estimators need

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod distributions;
pub mod error;
pub mod sampling;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::distributions::{
        standard_normal_cdf, standard_normal_inv_cdf, standard_normal_pdf,
    };
    pub use crate::error::{MathError, MathResult};
    pub use crate::sampling::{random_source, NormalSampler};
    pub use crate::statistics::{
        histogram, mean, percentile, percentile_sorted, sorted_ascending, tail_mean, Histogram,
        HistogramBin, TailMean,
    };
}

pub use error::{MathError, MathResult};
