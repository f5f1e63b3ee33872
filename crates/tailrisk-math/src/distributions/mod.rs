//! Probability distributions.
//!
//! Only the standard normal is needed: the parametric estimator reads its
//! quantile and density, and tests use the CDF to check the quantile.

mod normal;

pub use normal::*;
