//! Parametric (variance-covariance) VaR and ES.

use tailrisk_math::distributions::{standard_normal_inv_cdf, standard_normal_pdf};
use tracing::debug;

use super::{RiskEstimate, VaRMethod};
use crate::params::RiskParameters;
use crate::RiskResult;

/// Closed-form VaR and ES for normally distributed returns.
///
/// With α = 1 − confidence and z = Φ⁻¹(α):
///
/// ```text
/// VaR = V × −(μ + σ·z)
/// ES  = V × −(μ − σ·φ(z)/α)
/// ```
///
/// # Arguments
///
/// * `params` - Portfolio value, daily mean and volatility, confidence level
///
/// # Example
///
/// ```rust
/// use tailrisk_risk::params::RiskParameters;
/// use tailrisk_risk::var::parametric_var_es;
///
/// let params = RiskParameters::new(1_000_000.0, 0.001, 0.02, 0.95)?;
/// let est = parametric_var_es(&params)?;
/// assert!((est.value_at_risk - 31_897.07).abs() < 0.01);
/// # Ok::<(), tailrisk_risk::RiskError>(())
/// ```
pub fn parametric_var_es(params: &RiskParameters) -> RiskResult<RiskEstimate> {
    let alpha = params.tail_probability();
    let z = standard_normal_inv_cdf(alpha)?;

    let value = params.portfolio_value();
    let mu = params.mean_return();
    let sigma = params.volatility();

    let var = value * -(mu + sigma * z);
    let es = value * -(mu - sigma * standard_normal_pdf(z) / alpha);

    debug!(
        confidence = params.confidence_level(),
        z, var, es, "parametric VaR/ES"
    );

    RiskEstimate::new(var, es, params.confidence_level(), VaRMethod::Parametric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(value: f64, mu: f64, sigma: f64, cl: f64) -> RiskParameters {
        RiskParameters::new(value, mu, sigma, cl).unwrap()
    }

    #[test]
    fn test_reference_values() {
        let est = parametric_var_es(&params(1_000_000.0, 0.001, 0.02, 0.95)).unwrap();

        // z = -1.644853627, φ(z)/α = 2.062712807
        assert_relative_eq!(est.value_at_risk, 31_897.072_5, epsilon = 0.01);
        assert_relative_eq!(est.expected_shortfall, 40_254.256_1, epsilon = 0.01);
        assert_eq!(est.method, VaRMethod::Parametric);
    }

    #[test]
    fn test_99_percent() {
        let est = parametric_var_es(&params(1_000_000.0, 0.0, 0.01, 0.99)).unwrap();
        // z = -2.326347874, φ(z)/α = 2.665214220
        assert_relative_eq!(est.value_at_risk, 23_263.478_7, epsilon = 0.01);
        assert_relative_eq!(est.expected_shortfall, 26_652.142_2, epsilon = 0.01);
    }

    #[test]
    fn test_es_exceeds_var() {
        for cl in [0.9, 0.95, 0.975, 0.99] {
            let est = parametric_var_es(&params(1e6, 0.001, 0.02, cl)).unwrap();
            assert!(est.expected_shortfall > est.value_at_risk, "cl = {}", cl);
        }
    }

    #[test]
    fn test_positive_drift_can_offset_loss() {
        // μ larger than σ·|z| turns VaR into a gain
        let est = parametric_var_es(&params(1e6, 0.05, 0.005, 0.9)).unwrap();
        assert!(est.value_at_risk < 0.0);
    }
}
