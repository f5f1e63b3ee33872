//! Flat entry points taking raw numbers.
//!
//! These are what a presentation layer calls with the five dashboard
//! inputs. Validation happens here, before any computation.

use rand::Rng;

use crate::params::{HistoricalWindow, RiskParameters};
use crate::var::{historical_var_es, parametric_var_es, HistoricalEstimate, RiskEstimate};
use crate::RiskResult;

/// Parametric VaR and ES from raw inputs.
///
/// # Example
///
/// ```rust
/// use tailrisk_risk::api::compute_parametric;
///
/// let est = compute_parametric(1_000_000.0, 0.001, 0.02, 0.95)?;
/// assert!(est.expected_shortfall > est.value_at_risk);
/// assert!(compute_parametric(1_000_000.0, 0.001, 0.02, 1.0).is_err());
/// # Ok::<(), tailrisk_risk::RiskError>(())
/// ```
pub fn compute_parametric(
    portfolio_value: f64,
    mean_return: f64,
    volatility: f64,
    confidence_level: f64,
) -> RiskResult<RiskEstimate> {
    let params = RiskParameters::new(portfolio_value, mean_return, volatility, confidence_level)?;
    parametric_var_es(&params)
}

/// Historical-simulation VaR, ES and the simulated sample from raw inputs.
pub fn compute_historical<R: Rng + ?Sized>(
    portfolio_value: f64,
    mean_return: f64,
    volatility: f64,
    confidence_level: f64,
    window_size: usize,
    rng: &mut R,
) -> RiskResult<HistoricalEstimate> {
    let params = RiskParameters::new(portfolio_value, mean_return, volatility, confidence_level)?;
    let window = HistoricalWindow::new(window_size)?;
    historical_var_es(&params, window, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailrisk_math::sampling::random_source;

    #[test]
    fn test_invalid_inputs_fail_before_drawing() {
        let mut rng = random_source(Some(1));
        for (pv, mu, sigma, cl, n) in [
            (1e6, 0.001, 0.02, 1.0, 250),
            (1e6, 0.001, 0.0, 0.95, 250),
            (0.0, 0.001, 0.02, 0.95, 250),
            (1e6, 0.001, 0.02, 0.95, 1),
        ] {
            let err = compute_historical(pv, mu, sigma, cl, n, &mut rng).unwrap_err();
            assert!(err.is_invalid_parameter(), "{:?}", err);
        }
    }

    #[test]
    fn test_parametric_rejects_invalid_inputs() {
        assert!(compute_parametric(1e6, 0.001, 0.02, 1.0)
            .unwrap_err()
            .is_invalid_parameter());
        assert!(compute_parametric(1e6, 0.001, 0.0, 0.95)
            .unwrap_err()
            .is_invalid_parameter());
    }

    #[test]
    fn test_historical_returns_sample() {
        let mut rng = random_source(Some(9));
        let est = compute_historical(1e6, 0.001, 0.02, 0.95, 50, &mut rng).unwrap();
        assert_eq!(est.sample.len(), 50);
    }
}
