//! Historical simulation VaR and ES.

use rand::Rng;
use tailrisk_math::sampling::NormalSampler;
use tailrisk_math::statistics::{percentile_sorted, sorted_ascending, tail_mean};
use tracing::{debug, warn};

use super::{HistoricalEstimate, ReturnSample, RiskEstimate, VaRMethod};
use crate::error::RiskError;
use crate::params::{HistoricalWindow, RiskParameters, MIN_WINDOW_SIZE};
use crate::RiskResult;

/// Historical simulation over a freshly drawn synthetic sample.
///
/// Draws `window.size()` returns from `N(μ, σ)` using `rng`, then applies
/// [`empirical_var_es`]. A new sample is drawn on every call; pass a seeded
/// generator for reproducible results.
///
/// # Arguments
///
/// * `params` - Portfolio value, daily mean and volatility, confidence level
/// * `window` - Number of simulated days
/// * `rng` - Random source the sample is drawn from
///
/// # Example
///
/// ```rust
/// use tailrisk_math::sampling::random_source;
/// use tailrisk_risk::params::{HistoricalWindow, RiskParameters};
/// use tailrisk_risk::var::historical_var_es;
///
/// let params = RiskParameters::new(1_000_000.0, 0.001, 0.02, 0.95)?;
/// let window = HistoricalWindow::new(250)?;
///
/// let a = historical_var_es(&params, window, &mut random_source(Some(7)))?;
/// let b = historical_var_es(&params, window, &mut random_source(Some(7)))?;
/// assert_eq!(a, b);
/// # Ok::<(), tailrisk_risk::RiskError>(())
/// ```
pub fn historical_var_es<R: Rng + ?Sized>(
    params: &RiskParameters,
    window: HistoricalWindow,
    rng: &mut R,
) -> RiskResult<HistoricalEstimate> {
    let sampler = NormalSampler::new(params.mean_return(), params.volatility())?;
    let returns = sampler.sample_n(window.size(), rng);
    empirical_var_es(params, returns)
}

/// VaR and ES from a given return sample.
///
/// The threshold is the `(1 − confidence) × 100` percentile with linear
/// interpolation between order statistics. VaR is `V × −threshold`; ES is
/// `V × −mean(returns ≤ threshold)`.
///
/// # Errors
///
/// * [`RiskError::InvalidParameter`] if the sample has fewer than two returns
/// * [`RiskError::Math`] if a return is NaN or infinite
/// * [`RiskError::DegenerateTail`] if no return is at or below the threshold
pub fn empirical_var_es(
    params: &RiskParameters,
    returns: Vec<f64>,
) -> RiskResult<HistoricalEstimate> {
    if returns.len() < MIN_WINDOW_SIZE {
        return Err(RiskError::invalid(
            "window_size",
            format!(
                "must be at least {}, got {}",
                MIN_WINDOW_SIZE,
                returns.len()
            ),
        ));
    }

    let sorted = sorted_ascending(&returns)?;
    let threshold = percentile_sorted(&sorted, params.percentile_rank())?;

    let Some(tail) = tail_mean(&sorted, threshold) else {
        warn!(
            threshold,
            sample_size = returns.len(),
            "no simulated return at or below VaR threshold"
        );
        return Err(RiskError::DegenerateTail {
            threshold,
            sample_size: returns.len(),
        });
    };

    let value = params.portfolio_value();
    let var = value * -threshold;
    let es = value * -tail.mean;

    debug!(
        confidence = params.confidence_level(),
        sample_size = returns.len(),
        threshold,
        tail_count = tail.count,
        var,
        es,
        "historical VaR/ES"
    );

    Ok(HistoricalEstimate {
        estimate: RiskEstimate::new(var, es, params.confidence_level(), VaRMethod::Historical)?,
        threshold,
        tail_mean: tail.mean,
        tail_count: tail.count,
        sample: ReturnSample(returns),
    })
}
