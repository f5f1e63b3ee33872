//! Parametric vs historical comparison on identical inputs.

use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::params::{HistoricalWindow, RiskParameters};
use crate::var::{historical_var_es, parametric_var_es, HistoricalEstimate, RiskEstimate};
use crate::RiskResult;

/// Both estimates plus their differences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskComparison {
    /// Closed-form estimate
    pub parametric: RiskEstimate,
    /// Simulation estimate with its sample
    pub historical: HistoricalEstimate,
}

impl RiskComparison {
    /// Historical minus parametric VaR.
    pub fn var_difference(&self) -> f64 {
        self.historical.estimate.value_at_risk - self.parametric.value_at_risk
    }

    /// Historical minus parametric ES.
    pub fn es_difference(&self) -> f64 {
        self.historical.estimate.expected_shortfall - self.parametric.expected_shortfall
    }

    /// Historical VaR relative to parametric VaR, minus one.
    ///
    /// `None` when the parametric VaR is zero.
    pub fn var_relative_difference(&self) -> Option<f64> {
        let base = self.parametric.value_at_risk;
        (base != 0.0).then(|| self.var_difference() / base)
    }
}

/// Runs both estimators on the same parameters.
pub fn compare<R: Rng + ?Sized>(
    params: &RiskParameters,
    window: HistoricalWindow,
    rng: &mut R,
) -> RiskResult<RiskComparison> {
    let parametric = parametric_var_es(params)?;
    let historical = historical_var_es(params, window, rng)?;

    let comparison = RiskComparison {
        parametric,
        historical,
    };
    info!(
        window = window.size(),
        var_diff = comparison.var_difference(),
        es_diff = comparison.es_difference(),
        "compared parametric and historical estimates"
    );
    Ok(comparison)
}
