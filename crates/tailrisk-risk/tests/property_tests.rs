//! Property-based tests for estimator invariants.
//!
//! These tests verify properties that should hold for every valid input:
//! - Parametric VaR/ES are finite and ES ≥ VaR
//! - Both measures scale linearly with portfolio value
//! - Both measures increase with volatility and with confidence
//! - Historical estimates never produce NaN and keep ES ≥ VaR

use approx::assert_relative_eq;
use proptest::prelude::*;
use tailrisk_math::sampling::random_source;
use tailrisk_risk::prelude::*;

fn params_strategy() -> impl Strategy<Value = RiskParameters> {
    (
        10_000.0..10_000_000.0f64,
        -0.05..0.05f64,
        0.005..0.1f64,
        0.90..0.99f64,
    )
        .prop_map(|(pv, mu, sigma, cl)| RiskParameters::new(pv, mu, sigma, cl).unwrap())
}

proptest! {
    #[test]
    fn parametric_es_at_least_var(params in params_strategy()) {
        let est = parametric_var_es(&params).unwrap();
        prop_assert!(est.value_at_risk.is_finite());
        prop_assert!(est.expected_shortfall.is_finite());
        prop_assert!(est.expected_shortfall >= est.value_at_risk);
    }

    #[test]
    fn parametric_scales_with_portfolio_value(params in params_strategy(), k in 0.01..100.0f64) {
        let base = parametric_var_es(&params).unwrap();
        let scaled_params = params.with_portfolio_value(params.portfolio_value() * k).unwrap();
        let scaled = parametric_var_es(&scaled_params).unwrap();

        assert_relative_eq!(scaled.value_at_risk, k * base.value_at_risk, max_relative = 1e-9);
        assert_relative_eq!(
            scaled.expected_shortfall,
            k * base.expected_shortfall,
            max_relative = 1e-9
        );
    }

    #[test]
    fn parametric_increases_with_volatility(params in params_strategy(), bump in 0.001..0.05f64) {
        let low = parametric_var_es(&params).unwrap();
        let high = parametric_var_es(&params.with_volatility(params.volatility() + bump).unwrap())
            .unwrap();

        prop_assert!(high.value_at_risk > low.value_at_risk);
        prop_assert!(high.expected_shortfall > low.expected_shortfall);
    }

    #[test]
    fn parametric_increases_with_confidence(
        params in params_strategy(),
        cl_low in 0.80..0.94f64,
        gap in 0.005..0.05f64,
    ) {
        let low = parametric_var_es(&params.with_confidence_level(cl_low).unwrap()).unwrap();
        let high = parametric_var_es(&params.with_confidence_level(cl_low + gap).unwrap()).unwrap();

        prop_assert!(high.value_at_risk > low.value_at_risk);
        prop_assert!(high.expected_shortfall > low.expected_shortfall);
    }

    #[test]
    fn historical_never_nan(
        params in params_strategy(),
        size in 2usize..400,
        seed in any::<u64>(),
    ) {
        let window = HistoricalWindow::new(size).unwrap();
        let result = historical_var_es(&params, window, &mut random_source(Some(seed))).unwrap();
        let est = result.estimate;

        prop_assert!(est.value_at_risk.is_finite());
        prop_assert!(est.expected_shortfall.is_finite());
        prop_assert!(result.tail_count >= 1);
        prop_assert!(
            est.expected_shortfall >= est.value_at_risk - 1e-9 * est.value_at_risk.abs().max(1.0)
        );
    }

    #[test]
    fn historical_is_deterministic_per_seed(params in params_strategy(), seed in any::<u64>()) {
        let window = HistoricalWindow::new(100).unwrap();
        let a = historical_var_es(&params, window, &mut random_source(Some(seed))).unwrap();
        let b = historical_var_es(&params, window, &mut random_source(Some(seed))).unwrap();
        prop_assert_eq!(a, b);
    }
}
