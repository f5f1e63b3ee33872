//! Standard normal distribution.

use std::f64::consts::SQRT_2;

use statrs::function::erf::{erfc, erfc_inv};

use crate::error::{MathError, MathResult};

/// `1 / sqrt(2π)`.
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal density φ(z).
///
/// ```rust
/// use tailrisk_math::distributions::standard_normal_pdf;
///
/// let peak = standard_normal_pdf(0.0);
/// assert!((peak - 0.398_942_28).abs() < 1e-8);
/// ```
#[inline]
pub fn standard_normal_pdf(z: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * z * z).exp()
}

/// Standard normal cumulative distribution Φ(z).
#[inline]
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

/// Standard normal quantile function Φ⁻¹(p).
///
/// Computed through the inverse complementary error function, which keeps
/// full double precision in the lower tail where VaR quantiles live.
///
/// # Arguments
///
/// * `p` - Probability, strictly between 0 and 1
///
/// # Errors
///
/// Returns [`MathError::ProbabilityOutOfRange`] when `p` is not in `(0, 1)`
/// (NaN included).
///
/// # Example
///
/// ```rust
/// use tailrisk_math::distributions::standard_normal_inv_cdf;
///
/// let z = standard_normal_inv_cdf(0.05).unwrap();
/// assert!((z + 1.644_853_6).abs() < 1e-6);
/// ```
pub fn standard_normal_inv_cdf(p: f64) -> MathResult<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(MathError::ProbabilityOutOfRange { p });
    }
    Ok(-SQRT_2 * erfc_inv(2.0 * p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pdf_symmetry_and_peak() {
        assert_relative_eq!(standard_normal_pdf(0.0), INV_SQRT_2PI, epsilon = 1e-15);
        assert_relative_eq!(
            standard_normal_pdf(1.3),
            standard_normal_pdf(-1.3),
            epsilon = 1e-15
        );
        // φ(1.644853627) from tables
        assert_relative_eq!(standard_normal_pdf(1.644_853_627), 0.103_135_6, epsilon = 1e-7);
    }

    #[test]
    fn test_cdf_reference_values() {
        assert_relative_eq!(standard_normal_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(standard_normal_cdf(-1.959_963_985), 0.025, epsilon = 1e-9);
        assert_relative_eq!(standard_normal_cdf(1.0), 0.841_344_746, epsilon = 1e-9);
    }

    #[test]
    fn test_inv_cdf_reference_values() {
        let cases = [
            (0.001, -3.090_232_306),
            (0.01, -2.326_347_874),
            (0.025, -1.959_963_985),
            (0.05, -1.644_853_627),
            (0.10, -1.281_551_566),
            (0.5, 0.0),
        ];
        for (p, expected) in cases {
            let z = standard_normal_inv_cdf(p).unwrap();
            assert!(
                (z - expected).abs() < 1e-7,
                "inv_cdf({}) = {}, expected {}",
                p,
                z,
                expected
            );
        }
    }

    #[test]
    fn test_inv_cdf_round_trips_through_cdf() {
        for i in 1..500 {
            let p = f64::from(i) / 1000.0;
            let z = standard_normal_inv_cdf(p).unwrap();
            assert_relative_eq!(standard_normal_cdf(z), p, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_inv_cdf_rejects_boundaries() {
        for p in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(standard_normal_inv_cdf(p).is_err(), "p = {} accepted", p);
        }
    }
}
