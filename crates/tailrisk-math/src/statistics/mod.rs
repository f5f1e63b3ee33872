//! Empirical statistics over return samples.
//!
//! All functions reject NaN and infinite inputs up front; a single NaN would
//! otherwise poison sorting and every downstream quantile.

mod histogram;

pub use histogram::{histogram, Histogram, HistogramBin};

use crate::error::{MathError, MathResult};

/// Checks that every value is finite.
fn ensure_finite(data: &[f64]) -> MathResult<()> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(MathError::NonFinite { index }),
        None => Ok(()),
    }
}

/// Returns a sorted (ascending) copy of `data`.
///
/// # Errors
///
/// Returns an error if `data` is empty or contains a non-finite value.
pub fn sorted_ascending(data: &[f64]) -> MathResult<Vec<f64>> {
    if data.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    ensure_finite(data)?;

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Empirical percentile of an already sorted sample.
///
/// Uses linear interpolation between order statistics: for a sample of
/// length `n` the position is `rank / 100 × (n − 1)` and the result is
/// interpolated between the two bracketing elements.
///
/// # Arguments
///
/// * `sorted` - Sample sorted in ascending order
/// * `rank` - Percentile rank in `[0, 100]`
///
/// # Example
///
/// ```rust
/// use tailrisk_math::statistics::percentile_sorted;
///
/// let xs = [1.0, 2.0, 3.0, 4.0];
/// // position = 0.5 × 3 = 1.5, halfway between 2.0 and 3.0
/// assert_eq!(percentile_sorted(&xs, 50.0).unwrap(), 2.5);
/// ```
pub fn percentile_sorted(sorted: &[f64], rank: f64) -> MathResult<f64> {
    if sorted.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if !(0.0..=100.0).contains(&rank) {
        return Err(MathError::invalid_input(format!(
            "percentile rank must be in [0, 100], got {}",
            rank
        )));
    }

    let n = sorted.len();
    if n == 1 {
        return Ok(sorted[0]);
    }

    let position = rank / 100.0 * (n - 1) as f64;
    let lo = (position.floor() as usize).min(n - 1);
    let hi = (position.ceil() as usize).min(n - 1);

    if lo == hi {
        Ok(sorted[lo])
    } else {
        let t = position - lo as f64;
        Ok(sorted[lo] + t * (sorted[hi] - sorted[lo]))
    }
}

/// Empirical percentile of an unsorted sample.
///
/// Sorts a copy of `data` and delegates to [`percentile_sorted`].
pub fn percentile(data: &[f64], rank: f64) -> MathResult<f64> {
    let sorted = sorted_ascending(data)?;
    percentile_sorted(&sorted, rank)
}

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> MathResult<f64> {
    if data.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    ensure_finite(data)?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Average of the observations at or below a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailMean {
    /// Mean of the tail observations.
    pub mean: f64,
    /// Number of observations in the tail.
    pub count: usize,
}

/// Mean of all elements `<= threshold`.
///
/// Returns `None` when no element qualifies, leaving the caller to decide
/// what an empty tail means.
pub fn tail_mean(data: &[f64], threshold: f64) -> Option<TailMean> {
    let (sum, count) = data
        .iter()
        .filter(|&&x| x <= threshold)
        .fold((0.0, 0usize), |(sum, count), &x| (sum + x, count + 1));

    (count > 0).then(|| TailMean {
        mean: sum / count as f64,
        count,
    })
}
