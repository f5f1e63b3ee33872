//! Equal-width histograms of a return sample.

use serde::{Deserialize, Serialize};

use super::ensure_finite;
use crate::error::{MathError, MathResult};

/// A single histogram bin covering `[lower, upper)`.
///
/// The last bin of a [`Histogram`] is closed on the right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Upper edge.
    pub upper: f64,
    /// Number of observations in the bin.
    pub count: usize,
}

impl HistogramBin {
    /// Midpoint of the bin.
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }
}

/// Equal-width histogram over the sample range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    lower: f64,
    width: f64,
}

impl Histogram {
    /// The bins in ascending order.
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Total number of observations counted.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Index of the bin containing `x`, or `None` if `x` is outside the range.
    pub fn bin_index(&self, x: f64) -> Option<usize> {
        let last = self.bins.last()?;
        if !x.is_finite() || x < self.lower || x > last.upper {
            return None;
        }
        let i = ((x - self.lower) / self.width).floor() as usize;
        Some(i.min(self.bins.len() - 1))
    }
}

/// Builds an equal-width histogram with `bins` bins spanning `[min, max]`.
///
/// A constant sample gets the range `[x − 0.5, x + 0.5]` so the bin width
/// stays positive.
///
/// # Example
///
/// ```rust
/// use tailrisk_math::statistics::histogram;
///
/// let h = histogram(&[0.0, 0.1, 0.2, 0.3, 1.0], 2).unwrap();
/// assert_eq!(h.bins()[0].count, 4);
/// assert_eq!(h.bins()[1].count, 1);
/// ```
pub fn histogram(data: &[f64], bins: usize) -> MathResult<Histogram> {
    if bins == 0 {
        return Err(MathError::invalid_input("histogram needs at least one bin"));
    }
    if data.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    ensure_finite(data)?;

    let mut min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        min -= 0.5;
        max += 0.5;
    }

    let width = (max - min) / bins as f64;
    let mut result = Histogram {
        bins: (0..bins)
            .map(|i| HistogramBin {
                lower: min + i as f64 * width,
                upper: if i + 1 == bins {
                    max
                } else {
                    min + (i + 1) as f64 * width
                },
                count: 0,
            })
            .collect(),
        lower: min,
        width,
    };

    for &x in data {
        if let Some(i) = result.bin_index(x) {
            result.bins[i].count += 1;
        }
    }

    Ok(result)
}
