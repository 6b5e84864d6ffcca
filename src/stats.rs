//! Distribution statistics over numeric series.
//!
//! This module computes the summary numbers every metric family reports:
//! average, extrema, nearest-rank percentiles, population standard
//! deviation, and equal-width histograms.
//!
//! Two conventions hold everywhere:
//!
//! - An empty series yields a defined all-zero result rather than an error,
//!   so callers never special-case empty input.
//! - Percentiles use the nearest-rank estimator: the element at sorted index
//!   `floor(len * p)`, clamped to the last valid index. This is deliberately
//!   not an interpolated percentile; the index selection is preserved
//!   exactly for output compatibility.
//!
//! # Examples
//!
//! ```
//! use framelens::stats::SeriesStats;
//!
//! let stats = SeriesStats::from_series(&[4.0, 1.0, 3.0, 2.0]);
//! assert_eq!(stats.min, 1.0);
//! assert_eq!(stats.avg, 2.5);
//! assert_eq!(stats.max, 4.0);
//!
//! let empty = SeriesStats::from_series(&[]);
//! assert_eq!(empty.avg, 0.0);
//! ```

use serde::{Deserialize, Serialize};

/// Default histogram bin count.
pub const DEFAULT_BINS: usize = 20;

/// Summary statistics for one numeric series.
///
/// All fields are 0.0 for an empty series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    /// Arithmetic mean.
    pub avg: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Nearest-rank 99th percentile.
    pub p99: f64,
}

impl SeriesStats {
    /// Compute summary statistics over a series.
    ///
    /// # Examples
    ///
    /// ```
    /// use framelens::stats::SeriesStats;
    ///
    /// let stats = SeriesStats::from_series(&[10.0, 20.0]);
    /// assert_eq!(stats.avg, 15.0);
    /// ```
    #[must_use]
    pub fn from_series(series: &[f64]) -> Self {
        if series.is_empty() {
            return SeriesStats::default();
        }

        let sorted = sorted_copy(series);
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in series {
            min = min.min(v);
            max = max.max(v);
        }

        SeriesStats {
            avg: mean(series),
            min,
            max,
            p99: percentile_of_sorted(&sorted, 0.99),
        }
    }
}

/// Equal-width histogram over a numeric series.
///
/// Bin `i` covers `[min + i*width, min + (i+1)*width)`; the last bin also
/// absorbs the maximum. Labels are human-readable integer-rounded range
/// strings in bin order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    /// `start-end` range label per bin.
    pub labels: Vec<String>,
    /// Sample count per bin. Sums to the series length.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Build a histogram with `bins` equal-width bins.
    ///
    /// An empty series (or zero bins) yields an empty histogram. When every
    /// sample is identical the bin width is zero; the division is guarded
    /// and every sample lands in bin 0.
    #[must_use]
    pub fn from_series(series: &[f64], bins: usize) -> Self {
        if series.is_empty() || bins == 0 {
            return Histogram::default();
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in series {
            min = min.min(v);
            max = max.max(v);
        }
        let width = (max - min) / bins as f64;

        let mut labels = Vec::with_capacity(bins);
        for i in 0..bins {
            let start = min + i as f64 * width;
            let end = min + (i + 1) as f64 * width;
            labels.push(format!("{start:.0}-{end:.0}"));
        }

        let mut counts = vec![0usize; bins];
        for &v in series {
            let bin = if width > 0.0 {
                (((v - min) / width).floor() as usize).min(bins - 1)
            } else {
                0
            };
            counts[bin] += 1;
        }

        Histogram { labels, counts }
    }

    /// Total number of samples across all bins.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Arithmetic mean, 0.0 for an empty series.
#[must_use]
pub fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().sum::<f64>() / series.len() as f64
}

/// Population standard deviation, 0.0 for an empty series.
///
/// The same mean/variance formula drives both the whole-run figure reported
/// in the summary and each window of the stability series.
#[must_use]
pub fn std_dev(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let m = mean(series);
    let variance = series.iter().map(|v| (v - m).powi(2)).sum::<f64>() / series.len() as f64;
    variance.sqrt()
}

/// Nearest-rank percentile over an unsorted series.
///
/// Sorts a copy; for repeated percentile queries over one series, sort once
/// with [`sorted_copy`] and use [`percentile_of_sorted`].
#[must_use]
pub fn percentile(series: &[f64], p: f64) -> f64 {
    percentile_of_sorted(&sorted_copy(series), p)
}

/// Nearest-rank percentile over an ascending-sorted series.
///
/// Returns the element at index `floor(len * p)`, clamped to `len - 1`;
/// 0.0 for an empty series.
#[must_use]
pub fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() as f64 * p).floor() as usize).min(sorted.len() - 1);
    sorted[idx]
}

/// Ascending-sorted copy of a series.
#[must_use]
pub fn sorted_copy(series: &[f64]) -> Vec<f64> {
    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}
