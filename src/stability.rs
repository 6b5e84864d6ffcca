//! Sliding-window frame-time stability.
//!
//! Local jitter over time is visualized as the standard deviation of the
//! frame-time series inside a sliding window: output point `i` is the
//! std-dev of frames `i..i+window`. The output has `len - window` points
//! (empty when the run is shorter than the window), so the series starts
//! once a full window of history exists.
//!
//! Each window recomputes its own mean and variance independently; this is
//! distinct from the single whole-run standard deviation reported in the
//! summary, which uses the same formula over the entire series.

use crate::stats::std_dev;

/// Window size, in frames, for the stability series.
pub const STABILITY_WINDOW: usize = 60;

/// Sliding-window standard deviation over a frame-time series.
///
/// Returns `max(0, len - window)` points; `window` must be non-zero.
///
/// # Examples
///
/// ```
/// use framelens::stability::rolling_std_dev;
///
/// let flat = vec![16.7; 100];
/// let series = rolling_std_dev(&flat, 60);
/// assert_eq!(series.len(), 40);
/// assert!(series.iter().all(|&sd| sd.abs() < 1e-9));
/// ```
#[must_use]
pub fn rolling_std_dev(frame_times: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || frame_times.len() <= window {
        return Vec::new();
    }
    frame_times
        .windows(window)
        .take(frame_times.len() - window)
        .map(std_dev)
        .collect()
}
