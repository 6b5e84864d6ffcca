//! Error types for telemetry analysis.
//!
//! This module provides the [`TelemetryError`] type for all analysis
//! operations and the [`Result`] convenience type.
//!
//! Only two conditions abort an analysis: input with no header/data rows
//! ([`TelemetryError::MalformedInput`]) and a log whose frame-time column
//! yields no usable FPS samples ([`TelemetryError::NoUsableSamples`]). Every
//! other gap in a log (a missing optional column, an absent vendor power
//! reading, an empty per-core column) resolves locally to a defined
//! fallback value and is never raised as an error.

use thiserror::Error;

/// Error type for telemetry log analysis.
///
/// Both analysis-aborting variants carry a message suitable for direct
/// display to the user; a failed analysis leaves any previously produced
/// result untouched.
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The input has no header row, no data rows, or produced no records.
    #[error("Malformed telemetry log: {0}")]
    MalformedInput(String),

    /// The log parsed, but no valid frame-time samples survived filtering,
    /// so the run cannot be summarized.
    #[error("No usable samples: {0}")]
    NoUsableSamples(String),

    /// IO error from the underlying source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`TelemetryError`].
pub type Result<T> = std::result::Result<T, TelemetryError>;
