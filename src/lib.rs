#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Framelens
//!
//! A library for parsing and analyzing per-frame performance telemetry logs
//! (FrameView-style CSV captures): one row per rendered frame, columns for
//! frame timing, latency-pipeline stages, per-core CPU utilization, and
//! GPU/CPU power and thermal readings.
//!
//! ## Quick Start
//!
//! ```
//! use framelens::analyze;
//!
//! let csv = "\
//! MsBetweenPresents,CPUUtil(%),Application
//! 16.667,42.0,Quake
//! 16.921,44.5,Quake
//! 15.8,41.2,Quake
//! ";
//! let result = analyze(csv)?;
//!
//! println!("{} averaged {:.1} FPS", result.metadata.application, result.fps.avg);
//! println!("1% low: {:.1} FPS", result.fps.low_1);
//! # Ok::<(), framelens::TelemetryError>(())
//! ```
//!
//! ## Pipeline
//!
//! Raw text flows through the components in order; each is usable on its
//! own for callers that want partial results:
//!
//! - [`parser`] — raw CSV text → typed, immutable [`FrameRecord`]s
//! - [`schema`] — header/content probing: active cores, optional hardware
//! - [`series`] — named numeric series with a uniform validity filter
//! - [`stats`] — distribution statistics and histograms
//! - [`stability`] — sliding-window frame-time jitter
//! - [`analysis`] — derived metrics and the final [`AnalysisResult`]
//!
//! ## Modules
//!
//! - [`analysis`] — Full-run analysis and the `AnalysisResult` tree
//! - [`columns`] — Known telemetry column names
//! - [`error`] — Error types and result type
//! - [`parser`] — CSV row parsing into frame records
//! - [`record`] — `FrameRecord` and `CellValue`
//! - [`schema`] — Schema capabilities and core remapping
//! - [`series`] — Numeric series extraction
//! - [`stability`] — Windowed stability metrics
//! - [`stats`] — Distribution statistics
//!
//! ## Handling of missing data
//!
//! Heterogeneous, partially populated schemas are the normal case, not the
//! exception. Only two conditions abort an analysis: input without header
//! and data rows, and a log with zero usable FPS samples. Everything else
//! (missing optional columns, vendor-specific gaps, never-populated
//! per-core columns) resolves to defined fallbacks: empty-series zero
//! statistics, a capability flag left false, or a zero-filled timeline.

pub mod analysis;
pub mod columns;
pub mod error;
pub mod parser;
pub mod record;
pub mod schema;
pub mod series;
pub mod stability;
pub mod stats;

pub use analysis::{
    analyze, analyze_log, analyze_reader, AnalysisResult, CoreLoad, CoreSeries, CpuReport,
    FpsReport, FrameTimeReport, GpuPowerVendor, GpuReport, LatencyReport, MetricSeries,
    PowerReport, RunMetadata,
};
pub use error::{Result, TelemetryError};
pub use parser::{parse_log, parse_log_from_reader, FrameLog};
pub use record::{CellValue, FrameRecord};
pub use schema::{CoreMap, SchemaCapabilities};
pub use stability::{rolling_std_dev, STABILITY_WINDOW};
pub use stats::{Histogram, SeriesStats};
