//! Full-run analysis: derived metrics and the assembled result.
//!
//! This module is the crate's entry point. [`analyze`] takes the raw text of
//! one capture log and returns an [`AnalysisResult`]: the complete tree of
//! summary statistics and derived series a presentation layer renders as
//! stat cards and time-series charts. The result is immutable, serializable,
//! and produced once per analyzed file; analysis is a pure function of the
//! input text.
//!
//! Derivations computed here, on top of the per-column statistics:
//!
//! - FPS per frame as `1000 / frame_time_ms`, with invalid frames excluded
//! - the FPS percentile ladder (p95, p99, 1% low, 0.1% low) and histogram
//! - frame-time stability (sliding-window std-dev)
//! - dropped-frame count
//! - vendor-reconciled GPU power and performance-per-watt
//!
//! # Examples
//!
//! ```
//! use framelens::analyze;
//!
//! let csv = "\
//! MsBetweenPresents,Application,GPU,CPU,Resolution
//! 10.0,Quake,RTX 4080,Ryzen 7800X3D,2560x1440
//! 20.0,Quake,RTX 4080,Ryzen 7800X3D,2560x1440
//! NA,Quake,RTX 4080,Ryzen 7800X3D,2560x1440
//! ";
//! let result = analyze(csv)?;
//!
//! assert_eq!(result.fps.samples, vec![100.0, 50.0]);
//! assert_eq!(result.fps.avg, 75.0);
//! assert_eq!(result.metadata.application, "Quake");
//! # Ok::<(), framelens::TelemetryError>(())
//! ```

use crate::columns;
use crate::error::{Result, TelemetryError};
use crate::parser::{parse_log, FrameLog};
use crate::record::CellValue;
use crate::schema::SchemaCapabilities;
use crate::series::{chain_series, column_series, core_series};
use crate::stability::{rolling_std_dev, STABILITY_WINDOW};
use crate::stats::{
    mean, percentile_of_sorted, sorted_copy, std_dev, Histogram, SeriesStats, DEFAULT_BINS,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Placeholder for categorical metadata absent from the first record.
const UNKNOWN: &str = "Unknown";

/// One metric's raw samples together with its summary statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    /// Validity-filtered samples in frame order.
    pub samples: Vec<f64>,
    /// Summary statistics over `samples`.
    pub stats: SeriesStats,
}

impl MetricSeries {
    /// Bundle a sample series with its computed statistics.
    #[must_use]
    pub fn from_samples(samples: Vec<f64>) -> Self {
        let stats = SeriesStats::from_series(&samples);
        MetricSeries { samples, stats }
    }
}

/// Identifying metadata for the analyzed run, read from the first record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Application (game) name.
    pub application: String,
    /// GPU model name.
    pub gpu: String,
    /// CPU model name.
    pub cpu: String,
    /// Render resolution.
    pub resolution: String,
    /// Number of valid FPS samples in the run.
    pub total_frames: usize,
    /// Number of frames flagged as dropped.
    pub dropped_frames: usize,
}

/// FPS distribution: summary, percentile ladder, histogram, raw samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FpsReport {
    /// Mean FPS.
    pub avg: f64,
    /// Lowest observed FPS sample.
    pub min: f64,
    /// Highest observed FPS sample.
    pub max: f64,
    /// Nearest-rank 95th percentile.
    pub p95: f64,
    /// Nearest-rank 99th percentile.
    pub p99: f64,
    /// "1% low": the FPS value at the 1st percentile of the distribution,
    /// above which 99% of frames lie. Not an average of the worst 1%.
    pub low_1: f64,
    /// "0.1% low": the FPS value at the 0.1st percentile.
    pub low_01: f64,
    /// Equal-width FPS distribution histogram.
    pub histogram: Histogram,
    /// Per-frame FPS samples, invalid frames excluded.
    pub samples: Vec<f64>,
}

/// Frame-time summary plus the derived stability series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameTimeReport {
    /// Mean frame time in milliseconds.
    pub avg_ms: f64,
    /// Whole-run population standard deviation in milliseconds.
    pub std_dev_ms: f64,
    /// Positive frame-time samples in frame order.
    pub samples: Vec<f64>,
    /// Sliding-window std-dev series ([`STABILITY_WINDOW`] frames per
    /// window); `max(0, len - window)` points.
    pub stability: Vec<f64>,
}

/// Summaries and series for each latency-pipeline stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatencyReport {
    /// Milliseconds between simulation starts.
    pub simulation_start: MetricSeries,
    /// Milliseconds between presents. Unlike the frame-time report, this
    /// stage retains zeros.
    pub between_presents: MetricSeries,
    /// Milliseconds between display changes.
    pub display_change: MetricSeries,
    /// Milliseconds inside the present API.
    pub in_present_api: MetricSeries,
    /// Render-to-present latency.
    pub render_present: MetricSeries,
    /// Present-until-displayed latency.
    pub until_displayed: MetricSeries,
    /// Render queue depth in frames.
    pub render_queue: MetricSeries,
    /// End-to-end PC latency.
    pub pc_latency: MetricSeries,
}

/// One active core's utilization timeline, keyed by display index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreSeries {
    /// Compact display index (0..k-1).
    pub display_index: usize,
    /// One utilization sample per frame record; missing samples are 0.0 so
    /// the timeline stays gap-free.
    pub samples: Vec<f64>,
}

/// A core singled out by its average utilization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreLoad {
    /// Compact display index of the core.
    pub display_index: usize,
    /// Average utilization over the run, in percent.
    pub avg_utilization: f64,
}

/// CPU package and per-core statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuReport {
    /// Package clock in MHz.
    pub frequency: MetricSeries,
    /// Whole-package utilization percentage.
    pub utilization: MetricSeries,
    /// Package temperature in Celsius.
    pub package_temp: MetricSeries,
    /// Package power in watts.
    pub package_power: MetricSeries,
    /// TDP limit in watts.
    pub tdp: MetricSeries,
    /// Per-core utilization timelines, in display-index order.
    pub cores: Vec<CoreSeries>,
    /// Core with the highest average utilization, when any core is active.
    pub busiest_core: Option<CoreLoad>,
    /// Core with the lowest average utilization, when any core is active.
    pub idlest_core: Option<CoreLoad>,
}

/// One GPU's clock, memory, utilization, and thermal statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuReport {
    /// Core clock in MHz.
    pub clock: MetricSeries,
    /// Memory clock in MHz.
    pub memory_clock: MetricSeries,
    /// Utilization percentage.
    pub utilization: MetricSeries,
    /// Temperature in Celsius.
    pub temperature: MetricSeries,
}

/// Which vendor column supplied the reconciled GPU power series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GpuPowerVendor {
    /// `NV Pwr(W) (API)` contributed samples.
    Nvidia,
    /// `AMDPwr(W) (API)` contributed samples.
    Amd,
    /// Neither vendor column contributed a sample.
    #[default]
    Unknown,
}

/// Power draw and efficiency statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerReport {
    /// CPU package power.
    pub cpu: MetricSeries,
    /// GPU board power, reconciled across vendor columns per record
    /// (NVIDIA preferred, then AMD).
    pub gpu: MetricSeries,
    /// Vendor whose column populated the reconciled GPU series.
    pub gpu_vendor: GpuPowerVendor,
    /// API-reported GPU-chip-only power.
    pub gpu_only_api: MetricSeries,
    /// PCAT hardware-meter total power, when the meter logged samples.
    pub pcat_total: Option<MetricSeries>,
    /// USB-C power delivery, when logged.
    pub usbc: Option<MetricSeries>,
    /// `avg(cpu) + avg(gpu)` in watts.
    pub total_power: f64,
    /// `avg_fps / total_power`; 0.0 when total power is zero or
    /// non-finite. Never NaN or infinity.
    pub perf_per_watt: f64,
    /// Logged frames-per-joule over total API power.
    pub perf_per_watt_api: MetricSeries,
    /// Logged frames-per-joule over GPU-only API power.
    pub perf_per_watt_gpu_api: MetricSeries,
    /// Logged frames-per-joule over PCAT power, when the meter is present.
    pub perf_per_watt_pcat: Option<MetricSeries>,
    /// Logged frames-per-joule over USB-C power, when logged.
    pub perf_per_watt_usbc: Option<MetricSeries>,
}

/// The complete analysis of one capture log.
///
/// Immutable once produced; one instance per analyzed file. A new analysis
/// simply replaces the previous result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Run identification and frame accounting.
    pub metadata: RunMetadata,
    /// Which optional metric families the log carried.
    pub capabilities: SchemaCapabilities,
    /// FPS distribution.
    pub fps: FpsReport,
    /// Frame-time summary and stability.
    pub frame_time: FrameTimeReport,
    /// Latency-pipeline stages.
    pub latency: LatencyReport,
    /// CPU package and per-core statistics.
    pub cpu: CpuReport,
    /// Primary GPU.
    pub gpu0: GpuReport,
    /// Secondary GPU, when the log carries one.
    pub gpu1: Option<GpuReport>,
    /// Power and efficiency.
    pub power: PowerReport,
}

/// Analyze the raw text of one capture log.
///
/// # Errors
///
/// Returns [`TelemetryError::MalformedInput`] when the text has no header
/// and data lines, and [`TelemetryError::NoUsableSamples`] when no valid
/// FPS sample can be derived. Both leave any previously produced result
/// untouched.
pub fn analyze(text: &str) -> Result<AnalysisResult> {
    let log = parse_log(text)?;
    analyze_log(&log)
}

/// Analyze a capture log from any reader.
///
/// # Errors
///
/// Returns [`TelemetryError::Io`] when the source cannot be read, plus any
/// error [`analyze`] reports.
pub fn analyze_reader<R: Read>(mut reader: R) -> Result<AnalysisResult> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    analyze(&text)
}

/// Analyze an already-parsed record set.
///
/// This is the single call the intake layer makes with the full record set;
/// everything downstream is a deterministic function of it.
///
/// # Errors
///
/// Returns [`TelemetryError::NoUsableSamples`] when the log yields zero
/// valid FPS samples.
pub fn analyze_log(log: &FrameLog) -> Result<AnalysisResult> {
    let capabilities = SchemaCapabilities::probe(log);

    let fps_samples = derive_fps_samples(log);
    if fps_samples.is_empty() {
        return Err(TelemetryError::NoUsableSamples(
            "no valid frame-time data to derive FPS from".to_string(),
        ));
    }

    let fps = build_fps_report(fps_samples);
    let frame_time = build_frame_time_report(log);
    let latency = build_latency_report(log);
    let cpu = build_cpu_report(log, &capabilities);
    let gpu0 = build_gpu_report(log, GpuSlot::Primary);
    let gpu1 = capabilities
        .has_secondary_gpu
        .then(|| build_gpu_report(log, GpuSlot::Secondary));
    let power = build_power_report(log, &capabilities, fps.avg);
    let metadata = build_metadata(log, fps.samples.len());

    debug!(
        "analyzed '{}': {} frames, {} active cores",
        metadata.application,
        metadata.total_frames,
        capabilities.core_map.len()
    );

    Ok(AnalysisResult {
        metadata,
        capabilities,
        fps,
        frame_time,
        latency,
        cpu,
        gpu0,
        gpu1,
        power,
    })
}

/// Per-frame FPS samples: `1000 / frame_time` for frames with a positive,
/// finite frame time. Invalid frames are excluded, not zeroed.
fn derive_fps_samples(log: &FrameLog) -> Vec<f64> {
    log.records()
        .iter()
        .filter_map(|record| record.number(columns::MS_BETWEEN_PRESENTS))
        .filter(|&ft| ft > 0.0)
        .map(|ft| 1000.0 / ft)
        .filter(|fps| fps.is_finite() && *fps > 0.0)
        .collect()
}

fn build_fps_report(samples: Vec<f64>) -> FpsReport {
    let sorted = sorted_copy(&samples);
    let histogram = Histogram::from_series(&samples, DEFAULT_BINS);
    FpsReport {
        avg: mean(&samples),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        p95: percentile_of_sorted(&sorted, 0.95),
        p99: percentile_of_sorted(&sorted, 0.99),
        low_1: percentile_of_sorted(&sorted, 0.01),
        low_01: percentile_of_sorted(&sorted, 0.001),
        histogram,
        samples,
    }
}

fn build_frame_time_report(log: &FrameLog) -> FrameTimeReport {
    // Strictly positive values only: a zero frame time is not a rendered
    // frame interval, while the between-presents latency stage keeps zeros.
    let samples: Vec<f64> = column_series(log, columns::MS_BETWEEN_PRESENTS)
        .into_iter()
        .filter(|&ft| ft > 0.0)
        .collect();
    let stability = rolling_std_dev(&samples, STABILITY_WINDOW);
    FrameTimeReport {
        avg_ms: mean(&samples),
        std_dev_ms: std_dev(&samples),
        samples,
        stability,
    }
}

fn build_latency_report(log: &FrameLog) -> LatencyReport {
    let extract = |column| MetricSeries::from_samples(column_series(log, column));
    LatencyReport {
        simulation_start: extract(columns::MS_BETWEEN_SIMULATION_START),
        between_presents: extract(columns::MS_BETWEEN_PRESENTS),
        display_change: extract(columns::MS_BETWEEN_DISPLAY_CHANGE),
        in_present_api: extract(columns::MS_IN_PRESENT_API),
        render_present: extract(columns::MS_RENDER_PRESENT_LATENCY),
        until_displayed: extract(columns::MS_UNTIL_DISPLAYED),
        render_queue: extract(columns::RENDER_QUEUE_DEPTH),
        pc_latency: extract(columns::MS_PC_LATENCY),
    }
}

fn build_cpu_report(log: &FrameLog, capabilities: &SchemaCapabilities) -> CpuReport {
    let extract = |column| MetricSeries::from_samples(column_series(log, column));

    let cores: Vec<CoreSeries> = capabilities
        .core_map
        .iter()
        .map(|(display_index, _)| CoreSeries {
            display_index,
            samples: core_series(log, &capabilities.core_map, display_index),
        })
        .collect();

    let mut loads: Vec<CoreLoad> = cores
        .iter()
        .map(|core| CoreLoad {
            display_index: core.display_index,
            avg_utilization: mean(&core.samples),
        })
        .collect();
    loads.sort_by(|a, b| {
        b.avg_utilization
            .partial_cmp(&a.avg_utilization)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    CpuReport {
        frequency: extract(columns::CPU_CLOCK),
        utilization: extract(columns::CPU_UTIL),
        package_temp: extract(columns::CPU_PACKAGE_TEMP),
        package_power: extract(columns::CPU_PACKAGE_POWER),
        tdp: extract(columns::CPU_TDP),
        busiest_core: loads.first().copied(),
        idlest_core: loads.last().copied(),
        cores,
    }
}

/// Which GPU's column family to read.
enum GpuSlot {
    Primary,
    Secondary,
}

fn build_gpu_report(log: &FrameLog, slot: GpuSlot) -> GpuReport {
    let (clock, mem_clock, util, temp) = match slot {
        GpuSlot::Primary => (
            columns::GPU0_CLOCK,
            columns::GPU0_MEM_CLOCK,
            columns::GPU0_UTIL,
            columns::GPU0_TEMP,
        ),
        GpuSlot::Secondary => (
            columns::GPU1_CLOCK,
            columns::GPU1_MEM_CLOCK,
            columns::GPU1_UTIL,
            columns::GPU1_TEMP,
        ),
    };
    GpuReport {
        clock: MetricSeries::from_samples(column_series(log, clock)),
        memory_clock: MetricSeries::from_samples(column_series(log, mem_clock)),
        utilization: MetricSeries::from_samples(column_series(log, util)),
        temperature: MetricSeries::from_samples(column_series(log, temp)),
    }
}

fn build_power_report(
    log: &FrameLog,
    capabilities: &SchemaCapabilities,
    avg_fps: f64,
) -> PowerReport {
    let extract = |column| MetricSeries::from_samples(column_series(log, column));

    let cpu = extract(columns::CPU_PACKAGE_POWER);
    let gpu = MetricSeries::from_samples(chain_series(
        log,
        &[columns::NV_POWER_API, columns::AMD_POWER_API],
    ));
    let gpu_vendor = if !column_series(log, columns::NV_POWER_API).is_empty() {
        GpuPowerVendor::Nvidia
    } else if !column_series(log, columns::AMD_POWER_API).is_empty() {
        GpuPowerVendor::Amd
    } else {
        GpuPowerVendor::Unknown
    };

    let total_power = cpu.stats.avg + gpu.stats.avg;
    let perf_per_watt = if total_power > 0.0 && total_power.is_finite() {
        let ppw = avg_fps / total_power;
        if ppw.is_finite() {
            ppw
        } else {
            0.0
        }
    } else {
        0.0
    };

    PowerReport {
        cpu,
        gpu,
        gpu_vendor,
        gpu_only_api: extract(columns::GPU_ONLY_POWER_API),
        pcat_total: capabilities
            .has_hardware_power_meter
            .then(|| extract(columns::PCAT_POWER_TOTAL)),
        usbc: capabilities
            .has_usbc_power
            .then(|| extract(columns::USBC_POWER_API)),
        total_power,
        perf_per_watt,
        perf_per_watt_api: extract(columns::PERF_PER_WATT_API),
        perf_per_watt_gpu_api: extract(columns::PERF_PER_WATT_GPU_API),
        perf_per_watt_pcat: capabilities
            .has_hardware_power_meter
            .then(|| extract(columns::PERF_PER_WATT_PCAT)),
        perf_per_watt_usbc: capabilities
            .has_usbc_power
            .then(|| extract(columns::PERF_PER_WATT_USBC)),
    }
}

fn build_metadata(log: &FrameLog, total_frames: usize) -> RunMetadata {
    let first = log.first_record();
    let text_or = |column: &str, default: &str| {
        first
            .and_then(|record| record.text(column))
            .unwrap_or(default)
            .to_string()
    };

    let dropped_frames = log
        .records()
        .iter()
        .filter(|record| match record.cell(columns::DROPPED) {
            Some(CellValue::Number(n)) => *n == 1.0,
            Some(CellValue::Text(s)) => s == "1",
            _ => false,
        })
        .count();

    RunMetadata {
        application: text_or(columns::APPLICATION, UNKNOWN),
        gpu: text_or(columns::GPU_NAME, UNKNOWN),
        cpu: text_or(columns::CPU_NAME, UNKNOWN),
        resolution: text_or(columns::RESOLUTION, "N/A"),
        total_frames,
        dropped_frames,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze_csv(csv: &str) -> AnalysisResult {
        analyze(csv).expect("analysis should succeed")
    }

    #[test]
    fn fps_from_frame_time() {
        let result = analyze_csv("MsBetweenPresents\n16.667\n");
        assert!((result.fps.samples[0] - 60.0).abs() < 0.01);
    }

    #[test]
    fn zero_and_absent_frame_times_contribute_no_fps() {
        let result = analyze_csv("MsBetweenPresents\n10.0\n0\nNA\n20.0\n");
        assert_eq!(result.fps.samples, vec![100.0, 50.0]);
        assert_eq!(result.fps.avg, 75.0);
        assert_eq!(result.fps.min, 50.0);
        assert_eq!(result.fps.max, 100.0);
    }

    #[test]
    fn no_usable_fps_samples_is_an_error() {
        let err = analyze("MsBetweenPresents\nNA\n0\n").unwrap_err();
        assert!(matches!(err, TelemetryError::NoUsableSamples(_)));
    }

    #[test]
    fn missing_frame_time_column_is_an_error() {
        let err = analyze("CPUUtil(%)\n50.0\n").unwrap_err();
        assert!(matches!(err, TelemetryError::NoUsableSamples(_)));
    }

    #[test]
    fn perf_per_watt_guards_zero_power() {
        let result = analyze_csv("MsBetweenPresents\n10.0\n");
        assert_eq!(result.power.total_power, 0.0);
        assert_eq!(result.power.perf_per_watt, 0.0);
    }

    #[test]
    fn perf_per_watt_from_cpu_and_gpu_averages() {
        let csv = "MsBetweenPresents,CPU Package Power(W),NV Pwr(W) (API)\n10.0,40.0,160.0\n";
        let result = analyze_csv(csv);
        assert_eq!(result.power.total_power, 200.0);
        assert_eq!(result.power.perf_per_watt, 0.5);
        assert_eq!(result.power.gpu_vendor, GpuPowerVendor::Nvidia);
    }

    #[test]
    fn vendor_fallback_prefers_nvidia_per_record() {
        let csv = "MsBetweenPresents,NV Pwr(W) (API),AMDPwr(W) (API)\n10.0,250.0,180.0\n10.0,NA,180.0\n";
        let result = analyze_csv(csv);
        assert_eq!(result.power.gpu.samples, vec![250.0, 180.0]);
    }

    #[test]
    fn amd_only_log_reports_amd_vendor() {
        let csv = "MsBetweenPresents,AMDPwr(W) (API)\n10.0,180.0\n";
        let result = analyze_csv(csv);
        assert_eq!(result.power.gpu_vendor, GpuPowerVendor::Amd);
        assert_eq!(result.power.gpu.samples, vec![180.0]);
    }

    #[test]
    fn dropped_frames_counted_from_indicator() {
        let csv = "MsBetweenPresents,Dropped\n10.0,1\n10.0,0\n10.0,NA\n10.0,1\n";
        let result = analyze_csv(csv);
        assert_eq!(result.metadata.dropped_frames, 2);
    }

    #[test]
    fn metadata_from_first_record_with_placeholders() {
        let csv = "MsBetweenPresents,Application\n10.0,Quake\n10.0,Doom\n";
        let result = analyze_csv(csv);
        assert_eq!(result.metadata.application, "Quake");
        assert_eq!(result.metadata.gpu, "Unknown");
        assert_eq!(result.metadata.resolution, "N/A");
    }

    #[test]
    fn secondary_gpu_report_only_when_sampled() {
        let with = analyze_csv("MsBetweenPresents,GPU1Util(%)\n10.0,45.0\n");
        assert!(with.gpu1.is_some());

        let without = analyze_csv("MsBetweenPresents,GPU1Util(%)\n10.0,NA\n");
        assert!(without.gpu1.is_none());
    }

    #[test]
    fn busiest_and_idlest_cores_by_average() {
        let csv = "MsBetweenPresents,CPUCoreUtil%[0],CPUCoreUtil%[3]\n10.0,20.0,80.0\n10.0,40.0,90.0\n";
        let result = analyze_csv(csv);

        let busiest = result.cpu.busiest_core.expect("has cores");
        let idlest = result.cpu.idlest_core.expect("has cores");
        // Real core 3 is display index 1.
        assert_eq!(busiest.display_index, 1);
        assert_eq!(busiest.avg_utilization, 85.0);
        assert_eq!(idlest.display_index, 0);
        assert_eq!(idlest.avg_utilization, 30.0);
    }

    #[test]
    fn no_cores_means_no_core_loads() {
        let result = analyze_csv("MsBetweenPresents\n10.0\n");
        assert!(result.cpu.cores.is_empty());
        assert!(result.cpu.busiest_core.is_none());
        assert!(result.cpu.idlest_core.is_none());
    }

    #[test]
    fn between_presents_stage_keeps_zero_frame_time_excludes() {
        let csv = "MsBetweenPresents\n10.0\n0\n20.0\n";
        let result = analyze_csv(csv);
        // Latency stage keeps the zero; the frame-time report drops it.
        assert_eq!(result.latency.between_presents.samples, vec![10.0, 0.0, 20.0]);
        assert_eq!(result.frame_time.samples, vec![10.0, 20.0]);
    }

    #[test]
    fn result_serializes_to_json() {
        let result = analyze_csv("MsBetweenPresents\n10.0\n20.0\n");
        let json = serde_json::to_string(&result).expect("serializable");
        assert!(json.contains("\"avg\":75.0"));
    }
}
