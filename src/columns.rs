//! Known telemetry column names.
//!
//! Capture tools emit a fixed vocabulary of column headers; this module is
//! the single place that vocabulary lives. Column names are exact,
//! case-sensitive strings, matched verbatim against the log header.
//!
//! A small set of columns is categorical (machine names, resolution, API
//! runtime) and must never be numerically coerced; [`is_categorical`]
//! identifies them at parse time so the rest of the crate only ever sees
//! typed cells.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Milliseconds between two successive presented frames. The reciprocal
/// (x1000) is the per-frame FPS sample.
pub const MS_BETWEEN_PRESENTS: &str = "MsBetweenPresents";

/// Milliseconds between simulation starts of successive frames.
pub const MS_BETWEEN_SIMULATION_START: &str = "MsBetweenSimulationStart";

/// Milliseconds between display changes (scanout-to-scanout).
pub const MS_BETWEEN_DISPLAY_CHANGE: &str = "MsBetweenDisplayChange";

/// Milliseconds spent inside the present API call.
pub const MS_IN_PRESENT_API: &str = "MsInPresentAPI";

/// Milliseconds from render submit to present.
pub const MS_RENDER_PRESENT_LATENCY: &str = "MsRenderPresentLatency";

/// Milliseconds from present until the frame was displayed.
pub const MS_UNTIL_DISPLAYED: &str = "MsUntilDisplayed";

/// Render queue depth in frames.
pub const RENDER_QUEUE_DEPTH: &str = "Render Queue Depth";

/// End-to-end PC latency (simulation input to displayed frame).
pub const MS_PC_LATENCY: &str = "MsPCLatency";

/// Dropped-frame indicator (1 when the frame was dropped).
pub const DROPPED: &str = "Dropped";

/// CPU package clock in MHz.
pub const CPU_CLOCK: &str = "CPUClk(MHz)";

/// Whole-package CPU utilization percentage.
pub const CPU_UTIL: &str = "CPUUtil(%)";

/// CPU package temperature in Celsius.
pub const CPU_PACKAGE_TEMP: &str = "CPU Package Temp(C)";

/// CPU package power draw in watts.
pub const CPU_PACKAGE_POWER: &str = "CPU Package Power(W)";

/// CPU TDP limit in watts.
pub const CPU_TDP: &str = "CPU TDP (W)";

/// Primary GPU core clock in MHz.
pub const GPU0_CLOCK: &str = "GPU0Clk(MHz)";

/// Primary GPU memory clock in MHz.
pub const GPU0_MEM_CLOCK: &str = "GPU0MemClk(MHz)";

/// Primary GPU utilization percentage.
pub const GPU0_UTIL: &str = "GPU0Util(%)";

/// Primary GPU temperature in Celsius.
pub const GPU0_TEMP: &str = "GPU0Temp(C)";

/// Secondary GPU core clock in MHz.
pub const GPU1_CLOCK: &str = "GPU1Clk(MHz)";

/// Secondary GPU memory clock in MHz.
pub const GPU1_MEM_CLOCK: &str = "GPU1MemClk(MHz)";

/// Secondary GPU utilization percentage. Presence of finite samples here is
/// what marks a log as dual-GPU.
pub const GPU1_UTIL: &str = "GPU1Util(%)";

/// Secondary GPU temperature in Celsius.
pub const GPU1_TEMP: &str = "GPU1Temp(C)";

/// Total system power from the PCAT hardware power meter, in watts.
pub const PCAT_POWER_TOTAL: &str = "PCAT Power Total(W)";

/// NVIDIA API-reported GPU board power in watts.
pub const NV_POWER_API: &str = "NV Pwr(W) (API)";

/// AMD API-reported GPU board power in watts.
pub const AMD_POWER_API: &str = "AMDPwr(W) (API)";

/// API-reported GPU-chip-only power in watts.
pub const GPU_ONLY_POWER_API: &str = "GPUOnlyPwr(W) (API)";

/// USB-C power-delivery draw in watts (laptops charging over USB-C).
pub const USBC_POWER_API: &str = "NV-Total-USBCPwr(W) (API)";

/// Logged frames-per-joule over total API-reported power.
pub const PERF_PER_WATT_API: &str = "Perf/W Total(F/J) (API)";

/// Logged frames-per-joule over GPU-only API-reported power.
pub const PERF_PER_WATT_GPU_API: &str = "Perf/W GPUOnly(F/J) (API)";

/// Logged frames-per-joule over PCAT-measured total power.
pub const PERF_PER_WATT_PCAT: &str = "Perf/W Total(F/J) (PCAT)";

/// Logged frames-per-joule over USB-C delivered power.
pub const PERF_PER_WATT_USBC: &str = "Perf/W Total-USBC(F/J) (API)";

/// Application (game) name. Categorical.
pub const APPLICATION: &str = "Application";

/// GPU model name. Categorical.
pub const GPU_NAME: &str = "GPU";

/// CPU model name. Categorical.
pub const CPU_NAME: &str = "CPU";

/// Render resolution, e.g. `2560x1440`. Categorical.
pub const RESOLUTION: &str = "Resolution";

/// Graphics API runtime, e.g. `DXGI` or `Vulkan`. Categorical.
pub const RUNTIME: &str = "Runtime";

/// Upper bound (exclusive) on probed per-core utilization column indices.
pub const MAX_PROBED_CORES: usize = 64;

lazy_static! {
    static ref CATEGORICAL_COLUMNS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert(RESOLUTION);
        set.insert(APPLICATION);
        set.insert(GPU_NAME);
        set.insert(CPU_NAME);
        set.insert(RUNTIME);
        set
    };
}

/// Whether a column holds categorical text that must never be numerically
/// coerced.
///
/// # Examples
///
/// ```
/// use framelens::columns;
///
/// assert!(columns::is_categorical("Application"));
/// assert!(!columns::is_categorical("MsBetweenPresents"));
/// ```
#[must_use]
pub fn is_categorical(name: &str) -> bool {
    CATEGORICAL_COLUMNS.contains(name)
}

/// Column name for the utilization of one CPU core, by real CSV core index.
///
/// # Examples
///
/// ```
/// use framelens::columns;
///
/// assert_eq!(columns::core_util_column(3), "CPUCoreUtil%[3]");
/// ```
#[must_use]
pub fn core_util_column(index: usize) -> String {
    format!("CPUCoreUtil%[{index}]")
}
