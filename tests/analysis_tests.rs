//! Integration tests driving the public analysis API on whole CSV logs.

mod common;

use common::{csv, synthetic_log};
use framelens::{analyze, analyze_reader, GpuPowerVendor, TelemetryError, STABILITY_WINDOW};
use std::fs::File;
use std::io::Write;

#[test]
fn analyzes_realistic_capture_fixture() {
    let text = std::fs::read_to_string("tests/data/sample_run.csv")
        .expect("Could not open test fixture");
    let result = analyze(&text).expect("Failed to analyze fixture");

    assert_eq!(result.metadata.application, "Cyberpunk 2077");
    assert_eq!(result.metadata.gpu, "GeForce RTX 4080");
    assert_eq!(result.metadata.cpu, "AMD Ryzen 7 7800X3D");
    assert_eq!(result.metadata.resolution, "2560x1440");
    assert_eq!(result.metadata.total_frames, 64);
    assert_eq!(result.metadata.dropped_frames, 1);

    // Frame times are 14.5-19.5 ms, so FPS sits between ~51 and ~69.
    assert!(result.fps.avg > 50.0 && result.fps.avg < 70.0);
    assert!(result.fps.min <= result.fps.avg && result.fps.avg <= result.fps.max);
    assert!(result.fps.low_1 <= result.fps.p95);

    // Core 1 is declared but never populated; cores 0, 2, 3 are active.
    assert_eq!(result.capabilities.core_map.real_indices(), &[0, 2, 3]);
    assert_eq!(result.cpu.cores.len(), 3);
    for core in &result.cpu.cores {
        assert_eq!(core.samples.len(), 64);
    }

    // Single-GPU NVIDIA log with a PCAT meter attached.
    assert!(result.gpu1.is_none());
    assert_eq!(result.power.gpu_vendor, GpuPowerVendor::Nvidia);
    assert!(result.capabilities.has_hardware_power_meter);
    assert!(result.power.pcat_total.is_some());
    assert!(!result.capabilities.has_usbc_power);
    assert!(result.power.usbc.is_none());

    assert!(result.power.total_power > 0.0);
    assert!(result.power.perf_per_watt > 0.0);
}

#[test]
fn four_row_csv_end_to_end() {
    let text = csv("MsBetweenPresents", &["10", "20", "NA"]);
    let result = analyze(&text).expect("Failed to analyze");

    assert_eq!(result.fps.samples, vec![100.0, 50.0]);
    assert_eq!(result.fps.avg, 75.0);
    assert_eq!(result.fps.min, 50.0);
    assert_eq!(result.fps.max, 100.0);
    assert_eq!(result.metadata.total_frames, 2);
}

#[test]
fn stability_series_has_len_minus_window_points() {
    let text = synthetic_log(100);
    let result = analyze(&text).expect("Failed to analyze");

    assert_eq!(result.frame_time.samples.len(), 100);
    assert_eq!(result.frame_time.stability.len(), 100 - STABILITY_WINDOW);
}

#[test]
fn run_shorter_than_window_has_empty_stability() {
    let text = synthetic_log(30);
    let result = analyze(&text).expect("Failed to analyze");
    assert!(result.frame_time.stability.is_empty());
}

#[test]
fn histogram_covers_every_fps_sample() {
    let text = synthetic_log(200);
    let result = analyze(&text).expect("Failed to analyze");
    assert_eq!(result.fps.histogram.total(), result.fps.samples.len());
}

#[test]
fn empty_file_reports_malformed_input() {
    let err = analyze("").unwrap_err();
    assert!(matches!(err, TelemetryError::MalformedInput(_)));
}

#[test]
fn header_without_data_reports_malformed_input() {
    let err = analyze("MsBetweenPresents,CPUUtil(%)\n").unwrap_err();
    assert!(matches!(err, TelemetryError::MalformedInput(_)));
}

#[test]
fn all_invalid_frame_times_report_no_usable_samples() {
    let text = csv("MsBetweenPresents,CPUUtil(%)", &["NA,50.0", "0,60.0"]);
    let err = analyze(&text).unwrap_err();
    assert!(matches!(err, TelemetryError::NoUsableSamples(_)));
}

#[test]
fn analyze_reader_reads_from_a_file() {
    let dir = tempfile::tempdir().expect("Could not create temp dir");
    let path = dir.path().join("run.csv");
    let mut file = File::create(&path).expect("Could not create temp file");
    file.write_all(synthetic_log(10).as_bytes())
        .expect("Could not write temp file");

    let result =
        analyze_reader(File::open(&path).expect("Could not reopen")).expect("Failed to analyze");
    assert_eq!(result.metadata.application, "Quake");
    assert_eq!(result.fps.samples.len(), 10);
}

#[test]
fn latency_stages_summarized_independently() {
    let text = csv(
        "MsBetweenPresents,MsPCLatency,Render Queue Depth",
        &["10.0,30.0,2", "20.0,40.0,0", "10.0,NA,1"],
    );
    let result = analyze(&text).expect("Failed to analyze");

    assert_eq!(result.latency.pc_latency.samples, vec![30.0, 40.0]);
    assert_eq!(result.latency.pc_latency.stats.avg, 35.0);
    // Queue depth of zero is a real observation.
    assert_eq!(result.latency.render_queue.samples, vec![2.0, 0.0, 1.0]);
    assert_eq!(result.latency.render_queue.stats.min, 0.0);
}

#[test]
fn absent_optional_families_fall_back_quietly() {
    let text = csv("MsBetweenPresents", &["16.7", "16.9"]);
    let result = analyze(&text).expect("Failed to analyze");

    assert_eq!(result.cpu.utilization.stats.avg, 0.0);
    assert!(result.cpu.utilization.samples.is_empty());
    assert_eq!(result.gpu0.temperature.stats.max, 0.0);
    assert!(result.gpu1.is_none());
    assert!(result.power.pcat_total.is_none());
    assert_eq!(result.power.perf_per_watt, 0.0);
}

#[test]
fn reanalysis_is_deterministic() {
    let text = synthetic_log(80);
    let first = analyze(&text).expect("Failed to analyze");
    let second = analyze(&text).expect("Failed to analyze");
    assert_eq!(first, second);
}

#[test]
fn result_round_trips_through_json() {
    let text = synthetic_log(50);
    let result = analyze(&text).expect("Failed to analyze");

    let json = serde_json::to_string(&result).expect("Failed to serialize");
    let back: framelens::AnalysisResult =
        serde_json::from_str(&json).expect("Failed to deserialize");
    assert_eq!(result, back);
}
