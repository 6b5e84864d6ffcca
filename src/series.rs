//! Extraction of numeric series from parsed logs.
//!
//! A named numeric series is the flat list of one column's finite values in
//! frame order. The validity filter is uniform across the crate: a value is
//! kept iff it is a finite number. Zero is explicitly retained; a metric
//! that is legitimately zero (a render-queue depth of zero, a dropped-frame
//! count of zero) must not be treated as a missing sample.
//!
//! Per-core series are the one exception to the drop-invalid rule: they are
//! emitted gap-free, one value per record, with missing samples as 0.0, so
//! core-utilization timelines stay the same length as the frame timeline.

use crate::columns;
use crate::parser::FrameLog;
use crate::schema::CoreMap;

/// Extract one column as a validity-filtered series.
///
/// Missing columns and absent cells contribute nothing; the result may be
/// empty, which downstream statistics handle without error.
///
/// # Examples
///
/// ```
/// use framelens::parser::parse_log;
/// use framelens::series::column_series;
///
/// let log = parse_log("CPUUtil(%)\n50.0\nNA\n0.0\n")?;
/// assert_eq!(column_series(&log, "CPUUtil(%)"), vec![50.0, 0.0]);
/// # Ok::<(), framelens::TelemetryError>(())
/// ```
#[must_use]
pub fn column_series(log: &FrameLog, column: &str) -> Vec<f64> {
    log.records()
        .iter()
        .filter_map(|record| record.number(column))
        .collect()
}

/// Extract a series through a fallback chain of column names.
///
/// For each record, the first column in the chain with a finite value wins;
/// a finite zero in an earlier column wins over any later column. Records
/// where no chain column has a finite value contribute nothing.
///
/// Used for vendor-specific columns, e.g. preferring the NVIDIA power
/// reading per record and falling back to the AMD one.
#[must_use]
pub fn chain_series(log: &FrameLog, chain: &[&str]) -> Vec<f64> {
    log.records()
        .iter()
        .filter_map(|record| chain.iter().find_map(|column| record.number(column)))
        .collect()
}

/// Extract one active core's utilization timeline via the core remapping.
///
/// The display index resolves to the real CSV core index; missing or
/// non-numeric samples are included as 0.0 rather than dropped, so the
/// returned series always has exactly one value per record. An unknown
/// display index yields an empty series.
#[must_use]
pub fn core_series(log: &FrameLog, core_map: &CoreMap, display: usize) -> Vec<f64> {
    let Some(real) = core_map.real_index(display) else {
        return Vec::new();
    };
    let column = columns::core_util_column(real);
    log.records()
        .iter()
        .map(|record| record.number(&column).unwrap_or(0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_log;
    use crate::schema::SchemaCapabilities;

    #[test]
    fn column_series_keeps_zero_drops_absent() {
        let log = parse_log("A\n1.5\n0\nNA\n\n2.5\n").expect("valid log");
        assert_eq!(column_series(&log, "A"), vec![1.5, 0.0, 2.5]);
    }

    #[test]
    fn column_series_for_missing_column_is_empty() {
        let log = parse_log("A\n1.0\n").expect("valid log");
        assert!(column_series(&log, "B").is_empty());
    }

    #[test]
    fn chain_prefers_first_populated_column() {
        let csv = "NV Pwr(W) (API),AMDPwr(W) (API)\n250.0,NA\nNA,180.0\nNA,NA\n";
        let log = parse_log(csv).expect("valid log");
        let series = chain_series(&log, &["NV Pwr(W) (API)", "AMDPwr(W) (API)"]);
        assert_eq!(series, vec![250.0, 180.0]);
    }

    #[test]
    fn chain_finite_zero_wins_over_later_column() {
        let csv = "NV Pwr(W) (API),AMDPwr(W) (API)\n0,180.0\n";
        let log = parse_log(csv).expect("valid log");
        let series = chain_series(&log, &["NV Pwr(W) (API)", "AMDPwr(W) (API)"]);
        assert_eq!(series, vec![0.0]);
    }

    #[test]
    fn core_series_is_gap_free_and_record_length() {
        let csv = "CPUCoreUtil%[0],CPUCoreUtil%[2]\n10,30\nNA,40\n20,NA\n";
        let log = parse_log(csv).expect("valid log");
        let caps = SchemaCapabilities::probe(&log);

        // Display 0 -> real 0, display 1 -> real 2.
        assert_eq!(core_series(&log, &caps.core_map, 0), vec![10.0, 0.0, 20.0]);
        assert_eq!(core_series(&log, &caps.core_map, 1), vec![30.0, 40.0, 0.0]);
    }

    #[test]
    fn core_series_unknown_display_index_is_empty() {
        let csv = "CPUCoreUtil%[0]\n10\n";
        let log = parse_log(csv).expect("valid log");
        let caps = SchemaCapabilities::probe(&log);
        assert!(core_series(&log, &caps.core_map, 7).is_empty());
    }
}
