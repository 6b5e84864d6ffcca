//! Parsing telemetry CSV text into typed frame records.
//!
//! This module provides [`parse_log`], which turns the raw text of a capture
//! log into a [`FrameLog`]: the trimmed header names plus one immutable
//! [`FrameRecord`] per data line.
//!
//! The input format is comma-separated UTF-8 text whose first non-blank line
//! is the header. Data cells are matched to headers positionally, trimmed,
//! and coerced:
//!
//! - Categorical columns ([`columns::is_categorical`]) are stored as text,
//!   or [`CellValue::Absent`] when empty. They are never numerically coerced.
//! - Every other cell becomes [`CellValue::Number`] when it is non-empty,
//!   not the literal `NA`, and parses as a finite float. Empty cells, `NA`,
//!   and non-finite parses become [`CellValue::Absent`]; unparseable text is
//!   kept as [`CellValue::Text`] and ignored by every numeric filter.
//!
//! # Examples
//!
//! ```
//! use framelens::parser::parse_log;
//!
//! let csv = "MsBetweenPresents,Application\n16.7,Quake\nNA,Quake\n";
//! let log = parse_log(csv)?;
//!
//! assert_eq!(log.len(), 2);
//! assert_eq!(log.records()[0].number("MsBetweenPresents"), Some(16.7));
//! assert!(log.records()[1].cell("MsBetweenPresents").unwrap().is_absent());
//! # Ok::<(), framelens::TelemetryError>(())
//! ```

use crate::columns;
use crate::error::{Result, TelemetryError};
use crate::record::{CellValue, FrameRecord};
use log::debug;
use std::io::Read;

/// Missing-value sentinel written by capture tools.
const NA_SENTINEL: &str = "NA";

/// A parsed telemetry log: header names plus the frame records in capture
/// order.
///
/// Record order equals input line order, which is temporal order. The log is
/// fully materialized before any statistic is computed; there is no
/// streaming path.
#[derive(Debug, Clone)]
pub struct FrameLog {
    headers: Vec<String>,
    records: Vec<FrameRecord>,
}

impl FrameLog {
    /// The trimmed header names, in file order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The parsed frame records, in capture order.
    #[must_use]
    pub fn records(&self) -> &[FrameRecord] {
        &self.records
    }

    /// Whether the header row contains a column with this exact name.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Number of frame records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first frame record. Run metadata (application, GPU, CPU,
    /// resolution) is read from here only.
    #[must_use]
    pub fn first_record(&self) -> Option<&FrameRecord> {
        self.records.first()
    }
}

/// Parse raw telemetry CSV text into a [`FrameLog`].
///
/// Blank lines are skipped anywhere in the file. The first non-blank line is
/// the header; every subsequent non-blank line produces exactly one record.
/// A data line with fewer cells than the header yields [`CellValue::Absent`]
/// for the missing trailing columns; extra trailing cells are ignored.
///
/// # Errors
///
/// Returns [`TelemetryError::MalformedInput`] when the text holds fewer than
/// two non-blank lines (no header plus data) or when no records were parsed.
pub fn parse_log(text: &str) -> Result<FrameLog> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();

    if lines.len() < 2 {
        return Err(TelemetryError::MalformedInput(
            "log must contain a header line and at least one data line".to_string(),
        ));
    }

    let headers: Vec<String> = lines[0].split(',').map(|h| h.trim().to_string()).collect();

    let mut records = Vec::with_capacity(lines.len() - 1);
    for line in &lines[1..] {
        let values: Vec<&str> = line.split(',').collect();
        let mut record = FrameRecord::with_capacity(headers.len());
        for (idx, header) in headers.iter().enumerate() {
            let raw = values.get(idx).map_or("", |v| v.trim());
            record.insert(header.clone(), coerce_cell(header, raw));
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(TelemetryError::MalformedInput(
            "log contains no data records".to_string(),
        ));
    }

    debug!(
        "parsed {} records across {} columns",
        records.len(),
        headers.len()
    );

    Ok(FrameLog { headers, records })
}

/// Parse a telemetry log from any reader.
///
/// Convenience wrapper over [`parse_log`] for callers that hold a file or
/// socket rather than a string.
///
/// # Errors
///
/// Returns [`TelemetryError::Io`] when the source cannot be read, or any
/// error [`parse_log`] reports.
pub fn parse_log_from_reader<R: Read>(mut reader: R) -> Result<FrameLog> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_log(&text)
}

/// Coerce one trimmed cell according to the column's kind.
fn coerce_cell(header: &str, raw: &str) -> CellValue {
    if columns::is_categorical(header) {
        if raw.is_empty() {
            CellValue::Absent
        } else {
            CellValue::Text(raw.to_string())
        }
    } else if raw.is_empty() || raw == NA_SENTINEL {
        CellValue::Absent
    } else {
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            Ok(_) => CellValue::Absent,
            Err(_) => CellValue::Text(raw.to_string()),
        }
    }
}
