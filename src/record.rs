//! Frame record structures.
//!
//! This module provides the core record types for one captured frame:
//! - [`FrameRecord`] — one frame's observations, column name → [`CellValue`]
//! - [`CellValue`] — a typed cell: finite number, categorical text, or absent
//!
//! Records are built once by the parser and never mutated afterwards. Cells
//! are stored in header order using `IndexMap`, so iterating a record yields
//! columns in the order the capture tool wrote them.
//!
//! # Examples
//!
//! ```
//! use framelens::{CellValue, FrameRecord};
//!
//! let mut record = FrameRecord::new();
//! record.insert("MsBetweenPresents".to_string(), CellValue::Number(16.7));
//! record.insert("Application".to_string(), CellValue::Text("Quake".into()));
//! record.insert("MsPCLatency".to_string(), CellValue::Absent);
//!
//! assert_eq!(record.number("MsBetweenPresents"), Some(16.7));
//! assert_eq!(record.text("Application"), Some("Quake"));
//! assert_eq!(record.number("MsPCLatency"), None);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One observed cell of a frame record.
///
/// Zero is a valid [`CellValue::Number`]; a metric that is legitimately zero
/// (a render-queue depth of zero, a dropped-frame count of zero) is distinct
/// from a missing sample, which is [`CellValue::Absent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A numeric observation. Always finite; the parser maps non-finite
    /// parses to [`CellValue::Absent`].
    Number(f64),
    /// Categorical text (application name, GPU model, resolution, ...).
    Text(String),
    /// No observation for this column on this frame (`NA` or empty field).
    Absent,
}

impl CellValue {
    /// The numeric value, if this cell is a finite number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// The text value, if this cell is categorical.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether this cell carries no observation.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }
}

/// One frame's observations, keyed by column name in header order.
///
/// Frame order equals input line order, which is temporal order; a
/// [`FrameRecord`]'s position in its log is the frame index used by every
/// derived timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    cells: IndexMap<String, CellValue>,
}

impl FrameRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        FrameRecord {
            cells: IndexMap::new(),
        }
    }

    /// Create an empty record with capacity for `n` columns.
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        FrameRecord {
            cells: IndexMap::with_capacity(n),
        }
    }

    /// Set a cell. Later inserts for the same column overwrite in place.
    pub fn insert(&mut self, column: String, value: CellValue) {
        self.cells.insert(column, value);
    }

    /// Get a cell by column name.
    #[must_use]
    pub fn cell(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// The finite numeric value of a column, if present.
    ///
    /// Missing columns, absent cells, and categorical text all yield `None`;
    /// a finite zero yields `Some(0.0)`.
    #[must_use]
    pub fn number(&self, column: &str) -> Option<f64> {
        self.cells.get(column).and_then(CellValue::as_number)
    }

    /// The text value of a categorical column, if present.
    #[must_use]
    pub fn text(&self, column: &str) -> Option<&str> {
        self.cells.get(column).and_then(CellValue::as_text)
    }

    /// Number of cells in this record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the record has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over cells in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }
}
