//! Schema probing for heterogeneous capture logs.
//!
//! Capture tools write different column sets depending on hardware and tool
//! configuration: per-core CPU utilization columns for however many cores the
//! machine has, a second GPU's sensors, a PCAT hardware power meter, USB-C
//! power delivery. [`SchemaCapabilities::probe`] inspects the header and the
//! record contents once per run and fixes the answers for the lifetime of
//! the analysis.
//!
//! Presence is sample-based: a column that exists in the header but never
//! contributes a single finite value is treated as absent, so a capability
//! that logged but never measured anything is not reported.
//!
//! # Examples
//!
//! ```
//! use framelens::parser::parse_log;
//! use framelens::schema::SchemaCapabilities;
//!
//! // Core 1 is missing from the header; core 2 follows core 0 directly.
//! let csv = "MsBetweenPresents,CPUCoreUtil%[0],CPUCoreUtil%[2]\n16.7,12.5,88.0\n";
//! let log = parse_log(csv)?;
//! let caps = SchemaCapabilities::probe(&log);
//!
//! assert_eq!(caps.core_map.real_indices(), &[0, 2]);
//! assert_eq!(caps.core_map.real_index(1), Some(2));
//! assert!(!caps.has_secondary_gpu);
//! # Ok::<(), framelens::TelemetryError>(())
//! ```

use crate::columns;
use crate::parser::FrameLog;
use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Bijection between compact display core indices and real CSV core indices.
///
/// Logging tools emit per-core columns for the physical core numbering,
/// which may have holes (parked cores, columns declared but never
/// populated). Display indices are the consecutive positions 0..k-1 that
/// charts and summaries use; each resolves back to exactly one real CSV
/// index, and that resolution is the only join path between a display
/// position and its source column. The mapping is fixed for the whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreMap {
    /// Active real core indices, ascending. Position in this list is the
    /// display index.
    active: SmallVec<[usize; 16]>,
}

impl CoreMap {
    /// Build a map from active real core indices, which must already be in
    /// ascending discovery order.
    #[must_use]
    pub fn from_active(active: SmallVec<[usize; 16]>) -> Self {
        CoreMap { active }
    }

    /// Number of active cores.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no active cores were detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Resolve a display index back to its real CSV core index.
    #[must_use]
    pub fn real_index(&self, display: usize) -> Option<usize> {
        self.active.get(display).copied()
    }

    /// The active real core indices in display order.
    #[must_use]
    pub fn real_indices(&self) -> &[usize] {
        &self.active
    }

    /// Iterate over `(display_index, real_index)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.active.iter().copied().enumerate()
    }
}

/// Which optional metric families this particular log carries.
///
/// Computed once per run by [`SchemaCapabilities::probe`] and never
/// recomputed from partial data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaCapabilities {
    /// Active CPU cores and their display remapping.
    pub core_map: CoreMap,
    /// A second GPU's utilization column has at least one finite sample.
    pub has_secondary_gpu: bool,
    /// The PCAT hardware power meter logged at least one finite total.
    pub has_hardware_power_meter: bool,
    /// USB-C power delivery logged at least one finite reading.
    pub has_usbc_power: bool,
}

impl SchemaCapabilities {
    /// Probe a parsed log for its optional metric families.
    ///
    /// Per-core columns are probed for real indices 0 up to
    /// [`columns::MAX_PROBED_CORES`]; a core is active iff its column exists
    /// in the header and contributes at least one finite sample (zero
    /// counts, absent does not). Inactive and absent cores are silently
    /// excluded.
    #[must_use]
    pub fn probe(log: &FrameLog) -> Self {
        let mut active = SmallVec::new();
        for real in 0..columns::MAX_PROBED_CORES {
            let column = columns::core_util_column(real);
            if log.has_column(&column) && column_has_samples(log, &column) {
                active.push(real);
            }
        }
        let core_map = CoreMap::from_active(active);

        let caps = SchemaCapabilities {
            has_secondary_gpu: column_has_samples(log, columns::GPU1_UTIL),
            has_hardware_power_meter: column_has_samples(log, columns::PCAT_POWER_TOTAL),
            has_usbc_power: column_has_samples(log, columns::USBC_POWER_API),
            core_map,
        };

        debug!(
            "probed schema: {} active cores, secondary_gpu={}, pcat={}, usbc={}",
            caps.core_map.len(),
            caps.has_secondary_gpu,
            caps.has_hardware_power_meter,
            caps.has_usbc_power
        );

        caps
    }
}

/// Whether a column contributes at least one finite sample across the log.
fn column_has_samples(log: &FrameLog, column: &str) -> bool {
    log.records()
        .iter()
        .any(|record| record.number(column).is_some())
}
