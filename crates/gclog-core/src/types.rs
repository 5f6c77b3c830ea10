//! Core types for gclog-core.
//!
//! This module defines the data shared by the extractor and the export layer:
//! the emitted [`MemoryEvent`], its [`Phase`], the tracked memory [`Region`]s
//! and the [`RollingContext`] carried across a scan.

use serde::Serialize;

/// One side of a collection pause, as written to the output file.
///
/// Two events are produced for every Eden summary line. Field order here is
/// the key order of the serialized JSON object, so do not reorder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryEvent {
    /// Timestamp token active when the summary line was seen.
    pub timestamp: Option<String>,
    /// Eden occupancy in MB.
    pub eden_size: Option<f64>,
    /// Survivor space occupancy in MB (the log reports KB).
    pub survivors_size: Option<f64>,
    /// Whole heap occupancy in MB.
    pub heap_size: Option<f64>,
    /// Pause label active when the summary line was seen,
    /// e.g. `GC pause (G1 Evacuation Pause)`.
    #[serde(rename = "GC_name")]
    pub gc_name: Option<String>,
    pub phase: Phase,
}

impl MemoryEvent {
    /// Size recorded for `region`, if its pattern matched.
    pub fn size_of(&self, region: Region) -> Option<f64> {
        match region {
            Region::Eden => self.eden_size,
            Region::Survivors => self.survivors_size,
            Region::Heap => self.heap_size,
        }
    }

    pub(crate) fn set_size(&mut self, region: Region, value: Option<f64>) {
        match region {
            Region::Eden => self.eden_size = value,
            Region::Survivors => self.survivors_size = value,
            Region::Heap => self.heap_size = value,
        }
    }

    /// An event for `phase` with no sizes filled in yet.
    pub(crate) fn empty(ctx: &RollingContext, phase: Phase) -> Self {
        Self {
            timestamp: ctx.last_timestamp.clone(),
            eden_size: None,
            survivors_size: None,
            heap_size: None,
            gc_name: ctx.last_gc_name.clone(),
            phase,
        }
    }
}

/// Which side of a pause a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Before,
    After,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Before => write!(f, "before"),
            Phase::After => write!(f, "after"),
        }
    }
}

/// Memory region reported on an Eden summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Eden,
    Survivors,
    Heap,
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Eden => write!(f, "eden"),
            Region::Survivors => write!(f, "survivors"),
            Region::Heap => write!(f, "heap"),
        }
    }
}

/// Scan state carried from line to line.
///
/// Values are only ever overwritten, never cleared: a line without a
/// timestamp keeps the previous one alive for later summary lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollingContext {
    pub last_timestamp: Option<String>,
    pub last_gc_name: Option<String>,
}

/// Counters gathered while extracting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Lines seen, summary or not.
    pub lines: usize,
    /// Eden summary lines.
    pub triggers: usize,
    /// Records emitted; always `2 * triggers`.
    pub events: usize,
}
