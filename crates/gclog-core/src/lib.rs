//! gclog-core — GC log memory extraction library.
//!
//! This crate exposes the two pipeline layers as public modules, plus the
//! shared types, path checks and configuration used by the binary.
//!
//! # Architecture
//!
//! ```text
//! .log lines ──► Extractor ──► MemoryEvent pairs ──► Export ──► .json lines
//! ```
//!
//! Everything runs on the calling thread in one pass. [`convert`] wires the
//! layers together for the common file-to-file case.

pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod paths;
pub mod types;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::info;

pub use error::{Error, Result};
pub use extractor::{extract, extract_reader, Extractor};
pub use types::{ExtractStats, MemoryEvent, Phase, Region, RollingContext};

/// Outcome of a [`convert`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: ExtractStats,
}

/// Extract events from the log at `input` and write them to `output`.
///
/// Both paths are validated before anything is read or written, so a bad
/// path never leaves an output file behind.
pub fn convert(input: &Path, output: &Path) -> Result<ConvertSummary> {
    paths::validate_input(input)?;
    paths::validate_output(output)?;

    let reader = BufReader::new(File::open(input)?);
    let (events, stats) = extract_reader(reader)?;
    export::export_to_path(&events, output)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        lines = stats.lines,
        summaries = stats.triggers,
        records = stats.events,
        "conversion complete"
    );

    Ok(ConvertSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        stats,
    })
}
