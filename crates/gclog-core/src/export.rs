//! Export — writes [`MemoryEvent`]s as JSON lines.
//!
//! One compact object per line, in the order given, each followed by a
//! single `\n`. Absent sizes and labels are written as `null`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::types::MemoryEvent;

/// Write `events` to `sink`. Returns the number of records written.
pub fn write_jsonl<W: Write>(events: &[MemoryEvent], mut sink: W) -> Result<usize> {
    for event in events {
        serde_json::to_writer(&mut sink, event)?;
        sink.write_all(b"\n")?;
    }
    sink.flush()?;
    Ok(events.len())
}

/// Create (or truncate) the file at `path` and write `events` to it.
pub fn export_to_path(events: &[MemoryEvent], path: &Path) -> Result<usize> {
    let file = File::create(path)?;
    let written = write_jsonl(events, BufWriter::new(file))?;
    debug!(path = %path.display(), records = written, "export finished");
    Ok(written)
}
