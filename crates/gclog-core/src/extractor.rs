//! Extractor — turns GC log lines into [`MemoryEvent`] pairs.
//!
//! Every line is checked, in order, for a timestamp token, a pause label and
//! the Eden summary prefix. The first two only update the
//! [`RollingContext`]; a summary line emits a `before` and an `after` event
//! stamped with whatever the context holds at that moment.
//!
//! Region sizes come from [`REGION_PATTERNS`], a table of
//! region → regex → unit conversion. Tracking another region means adding a
//! row there (and a [`Region`] variant), not touching the scan loop.

use std::io::BufRead;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::Result;
use crate::types::{ExtractStats, MemoryEvent, Phase, Region, RollingContext};

/// Prefix that marks an Eden summary line. Matched exactly, indentation
/// included.
pub const EDEN_PREFIX: &str = "   [Eden:";

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}\+\d{4})")
        .expect("static timestamp pattern")
});

static GC_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(GC pause \(\w+ \w+ Pause\))").expect("static pause pattern"));

/// One row of the extraction table.
pub struct RegionPattern {
    pub region: Region,
    /// Must have exactly two capture groups: size before, size after.
    pub regex: Regex,
    /// Converts the captured number to megabytes.
    pub to_mb: fn(f64) -> f64,
}

fn megabytes(v: f64) -> f64 {
    v
}

fn kilobytes(v: f64) -> f64 {
    v / 1024.0
}

/// Region patterns applied to every Eden summary line.
///
/// The Eden row expects the after value to end in `B`, unlike its `M`
/// siblings. G1 prints `->0.0B` once Eden is emptied, so a summary whose
/// Eden after-size is non-zero (`->12.0M`) leaves both Eden fields null.
///
/// Digits are ASCII-only: `f64::from_str` rejects other Unicode digits, and a
/// row must yield both values or neither.
pub static REGION_PATTERNS: LazyLock<Vec<RegionPattern>> = LazyLock::new(|| {
    vec![
        RegionPattern {
            region: Region::Eden,
            regex: Regex::new(r"Eden: ([0-9]+\.[0-9]+)M\([0-9]+\.[0-9]+M\)->([0-9]+\.[0-9]+)B")
                .expect("static eden pattern"),
            to_mb: megabytes,
        },
        RegionPattern {
            region: Region::Survivors,
            regex: Regex::new(r"Survivors: ([0-9]+\.[0-9]+)K->([0-9]+\.[0-9]+)K")
                .expect("static survivors pattern"),
            to_mb: kilobytes,
        },
        RegionPattern {
            region: Region::Heap,
            regex: Regex::new(r"Heap: ([0-9]+\.[0-9]+)M\([0-9]+\.[0-9]+M\)->([0-9]+\.[0-9]+)M")
                .expect("static heap pattern"),
            to_mb: megabytes,
        },
    ]
});

/// Single-pass scanner owning its [`RollingContext`].
#[derive(Debug, Default)]
pub struct Extractor {
    ctx: RollingContext,
    stats: ExtractStats,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self) -> &RollingContext {
        &self.ctx
    }

    pub fn stats(&self) -> ExtractStats {
        self.stats
    }

    /// Feed one line. Returns the `[before, after]` pair when the line is an
    /// Eden summary, `None` otherwise.
    pub fn process_line(&mut self, line: &str) -> Option<[MemoryEvent; 2]> {
        self.stats.lines += 1;

        if let Some(m) = TIMESTAMP_RE.find(line) {
            trace!(timestamp = m.as_str(), "timestamp updated");
            self.ctx.last_timestamp = Some(m.as_str().to_string());
        }

        if let Some(m) = GC_NAME_RE.find(line) {
            trace!(gc_name = m.as_str(), "pause label updated");
            self.ctx.last_gc_name = Some(m.as_str().to_string());
        }

        if !line.starts_with(EDEN_PREFIX) {
            return None;
        }

        let mut before = MemoryEvent::empty(&self.ctx, Phase::Before);
        let mut after = MemoryEvent::empty(&self.ctx, Phase::After);

        for pattern in REGION_PATTERNS.iter() {
            let (b, a) = capture_pair(pattern, line);
            before.set_size(pattern.region, b);
            after.set_size(pattern.region, a);
            if before.size_of(pattern.region).is_none() {
                debug!(line = self.stats.lines, region = %pattern.region, "region pattern did not match");
            }
        }

        self.stats.triggers += 1;
        self.stats.events += 2;
        debug!(
            line = self.stats.lines,
            timestamp = ?self.ctx.last_timestamp,
            gc_name = ?self.ctx.last_gc_name,
            "eden summary"
        );
        for event in [&before, &after] {
            trace!(
                phase = %event.phase,
                eden = ?event.size_of(Region::Eden),
                survivors = ?event.size_of(Region::Survivors),
                heap = ?event.size_of(Region::Heap),
                "event emitted"
            );
        }

        Some([before, after])
    }
}

fn capture_pair(pattern: &RegionPattern, line: &str) -> (Option<f64>, Option<f64>) {
    let Some(caps) = pattern.regex.captures(line) else {
        return (None, None);
    };
    let group = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .map(pattern.to_mb)
    };
    (group(1), group(2))
}

/// Extract every event from `lines`, in input order.
pub fn extract<I, S>(lines: I) -> Vec<MemoryEvent>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extractor = Extractor::new();
    lines
        .into_iter()
        .filter_map(|line| extractor.process_line(line.as_ref()))
        .flatten()
        .collect()
}

/// Read `reader` to the end and extract its events.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, and a
/// trailing `\r` is dropped from each line.
pub fn extract_reader<R: BufRead>(reader: R) -> Result<(Vec<MemoryEvent>, ExtractStats)> {
    let mut extractor = Extractor::new();
    let mut events = Vec::new();

    for raw in reader.split(b'\n') {
        let raw = raw?;
        let decoded = String::from_utf8_lossy(&raw);
        let line = decoded.strip_suffix('\r').unwrap_or(&*decoded);
        if let Some(pair) = extractor.process_line(line) {
            events.extend(pair);
        }
    }

    Ok((events, extractor.stats()))
}
