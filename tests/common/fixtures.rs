//! Static GC log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative lines from a
//! G1 log written with `-XX:+PrintGCDetails -XX:+PrintGCDateStamps`.

/// The worked example: one timestamp/pause line and one summary line.
pub const CORPUS_MINIMAL: &[&str] = &[
    "2024-01-01T00:00:00.000+0000: 0.512: [GC pause (Young Normal Pause), 0.0040000 secs]",
    "   [Eden: 10.0M(20.0M)->0.0B Survivors: 512.0K->1024.0K Heap: 100.0M(200.0M)->90.0M]",
];

/// Two young pauses with the usual detail lines in between.
pub const CORPUS_G1_YOUNG: &[&str] = &[
    "Java HotSpot(TM) 64-Bit Server VM (25.202-b08) for linux-amd64 JRE (1.8.0_202-b08)",
    "Memory: 4k page, physical 16310628k(10253208k free), swap 0k(0k free)",
    "CommandLine flags: -XX:+UseG1GC -XX:+PrintGCDetails -XX:+PrintGCDateStamps",
    "2023-05-10T12:30:01.123+0200: 1.204: [GC pause (G1 Evacuation Pause) (young), 0.0081234 secs]",
    "   [Parallel Time: 7.1 ms, GC Workers: 8]",
    "      [GC Worker Start (ms): Min: 1204.3, Avg: 1204.4, Max: 1204.5, Diff: 0.2]",
    "   [Code Root Fixup: 0.0 ms]",
    "   [Clear CT: 0.2 ms]",
    "   [Eden: 24.0M(24.0M)->0.0B(21.0M) Survivors: 0.0B->3072.0K Heap: 24.0M(256.0M)->4.5M(256.0M)]",
    " [Times: user=0.03 sys=0.01, real=0.01 secs] ",
    "2023-05-10T12:30:02.456+0200: 2.537: [GC pause (G1 Evacuation Pause) (young), 0.0062000 secs]",
    "   [Parallel Time: 5.4 ms, GC Workers: 8]",
    "   [Eden: 21.0M(21.0M)->0.0B(19.0M) Survivors: 3072.0K->4096.0K Heap: 25.5M(256.0M)->6.0M(256.0M)]",
    " [Times: user=0.02 sys=0.00, real=0.01 secs] ",
];

/// Summary lines whose sub-patterns fail in different ways.
pub const CORPUS_PARTIAL: &[&str] = &[
    "2024-02-02T10:00:00.000+0000: [GC pause (Mixed Normal Pause)",
    "   [Eden: 10.0M(20.0M)->5.0M Survivors: 2048.0K->4096.0K Heap: 100.0M(200.0M)->90.0M]",
    "   [Eden: 10.0M(20.0M)->0.0B Survivors: 0.0B->1024.0K Heap: 100.0M(200.0M)->90.0M]",
    "   [Eden: 10.0M(20.0M)->0.0B Survivors: 512.0K->1024.0K Heap: 1.0G(2.0G)->900.0M(2.0G)]",
    "   [Eden: nothing useful here]",
];

/// Lines that look close to a summary but must not trigger one.
pub const CORPUS_DECOYS: &[&str] = &[
    "[Eden: 10.0M(20.0M)->0.0B Survivors: 512.0K->1024.0K Heap: 100.0M(200.0M)->90.0M]",
    "  [Eden: 10.0M(20.0M)->0.0B Survivors: 512.0K->1024.0K Heap: 100.0M(200.0M)->90.0M]",
    "    [Eden: 10.0M(20.0M)->0.0B Survivors: 512.0K->1024.0K Heap: 100.0M(200.0M)->90.0M]",
    "\t[Eden: 10.0M(20.0M)->0.0B Survivors: 512.0K->1024.0K Heap: 100.0M(200.0M)->90.0M]",
    "   [eden: 10.0M(20.0M)->0.0B]",
    "   [Eden 10.0M(20.0M)->0.0B]",
];

/// Build `pauses` pause blocks with increasing timestamps, for throughput
/// and property tests.
pub fn corpus_high_volume(pauses: usize) -> Vec<String> {
    use chrono::{Duration, TimeZone, Utc};

    let start = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    let mut lines = Vec::with_capacity(pauses * 4);
    for i in 0..pauses {
        let ts = start + Duration::milliseconds(i as i64 * 1_250);
        let kind = if i % 5 == 4 { "Mixed" } else { "Young" };
        lines.push(format!(
            "{}: {}.{:03}: [GC pause ({kind} Normal Pause), 0.0050000 secs]",
            ts.format("%Y-%m-%dT%H:%M:%S%.3f+0000"),
            i,
            i % 1000,
        ));
        lines.push("   [Parallel Time: 4.0 ms, GC Workers: 4]".to_string());
        lines.push(format!(
            "   [Eden: {}.0M({}.0M)->0.0B Survivors: {}.0K->{}.0K Heap: {}.0M(512.0M)->{}.0M]",
            20 + i % 7,
            32,
            1024 * (i % 4),
            1024 * (i % 4 + 1),
            200 + i % 50,
            150 + i % 40,
        ));
        lines.push(" [Times: user=0.01 sys=0.00, real=0.00 secs] ".to_string());
    }
    lines
}

/// Write `lines` to `dir/name`, newline-terminated, and return the path.
pub fn write_log(dir: &std::path::Path, name: &str, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut text = lines.join("\n");
    text.push('\n');
    std::fs::write(&path, text).expect("write fixture log");
    path
}
