use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;

// @module: SubRip parsing, formatting and entry model

// @const: Single SRT timestamp, strict HH:MM:SS,mmm
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2}),(\d{3})$").unwrap()
});

// @const: Timing line, `start --> end` with optional whitespace around the arrow
static TIMING_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2}),(\d{3})\s*-->\s*(\d{2}):(\d{2}):(\d{2}),(\d{3})").unwrap()
});

// @const: Block boundary, one or more blank lines
static BLOCK_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    // @field: Sequence number, always reassigned, never trusted from source text
    pub seq_num: usize,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms; may precede start_time_ms in malformed source files
    pub end_time_ms: u64,

    // @field: Subtitle text, trimmed, may span multiple lines, may be empty
    pub text: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry
    pub fn new(seq_num: usize, start_time_ms: u64, end_time_ms: u64, text: String) -> Self {
        SubtitleEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            text,
        }
    }

    /// Whether the entry carries no text at all
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        format_timestamp(self.start_time_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        format_timestamp(self.end_time_ms)
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)
    }
}

/// Parse an SRT timestamp in strict `HH:MM:SS,mmm` form to milliseconds.
///
/// Field ranges are not validated beyond the digit-count pattern; the format
/// itself never guaranteed them and real-world files do exceed them.
pub fn parse_timestamp(timestamp: &str) -> Result<u64, SubtitleError> {
    let caps = TIMESTAMP_REGEX
        .captures(timestamp)
        .ok_or_else(|| SubtitleError::InvalidTimestamp(timestamp.to_string()))?;
    Ok(captured_ms(&caps, 1))
}

/// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm).
///
/// Hours are not wrapped at 24, so merged tracks longer than a day keep
/// monotonic timestamps.
pub fn format_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Format a duration in milliseconds as HH:MM:SS for display purposes
pub fn format_duration(ms: u64) -> String {
    let total_seconds = ms / 1_000;
    let hours = total_seconds / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

// Millisecond value from four consecutive capture groups starting at start_idx.
// Infallible: the groups are guaranteed to be all-digit by the regex.
fn captured_ms(caps: &regex::Captures, start_idx: usize) -> u64 {
    let field = |idx: usize| -> u64 {
        caps.get(idx)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0))
    };
    let hours = field(start_idx);
    let minutes = field(start_idx + 1);
    let seconds = field(start_idx + 2);
    let millis = field(start_idx + 3);

    (hours * 3600 + minutes * 60 + seconds) * 1000 + millis
}

/// Parse SRT format string into subtitle entries.
///
/// Splits on blank-line boundaries and accepts a block only if it has at
/// least three lines and its second line is a timing line. Anything else is
/// silently discarded; lenient skipping is part of the format's contract, not
/// an error condition. The leading sequence number of each block is ignored
/// and entries are renumbered 1..N in parse order, which keeps bilingual
/// entries sharing one timestamp as separate entries.
///
/// A text with zero valid blocks yields an empty vector; policy for that case
/// belongs to the caller.
pub fn parse_srt_string(content: &str) -> Vec<SubtitleEntry> {
    let mut entries = Vec::new();

    for block in BLOCK_SPLIT_REGEX.split(content.trim()) {
        let lines: Vec<&str> = block.trim().lines().collect();
        if lines.len() < 3 {
            continue;
        }

        let Some(caps) = TIMING_LINE_REGEX.captures(lines[1]) else {
            continue;
        };

        let start_time_ms = captured_ms(&caps, 1);
        let end_time_ms = captured_ms(&caps, 5);
        let text = lines[2..].join("\n").trim().to_string();

        entries.push(SubtitleEntry::new(
            entries.len() + 1,
            start_time_ms,
            end_time_ms,
            text,
        ));
    }

    entries
}

/// Render subtitle entries back to SubRip text.
///
/// Each entry becomes `"{n}\n{start} --> {end}\n{text}\n"`, blocks joined by
/// a blank line. Round-trips with `parse_srt_string` for any entry body that
/// does not itself contain a blank line followed by a timing line.
pub fn serialize_entries(entries: &[SubtitleEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}\n{} --> {}\n{}\n",
                entry.seq_num,
                entry.format_start_time(),
                entry.format_end_time(),
                entry.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One accepted input file of the working set
#[derive(Debug, Clone)]
pub struct SubtitleFile {
    /// File name, unique within the working set
    pub name: String,

    /// Size of the raw source in bytes, informational
    pub size_bytes: u64,

    /// Parsed entries in textual order, renumbered from 1
    pub entries: Vec<SubtitleEntry>,

    /// Largest end time over all entries, 0 when there are none
    pub duration_ms: u64,
}

impl SubtitleFile {
    /// Parse raw SRT text into a file record, computing its duration
    pub fn from_srt(name: &str, size_bytes: u64, content: &str) -> Self {
        let entries = parse_srt_string(content);
        let duration_ms = calculate_duration(&entries);

        SubtitleFile {
            name: name.to_string(),
            size_bytes,
            entries,
            duration_ms,
        }
    }

    /// Number of parsed entries
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for SubtitleFile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({:.1} KB, {} entries, {})",
            self.name,
            self.size_bytes as f64 / 1024.0,
            self.entry_count(),
            format_duration(self.duration_ms)
        )
    }
}

/// Duration of an entry sequence: the maximum end time, 0 when empty
pub fn calculate_duration(entries: &[SubtitleEntry]) -> u64 {
    entries
        .iter()
        .map(|entry| entry.end_time_ms)
        .max()
        .unwrap_or(0)
}
