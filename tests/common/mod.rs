/*!
 * Common test utilities for the srtmerge test suite
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use tempfile::TempDir;

use srtmerge::subtitle_processor::{SubtitleEntry, SubtitleFile};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, sample_srt_text())
}

/// Sample SubRip text with three entries, total duration 14s
pub fn sample_srt_text() -> &'static str {
    r#"1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.

3
00:00:10,000 --> 00:00:14,000
For testing purposes.
"#
}

/// Builds an in-memory subtitle file from (start, end, text) triples
pub fn subtitle_file_from_entries(name: &str, entries: &[(u64, u64, &str)]) -> SubtitleFile {
    let entries: Vec<SubtitleEntry> = entries
        .iter()
        .enumerate()
        .map(|(i, &(start, end, text))| SubtitleEntry::new(i + 1, start, end, text.to_string()))
        .collect();
    let duration_ms = entries.iter().map(|e| e.end_time_ms).max().unwrap_or(0);

    SubtitleFile {
        name: name.to_string(),
        size_bytes: 0,
        entries,
        duration_ms,
    }
}
