use log::debug;

use crate::subtitle_processor::{serialize_entries, SubtitleEntry, SubtitleFile};

// @module: Time-shifting merge of ordered subtitle files

/// Result of a completed merge
#[derive(Debug, Clone)]
pub struct MergeOutput {
    /// Serialized SubRip text of the merged track
    pub text: String,

    /// Total duration of the merged track in ms, without a trailing gap
    pub duration_ms: u64,

    /// Number of entries emitted
    pub entry_count: usize,
}

/// Concatenate the entries of ordered files into one renumbered, time-shifted
/// sequence and return it together with the total merged duration.
///
/// `gaps[i]` is the silence inserted after `files[i]`; no gap follows the last
/// file. File order strictly determines output order: entries of a later
/// file are never interleaved into an earlier file's range even when their
/// shifted timestamps overlap it, since gap sizing is the caller's call.
/// Entries with empty text are dropped when `preserve_empty` is false and
/// consume no output index. An empty file list merges to an empty sequence
/// with duration 0.
pub fn merge_files(
    files: &[SubtitleFile],
    gaps: &[u64],
    preserve_empty: bool,
) -> (Vec<SubtitleEntry>, u64) {
    let mut merged = Vec::new();
    let mut cumulative_offset: u64 = 0;

    for (file_index, file) in files.iter().enumerate() {
        for entry in &file.entries {
            if !preserve_empty && entry.is_empty() {
                continue;
            }

            merged.push(SubtitleEntry::new(
                merged.len() + 1,
                entry.start_time_ms + cumulative_offset,
                entry.end_time_ms + cumulative_offset,
                entry.text.clone(),
            ));
        }

        cumulative_offset += file.duration_ms;
        if file_index < files.len() - 1 {
            cumulative_offset += gaps.get(file_index).copied().unwrap_or(0);
        }
    }

    debug!(
        "Merged {} files into {} entries, total duration {} ms",
        files.len(),
        merged.len(),
        cumulative_offset
    );

    (merged, cumulative_offset)
}

/// Merge and serialize in one step
pub fn merge_to_output(files: &[SubtitleFile], gaps: &[u64], preserve_empty: bool) -> MergeOutput {
    let (entries, duration_ms) = merge_files(files, gaps, preserve_empty);

    MergeOutput {
        entry_count: entries.len(),
        text: serialize_entries(&entries),
        duration_ms,
    }
}
