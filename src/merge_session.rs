use log::{debug, warn};

use crate::app_config::Config;
use crate::errors::IngestError;
use crate::file_order::extract_order_key;
use crate::merge_engine::{merge_to_output, MergeOutput};
use crate::subtitle_processor::SubtitleFile;

// @module: In-memory working set of subtitle files and their gaps

/// Direction for moving a file within the working set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards the front of the merge order
    Up,
    /// Towards the back of the merge order
    Down,
}

/// Per-file slot in the merged timeline, used for previewing the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpan {
    /// File name
    pub name: String,
    /// Offset of the file's first millisecond in the merged track
    pub start_ms: u64,
    /// Offset of the file's last millisecond in the merged track
    pub end_ms: u64,
    /// Number of entries the file contributes before empty-entry filtering
    pub entry_count: usize,
}

/// The session-scoped working set: ordered files, per-boundary gaps and the
/// merge configuration.
///
/// The file order IS the merge order. `gaps[i]` is the silence between
/// `files[i]` and `files[i + 1]`, so `gaps.len() == files.len() - 1` (or 0)
/// holds after every mutating operation. All state is transient; nothing is
/// persisted beyond the merged text handed back to the caller.
#[derive(Debug)]
pub struct MergeSession {
    // @field: Ordered working set
    files: Vec<SubtitleFile>,

    // @field: Silence between adjacent files, in ms
    gaps: Vec<u64>,

    // @field: Gap value used whenever gaps are (re)initialized
    default_gap_ms: u64,

    // @field: When false, entries with empty text are dropped during merge
    preserve_empty_entries: bool,

    // @field: Single in-flight guard; a merge request while one is active is a no-op
    merging: bool,
}

impl MergeSession {
    /// Create an empty session
    pub fn new(default_gap_ms: u64, preserve_empty_entries: bool) -> Self {
        MergeSession {
            files: Vec::new(),
            gaps: Vec::new(),
            default_gap_ms,
            preserve_empty_entries,
            merging: false,
        }
    }

    /// Create an empty session from application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_gap_ms, config.preserve_empty_entries)
    }

    /// Files currently in the working set, in merge order
    pub fn files(&self) -> &[SubtitleFile] {
        &self.files
    }

    /// Current per-boundary gaps in ms
    pub fn gaps(&self) -> &[u64] {
        &self.gaps
    }

    /// Number of files in the working set
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Whether the working set holds no files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Parse raw SRT text and append it to the working set.
    ///
    /// A name already present is rejected, not replaced; a text with zero
    /// parseable blocks is rejected as a format failure. Both leave the
    /// working set unchanged.
    pub fn ingest(
        &mut self,
        name: &str,
        size_bytes: u64,
        raw_text: &str,
    ) -> Result<&SubtitleFile, IngestError> {
        if self.files.iter().any(|file| file.name == name) {
            return Err(IngestError::DuplicateName(name.to_string()));
        }

        let file = SubtitleFile::from_srt(name, size_bytes, raw_text);
        if file.entries.is_empty() {
            return Err(IngestError::NoEntries(name.to_string()));
        }

        debug!(
            "Ingested {}: {} entries, duration {} ms",
            name,
            file.entry_count(),
            file.duration_ms
        );

        let index = self.files.len();
        self.files.push(file);
        self.reinitialize_gaps();
        Ok(&self.files[index])
    }

    /// Stable sort of the working set by each file's extracted order key.
    ///
    /// Files sharing a key keep their prior relative order. Resets all gaps
    /// to the default.
    pub fn reorder(&mut self) {
        self.files
            .sort_by_key(|file| extract_order_key(&file.name));
        self.reinitialize_gaps();
    }

    /// Swap the file at `index` with its neighbor in the given direction.
    ///
    /// Out-of-range indices and moves past either end are no-ops. Returns
    /// whether a swap happened; gaps reset to the default on success.
    pub fn move_file(&mut self, index: usize, direction: MoveDirection) -> bool {
        let neighbor = match direction {
            MoveDirection::Up => {
                if index == 0 || index >= self.files.len() {
                    return false;
                }
                index - 1
            }
            MoveDirection::Down => {
                if index + 1 >= self.files.len() {
                    return false;
                }
                index + 1
            }
        };

        self.files.swap(index, neighbor);
        self.reinitialize_gaps();
        true
    }

    /// Remove the file at `index` from the working set.
    ///
    /// Out-of-range indices are no-ops. Gaps reset to the default.
    pub fn remove_file(&mut self, index: usize) -> Option<SubtitleFile> {
        if index >= self.files.len() {
            warn!("Ignoring removal of out-of-range file index {}", index);
            return None;
        }

        let removed = self.files.remove(index);
        self.reinitialize_gaps();
        Some(removed)
    }

    /// Drop all files and gaps
    pub fn clear(&mut self) {
        self.files.clear();
        self.gaps.clear();
    }

    /// Set the gap value used at the next (re)initialization.
    ///
    /// Gaps already in place keep their current values.
    pub fn set_default_gap_ms(&mut self, default_gap_ms: u64) {
        self.default_gap_ms = default_gap_ms;
    }

    /// Configure empty-entry handling for subsequent merges
    pub fn set_preserve_empty(&mut self, preserve_empty_entries: bool) {
        self.preserve_empty_entries = preserve_empty_entries;
    }

    /// Override the gap after the file at `boundary_index`.
    ///
    /// The index must address an existing boundary; anything else is a bug in
    /// the caller, as the gap list length is an invariant of this type.
    pub fn set_gap(&mut self, boundary_index: usize, gap_ms: u64) {
        self.gaps[boundary_index] = gap_ms;
    }

    /// Merge the working set into one renumbered, time-shifted track.
    ///
    /// Returns `None` while another merge is in flight (second requests are
    /// dropped, not queued). An empty working set merges to an empty output
    /// with duration 0.
    pub fn merge(&mut self) -> Option<MergeOutput> {
        if self.merging {
            warn!("Merge already in progress, ignoring request");
            return None;
        }

        self.merging = true;
        let output = merge_to_output(&self.files, &self.gaps, self.preserve_empty_entries);
        self.merging = false;

        Some(output)
    }

    /// Where each file lands in the merged track, given current gaps.
    pub fn timeline(&self) -> Vec<FileSpan> {
        let mut spans = Vec::with_capacity(self.files.len());
        let mut current_ms: u64 = 0;

        for (index, file) in self.files.iter().enumerate() {
            spans.push(FileSpan {
                name: file.name.clone(),
                start_ms: current_ms,
                end_ms: current_ms + file.duration_ms,
                entry_count: file.entry_count(),
            });

            current_ms += file.duration_ms;
            if index < self.files.len() - 1 {
                current_ms += self.gaps.get(index).copied().unwrap_or(0);
            }
        }

        spans
    }

    /// Total duration of the merged track with current gaps
    pub fn total_duration_ms(&self) -> u64 {
        self.timeline().last().map_or(0, |span| span.end_ms)
    }

    fn reinitialize_gaps(&mut self) {
        self.gaps = vec![self.default_gap_ms; self.files.len().saturating_sub(1)];
    }
}
