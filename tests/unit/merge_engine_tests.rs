/*!
 * Tests for the time-shifting merge algorithm
 */

use srtmerge::merge_engine::{merge_files, merge_to_output};
use crate::common::subtitle_file_from_entries;

/// Test the cumulative shift across a file boundary with a gap
#[test]
fn test_merge_files_withTwoFilesAndGap_shouldShiftSecondFile() {
    let first = subtitle_file_from_entries("part1.mkv.srt", &[(1000, 2500, "Hello"), (3000, 4000, "World")]);
    let second = subtitle_file_from_entries("part2.mkv.srt", &[(0, 1000, "Next")]);

    let (merged, total_ms) = merge_files(&[first, second], &[500], true);

    assert_eq!(merged.len(), 3);

    // First file is untouched
    assert_eq!(merged[0].seq_num, 1);
    assert_eq!(merged[0].start_time_ms, 1000);
    assert_eq!(merged[0].end_time_ms, 2500);

    // Second file starts after duration 4000 + gap 500
    assert_eq!(merged[2].seq_num, 3);
    assert_eq!(merged[2].start_time_ms, 4500);
    assert_eq!(merged[2].end_time_ms, 5500);
    assert_eq!(merged[2].text, "Next");

    // No trailing gap after the last file
    assert_eq!(total_ms, 5500);
}

/// Test merging nothing
#[test]
fn test_merge_files_withEmptyList_shouldYieldEmptyOutput() {
    let (merged, total_ms) = merge_files(&[], &[], true);

    assert!(merged.is_empty());
    assert_eq!(total_ms, 0);

    let output = merge_to_output(&[], &[], true);
    assert_eq!(output.text, "");
    assert_eq!(output.duration_ms, 0);
    assert_eq!(output.entry_count, 0);
}

/// Test that empty entries are dropped without consuming an index
#[test]
fn test_merge_files_withDropEmpty_shouldRenumberDensely() {
    let file = subtitle_file_from_entries(
        "a.srt",
        &[(0, 1000, "One"), (1500, 2000, ""), (2500, 3000, "Three")],
    );

    let (merged, _) = merge_files(&[file], &[], false);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].seq_num, 1);
    assert_eq!(merged[0].text, "One");
    assert_eq!(merged[1].seq_num, 2);
    assert_eq!(merged[1].text, "Three");
}

/// Test that empty entries survive when preservation is on
#[test]
fn test_merge_files_withPreserveEmpty_shouldKeepBlankEntries() {
    let file = subtitle_file_from_entries("a.srt", &[(0, 1000, "One"), (1500, 2000, "")]);

    let (merged, _) = merge_files(&[file], &[], true);

    assert_eq!(merged.len(), 2);
    assert!(merged[1].text.is_empty());
}

/// Test dense 1..N numbering across several files
#[test]
fn test_merge_files_withThreeFiles_shouldNumberContiguously() {
    let files = vec![
        subtitle_file_from_entries("a.srt", &[(0, 1000, "a1"), (1000, 2000, "a2")]),
        subtitle_file_from_entries("b.srt", &[(0, 500, "b1")]),
        subtitle_file_from_entries("c.srt", &[(0, 100, "c1"), (200, 300, "c2")]),
    ];

    let (merged, _) = merge_files(&files, &[250, 250], true);

    let seq_nums: Vec<usize> = merged.iter().map(|e| e.seq_num).collect();
    assert_eq!(seq_nums, vec![1, 2, 3, 4, 5]);
}

/// Test that each boundary applies its own gap
#[test]
fn test_merge_files_withPerBoundaryGaps_shouldApplyEach() {
    let files = vec![
        subtitle_file_from_entries("a.srt", &[(0, 1000, "a")]),
        subtitle_file_from_entries("b.srt", &[(0, 1000, "b")]),
        subtitle_file_from_entries("c.srt", &[(0, 1000, "c")]),
    ];

    let (merged, total_ms) = merge_files(&files, &[100, 900], true);

    assert_eq!(merged[1].start_time_ms, 1100);
    assert_eq!(merged[2].start_time_ms, 3000);
    assert_eq!(total_ms, 4000);
}

/// Test that a file's textual entry order survives, even against timestamps
#[test]
fn test_merge_files_withUnsortedTimestamps_shouldPreserveTextualOrder() {
    let file = subtitle_file_from_entries("a.srt", &[(5000, 6000, "later"), (0, 1000, "earlier")]);

    let (merged, _) = merge_files(&[file], &[], true);

    assert_eq!(merged[0].text, "later");
    assert_eq!(merged[1].text, "earlier");
}

/// Test that merging the same input twice is byte-identical
#[test]
fn test_merge_to_output_calledTwice_shouldBeIdentical() {
    let files = vec![
        subtitle_file_from_entries("a.srt", &[(0, 1000, "a")]),
        subtitle_file_from_entries("b.srt", &[(0, 1000, "b")]),
    ];

    let first = merge_to_output(&files, &[500], true);
    let second = merge_to_output(&files, &[500], true);

    assert_eq!(first.text, second.text);
    assert_eq!(first.duration_ms, second.duration_ms);
    assert_eq!(first.entry_count, second.entry_count);
}

/// Test that source entries are not mutated by a merge
#[test]
fn test_merge_files_withShift_shouldLeaveSourceEntriesUntouched() {
    let files = vec![
        subtitle_file_from_entries("a.srt", &[(0, 1000, "a")]),
        subtitle_file_from_entries("b.srt", &[(0, 1000, "b")]),
    ];

    let _ = merge_files(&files, &[500], true);

    assert_eq!(files[1].entries[0].start_time_ms, 0);
    assert_eq!(files[1].entries[0].end_time_ms, 1000);
}
