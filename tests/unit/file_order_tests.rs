/*!
 * Tests for filename-based ordering keys
 */

use srtmerge::file_order::extract_order_key;

/// Test the part token convention
#[test]
fn test_extract_order_key_withPartToken_shouldUseItsNumber() {
    assert_eq!(extract_order_key("show.part10.srt"), 10);
    assert_eq!(extract_order_key("part1 of 3.srt"), 1);
    // part wins even when other digit runs follow
    assert_eq!(extract_order_key("part2.episode9.srt"), 2);
}

/// Test that the part token matches case-insensitively
#[test]
fn test_extract_order_key_withMixedCasePartToken_shouldMatch() {
    assert_eq!(extract_order_key("Show.Part3.srt"), 3);
    assert_eq!(extract_order_key("SHOW.PART12.SRT"), 12);
}

/// Test the last-digit-run fallback
#[test]
fn test_extract_order_key_withoutPartToken_shouldUseLastDigitRun() {
    assert_eq!(extract_order_key("show_07.srt"), 7);
    assert_eq!(extract_order_key("2024.movie.disc2.srt"), 2);
    assert_eq!(extract_order_key("01-02-03.srt"), 3);
}

/// Test names without any digits
#[test]
fn test_extract_order_key_withNoDigits_shouldReturnZero() {
    assert_eq!(extract_order_key("show.srt"), 0);
    assert_eq!(extract_order_key(""), 0);
}

/// Test that the key function is pure
#[test]
fn test_extract_order_key_calledTwice_shouldReturnSameKey() {
    let name = "series.part42.mkv.srt";
    assert_eq!(extract_order_key(name), extract_order_key(name));
    assert_eq!(extract_order_key(name), 42);
}
