/*!
 * Tests for error types and conversions
 */

use std::io;
use srtmerge::errors::{AppError, ConfigError, IngestError, SubtitleError};

#[test]
fn test_subtitleError_invalidTimestamp_shouldDisplayCorrectly() {
    let error = SubtitleError::InvalidTimestamp("12:34".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Invalid timestamp format"));
    assert!(display.contains("12:34"));
}

#[test]
fn test_ingestError_noEntries_shouldDisplayFilename() {
    let error = IngestError::NoEntries("broken.srt".to_string());
    let display = format!("{}", error);
    assert!(display.contains("No valid subtitle entries"));
    assert!(display.contains("broken.srt"));
}

#[test]
fn test_ingestError_duplicateName_shouldDisplayFilename() {
    let error = IngestError::DuplicateName("part1.srt".to_string());
    let display = format!("{}", error);
    assert!(display.contains("already in working set"));
    assert!(display.contains("part1.srt"));
}

#[test]
fn test_ingestError_read_shouldDisplayNameAndCause() {
    let error = IngestError::Read {
        name: "missing.srt".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "gone"),
    };
    let display = format!("{}", error);
    assert!(display.contains("Failed to read file missing.srt"));
    assert!(display.contains("gone"));
}

#[test]
fn test_configError_invalidGap_shouldDisplayValue() {
    let error = ConfigError::InvalidGap(-1.5);
    let display = format!("{}", error);
    assert!(display.contains("Invalid gap duration"));
    assert!(display.contains("-1.5"));
}

#[test]
fn test_configError_invalidGapOverride_shouldDisplayExpectedForm() {
    let error = ConfigError::InvalidGapOverride("bogus".to_string());
    let display = format!("{}", error);
    assert!(display.contains("bogus"));
    assert!(display.contains("<boundary-index>=<seconds>"));
}

#[test]
fn test_ingestError_fromSubtitleError_shouldWrapCorrectly() {
    let subtitle_error = SubtitleError::InvalidTimestamp("bad".to_string());
    let ingest_error: IngestError = subtitle_error.into();
    let display = format!("{}", ingest_error);
    assert!(display.contains("Subtitle error"));
}

#[test]
fn test_appError_fromIngestError_shouldWrapCorrectly() {
    let ingest_error = IngestError::DuplicateName("a.srt".to_string());
    let app_error: AppError = ingest_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Ingest error"));
}

#[test]
fn test_appError_fromConfigError_shouldWrapCorrectly() {
    let config_error = ConfigError::EmptyOutputName;
    let app_error: AppError = config_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Configuration error"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("denied"));
}

#[test]
fn test_appError_fromAnyhowError_shouldBecomeUnknown() {
    let anyhow_error = anyhow::anyhow!("something odd");
    let app_error: AppError = anyhow_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Unknown error"));
    assert!(display.contains("something odd"));
}
