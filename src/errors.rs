/*!
 * Error types for the srtmerge application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when decoding SubRip data
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Error when a timestamp does not match the `HH:MM:SS,mmm` pattern
    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),
}

/// Errors that can occur when adding a file to the working set
#[derive(Error, Debug)]
pub enum IngestError {
    /// Error when a file yields no parseable subtitle blocks
    #[error("No valid subtitle entries found in file: {0}")]
    NoEntries(String),

    /// Error when a file with the same name is already in the working set
    #[error("File already in working set: {0}")]
    DuplicateName(String),

    /// Error when reading a file from the source medium fails
    #[error("Failed to read file {name}: {source}")]
    Read {
        /// Name of the file that could not be read
        name: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Error from subtitle decoding
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),
}

/// Errors caused by invalid configuration input
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when a supplied gap duration is negative or not a number
    #[error("Invalid gap duration: {0} (must be a non-negative number of seconds)")]
    InvalidGap(f64),

    /// Error when a gap override does not use the `index=seconds` form
    #[error("Invalid gap override '{0}': expected <boundary-index>=<seconds>")]
    InvalidGapOverride(String),

    /// Error when the output filename is empty
    #[error("Output filename must not be empty")]
    EmptyOutputName,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle decoding
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from working set ingestion
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// Error from configuration input
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
