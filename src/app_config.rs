use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Silence inserted between adjacent files when gaps are initialized, in ms
    #[serde(default = "default_gap_ms")]
    pub default_gap_ms: u64,

    /// Whether entries with empty text survive the merge
    #[serde(default = "default_true")]
    pub preserve_empty_entries: bool,

    /// Filename the merged track is written to
    #[serde(default = "default_output_filename")]
    pub output_filename: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Validate the configuration after loading and CLI overrides
    pub fn validate(&self) -> Result<()> {
        if self.output_filename.trim().is_empty() {
            return Err(ConfigError::EmptyOutputName.into());
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            default_gap_ms: default_gap_ms(),
            preserve_empty_entries: true,
            output_filename: default_output_filename(),
            log_level: LogLevel::default(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Convert a user-supplied gap in seconds to milliseconds.
///
/// Fractional seconds are allowed; negative or non-finite input is rejected
/// and leaves prior configuration intact at the call site.
pub fn gap_secs_to_ms(gap_secs: f64) -> Result<u64, ConfigError> {
    if !gap_secs.is_finite() || gap_secs < 0.0 {
        return Err(ConfigError::InvalidGap(gap_secs));
    }

    Ok((gap_secs * 1000.0).round() as u64)
}

/// Parse a per-boundary gap override in `<boundary-index>=<seconds>` form
pub fn parse_gap_override(raw: &str) -> Result<(usize, u64), ConfigError> {
    let (index_part, secs_part) = raw
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidGapOverride(raw.to_string()))?;

    let boundary_index: usize = index_part
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidGapOverride(raw.to_string()))?;

    let gap_secs: f64 = secs_part
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidGapOverride(raw.to_string()))?;

    Ok((boundary_index, gap_secs_to_ms(gap_secs)?))
}

fn default_gap_ms() -> u64 {
    500
}

fn default_output_filename() -> String {
    "merged.srt".to_string()
}

fn default_true() -> bool {
    true
}
