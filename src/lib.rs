/*!
 * # srtmerge
 *
 * A Rust library and CLI for merging split SubRip (.srt) subtitle files
 * into a single continuous track.
 *
 * ## Features
 *
 * - Parse SubRip text into structured, renumbered entries
 * - Order input files by the numeric token embedded in their names
 * - Insert configurable silent gaps between consecutive files
 * - Shift timestamps cumulatively and renumber the merged result
 * - Serialize back to SubRip text, round-trip compatible
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: SRT timestamp codec, parser and serializer
 * - `file_order`: filename-based ordering key extraction
 * - `merge_engine`: the time-shifting merge algorithm
 * - `merge_session`: the in-memory working set and its gap model
 * - `app_config`: configuration management
 * - `file_utils`: file system operations
 * - `app_controller`: main application controller
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_order;
pub mod file_utils;
pub mod merge_engine;
pub mod merge_session;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ConfigError, IngestError, SubtitleError};
pub use merge_engine::MergeOutput;
pub use merge_session::{MergeSession, MoveDirection};
pub use subtitle_processor::{SubtitleEntry, SubtitleFile};
