// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::{gap_secs_to_ms, parse_gap_override, Config};
use app_controller::{Controller, RunOptions};

mod app_config;
mod app_controller;
mod errors;
mod file_order;
mod file_utils;
mod merge_engine;
mod merge_session;
mod subtitle_processor;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge split subtitle files into one track (default command)
    Merge(MergeArgs),

    /// Generate shell completions for srtmerge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct MergeArgs {
    /// Input .srt files or directories to scan for them, in merge order
    #[arg(value_name = "INPUT_PATH")]
    input_paths: Vec<PathBuf>,

    /// Output file for the merged track (default: merged.srt in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Default gap between files in seconds (fractional allowed)
    #[arg(short, long)]
    gap: Option<f64>,

    /// Override the gap after one file: <boundary-index>=<seconds>, repeatable
    #[arg(long = "gap-at", value_name = "INDEX=SECONDS")]
    gap_overrides: Vec<String>,

    /// Drop entries whose text is empty instead of carrying them over
    #[arg(short, long)]
    drop_empty: bool,

    /// Keep files in the order given instead of sorting by embedded number
    #[arg(short, long)]
    no_sort: bool,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// srtmerge - SubRip subtitle merge tool
///
/// Merges split .srt subtitle files into a single continuous track with
/// shifted timestamps, renumbered entries and configurable silent gaps.
#[derive(Parser, Debug)]
#[command(name = "srtmerge")]
#[command(version = "1.0.0")]
#[command(about = "Merge split SubRip subtitle files into one track")]
#[command(long_about = "srtmerge joins split .srt subtitle files into one file, shifting every
timestamp by the accumulated duration of the files before it plus a
configurable silent gap per boundary, and renumbering entries from 1.

EXAMPLES:
    srtmerge part1.srt part2.srt                # Merge two files with the default 0.5s gap
    srtmerge ./season1/                         # Merge every .srt found in a directory
    srtmerge -g 2.5 part1.srt part2.srt         # Use a 2.5s gap between files
    srtmerge --gap-at 0=10 a.srt b.srt c.srt    # 10s gap after the first file only
    srtmerge -d part1.srt part2.srt             # Drop entries with empty text
    srtmerge -n b.srt a.srt                     # Keep the given order, skip number sorting
    srtmerge -o out/full.srt part*.srt          # Write the merged track to out/full.srt
    srtmerge completions bash > srtmerge.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.

ORDERING:
    Files are sorted by the number embedded in their names: a 'part<N>' token
    wins, otherwise the last digit run counts, and files without digits sort
    first in their original order.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input .srt files or directories to scan for them, in merge order
    #[arg(value_name = "INPUT_PATH")]
    input_paths: Vec<PathBuf>,

    /// Output file for the merged track (default: merged.srt in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Default gap between files in seconds (fractional allowed)
    #[arg(short, long)]
    gap: Option<f64>,

    /// Override the gap after one file: <boundary-index>=<seconds>, repeatable
    #[arg(long = "gap-at", value_name = "INDEX=SECONDS")]
    gap_overrides: Vec<String>,

    /// Drop entries whose text is empty instead of carrying them over
    #[arg(short, long)]
    drop_empty: bool,

    /// Keep files in the order given instead of sorting by embedded number
    #[arg(short, long)]
    no_sort: bool,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "srtmerge", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Merge(args)) => run_merge(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            if cli.input_paths.is_empty() {
                return Err(anyhow!("INPUT_PATH is required when no subcommand is specified"));
            }

            let merge_args = MergeArgs {
                input_paths: cli.input_paths,
                output: cli.output,
                gap: cli.gap,
                gap_overrides: cli.gap_overrides,
                drop_empty: cli.drop_empty,
                no_sort: cli.no_sort,
                force_overwrite: cli.force_overwrite,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_merge(merge_args).await
        }
    }
}

async fn run_merge(options: MergeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(gap_secs) = options.gap {
        config.default_gap_ms = gap_secs_to_ms(gap_secs)?;
    }

    if options.drop_empty {
        config.preserve_empty_entries = false;
    }

    // An explicit output path supplies both the directory and the filename
    let output_dir = match &options.output {
        Some(output) => {
            let filename = output
                .file_name()
                .ok_or_else(|| anyhow!("Output path has no filename: {:?}", output))?;
            config.output_filename = filename.to_string_lossy().to_string();
            output
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf()
        }
        None => PathBuf::from("."),
    };

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let gap_overrides = options
        .gap_overrides
        .iter()
        .map(|raw| parse_gap_override(raw))
        .collect::<Result<Vec<_>, _>>()?;

    // Create controller
    let controller = Controller::with_config(config)?;

    controller
        .run(
            &options.input_paths,
            &output_dir,
            RunOptions {
                no_sort: options.no_sort,
                gap_overrides,
                force_overwrite: options.force_overwrite,
            },
        )
        .await
}
