use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::IngestError;
use crate::file_order::extract_order_key;
use crate::file_utils::FileManager;
use crate::merge_engine::MergeOutput;
use crate::merge_session::MergeSession;
use crate::subtitle_processor::format_duration;

// @module: Application controller for the subtitle merge workflow

/// Options for one merge run, resolved from the CLI
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Keep insertion order instead of sorting by extracted order key
    pub no_sort: bool,

    /// Per-boundary gap overrides as (boundary index, ms), applied after sorting
    pub gap_overrides: Vec<(usize, u64)>,

    /// Overwrite an existing output file
    pub force_overwrite: bool,
}

/// Main application controller for subtitle merging
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Run the merge workflow over the given input paths and write the merged
    /// track to `output_dir`/`config.output_filename`.
    ///
    /// Directories are scanned for .srt files; explicit files are taken as
    /// given. Ingestion is sequential and order-preserving, and any per-file
    /// failure is reported once and skipped so the rest of the batch still
    /// merges.
    pub async fn run(&self, input_paths: &[PathBuf], output_dir: &Path, options: RunOptions) -> Result<()> {
        let start_time = std::time::Instant::now();

        let output_path = output_dir.join(&self.config.output_filename);
        if output_path.exists() && !options.force_overwrite {
            warn!(
                "Skipping merge, output already exists (use -f to force overwrite): {:?}",
                output_path
            );
            return Ok(());
        }

        let input_files = Self::collect_input_files(input_paths)?;
        if input_files.is_empty() {
            return Err(anyhow!("No .srt files found in the given input paths"));
        }
        info!("Found {} subtitle file(s) to merge", input_files.len());

        let mut session = MergeSession::from_config(&self.config);
        self.ingest_batch(&mut session, &input_files).await;

        if session.is_empty() {
            return Err(anyhow!("None of the input files could be ingested"));
        }

        if options.no_sort {
            debug!("Keeping files in input order");
        } else {
            session.reorder();
        }

        for &(boundary_index, gap_ms) in &options.gap_overrides {
            if boundary_index < session.gaps().len() {
                session.set_gap(boundary_index, gap_ms);
            } else {
                warn!(
                    "Ignoring gap override for boundary {}: working set has {} boundaries",
                    boundary_index,
                    session.gaps().len()
                );
            }
        }

        for span in session.timeline() {
            debug!(
                "  {} [{} - {}] {} entries (order key {})",
                span.name,
                format_duration(span.start_ms),
                format_duration(span.end_ms),
                span.entry_count,
                extract_order_key(&span.name)
            );
        }

        let output = session
            .merge()
            .ok_or_else(|| anyhow!("A merge is already in progress"))?;

        FileManager::ensure_dir(output_dir)?;
        FileManager::write_to_file(&output_path, &output.text)?;

        self.log_summary(&output, session.file_count(), &output_path, start_time.elapsed());
        Ok(())
    }

    /// Expand input paths into a flat list of subtitle files.
    ///
    /// Directories contribute their .srt files in path order; explicit file
    /// arguments are kept even without the .srt extension (content is sniffed
    /// at ingestion time). Missing paths fail the run up front, before any
    /// file is read.
    fn collect_input_files(input_paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for path in input_paths {
            if FileManager::dir_exists(path) {
                files.extend(FileManager::find_srt_files(path)?);
            } else if FileManager::file_exists(path) {
                files.push(path.clone());
            } else {
                return Err(anyhow!("Input path does not exist: {:?}", path));
            }
        }

        Ok(files)
    }

    /// Read and ingest each file in order, one at a time, so duplicate-name
    /// checks always observe a consistent working set.
    async fn ingest_batch(&self, session: &mut MergeSession, input_files: &[PathBuf]) {
        let progress_bar = ProgressBar::new(input_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result);
        progress_bar.set_message("Reading subtitle files");

        for path in input_files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.to_string_lossy().to_string());
            progress_bar.set_message(format!("Reading: {}", name));

            match self.ingest_one(session, path, &name).await {
                Ok(()) => {}
                Err(e) => match e {
                    IngestError::DuplicateName(_) => warn!("{}", e),
                    _ => error!("{}", e),
                },
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
    }

    async fn ingest_one(
        &self,
        session: &mut MergeSession,
        path: &Path,
        name: &str,
    ) -> Result<(), IngestError> {
        let raw_text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| IngestError::Read {
                name: name.to_string(),
                source,
            })?;

        // Explicit inputs without the .srt extension must at least look like SubRip
        if !FileManager::is_srt_path(path) && !FileManager::looks_like_srt(&raw_text) {
            return Err(IngestError::NoEntries(name.to_string()));
        }

        let size_bytes = raw_text.len() as u64;
        let file = session.ingest(name, size_bytes, &raw_text)?;
        info!("Added {}", file);
        Ok(())
    }

    fn log_summary(
        &self,
        output: &MergeOutput,
        file_count: usize,
        output_path: &Path,
        elapsed: std::time::Duration,
    ) {
        info!(
            "Merged {} files into {} entries, total duration {}",
            file_count,
            output.entry_count,
            format_duration(output.duration_ms)
        );
        info!("Wrote {:?} in {:.2}s", output_path, elapsed.as_secs_f64());
    }
}
