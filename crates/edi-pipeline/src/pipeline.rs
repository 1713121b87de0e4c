//! Pipeline orchestration
//!
//! This module provides the main Pipeline for routing message rows to
//! their parsers and writing the normalized output, either sequentially
//! or across a bounded pool of blocking workers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use edi_adapter_csv::MessageRow;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::{Error, Format, JsonWriter, Result};

/// Configuration for the pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory receiving one JSON file per processed row
    pub output_dir: PathBuf,
    /// Maximum number of rows parsed at the same time
    pub workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            workers: 1,
        }
    }
}

/// What happened to a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Parsed and written
    Written {
        index: usize,
        format: Format,
        path: PathBuf,
    },
    /// Format tag not recognized; nothing parsed
    Skipped { index: usize, tag: String },
    /// Parsed, but the output file could not be written
    WriteFailed {
        index: usize,
        format: Format,
        error: String,
    },
}

impl RowOutcome {
    /// Data-row index this outcome belongs to
    pub fn index(&self) -> usize {
        match self {
            Self::Written { index, .. }
            | Self::Skipped { index, .. }
            | Self::WriteFailed { index, .. } => *index,
        }
    }

    /// Written file path, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Written { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Statistics for a processed batch
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PipelineStats {
    /// Rows seen
    pub rows: usize,
    /// Rows written to disk
    pub written: usize,
    /// Rows with an unknown format tag
    pub skipped: usize,
    /// Rows whose output could not be written
    pub failed_writes: usize,
}

impl PipelineStats {
    fn record(&mut self, outcome: &RowOutcome) {
        self.rows += 1;
        match outcome {
            RowOutcome::Written { .. } => self.written += 1,
            RowOutcome::Skipped { .. } => self.skipped += 1,
            RowOutcome::WriteFailed { .. } => self.failed_writes += 1,
        }
    }
}

/// Result of processing a batch of rows
#[derive(Debug, Clone)]
pub struct PipelineBatchResult {
    /// One outcome per input row, in input order
    pub outcomes: Vec<RowOutcome>,
    /// Aggregated counters
    pub stats: PipelineStats,
    /// Total processing time
    pub total_duration: Duration,
}

impl PipelineBatchResult {
    fn from_outcomes(outcomes: Vec<RowOutcome>, started: Instant) -> Self {
        let mut stats = PipelineStats::default();
        for outcome in &outcomes {
            stats.record(outcome);
        }
        Self {
            outcomes,
            stats,
            total_duration: started.elapsed(),
        }
    }

    /// Paths of every written file, in input order
    pub fn written_paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.iter().filter_map(RowOutcome::path)
    }
}

/// Main pipeline for processing message rows
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    writer: JsonWriter,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        let writer = JsonWriter::new(config.output_dir.clone());
        Self { config, writer }
    }

    /// Create a pipeline with default configuration
    pub fn with_defaults() -> Self {
        Self::new(PipelineConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Parse and write one row.
    ///
    /// Unknown format tags and write failures are logged and reported in
    /// the outcome; neither aborts the caller.
    pub fn process_row(&self, row: &MessageRow) -> RowOutcome {
        let Some(format) = Format::from_tag(&row.format) else {
            warn!(index = row.index, tag = %row.format, "Unknown format, skipping row");
            return RowOutcome::Skipped {
                index: row.index,
                tag: row.format.clone(),
            };
        };

        debug!(index = row.index, %format, "Processing row");
        let model = format.parse(&row.content);

        match self.writer.write(&model) {
            Ok(path) => {
                info!(index = row.index, path = %path.display(), "Saved parsed data");
                RowOutcome::Written {
                    index: row.index,
                    format,
                    path,
                }
            }
            Err(e) => {
                error!(index = row.index, error = %e, "Failed to write parsed data");
                RowOutcome::WriteFailed {
                    index: row.index,
                    format,
                    error: e.to_string(),
                }
            }
        }
    }

    /// Process rows one after another
    pub fn process_batch(&self, rows: &[MessageRow]) -> PipelineBatchResult {
        let start = Instant::now();
        let outcomes = rows.iter().map(|row| self.process_row(row)).collect();
        let result = PipelineBatchResult::from_outcomes(outcomes, start);
        log_summary(&result);
        result
    }

    /// Process rows on blocking worker tasks.
    ///
    /// At most `workers` rows are in flight at once. Outcomes are returned
    /// in input order regardless of completion order.
    pub async fn process_batch_concurrent(
        &self,
        rows: Vec<MessageRow>,
    ) -> Result<PipelineBatchResult> {
        let start = Instant::now();
        let total = rows.len();
        let semaphore = Arc::new(Semaphore::new(self.config.workers.max(1)));
        let pipeline = Arc::new(self.clone());
        let mut tasks = JoinSet::new();

        for (position, row) in rows.into_iter().enumerate() {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .map_err(|e| Error::Join(e.to_string()))?;
            let pipeline = Arc::clone(&pipeline);
            tasks.spawn_blocking(move || {
                let _permit = permit;
                (position, pipeline.process_row(&row))
            });
        }

        let mut slots: Vec<Option<RowOutcome>> = vec![None; total];
        while let Some(joined) = tasks.join_next().await {
            let (position, outcome) = joined.map_err(|e| Error::Join(e.to_string()))?;
            slots[position] = Some(outcome);
        }

        let outcomes = slots.into_iter().flatten().collect();
        let result = PipelineBatchResult::from_outcomes(outcomes, start);
        log_summary(&result);
        Ok(result)
    }
}

fn log_summary(result: &PipelineBatchResult) {
    let stats = &result.stats;
    info!(
        rows = stats.rows,
        written = stats.written,
        skipped = stats.skipped,
        failed_writes = stats.failed_writes,
        elapsed_ms = result.total_duration.as_millis(),
        "Batch complete"
    );
}
