//! # edi-cli
//!
//! Command-line driver for normalizing EDI message tables.
//!
//! `edi run` reads a CSV table of raw messages and writes one JSON file per
//! row; `edi parse` normalizes a single message file to stdout.

mod config;
mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use edi_adapter_csv::{CsvReader, find_csv_file};
use edi_pipeline::{Format, JsonWriter, Pipeline, PipelineBatchResult};
use thiserror::Error;
use tracing::{error, info};

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "edi")]
#[command(about = "Normalize EDIFACT, EDIXML and EDISIMPLEX messages to JSON")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize every row of a message table
    Run {
        /// CSV file, or directory containing one
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory receiving the JSON files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Number of rows parsed concurrently
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Normalize a single raw message file
    Parse {
        /// Message file path
        input: PathBuf,

        /// Format tag (EDIFACT, EDIXML, EDISIMPLEX)
        #[arg(short, long)]
        format: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Failure classes, each with its own exit code
#[derive(Debug, Error)]
enum CliError {
    #[error("{0:#}")]
    Config(anyhow::Error),

    #[error("{0:#}")]
    Input(anyhow::Error),

    #[error("{0:#}")]
    Runtime(anyhow::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Runtime(_) => 1,
            Self::Input(_) => 2,
            Self::Config(_) => 3,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };

    // Held until the process exits so the final error reaches the log file
    let _guard = match logging::init(&config.log_file, &config.log_level) {
        Ok(guard) => guard,
        Err(e) => return fail(&CliError::Config(e)),
    };

    match execute(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            fail(&e)
        }
    }
}

fn fail(e: &CliError) -> ExitCode {
    eprintln!("ERROR: {e}");
    ExitCode::from(e.exit_code())
}

fn load_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let mut config = CliConfig::load_or_default(cli.config.as_deref())
        .map_err(|e| CliError::Config(e.into()))?;

    if let Commands::Run {
        input,
        output_dir,
        workers,
    } = &cli.command
    {
        if let Some(input) = input {
            config.input.clone_from(input);
        }
        if let Some(output_dir) = output_dir {
            config.output_dir.clone_from(output_dir);
        }
        if let Some(workers) = workers {
            config.workers = *workers;
        }
    }
    config.validate().map_err(|e| CliError::Config(e.into()))?;

    Ok(config)
}

async fn execute(command: Commands, config: &CliConfig) -> Result<(), CliError> {
    match command {
        Commands::Run { .. } => run_batch(config).await,
        Commands::Parse {
            input,
            format,
            pretty,
        } => parse_one(&input, &format, pretty),
    }
}

async fn run_batch(config: &CliConfig) -> Result<(), CliError> {
    let table = find_csv_file(&config.input)
        .with_context(|| format!("no input table at '{}'", config.input.display()))
        .map_err(CliError::Input)?;
    info!(path = %table.display(), "Reading message table");

    let rows = CsvReader::new()
        .with_config(config.csv_config())
        .read_path(&table)
        .with_context(|| format!("failed to read '{}'", table.display()))
        .map_err(CliError::Input)?;

    let pipeline = Pipeline::new(config.pipeline_config());
    let result = if config.workers > 1 {
        pipeline
            .process_batch_concurrent(rows)
            .await
            .map_err(|e| CliError::Runtime(e.into()))?
    } else {
        pipeline.process_batch(&rows)
    };

    report(&result);
    Ok(())
}

fn report(result: &PipelineBatchResult) {
    for path in result.written_paths() {
        println!("Saved parsed data to {}", path.display());
    }

    let stats = &result.stats;
    eprintln!(
        "Run summary: rows={}, written={}, skipped={}, failed_writes={}",
        stats.rows, stats.written, stats.skipped, stats.failed_writes
    );
}

fn parse_one(input: &Path, tag: &str, pretty: bool) -> Result<(), CliError> {
    let format = Format::from_tag(tag)
        .ok_or_else(|| anyhow::anyhow!("unknown format '{tag}'"))
        .map_err(CliError::Input)?;

    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read '{}'", input.display()))
        .map_err(CliError::Input)?;

    let model = format.parse(&raw);
    let json = if pretty {
        JsonWriter::to_json(&model).map_err(|e| CliError::Runtime(e.into()))?
    } else {
        serde_json::to_string(&model).map_err(|e| CliError::Runtime(e.into()))?
    };

    println!("{json}");
    Ok(())
}
