//! YAML configuration for the `edi` binary

use std::fs;
use std::path::{Path, PathBuf};

use edi_adapter_csv::CsvConfig;
use edi_pipeline::PipelineConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config value for '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}

impl ConfigError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

/// Settings for a run; every field has a default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// CSV file, or directory searched for one
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
    /// Fallback filter when `RUST_LOG` is unset
    pub log_level: String,
    pub workers: usize,
    pub format_column: String,
    pub content_column: String,
    pub delimiter: char,
    pub quote: char,
}

impl Default for CliConfig {
    fn default() -> Self {
        let csv = CsvConfig::default();
        Self {
            input: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            log_file: PathBuf::from("log/file.log"),
            log_level: "info".to_string(),
            workers: 1,
            format_column: csv.format_column,
            content_column: csv.content_column,
            delimiter: csv.delimiter,
            quote: csv.quote_char,
        }
    }
}

impl CliConfig {
    /// Load from a YAML file. An empty file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Load from `path` when given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Reject values no run could succeed with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::invalid("workers", "must be at least 1"));
        }
        if !self.delimiter.is_ascii() {
            return Err(ConfigError::invalid(
                "delimiter",
                format!("'{}' is not an ASCII character", self.delimiter),
            ));
        }
        if !self.quote.is_ascii() {
            return Err(ConfigError::invalid(
                "quote",
                format!("'{}' is not an ASCII character", self.quote),
            ));
        }
        if self.format_column.trim().is_empty() {
            return Err(ConfigError::invalid("format_column", "must not be empty"));
        }
        if self.content_column.trim().is_empty() {
            return Err(ConfigError::invalid("content_column", "must not be empty"));
        }
        if self.log_file.file_name().is_none() {
            return Err(ConfigError::invalid("log_file", "must name a file"));
        }
        Ok(())
    }

    /// Reader settings for the input table
    pub fn csv_config(&self) -> CsvConfig {
        CsvConfig::new()
            .delimiter(self.delimiter)
            .quote_char(self.quote)
            .format_column(self.format_column.clone())
            .content_column(self.content_column.clone())
    }

    /// Output and concurrency settings for the pipeline
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            output_dir: self.output_dir.clone(),
            workers: self.workers,
        }
    }
}
