//! Error types for CSV adapter with context

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading a message table
#[derive(Error, Debug, Clone)]
pub enum CsvError {
    /// CSV read error with context
    #[error("CSV read error at line {line}: {message}")]
    Read { line: usize, message: String },

    /// A required header column is absent
    #[error("Missing column '{column}' in CSV header")]
    MissingColumn { column: String },

    /// No CSV file in the input directory
    #[error("No CSV file found in the directory {}", dir.display())]
    NoInputFile { dir: PathBuf },

    /// I/O error
    #[error("IO error: {0}")]
    Io(String),
}

impl CsvError {
    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Get the line number if available
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Read { line, .. } if *line > 0 => Some(*line),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CsvError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<csv::Error> for CsvError {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map_or(0, |p| p.line() as usize);
        if e.is_io_error() {
            return Self::Io(e.to_string());
        }
        Self::Read {
            line,
            message: e.to_string(),
        }
    }
}

/// Result type alias for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;
