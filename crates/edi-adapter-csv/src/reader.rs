//! CSV reader for message tables

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, error, trace};

use crate::config::CsvConfig;
use crate::errors::{CsvError, CsvResult};

/// One data row of a message table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    /// Zero-based position among the data rows
    pub index: usize,
    /// Format tag cell, untouched
    pub format: String,
    /// Raw message cell, untouched
    pub content: String,
}

/// Reader for tables of raw messages
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    config: CsvConfig,
}

impl CsvReader {
    /// Create a new CSV reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: CsvConfig) -> Self {
        self.config = config;
        self
    }

    /// Read all rows from any reader.
    ///
    /// The header row must name both the format and the content column.
    /// Other columns are ignored; a cell missing from a short row reads as
    /// empty.
    pub fn read<R: Read>(&self, reader: R) -> CsvResult<Vec<MessageRow>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter_u8())
            .quote(self.config.quote_char_u8())
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let format_idx = column_index(&headers, &self.config.format_column)?;
        let content_idx = column_index(&headers, &self.config.content_column)?;
        debug!(format_idx, content_idx, "Resolved message table columns");

        let mut rows = Vec::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record.map_err(CsvError::from).inspect_err(|e| {
                error!(line = ?e.line_number(), error = %e, "Malformed message table row");
            })?;
            let row = MessageRow {
                index,
                format: record.get(format_idx).unwrap_or_default().to_string(),
                content: record.get(content_idx).unwrap_or_default().to_string(),
            };
            trace!(index, format = %row.format, "Read message row");
            rows.push(row);
        }

        debug!(rows = rows.len(), "Read message table");
        Ok(rows)
    }

    /// Read all rows from a file on disk
    pub fn read_path(&self, path: &Path) -> CsvResult<Vec<MessageRow>> {
        debug!(path = %path.display(), "Opening message table");
        let file = File::open(path)?;
        self.read(file)
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> CsvResult<usize> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or_else(|| CsvError::missing_column(name))
}

/// Locate the message table in a directory.
///
/// Picks the first `*.csv` entry in file-name order; a path that is
/// already a file is returned unchanged.
pub fn find_csv_file(input: &Path) -> CsvResult<PathBuf> {
    if input.is_file() {
        return Ok(input.to_path_buf());
    }

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(input)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            candidates.push(path);
        }
    }
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| CsvError::NoInputFile {
            dir: input.to_path_buf(),
        })
}
