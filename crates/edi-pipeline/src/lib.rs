#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # edi-pipeline
//!
//! Format dispatch, batch processing, and JSON output.
//!
//! Rows read from a message table are routed to the parser named by their
//! format tag, and every normalized model is written to its own JSON file.

pub mod format;
pub mod pipeline;
pub mod writer;

pub use format::Format;
pub use pipeline::{Pipeline, PipelineBatchResult, PipelineConfig, PipelineStats, RowOutcome};
pub use writer::JsonWriter;

use thiserror::Error;

/// Errors that can occur in the pipeline
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("IO error during {operation} for '{path}': {message}")]
    Io {
        operation: String,
        path: String,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Worker task failed: {0}")]
    Join(String),
}

impl Error {
    /// Create a structured I/O error with operation/path context.
    pub fn io(
        operation: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Io {
            operation: operation.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("io", "<unknown>", e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialize(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
