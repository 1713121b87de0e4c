//! JSON output writer

use std::fs;
use std::path::{Path, PathBuf};

use edi_ir::NormalizedRecordModel;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::{Error, Result};

const INDENT: &[u8] = b"    ";

/// Writes each normalized model to its own uniquely named JSON file
#[derive(Debug, Clone)]
pub struct JsonWriter {
    output_dir: PathBuf,
}

impl JsonWriter {
    /// Create a writer targeting the given directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory files are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render a model as pretty JSON with four-space indentation
    pub fn to_json(model: &NormalizedRecordModel) -> Result<String> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        model.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| Error::Serialize(e.to_string()))
    }

    /// Write a model to `<output_dir>/<uuid>.json`, creating the directory
    /// if needed, and return the written path
    pub fn write(&self, model: &NormalizedRecordModel) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            Error::io(
                "create_dir",
                self.output_dir.display().to_string(),
                e.to_string(),
            )
        })?;

        let json = Self::to_json(model)?;
        let path = self.output_dir.join(format!("{}.json", Uuid::new_v4()));
        trace!(path = %path.display(), bytes = json.len(), "Writing model");

        fs::write(&path, json)
            .map_err(|e| Error::io("write", path.display().to_string(), e.to_string()))?;

        debug!(path = %path.display(), records = model.record_count(), "Wrote model");
        Ok(path)
    }
}
