//! # edi-adapter-xml
//!
//! Parser for the XML rendition of the COPARN message (EDIXML).
//!
//! The document is parsed into a tree with `roxmltree`; fixed group paths
//! are then read into the normalized record model.

pub mod parser;
pub mod paths;
pub mod tree;

pub use parser::XmlParser;

use thiserror::Error;

/// Errors that can occur when parsing EDIXML
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Missing required element: {path}")]
    MissingElement { path: String },
}

impl Error {
    /// Build a missing-element error for `path` below `parent`
    pub fn missing_element(parent: &str, path: &str) -> Self {
        Self::MissingElement {
            path: format!("{parent}/{path}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
