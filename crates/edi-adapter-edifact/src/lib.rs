//! # edi-adapter-edifact
//!
//! EDIFACT parser producing the normalized record model.
//!
//! Segments are split on the segment terminator, dispatched by tag, and
//! mapped onto [`edi_ir::NormalizedRecordModel`] categories. A leading UNA
//! service string advice overrides the default separators.

pub mod parser;
pub mod syntax;

pub use parser::{EdifactParser, Segment};
pub use syntax::Separators;

use thiserror::Error;

/// Errors that can occur when parsing EDIFACT
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Syntax error: {0}")]
    Syntax(String),
}

pub type Result<T> = std::result::Result<T, Error>;
