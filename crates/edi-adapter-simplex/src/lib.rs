//! # edi-adapter-simplex
//!
//! Parser for EDISIMPLEX, a line-oriented proprietary encoding of the
//! COPARN booking message. Each line is one segment whose elements are
//! separated by `^`; element 0 is a literal tag such as `COPE02005`.

pub mod parser;
pub mod tags;

pub use parser::SimplexParser;

use thiserror::Error;

/// Errors that can occur when parsing EDISIMPLEX
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Cannot apply line {line}: {source}")]
    Amend {
        line: usize,
        #[source]
        source: edi_ir::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
