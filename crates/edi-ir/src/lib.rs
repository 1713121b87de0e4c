#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # edi-ir
//!
//! Normalized record model shared by the EDIFACT, EDIXML and EDISIMPLEX
//! adapters.
//!
//! Every adapter turns one raw message into a [`NormalizedRecordModel`]: ten
//! ordered record sequences keyed by semantic category, independent of the
//! source format.

/// Bounds-safe accessors used by every adapter.
pub mod access;
/// Model container, categories, and the amend-last operation.
pub mod model;
/// Plain record structs, one per category.
pub mod record;

pub use access::{component_at, field_at, leaf_text, trimmed_field_at};
pub use model::{Category, NormalizedRecordModel, amend_last};
pub use record::{
    BeginningOfMessage, DateTimePeriod, EquipmentDetails, FreeText, GoodsItemDetails,
    MessageHeader, Measurements, NameAndAddress, Reference, TransportDetails,
};

use thiserror::Error;

/// Errors that can occur when working with the normalized model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No {category} record to amend")]
    NoRecordToAmend { category: Category },
}

/// Crate-local result type for model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A parser for one source format
///
/// Implementations are stateless: every call starts from an empty model and
/// never fails, returning a partially populated model when the input is
/// damaged.
pub trait MessageParser: Send + Sync {
    /// Literal format tag this parser handles (e.g. `EDIFACT`)
    fn format_name(&self) -> &'static str;

    /// Parse one raw message into a normalized model
    fn parse(&self, raw: &str) -> NormalizedRecordModel;
}
