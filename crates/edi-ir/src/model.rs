//! The normalized record model
//!
//! A `NormalizedRecordModel` maps each [`Category`] to an ordered sequence of
//! records. Insertion order is segment encounter order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::{
    BeginningOfMessage, DateTimePeriod, EquipmentDetails, FreeText, GoodsItemDetails,
    MessageHeader, Measurements, NameAndAddress, Reference, TransportDetails,
};
use crate::{Error, Result};

/// Categories of the normalized model, in serialization order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MessageHeader,
    BeginningOfMessage,
    DateTimePeriod,
    FreeText,
    References,
    TransportDetails,
    NameAndAddress,
    GoodsItemDetails,
    Measurements,
    EquipmentDetails,
}

impl Category {
    /// All categories in model order
    pub const ALL: [Category; 10] = [
        Category::MessageHeader,
        Category::BeginningOfMessage,
        Category::DateTimePeriod,
        Category::FreeText,
        Category::References,
        Category::TransportDetails,
        Category::NameAndAddress,
        Category::GoodsItemDetails,
        Category::Measurements,
        Category::EquipmentDetails,
    ];

    /// Key used for this category in serialized output
    pub fn as_str(self) -> &'static str {
        match self {
            Category::MessageHeader => "message_header",
            Category::BeginningOfMessage => "beginning_of_message",
            Category::DateTimePeriod => "date_time_period",
            Category::FreeText => "free_text",
            Category::References => "references",
            Category::TransportDetails => "transport_details",
            Category::NameAndAddress => "name_and_address",
            Category::GoodsItemDetails => "goods_item_details",
            Category::Measurements => "measurements",
            Category::EquipmentDetails => "equipment_details",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format-independent output of every parser
///
/// All ten categories are always present; any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecordModel {
    pub message_header: Vec<MessageHeader>,
    pub beginning_of_message: Vec<BeginningOfMessage>,
    pub date_time_period: Vec<DateTimePeriod>,
    pub free_text: Vec<FreeText>,
    pub references: Vec<Reference>,
    pub transport_details: Vec<TransportDetails>,
    pub name_and_address: Vec<NameAndAddress>,
    pub goods_item_details: Vec<GoodsItemDetails>,
    pub measurements: Vec<Measurements>,
    pub equipment_details: Vec<EquipmentDetails>,
}

impl NormalizedRecordModel {
    /// Create an empty, fully shaped model
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held for a category
    pub fn len_of(&self, category: Category) -> usize {
        match category {
            Category::MessageHeader => self.message_header.len(),
            Category::BeginningOfMessage => self.beginning_of_message.len(),
            Category::DateTimePeriod => self.date_time_period.len(),
            Category::FreeText => self.free_text.len(),
            Category::References => self.references.len(),
            Category::TransportDetails => self.transport_details.len(),
            Category::NameAndAddress => self.name_and_address.len(),
            Category::GoodsItemDetails => self.goods_item_details.len(),
            Category::Measurements => self.measurements.len(),
            Category::EquipmentDetails => self.equipment_details.len(),
        }
    }

    /// Total number of records across all categories
    pub fn record_count(&self) -> usize {
        Category::ALL.iter().map(|c| self.len_of(*c)).sum()
    }

    /// True when no category holds a record
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

/// Borrow the last record of a category for in-place amendment
///
/// # Errors
///
/// Returns [`Error::NoRecordToAmend`] when the sequence is empty.
pub fn amend_last<T>(records: &mut [T], category: Category) -> Result<&mut T> {
    records
        .last_mut()
        .ok_or(Error::NoRecordToAmend { category })
}
