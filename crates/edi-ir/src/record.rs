//! Record types for the normalized model
//!
//! One plain struct per category. Every field is optional text; a record is
//! always fully shaped, so absent values serialize as `null`.

use serde::{Deserialize, Serialize};

/// Message header (UNB/UNH, ENV001, `anxs_message.header`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHeader {
    pub sender_id: Option<String>,
    pub recipient_id: Option<String>,
    pub message_reference_number: Option<String>,
    pub message_type: Option<String>,
    pub version_number: Option<String>,
}

/// Beginning of message (BGM)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeginningOfMessage {
    pub message_name_code: Option<String>,
    pub document_message_number: Option<String>,
    pub message_function_code: Option<String>,
}

/// Date/time/period (DTM)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimePeriod {
    pub qualifier: Option<String>,
    pub period: Option<String>,
}

/// Free text (FTX, and location names)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeText {
    pub qualifier: Option<String>,
    pub text: Option<String>,
}

/// Reference (RFF, and location codes)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub qualifier: Option<String>,
    pub number: Option<String>,
}

/// Details of transport (TDT)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportDetails {
    pub stage_qualifier: Option<String>,
    pub mode_of_transport: Option<String>,
    pub carrier_id: Option<String>,
    pub carrier_name: Option<String>,
    pub transport_id: Option<String>,
    pub transport_name: Option<String>,
    pub transport_nationality: Option<String>,
}

/// Name and address (NAD)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAndAddress {
    pub party_qualifier: Option<String>,
    pub party_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Goods item details (GID, split goods placement)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodsItemDetails {
    pub item_number: Option<String>,
    pub number_of_packages: Option<String>,
    pub type_of_packages: Option<String>,
}

/// Measurements (MEA)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurements {
    pub dimension_code: Option<String>,
    pub value: Option<String>,
}

/// Equipment details (EQD)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentDetails {
    pub qualifier: Option<String>,
    pub id_number: Option<String>,
    pub size_and_type: Option<String>,
}
