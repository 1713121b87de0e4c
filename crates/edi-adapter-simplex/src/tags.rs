//! EDISIMPLEX tag vocabulary and fixed qualifier mappings

/// Element separator within a line
pub const ELEMENT_SEPARATOR: char = '^';

/// Interchange envelope: sender and recipient
pub const ENVELOPE: &str = "ENV001";
/// Opens the booking: creates the beginning-of-message record
pub const BOOKING_OPEN: &str = "COPE02000";
/// Completes the beginning-of-message record created by [`BOOKING_OPEN`]
pub const BOOKING_DETAILS: &str = "COPE02001";
pub const DOCUMENT_DATE: &str = "COPE02002";
pub const HEADER_TEXT: &str = "COPE02003";
pub const HEADER_REFERENCE: &str = "COPE02004";
pub const TRANSPORT: &str = "COPE02005";
pub const LOCATION: &str = "COPE02006";
pub const ARRIVAL_DATE: &str = "COPE02007";
pub const PARTY: &str = "COPE02008";
pub const GOODS_ITEM: &str = "COPE02010";
pub const GOODS_DESCRIPTION: &str = "COPE02011";
pub const GOODS_TEXT: &str = "COPE02012";
pub const GOODS_MEASUREMENT: &str = "COPE02013";
pub const GOODS_REFERENCE: &str = "COPE02014";
pub const EQUIPMENT: &str = "COPE02017";
pub const EQUIPMENT_REFERENCE: &str = "COPE02018";
/// Recognized, carries nothing the model stores
pub const TRAILER: &str = "COPE02024";

/// Message type every EDISIMPLEX interchange carries
pub const DEFAULT_MESSAGE_TYPE: &str = "COPARN";
/// Document name code set when the booking details line is applied
pub const DEFAULT_MESSAGE_NAME_CODE: &str = "135";
/// DTM qualifier for [`DOCUMENT_DATE`] (document/message date/time)
pub const DOCUMENT_DATE_QUALIFIER: &str = "137";
/// DTM qualifier for [`ARRIVAL_DATE`] (estimated arrival)
pub const ARRIVAL_DATE_QUALIFIER: &str = "133";

/// Every tag the parser recognizes
pub const KNOWN_TAGS: [&str; 18] = [
    ENVELOPE,
    BOOKING_OPEN,
    BOOKING_DETAILS,
    DOCUMENT_DATE,
    HEADER_TEXT,
    HEADER_REFERENCE,
    TRANSPORT,
    LOCATION,
    ARRIVAL_DATE,
    PARTY,
    GOODS_ITEM,
    GOODS_DESCRIPTION,
    GOODS_TEXT,
    GOODS_MEASUREMENT,
    GOODS_REFERENCE,
    EQUIPMENT,
    EQUIPMENT_REFERENCE,
    TRAILER,
];

/// True when `tag` belongs to the EDISIMPLEX vocabulary
pub fn is_known(tag: &str) -> bool {
    KNOWN_TAGS.contains(&tag)
}
