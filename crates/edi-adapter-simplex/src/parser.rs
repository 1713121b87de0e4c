//! EDISIMPLEX parser
//!
//! One line per segment, `^`-separated elements, values trimmed. Unlike the
//! other formats, one tag amends a record created by an earlier line instead
//! of appending a new one.

use edi_ir::{
    BeginningOfMessage, Category, DateTimePeriod, EquipmentDetails, FreeText, GoodsItemDetails,
    MessageHeader, MessageParser, Measurements, NameAndAddress, NormalizedRecordModel, Reference,
    TransportDetails, amend_last, trimmed_field_at,
};
use tracing::{debug, error, info};

use crate::tags;
use crate::{Error, Result};

/// Format tag handled by this parser
pub const FORMAT_NAME: &str = "EDISIMPLEX";

/// One line split into trimmed-on-read elements
#[derive(Debug, Clone)]
pub struct Line<'a> {
    /// 1-based line number within the message
    pub number: usize,
    /// Tag (element 0, trimmed)
    pub tag: &'a str,
    /// Raw elements including the tag element
    pub elements: Vec<&'a str>,
}

impl<'a> Line<'a> {
    /// Split one line on the caret separator
    pub fn new(text: &'a str, number: usize) -> Self {
        let elements: Vec<&str> = text.split(tags::ELEMENT_SEPARATOR).collect();
        let tag = elements.first().map_or("", |t| t.trim());
        Self {
            number,
            tag,
            elements,
        }
    }

    /// Trimmed value at `index`; missing or blank is `None`
    pub fn value(&self, index: usize) -> Option<String> {
        trimmed_field_at(&self.elements, index)
    }
}

/// Parser for EDISIMPLEX messages
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplexParser;

impl SimplexParser {
    /// Create a new EDISIMPLEX parser
    pub fn new() -> Self {
        Self
    }

    /// Parse `raw`, returning whatever was built when a fault occurs
    pub fn parse(&self, raw: &str) -> NormalizedRecordModel {
        let mut model = NormalizedRecordModel::new();
        match self.parse_into(raw, &mut model) {
            Ok(()) => info!("EDISIMPLEX message parsed successfully"),
            Err(e) => error!(error = %e, "Error parsing EDISIMPLEX message"),
        }
        model
    }

    /// Parse `raw` into `model`, stopping at the first line that cannot be applied
    ///
    /// # Errors
    ///
    /// [`Error::Amend`] when a `COPE02001` line appears before any `COPE02000`
    /// line has created the record it completes. Records appended by earlier
    /// lines stay in `model`.
    pub fn parse_into(&self, raw: &str, model: &mut NormalizedRecordModel) -> Result<()> {
        let lines = raw
            .trim()
            .split('\n')
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(i, text)| Line::new(text, i + 1));

        for line in lines {
            if !tags::is_known(line.tag) {
                debug!(line = line.number, tag = line.tag, "Skipping unrecognized segment");
                continue;
            }
            debug!(line = line.number, tag = line.tag, "Parsing segment");
            apply_line(&line, model)?;
        }

        Ok(())
    }
}

impl MessageParser for SimplexParser {
    fn format_name(&self) -> &'static str {
        FORMAT_NAME
    }

    fn parse(&self, raw: &str) -> NormalizedRecordModel {
        SimplexParser::parse(self, raw)
    }
}

fn apply_line(line: &Line<'_>, model: &mut NormalizedRecordModel) -> Result<()> {
    match line.tag {
        tags::ENVELOPE => model.message_header.push(MessageHeader {
            sender_id: line.value(1),
            recipient_id: line.value(2),
            message_reference_number: None,
            message_type: Some(tags::DEFAULT_MESSAGE_TYPE.to_string()),
            version_number: None,
        }),
        tags::BOOKING_OPEN => model.beginning_of_message.push(BeginningOfMessage {
            document_message_number: line.value(1),
            ..Default::default()
        }),
        tags::BOOKING_DETAILS => {
            let record = amend_last(
                &mut model.beginning_of_message,
                Category::BeginningOfMessage,
            )
            .map_err(|source| Error::Amend {
                line: line.number,
                source,
            })?;
            record.message_name_code = Some(tags::DEFAULT_MESSAGE_NAME_CODE.to_string());
            record.document_message_number = line.value(1);
            record.message_function_code = line.value(2);
        }
        tags::DOCUMENT_DATE => model.date_time_period.push(DateTimePeriod {
            qualifier: Some(tags::DOCUMENT_DATE_QUALIFIER.to_string()),
            period: line.value(1),
        }),
        tags::ARRIVAL_DATE => model.date_time_period.push(DateTimePeriod {
            qualifier: Some(tags::ARRIVAL_DATE_QUALIFIER.to_string()),
            period: line.value(1),
        }),
        tags::HEADER_TEXT | tags::GOODS_TEXT => model.free_text.push(FreeText {
            qualifier: line.value(1),
            text: line.value(2),
        }),
        tags::GOODS_DESCRIPTION => model.free_text.push(FreeText {
            qualifier: None,
            text: line.value(1),
        }),
        tags::HEADER_REFERENCE | tags::GOODS_REFERENCE => model.references.push(Reference {
            qualifier: line.value(1),
            number: line.value(2),
        }),
        tags::EQUIPMENT_REFERENCE => model.references.push(Reference {
            qualifier: None,
            number: line.value(1),
        }),
        tags::TRANSPORT => model.transport_details.push(TransportDetails {
            stage_qualifier: line.value(1),
            mode_of_transport: line.value(2),
            carrier_id: line.value(3),
            carrier_name: line.value(4),
            transport_id: line.value(5),
            transport_name: line.value(6),
            transport_nationality: None,
        }),
        tags::LOCATION => {
            model.references.push(Reference {
                qualifier: line.value(1),
                number: line.value(2),
            });
            if line.elements.len() > 3 {
                model.free_text.push(FreeText {
                    qualifier: line.value(1),
                    text: line.value(3),
                });
            }
        }
        tags::PARTY => model.name_and_address.push(NameAndAddress {
            party_qualifier: line.value(1),
            party_id: line.value(2),
            name: line.value(3),
            address: line.value(4),
            city: line.value(5),
            country: line.value(6),
        }),
        tags::GOODS_ITEM => model.goods_item_details.push(GoodsItemDetails {
            item_number: line.value(1),
            number_of_packages: line.value(2),
            type_of_packages: line.value(3),
        }),
        tags::GOODS_MEASUREMENT => model.measurements.push(Measurements {
            dimension_code: None,
            value: line.value(1),
        }),
        tags::EQUIPMENT => model.equipment_details.push(EquipmentDetails {
            qualifier: line.value(1),
            id_number: line.value(2),
            size_and_type: line.value(3),
        }),
        tags::TRAILER => {}
        _ => {}
    }

    Ok(())
}
