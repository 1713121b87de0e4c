//! EDIFACT parser
//!
//! Splits a message into segments, dispatches each segment by tag, and
//! appends the extracted records to a [`NormalizedRecordModel`].

use edi_ir::{
    BeginningOfMessage, DateTimePeriod, EquipmentDetails, FreeText, GoodsItemDetails,
    MessageHeader, MessageParser, Measurements, NameAndAddress, NormalizedRecordModel, Reference,
    TransportDetails, component_at,
};
use tracing::{debug, error, info};

use crate::Result;
use crate::syntax::Separators;

/// Format tag handled by this parser
pub const FORMAT_NAME: &str = "EDIFACT";

/// One segment split into elements
///
/// Element 0 is the tag element, so data element `n` sits at index `n`.
/// Values are kept escaped until they are extracted.
#[derive(Debug, Clone)]
pub struct Segment<'a> {
    /// Segment tag (text of element 0 before the first component separator)
    pub tag: String,
    /// Raw elements including the tag element
    pub elements: Vec<&'a str>,
    /// 1-based position of the segment in the message
    pub position: usize,
    separators: Separators,
}

impl<'a> Segment<'a> {
    /// Split one trimmed segment text
    pub fn new(text: &'a str, position: usize, separators: Separators) -> Self {
        let elements = separators.split(text, separators.element);
        let tag = separators
            .split(elements.first().copied().unwrap_or_default(), separators.component)
            .first()
            .map(|t| t.trim().to_string())
            .unwrap_or_default();

        Self {
            tag,
            elements,
            position,
            separators,
        }
    }

    /// Raw (still escaped) element at `index`
    pub fn raw(&self, index: usize) -> Option<&'a str> {
        self.elements.get(index).copied()
    }

    /// Element value at `index`, or `None` when the segment is shorter
    pub fn element(&self, index: usize) -> Option<String> {
        self.raw(index).map(|v| self.separators.unescape(v))
    }

    /// Raw components of the element at `index` (empty when absent)
    pub fn components(&self, index: usize) -> Vec<&'a str> {
        self.raw(index)
            .map(|v| self.separators.split(v, self.separators.component))
            .unwrap_or_default()
    }

    /// Component `component` of element `index`
    pub fn component(&self, index: usize, component: usize) -> Option<String> {
        edi_ir::field_at(&self.components(index), component).map(|v| self.separators.unescape(&v))
    }

    fn unescape(&self, value: &str) -> String {
        self.separators.unescape(value)
    }
}

/// Sender/recipient captured from UNB, consumed by each following UNH
#[derive(Debug, Default)]
struct Interchange {
    sender_id: Option<String>,
    recipient_id: Option<String>,
}

/// Parser for EDIFACT messages
#[derive(Debug, Clone, Copy, Default)]
pub struct EdifactParser;

impl EdifactParser {
    /// Create a new EDIFACT parser
    pub fn new() -> Self {
        Self
    }

    /// Parse `raw`, returning whatever was built when a fault occurs
    pub fn parse(&self, raw: &str) -> NormalizedRecordModel {
        let mut model = NormalizedRecordModel::new();
        match self.parse_into(raw, &mut model) {
            Ok(()) => info!("EDIFACT message parsed successfully"),
            Err(e) => error!(error = %e, "Error parsing EDIFACT message"),
        }
        model
    }

    /// Parse `raw` into `model`, surfacing structural faults
    ///
    /// Records appended before the fault stay in `model`.
    pub fn parse_into(&self, raw: &str, model: &mut NormalizedRecordModel) -> Result<()> {
        let (separators, body) = Separators::detect(raw.trim())?;
        let mut interchange = Interchange::default();

        let segments = separators
            .split(body, separators.segment)
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(i, text)| Segment::new(text, i + 1, separators));

        for segment in segments {
            debug!(
                position = segment.position,
                tag = %segment.tag,
                "Parsing segment"
            );

            match segment.tag.as_str() {
                "UNB" => {
                    interchange.sender_id = segment.component(2, 0);
                    interchange.recipient_id = segment.component(3, 0);
                }
                "UNH" => model.message_header.push(MessageHeader {
                    sender_id: interchange.sender_id.clone(),
                    recipient_id: interchange.recipient_id.clone(),
                    message_reference_number: segment.element(1),
                    message_type: segment.component(2, 0),
                    version_number: segment.component(2, 1),
                }),
                "BGM" => model.beginning_of_message.push(BeginningOfMessage {
                    message_name_code: segment.element(1),
                    document_message_number: segment.element(2),
                    message_function_code: segment.element(3),
                }),
                "DTM" => model.date_time_period.push(DateTimePeriod {
                    qualifier: segment.component(1, 0),
                    period: segment.component(1, 1),
                }),
                "FTX" => model.free_text.push(FreeText {
                    qualifier: segment.element(1),
                    text: segment.element(4),
                }),
                "RFF" => model.references.push(Reference {
                    qualifier: segment.component(1, 0),
                    number: segment.component(1, 1),
                }),
                "TDT" => model.transport_details.push(transport_details(&segment)),
                "LOC" => {
                    let (reference, free_text) = location(&segment);
                    model.references.push(reference);
                    model.free_text.push(free_text);
                }
                "NAD" => model.name_and_address.push(NameAndAddress {
                    party_qualifier: segment.element(1),
                    party_id: segment.component(2, 0),
                    name: segment.element(3),
                    address: segment.element(5),
                    city: segment.element(6),
                    country: segment.element(9),
                }),
                "GID" => model.goods_item_details.push(goods_item(&segment)),
                "MEA" => model.measurements.push(Measurements {
                    dimension_code: segment.element(2),
                    value: segment.component(3, 1),
                }),
                "EQD" => model.equipment_details.push(EquipmentDetails {
                    qualifier: segment.element(1),
                    id_number: segment.element(2),
                    size_and_type: segment.element(3),
                }),
                _ => {}
            }
        }

        Ok(())
    }
}

impl MessageParser for EdifactParser {
    fn format_name(&self) -> &'static str {
        FORMAT_NAME
    }

    fn parse(&self, raw: &str) -> NormalizedRecordModel {
        EdifactParser::parse(self, raw)
    }
}

/// TDT: carrier in element 5 and means of transport in element 8, both using
/// a triple component separator between identifier and name. The transport
/// name is read from the identifier token, split at its last component
/// separator into name and nationality.
fn transport_details(segment: &Segment<'_>) -> TransportDetails {
    let marker = segment.separators.triple_component();
    let carrier = segment.raw(5);
    let transport_token = component_at(segment.raw(8), &marker, 0);

    let (transport_name, transport_nationality) = match transport_token.as_deref() {
        Some(token) => match token.rsplit_once(segment.separators.component) {
            Some((name, nationality)) => {
                (Some(segment.unescape(name)), Some(segment.unescape(nationality)))
            }
            None => (Some(segment.unescape(token)), None),
        },
        None => (None, None),
    };

    TransportDetails {
        stage_qualifier: segment.element(1),
        mode_of_transport: segment.element(3),
        carrier_id: component_at(carrier, &marker, 0).map(|v| segment.unescape(&v)),
        carrier_name: component_at(carrier, &marker, 1).map(|v| segment.unescape(&v)),
        transport_id: transport_token.map(|v| segment.unescape(&v)),
        transport_name,
        transport_nationality,
    }
}

/// LOC: the location code becomes a reference, the trailing name components
/// (index 3 onward) become free text.
fn location(segment: &Segment<'_>) -> (Reference, FreeText) {
    let qualifier = segment.element(1);
    let components = segment.components(2);

    let name = (components.len() > 3).then(|| {
        let separator = segment.separators.component.to_string();
        segment.unescape(&components[3..].join(&separator))
    });

    (
        Reference {
            qualifier: qualifier.clone(),
            number: segment.component(2, 0),
        },
        FreeText {
            qualifier,
            text: name,
        },
    )
}

/// GID: package type is only read when element 2 is a composite.
fn goods_item(segment: &Segment<'_>) -> GoodsItemDetails {
    let packages = segment.components(2);

    GoodsItemDetails {
        item_number: segment.element(1),
        number_of_packages: segment.component(2, 0),
        type_of_packages: if packages.len() > 1 {
            segment.component(2, 1)
        } else {
            None
        },
    }
}
