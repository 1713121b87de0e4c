//! EDIXML tree parser
//!
//! Reads the header and the repeating groups of a COPARN XML document into
//! the normalized record model. Absent optional nodes emit no record; absent
//! leaves become `None`. A missing required node stops the traversal and
//! leaves the categories read so far in place.

use edi_ir::{
    BeginningOfMessage, DateTimePeriod, EquipmentDetails, FreeText, GoodsItemDetails,
    MessageHeader, MessageParser, Measurements, NameAndAddress, NormalizedRecordModel, Reference,
    TransportDetails,
};
use roxmltree::{Document, Node};
use tracing::{error, info};

use crate::paths::{self, date, equipment, goods, header, measurement, party, reference, transport};
use crate::tree::{find, find_all, require, text};
use crate::{Error, Result};

/// Format tag handled by this parser
pub const FORMAT_NAME: &str = "EDIXML";

/// Parser for EDIXML documents
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlParser;

impl XmlParser {
    /// Create a new XML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse `raw`, returning whatever was built when a fault occurs
    pub fn parse(&self, raw: &str) -> NormalizedRecordModel {
        let mut model = NormalizedRecordModel::new();
        match self.parse_into(raw, &mut model) {
            Ok(()) => info!("XML parsed successfully"),
            Err(e @ Error::Xml(_)) => error!(error = %e, "Error parsing XML"),
            Err(e) => error!(error = %e, "Error parsing element"),
        }
        model
    }

    /// Parse `raw` into `model`
    ///
    /// # Errors
    ///
    /// [`Error::Xml`] for malformed markup (nothing is appended), and
    /// [`Error::MissingElement`] when the header, its interchange header, or a
    /// transport carrier is absent. Categories read before a missing element
    /// stay in `model`.
    pub fn parse_into(&self, raw: &str, model: &mut NormalizedRecordModel) -> Result<()> {
        let doc = Document::parse(raw)?;
        let root = doc.root_element();

        read_header(root, model)?;
        read_references(root, model);
        read_transport_groups(root, model)?;
        read_parties(root, model);
        read_goods_groups(root, model);
        read_equipment_groups(root, model);

        Ok(())
    }
}

impl MessageParser for XmlParser {
    fn format_name(&self) -> &'static str {
        FORMAT_NAME
    }

    fn parse(&self, raw: &str) -> NormalizedRecordModel {
        XmlParser::parse(self, raw)
    }
}

fn read_header(root: Node<'_, '_>, model: &mut NormalizedRecordModel) -> Result<()> {
    let head = require(root, paths::HEADER)?;

    let interchange = require(head, header::INTERCHANGE)?;
    let sender_id = text(interchange, header::SENDER);
    let recipient_id = text(interchange, header::RECIPIENT);

    if let Some(message) = find(head, header::MESSAGE) {
        model.message_header.push(MessageHeader {
            sender_id,
            recipient_id,
            message_reference_number: text(message, header::REFERENCE_NUMBER),
            message_type: text(message, header::MESSAGE_TYPE),
            version_number: text(message, header::VERSION),
        });
    }

    if let Some(beginning) = find(head, header::BEGINNING) {
        model.beginning_of_message.push(BeginningOfMessage {
            message_name_code: text(beginning, header::NAME_CODE),
            document_message_number: text(beginning, header::DOCUMENT_NUMBER),
            message_function_code: text(beginning, header::FUNCTION_CODE),
        });
    }

    read_dates(head, model);

    for ftx in find_all(head, header::FREE_TEXT) {
        model.free_text.push(FreeText {
            qualifier: text(ftx, header::TEXT_QUALIFIER),
            text: text(ftx, header::TEXT),
        });
    }

    Ok(())
}

fn read_dates(node: Node<'_, '_>, model: &mut NormalizedRecordModel) {
    for dtm in find_all(node, date::PERIOD_GROUP) {
        model.date_time_period.push(DateTimePeriod {
            qualifier: text(dtm, date::QUALIFIER),
            period: text(dtm, date::PERIOD),
        });
    }
}

fn read_references(root: Node<'_, '_>, model: &mut NormalizedRecordModel) {
    for group in find_all(root, paths::REFERENCE_GROUP) {
        for rff in find_all(group, reference::REFERENCE) {
            model.references.push(Reference {
                qualifier: text(rff, reference::QUALIFIER),
                number: text(rff, reference::NUMBER),
            });
        }
    }
}

fn read_transport_groups(root: Node<'_, '_>, model: &mut NormalizedRecordModel) -> Result<()> {
    for group in find_all(root, paths::TRANSPORT_GROUP) {
        if let Some(details) = find(group, transport::DETAILS) {
            let carrier = require(details, transport::CARRIER)?;

            model.transport_details.push(TransportDetails {
                stage_qualifier: text(details, transport::STAGE_QUALIFIER),
                mode_of_transport: text(details, transport::MODE),
                carrier_id: text(carrier, transport::CARRIER_ID),
                carrier_name: text(carrier, transport::CARRIER_NAME),
                transport_id: text(details, transport::TRANSPORT_ID),
                transport_name: text(details, transport::TRANSPORT_NAME),
                transport_nationality: text(details, transport::NATIONALITY),
            });
        }

        for loc in find_all(group, transport::LOCATION) {
            let qualifier = text(loc, transport::LOCATION_QUALIFIER);
            model.references.push(Reference {
                qualifier: qualifier.clone(),
                number: text(loc, transport::LOCATION_ID),
            });
            model.free_text.push(FreeText {
                qualifier,
                text: text(loc, transport::LOCATION_NAME),
            });
        }

        read_dates(group, model);
    }

    Ok(())
}

fn read_parties(root: Node<'_, '_>, model: &mut NormalizedRecordModel) {
    for group in find_all(root, paths::PARTY_GROUP) {
        if let Some(nad) = find(group, party::NAME_AND_ADDRESS) {
            model.name_and_address.push(NameAndAddress {
                party_qualifier: text(nad, party::QUALIFIER),
                party_id: text(nad, party::ID),
                name: text(nad, party::NAME),
                address: text(nad, party::STREET),
                city: text(nad, party::CITY),
                country: text(nad, party::COUNTRY),
            });
        }
    }
}

fn read_measurements(node: Node<'_, '_>, model: &mut NormalizedRecordModel) {
    for mea in find_all(node, measurement::MEASUREMENTS) {
        model.measurements.push(Measurements {
            dimension_code: text(mea, measurement::DIMENSION),
            value: text(mea, measurement::VALUE),
        });
    }
}

fn read_goods_groups(root: Node<'_, '_>, model: &mut NormalizedRecordModel) {
    for group in find_all(root, paths::GOODS_GROUP) {
        if let Some(item) = find(group, goods::ITEM) {
            model.goods_item_details.push(GoodsItemDetails {
                item_number: text(item, goods::ITEM_NUMBER),
                number_of_packages: text(item, goods::PACKAGES),
                type_of_packages: text(item, goods::PACKAGE_TYPE),
            });
        }

        read_measurements(group, model);

        // Split goods placements are listed as goods items without a package type
        for split in find_all(group, goods::SPLIT_PLACEMENT) {
            model.goods_item_details.push(GoodsItemDetails {
                item_number: text(split, goods::SPLIT_EQUIPMENT_ID),
                number_of_packages: text(split, goods::SPLIT_PACKAGES),
                type_of_packages: Some(String::new()),
            });
        }
    }
}

fn read_equipment_groups(root: Node<'_, '_>, model: &mut NormalizedRecordModel) {
    for group in find_all(root, paths::EQUIPMENT_GROUP) {
        if let Some(eqd) = find(group, equipment::DETAILS) {
            model.equipment_details.push(EquipmentDetails {
                qualifier: text(eqd, equipment::QUALIFIER),
                id_number: text(eqd, equipment::ID_NUMBER),
                size_and_type: text(eqd, equipment::SIZE_AND_TYPE),
            });
        }

        read_measurements(group, model);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> NormalizedRecordModel {
        XmlParser::new().parse(raw)
    }

    const HEADER_ONLY: &str = r"<COPARNE02>
  <COPARNE02.HEADER>
    <anxs_interchange.header>
      <anxe_sender.identification>SENDER</anxe_sender.identification>
      <anxe_recipient.identification>RECEIVER</anxe_recipient.identification>
    </anxs_interchange.header>
    <anxs_message.header>
      <anxe_message.reference.number>1</anxe_message.reference.number>
      <anxe_message.type>COPARN</anxe_message.type>
      <anxe_message.version.number>D</anxe_message.version.number>
    </anxs_message.header>
    <trsd_beginning.of.message>
      <tred_document.message.name.coded>126</tred_document.message.name.coded>
      <tred_document.message.number>BK123</tred_document.message.number>
      <tred_message.function.coded>9</tred_message.function.coded>
    </trsd_beginning.of.message>
    <trcd_date.time.period>
      <tred_date.time.period.qualifier>137</tred_date.time.period.qualifier>
      <tred_date.time.period>202401011200</tred_date.time.period>
    </trcd_date.time.period>
    <trsd_free.text>
      <tred_text.subject.qualifier>AAI</tred_text.subject.qualifier>
      <trcd_text.literal><tred_free.text>HANDLE WITH CARE</tred_free.text></trcd_text.literal>
    </trsd_free.text>
  </COPARNE02.HEADER>
</COPARNE02>";

    #[test]
    fn test_header_categories() {
        let model = parse(HEADER_ONLY);

        assert_eq!(
            model.message_header,
            vec![MessageHeader {
                sender_id: Some("SENDER".to_string()),
                recipient_id: Some("RECEIVER".to_string()),
                message_reference_number: Some("1".to_string()),
                message_type: Some("COPARN".to_string()),
                version_number: Some("D".to_string()),
            }]
        );
        assert_eq!(
            model.beginning_of_message[0].document_message_number.as_deref(),
            Some("BK123")
        );
        assert_eq!(model.date_time_period[0].qualifier.as_deref(), Some("137"));
        assert_eq!(model.free_text[0].text.as_deref(), Some("HANDLE WITH CARE"));
    }

    #[test]
    fn test_missing_header_returns_empty_model() {
        let mut model = NormalizedRecordModel::new();
        let err = XmlParser::new()
            .parse_into(
                "<COPARNE02><COPARNE02.GROUP1><trcd_reference/></COPARNE02.GROUP1></COPARNE02>",
                &mut model,
            )
            .unwrap_err();

        assert!(matches!(err, Error::MissingElement { ref path } if path == "COPARNE02/COPARNE02.HEADER"));
        assert!(model.is_empty());
        assert_eq!(parse("<COPARNE02/>"), NormalizedRecordModel::new());
    }

    #[test]
    fn test_malformed_markup_returns_empty_model() {
        let mut model = NormalizedRecordModel::new();
        let err = XmlParser::new()
            .parse_into("<COPARNE02><COPARNE02.HEADER>", &mut model)
            .unwrap_err();

        assert!(matches!(err, Error::Xml(_)));
        assert!(parse("not xml at all").is_empty());
    }

    #[test]
    fn test_missing_interchange_header_aborts() {
        let model = parse(
            "<COPARNE02><COPARNE02.HEADER>\
             <anxs_message.header><anxe_message.type>COPARN</anxe_message.type></anxs_message.header>\
             </COPARNE02.HEADER></COPARNE02>",
        );
        assert!(model.is_empty());
    }

    #[test]
    fn test_missing_message_header_is_skipped() {
        let model = parse(
            "<COPARNE02><COPARNE02.HEADER><anxs_interchange.header/></COPARNE02.HEADER>\
             <COPARNE02.GROUP1><trcd_reference>\
             <tred_reference.qualifier>BN</tred_reference.qualifier>\
             </trcd_reference></COPARNE02.GROUP1></COPARNE02>",
        );

        assert!(model.message_header.is_empty());
        assert_eq!(
            model.references,
            vec![Reference {
                qualifier: Some("BN".to_string()),
                number: None,
            }]
        );
    }

    #[test]
    fn test_missing_carrier_keeps_categories_read_before() {
        let mut model = NormalizedRecordModel::new();
        let err = XmlParser::new()
            .parse_into(
                "<COPARNE02><COPARNE02.HEADER><anxs_interchange.header/>\
                 <anxs_message.header/></COPARNE02.HEADER>\
                 <COPARNE02.GROUP1><trcd_reference/></COPARNE02.GROUP1>\
                 <COPARNE02.GROUP2><trsd_details.of.transport/></COPARNE02.GROUP2>\
                 <COPARNE02.GROUP3><trsd_name.and.address/></COPARNE02.GROUP3>\
                 </COPARNE02>",
                &mut model,
            )
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Missing required element: \
             COPARNE02/COPARNE02.GROUP2/trsd_details.of.transport/trcd_carrier"
        );
        assert_eq!(model.message_header, vec![MessageHeader::default()]);
        assert_eq!(model.references.len(), 1);
        assert!(model.transport_details.is_empty());
        assert!(model.name_and_address.is_empty());
    }

    #[test]
    fn test_transport_group_appends_dates_and_locations() {
        let model = parse(
            "<COPARNE02><COPARNE02.HEADER><anxs_interchange.header/>\
             <trcd_date.time.period><tred_date.time.period.qualifier>137</tred_date.time.period.qualifier></trcd_date.time.period>\
             </COPARNE02.HEADER>\
             <COPARNE02.GROUP2>\
             <trsd_details.of.transport>\
             <tred_transport.stage.qualifier>20</tred_transport.stage.qualifier>\
             <tred_mode.of.transport.coded>1</tred_mode.of.transport.coded>\
             <trcd_carrier><tred_carrier.identification>MSC</tred_carrier.identification></trcd_carrier>\
             <trcd_transport.identification>\
             <tred_id.of.the.means.of.transport>9123456</tred_id.of.the.means.of.transport>\
             <tred_id.of.means.of.transport.identification>MSC OSCAR</tred_id.of.means.of.transport.identification>\
             <tred_nationality.of.means.of.transport.coded>PA</tred_nationality.of.means.of.transport.coded>\
             </trcd_transport.identification>\
             </trsd_details.of.transport>\
             <trcd_location.identification>\
             <tred_place.location.qualifier>9</tred_place.location.qualifier>\
             <tred_place.location.identification>ESVLC</tred_place.location.identification>\
             <tred_place.location>VALENCIA</tred_place.location>\
             </trcd_location.identification>\
             <trcd_date.time.period><tred_date.time.period.qualifier>133</tred_date.time.period.qualifier>\
             <tred_date.time.period>202401051800</tred_date.time.period></trcd_date.time.period>\
             </COPARNE02.GROUP2></COPARNE02>",
        );

        assert_eq!(
            model.transport_details,
            vec![TransportDetails {
                stage_qualifier: Some("20".to_string()),
                mode_of_transport: Some("1".to_string()),
                carrier_id: Some("MSC".to_string()),
                carrier_name: None,
                transport_id: Some("9123456".to_string()),
                transport_name: Some("MSC OSCAR".to_string()),
                transport_nationality: Some("PA".to_string()),
            }]
        );
        assert_eq!(model.references[0].number.as_deref(), Some("ESVLC"));
        assert_eq!(model.free_text[0].text.as_deref(), Some("VALENCIA"));

        // Header date first, then the transport group date; never merged
        assert_eq!(model.date_time_period.len(), 2);
        assert_eq!(model.date_time_period[0].qualifier.as_deref(), Some("137"));
        assert!(model.date_time_period[0].period.is_none());
        assert_eq!(model.date_time_period[1].qualifier.as_deref(), Some("133"));
    }

    #[test]
    fn test_split_goods_placement_appends_goods_items() {
        let model = parse(
            "<COPARNE02><COPARNE02.HEADER><anxs_interchange.header/></COPARNE02.HEADER>\
             <COPARNE02.GROUP5>\
             <trsd_goods.item.details>\
             <tred_goods.item.number>1</tred_goods.item.number>\
             <tred_number.of.packages>10</tred_number.of.packages>\
             <tred_type.of.packages.identification>CT</tred_type.of.packages.identification>\
             </trsd_goods.item.details>\
             <trsd_measurements>\
             <tred_measurement.dimension.coded>G</tred_measurement.dimension.coded>\
             <tred_measurement.value>12500</tred_measurement.value>\
             </trsd_measurements>\
             <COPARNE02.GROUP7><trsd_split.goods.placement>\
             <tred_equipment.identification.number>MSCU1234567</tred_equipment.identification.number>\
             <tred_number.of.packages>4</tred_number.of.packages>\
             </trsd_split.goods.placement></COPARNE02.GROUP7>\
             <COPARNE02.GROUP7><trsd_split.goods.placement>\
             <tred_equipment.identification.number>MSCU7654321</tred_equipment.identification.number>\
             </trsd_split.goods.placement></COPARNE02.GROUP7>\
             </COPARNE02.GROUP5></COPARNE02>",
        );

        assert_eq!(model.goods_item_details.len(), 3);
        assert_eq!(model.goods_item_details[0].type_of_packages.as_deref(), Some("CT"));
        assert_eq!(
            model.goods_item_details[1],
            GoodsItemDetails {
                item_number: Some("MSCU1234567".to_string()),
                number_of_packages: Some("4".to_string()),
                type_of_packages: Some(String::new()),
            }
        );
        assert!(model.goods_item_details[2].number_of_packages.is_none());
        assert_eq!(model.measurements[0].value.as_deref(), Some("12500"));
    }

    #[test]
    fn test_parties_and_equipment() {
        let model = parse(
            "<COPARNE02><COPARNE02.HEADER><anxs_interchange.header/></COPARNE02.HEADER>\
             <COPARNE02.GROUP3><trsd_name.and.address>\
             <tred_party.qualifier>CZ</tred_party.qualifier>\
             <tred_party.id.identification>SHIPPER01</tred_party.id.identification>\
             <tred_city.name>VALENCIA</tred_city.name>\
             </trsd_name.and.address></COPARNE02.GROUP3>\
             <COPARNE02.GROUP3/>\
             <COPARNE02.GROUP9>\
             <trsd_equipment.details>\
             <tred_equipment.qualifier>CN</tred_equipment.qualifier>\
             <tred_equipment.identification.number>MSCU1234567</tred_equipment.identification.number>\
             <tred_equipment.size.and.type.identification>45G1</tred_equipment.size.and.type.identification>\
             </trsd_equipment.details>\
             <trsd_measurements><tred_measurement.dimension.coded>T</tred_measurement.dimension.coded></trsd_measurements>\
             </COPARNE02.GROUP9></COPARNE02>",
        );

        assert_eq!(model.name_and_address.len(), 1);
        let nad = &model.name_and_address[0];
        assert_eq!(nad.party_id.as_deref(), Some("SHIPPER01"));
        assert_eq!(nad.city.as_deref(), Some("VALENCIA"));
        assert!(nad.name.is_none());

        assert_eq!(model.equipment_details[0].size_and_type.as_deref(), Some("45G1"));
        assert_eq!(model.measurements[0].dimension_code.as_deref(), Some("T"));
        assert!(model.measurements[0].value.is_none());
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse(HEADER_ONLY), parse(HEADER_ONLY));
    }

    #[test]
    fn test_message_parser_trait() {
        let parser: &dyn MessageParser = &XmlParser::new();
        assert_eq!(parser.format_name(), "EDIXML");
        assert_eq!(parser.parse(HEADER_ONLY).message_header.len(), 1);
    }
}
