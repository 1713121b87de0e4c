//! Full COPARN XML documents through the public parser API

use edi_adapter_xml::{Error, XmlParser};
use edi_ir::{
    Category, EquipmentDetails, GoodsItemDetails, Measurements, NormalizedRecordModel,
    TransportDetails,
};

const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<COPARNE02>
  <COPARNE02.HEADER>
    <anxs_interchange.header>
      <anxe_sender.identification>LINE</anxe_sender.identification>
      <anxe_recipient.identification>TERMINAL</anxe_recipient.identification>
    </anxs_interchange.header>
    <anxs_message.header>
      <anxe_message.reference.number>77</anxe_message.reference.number>
      <anxe_message.type>COPARN</anxe_message.type>
      <anxe_message.version.number>D</anxe_message.version.number>
    </anxs_message.header>
  </COPARNE02.HEADER>
  <COPARNE02.GROUP1>
    <trcd_reference>
      <tred_reference.qualifier>BN</tred_reference.qualifier>
      <tred_reference.number>BOOK1</tred_reference.number>
    </trcd_reference>
  </COPARNE02.GROUP1>
  <COPARNE02.GROUP2>
    <trsd_details.of.transport>
      <tred_transport.stage.qualifier>20</tred_transport.stage.qualifier>
      <tred_mode.of.transport.coded>1</tred_mode.of.transport.coded>
      <trcd_carrier>
        <tred_carrier.identification>MSC</tred_carrier.identification>
        <tred_carrier.name>MEDITERRANEAN</tred_carrier.name>
      </trcd_carrier>
      <trcd_transport.identification>
        <tred_id.of.the.means.of.transport>9334567</tred_id.of.the.means.of.transport>
        <tred_id.of.means.of.transport.identification>MSC ANNA</tred_id.of.means.of.transport.identification>
        <tred_nationality.of.means.of.transport.coded>PA</tred_nationality.of.means.of.transport.coded>
      </trcd_transport.identification>
    </trsd_details.of.transport>
    <trcd_location.identification>
      <tred_place.location.qualifier>9</tred_place.location.qualifier>
      <tred_place.location.identification>ESVLC</tred_place.location.identification>
      <tred_place.location>VALENCIA</tred_place.location>
    </trcd_location.identification>
  </COPARNE02.GROUP2>
  <COPARNE02.GROUP5>
    <trsd_goods.item.details>
      <tred_goods.item.number>1</tred_goods.item.number>
      <tred_number.of.packages>10</tred_number.of.packages>
      <tred_type.of.packages.identification>PK</tred_type.of.packages.identification>
    </trsd_goods.item.details>
    <trsd_measurements>
      <tred_measurement.dimension.coded>G</tred_measurement.dimension.coded>
      <tred_measurement.value>12000</tred_measurement.value>
    </trsd_measurements>
    <COPARNE02.GROUP7>
      <trsd_split.goods.placement>
        <tred_equipment.identification.number>MSCU1234567</tred_equipment.identification.number>
        <tred_number.of.packages>4</tred_number.of.packages>
      </trsd_split.goods.placement>
    </COPARNE02.GROUP7>
  </COPARNE02.GROUP5>
  <COPARNE02.GROUP9>
    <trsd_equipment.details>
      <tred_equipment.qualifier>CN</tred_equipment.qualifier>
      <tred_equipment.identification.number>MSCU1234567</tred_equipment.identification.number>
      <tred_equipment.size.and.type.identification>45G1</tred_equipment.size.and.type.identification>
    </trsd_equipment.details>
    <trsd_measurements>
      <tred_measurement.dimension.coded>T</tred_measurement.dimension.coded>
      <tred_measurement.value>3800</tred_measurement.value>
    </trsd_measurements>
  </COPARNE02.GROUP9>
</COPARNE02>"#;

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[test]
fn full_document_populates_every_group() {
    let model = XmlParser::new().parse(DOCUMENT);

    assert_eq!(model.len_of(Category::MessageHeader), 1);
    assert_eq!(model.len_of(Category::References), 2);
    assert_eq!(model.len_of(Category::FreeText), 1);
    assert_eq!(
        model.transport_details,
        vec![TransportDetails {
            stage_qualifier: some("20"),
            mode_of_transport: some("1"),
            carrier_id: some("MSC"),
            carrier_name: some("MEDITERRANEAN"),
            transport_id: some("9334567"),
            transport_name: some("MSC ANNA"),
            transport_nationality: some("PA"),
        }]
    );
    assert_eq!(
        model.goods_item_details,
        vec![
            GoodsItemDetails {
                item_number: some("1"),
                number_of_packages: some("10"),
                type_of_packages: some("PK"),
            },
            GoodsItemDetails {
                item_number: some("MSCU1234567"),
                number_of_packages: some("4"),
                type_of_packages: some(""),
            },
        ]
    );
    assert_eq!(
        model.measurements,
        vec![
            Measurements {
                dimension_code: some("G"),
                value: some("12000"),
            },
            Measurements {
                dimension_code: some("T"),
                value: some("3800"),
            },
        ]
    );
    assert_eq!(
        model.equipment_details,
        vec![EquipmentDetails {
            qualifier: some("CN"),
            id_number: some("MSCU1234567"),
            size_and_type: some("45G1"),
        }]
    );
}

#[test]
fn location_feeds_references_and_free_text() {
    let model = XmlParser::new().parse(DOCUMENT);

    assert_eq!(model.references[1].qualifier.as_deref(), Some("9"));
    assert_eq!(model.references[1].number.as_deref(), Some("ESVLC"));
    assert_eq!(model.free_text[0].text.as_deref(), Some("VALENCIA"));
}

#[test]
fn missing_carrier_keeps_earlier_categories() {
    let damaged = DOCUMENT.replace("<trcd_carrier>", "<trcd_operator>").replace(
        "</trcd_carrier>",
        "</trcd_operator>",
    );

    let mut model = NormalizedRecordModel::new();
    let err = XmlParser::new()
        .parse_into(&damaged, &mut model)
        .unwrap_err();

    assert!(matches!(err, Error::MissingElement { .. }));
    assert!(err.to_string().contains("trcd_carrier"));
    assert_eq!(model.message_header.len(), 1);
    assert_eq!(model.references.len(), 1);
    assert!(model.transport_details.is_empty());
    assert!(model.equipment_details.is_empty());

    assert_eq!(XmlParser::new().parse(&damaged), model);
}

#[test]
fn output_serializes_with_every_category() {
    let model = XmlParser::new().parse(DOCUMENT);
    let value = serde_json::to_value(&model).unwrap();

    for category in Category::ALL {
        assert!(
            value[category.as_str()].is_array(),
            "missing category {category}"
        );
    }
    assert_eq!(value["transport_details"][0]["carrier_id"], "MSC");
}
