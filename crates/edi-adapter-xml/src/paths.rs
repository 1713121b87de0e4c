//! Element names of the COPARN XML rendition
//!
//! Group elements are direct children of the document root; leaf paths are
//! relative to the node they are read from.

pub const HEADER: &str = "COPARNE02.HEADER";
pub const REFERENCE_GROUP: &str = "COPARNE02.GROUP1";
pub const TRANSPORT_GROUP: &str = "COPARNE02.GROUP2";
pub const PARTY_GROUP: &str = "COPARNE02.GROUP3";
pub const GOODS_GROUP: &str = "COPARNE02.GROUP5";
pub const EQUIPMENT_GROUP: &str = "COPARNE02.GROUP9";

pub mod header {
    pub const INTERCHANGE: &str = "anxs_interchange.header";
    pub const SENDER: &str = "anxe_sender.identification";
    pub const RECIPIENT: &str = "anxe_recipient.identification";

    pub const MESSAGE: &str = "anxs_message.header";
    pub const REFERENCE_NUMBER: &str = "anxe_message.reference.number";
    pub const MESSAGE_TYPE: &str = "anxe_message.type";
    pub const VERSION: &str = "anxe_message.version.number";

    pub const BEGINNING: &str = "trsd_beginning.of.message";
    pub const NAME_CODE: &str = "tred_document.message.name.coded";
    pub const DOCUMENT_NUMBER: &str = "tred_document.message.number";
    pub const FUNCTION_CODE: &str = "tred_message.function.coded";

    pub const FREE_TEXT: &str = "trsd_free.text";
    pub const TEXT_QUALIFIER: &str = "tred_text.subject.qualifier";
    pub const TEXT: &str = "trcd_text.literal/tred_free.text";
}

pub mod date {
    pub const PERIOD_GROUP: &str = "trcd_date.time.period";
    pub const QUALIFIER: &str = "tred_date.time.period.qualifier";
    pub const PERIOD: &str = "tred_date.time.period";
}

pub mod reference {
    pub const REFERENCE: &str = "trcd_reference";
    pub const QUALIFIER: &str = "tred_reference.qualifier";
    pub const NUMBER: &str = "tred_reference.number";
}

pub mod transport {
    pub const DETAILS: &str = "trsd_details.of.transport";
    pub const STAGE_QUALIFIER: &str = "tred_transport.stage.qualifier";
    pub const MODE: &str = "tred_mode.of.transport.coded";
    pub const CARRIER: &str = "trcd_carrier";
    pub const CARRIER_ID: &str = "tred_carrier.identification";
    pub const CARRIER_NAME: &str = "tred_carrier.name";
    pub const TRANSPORT_ID: &str = "trcd_transport.identification/tred_id.of.the.means.of.transport";
    pub const TRANSPORT_NAME: &str =
        "trcd_transport.identification/tred_id.of.means.of.transport.identification";
    pub const NATIONALITY: &str =
        "trcd_transport.identification/tred_nationality.of.means.of.transport.coded";

    pub const LOCATION: &str = "trcd_location.identification";
    pub const LOCATION_QUALIFIER: &str = "tred_place.location.qualifier";
    pub const LOCATION_ID: &str = "tred_place.location.identification";
    pub const LOCATION_NAME: &str = "tred_place.location";
}

pub mod party {
    pub const NAME_AND_ADDRESS: &str = "trsd_name.and.address";
    pub const QUALIFIER: &str = "tred_party.qualifier";
    pub const ID: &str = "tred_party.id.identification";
    pub const NAME: &str = "tred_name.and.address.line";
    pub const STREET: &str = "tred_street.and.number.p.o.box";
    pub const CITY: &str = "tred_city.name";
    pub const COUNTRY: &str = "tred_country.coded";
}

pub mod goods {
    pub const ITEM: &str = "trsd_goods.item.details";
    pub const ITEM_NUMBER: &str = "tred_goods.item.number";
    pub const PACKAGES: &str = "tred_number.of.packages";
    pub const PACKAGE_TYPE: &str = "tred_type.of.packages.identification";

    pub const SPLIT_PLACEMENT: &str = "COPARNE02.GROUP7/trsd_split.goods.placement";
    pub const SPLIT_EQUIPMENT_ID: &str = "tred_equipment.identification.number";
    pub const SPLIT_PACKAGES: &str = "tred_number.of.packages";
}

pub mod measurement {
    pub const MEASUREMENTS: &str = "trsd_measurements";
    pub const DIMENSION: &str = "tred_measurement.dimension.coded";
    pub const VALUE: &str = "tred_measurement.value";
}

pub mod equipment {
    pub const DETAILS: &str = "trsd_equipment.details";
    pub const QUALIFIER: &str = "tred_equipment.qualifier";
    pub const ID_NUMBER: &str = "tred_equipment.identification.number";
    pub const SIZE_AND_TYPE: &str = "tred_equipment.size.and.type.identification";
}
