//! Transport layer: wire-format details (JSON payloads, XML order responses).

mod messages;
mod move_tns;
mod order_xml;
mod tn_options;

pub use messages::encode_send_message_json;
pub use move_tns::encode_transfer_numbers_json;
pub use order_xml::parse_order_response;
pub use tn_options::{
    ADD_CAMPAIGN_ORDER_ID, REMOVE_CAMPAIGN_ORDER_ID, encode_add_campaign_json,
    encode_remove_campaign_json,
};
