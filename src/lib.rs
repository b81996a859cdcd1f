//! Typed gateway and JSON proxy for a slice of the Bandwidth accounts API.
//!
//! The crate follows a layered design: a domain layer of strong types, a transport layer for
//! wire formats (JSON order payloads, XML order responses), a client layer performing the
//! authenticated upstream calls, and a small axum route layer on top.
//!
//! ```rust,no_run
//! use bwtn::{AddCampaign, BandwidthClient, CampaignId, SmsSetting, TelephoneNumber};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BandwidthClient::from_env();
//!     let numbers = TelephoneNumber::parse_list("+12549465498, +13612714600")?;
//!     let request = AddCampaign::new(CampaignId::new("CABC123")?, numbers, SmsSetting::On)?;
//!
//!     let result = client.add_campaign(request).await?;
//!     if result.ok {
//!         let order = bwtn::parse_order_response(&result.raw_body);
//!         println!("order {:?} is {:?}", order.order_id, order.processing_status);
//!     } else {
//!         println!("{} {}: {}", result.http_status, result.http_status_text, result.raw_body);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
pub mod server;
mod transport;

pub use client::{BandwidthClient, BandwidthClientBuilder, GatewayError};
pub use config::{ConfigError, ConfigSource, Credentials, EnvSource, MapSource};
pub use domain::{
    AccountId, AddCampaign, ApplicationId, CampaignId, GatewayRequest, GatewayResult, LocationId,
    MessageText, ParsedOrderResponse, Password, RemoveCampaign, SendMessage, SmsSetting,
    SubAccountId, TelephoneNumber, TransferNumbers, Username, ValidationError,
};
pub use transport::{
    ADD_CAMPAIGN_ORDER_ID, REMOVE_CAMPAIGN_ORDER_ID, encode_add_campaign_json,
    encode_remove_campaign_json, encode_send_message_json, encode_transfer_numbers_json,
    parse_order_response,
};
