//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    AddCampaign, GatewayRequest, RemoveCampaign, SendMessage, SmsSetting, TransferNumbers,
};
pub use response::{GatewayResult, ParsedOrderResponse};
pub use validation::ValidationError;
pub use value::{
    AccountId, ApplicationId, CampaignId, LocationId, MessageText, Password, SubAccountId,
    TelephoneNumber, Username,
};
