use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    AddCampaign, CampaignId, GatewayResult, LocationId, MessageText, ParsedOrderResponse,
    RemoveCampaign, SendMessage, SmsSetting, SubAccountId, TelephoneNumber, TransferNumbers,
    ValidationError,
};

/// Phone numbers as a JSON array or as the comma/newline separated text of a form field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PhoneNumbersInput {
    List(Vec<String>),
    Text(String),
}

impl PhoneNumbersInput {
    fn into_numbers(self) -> Result<Vec<TelephoneNumber>, ValidationError> {
        match self {
            Self::List(entries) => TelephoneNumber::collect(entries),
            Self::Text(text) => TelephoneNumber::parse_list(&text),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SmsInput {
    On,
    Off,
}

impl From<SmsInput> for SmsSetting {
    fn from(value: SmsInput) -> Self {
        match value {
            SmsInput::On => SmsSetting::On,
            SmsInput::Off => SmsSetting::Off,
        }
    }
}

/// Why a request body was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection(pub String);

impl From<ValidationError> for Rejection {
    fn from(value: ValidationError) -> Self {
        Self(value.to_string())
    }
}

fn required<T>(value: Option<T>, message: &str) -> Result<T, Rejection> {
    value.ok_or_else(|| Rejection(message.to_owned()))
}

/// Empty lists and missing lists share the "required" message; malformed entries get their own.
fn numbers(
    input: Option<PhoneNumbersInput>,
    message: &str,
) -> Result<Vec<TelephoneNumber>, Rejection> {
    match required(input, message)?.into_numbers() {
        Err(ValidationError::Empty { .. }) => Err(Rejection(message.to_owned())),
        other => Ok(other?),
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCampaignBody {
    pub campaign_id: Option<String>,
    pub phone_numbers: Option<PhoneNumbersInput>,
    pub sms: Option<SmsInput>,
}

impl AddCampaignBody {
    const REQUIRED: &'static str = "campaignId and at least one phone number are required";

    pub fn into_request(self) -> Result<AddCampaign, Rejection> {
        let campaign_id = CampaignId::new(required(self.campaign_id, Self::REQUIRED)?)
            .map_err(|_| Rejection(Self::REQUIRED.to_owned()))?;
        let numbers = numbers(self.phone_numbers, Self::REQUIRED)?;
        let sms = self.sms.map(SmsSetting::from).unwrap_or_default();
        Ok(AddCampaign::new(campaign_id, numbers, sms)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveCampaignBody {
    pub phone_numbers: Option<PhoneNumbersInput>,
    pub sms: Option<SmsInput>,
}

impl RemoveCampaignBody {
    const REQUIRED: &'static str = "At least one phone number is required";

    pub fn into_request(self) -> Result<RemoveCampaign, Rejection> {
        let numbers = numbers(self.phone_numbers, Self::REQUIRED)?;
        let sms = self.sms.map(SmsSetting::from).unwrap_or_default();
        Ok(RemoveCampaign::new(numbers, sms)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferNumbersBody {
    pub sub_account_id: Option<u64>,
    pub location_id: Option<u64>,
    pub phone_numbers: Option<PhoneNumbersInput>,
}

impl TransferNumbersBody {
    const REQUIRED: &'static str =
        "subAccountId, locationId, and at least one phone number are required";

    pub fn into_request(self) -> Result<TransferNumbers, Rejection> {
        let missing = || Rejection(Self::REQUIRED.to_owned());
        let sub_account_id = SubAccountId::new(required(self.sub_account_id, Self::REQUIRED)?)
            .map_err(|_| missing())?;
        let location_id = LocationId::new(required(self.location_id, Self::REQUIRED)?)
            .map_err(|_| missing())?;
        let numbers = numbers(self.phone_numbers, Self::REQUIRED)?;
        Ok(TransferNumbers::new(sub_account_id, location_id, numbers)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageBody {
    pub to: Option<String>,
    pub from: Option<String>,
    pub text: Option<String>,
}

impl SendMessageBody {
    const REQUIRED: &'static str = "Missing required fields: to, from, and text are required";

    pub fn into_request(self) -> Result<SendMessage, Rejection> {
        let missing = |err: ValidationError| match err {
            ValidationError::Empty { .. } => Rejection(Self::REQUIRED.to_owned()),
            other => Rejection::from(other),
        };
        let to = TelephoneNumber::new(required(self.to, Self::REQUIRED)?).map_err(missing)?;
        let from = TelephoneNumber::new(required(self.from, Self::REQUIRED)?).map_err(missing)?;
        let text = MessageText::new(required(self.text, Self::REQUIRED)?).map_err(missing)?;
        Ok(SendMessage::new(to, from, text))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_status: Option<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub phone_numbers: Vec<String>,
}

impl From<ParsedOrderResponse> for ParsedJson {
    fn from(value: ParsedOrderResponse) -> Self {
        Self {
            order_id: value.order_id,
            processing_status: value.processing_status,
            errors: value.errors,
            warnings: value.warnings,
            phone_numbers: value.phone_numbers,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status: &'static str,
    pub http_status: u16,
    pub http_status_text: String,
    pub raw_response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<ParsedJson>,
}

impl GatewayResponse {
    pub fn new(result: GatewayResult, parsed: Option<ParsedOrderResponse>) -> Self {
        Self {
            status: if result.ok { "success" } else { "error" },
            http_status: result.http_status,
            http_status_text: result.http_status_text,
            raw_response: result.raw_body,
            parsed: parsed.map(ParsedJson::from),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            error,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvCheckResponse {
    pub status: &'static str,
    pub env_present: BTreeMap<&'static str, bool>,
}
