use crate::domain::validation::ValidationError;
use crate::domain::value::{CampaignId, LocationId, MessageText, SubAccountId, TelephoneNumber};

/// Whether SMS is enabled on the numbers of a TN option group (`sms`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmsSetting {
    #[default]
    On,
    Off,
}

impl SmsSetting {
    /// Wire literal (`ON` / `OFF`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

/// One upstream operation, with its payload.
#[derive(Debug, Clone)]
pub enum GatewayRequest {
    AccountStatus,
    ListNumbers,
    SendMessage(SendMessage),
    AddCampaign(AddCampaign),
    RemoveCampaign(RemoveCampaign),
    TransferNumbers(TransferNumbers),
}

impl GatewayRequest {
    /// Short operation name used in logs.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::AccountStatus => "account_status",
            Self::ListNumbers => "list_numbers",
            Self::SendMessage(_) => "send_message",
            Self::AddCampaign(_) => "add_campaign",
            Self::RemoveCampaign(_) => "remove_campaign",
            Self::TransferNumbers(_) => "transfer_numbers",
        }
    }
}

/// Attach a campaign to telephone numbers (`tnOptions`, `AS_SPECIFIED`).
#[derive(Debug, Clone)]
pub struct AddCampaign {
    campaign_id: CampaignId,
    phone_numbers: Vec<TelephoneNumber>,
    sms: SmsSetting,
}

impl AddCampaign {
    pub fn new(
        campaign_id: CampaignId,
        phone_numbers: Vec<TelephoneNumber>,
        sms: SmsSetting,
    ) -> Result<Self, ValidationError> {
        require_numbers(&phone_numbers)?;
        Ok(Self {
            campaign_id,
            phone_numbers,
            sms,
        })
    }

    pub fn campaign_id(&self) -> &CampaignId {
        &self.campaign_id
    }

    pub fn phone_numbers(&self) -> &[TelephoneNumber] {
        &self.phone_numbers
    }

    pub fn sms(&self) -> SmsSetting {
        self.sms
    }
}

/// Reset the campaign of telephone numbers to the system default (`tnOptions`, `SYSTEM_DEFAULT`).
#[derive(Debug, Clone)]
pub struct RemoveCampaign {
    phone_numbers: Vec<TelephoneNumber>,
    sms: SmsSetting,
}

impl RemoveCampaign {
    pub fn new(
        phone_numbers: Vec<TelephoneNumber>,
        sms: SmsSetting,
    ) -> Result<Self, ValidationError> {
        require_numbers(&phone_numbers)?;
        Ok(Self { phone_numbers, sms })
    }

    pub fn phone_numbers(&self) -> &[TelephoneNumber] {
        &self.phone_numbers
    }

    pub fn sms(&self) -> SmsSetting {
        self.sms
    }
}

/// Move telephone numbers to another sub-account and location (`moveTns`).
#[derive(Debug, Clone)]
pub struct TransferNumbers {
    sub_account_id: SubAccountId,
    location_id: LocationId,
    phone_numbers: Vec<TelephoneNumber>,
}

impl TransferNumbers {
    pub fn new(
        sub_account_id: SubAccountId,
        location_id: LocationId,
        phone_numbers: Vec<TelephoneNumber>,
    ) -> Result<Self, ValidationError> {
        require_numbers(&phone_numbers)?;
        Ok(Self {
            sub_account_id,
            location_id,
            phone_numbers,
        })
    }

    pub fn sub_account_id(&self) -> SubAccountId {
        self.sub_account_id
    }

    pub fn location_id(&self) -> LocationId {
        self.location_id
    }

    pub fn phone_numbers(&self) -> &[TelephoneNumber] {
        &self.phone_numbers
    }
}

/// Send a single text message.
#[derive(Debug, Clone)]
pub struct SendMessage {
    to: TelephoneNumber,
    from: TelephoneNumber,
    text: MessageText,
}

impl SendMessage {
    pub fn new(to: TelephoneNumber, from: TelephoneNumber, text: MessageText) -> Self {
        Self { to, from, text }
    }

    pub fn to(&self) -> &TelephoneNumber {
        &self.to
    }

    pub fn from(&self) -> &TelephoneNumber {
        &self.from
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }
}

fn require_numbers(phone_numbers: &[TelephoneNumber]) -> Result<(), ValidationError> {
    if phone_numbers.is_empty() {
        return Err(ValidationError::Empty {
            field: TelephoneNumber::FIELD,
        });
    }
    Ok(())
}

impl From<AddCampaign> for GatewayRequest {
    fn from(value: AddCampaign) -> Self {
        Self::AddCampaign(value)
    }
}

impl From<RemoveCampaign> for GatewayRequest {
    fn from(value: RemoveCampaign) -> Self {
        Self::RemoveCampaign(value)
    }
}

impl From<TransferNumbers> for GatewayRequest {
    fn from(value: TransferNumbers) -> Self {
        Self::TransferNumbers(value)
    }
}

impl From<SendMessage> for GatewayRequest {
    fn from(value: SendMessage) -> Self {
        Self::SendMessage(value)
    }
}
