use serde::Serialize;

use crate::domain::{AddCampaign, RemoveCampaign, SmsSetting, TelephoneNumber};

pub const ADD_CAMPAIGN_ORDER_ID: &str = "TnOptionOrder_AddCampaign";
pub const REMOVE_CAMPAIGN_ORDER_ID: &str = "TnOptionOrder_RemoveCampaign";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
enum TransportSms {
    On,
    Off,
}

impl From<SmsSetting> for TransportSms {
    fn from(value: SmsSetting) -> Self {
        match value {
            SmsSetting::On => TransportSms::On,
            SmsSetting::Off => TransportSms::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum A2pAction {
    AsSpecified,
    SystemDefault,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct TnOptionOrderJson<'a> {
    customer_order_id: &'static str,
    tn_option_groups: Vec<TnOptionGroupJson<'a>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct TnOptionGroupJson<'a> {
    sms: TransportSms,
    a2p_settings: A2pSettingsJson<'a>,
    phone_numbers: Vec<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct A2pSettingsJson<'a> {
    action: A2pAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    campaign_id: Option<&'a str>,
}

pub fn encode_add_campaign_json(
    request: &AddCampaign,
) -> Result<serde_json::Value, serde_json::Error> {
    let order = TnOptionOrderJson {
        customer_order_id: ADD_CAMPAIGN_ORDER_ID,
        tn_option_groups: vec![TnOptionGroupJson {
            sms: request.sms().into(),
            a2p_settings: A2pSettingsJson {
                action: A2pAction::AsSpecified,
                campaign_id: Some(request.campaign_id().as_str()),
            },
            phone_numbers: raw_numbers(request.phone_numbers()),
        }],
    };
    serde_json::to_value(order)
}

pub fn encode_remove_campaign_json(
    request: &RemoveCampaign,
) -> Result<serde_json::Value, serde_json::Error> {
    let order = TnOptionOrderJson {
        customer_order_id: REMOVE_CAMPAIGN_ORDER_ID,
        tn_option_groups: vec![TnOptionGroupJson {
            sms: request.sms().into(),
            a2p_settings: A2pSettingsJson {
                action: A2pAction::SystemDefault,
                campaign_id: None,
            },
            phone_numbers: raw_numbers(request.phone_numbers()),
        }],
    };
    serde_json::to_value(order)
}

pub(crate) fn raw_numbers(numbers: &[TelephoneNumber]) -> Vec<&str> {
    numbers.iter().map(TelephoneNumber::as_str).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::CampaignId;

    use super::*;

    fn numbers() -> Vec<TelephoneNumber> {
        vec![
            TelephoneNumber::new("+12549465498").unwrap(),
            TelephoneNumber::new("+13612714600").unwrap(),
        ]
    }

    #[test]
    fn add_campaign_uses_as_specified_with_campaign_id() {
        let request = AddCampaign::new(
            CampaignId::new("CABC123").unwrap(),
            numbers(),
            SmsSetting::default(),
        )
        .unwrap();

        assert_eq!(
            encode_add_campaign_json(&request).unwrap(),
            json!({
                "customerOrderId": "TnOptionOrder_AddCampaign",
                "tnOptionGroups": [{
                    "sms": "ON",
                    "a2pSettings": {
                        "action": "AS_SPECIFIED",
                        "campaignId": "CABC123"
                    },
                    "phoneNumbers": ["+12549465498", "+13612714600"]
                }]
            })
        );
    }

    #[test]
    fn remove_campaign_uses_system_default_and_omits_campaign_id() {
        let request = RemoveCampaign::new(numbers(), SmsSetting::Off).unwrap();
        let payload = encode_remove_campaign_json(&request).unwrap();

        assert_eq!(
            payload,
            json!({
                "customerOrderId": "TnOptionOrder_RemoveCampaign",
                "tnOptionGroups": [{
                    "sms": "OFF",
                    "a2pSettings": { "action": "SYSTEM_DEFAULT" },
                    "phoneNumbers": ["+12549465498", "+13612714600"]
                }]
            })
        );
        assert!(
            payload["tnOptionGroups"][0]["a2pSettings"]
                .get("campaignId")
                .is_none()
        );
    }
}
