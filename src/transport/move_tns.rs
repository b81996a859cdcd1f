use serde::Serialize;

use super::tn_options::raw_numbers;
use crate::domain::TransferNumbers;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveTnsJson<'a> {
    sub_account_id: u64,
    location_id: u64,
    phone_numbers: Vec<&'a str>,
}

pub fn encode_transfer_numbers_json(
    request: &TransferNumbers,
) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(MoveTnsJson {
        sub_account_id: request.sub_account_id().value(),
        location_id: request.location_id().value(),
        phone_numbers: raw_numbers(request.phone_numbers()),
    })
}
