use serde::Serialize;

use crate::domain::{ApplicationId, SendMessage};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct MessageJson<'a> {
    to: &'a str,
    from: &'a str,
    text: &'a str,
    application_id: &'a str,
}

pub fn encode_send_message_json(
    request: &SendMessage,
    application_id: &ApplicationId,
) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(MessageJson {
        to: request.to().as_str(),
        from: request.from().as_str(),
        text: request.text().as_str(),
        application_id: application_id.as_str(),
    })
}
