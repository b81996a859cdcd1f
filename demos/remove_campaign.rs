use std::io;

use bwtn::{BandwidthClient, RemoveCampaign, SmsSetting, TelephoneNumber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let numbers = std::env::var("BWTN_PHONE_NUMBERS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BWTN_PHONE_NUMBERS environment variable is required (comma separated, E.164)",
        )
    })?;
    let sms = match std::env::var("BWTN_SMS").as_deref() {
        Ok("OFF") => SmsSetting::Off,
        _ => SmsSetting::On,
    };

    let client = BandwidthClient::from_env();
    let request = RemoveCampaign::new(TelephoneNumber::parse_list(&numbers)?, sms)?;

    let result = client.remove_campaign(request).await?;
    let order = bwtn::parse_order_response(&result.raw_body);
    println!(
        "HTTP {} {}, order id: {:?}, errors: {:?}",
        result.http_status, result.http_status_text, order.order_id, order.errors
    );

    Ok(())
}
