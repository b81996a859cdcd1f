use std::io;

use bwtn::{AddCampaign, BandwidthClient, CampaignId, SmsSetting, TelephoneNumber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let campaign_id = std::env::var("BWTN_CAMPAIGN_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BWTN_CAMPAIGN_ID environment variable is required",
        )
    })?;
    let numbers = std::env::var("BWTN_PHONE_NUMBERS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BWTN_PHONE_NUMBERS environment variable is required (comma separated, E.164)",
        )
    })?;

    let client = BandwidthClient::from_env();
    let request = AddCampaign::new(
        CampaignId::new(campaign_id)?,
        TelephoneNumber::parse_list(&numbers)?,
        SmsSetting::On,
    )?;

    let result = client.add_campaign(request).await?;
    println!("HTTP {} {}", result.http_status, result.http_status_text);
    if result.ok {
        let order = bwtn::parse_order_response(&result.raw_body);
        println!(
            "order id: {:?}, status: {:?}",
            order.order_id, order.processing_status
        );
        for warning in &order.warnings {
            println!("warning: {warning}");
        }
    } else {
        println!("{}", result.raw_body);
    }

    Ok(())
}
