use std::io;

use bwtn::{BandwidthClient, LocationId, SubAccountId, TelephoneNumber, TransferNumbers};

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sub_account_id: u64 = required("BWTN_SUB_ACCOUNT_ID")?.parse()?;
    let location_id: u64 = required("BWTN_LOCATION_ID")?.parse()?;
    let numbers = required("BWTN_PHONE_NUMBERS")?;

    let client = BandwidthClient::from_env();
    let request = TransferNumbers::new(
        SubAccountId::new(sub_account_id)?,
        LocationId::new(location_id)?,
        TelephoneNumber::parse_list(&numbers)?,
    )?;

    let result = client.transfer_numbers(request).await?;
    let order = bwtn::parse_order_response(&result.raw_body);
    println!("HTTP {} {}", result.http_status, result.http_status_text);
    println!(
        "order id: {:?}, status: {:?}",
        order.order_id, order.processing_status
    );
    for number in &order.phone_numbers {
        println!("  - {number}");
    }

    Ok(())
}
