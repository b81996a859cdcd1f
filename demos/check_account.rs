use bwtn::BandwidthClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = BandwidthClient::from_env();
    let result = client.account_status().await?;

    println!(
        "ok: {}, HTTP {} {}",
        result.ok, result.http_status, result.http_status_text
    );
    println!("{}", result.raw_body);

    Ok(())
}
