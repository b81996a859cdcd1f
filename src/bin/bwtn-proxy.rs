use std::sync::Arc;

use bwtn::BandwidthClient;
use bwtn::config::{EnvSource, ServerConfig};
use bwtn::server::{self, AppState};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BWTN_LOG";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::load(&EnvSource)?;
    let client = BandwidthClient::builder()
        .config_source(EnvSource)
        .user_agent(concat!("bwtn/", env!("CARGO_PKG_VERSION")))
        .build()?;

    server::serve(&config, Arc::new(AppState::new(client, EnvSource))).await?;
    Ok(())
}
