//! JSON route layer in front of the gateway.

mod handlers;
mod types;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;

use crate::client::BandwidthClient;
use crate::config::{ConfigSource, ServerConfig};

/// Shared handler state.
pub struct AppState {
    pub client: BandwidthClient,
    pub config: Arc<dyn ConfigSource>,
}

impl AppState {
    pub fn new(client: BandwidthClient, config: impl ConfigSource + 'static) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }
}

/// Routes under `/api/bandwidth`.
pub fn router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .route("/status", get(handlers::account_status))
        .route("/numbers", get(handlers::list_numbers))
        .route("/message", post(handlers::send_message))
        .route("/add-campaign", post(handlers::add_campaign))
        .route("/remove-campaign", post(handlers::remove_campaign))
        .route("/transfer-tns", post(handlers::transfer_numbers))
        .route("/env-check", get(handlers::env_check));

    Router::new()
        .nest("/api/bandwidth", routes)
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "bwtn proxy listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %err, "failed to listen for shutdown signal");
            }
            tracing::info!("shutting down");
        })
        .await
}
