use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::AppState;
use super::types::{
    AddCampaignBody, EnvCheckResponse, ErrorResponse, GatewayResponse, Rejection,
    RemoveCampaignBody, SendMessageBody, TransferNumbersBody,
};
use crate::domain::GatewayRequest;

/// What to do with the upstream body once the call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    Raw,
    ParseOrder,
}

pub async fn account_status(State(state): State<Arc<AppState>>) -> Response {
    relay(
        &state,
        Ok(GatewayRequest::AccountStatus),
        Body::Raw,
        "Unexpected error while checking the Bandwidth account",
    )
    .await
}

pub async fn list_numbers(State(state): State<Arc<AppState>>) -> Response {
    relay(
        &state,
        Ok(GatewayRequest::ListNumbers),
        Body::Raw,
        "Unexpected error while fetching phone numbers",
    )
    .await
}

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SendMessageBody>, JsonRejection>,
) -> Response {
    let request = decode(payload, SendMessageBody::into_request).map(GatewayRequest::from);
    relay(
        &state,
        request,
        Body::Raw,
        "Unexpected error while sending message",
    )
    .await
}

pub async fn add_campaign(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddCampaignBody>, JsonRejection>,
) -> Response {
    let request = decode(payload, AddCampaignBody::into_request).map(GatewayRequest::from);
    relay(
        &state,
        request,
        Body::ParseOrder,
        "Unexpected error while adding campaign to TNs",
    )
    .await
}

pub async fn remove_campaign(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RemoveCampaignBody>, JsonRejection>,
) -> Response {
    let request = decode(payload, RemoveCampaignBody::into_request).map(GatewayRequest::from);
    relay(
        &state,
        request,
        Body::ParseOrder,
        "Unexpected error while removing campaign from TNs",
    )
    .await
}

pub async fn transfer_numbers(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TransferNumbersBody>, JsonRejection>,
) -> Response {
    let request = decode(payload, TransferNumbersBody::into_request).map(GatewayRequest::from);
    relay(
        &state,
        request,
        Body::ParseOrder,
        "Unexpected error while transferring TNs",
    )
    .await
}

/// Reports which Bandwidth variables are set, never their values.
pub async fn env_check(State(state): State<Arc<AppState>>) -> Json<EnvCheckResponse> {
    Json(EnvCheckResponse {
        status: "ok",
        env_present: crate::config::presence(state.config.as_ref())
            .into_iter()
            .collect(),
    })
}

fn decode<B, R>(
    payload: Result<Json<B>, JsonRejection>,
    into_request: impl FnOnce(B) -> Result<R, Rejection>,
) -> Result<R, Rejection> {
    let Json(body) =
        payload.map_err(|err| Rejection(format!("invalid request body: {}", err.body_text())))?;
    into_request(body)
}

async fn relay(
    state: &AppState,
    request: Result<GatewayRequest, Rejection>,
    body: Body,
    failure: &'static str,
) -> Response {
    let request = match request {
        Ok(request) => request,
        Err(Rejection(message)) => {
            tracing::info!(%message, "rejected request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(message, None)),
            )
                .into_response();
        }
    };

    match state.client.execute(request).await {
        Ok(result) => {
            let parse = body == Body::ParseOrder && result.ok && !result.raw_body.trim().is_empty();
            let parsed = parse.then(|| crate::transport::parse_order_response(&result.raw_body));
            let status = if result.ok {
                StatusCode::OK
            } else {
                StatusCode::from_u16(result.http_status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            };
            (status, Json(GatewayResponse::new(result, parsed))).into_response()
        }
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(failure, Some(err.to_string()))),
        )
            .into_response(),
    }
}
