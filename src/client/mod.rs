//! Client layer: the Bandwidth gateway.
//!
//! Each call loads credentials, encodes the payload, performs exactly one HTTP exchange and
//! returns the raw outcome. Upstream failures are data, not errors.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::config::{ConfigError, ConfigSource, Credentials, EnvSource};
use crate::domain::{
    AccountId, AddCampaign, GatewayRequest, GatewayResult, RemoveCampaign, SendMessage,
    TransferNumbers,
};

#[cfg(test)]
pub(crate) mod fake;

const DEFAULT_BASE_ENDPOINT: &str = "https://api.bandwidth.com/api/v2/accounts";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    pub(crate) method: HttpMethod,
    pub(crate) url: String,
    pub(crate) authorization: String,
    pub(crate) body: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) status_text: String,
    pub(crate) body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let builder = match request.method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Post => self.client.post(&request.url),
            };
            let mut builder = builder
                .header(reqwest::header::AUTHORIZATION, request.authorization)
                .header(reqwest::header::CONTENT_TYPE, "application/json");
            if let Some(body) = request.body.as_ref() {
                builder = builder.json(body);
            }

            let response = builder.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok(HttpResponse {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_owned(),
                body,
            })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`BandwidthClient`].
///
/// A response with a non-2xx status is not an error; it is returned as a [`GatewayResult`]
/// with `ok == false`.
pub enum GatewayError {
    /// Required configuration is missing or invalid. No request was sent.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP exchange could not be completed (DNS, TLS, connection reset, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The request payload could not be serialized.
    #[error("payload encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The configured base endpoint is not a usable URL.
    #[error("invalid base endpoint: {0}")]
    InvalidEndpoint(String),
}

#[derive(Clone)]
/// Builder for [`BandwidthClient`].
///
/// Use this when you need a different configuration source, endpoint, timeout, or user-agent.
pub struct BandwidthClientBuilder {
    config: Arc<dyn ConfigSource>,
    base_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl BandwidthClientBuilder {
    /// Create a builder reading the process environment and targeting the v2 accounts API.
    pub fn new() -> Self {
        Self {
            config: Arc::new(EnvSource),
            base_endpoint: DEFAULT_BASE_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Read credentials from `source` instead of the environment.
    pub fn config_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.config = Arc::new(source);
        self
    }

    /// Override the accounts base URL; the account id and operation path are appended to it.
    pub fn base_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.base_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`BandwidthClient`].
    pub fn build(self) -> Result<BandwidthClient, GatewayError> {
        base_url(&self.base_endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| GatewayError::Transport(Box::new(err)))?;

        Ok(BandwidthClient {
            config: self.config,
            base_endpoint: self.base_endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

impl Default for BandwidthClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
/// Authenticated gateway to the Bandwidth accounts API.
///
/// Endpoints, relative to `https://api.bandwidth.com/api/v2/accounts`:
/// - `GET /{account}` for the account status
/// - `GET /{account}/phoneNumbers`
/// - `POST /{account}/messages`
/// - `POST /{account}/tnOptions` to add or remove a campaign
/// - `POST /{account}/moveTns` to transfer numbers
///
/// Credentials are read from the configuration source on every call; nothing is cached.
pub struct BandwidthClient {
    config: Arc<dyn ConfigSource>,
    base_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl BandwidthClient {
    /// Create a client reading credentials from `source`.
    ///
    /// For more customization, use [`BandwidthClient::builder`].
    pub fn new(source: impl ConfigSource + 'static) -> Self {
        Self {
            config: Arc::new(source),
            base_endpoint: DEFAULT_BASE_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Create a client reading credentials from the process environment.
    pub fn from_env() -> Self {
        Self::new(EnvSource)
    }

    /// Start building a client with custom settings.
    pub fn builder() -> BandwidthClientBuilder {
        BandwidthClientBuilder::new()
    }

    #[cfg(test)]
    pub(crate) fn with_transport(
        source: impl ConfigSource + 'static,
        base_endpoint: &str,
        http: impl HttpTransport + 'static,
    ) -> Self {
        Self {
            config: Arc::new(source),
            base_endpoint: base_endpoint.to_owned(),
            http: Arc::new(http),
        }
    }

    /// Check that the credentials reach the account.
    pub async fn account_status(&self) -> Result<GatewayResult, GatewayError> {
        self.execute(GatewayRequest::AccountStatus).await
    }

    /// List the numbers of the account.
    pub async fn list_numbers(&self) -> Result<GatewayResult, GatewayError> {
        self.execute(GatewayRequest::ListNumbers).await
    }

    /// Send a text message. Also requires `BANDWIDTH_APPLICATION_ID`.
    pub async fn send_message(&self, request: SendMessage) -> Result<GatewayResult, GatewayError> {
        self.execute(request.into()).await
    }

    /// Submit a TN option order attaching a campaign.
    pub async fn add_campaign(&self, request: AddCampaign) -> Result<GatewayResult, GatewayError> {
        self.execute(request.into()).await
    }

    /// Submit a TN option order resetting the campaign to the system default.
    pub async fn remove_campaign(
        &self,
        request: RemoveCampaign,
    ) -> Result<GatewayResult, GatewayError> {
        self.execute(request.into()).await
    }

    /// Move numbers to another sub-account and location.
    pub async fn transfer_numbers(
        &self,
        request: TransferNumbers,
    ) -> Result<GatewayResult, GatewayError> {
        self.execute(request.into()).await
    }

    /// Perform one upstream call.
    ///
    /// Errors:
    /// - [`GatewayError::Config`] when a required value is missing; no request is sent,
    /// - [`GatewayError::Transport`] when the exchange cannot be completed.
    ///
    /// Any HTTP status, including 4xx and 5xx, is returned as a [`GatewayResult`].
    pub async fn execute(&self, request: GatewayRequest) -> Result<GatewayResult, GatewayError> {
        let operation = request.operation();
        let (credentials, body) = self.prepare(&request).inspect_err(|err| {
            tracing::warn!(operation, error = %err, "Bandwidth call not sent");
        })?;

        let (method, path) = route(&request);
        let url = self.endpoint_url(credentials.account_id(), path)?;
        tracing::debug!(operation, method = method.as_str(), %url, "calling Bandwidth");

        let response = self
            .http
            .send(HttpRequest {
                method,
                url,
                authorization: credentials.basic_authorization(),
                body,
            })
            .await
            .map_err(|err| {
                tracing::error!(operation, error = %err, "Bandwidth request failed");
                GatewayError::Transport(err)
            })?;

        let ok = (200..=299).contains(&response.status);
        if ok {
            tracing::debug!(
                operation,
                status = response.status,
                "Bandwidth call succeeded"
            );
        } else {
            tracing::warn!(
                operation,
                status = response.status,
                "Bandwidth returned a non-success status"
            );
        }

        Ok(GatewayResult {
            ok,
            http_status: response.status,
            http_status_text: response.status_text,
            raw_body: response.body,
        })
    }

    fn prepare(
        &self,
        request: &GatewayRequest,
    ) -> Result<(Credentials, Option<serde_json::Value>), GatewayError> {
        let source = self.config.as_ref();
        let prepared = match request {
            GatewayRequest::AccountStatus | GatewayRequest::ListNumbers => {
                (Credentials::load(source)?, None)
            }
            GatewayRequest::SendMessage(message) => {
                let (credentials, application_id) = Credentials::load_with_application_id(source)?;
                let body = crate::transport::encode_send_message_json(message, &application_id)?;
                (credentials, Some(body))
            }
            GatewayRequest::AddCampaign(order) => (
                Credentials::load(source)?,
                Some(crate::transport::encode_add_campaign_json(order)?),
            ),
            GatewayRequest::RemoveCampaign(order) => (
                Credentials::load(source)?,
                Some(crate::transport::encode_remove_campaign_json(order)?),
            ),
            GatewayRequest::TransferNumbers(order) => (
                Credentials::load(source)?,
                Some(crate::transport::encode_transfer_numbers_json(order)?),
            ),
        };
        Ok(prepared)
    }

    fn endpoint_url(
        &self,
        account_id: &AccountId,
        path: Option<&str>,
    ) -> Result<String, GatewayError> {
        let mut url = base_url(&self.base_endpoint)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| GatewayError::InvalidEndpoint(self.base_endpoint.clone()))?;
            segments.pop_if_empty().push(account_id.as_str());
            if let Some(path) = path {
                segments.push(path);
            }
        }
        Ok(url.to_string())
    }
}

fn base_url(endpoint: &str) -> Result<Url, GatewayError> {
    let url = Url::parse(endpoint)
        .map_err(|err| GatewayError::InvalidEndpoint(format!("{endpoint}: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(GatewayError::InvalidEndpoint(endpoint.to_owned()));
    }
    Ok(url)
}

fn route(request: &GatewayRequest) -> (HttpMethod, Option<&'static str>) {
    match request {
        GatewayRequest::AccountStatus => (HttpMethod::Get, None),
        GatewayRequest::ListNumbers => (HttpMethod::Get, Some("phoneNumbers")),
        GatewayRequest::SendMessage(_) => (HttpMethod::Post, Some("messages")),
        GatewayRequest::AddCampaign(_) | GatewayRequest::RemoveCampaign(_) => {
            (HttpMethod::Post, Some("tnOptions"))
        }
        GatewayRequest::TransferNumbers(_) => (HttpMethod::Post, Some("moveTns")),
    }
}
