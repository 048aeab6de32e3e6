//! Request execution with tracing instrumentation.
//!
//! This module provides [`PrivacyClient`] and its builder. Every call goes
//! through [`PrivacyClient::execute`]: the request descriptor is resolved
//! against the base URL, default headers and timeout are applied, the
//! authenticating transport sends it, and the body is decoded.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{Span, debug, instrument, warn};
use url::Url;

use crate::auth::{ApiKeyAuth, Authenticated};
use crate::config::{ApiEnvironment, PrivacyConfig};
use crate::endpoint::ApiRequest;
use crate::error::{ApiError, ClientError, ConfigError, PrivacyError, ValidationError};
use crate::transport::Transport;

/// Idle connections kept per host by the default transport.
const POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Builder for configuring a [`PrivacyClient`].
#[derive(Debug)]
pub struct PrivacyClientBuilder {
    config: PrivacyConfig,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    default_headers: HeaderMap,
}

impl PrivacyClientBuilder {
    fn new(config: PrivacyConfig) -> Self {
        Self {
            config,
            base_url: None,
            timeout: None,
            default_headers: HeaderMap::new(),
        }
    }

    /// Sets a per-request timeout.
    ///
    /// No timeout is applied unless one is set here or by the transport.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = PrivacyClient::builder(config)
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header to every request.
    ///
    /// `Authorization` is always overwritten by the API key.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, PrivacyError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ConfigError::InvalidHeader(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ConfigError::InvalidHeader(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sends requests to `base_url` instead of the environment's host.
    ///
    /// Meant for mock servers and forwarding proxies.
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Builds a client on top of a pooled `reqwest::Client`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<PrivacyClient, PrivacyError> {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .build()
            .map_err(ConfigError::HttpClient)?;
        self.build_with_transport(http)
    }

    /// Builds a client that sends through a caller-supplied transport.
    ///
    /// The transport is wrapped with API key authentication, so every request
    /// it sees is already stamped.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL cannot carry a path.
    pub fn build_with_transport<T: Transport>(
        self,
        transport: T,
    ) -> Result<PrivacyClient<T>, PrivacyError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => self.config.environment().url()?,
        };
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase(base_url.to_string()).into());
        }

        let environment = self.config.environment();
        let config = Arc::new(self.config);
        let transport = Authenticated::new(ApiKeyAuth::new(Arc::clone(&config)), transport);

        debug!(%environment, base_url = %base_url, "Cards API client configured");

        Ok(PrivacyClient {
            config,
            base_url,
            timeout: self.timeout,
            default_headers: self.default_headers,
            transport,
        })
    }
}

/// Async client for the Cards API.
///
/// Holds only immutable state, so one instance can serve concurrent callers
/// (`&PrivacyClient` is enough; wrap in `Arc` to share across tasks).
///
/// ## Examples
///
/// ```rust,ignore
/// use privacy_lib::{Card, CardType, PrivacyClient, PrivacyConfig};
///
/// let client = PrivacyClient::new(PrivacyConfig::sandbox("sk-test"))?;
/// let card = client
///     .create_card(&Card::new().with_type(CardType::SingleUse).with_memo("Groceries"))
///     .await?;
/// println!("created {}", card.token());
/// ```
#[derive(Debug)]
pub struct PrivacyClient<T = reqwest::Client> {
    config: Arc<PrivacyConfig>,
    base_url: Url,
    timeout: Option<Duration>,
    default_headers: HeaderMap,
    transport: Authenticated<T>,
}

impl PrivacyClient {
    /// Creates a new builder.
    pub fn builder(config: PrivacyConfig) -> PrivacyClientBuilder {
        PrivacyClientBuilder::new(config)
    }

    /// Creates a client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: PrivacyConfig) -> Result<Self, PrivacyError> {
        Self::builder(config).build()
    }
}

impl<T: Transport> PrivacyClient<T> {
    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured environment.
    pub fn environment(&self) -> ApiEnvironment {
        self.config.environment()
    }

    /// Returns the configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        self.transport.inner()
    }

    /// Executes a request and decodes the JSON response.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The request cannot be built or authenticated
    /// - The transport fails (network, timeout)
    /// - The server returns a non-success status code
    /// - The response body does not decode as `R`
    #[instrument(
        name = "privacy_request",
        skip(self, request),
        fields(
            endpoint = request.endpoint().id(),
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub(crate) async fn execute<R>(&self, request: ApiRequest) -> Result<R, PrivacyError>
    where
        R: DeserializeOwned,
    {
        let span = Span::current();
        span.record("http.method", request.endpoint().method().to_string().as_str());

        let mut http_request = request.into_request(&self.base_url)?;
        span.record("http.url", http_request.url().as_str());

        for (name, value) in &self.default_headers {
            http_request.headers_mut().insert(name.clone(), value.clone());
        }
        if let Some(timeout) = self.timeout {
            *http_request.timeout_mut() = Some(timeout);
        }

        debug!("sending request");
        let response = self.transport.send(http_request).await?;

        let status = response.status();
        span.record("http.status_code", status.as_u16());

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            span.record("otel.status_code", otel_status);
            warn!(status = status.as_u16(), "Cards API returned an error status");

            return Err(ApiError::new(status.as_u16(), body).into());
        }

        span.record("otel.status_code", "OK");

        let body = response.bytes().await.map_err(ClientError::Request)?;
        let parsed = serde_json::from_slice(&body).map_err(ValidationError::JsonParse)?;

        Ok(parsed)
    }
}
