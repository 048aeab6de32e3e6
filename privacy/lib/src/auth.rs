//! Per-request API key authentication.
//!
//! [`ApiKeyAuth`] stamps `Authorization: api-key <key>` onto a request.
//! [`Authenticated`] wraps a [`Transport`] so that every request sent through
//! it is stamped immediately before it leaves, reading the key from the shared
//! configuration each time.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Request, Response};
use tracing::trace;

use crate::config::PrivacyConfig;
use crate::error::{AuthError, ClientError, PrivacyError};
use crate::transport::Transport;

/// Authorization scheme expected by the Cards API.
pub const API_KEY_SCHEME: &str = "api-key";

/// Attaches the configured API key to outgoing requests.
///
/// Holds a shared reference to the client's configuration rather than a
/// copy of the key, so the header always reflects the configuration that is
/// current when the request is sent.
#[derive(Debug, Clone)]
pub struct ApiKeyAuth {
    config: Arc<PrivacyConfig>,
}

impl ApiKeyAuth {
    /// Creates an authenticator reading from `config`.
    pub fn new(config: Arc<PrivacyConfig>) -> Self {
        Self { config }
    }

    /// Builds the `Authorization` header value.
    ///
    /// The value is marked sensitive so it is never printed by `Debug`.
    ///
    /// ## Errors
    ///
    /// Returns [`AuthError::InvalidKeyFormat`] if the key contains characters
    /// that cannot appear in a header.
    pub fn header_value(&self) -> Result<HeaderValue, AuthError> {
        let mut value = HeaderValue::try_from(format!(
            "{API_KEY_SCHEME} {}",
            self.config.api_key()
        ))
        .map_err(|_| AuthError::InvalidKeyFormat)?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Sets the `Authorization` header, replacing any previous value.
    ///
    /// Nothing else on the request is touched.
    ///
    /// ## Errors
    ///
    /// Returns an error if the key cannot be encoded as a header value.
    pub fn authenticate(&self, request: &mut Request) -> Result<(), AuthError> {
        let value = self.header_value()?;
        request.headers_mut().insert(AUTHORIZATION, value);
        trace!(url = %request.url(), "attached api-key credential");
        Ok(())
    }
}

/// A transport wrapped with API key authentication.
///
/// `send` is the `(request, next)` step of the pipeline: the request is
/// stamped by [`ApiKeyAuth`] and then handed to the inner transport. A request
/// that goes through `send` again is stamped again.
#[derive(Debug, Clone)]
pub struct Authenticated<T> {
    auth: ApiKeyAuth,
    inner: T,
}

impl<T: Transport> Authenticated<T> {
    /// Wraps `inner` so that every request is authenticated with `auth`.
    pub fn new(auth: ApiKeyAuth, inner: T) -> Self {
        Self { auth, inner }
    }

    /// Returns the wrapped transport.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Authenticates and sends a request.
    ///
    /// ## Errors
    ///
    /// Returns an auth error if the key cannot be attached (the request is
    /// not sent), or a client error if the transport fails.
    pub async fn send(&self, mut request: Request) -> Result<Response, PrivacyError> {
        self.auth.authenticate(&mut request)?;
        let response = self
            .inner
            .send(request)
            .await
            .map_err(ClientError::Request)?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use reqwest::header::CONTENT_TYPE;
    use url::Url;

    fn request() -> Request {
        let url = Url::parse("https://sandbox.privacy.com/v1/cards?page=2").unwrap();
        let mut request = Request::new(Method::POST, url);
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(r#"{"memo":"x"}"#.into());
        request
    }

    #[test]
    fn test_header_format() {
        let auth = ApiKeyAuth::new(Arc::new(PrivacyConfig::sandbox("my-key")));
        let value = auth.header_value().unwrap();
        assert_eq!(value.to_str().unwrap(), "api-key my-key");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_authenticate_only_touches_authorization() {
        let auth = ApiKeyAuth::new(Arc::new(PrivacyConfig::sandbox("my-key")));
        let mut req = request();
        auth.authenticate(&mut req).unwrap();

        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.url().as_str(), "https://sandbox.privacy.com/v1/cards?page=2");
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(
            req.body().and_then(|b| b.as_bytes()),
            Some(br#"{"memo":"x"}"#.as_slice())
        );
        assert_eq!(req.headers()[AUTHORIZATION], "api-key my-key");
        assert_eq!(req.headers().len(), 2);
    }

    #[test]
    fn test_authenticate_replaces_stale_header() {
        let auth = ApiKeyAuth::new(Arc::new(PrivacyConfig::sandbox("fresh")));
        let mut req = request();
        req.headers_mut()
            .insert(AUTHORIZATION, HeaderValue::from_static("api-key stale"));

        auth.authenticate(&mut req).unwrap();

        let values: Vec<_> = req.headers().get_all(AUTHORIZATION).iter().collect();
        assert_eq!(values, vec!["api-key fresh"]);
    }

    #[test]
    fn test_empty_key_still_sent() {
        let auth = ApiKeyAuth::new(Arc::new(PrivacyConfig::production("")));
        let mut req = request();
        auth.authenticate(&mut req).unwrap();
        assert!(req.headers().contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_invalid_key_format() {
        let auth = ApiKeyAuth::new(Arc::new(PrivacyConfig::production("bad\nkey")));
        let mut req = request();
        let result = auth.authenticate(&mut req);
        assert!(matches!(result, Err(AuthError::InvalidKeyFormat)));
        assert!(!req.headers().contains_key(AUTHORIZATION));
    }

    /// Records the `Authorization` header of every request it forwards.
    #[derive(Debug, Default)]
    struct Recording {
        inner: reqwest::Client,
        seen: std::sync::Mutex<Vec<String>>,
    }

    impl Transport for Recording {
        fn send(
            &self,
            request: Request,
        ) -> impl std::future::Future<Output = Result<Response, reqwest::Error>> + Send {
            let value = request
                .headers()
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            self.seen.lock().unwrap().push(value);
            self.inner.execute(request)
        }
    }

    #[tokio::test]
    async fn test_each_attempt_is_stamped_again() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(3)
            .mount(&server)
            .await;

        let auth = ApiKeyAuth::new(Arc::new(PrivacyConfig::sandbox("fresh")));
        let transport = Authenticated::new(auth, Recording::default());
        let url = Url::parse(&format!("{}/v1/cards", server.uri())).unwrap();

        // Retry loop outside the authentication step, carrying the previous
        // attempt's headers forward.
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("api-key stale"));
        for _ in 0..3 {
            let mut attempt = Request::new(Method::GET, url.clone());
            *attempt.headers_mut() = headers.clone();
            let response = transport.send(attempt).await.unwrap();
            assert_eq!(response.status().as_u16(), 503);
        }

        let seen = transport.inner().seen.lock().unwrap().clone();
        assert_eq!(seen, vec!["api-key fresh"; 3]);
    }
}
