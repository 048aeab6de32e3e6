//! Endpoint definitions and request descriptors.
//!
//! An [`Endpoint`] is the static half of a call: id, method and a path
//! template such as `/v1/cards/{cardId}`. An [`ApiRequest`] adds the per-call
//! half: path parameter values, query pairs and an optional JSON body. It is
//! turned into a [`reqwest::Request`] against a base URL just before sending.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use url::Url;

use crate::error::{ConfigError, ValidationError};
use crate::method::RestMethod;

/// `POST /v1/cards`
pub const CREATE_CARD: Endpoint = Endpoint::new("create_card", RestMethod::Post, "/v1/cards");

/// `PATCH /v1/cards/{cardId}`
pub const UPDATE_CARD: Endpoint =
    Endpoint::new("update_card", RestMethod::Patch, "/v1/cards/{cardId}");

/// `GET /v1/cards`
pub const LIST_CARDS: Endpoint = Endpoint::new("list_cards", RestMethod::Get, "/v1/cards");

/// `GET /v1/cards/{cardToken}`
pub const GET_CARD: Endpoint = Endpoint::new("get_card", RestMethod::Get, "/v1/cards/{cardToken}");

/// A REST endpoint of the Cards API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    id: &'static str,
    method: RestMethod,
    path: &'static str,
}

impl Endpoint {
    /// Creates an endpoint definition.
    pub const fn new(id: &'static str, method: RestMethod, path: &'static str) -> Self {
        Self { id, method, path }
    }

    /// Returns the endpoint's identifier, used in logs.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Returns the path template.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Extracts path parameter names from the template, in order.
    pub fn path_params(&self) -> Vec<&'static str> {
        self.segments()
            .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
            .collect()
    }

    /// Resolves the template against `base_url`.
    ///
    /// Each `{param}` segment is replaced by its value from `params` and
    /// percent-encoded as a single path segment. Any path already on the base
    /// URL is kept as a prefix.
    ///
    /// ## Errors
    ///
    /// Returns an error if a parameter has no value or the base URL cannot
    /// carry a path.
    pub fn url(&self, base_url: &Url, params: &[(&str, &str)]) -> Result<Url, ConfigError> {
        let mut url = base_url.clone();
        url.set_query(None);
        url.set_fragment(None);

        let mut resolved = Vec::new();
        for segment in self.segments() {
            match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| ConfigError::missing(format!("path parameter `{name}`")))?;
                    resolved.push(value);
                }
                None => resolved.push(segment),
            }
        }

        url.path_segments_mut()
            .map_err(|_| ConfigError::CannotBeABase(base_url.to_string()))?
            .pop_if_empty()
            .extend(resolved);

        Ok(url)
    }

    fn segments(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter(|segment| !segment.is_empty())
    }
}

/// A fully described call: endpoint plus path values, query and body.
///
/// ## Examples
///
/// ```rust
/// use privacy_lib::endpoint::{ApiRequest, GET_CARD};
/// use url::Url;
///
/// let request = ApiRequest::new(GET_CARD)
///     .path_param("cardToken", "8e323b8c-9d18-45fb-9c31-bd1bf80909fb")
///     .query(vec![("page_size", "50".to_string()), ("page", "1".to_string())]);
///
/// let base = Url::parse("https://sandbox.privacy.com").unwrap();
/// let http = request.into_request(&base).unwrap();
/// assert_eq!(
///     http.url().as_str(),
///     "https://sandbox.privacy.com/v1/cards/8e323b8c-9d18-45fb-9c31-bd1bf80909fb?page_size=50&page=1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    endpoint: Endpoint,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Starts a request for `endpoint` with no parameters and no body.
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Sets the value of a `{name}` path segment.
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Appends query pairs, preserving their order.
    pub fn query(mut self, pairs: impl IntoIterator<Item = (&'static str, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Serializes `payload` as the JSON body.
    ///
    /// ## Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn json_body<B: Serialize + ?Sized>(mut self, payload: &B) -> Result<Self, ValidationError> {
        let body = serde_json::to_vec(payload).map_err(ValidationError::JsonEncode)?;
        self.body = Some(body);
        Ok(self)
    }

    /// Returns the endpoint this request targets.
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Returns the query pairs in the order they will be sent.
    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Returns the serialized body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Builds the HTTP request against `base_url`.
    ///
    /// The request is not authenticated yet.
    ///
    /// ## Errors
    ///
    /// Returns an error if the URL cannot be resolved.
    pub fn into_request(self, base_url: &Url) -> Result<reqwest::Request, ConfigError> {
        let params: Vec<(&str, &str)> = self
            .path_params
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        let mut url = self.endpoint.url(base_url, &params)?;

        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        let mut request = reqwest::Request::new(self.endpoint.method.to_reqwest(), url);
        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(body) = self.body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(body.into());
        }

        Ok(request)
    }
}
