//! Non-success responses returned by the Cards API.

use thiserror::Error;

/// The server answered with a non-2xx status.
///
/// Carries the status code and the raw response body so callers can branch
/// on status (401 for a bad key, 422 for a rejected payload, ...) and inspect
/// whatever the server sent back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HTTP {status}: {body}")]
pub struct ApiError {
    /// The HTTP status code returned.
    pub status: u16,
    /// The response body, verbatim.
    pub body: String,
}

impl ApiError {
    /// Creates an API error from a status code and raw body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Parses the body as JSON, if it is JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Returns the server's error message, read from the `error` or
    /// `message` field of a JSON body.
    pub fn message(&self) -> Option<String> {
        let json = self.json()?;
        ["error", "message"]
            .iter()
            .find_map(|key| json.get(key).and_then(|v| v.as_str()))
            .map(str::to_string)
    }

    /// Returns `true` for 401 and 403 responses.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status, 401 | 403)
    }

    /// Returns `true` for 5xx responses.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ApiError::new(422, r#"{"error": "invalid_request"}"#);
        assert_eq!(err.to_string(), r#"HTTP 422: {"error": "invalid_request"}"#);
    }

    #[test]
    fn test_json_body() {
        let err = ApiError::new(422, r#"{"error": "invalid_request"}"#);
        assert_eq!(
            err.json(),
            Some(serde_json::json!({"error": "invalid_request"}))
        );
        assert_eq!(err.message().as_deref(), Some("invalid_request"));
    }

    #[test]
    fn test_message_field() {
        let err = ApiError::new(400, r#"{"message": "page_size out of range"}"#);
        assert_eq!(err.message().as_deref(), Some("page_size out of range"));
    }

    #[test]
    fn test_plain_text_body() {
        let err = ApiError::new(502, "Bad Gateway");
        assert_eq!(err.json(), None);
        assert_eq!(err.message(), None);
        assert!(err.is_server_error());
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::new(401, "").is_unauthorized());
        assert!(ApiError::new(403, "").is_unauthorized());
        assert!(!ApiError::new(404, "").is_unauthorized());
    }
}
