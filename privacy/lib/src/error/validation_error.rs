//! Body encoding and decoding errors.

use thiserror::Error;

/// Errors turning typed values into request bodies or response bodies into
/// typed values.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The response body did not match the expected JSON shape.
    #[error("JSON parse error: {0}")]
    JsonParse(#[source] serde_json::Error),

    /// The request payload could not be serialized.
    #[error("JSON encode error: {0}")]
    JsonEncode(#[source] serde_json::Error),
}

impl ValidationError {
    /// Returns `true` if this is a response parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_))
    }
}
