//! Authentication errors.

use thiserror::Error;

/// Errors attaching credentials to a request.
///
/// Rejections by the server (401/403) are reported as
/// [`ApiError`](super::ApiError) instead, so the status code is preserved.
#[derive(Debug, Error)]
pub enum AuthError {
    /// API key cannot be carried in an HTTP header.
    #[error("Invalid API key format")]
    InvalidKeyFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_display() {
        assert_eq!(AuthError::InvalidKeyFormat.to_string(), "Invalid API key format");
    }
}
