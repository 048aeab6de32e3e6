//! Top-level error type.

use super::{ApiError, AuthError, ClientError, ConfigError, ValidationError};
use thiserror::Error;

/// Top-level error type for all Cards API operations.
///
/// Every failure is normalized into one of these kinds; nothing is retried
/// or recovered locally.
///
/// ## Examples
///
/// ```rust,ignore
/// use privacy_lib::PrivacyError;
///
/// fn handle_error(err: PrivacyError) {
///     match err {
///         PrivacyError::Client(e) => eprintln!("Network error: {e}"),
///         PrivacyError::Api(e) if e.status == 401 => eprintln!("Bad API key"),
///         PrivacyError::Api(e) => eprintln!("Rejected by server: {e}"),
///         PrivacyError::Validation(e) => eprintln!("Unexpected response: {e}"),
///         PrivacyError::Auth(e) => eprintln!("Credential error: {e}"),
///         PrivacyError::Config(e) => eprintln!("Configuration error: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum PrivacyError {
    /// Transport failures (network, timeout, cancellation).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The server answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Request or response bodies that could not be (de)serialized.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The credential could not be attached to the request.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Client or configuration setup errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PrivacyError {
    /// Returns the HTTP status code when the server rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            _ => None,
        }
    }

    /// Returns `true` if the operation was cancelled by the caller.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Client(ClientError::Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_api_error() {
        let err: PrivacyError = ApiError::new(422, r#"{"error":"invalid_request"}"#).into();
        assert!(matches!(err, PrivacyError::Api(_)));
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_from_client_error() {
        let err: PrivacyError = ClientError::Cancelled.into();
        assert!(matches!(err, PrivacyError::Client(_)));
        assert!(err.is_cancelled());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_error_display() {
        let err = PrivacyError::Auth(AuthError::InvalidKeyFormat);
        assert!(err.to_string().contains("Invalid API key format"));
    }
}
