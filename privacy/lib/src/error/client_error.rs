//! HTTP transport errors.

use thiserror::Error;

/// Errors from the transport layer.
///
/// These represent failures to complete an HTTP exchange at all, as opposed
/// to the server answering with an error status.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The caller cancelled the operation before it completed.
    #[error("Request cancelled")]
    Cancelled,
}

impl ClientError {
    /// Returns `true` if the transport gave up waiting for a response.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Request(e) => e.is_timeout(),
            Self::Cancelled => false,
        }
    }

    /// Returns `true` if no connection could be established.
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Request(e) => e.is_connect(),
            Self::Cancelled => false,
        }
    }
}
