//! Client and configuration setup errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These occur while loading configuration or building a client, never
/// while a request is in flight.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL cannot carry a path (e.g. `mailto:` or `data:` URLs).
    #[error("URL cannot be used as a base: {0}")]
    CannotBeABase(String),

    /// A required configuration value is missing.
    #[error("Missing required configuration: {name}")]
    Missing {
        /// The name of the missing value.
        name: String,
    },

    /// The environment selector is not one of the known environments.
    #[error("Unknown environment: {0} (expected `production` or `sandbox`)")]
    UnknownEnvironment(String),

    /// The default HTTP transport could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// A default header name or value is invalid.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl ConfigError {
    /// Creates a missing value error.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }
}
