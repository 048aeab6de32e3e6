//! Client configuration: API key and target environment.
//!
//! A [`PrivacyConfig`] is built once per client and never changes afterwards.
//! It decides both the base URL requests go to and the credential attached
//! to each of them.

use std::fmt;

use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};
use url::Url;

use crate::error::ConfigError;

/// Base URL of the production deployment.
pub const PRODUCTION_URL: &str = "https://api.privacy.com";

/// Base URL of the sandbox deployment.
pub const SANDBOX_URL: &str = "https://sandbox.privacy.com";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "PRIVACY_API_KEY";

/// Environment variable selecting the environment (`production` or `sandbox`).
pub const ENVIRONMENT_ENV: &str = "PRIVACY_ENVIRONMENT";

/// The deployment a client talks to.
///
/// ## Examples
///
/// ```rust
/// use privacy_lib::ApiEnvironment;
///
/// let env: ApiEnvironment = "Sandbox".parse().unwrap();
/// assert_eq!(env, ApiEnvironment::Sandbox);
/// assert_eq!(env.base_url(), "https://sandbox.privacy.com");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnvironment {
    /// Live cards, real money.
    #[default]
    Production,
    /// Test cards; full PANs are always returned.
    Sandbox,
}

impl ApiEnvironment {
    /// Returns the base URL for this environment.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_URL,
            Self::Sandbox => SANDBOX_URL,
        }
    }

    /// Returns the base URL for this environment as a parsed [`Url`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn url(self) -> Result<Url, ConfigError> {
        Ok(Url::parse(self.base_url())?)
    }
}

/// API key and environment for a Cards API client.
///
/// No validation happens here: an empty or wrong key is sent as-is and the
/// server rejects it. The key never appears in `Debug` output.
///
/// Hosts that keep settings in a config file can deserialize this directly:
///
/// ```rust
/// use privacy_lib::{ApiEnvironment, PrivacyConfig};
///
/// let config: PrivacyConfig =
///     serde_json::from_str(r#"{"api_key": "sk-test", "environment": "sandbox"}"#).unwrap();
/// assert_eq!(config.environment(), ApiEnvironment::Sandbox);
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct PrivacyConfig {
    api_key: String,
    #[serde(default)]
    environment: ApiEnvironment,
}

impl PrivacyConfig {
    /// Creates a configuration from an API key and environment.
    pub fn new(api_key: impl Into<String>, environment: ApiEnvironment) -> Self {
        Self {
            api_key: api_key.into(),
            environment,
        }
    }

    /// Creates a production configuration.
    pub fn production(api_key: impl Into<String>) -> Self {
        Self::new(api_key, ApiEnvironment::Production)
    }

    /// Creates a sandbox configuration.
    pub fn sandbox(api_key: impl Into<String>) -> Self {
        Self::new(api_key, ApiEnvironment::Sandbox)
    }

    /// Reads the configuration from `PRIVACY_API_KEY` and `PRIVACY_ENVIRONMENT`.
    ///
    /// ## Errors
    ///
    /// Returns an error if `PRIVACY_API_KEY` is unset or `PRIVACY_ENVIRONMENT`
    /// names an unknown environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// The API key is required; the environment defaults to production.
    ///
    /// ## Errors
    ///
    /// Returns an error if the API key is absent or the environment is unknown.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).ok_or_else(|| ConfigError::missing(API_KEY_ENV))?;
        let environment = match lookup(ENVIRONMENT_ENV) {
            Some(value) if !value.trim().is_empty() => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::UnknownEnvironment(value))?,
            _ => ApiEnvironment::default(),
        };

        Ok(Self::new(api_key, environment))
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the selected environment.
    pub fn environment(&self) -> ApiEnvironment {
        self.environment
    }
}

impl fmt::Debug for PrivacyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivacyConfig")
            .field("api_key", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}
