//! Typed client for the privacy.com Cards API.
//!
//! Configure an API key and environment once, then create, update, list and
//! fetch cards through typed methods instead of hand-built HTTP requests.
//!
//! ## Features
//!
//! - **Typed wire model**: [`Card`], [`Page`] and friends map 1:1 onto the
//!   API's JSON; unset fields are never sent, so updates stay partial
//! - **Uniform authentication**: every request passes through [`Authenticated`],
//!   which stamps `Authorization: api-key <key>` right before sending
//! - **Pluggable transport**: `reqwest::Client` by default, anything
//!   implementing [`Transport`] otherwise
//! - **Layered errors**: transport, API status, decoding, auth and config
//!   failures are distinct variants of [`PrivacyError`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use privacy_lib::{Card, CardState, CardType, PrivacyClient, PrivacyConfig, SpendLimitDuration};
//!
//! let client = PrivacyClient::new(PrivacyConfig::sandbox("sk-test"))?;
//!
//! let card = client
//!     .create_card(
//!         &Card::new()
//!             .with_type(CardType::SingleUse)
//!             .with_memo("New Card")
//!             .with_spend_limit(1000)
//!             .with_spend_limit_duration(SpendLimitDuration::Transaction)
//!             .with_state(CardState::Open),
//!     )
//!     .await?;
//!
//! client
//!     .update_card(card.token(), &Card::new().with_state(CardState::Paused))
//!     .await?;
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod models;
pub mod transport;

// Re-exports for convenience
pub use auth::{ApiKeyAuth, Authenticated};
pub use client::{PrivacyClient, PrivacyClientBuilder, cancellable};
pub use config::{ApiEnvironment, PrivacyConfig};
pub use error::{ApiError, AuthError, ClientError, ConfigError, PrivacyError, ValidationError};
pub use method::RestMethod;
pub use models::{
    Card, CardListParams, CardState, CardType, FundingSource, Page, SpendLimitDuration,
};
pub use transport::Transport;
