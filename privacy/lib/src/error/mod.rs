//! Error types for Cards API operations.
//!
//! Errors are layered: each failure mode has its own enum, and all of them
//! convert into the top-level [`PrivacyError`] so callers can either use `?`
//! freely or match on the specific kind.

mod api_error;
mod auth_error;
mod client_error;
mod config_error;
mod privacy_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use privacy_error::PrivacyError;
pub use validation_error::ValidationError;
