//! HTTP client module.
//!
//! This module provides the async client for the Cards API, with automatic
//! API key authentication and tracing instrumentation.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use privacy_lib::{CardListParams, PrivacyClient, PrivacyConfig};
//!
//! let client = PrivacyClient::new(PrivacyConfig::from_env()?)?;
//!
//! let page = client.list_cards(&CardListParams::new().page_size(10)).await?;
//! for card in &page {
//!     println!("{} {:?}", card.token(), card.memo);
//! }
//! ```

mod cards;
mod executor;

use std::future::Future;

use tracing::debug;

use crate::error::{ClientError, PrivacyError};

pub use executor::{PrivacyClient, PrivacyClientBuilder};

/// Runs `operation` until it finishes or `cancel` resolves, whichever comes
/// first.
///
/// On cancellation the in-flight request is dropped and
/// [`ClientError::Cancelled`] is returned. If both are ready at once,
/// cancellation wins.
///
/// ## Examples
///
/// ```rust,ignore
/// use privacy_lib::client::cancellable;
///
/// let (stop, stopped) = tokio::sync::oneshot::channel::<()>();
/// let page = cancellable(client.list_cards(&params), async {
///     let _ = stopped.await;
/// })
/// .await;
/// ```
pub async fn cancellable<T, F, C>(operation: F, cancel: C) -> Result<T, PrivacyError>
where
    F: Future<Output = Result<T, PrivacyError>>,
    C: Future<Output = ()>,
{
    tokio::select! {
        biased;
        () = cancel => {
            debug!("operation cancelled by caller");
            Err(ClientError::Cancelled.into())
        }
        result = operation => result,
    }
}
