//! The seam between the client and the HTTP stack.
//!
//! The client never opens connections itself. It builds a fully formed
//! [`reqwest::Request`] and hands it to a [`Transport`]. `reqwest::Client`
//! is the default; hosts that want retries, proxies or extra
//! instrumentation implement the trait around their own stack.

use std::future::Future;
use std::sync::Arc;

use reqwest::{Request, Response};

/// Performs one HTTP exchange.
///
/// Implementations own connection pooling, TLS and timeouts. A request's
/// [`timeout`](Request::timeout) should be honored when set.
///
/// The client wraps its transport in [`Authenticated`](crate::Authenticated),
/// so a transport sees requests whose `Authorization` header is already set.
/// A retry layer written as a `Transport` would resend that same header.
/// Retries belong outside the authentication step instead: wrap
/// [`Authenticated`](crate::Authenticated) and call its `send` once per
/// attempt, so every attempt is stamped again from the current configuration.
///
/// ## Examples
///
/// ```rust,ignore
/// use privacy_lib::Transport;
///
/// #[derive(Debug)]
/// struct Logged(reqwest::Client);
///
/// impl Transport for Logged {
///     fn send(
///         &self,
///         request: reqwest::Request,
///     ) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>> + Send {
///         tracing::info!(url = %request.url(), "outgoing");
///         self.0.execute(request)
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends the request and resolves to the raw response.
    fn send(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, reqwest::Error>> + Send;
}

impl Transport for reqwest::Client {
    fn send(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, reqwest::Error>> + Send {
        self.execute(request)
    }
}

impl<T: Transport> Transport for Arc<T> {
    fn send(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, reqwest::Error>> + Send {
        self.as_ref().send(request)
    }
}
