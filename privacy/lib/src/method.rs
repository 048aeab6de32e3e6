//! HTTP methods used by the Cards API.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods issued by this client.
///
/// ## Examples
///
/// ```rust
/// use privacy_lib::RestMethod;
///
/// let method = RestMethod::Patch;
/// assert!(method.has_body());
/// assert!(!method.is_safe());
///
/// let parsed: RestMethod = "GET".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Get);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve cards.
    Get,
    /// HTTP POST - Create a card.
    Post,
    /// HTTP PATCH - Partially update a card.
    Patch,
}

impl RestMethod {
    /// Returns `true` if this method carries a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }

    /// Returns `true` if this method is safe (read-only) and can be repeated
    /// freely.
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Get)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Patch => reqwest::Method::PATCH,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
