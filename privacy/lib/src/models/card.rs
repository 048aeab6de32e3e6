//! The card resource.

use serde::{Deserialize, Serialize};

use super::enums::{CardState, CardType, SpendLimitDuration};
use super::funding::FundingSource;

/// A virtual or physical payment card.
///
/// Every field is optional. The same type is used for responses, creation
/// payloads and partial updates: fields left as `None` are not serialized,
/// so an update only touches what was set.
///
/// ## Examples
///
/// ```rust
/// use privacy_lib::{Card, CardState, CardType, SpendLimitDuration};
///
/// let card = Card::new()
///     .with_type(CardType::SingleUse)
///     .with_memo("New Card")
///     .with_spend_limit(1000)
///     .with_spend_limit_duration(SpendLimitDuration::Transaction)
///     .with_state(CardState::Open);
///
/// let json = serde_json::to_value(&card).unwrap();
/// assert_eq!(json["type"], "SINGLE_USE");
/// assert!(json.get("token").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// ISO 8601 timestamp of when the card was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Three digit CVV printed on the back of the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,

    /// Funding source backing the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding: Option<FundingSource>,

    /// Two digit (MM) expiry month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp_month: Option<String>,

    /// Four digit (YYYY) expiry year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp_year: Option<String>,

    /// Hostname of the card's locked merchant, empty when not applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Last four digits of the card number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_four: Option<String>,

    /// Free-text name identifying the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,

    /// Sixteen digit card number.
    ///
    /// Always present in sandbox; in production only for customers with
    /// verified PCI compliance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,

    /// Spend limit in cents. Authorizations above it are declined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spend_limit: Option<i64>,

    /// Window the spend limit applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spend_limit_duration: Option<SpendLimitDuration>,

    /// Lifecycle state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<CardState>,

    /// Server-assigned globally unique identifier. Leave unset when creating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Card type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,

    /// Auth rules applying at card, account or program level, in server order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_rule_tokens: Option<Vec<String>>,
}

impl Card {
    /// Creates an empty card payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the card type.
    pub fn with_type(mut self, card_type: impl Into<CardType>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    /// Sets the memo.
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Sets the spend limit in cents.
    pub fn with_spend_limit(mut self, cents: i64) -> Self {
        self.spend_limit = Some(cents);
        self
    }

    /// Sets the spend limit window.
    pub fn with_spend_limit_duration(mut self, duration: impl Into<SpendLimitDuration>) -> Self {
        self.spend_limit_duration = Some(duration.into());
        self
    }

    /// Sets the state.
    pub fn with_state(mut self, state: impl Into<CardState>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the locked merchant hostname.
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Returns the token, or `""` for cards that have not been created yet.
    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or_default()
    }
}
