//! Funding source attached to a card.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The account backing a card's spending.
///
/// Only passed through by this client: documented fields are exposed for
/// convenience and everything else lands in [`extra`](Self::extra), so
/// nothing the server sends is lost when a card is re-serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundingSource {
    /// Account name identifying the funding source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    /// ISO 8601 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Last four digits of the account number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_four: Option<String>,
    /// User-assigned nickname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Funding state, e.g. `ENABLED` or `PENDING`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Globally unique identifier of the funding source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Funding type, e.g. `DEPOSITORY_CHECKING`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub funding_type: Option<String>,
    /// Any other fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_pass_through() {
        let json = serde_json::json!({
            "account_name": "Checking",
            "token": "fs-1",
            "type": "DEPOSITORY_CHECKING",
            "routing_hint": {"bank": "x"}
        });
        let funding: FundingSource = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(funding.funding_type.as_deref(), Some("DEPOSITORY_CHECKING"));
        assert!(funding.extra.contains_key("routing_hint"));
        assert_eq!(serde_json::to_value(&funding).unwrap(), json);
    }
}
