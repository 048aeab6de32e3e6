//! Enumerated card fields.
//!
//! The server owns these value sets and may add to them, so each enum keeps
//! unknown values in an `Other` variant instead of failing to parse. Any
//! string written by the server is written back unchanged.

macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// A value not known to this client, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Returns the value as sent on the wire.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(value) => value.as_str(),
                }
            }

            /// Returns `true` unless this is an [`Other`](Self::Other) value.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

open_enum! {
    /// Kind of card.
    pub enum CardType {
        /// Locks to the first merchant that charges it.
        MerchantLocked => "MERCHANT_LOCKED",
        /// Plastic card shipped to the cardholder.
        Physical => "PHYSICAL",
        /// Closes shortly after the first authorization.
        SingleUse => "SINGLE_USE",
        /// Usable at any merchant.
        Unlocked => "UNLOCKED",
        /// Provisioned to a digital wallet.
        DigitalWallet => "DIGITAL_WALLET",
    }
}

open_enum! {
    /// Lifecycle state of a card.
    pub enum CardState {
        /// Permanently closed.
        Closed => "CLOSED",
        /// Active and usable.
        Open => "OPEN",
        /// Temporarily declining all authorizations.
        Paused => "PAUSED",
        /// Physical card awaiting activation.
        PendingActivation => "PENDING_ACTIVATION",
        /// Physical card awaiting manufacture or shipping.
        PendingFulfillment => "PENDING_FULFILLMENT",
    }
}

open_enum! {
    /// Window over which the spend limit applies.
    pub enum SpendLimitDuration {
        /// Resets every year.
        Annually => "ANNUALLY",
        /// Never resets.
        Forever => "FOREVER",
        /// Resets every month.
        Monthly => "MONTHLY",
        /// Applies to each authorization.
        Transaction => "TRANSACTION",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(CardType::from("SINGLE_USE"), CardType::SingleUse);
        assert_eq!(CardState::from("PENDING_FULFILLMENT"), CardState::PendingFulfillment);
        assert_eq!(SpendLimitDuration::from("TRANSACTION"), SpendLimitDuration::Transaction);
        assert_eq!(CardType::DigitalWallet.as_str(), "DIGITAL_WALLET");
        assert_eq!(CardState::Paused.to_string(), "PAUSED");
    }

    #[test]
    fn test_unknown_value_is_kept() {
        let value: CardType = serde_json::from_str(r#""VIRTUAL_PREPAID""#).unwrap();
        assert_eq!(value, CardType::Other("VIRTUAL_PREPAID".to_string()));
        assert!(!value.is_known());
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""VIRTUAL_PREPAID""#);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let value: CardState = "open".parse().unwrap();
        assert_eq!(value, CardState::Other("open".to_string()));
        assert_eq!(value.as_str(), "open");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_value(SpendLimitDuration::Monthly).unwrap();
        assert_eq!(json, serde_json::json!("MONTHLY"));
    }

    #[test]
    fn test_non_string_is_rejected() {
        assert!(serde_json::from_str::<CardState>("42").is_err());
    }
}
