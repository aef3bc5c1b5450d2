// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entity identifiers in `shard.realm.num` form.
//!
//! All Hedera entities (accounts, tokens, topics, contracts, schedules)
//! share the same triplet addressing scheme. Each identifier type is a
//! distinct newtype so a token id can never be passed where an account id
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Failure to parse an entity identifier string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: {input:?} (expected shard.realm.num)")]
pub struct EntityIdError {
    /// Which entity kind was being parsed.
    pub kind: &'static str,
    /// The offending input string.
    pub input: String,
}

fn parse_triplet(kind: &'static str, s: &str) -> Result<(u64, u64, u64), EntityIdError> {
    let err = || EntityIdError {
        kind,
        input: s.to_string(),
    };
    let mut parts = s.trim().split('.');
    let shard = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
    let realm = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
    let num = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
    if parts.next().is_some() {
        return Err(err());
    }
    Ok((shard, realm, num))
}

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $kind:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            /// Shard number.
            pub shard: u64,
            /// Realm number.
            pub realm: u64,
            /// Entity number within the realm.
            pub num: u64,
        }

        impl $name {
            /// Build an id from its raw triplet.
            pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
                Self { shard, realm, num }
            }
        }

        impl FromStr for $name {
            type Err = EntityIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let (shard, realm, num) = parse_triplet($kind, s)?;
                Ok(Self { shard, realm, num })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

entity_id!(
    /// A crypto account identifier.
    AccountId,
    "account"
);
entity_id!(
    /// A token identifier.
    TokenId,
    "token"
);
entity_id!(
    /// A consensus topic identifier.
    TopicId,
    "topic"
);
entity_id!(
    /// A smart-contract identifier.
    ContractId,
    "contract"
);
entity_id!(
    /// A scheduled-transaction identifier.
    ScheduleId,
    "schedule"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_form() {
        let id: AccountId = "0.0.1001".parse().unwrap();
        assert_eq!(id, AccountId::new(0, 0, 1001));
        assert_eq!(id.to_string(), "0.0.1001");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("".parse::<TokenId>().is_err());
        assert!("0.0".parse::<TokenId>().is_err());
        assert!("0.0.12.7".parse::<TokenId>().is_err());
        assert!("0.0.abc".parse::<TokenId>().is_err());
        assert!("0x1234".parse::<AccountId>().is_err());
    }

    #[test]
    fn serde_round_trip() {
        let id = TopicId::new(0, 0, 4242);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"0.0.4242\"");
        let back: TopicId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
