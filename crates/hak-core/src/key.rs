// SPDX-License-Identifier: MIT OR Apache-2.0

//! Public keys in the two encodings the ledger accepts.
//!
//! Keys arrive as hex strings, either raw or DER-wrapped. This module
//! validates the encoding and keeps the raw key material; cryptographic
//! operations belong to the execution layer, not the kit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AgentKitError;

/// DER prefix for an Ed25519 public key (RFC 8410 SubjectPublicKeyInfo).
const ED25519_DER_PREFIX: &str = "302a300506032b6570032100";
/// DER prefix for a compressed secp256k1 public key.
const ECDSA_DER_PREFIX: &str = "302d300706052b8104000a032200";

/// The signature scheme a [`PublicKey`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// EdDSA over Curve25519.
    Ed25519,
    /// ECDSA over secp256k1 (compressed point).
    EcdsaSecp256k1,
}

/// A validated ledger public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    kind: KeyKind,
    bytes: Vec<u8>,
}

impl PublicKey {
    /// Parse an Ed25519 key from raw (64 hex chars) or DER hex.
    pub fn from_str_ed25519(s: &str) -> Result<Self, AgentKitError> {
        let hex_str = normalize_hex(s);
        let body = hex_str
            .strip_prefix(ED25519_DER_PREFIX)
            .unwrap_or(&hex_str);
        let bytes = hex::decode(body)
            .map_err(|_| key_err("ed25519", s))?;
        if bytes.len() != 32 {
            return Err(key_err("ed25519", s));
        }
        Ok(Self {
            kind: KeyKind::Ed25519,
            bytes,
        })
    }

    /// Parse an ECDSA secp256k1 key from compressed-point (66 hex chars)
    /// or DER hex.
    pub fn from_str_ecdsa(s: &str) -> Result<Self, AgentKitError> {
        let hex_str = normalize_hex(s);
        let body = hex_str.strip_prefix(ECDSA_DER_PREFIX).unwrap_or(&hex_str);
        let bytes = hex::decode(body).map_err(|_| key_err("ecdsa", s))?;
        if bytes.len() != 33 || !matches!(bytes[0], 0x02 | 0x03) {
            return Err(key_err("ecdsa", s));
        }
        Ok(Self {
            kind: KeyKind::EcdsaSecp256k1,
            bytes,
        })
    }

    /// Parse a key of unknown scheme: EdDSA is tried first, then ECDSA.
    pub fn parse(s: &str) -> Result<Self, AgentKitError> {
        Self::from_str_ed25519(s).or_else(|_| {
            Self::from_str_ecdsa(s).map_err(|_| {
                AgentKitError::KeyParse(format!(
                    "key {s:?} is neither a valid ed25519 nor ecdsa public key"
                ))
            })
        })
    }

    /// The signature scheme of this key.
    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// Raw key material without DER framing.
    pub fn to_bytes_raw(&self) -> &[u8] {
        &self.bytes
    }

    /// Hex-encoded DER form, the canonical wire representation.
    pub fn to_string_der(&self) -> String {
        let prefix = match self.kind {
            KeyKind::Ed25519 => ED25519_DER_PREFIX,
            KeyKind::EcdsaSecp256k1 => ECDSA_DER_PREFIX,
        };
        format!("{prefix}{}", hex::encode(&self.bytes))
    }
}

fn normalize_hex(s: &str) -> String {
    s.trim()
        .strip_prefix("0x")
        .unwrap_or(s.trim())
        .to_ascii_lowercase()
}

fn key_err(scheme: &str, input: &str) -> AgentKitError {
    AgentKitError::KeyParse(format!("invalid {scheme} public key: {input:?}"))
}

impl FromStr for PublicKey {
    type Err = AgentKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_der())
    }
}

impl Serialize for PublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_der())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ED25519_RAW: &str = "a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";
    const ECDSA_RAW: &str = "02a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";

    #[test]
    fn parses_raw_ed25519() {
        let key = PublicKey::from_str_ed25519(ED25519_RAW).unwrap();
        assert_eq!(key.kind(), KeyKind::Ed25519);
        assert_eq!(key.to_string_der(), format!("{ED25519_DER_PREFIX}{ED25519_RAW}"));
    }

    #[test]
    fn parses_der_ed25519() {
        let der = format!("{ED25519_DER_PREFIX}{ED25519_RAW}");
        let key = PublicKey::from_str_ed25519(&der).unwrap();
        assert_eq!(key.to_string_der(), der);
    }

    #[test]
    fn parses_ecdsa_compressed() {
        let key = PublicKey::from_str_ecdsa(ECDSA_RAW).unwrap();
        assert_eq!(key.kind(), KeyKind::EcdsaSecp256k1);
    }

    #[test]
    fn parse_prefers_ed25519_then_ecdsa() {
        assert_eq!(PublicKey::parse(ED25519_RAW).unwrap().kind(), KeyKind::Ed25519);
        assert_eq!(
            PublicKey::parse(ECDSA_RAW).unwrap().kind(),
            KeyKind::EcdsaSecp256k1
        );
    }

    #[test]
    fn rejects_garbage() {
        let err = PublicKey::parse("not-a-key").unwrap_err();
        assert!(matches!(err, AgentKitError::KeyParse(_)));
    }

    #[test]
    fn accepts_0x_prefix() {
        let prefixed = format!("0x{ED25519_RAW}");
        assert!(PublicKey::parse(&prefixed).is_ok());
    }
}
