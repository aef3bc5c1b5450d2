// SPDX-License-Identifier: MIT OR Apache-2.0

//! DTOs for the mirror REST responses the kit consumes.
//!
//! The mirror API serialises most numerics as strings; accessors on the
//! DTOs do the tolerant conversion so callers never re-implement it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

fn value_as_u64(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn value_as_i128(value: Option<&Value>) -> Option<i128> {
    match value? {
        Value::Number(n) => n.as_i64().map(i128::from),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// A key as the mirror reports it: encoding tag plus hex material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorKey {
    /// Encoding tag (`ED25519`, `ECDSA_SECP256K1`, `ProtobufEncoded`).
    #[serde(rename = "_type", default)]
    pub key_type: Option<String>,
    /// Hex-encoded key material.
    #[serde(default)]
    pub key: Option<String>,
}

/// Balance block inside an account response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// HBAR balance in tinybars.
    #[serde(default)]
    pub balance: Option<i64>,
    /// Snapshot timestamp.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// `GET /api/v1/accounts/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Account id in `shard.realm.num` form.
    #[serde(default)]
    pub account: Option<String>,
    /// The account's key.
    #[serde(default)]
    pub key: Option<MirrorKey>,
    /// EVM address alias.
    #[serde(default)]
    pub evm_address: Option<String>,
    /// Current balance block.
    #[serde(default)]
    pub balance: Option<AccountBalance>,
    /// Account memo.
    #[serde(default)]
    pub memo: Option<String>,
    /// Whether the account is deleted.
    #[serde(default)]
    pub deleted: Option<bool>,
}

impl AccountInfo {
    /// The account's public key hex, when the mirror reports one.
    pub fn account_public_key(&self) -> Option<&str> {
        self.key.as_ref()?.key.as_deref()
    }
}

/// `GET /api/v1/tokens/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Token id.
    #[serde(default)]
    pub token_id: Option<String>,
    /// Token name.
    #[serde(default)]
    pub name: Option<String>,
    /// Token symbol.
    #[serde(default)]
    pub symbol: Option<String>,
    /// `FUNGIBLE_COMMON` or `NON_FUNGIBLE_UNIQUE`.
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
    /// Display-unit precision (stringly, per the mirror API).
    #[serde(default)]
    pub decimals: Option<Value>,
    /// Current supply in base units.
    #[serde(default)]
    pub total_supply: Option<Value>,
    /// Initial supply in base units.
    #[serde(default)]
    pub initial_supply: Option<Value>,
    /// Maximum supply in base units.
    #[serde(default)]
    pub max_supply: Option<Value>,
    /// `FINITE` or `INFINITE`.
    #[serde(default)]
    pub supply_type: Option<String>,
    /// Treasury account id.
    #[serde(default)]
    pub treasury_account_id: Option<String>,
    /// Token memo.
    #[serde(default)]
    pub memo: Option<String>,
    /// Whether the token is deleted.
    #[serde(default)]
    pub deleted: Option<bool>,
    /// Whether accounts start frozen for this token.
    #[serde(default)]
    pub freeze_default: Option<bool>,
    /// Admin key.
    #[serde(default)]
    pub admin_key: Option<MirrorKey>,
    /// Supply key.
    #[serde(default)]
    pub supply_key: Option<MirrorKey>,
    /// Wipe key.
    #[serde(default)]
    pub wipe_key: Option<MirrorKey>,
    /// KYC key.
    #[serde(default)]
    pub kyc_key: Option<MirrorKey>,
    /// Freeze key.
    #[serde(default)]
    pub freeze_key: Option<MirrorKey>,
    /// Fee-schedule key.
    #[serde(default)]
    pub fee_schedule_key: Option<MirrorKey>,
    /// Pause key.
    #[serde(default)]
    pub pause_key: Option<MirrorKey>,
    /// Metadata key.
    #[serde(default)]
    pub metadata_key: Option<MirrorKey>,
}

impl TokenInfo {
    /// Decimals as a number, tolerating the string form.
    pub fn decimals_u32(&self) -> Option<u32> {
        value_as_u64(self.decimals.as_ref()).and_then(|d| u32::try_from(d).ok())
    }

    /// Total supply as a number, tolerating the string form.
    pub fn total_supply_i128(&self) -> Option<i128> {
        value_as_i128(self.total_supply.as_ref())
    }

    /// Max supply as a number, tolerating the string form.
    pub fn max_supply_i128(&self) -> Option<i128> {
        value_as_i128(self.max_supply.as_ref())
    }
}

/// `GET /api/v1/topics/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicInfo {
    /// Topic id.
    #[serde(default)]
    pub topic_id: Option<String>,
    /// Topic memo.
    #[serde(default)]
    pub memo: Option<String>,
    /// Admin key.
    #[serde(default)]
    pub admin_key: Option<MirrorKey>,
    /// Submit key.
    #[serde(default)]
    pub submit_key: Option<MirrorKey>,
    /// Auto-renew account id.
    #[serde(default)]
    pub auto_renew_account: Option<String>,
    /// Auto-renew period in seconds.
    #[serde(default)]
    pub auto_renew_period: Option<i64>,
    /// Creation consensus timestamp.
    #[serde(default)]
    pub created_timestamp: Option<String>,
    /// Whether the topic is deleted.
    #[serde(default)]
    pub deleted: Option<bool>,
}

/// One HBAR-to-cents conversion rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// USD cents per `hbar_equivalent` HBAR.
    #[serde(default)]
    pub cent_equivalent: i64,
    /// HBAR denominator for `cent_equivalent`.
    #[serde(default)]
    pub hbar_equivalent: i64,
    /// When this rate expires (epoch seconds).
    #[serde(default)]
    pub expiration_time: Option<i64>,
}

impl ExchangeRate {
    /// USD per HBAR implied by this rate.
    pub fn usd_per_hbar(&self) -> f64 {
        if self.hbar_equivalent == 0 {
            return 0.0;
        }
        self.cent_equivalent as f64 / self.hbar_equivalent as f64 / 100.0
    }
}

/// `GET /api/v1/network/exchangerate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateSet {
    /// Rate in force now.
    #[serde(default)]
    pub current_rate: Option<ExchangeRate>,
    /// Rate taking effect next.
    #[serde(default)]
    pub next_rate: Option<ExchangeRate>,
    /// Snapshot timestamp.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// One transfer line inside a transaction record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferEntry {
    /// Affected account.
    #[serde(default)]
    pub account: Option<String>,
    /// Signed amount in tinybars (or token base units).
    #[serde(default)]
    pub amount: Option<i64>,
    /// Token id for token transfer lines.
    #[serde(default)]
    pub token_id: Option<String>,
}

/// One record from `GET /api/v1/transactions/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction id in mirror form.
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// Operation name (e.g. `CRYPTOTRANSFER`).
    #[serde(default)]
    pub name: Option<String>,
    /// Final status string.
    #[serde(default)]
    pub result: Option<String>,
    /// Consensus timestamp.
    #[serde(default)]
    pub consensus_timestamp: Option<String>,
    /// Fee charged, in tinybars.
    #[serde(default)]
    pub charged_tx_fee: Option<i64>,
    /// Base64-encoded transaction memo.
    #[serde(default)]
    pub memo_base64: Option<String>,
    /// HBAR transfer lines.
    #[serde(default)]
    pub transfers: Vec<TransferEntry>,
    /// Token transfer lines.
    #[serde(default)]
    pub token_transfers: Vec<TransferEntry>,
}

/// Page wrapper around transaction records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecordPage {
    /// Matching records, newest first.
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}
