// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query-operation parameter schemas.

use schemars::JsonSchema;
use serde::Deserialize;

/// Raw parameters for `get_hbar_balance`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AccountBalanceQueryParams {
    /// Account to query; defaults to the context/operator account.
    #[serde(default)]
    pub account_id: Option<String>,
}

/// Normalised `get_hbar_balance` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountBalanceQueryNormalised {
    /// Account being queried (id or EVM address, as the mirror accepts).
    pub account_id: String,
}

/// Raw parameters for `get_account_query`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AccountQueryParams {
    /// Account to query; defaults to the context/operator account.
    #[serde(default)]
    pub account_id: Option<String>,
}

/// Normalised `get_account_query` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountQueryNormalised {
    /// Account being queried.
    pub account_id: String,
}

/// Raw parameters for `get_exchange_rate`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExchangeRateQueryParams {
    /// Optional historical timestamp (epoch seconds or `s.ns`).
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Raw parameters for `get_transaction_record`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransactionRecordQueryParams {
    /// Transaction id, ledger-native (`0.0.n@s.ns`) or mirror
    /// (`0.0.n-s-ns`) form.
    pub transaction_id: String,
    /// Nonce of an inner/child transaction.
    #[serde(default)]
    pub nonce: Option<u32>,
}

/// Normalised `get_transaction_record` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecordQueryNormalised {
    /// Transaction id in mirror form.
    pub transaction_id: String,
    /// Nonce of an inner/child transaction.
    pub nonce: Option<u32>,
}
