// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]

//! hak-mirror
//!
//! Read-only access to ledger state through the public mirror-node REST
//! API. The kit consults the mirror for token decimals, account keys,
//! balances, and the query tools' data; nothing here writes to the
//! ledger.

mod service;
mod types;

pub use service::{MirrorError, MirrornodeService, RestMirrornodeService, mirror_base_url};
pub use types::{
    AccountBalance, AccountInfo, ExchangeRate, ExchangeRateSet, MirrorKey, TokenInfo, TopicInfo,
    TransactionRecord, TransactionRecordPage, TransferEntry,
};
