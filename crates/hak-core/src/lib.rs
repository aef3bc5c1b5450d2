// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]

//! hak-core
//!
//! The stable vocabulary of the Hedera Agent Kit: ledger value types,
//! the transaction model handed to an execution strategy, the runtime
//! context, and the error taxonomy shared by every other crate.

mod client;
mod context;
mod error;
mod hbar;
mod ids;
mod key;
mod response;
mod timestamp;
mod tx;

pub use client::{HederaClient, LedgerNetwork, Operator, TransactionExecutor};
pub use context::{AgentMode, Context};
pub use error::AgentKitError;
pub use hbar::{Hbar, TINYBARS_PER_HBAR, to_tinybars};
pub use ids::{AccountId, ContractId, EntityIdError, ScheduleId, TokenId, TopicId};
pub use key::{KeyKind, PublicKey};
pub use response::ToolResponse;
pub use timestamp::Timestamp;
pub use tx::{
    ExecutedTransaction, HbarAllowance, NftAllowance, NftTransfer, Operation,
    ScheduleCreateSpec, TokenAllowance, TokenKeys, TokenParams, TokenSupplyType, TokenType,
    Transaction, TransactionBody, TransferLedger, TransferTransaction,
};
