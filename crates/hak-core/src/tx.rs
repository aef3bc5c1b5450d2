// SPDX-License-Identifier: MIT OR Apache-2.0

//! The transaction model handed to an execution strategy.
//!
//! A built transaction is either [`Transaction::Plain`] or
//! [`Transaction::Scheduled`] — the two shapes an executor must handle
//! exhaustively. The inner [`TransactionBody`] pairs one ledger
//! [`Operation`] with an optional transaction memo that is attached
//! uniformly after the operation fields are set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::hbar::Hbar;
use crate::ids::{AccountId, ContractId, ScheduleId, TokenId, TopicId};
use crate::key::PublicKey;
use crate::timestamp::Timestamp;

/// Signed deltas per account, in the smallest ledger unit.
///
/// A balanced ledger sums to zero across all entries.
pub type TransferLedger = BTreeMap<AccountId, i64>;

/// One NFT movement inside a transfer transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftTransfer {
    /// Current owner giving up the serial.
    pub sender_account_id: AccountId,
    /// Recipient of the serial.
    pub receiver_account_id: AccountId,
    /// NFT serial number.
    pub serial_number: i64,
    /// Whether this movement spends an approved allowance.
    pub is_approved: bool,
}

/// Accumulates HBAR, fungible-token, and NFT transfer lines.
///
/// Mirrors the ledger's single crypto-transfer shape: lines are added one
/// per (account) or (token, account) pair, and duplicate pairs aggregate
/// by addition so the ledger stays net-summed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTransaction {
    /// Direct HBAR deltas.
    pub hbar_transfers: TransferLedger,
    /// HBAR deltas spending an approved allowance.
    pub approved_hbar_transfers: TransferLedger,
    /// Direct fungible-token deltas, per token.
    pub token_transfers: BTreeMap<TokenId, TransferLedger>,
    /// Fungible-token deltas spending an approved allowance, per token.
    pub approved_token_transfers: BTreeMap<TokenId, TransferLedger>,
    /// NFT movements, per token.
    pub nft_transfers: BTreeMap<TokenId, Vec<NftTransfer>>,
}

impl TransferTransaction {
    /// Add a direct HBAR line.
    pub fn add_hbar_transfer(&mut self, account_id: AccountId, tinybars: i64) -> &mut Self {
        *self.hbar_transfers.entry(account_id).or_default() += tinybars;
        self
    }

    /// Add an approved HBAR line.
    pub fn add_approved_hbar_transfer(&mut self, account_id: AccountId, tinybars: i64) -> &mut Self {
        *self.approved_hbar_transfers.entry(account_id).or_default() += tinybars;
        self
    }

    /// Add a direct fungible-token line.
    pub fn add_token_transfer(
        &mut self,
        token_id: TokenId,
        account_id: AccountId,
        amount: i64,
    ) -> &mut Self {
        *self
            .token_transfers
            .entry(token_id)
            .or_default()
            .entry(account_id)
            .or_default() += amount;
        self
    }

    /// Add an approved fungible-token line.
    pub fn add_approved_token_transfer(
        &mut self,
        token_id: TokenId,
        account_id: AccountId,
        amount: i64,
    ) -> &mut Self {
        *self
            .approved_token_transfers
            .entry(token_id)
            .or_default()
            .entry(account_id)
            .or_default() += amount;
        self
    }

    /// Add an NFT movement.
    pub fn add_nft_transfer(&mut self, token_id: TokenId, transfer: NftTransfer) -> &mut Self {
        self.nft_transfers.entry(token_id).or_default().push(transfer);
        self
    }

    /// True when every fungible ledger in this transaction nets to zero.
    pub fn is_balanced(&self) -> bool {
        let sum = |ledger: &TransferLedger| ledger.values().sum::<i64>() == 0;
        sum(&self.hbar_transfers)
            && sum(&self.approved_hbar_transfers)
            && self.token_transfers.values().all(sum)
            && self.approved_token_transfers.values().all(sum)
    }
}

/// How a token's total supply is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenSupplyType {
    /// Supply may grow without bound.
    Infinite,
    /// Supply is capped at `max_supply`.
    Finite,
}

/// Fungible vs. non-fungible token class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    /// Interchangeable units with shared decimals.
    FungibleCommon,
    /// Uniquely-serialised units.
    NonFungibleUnique,
}

/// Core properties of a token-create transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenParams {
    /// Token display name.
    pub token_name: String,
    /// Token ticker symbol.
    pub token_symbol: String,
    /// Display-unit precision.
    pub decimals: u32,
    /// Initial supply in base units.
    pub initial_supply: u64,
    /// Maximum supply in base units; absent for infinite supply.
    pub max_supply: Option<u64>,
    /// Supply boundedness.
    pub supply_type: TokenSupplyType,
    /// Token class.
    pub token_type: TokenType,
    /// Account holding the initial supply.
    pub treasury_account_id: AccountId,
    /// Account paying auto-renewal fees.
    pub auto_renew_account_id: Option<AccountId>,
}

/// Optional administrative keys on a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenKeys {
    /// Can update or delete the token.
    pub admin_key: Option<PublicKey>,
    /// Can mint and burn.
    pub supply_key: Option<PublicKey>,
    /// Can wipe balances.
    pub wipe_key: Option<PublicKey>,
    /// Can freeze accounts for this token.
    pub freeze_key: Option<PublicKey>,
    /// Can grant/revoke KYC.
    pub kyc_key: Option<PublicKey>,
    /// Can change the custom fee schedule.
    pub fee_schedule_key: Option<PublicKey>,
    /// Can pause the token.
    pub pause_key: Option<PublicKey>,
    /// Can update token metadata.
    pub metadata_key: Option<PublicKey>,
}

/// A pre-authorized HBAR spending permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HbarAllowance {
    /// Account granting the allowance.
    pub owner_account_id: AccountId,
    /// Account allowed to spend.
    pub spender_account_id: AccountId,
    /// Approved amount.
    pub amount: Hbar,
}

/// A pre-authorized fungible-token spending permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAllowance {
    /// Token the allowance covers.
    pub token_id: TokenId,
    /// Account granting the allowance.
    pub owner_account_id: AccountId,
    /// Account allowed to spend.
    pub spender_account_id: AccountId,
    /// Approved amount in base units.
    pub amount: i64,
}

/// A pre-authorized NFT transfer permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftAllowance {
    /// Token the allowance covers.
    pub token_id: TokenId,
    /// Account granting the allowance.
    pub owner_account_id: AccountId,
    /// Account allowed to transfer.
    pub spender_account_id: AccountId,
    /// Specific serials approved; ignored when `approved_for_all`.
    pub serial_numbers: Vec<i64>,
    /// Approve every current and future serial.
    pub approved_for_all: bool,
}

/// One ledger operation, ready for execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    /// HBAR / token / NFT transfers, direct or allowance-backed.
    Transfer(TransferTransaction),
    /// Create a crypto account.
    AccountCreate {
        /// Key controlling the new account.
        key: PublicKey,
        /// Starting balance.
        initial_balance: Hbar,
        /// Account memo.
        memo: Option<String>,
        /// Automatic token-association slots.
        max_automatic_token_associations: Option<i32>,
    },
    /// Update mutable account fields.
    AccountUpdate {
        /// Account being updated.
        account_id: AccountId,
        /// New account memo, when present.
        account_memo: Option<String>,
    },
    /// Delete an account, sweeping its balance.
    AccountDelete {
        /// Account being deleted.
        account_id: AccountId,
        /// Account receiving the remaining balance.
        transfer_account_id: AccountId,
    },
    /// Approve HBAR / token / NFT allowances.
    AccountAllowanceApprove {
        /// HBAR allowances to grant.
        hbar_allowances: Vec<HbarAllowance>,
        /// Fungible-token allowances to grant.
        token_allowances: Vec<TokenAllowance>,
        /// NFT allowances to grant.
        nft_allowances: Vec<NftAllowance>,
    },
    /// Create a token (fungible or NFT class).
    TokenCreate {
        /// Core token properties.
        token_params: TokenParams,
        /// Administrative keys, when any are set.
        keys: Option<TokenKeys>,
    },
    /// Mint fungible supply or NFT serials.
    TokenMint {
        /// Token being minted.
        token_id: TokenId,
        /// Base-unit amount for fungible mints.
        amount: Option<u64>,
        /// Metadata blobs for NFT mints, one per serial.
        metadata: Vec<Vec<u8>>,
    },
    /// Update mutable token fields and keys.
    TokenUpdate {
        /// Token being updated.
        token_id: TokenId,
        /// New name, when present.
        token_name: Option<String>,
        /// New symbol, when present.
        token_symbol: Option<String>,
        /// New token memo, when present.
        token_memo: Option<String>,
        /// New metadata blob, when present.
        metadata: Option<Vec<u8>>,
        /// New treasury account, when present.
        treasury_account_id: Option<AccountId>,
        /// New auto-renew account, when present.
        auto_renew_account_id: Option<AccountId>,
        /// Key replacements, when any are set.
        keys: Option<TokenKeys>,
    },
    /// Delete a token.
    TokenDelete {
        /// Token being deleted.
        token_id: TokenId,
    },
    /// Associate tokens with an account.
    TokenAssociate {
        /// Account gaining the associations.
        account_id: AccountId,
        /// Tokens to associate.
        token_ids: Vec<TokenId>,
    },
    /// Dissociate tokens from an account.
    TokenDissociate {
        /// Account losing the associations.
        account_id: AccountId,
        /// Tokens to dissociate.
        token_ids: Vec<TokenId>,
    },
    /// Create a consensus topic.
    TopicCreate {
        /// Topic memo.
        memo: Option<String>,
        /// Key allowed to update/delete the topic.
        admin_key: Option<PublicKey>,
        /// Key required to submit messages.
        submit_key: Option<PublicKey>,
    },
    /// Update mutable topic fields.
    TopicUpdate {
        /// Topic being updated.
        topic_id: TopicId,
        /// New topic memo, when present.
        memo: Option<String>,
        /// New admin key, when present.
        admin_key: Option<PublicKey>,
        /// New submit key, when present.
        submit_key: Option<PublicKey>,
        /// New auto-renew account, when present.
        auto_renew_account_id: Option<AccountId>,
        /// New auto-renew period in seconds, when present.
        auto_renew_period: Option<i64>,
        /// New expiration time, when present.
        expiration_time: Option<Timestamp>,
    },
    /// Delete a topic.
    TopicDelete {
        /// Topic being deleted.
        topic_id: TopicId,
    },
    /// Submit a message to a topic.
    TopicMessageSubmit {
        /// Destination topic.
        topic_id: TopicId,
        /// Message payload.
        message: String,
    },
    /// Call a smart-contract function.
    ContractExecute {
        /// Contract being called.
        contract_id: ContractId,
        /// Gas limit for the call.
        gas: u64,
        /// ABI-encoded calldata.
        function_parameters: Vec<u8>,
    },
    /// Add a signature to a pending schedule.
    ScheduleSign {
        /// Schedule being signed.
        schedule_id: ScheduleId,
    },
    /// Delete a pending schedule.
    ScheduleDelete {
        /// Schedule being deleted.
        schedule_id: ScheduleId,
    },
}

/// An operation plus its transaction-level memo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionBody {
    /// The ledger operation.
    pub operation: Operation,
    /// Transaction memo, attached after the operation fields.
    pub transaction_memo: Option<String>,
}

impl TransactionBody {
    /// Wrap an operation with no memo.
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            transaction_memo: None,
        }
    }

    /// Attach a transaction memo.
    pub fn set_transaction_memo(&mut self, memo: impl Into<String>) -> &mut Self {
        self.transaction_memo = Some(memo.into());
        self
    }
}

/// Resolved parameters of a schedule-create wrapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleCreateSpec {
    /// Key that may delete/modify the schedule before execution.
    pub admin_key: Option<PublicKey>,
    /// Account paying the inner transaction's fee at execution.
    pub payer_account_id: Option<AccountId>,
    /// When the schedule expires if not fully signed.
    pub expiration_time: Option<Timestamp>,
    /// Execute at expiration rather than on final signature.
    pub wait_for_expiry: bool,
}

/// A built ledger transaction: immediate, or wrapped for deferred
/// execution via the schedule service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Transaction {
    /// Submit the body directly.
    Plain(TransactionBody),
    /// Submit a schedule-create wrapping the body.
    Scheduled {
        /// Schedule-entity parameters.
        spec: ScheduleCreateSpec,
        /// The deferred inner transaction.
        inner: TransactionBody,
    },
}

impl Transaction {
    /// The inner body, regardless of wrapping.
    pub fn body(&self) -> &TransactionBody {
        match self {
            Transaction::Plain(body) => body,
            Transaction::Scheduled { inner, .. } => inner,
        }
    }

    /// True when this is a schedule-create wrapper.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Transaction::Scheduled { .. })
    }
}

/// Receipt-derived fields returned by an execution strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutedTransaction {
    /// Final ledger status string (e.g. `SUCCESS`).
    pub status: String,
    /// Transaction id, when assigned.
    pub transaction_id: Option<String>,
    /// Schedule id, when a schedule-create executed.
    pub schedule_id: Option<ScheduleId>,
    /// Token id, when a token-create executed.
    pub token_id: Option<TokenId>,
    /// Topic id, when a topic-create executed.
    pub topic_id: Option<TopicId>,
    /// Account id, when an account-create executed.
    pub account_id: Option<AccountId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(num: u64) -> AccountId {
        AccountId::new(0, 0, num)
    }

    #[test]
    fn duplicate_lines_aggregate() {
        let mut tx = TransferTransaction::default();
        tx.add_hbar_transfer(acct(2), 50)
            .add_hbar_transfer(acct(2), 25)
            .add_hbar_transfer(acct(1), -75);
        assert_eq!(tx.hbar_transfers[&acct(2)], 75);
        assert!(tx.is_balanced());
    }

    #[test]
    fn unbalanced_ledger_detected() {
        let mut tx = TransferTransaction::default();
        tx.add_token_transfer(TokenId::new(0, 0, 7), acct(2), 10);
        assert!(!tx.is_balanced());
        tx.add_token_transfer(TokenId::new(0, 0, 7), acct(1), -10);
        assert!(tx.is_balanced());
    }

    #[test]
    fn scheduled_preserves_inner_body() {
        let body = TransactionBody::new(Operation::TopicDelete {
            topic_id: TopicId::new(0, 0, 9),
        });
        let tx = Transaction::Scheduled {
            spec: ScheduleCreateSpec::default(),
            inner: body.clone(),
        };
        assert!(tx.is_scheduled());
        assert_eq!(tx.body(), &body);
    }

    #[test]
    fn transaction_serde_round_trip() {
        let mut body = TransactionBody::new(Operation::TopicMessageSubmit {
            topic_id: TopicId::new(0, 0, 123),
            message: "hello".into(),
        });
        body.set_transaction_memo("memo");
        let tx = Transaction::Plain(body);
        let json = serde_json::to_value(&tx).unwrap();
        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, tx);
    }
}
