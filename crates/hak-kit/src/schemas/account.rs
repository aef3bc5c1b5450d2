// SPDX-License-Identifier: MIT OR Apache-2.0

//! Account-operation parameter schemas, raw and normalised.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use hak_core::{
    AccountId, Hbar, HbarAllowance, PublicKey, ScheduleCreateSpec, TransferLedger,
};

use super::{DisplayAmount, SchedulingParams};

/// One HBAR transfer line as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HbarTransferInput {
    /// Recipient account id (e.g. `0.0.xxxx`).
    pub account_id: String,
    /// Display-unit HBAR amount.
    pub amount: DisplayAmount,
}

/// Raw parameters for `transfer_hbar`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransferHbarParams {
    /// Recipients and amounts.
    #[schemars(length(min = 1))]
    pub transfers: Vec<HbarTransferInput>,
    /// Source account; defaults to the context/operator account.
    #[serde(default)]
    pub source_account_id: Option<String>,
    /// Optional transaction memo.
    #[serde(default)]
    pub transaction_memo: Option<String>,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `transfer_hbar` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferHbarNormalised {
    /// Net tinybar deltas per account; sums to zero.
    pub hbar_transfers: TransferLedger,
    /// Transaction memo, already truncated.
    pub transaction_memo: Option<String>,
    /// Resolved schedule spec, when requested.
    pub scheduling_params: Option<ScheduleCreateSpec>,
}

/// Raw parameters for `transfer_hbar_with_allowance`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransferHbarWithAllowanceParams {
    /// Recipients and amounts.
    #[schemars(length(min = 1))]
    pub transfers: Vec<HbarTransferInput>,
    /// The allowance owner; required, never defaulted.
    #[serde(default)]
    pub source_account_id: Option<String>,
    /// Optional transaction memo.
    #[serde(default)]
    pub transaction_memo: Option<String>,
    /// Accepted for shape-compatibility; this operation is not wrapped.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `transfer_hbar_with_allowance` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferHbarWithAllowanceNormalised {
    /// Net approved tinybar deltas per account; sums to zero.
    pub hbar_approved_transfers: TransferLedger,
    /// Transaction memo, already truncated.
    pub transaction_memo: Option<String>,
}

/// Raw parameters for `create_account`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateAccountParams {
    /// Key for the new account; defaults through the resolver chain.
    #[serde(default)]
    pub public_key: Option<String>,
    /// Starting balance in display-unit HBAR.
    #[serde(default)]
    pub initial_balance: Option<DisplayAmount>,
    /// Account memo.
    #[serde(default)]
    pub account_memo: Option<String>,
    /// Automatic token-association slots.
    #[serde(default)]
    pub max_automatic_token_associations: Option<i32>,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `create_account` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAccountNormalised {
    /// Resolved account key.
    pub key: PublicKey,
    /// Starting balance.
    pub initial_balance: Hbar,
    /// Account memo, already truncated.
    pub memo: Option<String>,
    /// Automatic token-association slots.
    pub max_automatic_token_associations: Option<i32>,
    /// Resolved schedule spec, when requested.
    pub scheduling_params: Option<ScheduleCreateSpec>,
}

/// Raw parameters for `update_account`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateAccountParams {
    /// Account to update; defaults to the operator account.
    #[serde(default)]
    pub account_id: Option<String>,
    /// New account memo.
    #[serde(default)]
    pub account_memo: Option<String>,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `update_account` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAccountNormalised {
    /// Account being updated.
    pub account_id: AccountId,
    /// New account memo, already truncated.
    pub account_memo: Option<String>,
    /// Resolved schedule spec, when requested.
    pub scheduling_params: Option<ScheduleCreateSpec>,
}

/// Raw parameters for `delete_account`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteAccountParams {
    /// Account to delete.
    pub account_id: String,
    /// Recipient of the remaining balance; defaults to the operator.
    #[serde(default)]
    pub transfer_account_id: Option<String>,
}

/// Normalised `delete_account` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteAccountNormalised {
    /// Account being deleted.
    pub account_id: AccountId,
    /// Recipient of the remaining balance.
    pub transfer_account_id: AccountId,
}

/// Raw parameters for `approve_hbar_allowance`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ApproveHbarAllowanceParams {
    /// Owner granting the allowance; defaults to the operator.
    #[serde(default)]
    pub owner_account_id: Option<String>,
    /// Spender being approved.
    pub spender_account_id: String,
    /// Display-unit HBAR amount to approve.
    pub amount: DisplayAmount,
    /// Optional transaction memo.
    #[serde(default)]
    pub transaction_memo: Option<String>,
    /// Accepted for shape-compatibility; this operation is not wrapped.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `approve_hbar_allowance` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproveHbarAllowanceNormalised {
    /// Allowances to grant.
    pub hbar_allowances: Vec<HbarAllowance>,
    /// Transaction memo, already truncated.
    pub transaction_memo: Option<String>,
}
