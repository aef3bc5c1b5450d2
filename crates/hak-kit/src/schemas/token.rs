// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token-operation parameter schemas, raw and normalised.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use hak_core::{
    AccountId, NftAllowance, NftTransfer, ScheduleCreateSpec, TokenAllowance, TokenId, TokenKeys,
    TokenParams, TransferLedger,
};

use super::{DisplayAmount, KeyInput, SchedulingParams};

/// Raw parameters for `create_fungible_token`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateFungibleTokenParams {
    /// Token name.
    pub token_name: String,
    /// Token symbol.
    pub token_symbol: String,
    /// Initial supply in display units.
    #[serde(default)]
    pub initial_supply: Option<u64>,
    /// Supply type: 0 for infinite, 1 for finite. Defaults from
    /// `max_supply` presence when absent.
    #[serde(default)]
    #[schemars(range(max = 1))]
    pub supply_type: Option<u32>,
    /// Maximum supply in display units.
    #[serde(default)]
    pub max_supply: Option<u64>,
    /// Number of decimals.
    #[serde(default)]
    pub decimals: Option<i32>,
    /// Treasury account; defaults to the context/operator account.
    #[serde(default)]
    pub treasury_account_id: Option<String>,
    /// Force a supply key on the token.
    #[serde(default)]
    pub is_supply_key: Option<bool>,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised token-creation parameters (fungible and NFT class).
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTokenNormalised {
    /// Ledger-ready token properties, base-unit supplies.
    pub token_params: TokenParams,
    /// Administrative keys, when any resolved.
    pub keys: Option<TokenKeys>,
    /// Resolved schedule spec, when requested.
    pub scheduling_params: Option<ScheduleCreateSpec>,
}

/// Raw parameters for `create_non_fungible_token`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateNonFungibleTokenParams {
    /// Token name.
    pub token_name: String,
    /// Token symbol.
    pub token_symbol: String,
    /// Maximum number of serials.
    #[serde(default)]
    pub max_supply: Option<u64>,
    /// Treasury account; defaults to the context/operator account.
    #[serde(default)]
    pub treasury_account_id: Option<String>,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Raw parameters for `mint_fungible_token`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MintFungibleTokenParams {
    /// Token to mint.
    pub token_id: String,
    /// Display-unit amount to mint.
    pub amount: DisplayAmount,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `mint_fungible_token` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MintFungibleTokenNormalised {
    /// Token being minted.
    pub token_id: TokenId,
    /// Base-unit amount.
    pub amount: u64,
    /// Resolved schedule spec, when requested.
    pub scheduling_params: Option<ScheduleCreateSpec>,
}

/// Raw parameters for `mint_non_fungible_token`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MintNonFungibleTokenParams {
    /// NFT class to mint into.
    pub token_id: String,
    /// Metadata URIs, one per serial.
    #[schemars(length(min = 1, max = 10))]
    pub uris: Vec<String>,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `mint_non_fungible_token` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MintNonFungibleTokenNormalised {
    /// NFT class being minted into.
    pub token_id: TokenId,
    /// Metadata blobs, one per serial.
    pub metadata: Vec<Vec<u8>>,
    /// Resolved schedule spec, when requested.
    pub scheduling_params: Option<ScheduleCreateSpec>,
}

/// Raw parameters for `associate_token`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AssociateTokenParams {
    /// Account to associate with; defaults to the operator.
    #[serde(default)]
    pub account_id: Option<String>,
    /// Tokens to associate.
    #[schemars(length(min = 1))]
    pub token_ids: Vec<String>,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `associate_token` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociateTokenNormalised {
    /// Account gaining the associations.
    pub account_id: AccountId,
    /// Tokens to associate.
    pub token_ids: Vec<TokenId>,
    /// Resolved schedule spec, when requested.
    pub scheduling_params: Option<ScheduleCreateSpec>,
}

/// Raw parameters for `dissociate_token`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DissociateTokenParams {
    /// Tokens to dissociate.
    #[schemars(length(min = 1))]
    pub token_ids: Vec<String>,
    /// Account to dissociate from; defaults to the operator.
    #[serde(default)]
    pub account_id: Option<String>,
    /// Optional transaction memo.
    #[serde(default)]
    pub transaction_memo: Option<String>,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `dissociate_token` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DissociateTokenNormalised {
    /// Tokens to dissociate.
    pub token_ids: Vec<TokenId>,
    /// Account losing the associations.
    pub account_id: AccountId,
    /// Transaction memo, already truncated.
    pub transaction_memo: Option<String>,
    /// Resolved schedule spec, when requested.
    pub scheduling_params: Option<ScheduleCreateSpec>,
}

/// Raw parameters for `update_token`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateTokenParams {
    /// Token to update.
    pub token_id: String,
    /// New token name.
    #[serde(default)]
    pub token_name: Option<String>,
    /// New token symbol.
    #[serde(default)]
    pub token_symbol: Option<String>,
    /// New token memo.
    #[serde(default)]
    pub token_memo: Option<String>,
    /// New metadata (UTF-8).
    #[serde(default)]
    pub metadata: Option<String>,
    /// New treasury account.
    #[serde(default)]
    pub treasury_account_id: Option<String>,
    /// New auto-renew account.
    #[serde(default)]
    pub auto_renew_account_id: Option<String>,
    /// Admin key replacement.
    #[serde(default)]
    pub admin_key: Option<KeyInput>,
    /// Supply key replacement.
    #[serde(default)]
    pub supply_key: Option<KeyInput>,
    /// Wipe key replacement.
    #[serde(default)]
    pub wipe_key: Option<KeyInput>,
    /// Freeze key replacement.
    #[serde(default)]
    pub freeze_key: Option<KeyInput>,
    /// KYC key replacement.
    #[serde(default)]
    pub kyc_key: Option<KeyInput>,
    /// Fee-schedule key replacement.
    #[serde(default)]
    pub fee_schedule_key: Option<KeyInput>,
    /// Pause key replacement.
    #[serde(default)]
    pub pause_key: Option<KeyInput>,
    /// Metadata key replacement.
    #[serde(default)]
    pub metadata_key: Option<KeyInput>,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `update_token` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTokenNormalised {
    /// Token being updated.
    pub token_id: TokenId,
    /// New name, when present.
    pub token_name: Option<String>,
    /// New symbol, when present.
    pub token_symbol: Option<String>,
    /// New token memo, already truncated.
    pub token_memo: Option<String>,
    /// New metadata blob, when present.
    pub metadata: Option<Vec<u8>>,
    /// New treasury account, when present.
    pub treasury_account_id: Option<AccountId>,
    /// New auto-renew account, when present.
    pub auto_renew_account_id: Option<AccountId>,
    /// Key replacements, when any resolved.
    pub token_keys: Option<TokenKeys>,
}

/// Raw parameters for `delete_token`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteTokenParams {
    /// Token to delete.
    pub token_id: String,
}

/// Normalised `delete_token` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteTokenNormalised {
    /// Token being deleted.
    pub token_id: TokenId,
}

/// One fungible-token transfer line as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TokenTransferInput {
    /// Recipient account id.
    pub account_id: String,
    /// Display-unit token amount.
    pub amount: DisplayAmount,
}

/// Raw parameters for `transfer_fungible_token`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransferFungibleTokenParams {
    /// Token to transfer.
    pub token_id: String,
    /// Source account; defaults to the context/operator account.
    #[serde(default)]
    pub source_account_id: Option<String>,
    /// Recipients and amounts.
    #[schemars(length(min = 1))]
    pub transfers: Vec<TokenTransferInput>,
    /// Optional transaction memo.
    #[serde(default)]
    pub transaction_memo: Option<String>,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `transfer_fungible_token` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFungibleTokenNormalised {
    /// Net base-unit deltas per (token, account); each token sums to zero.
    pub ft_transfers: BTreeMap<TokenId, TransferLedger>,
    /// Transaction memo, already truncated.
    pub transaction_memo: Option<String>,
    /// Resolved schedule spec, when requested.
    pub scheduling_params: Option<ScheduleCreateSpec>,
}

/// Raw parameters for `transfer_fungible_token_with_allowance`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransferFungibleTokenWithAllowanceParams {
    /// Token to transfer.
    pub token_id: String,
    /// The allowance owner; required, never defaulted.
    #[serde(default)]
    pub source_account_id: Option<String>,
    /// Recipients and amounts.
    #[schemars(length(min = 1))]
    pub transfers: Vec<TokenTransferInput>,
    /// Optional transaction memo.
    #[serde(default)]
    pub transaction_memo: Option<String>,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `transfer_fungible_token_with_allowance` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFungibleTokenWithAllowanceNormalised {
    /// Net approved base-unit deltas per (token, account).
    pub ft_approved_transfers: BTreeMap<TokenId, TransferLedger>,
    /// Transaction memo, already truncated.
    pub transaction_memo: Option<String>,
    /// Resolved schedule spec, when requested.
    pub scheduling_params: Option<ScheduleCreateSpec>,
}

/// One NFT recipient as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NftRecipientInput {
    /// Recipient account id.
    pub account_id: String,
    /// NFT serial number to move.
    pub serial_number: i64,
}

/// Raw parameters for `transfer_non_fungible_token_with_allowance`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransferNftWithAllowanceParams {
    /// NFT class to transfer from.
    pub token_id: String,
    /// The allowance owner; required, never defaulted.
    #[serde(default)]
    pub source_account_id: Option<String>,
    /// Recipient / serial pairs.
    #[schemars(length(min = 1))]
    pub recipients: Vec<NftRecipientInput>,
    /// Optional transaction memo.
    #[serde(default)]
    pub transaction_memo: Option<String>,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `transfer_non_fungible_token_with_allowance` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferNftWithAllowanceNormalised {
    /// Approved NFT movements per token.
    pub nft_approved_transfers: BTreeMap<TokenId, Vec<NftTransfer>>,
    /// Transaction memo, already truncated.
    pub transaction_memo: Option<String>,
    /// Resolved schedule spec, when requested.
    pub scheduling_params: Option<ScheduleCreateSpec>,
}

/// Raw parameters for `approve_token_allowance`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ApproveTokenAllowanceParams {
    /// Token the allowance covers.
    pub token_id: String,
    /// Owner granting the allowance; defaults to the operator.
    #[serde(default)]
    pub owner_account_id: Option<String>,
    /// Spender being approved.
    pub spender_account_id: String,
    /// Display-unit token amount to approve.
    pub amount: DisplayAmount,
    /// Optional transaction memo.
    #[serde(default)]
    pub transaction_memo: Option<String>,
    /// Accepted for shape-compatibility; this operation is not wrapped.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `approve_token_allowance` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproveTokenAllowanceNormalised {
    /// Allowances to grant.
    pub token_allowances: Vec<TokenAllowance>,
    /// Transaction memo, already truncated.
    pub transaction_memo: Option<String>,
}

/// Raw parameters for `approve_nft_allowance`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ApproveNftAllowanceParams {
    /// NFT class the allowance covers.
    pub token_id: String,
    /// Owner granting the allowance; defaults to the operator.
    #[serde(default)]
    pub owner_account_id: Option<String>,
    /// Spender being approved.
    pub spender_account_id: String,
    /// Approve every current and future serial.
    #[serde(default)]
    pub all_serials: Option<bool>,
    /// Specific serials to approve.
    #[serde(default)]
    pub serial_numbers: Option<Vec<i64>>,
    /// Optional transaction memo.
    #[serde(default)]
    pub transaction_memo: Option<String>,
    /// Accepted for shape-compatibility; this operation is not wrapped.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `approve_nft_allowance` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproveNftAllowanceNormalised {
    /// Allowances to grant.
    pub nft_allowances: Vec<NftAllowance>,
    /// Transaction memo, already truncated.
    pub transaction_memo: Option<String>,
}

/// Raw parameters for `get_token_info`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTokenInfoParams {
    /// Token to query (e.g. `0.0.12345`).
    #[serde(default)]
    pub token_id: Option<String>,
}
