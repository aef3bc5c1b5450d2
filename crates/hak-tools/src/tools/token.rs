// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token tools: creation, minting, association, transfers, allowances,
//! and the token-info query.

use serde_json::Value;

use hak_core::{
    AgentKitError, Context, ExecutedTransaction, HederaClient, ToolResponse,
};
use hak_kit::schemas::{
    ApproveNftAllowanceParams, ApproveTokenAllowanceParams, AssociateTokenParams,
    CreateFungibleTokenParams, CreateNonFungibleTokenParams, DeleteTokenParams,
    DissociateTokenParams, GetTokenInfoParams, MintFungibleTokenParams,
    MintNonFungibleTokenParams, TransferFungibleTokenParams,
    TransferFungibleTokenWithAllowanceParams, TransferNftWithAllowanceParams, UpdateTokenParams,
};
use hak_kit::{builder, normalise};
use hak_mirror::{MirrorKey, MirrornodeService, TokenInfo};

use crate::prompt::PromptGenerator;
use crate::strategy::{handle_transaction, mirror_service, scheduled_summary};
use crate::tools::define_tool;

pub const CREATE_FUNGIBLE_TOKEN_TOOL: &str = "create_fungible_token_tool";
pub const CREATE_NON_FUNGIBLE_TOKEN_TOOL: &str = "create_non_fungible_token_tool";
pub const MINT_FUNGIBLE_TOKEN_TOOL: &str = "mint_fungible_token_tool";
pub const MINT_NON_FUNGIBLE_TOKEN_TOOL: &str = "mint_non_fungible_token_tool";
pub const ASSOCIATE_TOKEN_TOOL: &str = "associate_token_tool";
pub const DISSOCIATE_TOKEN_TOOL: &str = "dissociate_token_tool";
pub const UPDATE_TOKEN_TOOL: &str = "update_token_tool";
pub const DELETE_TOKEN_TOOL: &str = "delete_token_tool";
pub const TRANSFER_FUNGIBLE_TOKEN_TOOL: &str = "transfer_fungible_token_tool";
pub const TRANSFER_FUNGIBLE_TOKEN_WITH_ALLOWANCE_TOOL: &str =
    "transfer_fungible_token_with_allowance_tool";
pub const TRANSFER_NON_FUNGIBLE_TOKEN_WITH_ALLOWANCE_TOOL: &str =
    "transfer_non_fungible_token_with_allowance_tool";
pub const APPROVE_TOKEN_ALLOWANCE_TOOL: &str = "approve_token_allowance_tool";
pub const APPROVE_NFT_ALLOWANCE_TOOL: &str = "approve_nft_allowance_tool";
pub const GET_TOKEN_INFO_QUERY_TOOL: &str = "get_token_info_query_tool";

fn create_fungible_token_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let treasury_desc =
        PromptGenerator::get_account_parameter_description("treasury_account_id", context, false);
    let scheduled = PromptGenerator::get_scheduled_transaction_params_description(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool creates a fungible token on Hedera.\n\
         *NOTE*: if token_name or token_symbol are not specified, do not call this tool and ask the user for a specific token name and symbol!\n\
         ONLY token_name and token_symbol ARE REQUIRED!\n\n\
         Parameters:\n\
         - token_name (str, required): The name of the token\n\
         - token_symbol (str, required): The symbol of the token\n\
         - initial_supply (int, optional): Initial supply in display units, defaults to 0\n\
         - supply_type (int, optional): 0 for infinite, 1 for finite; defaults to finite when max_supply is given, infinite otherwise\n\
         - max_supply (int, optional): Maximum supply in display units. Only applicable for finite supply; defaults to 1,000,000\n\
         - decimals (int, optional): Number of decimals, defaults to 0\n\
         - {treasury_desc}\n\
         - is_supply_key (boolean, optional): Set a supply key on the token; implied by finite supply\n\
         - {scheduled}\n\
         {usage}"
    )
}

fn post_process_create_token(result: &ExecutedTransaction) -> String {
    scheduled_summary(result).unwrap_or_else(|| {
        format!(
            "Token created successfully.\nTransaction ID: {}\nToken ID: {}",
            result.transaction_id.as_deref().unwrap_or("unknown"),
            result
                .token_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "unknown".into())
        )
    })
}

async fn try_create_fungible_token(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let mirror = mirror_service(context, client);
    let normalised = normalise::create_fungible_token(params, context, client, &mirror).await?;
    let tx = builder::create_fungible_token(normalised);
    handle_transaction(tx, client, context, post_process_create_token).await
}

define_tool!(
    /// Create a fungible token.
    CreateFungibleTokenTool {
        method: CREATE_FUNGIBLE_TOKEN_TOOL,
        name: "Create Fungible Token",
        operation: "create fungible token",
        params: CreateFungibleTokenParams,
        description: create_fungible_token_prompt,
        run: try_create_fungible_token,
    }
);

fn create_non_fungible_token_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let treasury_desc =
        PromptGenerator::get_account_parameter_description("treasury_account_id", context, false);
    let scheduled = PromptGenerator::get_scheduled_transaction_params_description(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool creates a non-fungible token (NFT) class on Hedera.\n\n\
         Parameters:\n\
         - token_name (str, required): The name of the token\n\
         - token_symbol (str, required): The symbol of the token\n\
         - max_supply (int, optional): Maximum number of serials, defaults to 100\n\
         - {treasury_desc}\n\
         - {scheduled}\n\
         {usage}"
    )
}

async fn try_create_non_fungible_token(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let mirror = mirror_service(context, client);
    let normalised =
        normalise::create_non_fungible_token(params, context, client, &mirror).await?;
    let tx = builder::create_non_fungible_token(normalised);
    handle_transaction(tx, client, context, post_process_create_token).await
}

define_tool!(
    /// Create an NFT class.
    CreateNonFungibleTokenTool {
        method: CREATE_NON_FUNGIBLE_TOKEN_TOOL,
        name: "Create Non-Fungible Token",
        operation: "create non-fungible token",
        params: CreateNonFungibleTokenParams,
        description: create_non_fungible_token_prompt,
        run: try_create_non_fungible_token,
    }
);

fn mint_fungible_token_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool will mint a given amount (supply) of an existing fungible token on Hedera.\n\n\
         Parameters:\n\
         - token_id (str, required): The id of the token\n\
         - amount (number, required): The amount to be minted, in display units\n\
         {usage}\n\
         Example: \"Mint 1 of 0.0.6458037\" means minting the amount of 1 of the token with id 0.0.6458037."
    )
}

fn post_process_mint(result: &ExecutedTransaction) -> String {
    scheduled_summary(result).unwrap_or_else(|| {
        format!(
            "Tokens successfully minted.\nTransaction ID: {}",
            result.transaction_id.as_deref().unwrap_or("unknown")
        )
    })
}

async fn try_mint_fungible_token(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let mirror = mirror_service(context, client);
    let normalised = normalise::mint_fungible_token(params, context, client, &mirror).await?;
    let tx = builder::mint_fungible_token(normalised);
    handle_transaction(tx, client, context, post_process_mint).await
}

define_tool!(
    /// Mint supply of an existing fungible token.
    MintFungibleTokenTool {
        method: MINT_FUNGIBLE_TOKEN_TOOL,
        name: "Mint Fungible Token",
        operation: "mint fungible token",
        params: MintFungibleTokenParams,
        description: mint_fungible_token_prompt,
        run: try_mint_fungible_token,
    }
);

fn mint_non_fungible_token_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool mints NFT serials into an existing NFT class.\n\n\
         Parameters:\n\
         - token_id (str, required): The id of the NFT class\n\
         - uris (array, required): Up to 10 URIs hosting NFT metadata, one per serial\n\
         {usage}"
    )
}

fn post_process_mint_nft(result: &ExecutedTransaction) -> String {
    scheduled_summary(result).unwrap_or_else(|| {
        format!(
            "NFT(s) successfully minted.\nTransaction ID: {}",
            result.transaction_id.as_deref().unwrap_or("unknown")
        )
    })
}

async fn try_mint_non_fungible_token(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::mint_non_fungible_token(params, context, client).await?;
    let tx = builder::mint_non_fungible_token(normalised);
    handle_transaction(tx, client, context, post_process_mint_nft).await
}

define_tool!(
    /// Mint NFT serials.
    MintNonFungibleTokenTool {
        method: MINT_NON_FUNGIBLE_TOKEN_TOOL,
        name: "Mint Non-Fungible Token",
        operation: "mint non-fungible token",
        params: MintNonFungibleTokenParams,
        description: mint_non_fungible_token_prompt,
        run: try_mint_non_fungible_token,
    }
);

fn associate_token_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let account_desc =
        PromptGenerator::get_any_address_parameter_description("account_id", context, false);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool will associate one or more tokens with a Hedera account.\n\n\
         Parameters:\n\
         - {account_desc}\n\
         - token_ids (array, required): Array of token IDs to associate\n\
         {usage}\n\
         Example: \"Associate tokens 0.0.123 and 0.0.456 to account 0.0.789\"."
    )
}

fn post_process_associate(result: &ExecutedTransaction) -> String {
    scheduled_summary(result).unwrap_or_else(|| {
        format!(
            "Tokens successfully associated with transaction id {}",
            result.transaction_id.as_deref().unwrap_or("unknown")
        )
    })
}

async fn try_associate_token(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::associate_token(params, context, client).await?;
    let tx = builder::associate_token(normalised);
    handle_transaction(tx, client, context, post_process_associate).await
}

define_tool!(
    /// Associate tokens with an account.
    AssociateTokenTool {
        method: ASSOCIATE_TOKEN_TOOL,
        name: "Associate Token",
        operation: "associate token(s)",
        params: AssociateTokenParams,
        description: associate_token_prompt,
        run: try_associate_token,
    }
);

fn dissociate_token_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let account_desc =
        PromptGenerator::get_any_address_parameter_description("account_id", context, false);
    let scheduled = PromptGenerator::get_scheduled_transaction_params_description(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool will dissociate one or more tokens from a Hedera account.\n\n\
         Parameters:\n\
         - token_ids (array, required): Array of token IDs to dissociate\n\
         - {account_desc}\n\
         - transaction_memo (str, optional): Optional transaction memo\n\
         - {scheduled}\n\
         {usage}"
    )
}

fn post_process_dissociate(result: &ExecutedTransaction) -> String {
    scheduled_summary(result).unwrap_or_else(|| {
        format!(
            "Tokens successfully dissociated.\nTransaction ID: {}",
            result.transaction_id.as_deref().unwrap_or("unknown")
        )
    })
}

async fn try_dissociate_token(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::dissociate_token(params, context, client).await?;
    let tx = builder::dissociate_token(normalised);
    handle_transaction(tx, client, context, post_process_dissociate).await
}

define_tool!(
    /// Dissociate tokens from an account.
    DissociateTokenTool {
        method: DISSOCIATE_TOKEN_TOOL,
        name: "Dissociate Token",
        operation: "dissociate token(s)",
        params: DissociateTokenParams,
        description: dissociate_token_prompt,
        run: try_dissociate_token,
    }
);

fn update_token_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool updates mutable fields and keys of an existing token.\n\n\
         Parameters:\n\
         - token_id (str, required): Token ID to update\n\
         - token_name, token_symbol, token_memo, metadata (str, optional): New values\n\
         - treasury_account_id, auto_renew_account_id (str, optional): New accounts\n\
         - admin_key, supply_key, wipe_key, freeze_key, kyc_key, fee_schedule_key, pause_key, metadata_key \
         (boolean|string, optional): true uses the operator key; a string is used as the key itself\n\
         {usage}"
    )
}

fn post_process_update_token(result: &ExecutedTransaction) -> String {
    format!(
        "Token updated successfully.\nTransaction ID: {}",
        result.transaction_id.as_deref().unwrap_or("unknown")
    )
}

async fn try_update_token(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::update_token(params, context, client)?;
    let tx = builder::update_token(normalised);
    handle_transaction(tx, client, context, post_process_update_token).await
}

define_tool!(
    /// Update token fields and keys.
    UpdateTokenTool {
        method: UPDATE_TOKEN_TOOL,
        name: "Update Token",
        operation: "update token",
        params: UpdateTokenParams,
        description: update_token_prompt,
        run: try_update_token,
    }
);

fn delete_token_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool deletes an existing token. Requires the token's admin key.\n\n\
         Parameters:\n\
         - token_id (str, required): The ID of the token to delete\n\
         {usage}"
    )
}

fn post_process_delete_token(result: &ExecutedTransaction) -> String {
    format!(
        "Token deleted successfully.\nTransaction ID: {}",
        result.transaction_id.as_deref().unwrap_or("unknown")
    )
}

async fn try_delete_token(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::delete_token(params)?;
    let tx = builder::delete_token(normalised);
    handle_transaction(tx, client, context, post_process_delete_token).await
}

define_tool!(
    /// Delete a token.
    DeleteTokenTool {
        method: DELETE_TOKEN_TOOL,
        name: "Delete Token",
        operation: "delete token",
        params: DeleteTokenParams,
        description: delete_token_prompt,
        run: try_delete_token,
    }
);

fn transfer_fungible_token_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let source_desc =
        PromptGenerator::get_account_parameter_description("source_account_id", context, false);
    let scheduled = PromptGenerator::get_scheduled_transaction_params_description(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool transfers an existing fungible token to one or more recipients.\n\n\
         Parameters:\n\
         - token_id (str, required): Token ID to transfer\n\
         - transfers (array, required): Recipients as {{ account_id, amount }} pairs; amount is in display units\n\
         - {source_desc}\n\
         - transaction_memo (str, optional): Optional transaction memo\n\
         - {scheduled}\n\
         {usage}"
    )
}

fn post_process_transfer_token(result: &ExecutedTransaction) -> String {
    scheduled_summary(result).unwrap_or_else(|| {
        format!(
            "Tokens successfully transferred.\nTransaction ID: {}",
            result.transaction_id.as_deref().unwrap_or("unknown")
        )
    })
}

async fn try_transfer_fungible_token(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let mirror = mirror_service(context, client);
    let normalised =
        normalise::transfer_fungible_token(params, context, client, &mirror).await?;
    let tx = builder::transfer_fungible_token(normalised);
    handle_transaction(tx, client, context, post_process_transfer_token).await
}

define_tool!(
    /// Transfer a fungible token.
    TransferFungibleTokenTool {
        method: TRANSFER_FUNGIBLE_TOKEN_TOOL,
        name: "Transfer Fungible Token",
        operation: "transfer fungible token",
        params: TransferFungibleTokenParams,
        description: transfer_fungible_token_prompt,
        run: try_transfer_fungible_token,
    }
);

fn transfer_fungible_token_with_allowance_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let scheduled = PromptGenerator::get_scheduled_transaction_params_description(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool transfers a fungible token out of another account using a pre-approved allowance.\n\n\
         Parameters:\n\
         - token_id (str, required): Token ID to transfer\n\
         - source_account_id (str, required): The allowance owner whose tokens are spent\n\
         - transfers (array, required): Recipients as {{ account_id, amount }} pairs; amount is in display units\n\
         - transaction_memo (str, optional): Optional transaction memo\n\
         - {scheduled}\n\
         {usage}"
    )
}

fn post_process_transfer_token_with_allowance(result: &ExecutedTransaction) -> String {
    scheduled_summary(result).unwrap_or_else(|| {
        format!(
            "Tokens successfully transferred using allowance.\nTransaction ID: {}",
            result.transaction_id.as_deref().unwrap_or("unknown")
        )
    })
}

async fn try_transfer_fungible_token_with_allowance(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let mirror = mirror_service(context, client);
    let normalised =
        normalise::transfer_fungible_token_with_allowance(params, context, client, &mirror)
            .await?;
    let tx = builder::transfer_fungible_token_with_allowance(normalised);
    handle_transaction(tx, client, context, post_process_transfer_token_with_allowance).await
}

define_tool!(
    /// Spend a pre-approved fungible-token allowance.
    TransferFungibleTokenWithAllowanceTool {
        method: TRANSFER_FUNGIBLE_TOKEN_WITH_ALLOWANCE_TOOL,
        name: "Transfer Fungible Token With Allowance",
        operation: "transfer fungible token with allowance",
        params: TransferFungibleTokenWithAllowanceParams,
        description: transfer_fungible_token_with_allowance_prompt,
        run: try_transfer_fungible_token_with_allowance,
    }
);

fn transfer_nft_with_allowance_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let scheduled = PromptGenerator::get_scheduled_transaction_params_description(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool transfers NFTs out of another account using a pre-approved allowance.\n\n\
         Parameters:\n\
         - token_id (str, required): The NFT token ID\n\
         - source_account_id (str, required): Account ID of the NFT owner\n\
         - recipients (array, required): Recipient / serial pairs as {{ account_id, serial_number }}\n\
         - transaction_memo (str, optional): Optional transaction memo\n\
         - {scheduled}\n\
         {usage}"
    )
}

fn post_process_transfer_nft(result: &ExecutedTransaction) -> String {
    scheduled_summary(result).unwrap_or_else(|| {
        format!(
            "NFT(s) successfully transferred using allowance.\nTransaction ID: {}",
            result.transaction_id.as_deref().unwrap_or("unknown")
        )
    })
}

async fn try_transfer_nft_with_allowance(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::transfer_nft_with_allowance(params, context, client).await?;
    let tx = builder::transfer_nft_with_allowance(normalised);
    handle_transaction(tx, client, context, post_process_transfer_nft).await
}

define_tool!(
    /// Spend a pre-approved NFT allowance.
    TransferNftWithAllowanceTool {
        method: TRANSFER_NON_FUNGIBLE_TOKEN_WITH_ALLOWANCE_TOOL,
        name: "Transfer NFT With Allowance",
        operation: "transfer non-fungible token with allowance",
        params: TransferNftWithAllowanceParams,
        description: transfer_nft_with_allowance_prompt,
        run: try_transfer_nft_with_allowance,
    }
);

fn approve_token_allowance_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let owner_desc =
        PromptGenerator::get_account_parameter_description("owner_account_id", context, false);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool approves a fungible-token spending allowance for another account.\n\n\
         Parameters:\n\
         - token_id (str, required): Token the allowance covers\n\
         - {owner_desc}\n\
         - spender_account_id (str, required): Account allowed to spend\n\
         - amount (number, required): Approved amount in display units\n\
         - transaction_memo (str, optional): Optional transaction memo\n\
         {usage}"
    )
}

fn post_process_approve_token_allowance(result: &ExecutedTransaction) -> String {
    format!(
        "Token allowance approved successfully.\nTransaction ID: {}",
        result.transaction_id.as_deref().unwrap_or("unknown")
    )
}

async fn try_approve_token_allowance(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let mirror = mirror_service(context, client);
    let normalised =
        normalise::approve_token_allowance(params, context, client, &mirror).await?;
    let tx = builder::approve_token_allowance(normalised);
    handle_transaction(tx, client, context, post_process_approve_token_allowance).await
}

define_tool!(
    /// Approve a fungible-token allowance.
    ApproveTokenAllowanceTool {
        method: APPROVE_TOKEN_ALLOWANCE_TOOL,
        name: "Approve Token Allowance",
        operation: "approve token allowance",
        params: ApproveTokenAllowanceParams,
        description: approve_token_allowance_prompt,
        run: try_approve_token_allowance,
    }
);

fn approve_nft_allowance_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let owner_desc =
        PromptGenerator::get_account_parameter_description("owner_account_id", context, false);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool approves an NFT transfer allowance for another account.\n\n\
         Parameters:\n\
         - token_id (str, required): NFT token ID\n\
         - {owner_desc}\n\
         - spender_account_id (str, required): Account allowed to transfer\n\
         - all_serials (boolean, optional): Approve all serials, defaults to false\n\
         - serial_numbers (array, optional): Serial numbers to approve; required unless all_serials is true\n\
         - transaction_memo (str, optional): Optional transaction memo\n\
         {usage}"
    )
}

fn post_process_approve_nft_allowance(result: &ExecutedTransaction) -> String {
    format!(
        "NFT allowance approved successfully.\nTransaction ID: {}",
        result.transaction_id.as_deref().unwrap_or("unknown")
    )
}

async fn try_approve_nft_allowance(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::approve_nft_allowance(params, context, client)?;
    let tx = builder::approve_nft_allowance(normalised);
    handle_transaction(tx, client, context, post_process_approve_nft_allowance).await
}

define_tool!(
    /// Approve an NFT allowance.
    ApproveNftAllowanceTool {
        method: APPROVE_NFT_ALLOWANCE_TOOL,
        name: "Approve NFT Allowance",
        operation: "approve NFT allowance",
        params: ApproveNftAllowanceParams,
        description: approve_nft_allowance_prompt,
        run: try_approve_nft_allowance,
    }
);

fn get_token_info_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool will return the information for a given Hedera token. Make sure to return the token symbol.\n\n\
         Parameters:\n\
         - token_id (str): The token ID to query for\n\
         {usage}"
    )
}

/// Format a base-unit supply for display, applying decimals.
fn format_supply(supply: Option<i128>, decimals: u32) -> String {
    match supply {
        None => "N/A".to_string(),
        Some(supply) if decimals == 0 => supply.to_string(),
        Some(supply) => {
            let scaled = supply as f64 / 10f64.powi(decimals as i32);
            let text = format!("{scaled:.prec$}", prec = decimals as usize);
            text.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

fn format_key(key: Option<&MirrorKey>) -> String {
    match key {
        None => "Not Set".to_string(),
        Some(key) if key.key_type.is_some() => {
            key.key.clone().unwrap_or_else(|| "Present".to_string())
        }
        Some(_) => "Present".to_string(),
    }
}

fn post_process_token_info(token_info: &TokenInfo) -> String {
    let decimals = token_info.decimals_u32().unwrap_or(0);
    let supply_type = match token_info.supply_type.as_deref() {
        Some("INFINITE") => "Infinite",
        _ => "Finite",
    };
    let freeze_status = if token_info.freeze_default == Some(true) {
        "Frozen"
    } else {
        "Active"
    };
    let deleted_status = if token_info.deleted == Some(true) {
        "Deleted"
    } else {
        "Active"
    };
    let memo_section = match token_info.memo.as_deref() {
        Some(memo) if !memo.is_empty() => format!("\n**Memo**: {memo}"),
        _ => String::new(),
    };

    format!(
        "Here are the details for token **{token_id}**:\n\n\
         - **Token Name**: {name}\n\
         - **Token Symbol**: {symbol}\n\
         - **Token Type**: {token_type}\n\
         - **Decimals**: {decimals}\n\
         - **Max Supply**: {max_supply}\n\
         - **Current Supply**: {total_supply}\n\
         - **Supply Type**: {supply_type}\n\
         - **Treasury Account ID**: {treasury}\n\
         - **Status (Deleted/Active)**: {deleted_status}\n\
         - **Status (Frozen/Active)**: {freeze_status}\n\n\
         **Keys**:\n\
         - Admin Key: {admin_key}\n\
         - Supply Key: {supply_key}\n\
         - Wipe Key: {wipe_key}\n\
         - KYC Key: {kyc_key}\n\
         - Freeze Key: {freeze_key}\n\
         - Fee Schedule Key: {fee_schedule_key}\n\
         - Pause Key: {pause_key}\n\
         - Metadata Key: {metadata_key}\n\
         {memo_section}",
        token_id = token_info.token_id.as_deref().unwrap_or("N/A"),
        name = token_info.name.as_deref().unwrap_or("N/A"),
        symbol = token_info.symbol.as_deref().unwrap_or("N/A"),
        token_type = token_info.token_type.as_deref().unwrap_or("N/A"),
        max_supply = format_supply(token_info.max_supply_i128(), decimals),
        total_supply = format_supply(token_info.total_supply_i128(), decimals),
        treasury = token_info.treasury_account_id.as_deref().unwrap_or("N/A"),
        admin_key = format_key(token_info.admin_key.as_ref()),
        supply_key = format_key(token_info.supply_key.as_ref()),
        wipe_key = format_key(token_info.wipe_key.as_ref()),
        kyc_key = format_key(token_info.kyc_key.as_ref()),
        freeze_key = format_key(token_info.freeze_key.as_ref()),
        fee_schedule_key = format_key(token_info.fee_schedule_key.as_ref()),
        pause_key = format_key(token_info.pause_key.as_ref()),
        metadata_key = format_key(token_info.metadata_key.as_ref()),
    )
}

async fn try_get_token_info(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let token_id = normalise::get_token_info(params)?;
    let mirror = mirror_service(context, client);

    let mut token_info = mirror
        .get_token_info(&token_id)
        .await
        .map_err(AgentKitError::from)?;
    if token_info.token_id.is_none() {
        token_info.token_id = Some(token_id.clone());
    }

    Ok(ToolResponse::success(post_process_token_info(&token_info))
        .with_extra("tokenInfo", serde_json::to_value(&token_info).unwrap_or_default())
        .with_extra("tokenId", Value::String(token_id)))
}

define_tool!(
    /// Query token metadata from the mirror node.
    GetTokenInfoQueryTool {
        method: GET_TOKEN_INFO_QUERY_TOOL,
        name: "Get Token Info",
        operation: "get token info",
        params: GetTokenInfoParams,
        description: get_token_info_prompt,
        run: try_get_token_info,
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supply_formatting_applies_decimals() {
        assert_eq!(format_supply(Some(500), 0), "500");
        assert_eq!(format_supply(Some(10_000), 2), "100");
        assert_eq!(format_supply(Some(10_500), 2), "105");
        assert_eq!(format_supply(Some(10_050), 2), "100.5");
        assert_eq!(format_supply(None, 2), "N/A");
    }

    #[test]
    fn key_formatting() {
        assert_eq!(format_key(None), "Not Set");
        let typed = MirrorKey {
            key_type: Some("ED25519".into()),
            key: Some("aabb".into()),
        };
        assert_eq!(format_key(Some(&typed)), "aabb");
        let untyped = MirrorKey {
            key_type: None,
            key: None,
        };
        assert_eq!(format_key(Some(&untyped)), "Present");
    }
}
