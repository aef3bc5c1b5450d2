// SPDX-License-Identifier: MIT OR Apache-2.0

//! Account tools: HBAR transfers, account lifecycle, HBAR allowances.

use serde_json::Value;

use hak_core::{
    AgentKitError, Context, ExecutedTransaction, HederaClient, ToolResponse,
};
use hak_kit::schemas::{
    ApproveHbarAllowanceParams, CreateAccountParams, DeleteAccountParams, TransferHbarParams,
    TransferHbarWithAllowanceParams, UpdateAccountParams,
};
use hak_kit::{builder, normalise};

use crate::prompt::PromptGenerator;
use crate::strategy::{handle_transaction, mirror_service, scheduled_summary};
use crate::tools::define_tool;

pub const TRANSFER_HBAR_TOOL: &str = "transfer_hbar_tool";
pub const TRANSFER_HBAR_WITH_ALLOWANCE_TOOL: &str = "transfer_hbar_with_allowance_tool";
pub const CREATE_ACCOUNT_TOOL: &str = "create_account_tool";
pub const UPDATE_ACCOUNT_TOOL: &str = "update_account_tool";
pub const DELETE_ACCOUNT_TOOL: &str = "delete_account_tool";
pub const APPROVE_HBAR_ALLOWANCE_TOOL: &str = "approve_hbar_allowance_tool";

fn transfer_hbar_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let source_desc =
        PromptGenerator::get_account_parameter_description("source_account_id", context, false);
    let scheduled = PromptGenerator::get_scheduled_transaction_params_description(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool transfers HBAR to one or more recipients.\n\n\
         Parameters:\n\
         - transfers (array, required): Recipients as {{ account_id, amount }} pairs; amount is in HBAR\n\
         - {source_desc}\n\
         - transaction_memo (str, optional): Optional transaction memo\n\
         - {scheduled}\n\
         {usage}"
    )
}

fn post_process_transfer_hbar(result: &ExecutedTransaction) -> String {
    scheduled_summary(result).unwrap_or_else(|| {
        format!(
            "HBAR successfully transferred.\nTransaction ID: {}",
            result.transaction_id.as_deref().unwrap_or("unknown")
        )
    })
}

async fn try_transfer_hbar(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::transfer_hbar(params, context, client).await?;
    let tx = builder::transfer_hbar(normalised);
    handle_transaction(tx, client, context, post_process_transfer_hbar).await
}

define_tool!(
    /// Transfer HBAR between accounts.
    TransferHbarTool {
        method: TRANSFER_HBAR_TOOL,
        name: "Transfer HBAR",
        operation: "transfer HBAR",
        params: TransferHbarParams,
        description: transfer_hbar_prompt,
        run: try_transfer_hbar,
    }
);

fn transfer_hbar_with_allowance_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool transfers HBAR out of another account using a pre-approved allowance.\n\n\
         Parameters:\n\
         - source_account_id (str, required): The allowance owner whose HBAR is spent\n\
         - transfers (array, required): Recipients as {{ account_id, amount }} pairs; amount is in HBAR\n\
         - transaction_memo (str, optional): Optional transaction memo\n\
         {usage}"
    )
}

fn post_process_transfer_hbar_with_allowance(result: &ExecutedTransaction) -> String {
    format!(
        "HBAR successfully transferred using allowance.\nTransaction ID: {}",
        result.transaction_id.as_deref().unwrap_or("unknown")
    )
}

async fn try_transfer_hbar_with_allowance(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::transfer_hbar_with_allowance(params, context, client).await?;
    let tx = builder::transfer_hbar_with_allowance(normalised);
    handle_transaction(tx, client, context, post_process_transfer_hbar_with_allowance).await
}

define_tool!(
    /// Spend a pre-approved HBAR allowance.
    TransferHbarWithAllowanceTool {
        method: TRANSFER_HBAR_WITH_ALLOWANCE_TOOL,
        name: "Transfer HBAR With Allowance",
        operation: "transfer HBAR with allowance",
        params: TransferHbarWithAllowanceParams,
        description: transfer_hbar_with_allowance_prompt,
        run: try_transfer_hbar_with_allowance,
    }
);

fn create_account_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let scheduled = PromptGenerator::get_scheduled_transaction_params_description(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool creates a new Hedera account.\n\n\
         Parameters:\n\
         - public_key (str, optional): Key for the new account; defaults to the operator key or the default account's key\n\
         - initial_balance (number, optional): Starting balance in HBAR, defaults to 0\n\
         - account_memo (str, optional): Account memo\n\
         - max_automatic_token_associations (int, optional): Automatic token-association slots\n\
         - {scheduled}\n\
         {usage}"
    )
}

fn post_process_create_account(result: &ExecutedTransaction) -> String {
    scheduled_summary(result).unwrap_or_else(|| {
        format!(
            "Account created successfully.\nTransaction ID: {}\nAccount ID: {}",
            result.transaction_id.as_deref().unwrap_or("unknown"),
            result
                .account_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "unknown".into())
        )
    })
}

async fn try_create_account(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let mirror = mirror_service(context, client);
    let normalised = normalise::create_account(params, context, client, &mirror).await?;
    let tx = builder::create_account(normalised);
    handle_transaction(tx, client, context, post_process_create_account).await
}

define_tool!(
    /// Create a new account.
    CreateAccountTool {
        method: CREATE_ACCOUNT_TOOL,
        name: "Create Account",
        operation: "create account",
        params: CreateAccountParams,
        description: create_account_prompt,
        run: try_create_account,
    }
);

fn update_account_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let account_desc =
        PromptGenerator::get_account_parameter_description("account_id", context, false);
    let scheduled = PromptGenerator::get_scheduled_transaction_params_description(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool updates mutable fields of a Hedera account.\n\n\
         Parameters:\n\
         - {account_desc}\n\
         - account_memo (str, optional): New account memo\n\
         - {scheduled}\n\
         {usage}"
    )
}

fn post_process_update_account(result: &ExecutedTransaction) -> String {
    scheduled_summary(result).unwrap_or_else(|| {
        format!(
            "Account updated successfully.\nTransaction ID: {}",
            result.transaction_id.as_deref().unwrap_or("unknown")
        )
    })
}

async fn try_update_account(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::update_account(params, context, client).await?;
    let tx = builder::update_account(normalised);
    handle_transaction(tx, client, context, post_process_update_account).await
}

define_tool!(
    /// Update mutable account fields.
    UpdateAccountTool {
        method: UPDATE_ACCOUNT_TOOL,
        name: "Update Account",
        operation: "update account",
        params: UpdateAccountParams,
        description: update_account_prompt,
        run: try_update_account,
    }
);

fn delete_account_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let transfer_desc =
        PromptGenerator::get_account_parameter_description("transfer_account_id", context, false);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool deletes a Hedera account, sweeping its remaining balance.\n\n\
         Parameters:\n\
         - account_id (str, required): The account to delete\n\
         - {transfer_desc}\n\
         {usage}"
    )
}

fn post_process_delete_account(result: &ExecutedTransaction) -> String {
    format!(
        "Account deleted successfully.\nTransaction ID: {}",
        result.transaction_id.as_deref().unwrap_or("unknown")
    )
}

async fn try_delete_account(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::delete_account(params, context, client)?;
    let tx = builder::delete_account(normalised);
    handle_transaction(tx, client, context, post_process_delete_account).await
}

define_tool!(
    /// Delete an account.
    DeleteAccountTool {
        method: DELETE_ACCOUNT_TOOL,
        name: "Delete Account",
        operation: "delete account",
        params: DeleteAccountParams,
        description: delete_account_prompt,
        run: try_delete_account,
    }
);

fn approve_hbar_allowance_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let owner_desc =
        PromptGenerator::get_account_parameter_description("owner_account_id", context, false);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool approves an HBAR spending allowance for another account.\n\n\
         Parameters:\n\
         - {owner_desc}\n\
         - spender_account_id (str, required): Account allowed to spend\n\
         - amount (number, required): Approved amount in HBAR\n\
         - transaction_memo (str, optional): Optional transaction memo\n\
         {usage}"
    )
}

fn post_process_approve_hbar_allowance(result: &ExecutedTransaction) -> String {
    format!(
        "HBAR allowance approved successfully.\nTransaction ID: {}",
        result.transaction_id.as_deref().unwrap_or("unknown")
    )
}

async fn try_approve_hbar_allowance(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::approve_hbar_allowance(params, context, client)?;
    let tx = builder::approve_hbar_allowance(normalised);
    handle_transaction(tx, client, context, post_process_approve_hbar_allowance).await
}

define_tool!(
    /// Approve an HBAR allowance.
    ApproveHbarAllowanceTool {
        method: APPROVE_HBAR_ALLOWANCE_TOOL,
        name: "Approve HBAR Allowance",
        operation: "approve HBAR allowance",
        params: ApproveHbarAllowanceParams,
        description: approve_hbar_allowance_prompt,
        run: try_approve_hbar_allowance,
    }
);
