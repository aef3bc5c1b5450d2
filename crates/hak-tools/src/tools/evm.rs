// SPDX-License-Identifier: MIT OR Apache-2.0

//! EVM tools: ERC-20 creation through the factory contract.

use serde_json::Value;

use hak_core::{
    AgentKitError, Context, ExecutedTransaction, HederaClient, ToolResponse,
};
use hak_kit::schemas::CreateErc20Params;
use hak_kit::{builder, normalise};

use crate::prompt::PromptGenerator;
use crate::strategy::{handle_transaction, scheduled_summary};
use crate::tools::define_tool;

pub const CREATE_ERC20_TOOL: &str = "create_erc20_tool";

fn create_erc20_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let scheduled = PromptGenerator::get_scheduled_transaction_params_description(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool deploys an ERC-20 token contract on Hedera through the BaseERC20Factory.\n\n\
         Parameters:\n\
         - token_name (str, required): The name of the token\n\
         - token_symbol (str, required): The symbol of the token\n\
         - decimals (int, optional): Number of decimals, defaults to 0\n\
         - initial_supply (int, optional): Initial supply in base units, defaults to 0\n\
         - {scheduled}\n\
         {usage}"
    )
}

fn post_process_create_erc20(result: &ExecutedTransaction) -> String {
    scheduled_summary(result).unwrap_or_else(|| {
        format!(
            "ERC20 token created successfully.\nTransaction ID: {}",
            result.transaction_id.as_deref().unwrap_or("unknown")
        )
    })
}

async fn try_create_erc20(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::create_erc20(params, context, client).await?;
    let tx = builder::execute_contract(normalised);
    handle_transaction(tx, client, context, post_process_create_erc20).await
}

define_tool!(
    /// Deploy an ERC-20 through the factory contract.
    CreateErc20Tool {
        method: CREATE_ERC20_TOOL,
        name: "Create ERC20 Token",
        operation: "create ERC20 token",
        params: CreateErc20Params,
        description: create_erc20_prompt,
        run: try_create_erc20,
    }
);
