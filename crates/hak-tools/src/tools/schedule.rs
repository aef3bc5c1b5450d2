// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schedule tools: signing and deleting pending scheduled transactions.

use serde_json::Value;

use hak_core::{
    AgentKitError, Context, ExecutedTransaction, HederaClient, ToolResponse,
};
use hak_kit::schemas::{DeleteScheduleParams, SignScheduleParams};
use hak_kit::{builder, normalise};

use crate::prompt::PromptGenerator;
use crate::strategy::handle_transaction;
use crate::tools::define_tool;

pub const SIGN_SCHEDULE_TOOL: &str = "sign_schedule_tool";
pub const DELETE_SCHEDULE_TOOL: &str = "delete_schedule_tool";

fn sign_schedule_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool adds the operator's signature to a pending scheduled transaction.\n\n\
         Parameters:\n\
         - schedule_id (str, required): The schedule to sign\n\
         {usage}"
    )
}

fn post_process_sign_schedule(result: &ExecutedTransaction) -> String {
    format!(
        "Schedule signed successfully.\nTransaction ID: {}",
        result.transaction_id.as_deref().unwrap_or("unknown")
    )
}

async fn try_sign_schedule(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::sign_schedule(params)?;
    let tx = builder::sign_schedule(normalised);
    handle_transaction(tx, client, context, post_process_sign_schedule).await
}

define_tool!(
    /// Sign a pending schedule.
    SignScheduleTool {
        method: SIGN_SCHEDULE_TOOL,
        name: "Sign Schedule",
        operation: "sign schedule transaction",
        params: SignScheduleParams,
        description: sign_schedule_prompt,
        run: try_sign_schedule,
    }
);

fn delete_schedule_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool deletes a pending scheduled transaction. Requires the schedule's admin key.\n\n\
         Parameters:\n\
         - schedule_id (str, required): The schedule to delete\n\
         {usage}"
    )
}

fn post_process_delete_schedule(result: &ExecutedTransaction) -> String {
    format!(
        "Schedule deleted successfully.\nTransaction ID: {}",
        result.transaction_id.as_deref().unwrap_or("unknown")
    )
}

async fn try_delete_schedule(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::delete_schedule(params)?;
    let tx = builder::delete_schedule(normalised);
    handle_transaction(tx, client, context, post_process_delete_schedule).await
}

define_tool!(
    /// Delete a pending schedule.
    DeleteScheduleTool {
        method: DELETE_SCHEDULE_TOOL,
        name: "Delete Schedule",
        operation: "delete schedule transaction",
        params: DeleteScheduleParams,
        description: delete_schedule_prompt,
        run: try_delete_schedule,
    }
);
