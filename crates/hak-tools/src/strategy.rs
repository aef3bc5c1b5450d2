// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transaction-mode execution strategy.
//!
//! A built transaction either goes straight to the ledger (autonomous
//! mode) or is serialized and handed back for out-of-band signing
//! (return-bytes mode). Both outcomes end the invocation; nothing here
//! retries.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;

use hak_core::{
    AgentKitError, AgentMode, Context, ExecutedTransaction, HederaClient, ToolResponse,
    Transaction,
};
use hak_mirror::RestMirrornodeService;

/// Mirror client for an invocation: the context override wins over the
/// network default.
pub fn mirror_service(context: &Context, client: &HederaClient) -> RestMirrornodeService {
    match &context.mirrornode_url {
        Some(url) => RestMirrornodeService::with_base_url(url.clone()),
        None => RestMirrornodeService::for_network(client.network),
    }
}

/// Execute or serialize a built transaction, per the context mode.
///
/// In autonomous mode the executor's receipt is run through
/// `post_process` for the human message; ledger rejections propagate as
/// errors carrying the ledger status string. In return-bytes mode the
/// transaction is serialized (JSON, base64-encoded) into `extra.bytes`
/// and nothing is submitted.
pub async fn handle_transaction<F>(
    transaction: Transaction,
    client: &HederaClient,
    context: &Context,
    post_process: F,
) -> Result<ToolResponse, AgentKitError>
where
    F: FnOnce(&ExecutedTransaction) -> String,
{
    match context.mode {
        AgentMode::ReturnBytes => {
            let bytes = serde_json::to_vec(&transaction)
                .map_err(|e| AgentKitError::Execution(format!("serialization failed: {e}")))?;
            Ok(
                ToolResponse::success("Transaction prepared. Sign and submit the returned bytes.")
                    .with_extra("bytes", Value::String(BASE64.encode(bytes)))
                    .with_extra("scheduled", Value::Bool(transaction.is_scheduled())),
            )
        }
        AgentMode::Autonomous => {
            let result = client.execute(&transaction).await?;
            let human_message = post_process(&result);
            let raw = serde_json::to_value(&result)
                .map_err(|e| AgentKitError::Execution(format!("serialization failed: {e}")))?;
            Ok(ToolResponse::success(human_message).with_raw(raw))
        }
    }
}

/// The shared preamble for scheduled-transaction receipts, or `None`
/// for immediate executions.
pub(crate) fn scheduled_summary(result: &ExecutedTransaction) -> Option<String> {
    result.schedule_id.map(|schedule_id| {
        format!(
            "Scheduled transaction created successfully.\nTransaction ID: {}\nSchedule ID: {schedule_id}",
            result.transaction_id.as_deref().unwrap_or("unknown")
        )
    })
}
