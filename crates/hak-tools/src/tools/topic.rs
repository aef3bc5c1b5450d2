// SPDX-License-Identifier: MIT OR Apache-2.0

//! Consensus-topic tools.

use serde_json::Value;

use hak_core::{
    AgentKitError, Context, ExecutedTransaction, HederaClient, ToolResponse,
};
use hak_kit::schemas::{
    CreateTopicParams, DeleteTopicParams, GetTopicInfoParams, SubmitTopicMessageParams,
    UpdateTopicParams,
};
use hak_kit::{builder, normalise};
use hak_mirror::{MirrornodeService, TopicInfo};

use crate::prompt::PromptGenerator;
use crate::strategy::{handle_transaction, mirror_service, scheduled_summary};
use crate::tools::define_tool;

pub const CREATE_TOPIC_TOOL: &str = "create_topic_tool";
pub const UPDATE_TOPIC_TOOL: &str = "update_topic_tool";
pub const DELETE_TOPIC_TOOL: &str = "delete_topic_tool";
pub const SUBMIT_TOPIC_MESSAGE_TOOL: &str = "submit_topic_message_tool";
pub const GET_TOPIC_INFO_QUERY_TOOL: &str = "get_topic_info_query_tool";

fn create_topic_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool creates a consensus topic on Hedera. The operator key becomes the topic's admin key.\n\n\
         Parameters:\n\
         - topic_memo (str, optional): Topic memo\n\
         - is_submit_key (boolean, optional): Restrict message submission to the operator key, defaults to false\n\
         - transaction_memo (str, optional): Optional transaction memo\n\
         {usage}"
    )
}

fn post_process_create_topic(result: &ExecutedTransaction) -> String {
    scheduled_summary(result).unwrap_or_else(|| {
        format!(
            "Topic created successfully.\nTransaction ID: {}\nTopic ID: {}",
            result.transaction_id.as_deref().unwrap_or("unknown"),
            result
                .topic_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "unknown".into())
        )
    })
}

async fn try_create_topic(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::create_topic(params, context, client).await?;
    let tx = builder::create_topic(normalised);
    handle_transaction(tx, client, context, post_process_create_topic).await
}

define_tool!(
    /// Create a consensus topic.
    CreateTopicTool {
        method: CREATE_TOPIC_TOOL,
        name: "Create Topic",
        operation: "create topic",
        params: CreateTopicParams,
        description: create_topic_prompt,
        run: try_create_topic,
    }
);

fn update_topic_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let auto_renew_desc = PromptGenerator::get_account_parameter_description(
        "auto_renew_account_id",
        context,
        false,
    );
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool updates mutable fields of a consensus topic.\n\n\
         Parameters:\n\
         - topic_id (str, required): Topic to update\n\
         - topic_memo (str, optional): New topic memo\n\
         - admin_key, submit_key (boolean|string, optional): true uses the operator key; a string is used as the key itself\n\
         - {auto_renew_desc}\n\
         - auto_renew_period (int, optional): New auto-renew period in seconds\n\
         - expiration_time (str, optional, ISO 8601): New expiration time\n\
         {usage}"
    )
}

fn post_process_update_topic(result: &ExecutedTransaction) -> String {
    format!(
        "Topic updated successfully.\nTransaction ID: {}",
        result.transaction_id.as_deref().unwrap_or("unknown")
    )
}

async fn try_update_topic(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::update_topic(params, context, client).await?;
    let tx = builder::update_topic(normalised);
    handle_transaction(tx, client, context, post_process_update_topic).await
}

define_tool!(
    /// Update a consensus topic.
    UpdateTopicTool {
        method: UPDATE_TOPIC_TOOL,
        name: "Update Topic",
        operation: "update topic",
        params: UpdateTopicParams,
        description: update_topic_prompt,
        run: try_update_topic,
    }
);

fn delete_topic_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool deletes a consensus topic. Requires the topic's admin key.\n\n\
         Parameters:\n\
         - topic_id (str, required): The topic to delete\n\
         {usage}"
    )
}

fn post_process_delete_topic(result: &ExecutedTransaction) -> String {
    format!(
        "Topic deleted successfully.\nTransaction ID: {}",
        result.transaction_id.as_deref().unwrap_or("unknown")
    )
}

async fn try_delete_topic(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::delete_topic(params)?;
    let tx = builder::delete_topic(normalised);
    handle_transaction(tx, client, context, post_process_delete_topic).await
}

define_tool!(
    /// Delete a consensus topic.
    DeleteTopicTool {
        method: DELETE_TOPIC_TOOL,
        name: "Delete Topic",
        operation: "delete topic",
        params: DeleteTopicParams,
        description: delete_topic_prompt,
        run: try_delete_topic,
    }
);

fn submit_topic_message_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let scheduled = PromptGenerator::get_scheduled_transaction_params_description(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool submits a message to a consensus topic.\n\n\
         Parameters:\n\
         - topic_id (str, required): Destination topic\n\
         - message (str, required): The message payload\n\
         - transaction_memo (str, optional): Optional transaction memo\n\
         - {scheduled}\n\
         {usage}"
    )
}

fn post_process_submit_message(result: &ExecutedTransaction) -> String {
    scheduled_summary(result).unwrap_or_else(|| {
        format!(
            "Message submitted successfully.\nTransaction ID: {}",
            result.transaction_id.as_deref().unwrap_or("unknown")
        )
    })
}

async fn try_submit_topic_message(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::submit_topic_message(params, context, client).await?;
    let tx = builder::submit_topic_message(normalised);
    handle_transaction(tx, client, context, post_process_submit_message).await
}

define_tool!(
    /// Submit a message to a topic.
    SubmitTopicMessageTool {
        method: SUBMIT_TOPIC_MESSAGE_TOOL,
        name: "Submit Topic Message",
        operation: "submit topic message",
        params: SubmitTopicMessageParams,
        description: submit_topic_message_prompt,
        run: try_submit_topic_message,
    }
);

fn get_topic_info_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool returns the information for a given consensus topic.\n\n\
         Parameters:\n\
         - topic_id (str, required): The topic ID to query for\n\
         {usage}"
    )
}

fn describe_key(key: Option<&hak_mirror::MirrorKey>) -> String {
    match key {
        Some(key) => key.key.clone().unwrap_or_else(|| "Present".to_string()),
        None => "Not Set".to_string(),
    }
}

fn post_process_topic_info(topic_info: &TopicInfo) -> String {
    format!(
        "Here are the details for topic **{topic_id}**:\n\n\
         - **Memo**: {memo}\n\
         - **Admin Key**: {admin_key}\n\
         - **Submit Key**: {submit_key}\n\
         - **Auto Renew Account**: {auto_renew_account}\n\
         - **Auto Renew Period**: {auto_renew_period}\n\
         - **Status**: {status}",
        topic_id = topic_info.topic_id.as_deref().unwrap_or("N/A"),
        memo = topic_info.memo.as_deref().filter(|m| !m.is_empty()).unwrap_or("N/A"),
        admin_key = describe_key(topic_info.admin_key.as_ref()),
        submit_key = describe_key(topic_info.submit_key.as_ref()),
        auto_renew_account = topic_info.auto_renew_account.as_deref().unwrap_or("N/A"),
        auto_renew_period = topic_info
            .auto_renew_period
            .map(|p| format!("{p} seconds"))
            .unwrap_or_else(|| "N/A".into()),
        status = if topic_info.deleted == Some(true) { "Deleted" } else { "Active" },
    )
}

async fn try_get_topic_info(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let parsed: GetTopicInfoParams = normalise::get_topic_info(params)?;
    let mirror = mirror_service(context, client);

    let topic_info = mirror
        .get_topic_info(&parsed.topic_id)
        .await
        .map_err(AgentKitError::from)?;

    Ok(ToolResponse::success(post_process_topic_info(&topic_info))
        .with_extra(
            "topicInfo",
            serde_json::to_value(&topic_info).unwrap_or_default(),
        )
        .with_extra("topicId", Value::String(parsed.topic_id)))
}

define_tool!(
    /// Query topic metadata from the mirror node.
    GetTopicInfoQueryTool {
        method: GET_TOPIC_INFO_QUERY_TOOL,
        name: "Get Topic Info",
        operation: "get topic info",
        params: GetTopicInfoParams,
        description: get_topic_info_prompt,
        run: try_get_topic_info,
    }
);
