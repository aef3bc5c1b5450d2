// SPDX-License-Identifier: MIT OR Apache-2.0

//! Topic-operation normalisers.

use serde_json::Value;

use hak_core::{AgentKitError, Context, HederaClient, Timestamp, TopicId};

use crate::resolver::AccountResolver;
use crate::schemas::{
    CreateTopicNormalised, CreateTopicParams, DeleteTopicNormalised, DeleteTopicParams,
    GetTopicInfoParams, SubmitTopicMessageNormalised, SubmitTopicMessageParams,
    UpdateTopicNormalised, UpdateTopicParams, parse_params,
};

use super::{maybe_schedule, truncate_memo};

/// Normalise `create_topic` parameters.
///
/// The admin key is always the signer's key; a submit key is set only
/// when requested, and is the same key.
pub async fn create_topic(
    params: &Value,
    context: &Context,
    client: &HederaClient,
) -> Result<CreateTopicNormalised, AgentKitError> {
    let parsed: CreateTopicParams = parse_params(params)?;

    AccountResolver::get_default_account(context, client).ok_or_else(|| {
        AgentKitError::IdentityResolution("Could not determine default account ID".into())
    })?;
    let account_public_key = AccountResolver::get_default_public_key(context, client)?;

    let submit_key = parsed
        .is_submit_key
        .unwrap_or(false)
        .then(|| account_public_key.clone());

    Ok(CreateTopicNormalised {
        memo: truncate_memo(parsed.topic_memo),
        admin_key: Some(account_public_key),
        submit_key,
        transaction_memo: truncate_memo(parsed.transaction_memo),
    })
}

/// Normalise `update_topic` parameters.
pub async fn update_topic(
    params: &Value,
    _context: &Context,
    client: &HederaClient,
) -> Result<UpdateTopicNormalised, AgentKitError> {
    let parsed: UpdateTopicParams = parse_params(params)?;

    let topic_id: TopicId = parsed.topic_id.parse()?;
    let user_public_key = client.operator_public_key();

    let admin_key = AccountResolver::resolve_key(parsed.admin_key.as_ref(), user_public_key)?;
    let submit_key = AccountResolver::resolve_key(parsed.submit_key.as_ref(), user_public_key)?;

    let expiration_time: Option<Timestamp> = parsed
        .expiration_time
        .as_deref()
        .map(str::parse)
        .transpose()?;

    Ok(UpdateTopicNormalised {
        topic_id,
        memo: truncate_memo(parsed.topic_memo),
        admin_key,
        submit_key,
        auto_renew_account_id: parsed
            .auto_renew_account_id
            .as_deref()
            .map(str::parse)
            .transpose()?,
        auto_renew_period: parsed.auto_renew_period,
        expiration_time,
    })
}

/// Normalise `delete_topic` parameters.
pub fn delete_topic(params: &Value) -> Result<DeleteTopicNormalised, AgentKitError> {
    let parsed: DeleteTopicParams = parse_params(params)?;

    if !AccountResolver::is_hedera_address(&parsed.topic_id) {
        return Err(AgentKitError::Validation(
            "Topic ID must be a Hedera address".into(),
        ));
    }

    Ok(DeleteTopicNormalised {
        topic_id: parsed.topic_id.parse()?,
    })
}

/// Normalise `submit_topic_message` parameters.
pub async fn submit_topic_message(
    params: &Value,
    context: &Context,
    client: &HederaClient,
) -> Result<SubmitTopicMessageNormalised, AgentKitError> {
    let parsed: SubmitTopicMessageParams = parse_params(params)?;

    let scheduling_params =
        maybe_schedule(parsed.scheduling_params.as_ref(), context, client).await?;

    Ok(SubmitTopicMessageNormalised {
        topic_id: parsed.topic_id.parse()?,
        message: parsed.message,
        transaction_memo: truncate_memo(parsed.transaction_memo),
        scheduling_params,
    })
}

/// Normalise `get_topic_info` parameters.
pub fn get_topic_info(params: &Value) -> Result<GetTopicInfoParams, AgentKitError> {
    parse_params(params)
}
