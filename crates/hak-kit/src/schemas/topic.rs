// SPDX-License-Identifier: MIT OR Apache-2.0

//! Topic-operation parameter schemas, raw and normalised.

use schemars::JsonSchema;
use serde::Deserialize;

use hak_core::{AccountId, PublicKey, ScheduleCreateSpec, Timestamp, TopicId};

use super::{KeyInput, SchedulingParams};

/// Raw parameters for `create_topic`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateTopicParams {
    /// Topic memo.
    #[serde(default)]
    pub topic_memo: Option<String>,
    /// Also set a submit key (the operator's key).
    #[serde(default)]
    pub is_submit_key: Option<bool>,
    /// Optional transaction memo.
    #[serde(default)]
    pub transaction_memo: Option<String>,
}

/// Normalised `create_topic` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTopicNormalised {
    /// Topic memo, already truncated.
    pub memo: Option<String>,
    /// Admin key (the operator's key).
    pub admin_key: Option<PublicKey>,
    /// Submit key, when requested.
    pub submit_key: Option<PublicKey>,
    /// Transaction memo, already truncated.
    pub transaction_memo: Option<String>,
}

/// Raw parameters for `update_topic`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateTopicParams {
    /// Topic to update.
    pub topic_id: String,
    /// New topic memo.
    #[serde(default)]
    pub topic_memo: Option<String>,
    /// Admin key replacement.
    #[serde(default)]
    pub admin_key: Option<KeyInput>,
    /// Submit key replacement.
    #[serde(default)]
    pub submit_key: Option<KeyInput>,
    /// New auto-renew account.
    #[serde(default)]
    pub auto_renew_account_id: Option<String>,
    /// New auto-renew period in seconds.
    #[serde(default)]
    pub auto_renew_period: Option<i64>,
    /// New expiration time (ISO-8601).
    #[serde(default)]
    pub expiration_time: Option<String>,
}

/// Normalised `update_topic` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTopicNormalised {
    /// Topic being updated.
    pub topic_id: TopicId,
    /// New topic memo, already truncated.
    pub memo: Option<String>,
    /// New admin key, when present.
    pub admin_key: Option<PublicKey>,
    /// New submit key, when present.
    pub submit_key: Option<PublicKey>,
    /// New auto-renew account, when present.
    pub auto_renew_account_id: Option<AccountId>,
    /// New auto-renew period in seconds, when present.
    pub auto_renew_period: Option<i64>,
    /// New expiration time, when present.
    pub expiration_time: Option<Timestamp>,
}

/// Raw parameters for `delete_topic`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteTopicParams {
    /// Topic to delete.
    pub topic_id: String,
}

/// Normalised `delete_topic` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteTopicNormalised {
    /// Topic being deleted.
    pub topic_id: TopicId,
}

/// Raw parameters for `submit_topic_message`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubmitTopicMessageParams {
    /// Destination topic.
    pub topic_id: String,
    /// Message payload.
    pub message: String,
    /// Optional transaction memo.
    #[serde(default)]
    pub transaction_memo: Option<String>,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised `submit_topic_message` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTopicMessageNormalised {
    /// Destination topic.
    pub topic_id: TopicId,
    /// Message payload.
    pub message: String,
    /// Transaction memo, already truncated.
    pub transaction_memo: Option<String>,
    /// Resolved schedule spec, when requested.
    pub scheduling_params: Option<ScheduleCreateSpec>,
}

/// Raw parameters for `get_topic_info`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTopicInfoParams {
    /// Topic to query.
    pub topic_id: String,
}
