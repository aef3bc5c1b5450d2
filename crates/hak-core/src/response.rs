// SPDX-License-Identifier: MIT OR Apache-2.0

//! The terminal value every tool invocation returns.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome of one tool invocation, success or failure.
///
/// Failures never propagate past the tool façade as errors; they arrive
/// here with `error` set and a human message explaining the cause.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Text for the agent/LLM to read.
    pub human_message: String,
    /// Failure cause, when the invocation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine-readable operation result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
    /// Additional structured fields (e.g. serialized transaction bytes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Map<String, Value>>,
}

impl ToolResponse {
    /// A successful response with a human message.
    pub fn success(human_message: impl Into<String>) -> Self {
        Self {
            human_message: human_message.into(),
            ..Self::default()
        }
    }

    /// A failed response; the message doubles as the error cause.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            human_message: message.clone(),
            error: Some(message),
            ..Self::default()
        }
    }

    /// Attach the machine-readable result.
    pub fn with_raw(mut self, raw: Value) -> Self {
        self.raw = Some(raw);
        self
    }

    /// Attach one extra structured field.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_sets_both_fields() {
        let resp = ToolResponse::failure("Failed to mint fungible token: boom");
        assert_eq!(resp.error.as_deref(), Some("Failed to mint fungible token: boom"));
        assert_eq!(resp.human_message, "Failed to mint fungible token: boom");
    }

    #[test]
    fn extras_accumulate() {
        let resp = ToolResponse::success("ok")
            .with_extra("a", Value::from(1))
            .with_extra("b", Value::from(2));
        let extra = resp.extra.unwrap();
        assert_eq!(extra.len(), 2);
    }
}
