// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw parameter schemas and declarative validation.
//!
//! Every tool declares one raw-parameter struct here. Validation is
//! schema-driven: the incoming JSON value is checked against the
//! schemars-generated JSON Schema, every violation is collected, and
//! only then is the value deserialized. Normalised counterparts live in
//! the sibling modules and are consumed exclusively by the builder.

mod account;
mod evm;
mod query;
mod schedule;
mod token;
mod topic;

pub use account::*;
pub use evm::*;
pub use query::*;
pub use schedule::*;
pub use token::*;
pub use topic::*;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

use hak_core::AgentKitError;

/// Validate a raw JSON value against `T`'s schema, then deserialize it.
///
/// All schema violations are aggregated into a single
/// [`AgentKitError::Validation`] message, one `Field "name" - reason`
/// clause per problem, so the caller (usually an LLM) can fix every
/// mistake in one round trip.
pub fn parse_params<T>(params: &Value) -> Result<T, AgentKitError>
where
    T: DeserializeOwned + JsonSchema,
{
    let schema = schemars::schema_for!(T);
    let schema_value = serde_json::to_value(&schema)
        .map_err(|e| AgentKitError::Validation(format!("schema serialization failed: {e}")))?;
    let validator = jsonschema::validator_for(&schema_value)
        .map_err(|e| AgentKitError::Validation(format!("schema compilation failed: {e}")))?;

    let issues: Vec<String> = validator
        .iter_errors(params)
        .map(|err| format!("Field \"{}\" - {err}", field_label(&err)))
        .collect();
    if !issues.is_empty() {
        return Err(AgentKitError::Validation(issues.join("; ")));
    }

    serde_json::from_value(params.clone()).map_err(|e| AgentKitError::Validation(e.to_string()))
}

fn field_label(err: &jsonschema::ValidationError<'_>) -> String {
    if let jsonschema::error::ValidationErrorKind::Required { property } = &err.kind {
        if let Some(name) = property.as_str() {
            return name.to_string();
        }
    }
    let path = err.instance_path.to_string();
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        "params".to_string()
    } else {
        trimmed.split('/').next().unwrap_or("params").to_string()
    }
}

/// A display-unit amount as an LLM supplies it: a JSON number or a
/// numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DisplayAmount(pub f64);

impl DisplayAmount {
    /// The amount as a float.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for DisplayAmount {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl<'de> Deserialize<'de> for DisplayAmount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Number(n) => n
                .as_f64()
                .map(DisplayAmount)
                .ok_or_else(|| serde::de::Error::custom("amount out of range")),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map(DisplayAmount)
                .map_err(|_| serde::de::Error::custom(format!("not a numeric amount: {s:?}"))),
            other => Err(serde::de::Error::custom(format!(
                "expected number or numeric string, got {other}"
            ))),
        }
    }
}

impl JsonSchema for DisplayAmount {
    fn schema_name() -> Cow<'static, str> {
        "DisplayAmount".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "number" },
                { "type": "string", "pattern": "^\\s*-?\\d+(\\.\\d+)?\\s*$" }
            ]
        })
    }
}

/// A key parameter: `true` for the signer's own key, `false`/absent for
/// none, or a literal public-key string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyInput {
    /// Use the default key (`true`) or no key (`false`).
    Flag(bool),
    /// A literal public key, EdDSA or ECDSA encoded.
    Key(String),
}

impl JsonSchema for KeyInput {
    fn schema_name() -> Cow<'static, str> {
        "KeyInput".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "boolean" },
                { "type": "string" }
            ]
        })
    }
}

/// Optional scheduling block accepted by every schedulable operation.
///
/// Nothing besides `is_scheduled` is interpreted unless `is_scheduled`
/// is `true`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SchedulingParams {
    /// Create the transaction as a scheduled transaction.
    #[serde(default)]
    pub is_scheduled: Option<bool>,
    /// Admin key for the schedule entity.
    #[serde(default)]
    pub admin_key: Option<KeyInput>,
    /// Fee payer when the scheduled transaction executes.
    #[serde(default)]
    pub payer_account_id: Option<String>,
    /// ISO-8601 expiration of the schedule.
    #[serde(default)]
    pub expiration_time: Option<String>,
    /// Execute at expiration instead of on final signature.
    #[serde(default)]
    pub wait_for_expiry: Option<bool>,
}

impl SchedulingParams {
    /// True when the block asks for a scheduled transaction.
    pub fn wants_schedule(&self) -> bool {
        self.is_scheduled == Some(true)
    }
}
