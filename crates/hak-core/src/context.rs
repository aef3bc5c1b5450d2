// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime context supplied by the embedding agent application.

use serde::{Deserialize, Serialize};

/// How built transactions leave the kit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentMode {
    /// The agent submits transactions directly through the signing client.
    #[default]
    Autonomous,
    /// Transactions are serialized and returned for out-of-band signing.
    ReturnBytes,
}

/// Read-only per-session configuration.
///
/// The context never changes during a tool invocation; tools read the
/// default account and mode from it and nothing else mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    /// Execution mode for built transactions.
    #[serde(default)]
    pub mode: AgentMode,
    /// Default account for parameters that allow one.
    #[serde(default)]
    pub account_id: Option<String>,
    /// Override for the mirror-node base URL (tests, private mirrors).
    #[serde(default)]
    pub mirrornode_url: Option<String>,
}

impl Context {
    /// A context bound to a user account, in the default mode.
    pub fn with_account(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            ..Self::default()
        }
    }
}
