// SPDX-License-Identifier: MIT OR Apache-2.0

//! The tool abstraction, plugin grouping, and registry.

use async_trait::async_trait;
use schemars::Schema;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

use hak_core::{AgentKitError, Context, HederaClient, ToolResponse};

/// One ledger operation exposed to the agent framework.
///
/// `execute` is the sole entry point and never returns an error: every
/// failure inside validate/normalise/build/execute is converted into a
/// failed [`ToolResponse`] at this boundary.
#[async_trait]
pub trait HederaTool: Send + Sync {
    /// Stable method identifier (e.g. `transfer_hbar_tool`).
    fn method(&self) -> &str;

    /// Human-readable tool name.
    fn name(&self) -> &str;

    /// Prompt text describing the tool and its parameters.
    fn description(&self) -> &str;

    /// JSON Schema of the raw parameters.
    fn parameters(&self) -> Schema;

    /// Run the operation against the ledger.
    async fn execute(
        &self,
        client: &HederaClient,
        context: &Context,
        params: &Value,
    ) -> ToolResponse;
}

/// Convert a kit failure into the uniform failed response shape.
pub(crate) fn fail(operation: &str, err: &AgentKitError) -> ToolResponse {
    let message = format!("Failed to {operation}: {err}");
    tracing::warn!(target: "hak_tools", operation, error = %err, "tool invocation failed");
    ToolResponse::failure(message)
}

/// A named group of tools, mirroring how the kit ships them.
pub struct Plugin {
    /// Plugin name (e.g. `core_token_plugin`).
    pub name: &'static str,
    /// The tools this plugin contributes.
    pub tools: Vec<Arc<dyn HederaTool>>,
}

/// An explicit tool registry, built once at process start.
///
/// There is no global registration table; whoever composes the tool set
/// constructs a registry and passes it by reference.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn HederaTool>>,
}

impl ToolRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every tool of a plugin. Later registrations win on method
    /// collisions.
    pub fn register_plugin(&mut self, plugin: Plugin) -> &mut Self {
        for tool in plugin.tools {
            self.tools.insert(tool.method().to_string(), tool);
        }
        self
    }

    /// Look up a tool by method name.
    pub fn get(&self, method: &str) -> Option<&Arc<dyn HederaTool>> {
        self.tools.get(method)
    }

    /// All registered tools, ordered by method name.
    pub fn tools(&self) -> impl Iterator<Item = &Arc<dyn HederaTool>> {
        self.tools.values()
    }

    /// All registered method names, ordered.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True when no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
