// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]

//! hak-tools
//!
//! The tool façade: every ledger operation of the kit wrapped as a
//! discrete callable tool (prompt description, parameter schema,
//! execute) for an LLM-driven agent framework, plus the plugins and
//! registry that compose them.

mod plugins;
mod prompt;
mod strategy;
mod tool;
pub mod tools;

pub use plugins::{
    core_account_plugin, core_account_query_plugin, core_evm_plugin, core_token_plugin,
    core_token_query_plugin, core_topic_plugin, core_transaction_plugin, default_registry,
};
pub use prompt::PromptGenerator;
pub use strategy::{handle_transaction, mirror_service};
pub use tool::{HederaTool, Plugin, ToolRegistry};
