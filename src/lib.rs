// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]

//! hedera-agent-kit
//!
//! Hedera ledger operations as discrete callable tools for LLM-driven
//! agent frameworks. This crate re-exports the member crates as one
//! surface:
//!
//! - [`core`] — value types, transaction model, errors, runtime context
//! - [`mirror`] — mirror-node REST read service
//! - [`kit`] — parameter schemas, normalisation, transaction building
//! - [`tools`] — tool façade, plugins, registry
//!
//! A typical embedding builds a [`tools::ToolRegistry`] once via
//! [`tools::default_registry`], hands each tool's description and
//! parameter schema to the agent framework, and calls `execute` with the
//! framework's function-call arguments.

pub use hak_core as core;
pub use hak_kit as kit;
pub use hak_mirror as mirror;
pub use hak_tools as tools;

pub use hak_core::{
    AgentKitError, AgentMode, Context, HederaClient, LedgerNetwork, Operator, ToolResponse,
    Transaction, TransactionExecutor,
};
pub use hak_tools::{HederaTool, ToolRegistry, default_registry};
