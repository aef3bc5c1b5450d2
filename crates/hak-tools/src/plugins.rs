// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin constructors and the default registry.
//!
//! Plugins are plain constructor functions: the embedding application
//! picks the plugins it wants, builds a [`ToolRegistry`] once at startup,
//! and passes it around by reference.

use std::sync::Arc;

use hak_core::Context;

use crate::tool::{Plugin, ToolRegistry};
use crate::tools::account::{
    ApproveHbarAllowanceTool, CreateAccountTool, DeleteAccountTool, TransferHbarTool,
    TransferHbarWithAllowanceTool, UpdateAccountTool,
};
use crate::tools::evm::CreateErc20Tool;
use crate::tools::query::{
    GetAccountQueryTool, GetExchangeRateTool, GetHbarBalanceQueryTool,
    GetTransactionRecordQueryTool,
};
use crate::tools::schedule::{DeleteScheduleTool, SignScheduleTool};
use crate::tools::token::{
    ApproveNftAllowanceTool, ApproveTokenAllowanceTool, AssociateTokenTool,
    CreateFungibleTokenTool, CreateNonFungibleTokenTool, DeleteTokenTool, DissociateTokenTool,
    GetTokenInfoQueryTool, MintFungibleTokenTool, MintNonFungibleTokenTool,
    TransferFungibleTokenTool, TransferFungibleTokenWithAllowanceTool,
    TransferNftWithAllowanceTool, UpdateTokenTool,
};
use crate::tools::topic::{
    CreateTopicTool, DeleteTopicTool, GetTopicInfoQueryTool, SubmitTopicMessageTool,
    UpdateTopicTool,
};

/// Account lifecycle, HBAR transfers, and HBAR allowances.
pub fn core_account_plugin(context: &Context) -> Plugin {
    Plugin {
        name: "core_account_plugin",
        tools: vec![
            Arc::new(TransferHbarTool::new(context)),
            Arc::new(TransferHbarWithAllowanceTool::new(context)),
            Arc::new(CreateAccountTool::new(context)),
            Arc::new(UpdateAccountTool::new(context)),
            Arc::new(DeleteAccountTool::new(context)),
            Arc::new(ApproveHbarAllowanceTool::new(context)),
        ],
    }
}

/// Token lifecycle, minting, associations, transfers, and allowances.
pub fn core_token_plugin(context: &Context) -> Plugin {
    Plugin {
        name: "core_token_plugin",
        tools: vec![
            Arc::new(CreateFungibleTokenTool::new(context)),
            Arc::new(CreateNonFungibleTokenTool::new(context)),
            Arc::new(MintFungibleTokenTool::new(context)),
            Arc::new(MintNonFungibleTokenTool::new(context)),
            Arc::new(AssociateTokenTool::new(context)),
            Arc::new(DissociateTokenTool::new(context)),
            Arc::new(UpdateTokenTool::new(context)),
            Arc::new(DeleteTokenTool::new(context)),
            Arc::new(TransferFungibleTokenTool::new(context)),
            Arc::new(TransferFungibleTokenWithAllowanceTool::new(context)),
            Arc::new(TransferNftWithAllowanceTool::new(context)),
            Arc::new(ApproveTokenAllowanceTool::new(context)),
            Arc::new(ApproveNftAllowanceTool::new(context)),
        ],
    }
}

/// Token read-only queries.
pub fn core_token_query_plugin(context: &Context) -> Plugin {
    Plugin {
        name: "core_token_query_plugin",
        tools: vec![Arc::new(GetTokenInfoQueryTool::new(context))],
    }
}

/// Consensus topics and the topic-info query.
pub fn core_topic_plugin(context: &Context) -> Plugin {
    Plugin {
        name: "core_topic_plugin",
        tools: vec![
            Arc::new(CreateTopicTool::new(context)),
            Arc::new(UpdateTopicTool::new(context)),
            Arc::new(DeleteTopicTool::new(context)),
            Arc::new(SubmitTopicMessageTool::new(context)),
            Arc::new(GetTopicInfoQueryTool::new(context)),
        ],
    }
}

/// Account, balance, exchange-rate, and record queries.
pub fn core_account_query_plugin(context: &Context) -> Plugin {
    Plugin {
        name: "core_account_query_plugin",
        tools: vec![
            Arc::new(GetHbarBalanceQueryTool::new(context)),
            Arc::new(GetAccountQueryTool::new(context)),
            Arc::new(GetExchangeRateTool::new(context)),
            Arc::new(GetTransactionRecordQueryTool::new(context)),
        ],
    }
}

/// EVM operations through pre-deployed contracts.
pub fn core_evm_plugin(context: &Context) -> Plugin {
    Plugin {
        name: "core_evm_plugin",
        tools: vec![Arc::new(CreateErc20Tool::new(context))],
    }
}

/// Scheduled-transaction management.
pub fn core_transaction_plugin(context: &Context) -> Plugin {
    Plugin {
        name: "core_transaction_plugin",
        tools: vec![
            Arc::new(SignScheduleTool::new(context)),
            Arc::new(DeleteScheduleTool::new(context)),
        ],
    }
}

/// A registry holding every core plugin.
pub fn default_registry(context: &Context) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry
        .register_plugin(core_account_plugin(context))
        .register_plugin(core_token_plugin(context))
        .register_plugin(core_token_query_plugin(context))
        .register_plugin(core_topic_plugin(context))
        .register_plugin(core_account_query_plugin(context))
        .register_plugin(core_evm_plugin(context))
        .register_plugin(core_transaction_plugin(context));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_holds_every_tool_once() {
        let registry = default_registry(&Context::default());
        assert_eq!(registry.len(), 32);
        assert!(registry.get("create_fungible_token_tool").is_some());
        assert!(registry.get("no_such_tool").is_none());
    }

    #[test]
    fn descriptions_are_context_sensitive() {
        let registry = default_registry(&Context::with_account("0.0.2002"));
        let tool = registry.get("transfer_hbar_tool").unwrap();
        assert!(tool.description().contains("0.0.2002"));
        assert!(!tool.description().is_empty());
    }

    #[test]
    fn every_tool_publishes_a_schema() {
        let registry = default_registry(&Context::default());
        for tool in registry.tools() {
            let schema = serde_json::to_value(tool.parameters()).unwrap();
            assert!(schema.is_object(), "{} schema not an object", tool.method());
        }
    }
}
