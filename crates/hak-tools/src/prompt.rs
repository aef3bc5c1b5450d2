// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt-snippet generation for tool descriptions.
//!
//! Tool descriptions are read by an LLM deciding which tool to call and
//! with which arguments, so they spell out defaults and usage rules the
//! same way for every tool.

use hak_core::{AgentMode, Context};
use hak_kit::AccountResolver;

/// Builds the shared prompt fragments tools compose their descriptions
/// from.
pub struct PromptGenerator;

impl PromptGenerator {
    /// The context block every description starts with.
    pub fn get_context_snippet(context: &Context) -> String {
        let mut lines = vec!["Context:".to_string()];
        match context.mode {
            AgentMode::ReturnBytes => {
                lines.push(
                    "- Mode: Return Bytes (preparing transactions for user signing)".into(),
                );
                match &context.account_id {
                    Some(account) => {
                        lines.push(format!(
                            "- User Account: {account} (default for transaction parameters)"
                        ));
                        lines.push(format!(
                            "- When no account is specified, {account} will be used"
                        ));
                    }
                    None => {
                        lines.push("- User Account: Not specified".into());
                        lines.push(
                            "- When no account is specified, the operator account will be used"
                                .into(),
                        );
                    }
                }
            }
            AgentMode::Autonomous => {
                lines.push("- Mode: Autonomous (agent executes transactions directly)".into());
                if let Some(account) = &context.account_id {
                    lines.push(format!("- User Account: {account}"));
                }
                lines.push(
                    "- When no account is specified, the operator account will be used".into(),
                );
            }
        }
        lines.join("\n")
    }

    /// Description of an optional/required account-id parameter.
    pub fn get_account_parameter_description(
        param_name: &str,
        context: &Context,
        is_required: bool,
    ) -> String {
        if is_required {
            return format!("{param_name} (str, required): The Hedera account ID");
        }
        let default_desc = AccountResolver::get_default_account_description(context);
        format!(
            "{param_name} (str, optional): The Hedera account ID. If not provided, defaults to the {default_desc}"
        )
    }

    /// Description of a parameter accepting an account id or EVM address.
    pub fn get_any_address_parameter_description(
        param_name: &str,
        context: &Context,
        is_required: bool,
    ) -> String {
        if is_required {
            return format!(
                "{param_name} (str, required): The account address. This can be the EVM address or the Hedera account id"
            );
        }
        let default_desc = AccountResolver::get_default_account_description(context);
        format!(
            "{param_name} (str, optional): The Hedera account ID or EVM address. If not provided, defaults to the {default_desc}"
        )
    }

    /// The usage rules appended to every description.
    pub fn get_parameter_usage_instructions() -> &'static str {
        "\nImportant:\n\
         - Only include optional parameters if explicitly provided by the user\n\
         - Do not generate placeholder values for optional fields\n\
         - Leave optional parameters undefined if not specified by the user\n\
         - If the user mentions multiple recipients or amounts and the tool accepts an array, \
         combine them into a single array and make exactly one call to the tool\n"
    }

    /// The scheduling-parameter block for schedulable tools.
    pub fn get_scheduled_transaction_params_description(context: &Context) -> String {
        let default_account_desc = AccountResolver::get_default_account_description(context);
        format!(
            "scheduling_params (object, optional): Parameters for scheduling this transaction instead of executing immediately.\n\
             These fields apply to the schedule entity, not the inner transaction:\n\
             - is_scheduled (boolean, optional, default false): if true, the transaction is created as a scheduled transaction. \
             Always set to true when the user asks for scheduling. If false or omitted, all other scheduling parameters are ignored.\n\
             - admin_key (boolean|string, optional, default false): admin key able to delete the scheduled transaction before execution. \
             true uses the operator key; a string is used as the key itself.\n\
             - payer_account_id (string, optional): account paying the fee when the scheduled transaction executes. \
             Defaults to the {default_account_desc}.\n\
             - expiration_time (string, optional, ISO 8601): when the scheduled transaction expires if not fully signed.\n\
             - wait_for_expiry (boolean, optional, default false): if true, execute at expiration time rather than as soon as all signatures are collected.\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_snippet_mentions_account_in_return_bytes_mode() {
        let context = Context {
            mode: AgentMode::ReturnBytes,
            account_id: Some("0.0.2002".into()),
            mirrornode_url: None,
        };
        let snippet = PromptGenerator::get_context_snippet(&context);
        assert!(snippet.contains("Return Bytes"));
        assert!(snippet.contains("0.0.2002"));
    }

    #[test]
    fn account_parameter_description_spells_out_default() {
        let context = Context::with_account("0.0.2002");
        let desc =
            PromptGenerator::get_account_parameter_description("treasury_account_id", &context, false);
        assert!(desc.contains("treasury_account_id"));
        assert!(desc.contains("0.0.2002"));

        let required =
            PromptGenerator::get_account_parameter_description("account_id", &context, true);
        assert!(required.contains("required"));
    }

    #[test]
    fn scheduling_description_lists_every_field() {
        let desc = PromptGenerator::get_scheduled_transaction_params_description(
            &Context::default(),
        );
        for field in [
            "is_scheduled",
            "admin_key",
            "payer_account_id",
            "expiration_time",
            "wait_for_expiry",
        ] {
            assert!(desc.contains(field), "missing {field}");
        }
    }
}
