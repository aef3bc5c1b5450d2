// SPDX-License-Identifier: MIT OR Apache-2.0

//! Account, exchange-rate, and transaction-record query tools.

use serde_json::Value;

use hak_core::{
    AgentKitError, Context, HederaClient, TINYBARS_PER_HBAR, ToolResponse,
};
use hak_kit::schemas::{
    AccountBalanceQueryParams, AccountQueryParams, ExchangeRateQueryParams,
    TransactionRecordQueryParams,
};
use hak_kit::normalise;
use hak_mirror::{MirrornodeService, TransactionRecord};

use crate::prompt::PromptGenerator;
use crate::strategy::mirror_service;
use crate::tools::define_tool;

pub const GET_HBAR_BALANCE_QUERY_TOOL: &str = "get_hbar_balance_query_tool";
pub const GET_ACCOUNT_QUERY_TOOL: &str = "get_account_query_tool";
pub const GET_EXCHANGE_RATE_TOOL: &str = "get_exchange_rate_tool";
pub const GET_TRANSACTION_RECORD_QUERY_TOOL: &str = "get_transaction_record_query_tool";

fn get_hbar_balance_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let account_desc =
        PromptGenerator::get_any_address_parameter_description("account_id", context, false);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool returns the HBAR balance of an account.\n\n\
         Parameters:\n\
         - {account_desc}\n\
         {usage}"
    )
}

async fn try_get_hbar_balance(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::get_hbar_balance(params, context, client)?;
    let mirror = mirror_service(context, client);

    let tinybars = mirror
        .get_account_balance(&normalised.account_id)
        .await
        .map_err(AgentKitError::from)?;
    let hbar = tinybars as f64 / TINYBARS_PER_HBAR as f64;

    Ok(ToolResponse::success(format!(
        "Account {} has a balance of {hbar} HBAR ({tinybars} tinybars).",
        normalised.account_id
    ))
    .with_extra("accountId", Value::String(normalised.account_id))
    .with_extra("balanceTinybars", Value::from(tinybars)))
}

define_tool!(
    /// Query an account's HBAR balance.
    GetHbarBalanceQueryTool {
        method: GET_HBAR_BALANCE_QUERY_TOOL,
        name: "Get HBAR Balance",
        operation: "get HBAR balance",
        params: AccountBalanceQueryParams,
        description: get_hbar_balance_prompt,
        run: try_get_hbar_balance,
    }
);

fn get_account_query_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let account_desc =
        PromptGenerator::get_any_address_parameter_description("account_id", context, false);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool returns the details of a Hedera account (key, EVM address, balance, memo).\n\n\
         Parameters:\n\
         - {account_desc}\n\
         {usage}"
    )
}

async fn try_get_account_query(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::get_account_query(params, context, client)?;
    let mirror = mirror_service(context, client);

    let account = mirror
        .get_account(&normalised.account_id)
        .await
        .map_err(AgentKitError::from)?;

    let balance = account
        .balance
        .as_ref()
        .and_then(|b| b.balance)
        .map(|tinybars| format!("{} HBAR", tinybars as f64 / TINYBARS_PER_HBAR as f64))
        .unwrap_or_else(|| "N/A".into());
    let message = format!(
        "Here are the details for account **{account_id}**:\n\n\
         - **Public Key**: {key}\n\
         - **EVM Address**: {evm}\n\
         - **Balance**: {balance}\n\
         - **Memo**: {memo}",
        account_id = account.account.as_deref().unwrap_or(&normalised.account_id),
        key = account.account_public_key().unwrap_or("N/A"),
        evm = account.evm_address.as_deref().unwrap_or("N/A"),
        memo = account.memo.as_deref().filter(|m| !m.is_empty()).unwrap_or("N/A"),
    );

    Ok(ToolResponse::success(message).with_extra(
        "accountInfo",
        serde_json::to_value(&account).unwrap_or_default(),
    ))
}

define_tool!(
    /// Query account details from the mirror node.
    GetAccountQueryTool {
        method: GET_ACCOUNT_QUERY_TOOL,
        name: "Get Account",
        operation: "get account query",
        params: AccountQueryParams,
        description: get_account_query_prompt,
        run: try_get_account_query,
    }
);

fn get_exchange_rate_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool returns the current HBAR/USD exchange rate reported by the network.\n\n\
         Parameters:\n\
         - timestamp (str, optional): Historical timestamp to query instead of the current rate\n\
         {usage}"
    )
}

async fn try_get_exchange_rate(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let parsed: ExchangeRateQueryParams = normalise::get_exchange_rate(params)?;
    let mirror = mirror_service(context, client);

    let rates = mirror
        .get_exchange_rate(parsed.timestamp.as_deref())
        .await
        .map_err(AgentKitError::from)?;

    let describe = |label: &str, rate: Option<&hak_mirror::ExchangeRate>| match rate {
        Some(rate) => format!("- **{label}**: 1 HBAR ≈ {:.6} USD", rate.usd_per_hbar()),
        None => format!("- **{label}**: N/A"),
    };
    let message = format!(
        "Network exchange rate:\n{}\n{}",
        describe("Current rate", rates.current_rate.as_ref()),
        describe("Next rate", rates.next_rate.as_ref()),
    );

    Ok(ToolResponse::success(message).with_extra(
        "exchangeRate",
        serde_json::to_value(&rates).unwrap_or_default(),
    ))
}

define_tool!(
    /// Query the network HBAR/USD exchange rate.
    GetExchangeRateTool {
        method: GET_EXCHANGE_RATE_TOOL,
        name: "Get Exchange Rate",
        operation: "get exchange rate",
        params: ExchangeRateQueryParams,
        description: get_exchange_rate_prompt,
        run: try_get_exchange_rate,
    }
);

fn get_transaction_record_prompt(context: &Context) -> String {
    let context_snippet = PromptGenerator::get_context_snippet(context);
    let usage = PromptGenerator::get_parameter_usage_instructions();
    format!(
        "{context_snippet}\n\n\
         This tool returns the record of a past transaction.\n\n\
         Parameters:\n\
         - transaction_id (str, required): Transaction ID, e.g. 0.0.4177806@1755169980.051721264 or 0.0.4177806-1755169980-051721264\n\
         - nonce (int, optional): Nonce of an inner/child transaction\n\
         {usage}"
    )
}

fn summarise_record(record: &TransactionRecord) -> String {
    let transfers = record
        .transfers
        .iter()
        .filter_map(|t| {
            let account = t.account.as_deref()?;
            let amount = t.amount? as f64 / TINYBARS_PER_HBAR as f64;
            Some(format!("  - {account}: {amount} HBAR"))
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "- **Transaction ID**: {id}\n\
         - **Type**: {name}\n\
         - **Status**: {result}\n\
         - **Consensus Timestamp**: {timestamp}\n\
         - **Transfers**:\n{transfers}",
        id = record.transaction_id.as_deref().unwrap_or("N/A"),
        name = record.name.as_deref().unwrap_or("N/A"),
        result = record.result.as_deref().unwrap_or("N/A"),
        timestamp = record.consensus_timestamp.as_deref().unwrap_or("N/A"),
    )
}

async fn try_get_transaction_record(
    client: &HederaClient,
    context: &Context,
    params: &Value,
) -> Result<ToolResponse, AgentKitError> {
    let normalised = normalise::get_transaction_record(params)?;
    let mirror = mirror_service(context, client);

    let page = mirror
        .get_transaction_record(&normalised.transaction_id, normalised.nonce)
        .await
        .map_err(AgentKitError::from)?;

    let message = if page.transactions.is_empty() {
        format!("No record found for transaction {}.", normalised.transaction_id)
    } else {
        let body = page
            .transactions
            .iter()
            .map(summarise_record)
            .collect::<Vec<_>>()
            .join("\n\n");
        format!(
            "Here is the record for transaction **{}**:\n\n{body}",
            normalised.transaction_id
        )
    };

    Ok(ToolResponse::success(message)
        .with_extra(
            "transactionRecord",
            serde_json::to_value(&page).unwrap_or_default(),
        )
        .with_extra("transactionId", Value::String(normalised.transaction_id)))
}

define_tool!(
    /// Query a transaction record from the mirror node.
    GetTransactionRecordQueryTool {
        method: GET_TRANSACTION_RECORD_QUERY_TOOL,
        name: "Get Transaction Record",
        operation: "get transaction record",
        params: TransactionRecordQueryParams,
        description: get_transaction_record_prompt,
        run: try_get_transaction_record,
    }
);
