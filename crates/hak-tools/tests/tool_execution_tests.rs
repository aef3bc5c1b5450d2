// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool façade behavior: the pipeline, the single catch boundary, and
//! both execution modes.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hak_core::{
    AccountId, AgentKitError, AgentMode, Context, ExecutedTransaction, HederaClient,
    LedgerNetwork, Operator, PublicKey, ToolResponse, Transaction, TransactionExecutor,
};
use hak_tools::default_registry;

const OPERATOR_KEY: &str = "a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";

/// Executor scripted with a fixed outcome; counts invocations.
struct MockExecutor {
    outcome: Result<ExecutedTransaction, String>,
    calls: AtomicUsize,
}

impl MockExecutor {
    fn succeeding(result: ExecutedTransaction) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(result),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(status: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(status.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionExecutor for MockExecutor {
    async fn execute(
        &self,
        _tx: &Transaction,
        _client: &HederaClient,
    ) -> Result<ExecutedTransaction, AgentKitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
            .clone()
            .map_err(AgentKitError::Execution)
    }
}

fn client_with(executor: Arc<MockExecutor>) -> HederaClient {
    HederaClient::new(
        LedgerNetwork::Testnet,
        Some(Operator {
            account_id: AccountId::new(0, 0, 1001),
            public_key: PublicKey::parse(OPERATOR_KEY).unwrap(),
        }),
        executor,
    )
}

fn success_receipt() -> ExecutedTransaction {
    ExecutedTransaction {
        status: "SUCCESS".into(),
        transaction_id: Some("0.0.1001@1755169980.000000001".into()),
        ..Default::default()
    }
}

async fn run_tool(
    client: &HederaClient,
    context: &Context,
    tool_method: &str,
    params: serde_json::Value,
) -> ToolResponse {
    let registry = default_registry(context);
    let tool = registry.get(tool_method).expect("tool registered");
    tool.execute(client, context, &params).await
}

#[tokio::test]
async fn transfer_hbar_executes_and_reports() {
    let executor = MockExecutor::succeeding(success_receipt());
    let client = client_with(executor.clone());
    let context = Context::with_account("0.0.1001");

    let response = run_tool(
        &client,
        &context,
        "transfer_hbar_tool",
        json!({ "transfers": [{ "account_id": "0.0.2002", "amount": 1.5 }] }),
    )
    .await;

    assert!(response.error.is_none(), "{response:?}");
    assert!(response.human_message.contains("HBAR successfully transferred"));
    assert!(response.human_message.contains("0.0.1001@1755169980.000000001"));
    assert_eq!(executor.calls(), 1);
    assert!(response.raw.is_some());
}

#[tokio::test]
async fn validation_failure_never_reaches_the_executor() {
    let executor = MockExecutor::succeeding(success_receipt());
    let client = client_with(executor.clone());
    let context = Context::default();

    let response = run_tool(&client, &context, "transfer_hbar_tool", json!({})).await;

    assert!(response.error.is_some());
    assert!(
        response
            .human_message
            .starts_with("Failed to transfer HBAR: Invalid parameters:"),
        "{}",
        response.human_message
    );
    assert!(response.human_message.contains("transfers"));
    assert_eq!(executor.calls(), 0);
}

#[tokio::test]
async fn ledger_rejection_surfaces_status_verbatim() {
    let executor = MockExecutor::failing("TOKEN_MAX_SUPPLY_REACHED");
    let client = client_with(executor.clone());
    let context = Context::default();

    let mirror = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tokens/0.0.5678"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "decimals": "2" })))
        .mount(&mirror)
        .await;
    let context = Context {
        mirrornode_url: Some(mirror.uri()),
        ..context
    };

    let response = run_tool(
        &client,
        &context,
        "mint_fungible_token_tool",
        json!({ "token_id": "0.0.5678", "amount": 10 }),
    )
    .await;

    assert!(response.error.is_some());
    assert!(
        response
            .human_message
            .contains("Failed to mint fungible token"),
        "{}",
        response.human_message
    );
    assert!(response.human_message.contains("TOKEN_MAX_SUPPLY_REACHED"));
    assert_eq!(executor.calls(), 1);
}

#[tokio::test]
async fn return_bytes_mode_serializes_instead_of_executing() {
    let executor = MockExecutor::succeeding(success_receipt());
    let client = client_with(executor.clone());
    let context = Context {
        mode: AgentMode::ReturnBytes,
        account_id: Some("0.0.1001".into()),
        mirrornode_url: None,
    };

    let response = run_tool(
        &client,
        &context,
        "transfer_hbar_tool",
        json!({ "transfers": [{ "account_id": "0.0.2002", "amount": 1.0 }] }),
    )
    .await;

    assert!(response.error.is_none(), "{response:?}");
    assert_eq!(executor.calls(), 0);
    let extra = response.extra.expect("bytes expected");
    assert!(extra.contains_key("bytes"));
    assert_eq!(extra["scheduled"], json!(false));
}

#[tokio::test]
async fn token_info_query_reads_the_mirror() {
    let executor = MockExecutor::succeeding(success_receipt());
    let client = client_with(executor.clone());

    let mirror = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tokens/0.0.5678"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_id": "0.0.5678",
            "name": "Test Token",
            "symbol": "TEST",
            "type": "FUNGIBLE_COMMON",
            "decimals": "2",
            "total_supply": "10000",
            "supply_type": "INFINITE",
            "treasury_account_id": "0.0.1001"
        })))
        .mount(&mirror)
        .await;
    let context = Context {
        mirrornode_url: Some(mirror.uri()),
        ..Context::default()
    };

    let response = run_tool(
        &client,
        &context,
        "get_token_info_query_tool",
        json!({ "token_id": "0.0.5678" }),
    )
    .await;

    assert!(response.error.is_none(), "{response:?}");
    assert!(response.human_message.contains("TEST"));
    assert!(response.human_message.contains("Infinite"));
    // Queries never touch the executor.
    assert_eq!(executor.calls(), 0);
    assert!(response.extra.unwrap().contains_key("tokenInfo"));
}

#[tokio::test]
async fn missing_token_id_fails_before_any_io() {
    let executor = MockExecutor::succeeding(success_receipt());
    let client = client_with(executor.clone());

    let response = run_tool(
        &client,
        &Context::default(),
        "get_token_info_query_tool",
        json!({}),
    )
    .await;

    assert!(response.error.is_some());
    assert!(
        response
            .human_message
            .contains("Failed to get token info"),
        "{}",
        response.human_message
    );
}

#[tokio::test]
async fn scheduled_transfer_wraps_and_reports_schedule_id() {
    let executor = MockExecutor::succeeding(ExecutedTransaction {
        status: "SUCCESS".into(),
        transaction_id: Some("0.0.1001@1755169980.000000001".into()),
        schedule_id: Some("0.0.8888".parse().unwrap()),
        ..Default::default()
    });
    let client = client_with(executor.clone());
    let context = Context::with_account("0.0.1001");

    let response = run_tool(
        &client,
        &context,
        "transfer_hbar_tool",
        json!({
            "transfers": [{ "account_id": "0.0.2002", "amount": 1.0 }],
            "scheduling_params": { "is_scheduled": true }
        }),
    )
    .await;

    assert!(response.error.is_none(), "{response:?}");
    assert!(
        response
            .human_message
            .contains("Scheduled transaction created successfully"),
        "{}",
        response.human_message
    );
    assert!(response.human_message.contains("0.0.8888"));
}
