// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end scenarios: raw LLM-style arguments through the registry,
//! the normaliser, the builder, and a scripted executor.

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hedera_agent_kit::core::{
    AccountId, AgentKitError, ExecutedTransaction, HederaClient, LedgerNetwork, Operation,
    Operator, PublicKey, TokenSupplyType, Transaction, TransactionExecutor,
};
use hedera_agent_kit::{Context, default_registry};

const OPERATOR_KEY: &str = "a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";

/// Executor that records the transactions it sees and returns a scripted
/// receipt.
struct RecordingExecutor {
    receipt: ExecutedTransaction,
    seen: Mutex<Vec<Transaction>>,
}

impl RecordingExecutor {
    fn new(receipt: ExecutedTransaction) -> Arc<Self> {
        Arc::new(Self {
            receipt,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn last_transaction(&self) -> Option<Transaction> {
        self.seen.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TransactionExecutor for RecordingExecutor {
    async fn execute(
        &self,
        transaction: &Transaction,
        _client: &HederaClient,
    ) -> Result<ExecutedTransaction, AgentKitError> {
        self.seen.lock().unwrap().push(transaction.clone());
        Ok(self.receipt.clone())
    }
}

fn client_with(executor: Arc<RecordingExecutor>) -> HederaClient {
    HederaClient::new(
        LedgerNetwork::Testnet,
        Some(Operator {
            account_id: AccountId::new(0, 0, 1001),
            public_key: PublicKey::parse(OPERATOR_KEY).unwrap(),
        }),
        executor,
    )
}

#[tokio::test]
async fn create_token_minimal_input_end_to_end() {
    let executor = RecordingExecutor::new(ExecutedTransaction {
        status: "SUCCESS".into(),
        transaction_id: Some("0.0.1001@1755169980.000000001".into()),
        token_id: Some("0.0.123".parse().unwrap()),
        ..Default::default()
    });
    let client = client_with(executor.clone());
    let context = Context::with_account("0.0.1001");

    let registry = default_registry(&context);
    let tool = registry.get("create_fungible_token_tool").unwrap();
    let response = tool
        .execute(
            &client,
            &context,
            &json!({ "token_name": "MyToken", "token_symbol": "MTK" }),
        )
        .await;

    assert!(response.error.is_none(), "{response:?}");
    assert!(response.human_message.contains("Token created successfully"));
    assert!(response.human_message.contains("0.0.123"));

    // The executed transaction carries the normalised defaults:
    // infinite supply, zero decimals, operator treasury.
    let tx = executor.last_transaction().expect("transaction executed");
    assert!(!tx.is_scheduled());
    match &tx.body().operation {
        Operation::TokenCreate { token_params, keys } => {
            assert_eq!(token_params.supply_type, TokenSupplyType::Infinite);
            assert_eq!(token_params.decimals, 0);
            assert_eq!(token_params.initial_supply, 0);
            assert_eq!(token_params.treasury_account_id.to_string(), "0.0.1001");
            assert!(keys.is_none());
        }
        other => panic!("unexpected operation: {other:?}"),
    }
}

#[tokio::test]
async fn mint_against_missing_token_fails_through_the_facade() {
    let executor = RecordingExecutor::new(ExecutedTransaction::default());
    let client = client_with(executor.clone());

    let mirror = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tokens/0.0.999999999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "_status": { "messages": [{ "message": "Not found" }] }
        })))
        .mount(&mirror)
        .await;
    let context = Context {
        mirrornode_url: Some(mirror.uri()),
        ..Context::with_account("0.0.1001")
    };

    let registry = default_registry(&context);
    let tool = registry.get("mint_fungible_token_tool").unwrap();
    let response = tool
        .execute(
            &client,
            &context,
            &json!({ "token_id": "0.0.999999999", "amount": 10 }),
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
    // Nothing was executed.
    assert!(executor.last_transaction().is_none());
}

#[tokio::test]
async fn mint_scales_by_mirror_decimals_end_to_end() {
    let executor = RecordingExecutor::new(ExecutedTransaction {
        status: "SUCCESS".into(),
        transaction_id: Some("0.0.1001@1755169980.000000002".into()),
        ..Default::default()
    });
    let client = client_with(executor.clone());

    let mirror = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tokens/0.0.5678"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_id": "0.0.5678",
            "decimals": "3"
        })))
        .mount(&mirror)
        .await;
    let context = Context {
        mirrornode_url: Some(mirror.uri()),
        ..Context::with_account("0.0.1001")
    };

    let registry = default_registry(&context);
    let tool = registry.get("mint_fungible_token_tool").unwrap();
    let response = tool
        .execute(
            &client,
            &context,
            &json!({ "token_id": "0.0.5678", "amount": 10.5 }),
        )
        .await;

    assert!(response.error.is_none(), "{response:?}");
    assert!(response.human_message.contains("Tokens successfully minted"));

    let tx = executor.last_transaction().expect("transaction executed");
    match &tx.body().operation {
        Operation::TokenMint { amount, .. } => assert_eq!(*amount, Some(10_500)),
        other => panic!("unexpected operation: {other:?}"),
    }
}

#[tokio::test]
async fn scheduled_submit_message_wraps_the_inner_transaction() {
    let executor = RecordingExecutor::new(ExecutedTransaction {
        status: "SUCCESS".into(),
        transaction_id: Some("0.0.1001@1755169980.000000003".into()),
        schedule_id: Some("0.0.7777".parse().unwrap()),
        ..Default::default()
    });
    let client = client_with(executor.clone());
    let context = Context::with_account("0.0.1001");

    let registry = default_registry(&context);
    let tool = registry.get("submit_topic_message_tool").unwrap();
    let response = tool
        .execute(
            &client,
            &context,
            &json!({
                "topic_id": "0.0.4242",
                "message": "hello consensus",
                "scheduling_params": { "is_scheduled": true, "admin_key": true }
            }),
        )
        .await;

    assert!(response.error.is_none(), "{response:?}");
    assert!(response.human_message.contains("0.0.7777"));

    let tx = executor.last_transaction().expect("transaction executed");
    match &tx {
        Transaction::Scheduled { spec, inner } => {
            assert_eq!(
                spec.admin_key.as_ref().unwrap(),
                &PublicKey::parse(OPERATOR_KEY).unwrap()
            );
            match &inner.operation {
                Operation::TopicMessageSubmit { topic_id, message } => {
                    assert_eq!(topic_id.to_string(), "0.0.4242");
                    assert_eq!(message, "hello consensus");
                }
                other => panic!("unexpected inner operation: {other:?}"),
            }
        }
        Transaction::Plain(_) => panic!("expected a schedule wrapper"),
    }
}

#[tokio::test]
async fn transfer_hbar_end_to_end_conserves_value() {
    let executor = RecordingExecutor::new(ExecutedTransaction {
        status: "SUCCESS".into(),
        transaction_id: Some("0.0.1001@1755169980.000000004".into()),
        ..Default::default()
    });
    let client = client_with(executor.clone());
    let context = Context::with_account("0.0.1001");

    let registry = default_registry(&context);
    let tool = registry.get("transfer_hbar_tool").unwrap();
    let response = tool
        .execute(
            &client,
            &context,
            &json!({
                "transfers": [
                    { "account_id": "0.0.2002", "amount": 1.0 },
                    { "account_id": "0.0.3003", "amount": "0.5" }
                ],
                "transaction_memo": "rent"
            }),
        )
        .await;

    assert!(response.error.is_none(), "{response:?}");

    let tx = executor.last_transaction().expect("transaction executed");
    assert_eq!(tx.body().transaction_memo.as_deref(), Some("rent"));
    match &tx.body().operation {
        Operation::Transfer(transfer) => {
            assert!(transfer.is_balanced());
            assert_eq!(transfer.hbar_transfers.values().sum::<i64>(), 0);
            assert_eq!(transfer.hbar_transfers.len(), 3);
        }
        other => panic!("unexpected operation: {other:?}"),
    }
}

#[tokio::test]
async fn transaction_record_query_end_to_end() {
    let executor = RecordingExecutor::new(ExecutedTransaction::default());
    let client = client_with(executor.clone());

    let mirror = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/transactions/0.0.4177806-1755169980-051721264"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [{
                "transaction_id": "0.0.4177806-1755169980-051721264",
                "name": "CRYPTOTRANSFER",
                "result": "SUCCESS",
                "consensus_timestamp": "1755169990.000000001",
                "transfers": [
                    { "account": "0.0.4177806", "amount": -100000000 },
                    { "account": "0.0.2002", "amount": 100000000 }
                ]
            }]
        })))
        .mount(&mirror)
        .await;
    let context = Context {
        mirrornode_url: Some(mirror.uri()),
        ..Context::default()
    };

    let registry = default_registry(&context);
    let tool = registry.get("get_transaction_record_query_tool").unwrap();
    // Ledger-native form in, mirror form out.
    let response = tool
        .execute(
            &client,
            &context,
            &json!({ "transaction_id": "0.0.4177806@1755169980.051721264" }),
        )
        .await;

    assert!(response.error.is_none(), "{response:?}");
    assert!(
        response
            .human_message
            .contains("0.0.4177806-1755169980-051721264"),
        "{}",
        response.human_message
    );
    assert!(response.human_message.contains("SUCCESS"));
}
