// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for normaliser tests: a no-op executor, clients with
//! and without an operator, and a scriptable mirror stub.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use hak_core::{
    AccountId, AgentKitError, Context, ExecutedTransaction, HederaClient, LedgerNetwork,
    Operator, PublicKey, Transaction, TransactionExecutor,
};
use hak_mirror::{AccountInfo, ExchangeRateSet, MirrorError, MirrornodeService, TokenInfo, TopicInfo, TransactionRecordPage};

/// Raw ed25519 hex of the test operator key.
pub const OPERATOR_KEY: &str =
    "a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";
/// A distinct raw ed25519 hex key returned by the mirror stub.
pub const MIRROR_KEY: &str =
    "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";
pub const OPERATOR_ID: &str = "0.0.1001";

pub struct NullExecutor;

#[async_trait]
impl TransactionExecutor for NullExecutor {
    async fn execute(
        &self,
        _tx: &Transaction,
        _client: &HederaClient,
    ) -> Result<ExecutedTransaction, AgentKitError> {
        unreachable!("normaliser tests never execute")
    }
}

pub fn client_with_operator() -> HederaClient {
    HederaClient::new(
        LedgerNetwork::Testnet,
        Some(Operator {
            account_id: OPERATOR_ID.parse::<AccountId>().unwrap(),
            public_key: PublicKey::parse(OPERATOR_KEY).unwrap(),
        }),
        Arc::new(NullExecutor),
    )
}

pub fn client_without_operator() -> HederaClient {
    HederaClient::new(LedgerNetwork::Testnet, None, Arc::new(NullExecutor))
}

pub fn context() -> Context {
    Context::with_account(OPERATOR_ID)
}

/// A mirror stub scripted per test.
#[derive(Default)]
pub struct StubMirror {
    /// Key hex returned from `get_account`; `None` yields an empty record.
    pub account_key: Option<String>,
    /// Fail every `get_account` call.
    pub fail_accounts: bool,
    /// Token info returned from `get_token_info`.
    pub token_info: Option<Value>,
}

impl StubMirror {
    pub fn with_decimals(decimals: &str) -> Self {
        Self {
            token_info: Some(serde_json::json!({ "decimals": decimals })),
            ..Self::default()
        }
    }
}

#[async_trait]
impl MirrornodeService for StubMirror {
    async fn get_account(&self, account_id: &str) -> Result<AccountInfo, MirrorError> {
        if self.fail_accounts {
            return Err(MirrorError::NotFound {
                what: format!("account {account_id}"),
            });
        }
        let body = match &self.account_key {
            Some(key) => serde_json::json!({
                "account": account_id,
                "key": { "_type": "ED25519", "key": key }
            }),
            None => serde_json::json!({ "account": account_id }),
        };
        Ok(serde_json::from_value(body).expect("stub account"))
    }

    async fn get_account_balance(&self, account_id: &str) -> Result<i64, MirrorError> {
        Err(MirrorError::NotFound {
            what: format!("balance for account {account_id}"),
        })
    }

    async fn get_token_info(&self, token_id: &str) -> Result<TokenInfo, MirrorError> {
        match &self.token_info {
            Some(body) => Ok(serde_json::from_value(body.clone()).expect("stub token")),
            None => Err(MirrorError::NotFound {
                what: format!("token {token_id}"),
            }),
        }
    }

    async fn get_topic_info(&self, topic_id: &str) -> Result<TopicInfo, MirrorError> {
        Err(MirrorError::NotFound {
            what: format!("topic {topic_id}"),
        })
    }

    async fn get_exchange_rate(
        &self,
        _timestamp: Option<&str>,
    ) -> Result<ExchangeRateSet, MirrorError> {
        Err(MirrorError::NotFound {
            what: "exchange rate".into(),
        })
    }

    async fn get_transaction_record(
        &self,
        transaction_id: &str,
        _nonce: Option<u32>,
    ) -> Result<TransactionRecordPage, MirrorError> {
        Err(MirrorError::NotFound {
            what: format!("transaction {transaction_id}"),
        })
    }
}
