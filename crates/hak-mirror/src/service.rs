// SPDX-License-Identifier: MIT OR Apache-2.0

//! The mirror service trait and its REST implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use hak_core::{AgentKitError, LedgerNetwork};

use crate::types::{
    AccountInfo, ExchangeRateSet, TokenInfo, TopicInfo, TransactionRecordPage,
};

/// Failures when reading from the mirror node.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    /// The entity does not exist on the mirror.
    #[error("{what} not found")]
    NotFound {
        /// Description of the missing entity, e.g. `token 0.0.999`.
        what: String,
    },

    /// Transport-level failure reaching the mirror.
    #[error("mirror request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The mirror answered with an unexpected HTTP status.
    #[error("mirror returned status {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Request URL.
        url: String,
    },
}

impl From<MirrorError> for AgentKitError {
    fn from(err: MirrorError) -> Self {
        AgentKitError::Mirror(err.to_string())
    }
}

/// Read-only lookups the kit needs from a mirror node.
#[async_trait]
pub trait MirrornodeService: Send + Sync {
    /// Account metadata (key, EVM address, balance).
    async fn get_account(&self, account_id: &str) -> Result<AccountInfo, MirrorError>;

    /// HBAR balance in tinybars.
    async fn get_account_balance(&self, account_id: &str) -> Result<i64, MirrorError>;

    /// Token metadata (decimals, supplies, keys).
    async fn get_token_info(&self, token_id: &str) -> Result<TokenInfo, MirrorError>;

    /// Topic metadata.
    async fn get_topic_info(&self, topic_id: &str) -> Result<TopicInfo, MirrorError>;

    /// The network HBAR/USD exchange rates, optionally at a historical
    /// timestamp.
    async fn get_exchange_rate(
        &self,
        timestamp: Option<&str>,
    ) -> Result<ExchangeRateSet, MirrorError>;

    /// Records for a transaction id in mirror form.
    async fn get_transaction_record(
        &self,
        transaction_id: &str,
        nonce: Option<u32>,
    ) -> Result<TransactionRecordPage, MirrorError>;
}

/// Public mirror base URL for a network.
pub fn mirror_base_url(network: LedgerNetwork) -> &'static str {
    match network {
        LedgerNetwork::Mainnet => "https://mainnet-public.mirrornode.hedera.com",
        LedgerNetwork::Testnet => "https://testnet.mirrornode.hedera.com",
        LedgerNetwork::Previewnet => "https://previewnet.mirrornode.hedera.com",
    }
}

/// [`MirrornodeService`] over the public REST API.
#[derive(Debug, Clone)]
pub struct RestMirrornodeService {
    http: reqwest::Client,
    base_url: String,
}

impl RestMirrornodeService {
    /// Client for a public network mirror.
    pub fn for_network(network: LedgerNetwork) -> Self {
        Self::with_base_url(mirror_base_url(network))
    }

    /// Client against an explicit base URL (tests, private mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        what: impl Into<String>,
    ) -> Result<T, MirrorError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(target: "hak_mirror", %url, "mirror GET");
        let response = self.http.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MirrorError::NotFound { what: what.into() });
        }
        if !response.status().is_success() {
            return Err(MirrorError::Status {
                status: response.status().as_u16(),
                url,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MirrornodeService for RestMirrornodeService {
    async fn get_account(&self, account_id: &str) -> Result<AccountInfo, MirrorError> {
        self.get_json(
            &format!("/api/v1/accounts/{account_id}"),
            format!("account {account_id}"),
        )
        .await
    }

    async fn get_account_balance(&self, account_id: &str) -> Result<i64, MirrorError> {
        let page: Value = self
            .get_json(
                &format!("/api/v1/balances?account.id={account_id}"),
                format!("account {account_id}"),
            )
            .await?;
        page["balances"]
            .as_array()
            .and_then(|rows| rows.first())
            .and_then(|row| row["balance"].as_i64())
            .ok_or_else(|| MirrorError::NotFound {
                what: format!("balance for account {account_id}"),
            })
    }

    async fn get_token_info(&self, token_id: &str) -> Result<TokenInfo, MirrorError> {
        self.get_json(
            &format!("/api/v1/tokens/{token_id}"),
            format!("token {token_id}"),
        )
        .await
    }

    async fn get_topic_info(&self, topic_id: &str) -> Result<TopicInfo, MirrorError> {
        self.get_json(
            &format!("/api/v1/topics/{topic_id}"),
            format!("topic {topic_id}"),
        )
        .await
    }

    async fn get_exchange_rate(
        &self,
        timestamp: Option<&str>,
    ) -> Result<ExchangeRateSet, MirrorError> {
        let path = match timestamp {
            Some(ts) => format!("/api/v1/network/exchangerate?timestamp={ts}"),
            None => "/api/v1/network/exchangerate".to_string(),
        };
        self.get_json(&path, "exchange rate").await
    }

    async fn get_transaction_record(
        &self,
        transaction_id: &str,
        nonce: Option<u32>,
    ) -> Result<TransactionRecordPage, MirrorError> {
        let path = match nonce {
            Some(nonce) => format!("/api/v1/transactions/{transaction_id}?nonce={nonce}"),
            None => format!("/api/v1/transactions/{transaction_id}"),
        };
        self.get_json(&path, format!("transaction {transaction_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_stripped() {
        let svc = RestMirrornodeService::with_base_url("http://localhost:9999///");
        assert_eq!(svc.base_url, "http://localhost:9999");
    }

    #[test]
    fn network_urls() {
        assert!(mirror_base_url(LedgerNetwork::Testnet).contains("testnet"));
        assert!(mirror_base_url(LedgerNetwork::Mainnet).contains("mainnet"));
    }
}
