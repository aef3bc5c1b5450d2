// SPDX-License-Identifier: MIT OR Apache-2.0

//! The signing-client façade and the execution boundary.
//!
//! The consensus-facing SDK (signing, transport, retries) sits behind
//! [`TransactionExecutor`]; the kit only ever builds transactions and
//! hands them across this seam.

use async_trait::async_trait;
use std::sync::Arc;

use crate::context::Context;
use crate::error::AgentKitError;
use crate::ids::AccountId;
use crate::key::PublicKey;
use crate::tx::{ExecutedTransaction, Transaction};

/// Which public Hedera network a client targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerNetwork {
    /// Production network.
    Mainnet,
    /// Stable test network.
    Testnet,
    /// Preview test network.
    Previewnet,
}

impl LedgerNetwork {
    /// Network name as used in configuration and URLs.
    pub fn name(self) -> &'static str {
        match self {
            LedgerNetwork::Mainnet => "mainnet",
            LedgerNetwork::Testnet => "testnet",
            LedgerNetwork::Previewnet => "previewnet",
        }
    }
}

/// The active signing credential: an account plus its public key.
///
/// The private half never enters the kit; executors that actually sign
/// hold it behind the [`TransactionExecutor`] boundary.
#[derive(Debug, Clone)]
pub struct Operator {
    /// Account bound to the credential.
    pub account_id: AccountId,
    /// Public counterpart of the signing key.
    pub public_key: PublicKey,
}

/// Executes built transactions against the ledger.
///
/// Implementations own signing, transport, and retry concerns. The kit
/// calls `execute` exactly once per tool invocation and treats every
/// failure as terminal.
#[async_trait]
pub trait TransactionExecutor: Send + Sync {
    /// Submit a transaction and return receipt-derived fields.
    ///
    /// Ledger rejections must surface the ledger status string verbatim
    /// in the error so callers can self-correct.
    async fn execute(
        &self,
        transaction: &Transaction,
        client: &HederaClient,
    ) -> Result<ExecutedTransaction, AgentKitError>;
}

/// Handle to the ledger used by every tool invocation.
#[derive(Clone)]
pub struct HederaClient {
    /// Target network.
    pub network: LedgerNetwork,
    /// Active signing credential, when configured.
    pub operator: Option<Operator>,
    executor: Arc<dyn TransactionExecutor>,
}

impl HederaClient {
    /// Build a client around an execution strategy.
    pub fn new(
        network: LedgerNetwork,
        operator: Option<Operator>,
        executor: Arc<dyn TransactionExecutor>,
    ) -> Self {
        Self {
            network,
            operator,
            executor,
        }
    }

    /// The operator's account id, when a credential is configured.
    pub fn operator_account_id(&self) -> Option<AccountId> {
        self.operator.as_ref().map(|op| op.account_id)
    }

    /// The operator's public key, when a credential is configured.
    pub fn operator_public_key(&self) -> Option<&PublicKey> {
        self.operator.as_ref().map(|op| &op.public_key)
    }

    /// Submit a transaction through the configured executor.
    pub async fn execute(
        &self,
        transaction: &Transaction,
    ) -> Result<ExecutedTransaction, AgentKitError> {
        self.executor.execute(transaction, self).await
    }

    /// The context's account when set, otherwise the operator account.
    pub fn default_account(&self, context: &Context) -> Option<String> {
        context
            .account_id
            .clone()
            .or_else(|| self.operator_account_id().map(|id| id.to_string()))
    }
}

impl std::fmt::Debug for HederaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HederaClient")
            .field("network", &self.network)
            .field("operator", &self.operator)
            .finish_non_exhaustive()
    }
}
