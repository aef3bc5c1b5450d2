// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy shared across the kit.
//!
//! Normaliser and builder code returns these kinds directly; the tool
//! façade is the single boundary that converts them into a
//! [`crate::ToolResponse`]. Nothing in the kit retries.

use thiserror::Error;

use crate::ids::EntityIdError;

/// Every failure kind the kit can produce before or during execution.
#[derive(Debug, Error)]
pub enum AgentKitError {
    /// Raw parameters failed schema validation; the message aggregates
    /// every offending field.
    #[error("Invalid parameters: {0}")]
    Validation(String),

    /// No account identity (or default public key) could be determined
    /// from any source in the priority chain.
    #[error("{0}")]
    IdentityResolution(String),

    /// A supplied key string matches neither supported key encoding.
    #[error("{0}")]
    KeyParse(String),

    /// A computed transfer or mint amount is non-positive.
    #[error("Invalid transfer amount: {0}")]
    InvalidAmount(String),

    /// Token decimals could not be retrieved from the mirror node.
    #[error("Unable to retrieve token decimals for token {token_id}: {cause}")]
    DecimalsUnavailable {
        /// Token whose decimals were needed.
        token_id: String,
        /// Underlying mirror failure or missing-field detail.
        cause: String,
    },

    /// Initial/max supply or decimals violate ledger constraints.
    #[error("{0}")]
    SupplyConstraint(String),

    /// A transaction id string matches neither accepted format.
    #[error("Invalid transactionId format: {0}")]
    InvalidTransactionId(String),

    /// An allowance-based transfer lacks its owner account.
    #[error("{0} is required for allowance transfers")]
    MissingOwner(&'static str),

    /// The mirror node read failed (network error or missing entity).
    #[error("mirror node error: {0}")]
    Mirror(String),

    /// The ledger rejected or failed to process the built transaction.
    #[error("{0}")]
    Execution(String),
}

impl From<EntityIdError> for AgentKitError {
    fn from(err: EntityIdError) -> Self {
        AgentKitError::Validation(err.to_string())
    }
}
