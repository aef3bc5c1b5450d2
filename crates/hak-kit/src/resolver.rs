// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity resolution: accounts and keys.
//!
//! Every operation that accepts an optional account or key runs the same
//! precedence chain — explicit value, then the context default, then the
//! operator credential. Centralising the chain keeps the precedence
//! identical across operations.

use regex::Regex;
use std::sync::LazyLock;

use hak_core::{AgentKitError, Context, HederaClient, PublicKey};

use crate::schemas::KeyInput;

static HEDERA_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("static pattern"));

/// Resolves account references and key inputs against the runtime
/// context and the active signing credential.
pub struct AccountResolver;

impl AccountResolver {
    /// The default account: context first, operator second.
    pub fn get_default_account(context: &Context, client: &HederaClient) -> Option<String> {
        client.default_account(context)
    }

    /// Resolve an account reference: explicit id, else the default chain.
    pub fn resolve_account(
        explicit: Option<&str>,
        context: &Context,
        client: &HederaClient,
    ) -> Result<String, AgentKitError> {
        if let Some(id) = explicit.filter(|s| !s.trim().is_empty()) {
            return Ok(id.trim().to_string());
        }
        Self::get_default_account(context, client).ok_or_else(|| {
            AgentKitError::IdentityResolution(
                "Could not determine account ID: no explicit id, context account, or operator available".into(),
            )
        })
    }

    /// The root default for admin/submit keys: the operator credential's
    /// public counterpart.
    pub fn get_default_public_key(
        _context: &Context,
        client: &HederaClient,
    ) -> Result<PublicKey, AgentKitError> {
        client.operator_public_key().cloned().ok_or_else(|| {
            AgentKitError::IdentityResolution(
                "Could not determine default public key: no operator credential configured".into(),
            )
        })
    }

    /// Resolve a key input against a default key.
    ///
    /// Absent and `false` yield no key; `true` yields the default;
    /// a string is parsed EdDSA-first, ECDSA-second.
    pub fn resolve_key(
        raw: Option<&KeyInput>,
        default_key: Option<&PublicKey>,
    ) -> Result<Option<PublicKey>, AgentKitError> {
        match raw {
            None | Some(KeyInput::Flag(false)) => Ok(None),
            Some(KeyInput::Flag(true)) => Ok(default_key.cloned()),
            Some(KeyInput::Key(s)) => PublicKey::parse(s).map(Some),
        }
    }

    /// True when `s` looks like a ledger entity address.
    pub fn is_hedera_address(s: &str) -> bool {
        HEDERA_ADDRESS.is_match(s.trim())
    }

    /// Human description of the default account, for prompt text.
    pub fn get_default_account_description(context: &Context) -> String {
        match &context.account_id {
            Some(id) => format!("user's account ({id})"),
            None => "operator account".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;

    use hak_core::{
        AccountId, ExecutedTransaction, LedgerNetwork, Operator, Transaction,
        TransactionExecutor,
    };

    const OPERATOR_KEY: &str = "a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";
    const OTHER_KEY: &str = "02a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";

    struct NullExecutor;

    #[async_trait]
    impl TransactionExecutor for NullExecutor {
        async fn execute(
            &self,
            _tx: &Transaction,
            _client: &HederaClient,
        ) -> Result<ExecutedTransaction, AgentKitError> {
            unreachable!("resolver tests never execute")
        }
    }

    fn client_with_operator() -> HederaClient {
        HederaClient::new(
            LedgerNetwork::Testnet,
            Some(Operator {
                account_id: AccountId::new(0, 0, 1001),
                public_key: PublicKey::parse(OPERATOR_KEY).unwrap(),
            }),
            Arc::new(NullExecutor),
        )
    }

    fn client_without_operator() -> HederaClient {
        HederaClient::new(LedgerNetwork::Testnet, None, Arc::new(NullExecutor))
    }

    #[test]
    fn explicit_account_wins() {
        let client = client_with_operator();
        let ctx = Context::with_account("0.0.2002");
        let resolved =
            AccountResolver::resolve_account(Some("0.0.3003"), &ctx, &client).unwrap();
        assert_eq!(resolved, "0.0.3003");
    }

    #[test]
    fn context_beats_operator() {
        let client = client_with_operator();
        let ctx = Context::with_account("0.0.2002");
        let resolved = AccountResolver::resolve_account(None, &ctx, &client).unwrap();
        assert_eq!(resolved, "0.0.2002");
    }

    #[test]
    fn operator_is_last_resort() {
        let client = client_with_operator();
        let resolved =
            AccountResolver::resolve_account(None, &Context::default(), &client).unwrap();
        assert_eq!(resolved, "0.0.1001");
    }

    #[test]
    fn no_source_is_an_error() {
        let client = client_without_operator();
        let err =
            AccountResolver::resolve_account(None, &Context::default(), &client).unwrap_err();
        assert!(matches!(err, AgentKitError::IdentityResolution(_)));
    }

    #[test]
    fn key_precedence() {
        let default = PublicKey::parse(OPERATOR_KEY).unwrap();

        // Explicit string wins over the default.
        let explicit = KeyInput::Key(OTHER_KEY.to_string());
        let resolved = AccountResolver::resolve_key(Some(&explicit), Some(&default))
            .unwrap()
            .unwrap();
        assert_ne!(resolved, default);

        // `true` yields the default.
        let flagged = AccountResolver::resolve_key(Some(&KeyInput::Flag(true)), Some(&default))
            .unwrap()
            .unwrap();
        assert_eq!(flagged, default);

        // `false` and absent yield nothing.
        assert!(
            AccountResolver::resolve_key(Some(&KeyInput::Flag(false)), Some(&default))
                .unwrap()
                .is_none()
        );
        assert!(AccountResolver::resolve_key(None, Some(&default)).unwrap().is_none());
    }

    #[test]
    fn unparsable_key_string_fails() {
        let err = AccountResolver::resolve_key(Some(&KeyInput::Key("junk".into())), None)
            .unwrap_err();
        assert!(matches!(err, AgentKitError::KeyParse(_)));
    }

    #[test]
    fn address_pattern() {
        assert!(AccountResolver::is_hedera_address("0.0.1234"));
        assert!(AccountResolver::is_hedera_address("1.2.3"));
        assert!(!AccountResolver::is_hedera_address("0x1234"));
        assert!(!AccountResolver::is_hedera_address("0.0"));
    }
}
