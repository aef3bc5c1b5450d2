// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transfer aggregation: conservation of value and owner handling.

mod common;

use proptest::prelude::*;
use serde_json::json;

use common::{StubMirror, client_with_operator, client_without_operator, context};
use hak_core::{AgentKitError, Context};
use hak_kit::normalise;

#[tokio::test]
async fn hbar_transfer_nets_to_zero() {
    let params = json!({
        "transfers": [
            { "account_id": "0.0.2002", "amount": 1.0 },
            { "account_id": "0.0.3003", "amount": 0.5 }
        ]
    });

    let result = normalise::transfer_hbar(&params, &context(), &client_with_operator())
        .await
        .unwrap();

    let ledger = &result.hbar_transfers;
    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger[&"0.0.2002".parse().unwrap()], 100_000_000);
    assert_eq!(ledger[&"0.0.3003".parse().unwrap()], 50_000_000);
    assert_eq!(ledger[&"0.0.1001".parse().unwrap()], -150_000_000);
    assert_eq!(ledger.values().sum::<i64>(), 0);
}

#[tokio::test]
async fn duplicate_recipients_aggregate() {
    let params = json!({
        "transfers": [
            { "account_id": "0.0.2002", "amount": 1.0 },
            { "account_id": "0.0.2002", "amount": 2.0 }
        ]
    });

    let result = normalise::transfer_hbar(&params, &context(), &client_with_operator())
        .await
        .unwrap();

    assert_eq!(
        result.hbar_transfers[&"0.0.2002".parse().unwrap()],
        300_000_000
    );
    assert_eq!(result.hbar_transfers.values().sum::<i64>(), 0);
}

#[tokio::test]
async fn non_positive_amount_rejected() {
    let params = json!({
        "transfers": [{ "account_id": "0.0.2002", "amount": -1.0 }]
    });

    let err = normalise::transfer_hbar(&params, &context(), &client_with_operator())
        .await
        .unwrap_err();
    assert!(matches!(err, AgentKitError::InvalidAmount(_)));
    assert!(err.to_string().contains("Invalid transfer amount"), "{err}");
}

#[tokio::test]
async fn source_defaults_through_resolver() {
    let params = json!({
        "transfers": [{ "account_id": "0.0.2002", "amount": 1.0 }]
    });

    // No context account: the operator account pays.
    let result = normalise::transfer_hbar(&params, &Context::default(), &client_with_operator())
        .await
        .unwrap();
    assert!(result.hbar_transfers.contains_key(&"0.0.1001".parse().unwrap()));

    // No source anywhere: identity resolution fails.
    let err = normalise::transfer_hbar(&params, &Context::default(), &client_without_operator())
        .await
        .unwrap_err();
    assert!(matches!(err, AgentKitError::IdentityResolution(_)));
}

#[tokio::test]
async fn allowance_transfer_requires_owner() {
    let params = json!({
        "transfers": [{ "account_id": "0.0.2002", "amount": 1.0 }]
    });

    let err = normalise::transfer_hbar_with_allowance(
        &params,
        &context(),
        &client_with_operator(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AgentKitError::MissingOwner(_)));
    assert!(err.to_string().contains("source_account_id"), "{err}");
}

#[tokio::test]
async fn allowance_transfer_nets_owner_against_recipients() {
    let params = json!({
        "source_account_id": "0.0.5005",
        "transfers": [
            { "account_id": "0.0.2002", "amount": 1.0 },
            { "account_id": "0.0.2002", "amount": 0.25 },
            { "account_id": "0.0.3003", "amount": 0.75 }
        ]
    });

    let result = normalise::transfer_hbar_with_allowance(
        &params,
        &context(),
        &client_with_operator(),
    )
    .await
    .unwrap();

    let ledger = &result.hbar_approved_transfers;
    assert_eq!(ledger[&"0.0.2002".parse().unwrap()], 125_000_000);
    assert_eq!(ledger[&"0.0.3003".parse().unwrap()], 75_000_000);
    assert_eq!(ledger[&"0.0.5005".parse().unwrap()], -200_000_000);
    assert_eq!(ledger.values().sum::<i64>(), 0);
}

#[tokio::test]
async fn owner_as_recipient_still_nets_to_zero() {
    let params = json!({
        "source_account_id": "0.0.2002",
        "transfers": [
            { "account_id": "0.0.2002", "amount": 1.0 },
            { "account_id": "0.0.3003", "amount": 1.0 }
        ]
    });

    let result = normalise::transfer_hbar_with_allowance(
        &params,
        &context(),
        &client_with_operator(),
    )
    .await
    .unwrap();

    let ledger = &result.hbar_approved_transfers;
    // Owner receives 1 and pays 2: net -1.
    assert_eq!(ledger[&"0.0.2002".parse().unwrap()], -100_000_000);
    assert_eq!(ledger.values().sum::<i64>(), 0);
}

#[tokio::test]
async fn token_transfer_scales_and_nets() {
    let mirror = StubMirror::with_decimals("2");
    let params = json!({
        "token_id": "0.0.7777",
        "transfers": [
            { "account_id": "0.0.2002", "amount": 5 },
            { "account_id": "0.0.3003", "amount": 2.5 }
        ]
    });

    let result = normalise::transfer_fungible_token(
        &params,
        &context(),
        &client_with_operator(),
        &mirror,
    )
    .await
    .unwrap();

    let ledger = &result.ft_transfers[&"0.0.7777".parse().unwrap()];
    assert_eq!(ledger[&"0.0.2002".parse().unwrap()], 500);
    assert_eq!(ledger[&"0.0.3003".parse().unwrap()], 250);
    assert_eq!(ledger[&"0.0.1001".parse().unwrap()], -750);
    assert_eq!(ledger.values().sum::<i64>(), 0);
}

#[tokio::test]
async fn long_memo_truncated_to_100_chars() {
    let params = json!({
        "transfers": [{ "account_id": "0.0.2002", "amount": 1.0 }],
        "transaction_memo": "m".repeat(150)
    });

    let result = normalise::transfer_hbar(&params, &context(), &client_with_operator())
        .await
        .unwrap();
    assert_eq!(result.transaction_memo.unwrap().chars().count(), 100);
}

proptest! {
    /// Conservation holds for arbitrary valid recipient lists.
    #[test]
    fn conservation_for_arbitrary_transfers(
        amounts in proptest::collection::vec(1u32..=1_000_000, 1..8),
        accounts in proptest::collection::vec(2u64..=50, 1..8),
    ) {
        let transfers: Vec<_> = amounts
            .iter()
            .zip(accounts.iter().cycle())
            .map(|(amount, account)| {
                json!({ "account_id": format!("0.0.{account}"), "amount": *amount as f64 / 100.0 })
            })
            .collect();
        let params = json!({ "transfers": transfers });

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");
        let result = runtime
            .block_on(normalise::transfer_hbar(&params, &context(), &client_with_operator()))
            .expect("normalise");

        prop_assert_eq!(result.hbar_transfers.values().sum::<i64>(), 0);
    }
}
