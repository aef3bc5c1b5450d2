// SPDX-License-Identifier: MIT OR Apache-2.0

//! Supply semantics and key resolution for `create_fungible_token`.

mod common;

use serde_json::json;

use common::{
    MIRROR_KEY, OPERATOR_ID, OPERATOR_KEY, StubMirror, client_with_operator, context,
};
use hak_core::{AgentKitError, PublicKey, TokenSupplyType, TokenType};
use hak_kit::normalise;

#[tokio::test]
async fn defaults_scale_supplies_and_use_operator_treasury() {
    let params = json!({
        "token_name": "Test Token",
        "token_symbol": "TEST",
        "decimals": 2,
        "initial_supply": 100,
        "max_supply": 1_000_000
    });

    let result = normalise::create_fungible_token(
        &params,
        &context(),
        &client_with_operator(),
        &StubMirror::default(),
    )
    .await
    .unwrap();

    let tp = &result.token_params;
    assert_eq!(tp.token_name, "Test Token");
    assert_eq!(tp.token_symbol, "TEST");
    assert_eq!(tp.decimals, 2);
    assert_eq!(tp.initial_supply, 10_000);
    assert_eq!(tp.max_supply, Some(100_000_000));
    assert_eq!(tp.supply_type, TokenSupplyType::Finite);
    assert_eq!(tp.token_type, TokenType::FungibleCommon);
    assert_eq!(tp.treasury_account_id.to_string(), OPERATOR_ID);
    assert_eq!(
        tp.auto_renew_account_id.map(|id| id.to_string()),
        Some(OPERATOR_ID.to_string())
    );
    assert!(result.scheduling_params.is_none());
}

#[tokio::test]
async fn minimal_input_defaults_to_infinite_supply() {
    let params = json!({ "token_name": "MyToken", "token_symbol": "MTK" });

    let result = normalise::create_fungible_token(
        &params,
        &context(),
        &client_with_operator(),
        &StubMirror::default(),
    )
    .await
    .unwrap();

    let tp = &result.token_params;
    assert_eq!(tp.supply_type, TokenSupplyType::Infinite);
    assert_eq!(tp.decimals, 0);
    assert_eq!(tp.initial_supply, 0);
    assert_eq!(tp.max_supply, None);
    assert!(result.keys.is_none());
}

#[tokio::test]
async fn max_supply_implies_finite_and_zero_initial_bumps() {
    let params = json!({
        "token_name": "Finite Token",
        "token_symbol": "FIN",
        "decimals": 3,
        "initial_supply": 0,
        "max_supply": 500
    });

    let result = normalise::create_fungible_token(
        &params,
        &context(),
        &client_with_operator(),
        &StubMirror::default(),
    )
    .await
    .unwrap();

    let tp = &result.token_params;
    assert_eq!(tp.supply_type, TokenSupplyType::Finite);
    assert_eq!(tp.max_supply, Some(500_000));
    // Finite tokens need nonzero initial supply: bumped to 1 * 10^3.
    assert_eq!(tp.initial_supply, 1_000);

    // Finite supply implies a supply key (operator fallback here).
    let keys = result.keys.expect("supply key expected");
    assert_eq!(
        keys.supply_key.unwrap(),
        PublicKey::parse(OPERATOR_KEY).unwrap()
    );
}

#[tokio::test]
async fn zero_decimal_bump_and_default_max() {
    let params = json!({
        "token_name": "T",
        "token_symbol": "T",
        "decimals": 0,
        "initial_supply": 0,
        "max_supply": 500
    });

    let result = normalise::create_fungible_token(
        &params,
        &context(),
        &client_with_operator(),
        &StubMirror::default(),
    )
    .await
    .unwrap();
    assert_eq!(result.token_params.initial_supply, 1);
    assert_eq!(result.token_params.max_supply, Some(500));
}

#[tokio::test]
async fn explicit_finite_defaults_max_to_one_million() {
    let params = json!({
        "token_name": "Explicit Finite",
        "token_symbol": "EXP",
        "decimals": 0,
        "supply_type": 1,
        "initial_supply": 50
    });

    let result = normalise::create_fungible_token(
        &params,
        &context(),
        &client_with_operator(),
        &StubMirror::default(),
    )
    .await
    .unwrap();

    assert_eq!(result.token_params.supply_type, TokenSupplyType::Finite);
    assert_eq!(result.token_params.max_supply, Some(1_000_000));
    assert_eq!(result.token_params.initial_supply, 50);
}

#[tokio::test]
async fn initial_above_max_is_rejected() {
    let params = json!({
        "token_name": "Invalid Token",
        "token_symbol": "INV",
        "decimals": 0,
        "initial_supply": 2000,
        "max_supply": 1000
    });

    let err = normalise::create_fungible_token(
        &params,
        &context(),
        &client_with_operator(),
        &StubMirror::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AgentKitError::SupplyConstraint(_)));
    assert!(err.to_string().contains("cannot exceed max"), "{err}");
}

#[tokio::test]
async fn negative_decimals_rejected() {
    let params = json!({
        "token_name": "T",
        "token_symbol": "T",
        "decimals": -2
    });

    let err = normalise::create_fungible_token(
        &params,
        &context(),
        &client_with_operator(),
        &StubMirror::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AgentKitError::SupplyConstraint(_)));
    assert!(err.to_string().contains("non-negative"), "{err}");
}

#[tokio::test]
async fn max_supply_with_infinite_type_rejected() {
    let params = json!({
        "token_name": "T",
        "token_symbol": "T",
        "supply_type": 0,
        "max_supply": 1000
    });

    let err = normalise::create_fungible_token(
        &params,
        &context(),
        &client_with_operator(),
        &StubMirror::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AgentKitError::SupplyConstraint(_)));
    assert!(err.to_string().contains("INFINITE"), "{err}");
}

#[tokio::test]
async fn supply_key_comes_from_mirror_when_available() {
    let mirror = StubMirror {
        account_key: Some(MIRROR_KEY.to_string()),
        ..StubMirror::default()
    };
    let params = json!({
        "token_name": "Key Token",
        "token_symbol": "KEY",
        "is_supply_key": true,
        "treasury_account_id": OPERATOR_ID
    });

    let result =
        normalise::create_fungible_token(&params, &context(), &client_with_operator(), &mirror)
            .await
            .unwrap();

    let keys = result.keys.expect("supply key expected");
    assert_eq!(
        keys.supply_key.unwrap(),
        PublicKey::parse(MIRROR_KEY).unwrap()
    );
}

#[tokio::test]
async fn supply_key_falls_back_to_operator_when_mirror_fails() {
    let mirror = StubMirror {
        fail_accounts: true,
        ..StubMirror::default()
    };
    let params = json!({
        "token_name": "Fallback Token",
        "token_symbol": "FB",
        "is_supply_key": true
    });

    let result =
        normalise::create_fungible_token(&params, &context(), &client_with_operator(), &mirror)
            .await
            .unwrap();

    let keys = result.keys.expect("supply key expected");
    assert_eq!(
        keys.supply_key.unwrap(),
        PublicKey::parse(OPERATOR_KEY).unwrap()
    );
}

#[tokio::test]
async fn scheduling_block_resolves_when_requested() {
    let params = json!({
        "token_name": "Sched Token",
        "token_symbol": "SCH",
        "scheduling_params": { "is_scheduled": true, "wait_for_expiry": true }
    });

    let result = normalise::create_fungible_token(
        &params,
        &context(),
        &client_with_operator(),
        &StubMirror::default(),
    )
    .await
    .unwrap();

    let spec = result.scheduling_params.expect("schedule spec expected");
    assert!(spec.wait_for_expiry);
    assert!(spec.admin_key.is_none());
    assert!(spec.payer_account_id.is_none());
}

#[tokio::test]
async fn scheduling_block_ignored_when_not_flagged() {
    let params = json!({
        "token_name": "T",
        "token_symbol": "T",
        "scheduling_params": { "is_scheduled": false, "wait_for_expiry": true }
    });

    let result = normalise::create_fungible_token(
        &params,
        &context(),
        &client_with_operator(),
        &StubMirror::default(),
    )
    .await
    .unwrap();
    assert!(result.scheduling_params.is_none());
}

#[tokio::test]
async fn missing_name_and_symbol_aggregate_into_one_error() {
    let err = normalise::create_fungible_token(
        &json!({}),
        &context(),
        &client_with_operator(),
        &StubMirror::default(),
    )
    .await
    .unwrap_err();

    let msg = err.to_string();
    assert!(msg.starts_with("Invalid parameters:"), "{msg}");
    assert!(msg.contains("token_name"), "{msg}");
    assert!(msg.contains("token_symbol"), "{msg}");
}
