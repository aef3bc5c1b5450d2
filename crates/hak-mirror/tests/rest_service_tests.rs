// SPDX-License-Identifier: MIT OR Apache-2.0

//! REST client tests against a stubbed mirror node.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hak_mirror::{MirrorError, MirrornodeService, RestMirrornodeService};

async fn service_for(server: &MockServer) -> RestMirrornodeService {
    RestMirrornodeService::with_base_url(server.uri())
}

#[tokio::test]
async fn fetches_token_info() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tokens/0.0.5678"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_id": "0.0.5678",
            "name": "Test Token",
            "symbol": "TEST",
            "type": "FUNGIBLE_COMMON",
            "decimals": "3",
            "total_supply": "1000000",
            "max_supply": "5000000",
            "supply_type": "FINITE",
            "treasury_account_id": "0.0.1001",
            "deleted": false,
            "freeze_default": false,
            "admin_key": { "_type": "ED25519", "key": "aa" }
        })))
        .mount(&server)
        .await;

    let info = service_for(&server)
        .await
        .get_token_info("0.0.5678")
        .await
        .unwrap();
    assert_eq!(info.name.as_deref(), Some("Test Token"));
    assert_eq!(info.decimals_u32(), Some(3));
    assert_eq!(info.supply_type.as_deref(), Some("FINITE"));
    assert_eq!(info.admin_key.unwrap().key.as_deref(), Some("aa"));
}

#[tokio::test]
async fn missing_token_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tokens/0.0.999999999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "_status": { "messages": [{ "message": "Not found" }] }
        })))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .await
        .get_token_info("0.0.999999999")
        .await
        .unwrap_err();
    assert!(matches!(err, MirrorError::NotFound { .. }));
    assert!(err.to_string().contains("token 0.0.999999999"));
}

#[tokio::test]
async fn fetches_account_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/0.0.1001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account": "0.0.1001",
            "key": { "_type": "ED25519", "key": "deadbeef" },
            "evm_address": "0x0000000000000000000000000000000000000001",
            "balance": { "balance": 250_000_000, "timestamp": "1755169980.000000000" }
        })))
        .mount(&server)
        .await;

    let info = service_for(&server)
        .await
        .get_account("0.0.1001")
        .await
        .unwrap();
    assert_eq!(info.account_public_key(), Some("deadbeef"));
    assert_eq!(info.balance.unwrap().balance, Some(250_000_000));
}

#[tokio::test]
async fn fetches_account_balance_from_balances_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/balances"))
        .and(query_param("account.id", "0.0.1001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "balances": [{ "account": "0.0.1001", "balance": 150_000_000 }]
        })))
        .mount(&server)
        .await;

    let balance = service_for(&server)
        .await
        .get_account_balance("0.0.1001")
        .await
        .unwrap();
    assert_eq!(balance, 150_000_000);
}

#[tokio::test]
async fn fetches_exchange_rate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/network/exchangerate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_rate": { "cent_equivalent": 596987, "hbar_equivalent": 30000, "expiration_time": 1755172800 },
            "next_rate": { "cent_equivalent": 594920, "hbar_equivalent": 30000, "expiration_time": 1755176400 },
            "timestamp": "1755169980.000000000"
        })))
        .mount(&server)
        .await;

    let rates = service_for(&server)
        .await
        .get_exchange_rate(None)
        .await
        .unwrap();
    let current = rates.current_rate.unwrap();
    assert_eq!(current.hbar_equivalent, 30000);
    assert!(current.usd_per_hbar() > 0.0);
}

#[tokio::test]
async fn fetches_transaction_records_with_nonce() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/transactions/0.0.4177806-1755169980-051721264"))
        .and(query_param("nonce", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [{
                "transaction_id": "0.0.4177806-1755169980-051721264",
                "name": "CRYPTOTRANSFER",
                "result": "SUCCESS",
                "consensus_timestamp": "1755169990.000000001",
                "charged_tx_fee": 78643,
                "transfers": [
                    { "account": "0.0.4177806", "amount": -100000000 },
                    { "account": "0.0.2002", "amount": 100000000 }
                ]
            }]
        })))
        .mount(&server)
        .await;

    let page = service_for(&server)
        .await
        .get_transaction_record("0.0.4177806-1755169980-051721264", Some(0))
        .await
        .unwrap();
    assert_eq!(page.transactions.len(), 1);
    assert_eq!(page.transactions[0].result.as_deref(), Some("SUCCESS"));
}

#[tokio::test]
async fn server_error_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/topics/0.0.42"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .await
        .get_topic_info("0.0.42")
        .await
        .unwrap_err();
    assert!(matches!(err, MirrorError::Status { status: 500, .. }));
}
