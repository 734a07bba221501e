/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for lnpay-client tests

#![allow(dead_code)]

use lnpay_client::{ClientConfig, LnpayClient, LnpayConfig};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const SECRET_KEY: &str = "pak_TEST";
pub const WALLET_ACCESS_KEY: &str = "waka_TEST";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Base URL for a mock server, with LNPay's version prefix
pub fn base_url(server: &MockServer) -> String {
    format!("{}/v1", server.uri())
}

/// Client configured with both test keys against the mock server
pub fn test_client(server: &MockServer) -> LnpayClient {
    test_client_with(server, LnpayConfig::new(SECRET_KEY).with_wallet_access_key(WALLET_ACCESS_KEY))
}

pub fn test_client_with(server: &MockServer, config: LnpayConfig) -> LnpayClient {
    LnpayClient::with_config_and_base_url(config, ClientConfig::default(), &base_url(server))
        .expect("client init")
}

/// Error body shape LNPay sends with non-2xx statuses
pub fn error_body(message: &str) -> Value {
    json!({
        "name": "BadRequestHttpException",
        "message": message,
        "code": 0,
        "status": 400
    })
}

pub fn wallet_body() -> Value {
    json!({
        "id": "wal_1",
        "created_at": 1_600_000_000,
        "updated_at": 1_600_000_100,
        "user_label": "My Wallet",
        "balance": 1000,
        "statusType": { "type": "wallet", "name": "active", "display_name": "Active" }
    })
}

pub fn new_wallet_body() -> Value {
    json!({
        "id": "wal_new",
        "created_at": 1_600_000_000,
        "updated_at": 1_600_000_000,
        "user_label": "alice",
        "balance": 0,
        "statusType": { "type": "wallet", "name": "active", "display_name": "Active" },
        "access_keys": {
            "Wallet Admin": ["waka_ADMIN"],
            "Wallet Invoice": ["waki_INVOICE"],
            "Wallet Read": ["wakr_READ"]
        }
    })
}

pub fn lntx_body() -> Value {
    json!({
        "id": "lntx_82yv",
        "created_at": 1_600_000_000,
        "dest_pubkey": "033868c219bdb51a33560d854d500fe7d3898a1ad9e05dd89d0007e11313588500",
        "payment_request": "lnbc1u1p0test",
        "r_hash_decoded": "b1f0a3c2",
        "memo": "Invoice memo.",
        "num_satoshis": 100,
        "expiry": 86400,
        "expires_at": 1_600_086_400,
        "settled": 0,
        "is_keysend": false,
        "passThru": { "order_id": "100" },
        "ln_node_id": "lnod_2s1"
    })
}

pub fn transaction_body(id: &str, num_satoshis: i64) -> Value {
    json!({
        "id": id,
        "created_at": 1_600_000_200,
        "num_satoshis": num_satoshis,
        "user_label": "Transfer Memo",
        "wal": { "id": "wal_1", "balance": 1000 + num_satoshis },
        "wtxType": { "layer": "internal", "name": "internal_transfer", "display_name": "Transfer" },
        "passThru": { "order_id": "100" }
    })
}

pub fn transactions_body() -> Value {
    json!([
        transaction_body("wtx_1", 100),
        {
            "id": "wtx_2",
            "num_satoshis": -10,
            "lnTx": { "id": "lntx_paid", "num_satoshis": 10, "settled": 1 }
        }
    ])
}

pub fn payment_body() -> Value {
    json!({ "lnTx": lntx_body() })
}

pub fn transfer_body() -> Value {
    json!({
        "wtx_transfer_in": transaction_body("wtx_in", 1),
        "wtx_transfer_out": transaction_body("wtx_out", -1)
    })
}

pub fn lnurl_withdraw_body() -> Value {
    json!({
        "lnurl": "LNURL1DP68GURN8GHJ7MRWW4EXCTNXD9SHG6NPVCHXXMMD9AKXUATJDSKHQCTE8AEK2UMND9HKU0",
        "ott": "ott_abc123"
    })
}

pub fn paywall_body() -> Value {
    json!({
        "id": "pw_abc",
        "created_at": 1_600_000_000,
        "destination_url": "https://bigsun.xyz",
        "short_url": "bigsun",
        "memo": "This is my memo",
        "num_satoshis": 100,
        "link_payment": "https://paywall.link/bigsun"
    })
}
