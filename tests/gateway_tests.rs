//! tests/gateway_tests.rs
//!
//! Tests for `src/gateway.rs` against a mocked backend:
//! - generate_wallet / get_balance / send_transaction success paths
//! - non-2xx responses, malformed bodies, unreachable hosts
//! - execute / dispatch mapping commands to outcomes

use ethtx::gateway::{dispatch, Command, GatewayClient, GatewayError, Outcome};
use ethtx::types::{EthAmount, SendTransactionRequest};
use httpmock::{Method, MockServer};
use serde_json::json;

#[tokio::test(flavor = "current_thread")]
async fn test_generate_wallet_success() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/generate-wallet");
            then.status(200).json_body(json!({
                "address": "0x1111111111111111111111111111111111111111",
                "private_key": "0xabc123",
                "balance": "0.0"
            }));
        })
        .await;

    let client = GatewayClient::new(&server.base_url()).unwrap();
    let wallet = client.generate_wallet().await.unwrap();

    mock.assert_async().await;
    assert_eq!(wallet.address, "0x1111111111111111111111111111111111111111");
    assert_eq!(wallet.private_key, "0xabc123");
    assert_eq!(wallet.balance, EthAmount::new("0.0"));
}

#[tokio::test(flavor = "current_thread")]
async fn test_get_balance_sends_address_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET)
                .path("/get-balance")
                .query_param("address", "0xABC");
            then.status(200).json_body(json!({ "address": "0xABC", "balance": "1.5" }));
        })
        .await;

    let client = GatewayClient::new(&server.base_url()).unwrap();
    let record = client.get_balance("0xABC").await.unwrap();

    mock.assert_async().await;
    assert_eq!(record.address, "0xABC");
    assert_eq!(record.balance.as_str(), "1.5");
}

#[tokio::test(flavor = "current_thread")]
async fn test_get_balance_accepts_numeric_balance() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/get-balance");
            then.status(200).json_body(json!({ "address": "0xABC", "balance": 2.25 }));
        })
        .await;

    let client = GatewayClient::new(&server.base_url()).unwrap();
    let record = client.get_balance("0xABC").await.unwrap();

    assert_eq!(record.balance.as_str(), "2.25");
}

#[tokio::test(flavor = "current_thread")]
async fn test_send_transaction_posts_json_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/send-transaction")
                .header("content-type", "application/json")
                .json_body(json!({
                    "sender_private_key": "0xkey",
                    "receiver_address": "0xdef"
                }));
            then.status(200).json_body(json!({
                "tx_hash": "0xfeed",
                "receipt": {
                    "transaction_index": 3,
                    "transaction_hash": "0xfeed",
                    "block_number": 19000000,
                    "from": "0xabc",
                    "to": "0xdef",
                    "gas_used": "21000",
                    "status": "Success"
                }
            }));
        })
        .await;

    let client = GatewayClient::new(&server.base_url()).unwrap();
    let request = SendTransactionRequest {
        sender_private_key: "0xkey".to_string(),
        receiver_address: "0xdef".to_string(),
    };
    let result = client.send_transaction(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.tx_hash, "0xfeed");
    let receipt = result.receipt.expect("receipt present");
    assert_eq!(receipt.transaction_index, 3);
    assert_eq!(receipt.block_number, 19_000_000);
    assert_eq!(receipt.gas_used, "21000");
    assert_eq!(receipt.status, "Success");
}

#[tokio::test(flavor = "current_thread")]
async fn test_send_transaction_without_receipt() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/send-transaction");
            then.status(200).json_body(json!({ "tx_hash": "0xfeed", "receipt": null }));
        })
        .await;

    let client = GatewayClient::new(&server.base_url()).unwrap();
    let request = SendTransactionRequest {
        sender_private_key: "0xkey".to_string(),
        receiver_address: "0xdef".to_string(),
    };
    let result = client.send_transaction(&request).await.unwrap();

    assert_eq!(result.tx_hash, "0xfeed");
    assert!(result.receipt.is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn test_non_success_status_is_error() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/get-balance");
            then.status(500).body("Invalid address");
        })
        .await;

    let client = GatewayClient::new(&server.base_url()).unwrap();
    let err = client.get_balance("nope").await.unwrap_err();

    match &err {
        GatewayError::Status { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "Invalid address");
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert_eq!(err.to_string(), "request failed with status code 500: Invalid address");
}

#[tokio::test(flavor = "current_thread")]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/generate-wallet");
            then.status(200).body("not json");
        })
        .await;

    let client = GatewayClient::new(&server.base_url()).unwrap();
    let err = client.generate_wallet().await.unwrap_err();

    assert!(matches!(err, GatewayError::Decode(_)));
}

#[tokio::test(flavor = "current_thread")]
async fn test_unreachable_backend_is_transport_error() {
    // Port 1 is reserved and nothing listens there
    let client = GatewayClient::new("http://127.0.0.1:1").unwrap();
    let err = client.generate_wallet().await.unwrap_err();

    assert!(matches!(err, GatewayError::Transport(_)));
}

#[tokio::test(flavor = "current_thread")]
async fn test_base_url_with_path_prefix() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/api/generate-wallet");
            then.status(200).json_body(json!({
                "address": "0x1",
                "private_key": "0x2",
                "balance": "0"
            }));
        })
        .await;

    let client = GatewayClient::new(&server.url("/api")).unwrap();
    client.generate_wallet().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test(flavor = "current_thread")]
async fn test_execute_runs_exactly_one_call() {
    let server = MockServer::start_async().await;
    let wallet_mock = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/generate-wallet");
            then.status(200).json_body(json!({
                "address": "0x1",
                "private_key": "0x2",
                "balance": "0"
            }));
        })
        .await;
    let balance_mock = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/get-balance");
            then.status(200).json_body(json!({ "address": "0x1", "balance": "0" }));
        })
        .await;

    let client = GatewayClient::new(&server.base_url()).unwrap();
    let outcome = client
        .execute(Command::FetchBalance {
            address: "0x1".to_string(),
        })
        .await;

    assert!(matches!(outcome, Outcome::BalanceFetched(Ok(_))));
    assert_eq!(balance_mock.hits_async().await, 1);
    assert_eq!(wallet_mock.hits_async().await, 0);
}

#[tokio::test(flavor = "current_thread")]
async fn test_dispatch_maps_failures_to_matching_outcome() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/send-transaction");
            then.status(400).body("insufficient funds");
        })
        .await;

    let request = SendTransactionRequest {
        sender_private_key: "0xkey".to_string(),
        receiver_address: "0xdef".to_string(),
    };
    let outcome = dispatch(&server.base_url(), Command::SendTransaction(request)).await;

    match outcome {
        Outcome::TransactionSent(Err(GatewayError::Status { status, .. })) => assert_eq!(status, 400),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn test_dispatch_with_invalid_base_url() {
    let outcome = dispatch("not a url", Command::GenerateWallet).await;
    assert!(matches!(
        outcome,
        Outcome::WalletGenerated(Err(GatewayError::InvalidUrl(_)))
    ));
}
