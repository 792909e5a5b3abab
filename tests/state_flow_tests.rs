//! tests/state_flow_tests.rs
//!
//! End-to-end flows through the view state: intent -> validation -> gateway call ->
//! applied outcome, against a mocked backend.

use ethtx::gateway::dispatch;
use ethtx::gui::{Intent, Panel, Severity, ViewState};
use ethtx::receipt::write_receipt;
use httpmock::{Method, MockServer};
use serde_json::json;

async fn run(state: &mut ViewState, base_url: &str, intent: Intent) {
    if let Some(command) = state.request(intent) {
        let outcome = dispatch(base_url, command).await;
        state.apply(outcome);
    }
}

#[tokio::test(flavor = "current_thread")]
async fn test_balance_lookup_flow() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET)
                .path("/get-balance")
                .query_param("address", "0xABC");
            then.status(200).json_body(json!({ "address": "0xABC", "balance": "1.5" }));
        })
        .await;

    let mut state = ViewState::default();
    state.switch_panel(Panel::GetBalance);
    state.balance_address = "0xABC".to_string();

    run(&mut state, &server.base_url(), Intent::FetchBalance).await;
    run(&mut state, &server.base_url(), Intent::FetchBalance).await;

    assert_eq!(mock.hits_async().await, 2);
    // Duplicate lookups are kept as separate entries
    assert_eq!(state.balances().len(), 2);
    assert_eq!(state.balances()[0].balance.as_str(), "1.5");
    assert_eq!(state.balance_address, "0xABC");
    let latest = state.notifications.latest().unwrap();
    assert_eq!(latest.severity, Severity::Success);
    assert_eq!(latest.message, "Balance fetched successfully!");
}

#[tokio::test(flavor = "current_thread")]
async fn test_empty_inputs_never_reach_backend() {
    let server = MockServer::start_async().await;
    let balance_mock = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/get-balance");
            then.status(200).json_body(json!({ "address": "", "balance": "0" }));
        })
        .await;
    let send_mock = server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/send-transaction");
            then.status(200).json_body(json!({ "tx_hash": "0x1" }));
        })
        .await;

    let mut state = ViewState::default();
    run(&mut state, &server.base_url(), Intent::FetchBalance).await;
    state.balance_address = "   ".to_string();
    run(&mut state, &server.base_url(), Intent::FetchBalance).await;
    state.receiver_address = "0xdef".to_string();
    run(&mut state, &server.base_url(), Intent::SendTransaction).await;

    assert_eq!(balance_mock.hits_async().await, 0);
    assert_eq!(send_mock.hits_async().await, 0);
    let messages: Vec<&str> = state.notifications.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Please Enter an Address",
            "Please enter a valid address",
            "Please enter both sender private key and receiver address",
        ]
    );
    assert!(state.notifications.iter().all(|n| n.severity == Severity::Warning));
}

#[tokio::test(flavor = "current_thread")]
async fn test_generate_wallet_failure_raises_alert() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/generate-wallet");
            then.status(500).body("");
        })
        .await;

    let mut state = ViewState::default();
    run(&mut state, &server.base_url(), Intent::GenerateWallet).await;

    assert!(state.wallets().is_empty());
    assert_eq!(
        state.alert(),
        Some("Failed to generate wallet: request failed with status code 500")
    );
    assert!(state.notifications.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn test_send_transaction_flow_and_receipt() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/send-transaction");
            then.status(200).json_body(json!({
                "tx_hash": "0xfeed",
                "receipt": {
                    "transaction_index": 0,
                    "transaction_hash": "0xfeed",
                    "block_number": 42,
                    "from": "0xabc",
                    "to": "0xdef",
                    "gas_used": "21000",
                    "status": "Success"
                }
            }));
        })
        .await;

    let mut state = ViewState::default();
    state.switch_panel(Panel::SendTransaction);
    state.sender_private_key = "0xkey".to_string();
    state.receiver_address = "0xdef".to_string();

    run(&mut state, &server.base_url(), Intent::SendTransaction).await;

    assert!(state.overlay_visible());
    assert_eq!(state.transaction().unwrap().tx_hash, "0xfeed");
    state.close_overlay();
    assert!(!state.overlay_visible());
    assert!(state.transaction().is_some());

    let dir = tempfile::tempdir().unwrap();
    let path = write_receipt(dir.path(), state.transaction()).unwrap().unwrap();
    let html = std::fs::read_to_string(path).unwrap();
    assert!(html.contains("Block Number: 42"));
    assert!(html.contains("Gas Used: 21000"));
}

#[tokio::test(flavor = "current_thread")]
async fn test_send_transaction_failure_keeps_previous_result() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/send-transaction");
            then.status(502).body("bad gateway");
        })
        .await;

    let mut state = ViewState::default();
    state.sender_private_key = "0xkey".to_string();
    state.receiver_address = "0xdef".to_string();

    run(&mut state, &server.base_url(), Intent::SendTransaction).await;

    assert!(state.transaction().is_none());
    assert!(!state.overlay_visible());
    let latest = state.notifications.latest().unwrap();
    assert_eq!(latest.severity, Severity::Warning);
    assert_eq!(latest.message, "Failed to send transaction");
}
