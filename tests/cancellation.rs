use std::time::{Duration, Instant};

use bondmcp_async::types::ask::AskRequest;
use bondmcp_async::{BondConfig, BondError, Client};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn cancelling_during_backoff_stops_the_call() {
    let server = MockServer::start().await;

    // Always failing; a long backoff follows the first attempt.
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let config = BondConfig::new()
        .with_api_base(server.uri())
        .with_api_key("test-api-key")
        .with_max_retries(5)
        .with_retry_delay(Duration::from_secs(30));
    let client = Client::with_config(config).with_cancellation(token.clone());

    let cancel = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        cancel.cancel();
    });

    let start = Instant::now();
    let err = client.ask().query(AskRequest::new("q")).await.unwrap_err();
    assert!(matches!(err, BondError::Cancelled));
    // Must return promptly, not after the 30s backoff.
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn cancelling_during_permit_wait_issues_no_io() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "ok",
            "conversation_id": "c1",
            "model_used": "consensus"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let config = BondConfig::new()
        .with_api_base(server.uri())
        .with_api_key("test-api-key")
        .with_rate_limit(1, Duration::from_secs(60));
    let client = Client::with_config(config).with_cancellation(token.clone());

    // First call takes the immediate permit.
    client.ask().query(AskRequest::new("q1")).await.unwrap();

    // Second call would wait 60s for its permit; cancel instead.
    let cancel = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        cancel.cancel();
    });

    let start = Instant::now();
    let err = client.ask().query(AskRequest::new("q2")).await.unwrap_err();
    assert!(matches!(err, BondError::Cancelled));
    assert!(start.elapsed() < Duration::from_secs(5));
    // The mock's expect(1) verifies no second request was issued.
}

#[tokio::test]
async fn pre_cancelled_token_fails_before_any_io() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "ok"
        })))
        .expect(0)
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    token.cancel();

    let config = BondConfig::new()
        .with_api_base(server.uri())
        .with_api_key("test-api-key")
        .with_rate_limit(1, Duration::from_secs(1));
    let client = Client::with_config(config).with_cancellation(token);

    let err = client.ask().query(AskRequest::new("q")).await.unwrap_err();
    assert!(matches!(err, BondError::Cancelled));
}
