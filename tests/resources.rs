use bondmcp_async::types::ask::AskRequest;
use bondmcp_async::types::labs::{LabInterpretRequest, LabResult, PatientContext};
use bondmcp_async::{BondConfig, BondError, Client};
use wiremock::matchers::{body_json_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<BondConfig> {
    let config = BondConfig::new()
        .with_api_base(server.uri())
        .with_api_key("test-api-key");
    Client::with_config(config)
}

#[tokio::test]
async fn requests_carry_standard_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("authorization", "Bearer test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "timestamp": "2025-06-01T12:00:00Z",
            "version": "2.0.0",
            "uptime": 12345.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.health().check().await.unwrap();
    assert_eq!(resp.data.status, "ok");
    assert_eq!(resp.data.version.as_deref(), Some("2.0.0"));

    let received = server.received_requests().await.unwrap();
    let ua = received[0].headers.get("user-agent").unwrap();
    assert!(ua.to_str().unwrap().starts_with("bondmcp-rust/"));

    // Unbodied requests declare the JSON content type too, like every other
    // request.
    let ct = received[0].headers.get("content-type").unwrap();
    assert_eq!(ct, "application/json");
}

#[tokio::test]
async fn envelope_carries_response_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "req-abc-123")
                .set_body_json(serde_json::json!({
                    "answer": "42",
                    "conversation_id": "c1",
                    "model_used": "consensus",
                    "confidence": 0.93
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.ask().query(AskRequest::new("q")).await.unwrap();
    assert_eq!(resp.status, 200);
    assert!(resp.success);
    assert_eq!(resp.request_id.as_deref(), Some("req-abc-123"));
    assert!(resp.elapsed > std::time::Duration::ZERO);
    assert_eq!(resp.data.confidence, Some(0.93));
}

#[tokio::test]
async fn labs_interpret_round_trips_typed_payloads() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/labs/interpret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "interpretation": "A1c slightly elevated",
            "abnormal_results": [
                {"test_name": "HbA1c", "value": 6.1, "unit": "%", "reference_range": "4.0-5.6"}
            ],
            "recommendations": ["Repeat in 3 months"],
            "urgency_level": "routine"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let req = LabInterpretRequest::new(vec![LabResult {
        test_name: "HbA1c".into(),
        value: 6.1,
        unit: "%".into(),
        reference_range: "4.0-5.6".into(),
    }])
    .with_patient_context(PatientContext {
        age: Some(51),
        ..PatientContext::default()
    })
    .with_recommendations();

    let resp = client.labs().interpret(req).await.unwrap();
    assert_eq!(resp.data.abnormal_results.len(), 1);
    assert_eq!(resp.data.urgency_level, "routine");
}

#[tokio::test]
async fn chat_builds_conversation_paths() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/conversations/conv-9/messages"))
        .and(body_json_string(r#"{"content":"hello"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "msg-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/chat/conversations/conv-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "conv-9",
            "messages": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let sent = client
        .chat()
        .send_message("conv-9", serde_json::json!({"content": "hello"}))
        .await
        .unwrap();
    assert_eq!(sent.data["id"], "msg-1");

    let conv = client.chat().get_conversation("conv-9").await.unwrap();
    assert_eq!(conv.data["id"], "conv-9");
}

#[tokio::test]
async fn api_keys_revoke_uses_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api-keys/key-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "revoked": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.api_keys().revoke("key-7").await.unwrap();
    assert_eq!(resp.data["revoked"], true);
}

#[tokio::test]
async fn payments_usage_passes_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payments/usage"))
        .and(query_param("month", "2025-06"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total": 12.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .payments()
        .usage(&[("month", "2025-06")])
        .await
        .unwrap();
    assert_eq!(resp.data["total"], 12.5);
}

#[tokio::test]
async fn empty_api_key_fails_construction() {
    let err = Client::new("").unwrap_err();
    assert!(matches!(err, BondError::Authentication(_)));

    let err = Client::new("   ").unwrap_err();
    assert!(matches!(err, BondError::Authentication(_)));
}

#[tokio::test]
async fn missing_credentials_fail_before_any_io() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let config = BondConfig::new()
        .with_api_base(server.uri())
        .with_api_key("");
    let client = Client::with_config(config);

    let err = client.ask().query(AskRequest::new("q")).await.unwrap_err();
    assert!(matches!(err, BondError::Authentication(_)));
}
