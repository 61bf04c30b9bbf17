//! Tests for the recurrence encode/decode endpoints.

use salvo::http::StatusCode;
use serde_json::json;

use gridflex_test::component::config::Settings;
use gridflex_test::component::types::EncodingMode;

use super::helpers::{TestRequest, create_test_service, create_test_service_with};

/// ## Summary
/// Encoding then decoding the Monday-morning selection reproduces its keys.
#[test_log::test(tokio::test)]
async fn encode_then_decode_round_trips() {
    let service = create_test_service();

    let encoded = TestRequest::post("/api/recurrence/encode")
        .json(&json!({ "slots": { "1-18": true, "1-19": true, "3-0": true } }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(encoded["cron"], "0,30 9 * * 1;0 0 * * 3");

    let decoded = TestRequest::post("/api/recurrence/decode")
        .json(&json!({ "cron": encoded["cron"] }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(decoded["slots"], json!(["1-18", "1-19", "3-0"]));
}

/// ## Summary
/// Compat encoding widens a partial-hour selection; exact encoding keeps it.
#[test_log::test(tokio::test)]
async fn exact_mode_avoids_partial_hour_loss() {
    let service = create_test_service();
    let partial = json!(["0-18", "0-21"]);

    let compat = TestRequest::post("/api/recurrence/encode")
        .json(&json!({ "slots": partial }))
        .send(&service)
        .await
        .json();
    let widened = TestRequest::post("/api/recurrence/decode")
        .json(&json!({ "cron": compat["cron"] }))
        .send(&service)
        .await
        .json();
    assert_eq!(widened["slots"], json!(["0-18", "0-19", "0-20", "0-21"]));

    let exact = TestRequest::post("/api/recurrence/encode")
        .json(&json!({ "slots": partial, "mode": "exact" }))
        .send(&service)
        .await
        .json();
    assert_eq!(exact["lossless"], true);
    let kept = TestRequest::post("/api/recurrence/decode")
        .json(&json!({ "cron": exact["cron"] }))
        .send(&service)
        .await
        .json();
    assert_eq!(kept["slots"], partial);
}

/// ## Summary
/// A server configured for exact encoding uses it by default.
#[test_log::test(tokio::test)]
async fn configured_default_mode_applies() {
    let mut settings = Settings::defaults();
    settings.schedule.encoding = EncodingMode::Exact;
    let service = create_test_service_with(settings);

    let body = TestRequest::post("/api/recurrence/encode")
        .json(&json!({ "slots": ["0-18", "0-21"] }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["mode"], "exact");
    assert_eq!(body["cron"], "0 9 * * 0;30 10 * * 0");
}

/// ## Summary
/// The sentinel decodes to nothing and bad bodies are rejected.
#[test_log::test(tokio::test)]
async fn sentinel_and_bad_bodies() {
    let service = create_test_service();

    let decoded = TestRequest::post("/api/recurrence/decode")
        .json(&json!({ "cron": "No schedule selected" }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(decoded["slots"], json!([]));

    let res = TestRequest::post("/api/recurrence/decode")
        .body("not json")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert!(res.error_message().contains("invalid request body"));
}
