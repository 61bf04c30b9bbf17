#![allow(unused_must_use)]
//! Tests for saving, listing, deleting and viewing customer schedules.

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::{ICP_A, ICP_B, TestRequest, create_test_service, schedule_json};

/// ## Summary
/// Saving for two ICPs, then replacing for one, leaves the other untouched.
#[test_log::test(tokio::test)]
async fn save_replaces_per_der_type() {
    let service = create_test_service();

    TestRequest::put("/api/schedules")
        .json(&json!({
            "icps": [ICP_A, ICP_B],
            "schedule": schedule_json("Hot water", "2026-01-01", "2026-12-31", "0 1 * * 1"),
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT)
        .assert_body_empty();

    TestRequest::put("/api/schedules")
        .json(&json!({
            "icps": [ICP_A],
            "schedule": schedule_json("Hot water", "2026-01-01", "2026-12-31", "0 2 * * 1"),
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let a = TestRequest::get(&format!("/api/customers/{ICP_A}/schedules"))
        .send(&service)
        .await
        .json();
    let b = TestRequest::get(&format!("/api/customers/{ICP_B}/schedules"))
        .send(&service)
        .await
        .json();

    assert_eq!(a.as_array().map(Vec::len), Some(1));
    assert_eq!(a[0]["cron"], "0 2 * * 1");
    assert_eq!(b[0]["cron"], "0 1 * * 1");
}

/// ## Summary
/// Validation failures map to 400 with an error message.
#[test_log::test(tokio::test)]
async fn save_validation_errors() {
    let service = create_test_service();

    let res = TestRequest::put("/api/schedules")
        .json(&json!({
            "icps": [ICP_A],
            "schedule": schedule_json("Solar", "2026-12-31", "2026-01-01", "0 9 * * 1"),
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert!(res.error_message().contains("before it starts"));

    TestRequest::put("/api/schedules")
        .json(&json!({
            "icps": [],
            "schedule": schedule_json("Solar", "2026-01-01", "2026-12-31", "0 9 * * 1"),
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    TestRequest::put("/api/schedules")
        .json(&json!({
            "icps": [ICP_A],
            "schedule": schedule_json("Wind", "2026-01-01", "2026-12-31", "0 9 * * 1"),
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

/// ## Summary
/// Available DER types shrink as schedules are added and grow on delete.
#[test_log::test(tokio::test)]
async fn available_types_follow_schedules() {
    let service = create_test_service();
    let available = format!("/api/customers/{ICP_A}/available-der-types");

    let before = TestRequest::get(&available).send(&service).await.json();
    assert_eq!(before.as_array().map(Vec::len), Some(6));

    TestRequest::put("/api/schedules")
        .json(&json!({
            "icps": [ICP_A],
            "schedule": schedule_json("EV chargers", "2026-01-01", "2026-12-31", "0 22,23 * * 0"),
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let during = TestRequest::get(&available).send(&service).await.json();
    assert_eq!(during.as_array().map(Vec::len), Some(5));
    assert!(!during.as_array().expect("array").contains(&json!("EV chargers")));

    TestRequest::delete(&format!("/api/customers/{ICP_A}/schedules/ev-chargers"))
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let after = TestRequest::get(&available).send(&service).await.json();
    assert_eq!(after.as_array().map(Vec::len), Some(6));

    TestRequest::delete(&format!("/api/customers/{ICP_A}/schedules/ev-chargers"))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// ## Summary
/// The month calendar spans whole weeks and marks adjacent-month days.
#[test_log::test(tokio::test)]
async fn month_calendar_for_customer() {
    let service = create_test_service();

    TestRequest::put("/api/schedules")
        .json(&json!({
            "icps": [ICP_A],
            "schedule": schedule_json("Hot water", "2026-10-01", "2026-10-31", "0,30 1 * * 1"),
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let calendar = TestRequest::get(&format!(
        "/api/customers/{ICP_A}/calendar?view=month&date=2026-10-19"
    ))
    .send(&service)
    .await
    .assert_status(StatusCode::OK)
    .json();

    assert_eq!(calendar["title"], "October 2026");
    assert_eq!(calendar["start"], "2026-09-27");
    assert_eq!(calendar["end"], "2026-10-31");

    let cells = calendar["cells"].as_array().expect("cells");
    assert_eq!(cells.len(), 35);
    assert_eq!(cells[0]["inCurrentPeriod"], false);
    // Sep 28 is a Monday outside the validity window.
    assert_eq!(cells[1]["occurrences"], json!([]));
    // Oct 5
    assert_eq!(cells[8]["occurrences"][0]["start"], "2026-10-05T01:00:00");
    assert_eq!(cells[8]["occurrences"][0]["durationHours"], 1.0);
}

/// ## Summary
/// ICP ids saved with surrounding whitespace are read and deleted by the bare id.
#[test_log::test(tokio::test)]
async fn padded_icp_is_keyed_trimmed() {
    let service = create_test_service();

    TestRequest::put("/api/schedules")
        .json(&json!({
            "icps": [format!(" {ICP_A} ")],
            "schedule": schedule_json("Solar", "2026-01-01", "2026-12-31", "0 12 * * 0"),
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let listed = TestRequest::get(&format!("/api/customers/{ICP_A}/schedules"))
        .send(&service)
        .await
        .json();
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    TestRequest::delete(&format!("/api/customers/{ICP_A}/schedules/Solar"))
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);
}
