//! Tests for the occurrence endpoints.

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::{TestRequest, create_test_service, schedule_json};

/// ## Summary
/// A one-day validity window yields occurrences on that day only.
#[test_log::test(tokio::test)]
async fn validity_window_boundaries() {
    let service = create_test_service();
    let schedules = json!([schedule_json("Solar", "2026-10-19", "2026-10-19", "0 9 * * 1,2")]);

    for (date, expected) in [("2026-10-18", 0), ("2026-10-19", 1), ("2026-10-20", 0)] {
        let body = TestRequest::post("/api/occurrences/day")
            .json(&json!({ "date": date, "schedules": schedules }))
            .send(&service)
            .await
            .assert_status(StatusCode::OK)
            .json();
        assert_eq!(body.as_array().map(Vec::len), Some(expected), "{date}");
    }
}

/// ## Summary
/// Range results agree with per-day results for every date.
#[test_log::test(tokio::test)]
async fn range_agrees_with_day_queries() {
    let service = create_test_service();
    let schedules = json!([
        schedule_json("Hot water", "2026-01-01", "2026-12-31", "0,30 2 * * 0;0 5 * * 0"),
        schedule_json("EV chargers", "2026-10-20", "2026-10-22", "0 18,19 * * 1,2,3,4,5"),
    ]);

    let range = TestRequest::post("/api/occurrences/range")
        .json(&json!({ "start": "2026-10-18", "end": "2026-10-24", "schedules": schedules }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    let days = range.as_array().expect("array");
    assert_eq!(days.len(), 7);
    for day in days {
        let single = TestRequest::post("/api/occurrences/day")
            .json(&json!({ "date": day["date"], "schedules": schedules }))
            .send(&service)
            .await
            .json();
        assert_eq!(day["occurrences"], single, "{}", day["date"]);
    }
}

/// ## Summary
/// Runs that touch across schedules stay separate.
#[test_log::test(tokio::test)]
async fn schedules_do_not_merge() {
    let service = create_test_service();

    let body = TestRequest::post("/api/occurrences/day")
        .json(&json!({
            "date": "2026-10-19",
            "schedules": [
                schedule_json("Hot water", "2026-01-01", "2026-12-31", "0 9 * * 1"),
                schedule_json("Other loads", "2026-01-01", "2026-12-31", "30 9 * * 1"),
            ],
        }))
        .send(&service)
        .await
        .json();

    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["derType"], "Hot water");
    assert_eq!(body[1]["derType"], "Other loads");
}
