#![allow(unused_must_use)]
//! Tests for control plan management and application.

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::{ICP_A, ICP_B, TestRequest, create_test_service, plan_json};

/// ## Summary
/// Create, list, apply and delete a plan end to end.
#[test_log::test(tokio::test)]
async fn plan_lifecycle() {
    let service = create_test_service();

    let plan = TestRequest::post("/api/plans")
        .json(&plan_json("Evening EV", "EV chargers", "0,30 18,19 * * 1,2,3,4,5"))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    let id = plan["id"].as_str().expect("assigned id").to_string();

    let listed = TestRequest::get("/api/plans").send(&service).await.json();
    assert_eq!(listed[0]["id"], id.as_str());

    let applied = TestRequest::post(&format!("/api/plans/{id}/apply"))
        .json(&json!({ "icps": [ICP_A, ICP_B] }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(applied["planId"], id.as_str());
    assert_eq!(applied["derType"], "EV chargers");

    for icp in [ICP_A, ICP_B] {
        let summary = TestRequest::get(&format!("/api/customers/{icp}"))
            .send(&service)
            .await
            .json();
        assert_eq!(summary["hasSchedule"], true);
        assert_eq!(summary["scheduledDerTypes"], json!(["EV chargers"]));
    }

    TestRequest::delete(&format!("/api/plans/{id}"))
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // Applied schedules outlive the plan.
    let schedules = TestRequest::get(&format!("/api/customers/{ICP_A}/schedules"))
        .send(&service)
        .await
        .json();
    assert_eq!(schedules[0]["planId"], id.as_str());
}

/// ## Summary
/// Re-posting a plan with its id replaces it in place.
#[test_log::test(tokio::test)]
async fn plan_edit_replaces() {
    let service = create_test_service();

    let mut plan = TestRequest::post("/api/plans")
        .json(&plan_json("Midday solar", "Solar", "0 12 * * 0,6"))
        .send(&service)
        .await
        .json();
    plan["name"] = json!("Midday solar (weekends)");

    TestRequest::post("/api/plans")
        .json(&plan)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let listed = TestRequest::get("/api/plans").send(&service).await.json();
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["name"], "Midday solar (weekends)");
}

/// ## Summary
/// Unknown plans are 404 for both apply and delete; name clashes are 409.
#[test_log::test(tokio::test)]
async fn plan_errors() {
    let service = create_test_service();

    TestRequest::post("/api/plans/missing/apply")
        .json(&json!({ "icps": [ICP_A] }))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    TestRequest::delete("/api/plans/missing")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    TestRequest::post("/api/plans")
        .json(&plan_json("Night water", "Hot water", "0 1 * * 1"))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);
    TestRequest::post("/api/plans")
        .json(&plan_json("Night water", "Hot water", "0 2 * * 1"))
        .send(&service)
        .await
        .assert_status(StatusCode::CONFLICT);
}
