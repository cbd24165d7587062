//! Integration tests for footprint HTTP endpoints.
//!
//! These tests drive the full router against the in-memory repository:
//! 1. Caller identity is required on user-scoped routes
//! 2. Baselines are stored and read back
//! 3. What-if and daily logs compare against the stored baseline

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use carbon_footprint::adapters::http::{api_router, FootprintAppState};
use carbon_footprint::adapters::InMemoryFootprintRepository;
use carbon_footprint::domain::footprint::{
    CategoryScale, EmissionFactors, FootprintEngine, DEFAULT_RECOMMENDATION_LIMIT,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

const USER: &str = "user-123";

fn app() -> Router {
    app_with_engine(FootprintEngine::standard())
}

fn app_with_engine(engine: FootprintEngine) -> Router {
    let state = FootprintAppState::new(Arc::new(InMemoryFootprintRepository::new()), engine, false);
    api_router(state)
}

fn complete_profile() -> Value {
    json!({
        "transport": { "primaryMode": "bus" },
        "diet": {
            "mealsPerDay": 3,
            "meatPercentage": 50,
            "dairyPercentage": 25,
            "plantPercentage": 25
        },
        "electricity": { "monthlyKwh": 300, "householdSize": 3 },
        "lifestyle": {}
    })
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    user: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

// =============================================================================
// Health and Estimate
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn estimate_needs_no_identity() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/footprint/estimate",
        None,
        Some(complete_profile()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 9.08);
    assert_eq!(body["unit"], "kg CO2e per day");
    assert_eq!(body["category"], "Moderate");
    assert!(!body["recommendations"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn estimate_of_empty_profile_is_zero() {
    let (status, body) = send(&app(), "POST", "/api/footprint/estimate", None, Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0.0);
    assert_eq!(body["category"], "Low");
}

#[tokio::test]
async fn impact_scale_changes_labels() {
    let engine = FootprintEngine::new(
        Arc::new(EmissionFactors::standard()),
        CategoryScale::Impact,
        DEFAULT_RECOMMENDATION_LIMIT,
    );
    let app = app_with_engine(engine);

    let (_, body) = send(&app, "POST", "/api/footprint/estimate", None, Some(json!({}))).await;
    assert_eq!(body["category"], "Low Impact");
}

// =============================================================================
// Baseline
// =============================================================================

#[tokio::test]
async fn baseline_routes_require_identity() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/footprint/baseline", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let (status, _) = send(
        &app,
        "POST",
        "/api/footprint/baseline",
        Some("   "),
        Some(complete_profile()),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn baseline_not_found_before_submission() {
    let (status, body) = send(&app(), "GET", "/api/footprint/baseline", Some(USER), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "BASELINE_NOT_FOUND");
}

#[tokio::test]
async fn baseline_round_trips_per_user() {
    let app = app();

    let (status, created) = send(
        &app,
        "POST",
        "/api/footprint/baseline",
        Some(USER),
        Some(complete_profile()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["userId"], USER);
    assert_eq!(created["total"], 9.08);

    let (status, fetched) = send(&app, "GET", "/api/footprint/baseline", Some(USER), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["total"], created["total"]);
    assert_eq!(fetched["profile"]["diet"]["mealsPerDay"], 3);

    let (status, _) = send(&app, "GET", "/api/footprint/baseline", Some("someone-else"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn incomplete_baseline_is_rejected_with_field() {
    let mut profile = complete_profile();
    profile["diet"]["plantPercentage"] = json!(10);

    let (status, body) = send(
        &app(),
        "POST",
        "/api/footprint/baseline",
        Some(USER),
        Some(profile),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FORMAT");
    assert_eq!(body["details"]["field"], "diet");
}

// =============================================================================
// What-if
// =============================================================================

#[tokio::test]
async fn what_if_requires_baseline() {
    let (status, _) = send(
        &app(),
        "POST",
        "/api/footprint/what-if",
        Some(USER),
        Some(json!({ "override": {} })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn what_if_reports_delta_without_storing() {
    let app = app();
    send(&app, "POST", "/api/footprint/baseline", Some(USER), Some(complete_profile())).await;

    let over = json!({
        "override": {
            "diet": { "meatPercentage": 0, "dairyPercentage": 0, "plantPercentage": 100 }
        }
    });
    let (status, body) = send(&app, "POST", "/api/footprint/what-if", Some(USER), Some(over)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["baseline"]["total"], 9.08);
    assert_eq!(body["adjusted"]["breakdown"]["diet"], 1.8);
    assert_eq!(body["delta"], -4.2);
    assert_eq!(body["category"], "Low");

    let (_, stored) = send(&app, "GET", "/api/footprint/baseline", Some(USER), None).await;
    assert_eq!(stored["total"], 9.08);
}

// =============================================================================
// Daily Logs
// =============================================================================

#[tokio::test]
async fn daily_log_compares_with_baseline() {
    let app = app();
    send(&app, "POST", "/api/footprint/baseline", Some(USER), Some(complete_profile())).await;

    let day = json!({ "diet": { "mealsToday": 3 }, "steps": 10000 });
    let (status, body) = send(&app, "POST", "/api/footprint/daily-logs", Some(USER), Some(day)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["total"], 1.8);
    assert_eq!(body["avoided"], 1.6);
    assert_eq!(body["netTotal"], 0.2);
    assert_eq!(body["baselineTotal"], 9.08);
    assert_eq!(body["differenceFromBaseline"], -7.28);
}

#[tokio::test]
async fn daily_log_without_baseline_omits_comparison() {
    let day = json!({ "diet": { "mealsToday": 3 } });
    let (status, body) = send(&app(), "POST", "/api/footprint/daily-logs", Some(USER), Some(day)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("baselineTotal").is_none());
    assert!(body.get("differenceFromBaseline").is_none());
}

#[tokio::test]
async fn daily_logs_listed_newest_first_with_limit() {
    let app = app();
    for meals in 1..=3 {
        let day = json!({ "diet": { "mealsToday": meals } });
        send(&app, "POST", "/api/footprint/daily-logs", Some(USER), Some(day)).await;
    }

    let (status, body) = send(&app, "GET", "/api/footprint/daily-logs?limit=2", Some(USER), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs[0]["input"]["diet"]["mealsToday"], 3);
    assert_eq!(logs[1]["input"]["diet"]["mealsToday"], 2);

    let (status, body) = send(&app, "GET", "/api/footprint/daily-logs", Some("nobody"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn daily_log_limit_out_of_range() {
    let (status, body) = send(
        &app(),
        "GET",
        "/api/footprint/daily-logs?limit=0",
        Some(USER),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "OUT_OF_RANGE");
}

#[tokio::test]
async fn negative_distance_is_rejected() {
    let day = json!({ "transport": { "mode": "bus", "distanceKm": -3 } });
    let (status, body) = send(&app(), "POST", "/api/footprint/daily-logs", Some(USER), Some(day)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "transport.distanceKm");
}
