// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Integration tests for the plan generation endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{Reply, ScriptedProvider};
use fitplan::services::Stage;
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

const BODY_LIMIT: usize = 1024 * 1024;

async fn post_plan(app: axum::Router, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate-plan")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_generate_plan_success() {
    let (app, provider) = common::create_test_app(ScriptedProvider::happy());

    let body = json!({ "image": common::test_image(), "weightGoal": 5 }).to_string();
    let (status, json) = post_plan(app, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["analysis"], common::ANALYSIS_TEXT);
    assert_eq!(json["workoutPlan"]["weeklySchedule"].as_array().unwrap().len(), 5);
    let meals = json["mealPlan"]["meals"].as_array().unwrap().len();
    assert!((5..=6).contains(&meals));
    assert_eq!(json["mealPlan"]["dailyCalories"], 1500);
    assert_eq!(provider.call_count(), 3);
}

#[tokio::test]
async fn test_missing_image_is_bad_request() {
    let (app, provider) = common::create_test_app(ScriptedProvider::happy());

    let (status, json) = post_plan(app, json!({ "weightGoal": 5 }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "bad_request");
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_missing_goal_is_bad_request() {
    let (app, provider) = common::create_test_app(ScriptedProvider::happy());

    let body = json!({ "image": common::test_image() }).to_string();
    let (status, _) = post_plan(app, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_goal_out_of_range_is_bad_request() {
    for goal in [json!(0), json!(-2), json!(50.5), json!(120)] {
        let (app, provider) = common::create_test_app(ScriptedProvider::happy());

        let body = json!({ "image": common::test_image(), "weightGoal": goal }).to_string();
        let (status, _) = post_plan(app, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "goal {goal}");
        assert_eq!(provider.call_count(), 0, "goal {goal}");
    }
}

#[tokio::test]
async fn test_goal_at_upper_bound_is_accepted() {
    let (app, _) = common::create_test_app(ScriptedProvider::happy());

    let body = json!({ "image": common::test_image(), "weightGoal": 50 }).to_string();
    let (status, _) = post_plan(app, body).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (app, _) = common::create_test_app(ScriptedProvider::happy());

    let (status, json) = post_plan(app, "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "bad_request");
}

#[tokio::test]
async fn test_provider_failure_is_generic_server_error() {
    let provider = ScriptedProvider::happy().reply(Stage::Meal, Reply::Fail("boom".to_string()));
    let (app, _) = common::create_test_app(provider);

    let body = json!({ "image": common::test_image(), "weightGoal": 5 }).to_string();
    let (status, json) = post_plan(app, body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "plan_generation_failed");
    assert!(!json.to_string().contains("boom"));
}

#[tokio::test]
async fn test_unparseable_workout_is_server_error() {
    let provider = ScriptedProvider::happy()
        .reply(Stage::Workout, Reply::Text("Here is your plan!".to_string()));
    let (app, _) = common::create_test_app(provider);

    let body = json!({ "image": common::test_image(), "weightGoal": 5 }).to_string();
    let (status, json) = post_plan(app, body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "plan_generation_failed");
}

#[tokio::test]
async fn test_empty_workout_yields_empty_structure() {
    let provider = ScriptedProvider::happy().reply(Stage::Workout, Reply::Empty);
    let (app, _) = common::create_test_app(provider);

    let body = json!({ "image": common::test_image(), "weightGoal": 5 }).to_string();
    let (status, json) = post_plan(app, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["workoutPlan"]["weeklySchedule"], json!([]));
    assert_eq!(json["workoutPlan"]["tips"], json!([]));
    assert_eq!(json["mealPlan"]["meals"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_empty_analysis_uses_fallback() {
    let provider = ScriptedProvider::happy().reply(Stage::Analysis, Reply::Empty);
    let (app, _) = common::create_test_app(provider);

    let body = json!({ "image": common::test_image(), "weightGoal": 5 }).to_string();
    let (status, json) = post_plan(app, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["analysis"],
        fitplan::services::contract::ANALYSIS_FALLBACK
    );
}

#[tokio::test]
async fn test_large_inline_image_within_body_limit() {
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    let (app, _) = common::create_test_app(ScriptedProvider::happy());

    // 4 MiB photo: above axum's default body limit once encoded.
    let image = format!(
        "data:image/jpeg;base64,{}",
        STANDARD.encode(vec![0x5Au8; 4 * 1024 * 1024])
    );
    let body = json!({ "image": image, "weightGoal": 5 }).to_string();
    let (status, _) = post_plan(app, body).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_oversized_inline_image_rejected() {
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    let (app, provider) = common::create_test_app(ScriptedProvider::happy());

    let image = format!(
        "data:image/jpeg;base64,{}",
        STANDARD.encode(vec![0x5Au8; 5 * 1024 * 1024 + 1])
    );
    let body = json!({ "image": image, "weightGoal": 5 }).to_string();
    let (status, _) = post_plan(app, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = common::create_test_app(ScriptedProvider::happy());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
}
