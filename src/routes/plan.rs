// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Plan generation route.

use crate::error::{AppError, Result};
use crate::models::{GeneratePlanRequest, GeneratedPlan, GoalInput};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use std::sync::Arc;

const MISSING_INPUT_MESSAGE: &str = "Image and weight goal are required";

/// Plan routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/generate-plan", post(generate_plan))
}

/// Unpack the wire body into a goal input.
///
/// A goal of exactly 0 counts as missing, matching the web client.
fn goal_input(request: GeneratePlanRequest) -> Result<GoalInput> {
    match (request.image, request.weight_goal) {
        (Some(image), Some(weight_goal_kg)) if !image.trim().is_empty() && weight_goal_kg != 0.0 => {
            Ok(GoalInput {
                image,
                weight_goal_kg,
            })
        }
        _ => Err(AppError::BadRequest(MISSING_INPUT_MESSAGE.to_string())),
    }
}

/// Generate analysis, workout plan and meal plan for one photo and goal.
async fn generate_plan(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<GeneratePlanRequest>, JsonRejection>,
) -> Result<Json<GeneratedPlan>> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!(status = %e.status(), error = %e.body_text(), "Rejected plan request body");
        AppError::BadRequest(e.body_text())
    })?;

    let input = goal_input(request)?;
    let plan = state.planner.generate(&input).await?;

    Ok(Json(plan))
}
