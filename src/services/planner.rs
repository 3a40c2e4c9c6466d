// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Plan generation service.
//!
//! Handles the core workflow:
//! 1. Validate the goal and accept the image
//! 2. Build the analysis, workout and meal requests
//! 3. Issue all three concurrently; the first failure aborts the plan
//! 4. Parse each response against its contract
//! 5. Assemble the plan in fixed order (analysis, workout, meal)

use crate::error::{AppError, Result};
use crate::models::{GeneratedPlan, GoalInput, MealPlan, WorkoutPlan};
use crate::services::contract::{parse_analysis, parse_structured};
use crate::services::image::InlineImage;
use crate::services::openai::CompletionProvider;
use crate::services::prompts::{build_requests, CompletionRequest};
use std::sync::Arc;
use std::time::Instant;
use validator::Validate;

/// Turns one goal input into one assembled plan.
#[derive(Clone)]
pub struct PlanService {
    provider: Arc<dyn CompletionProvider>,
}

impl PlanService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Generate a plan. All-or-nothing: any stage failure fails the call.
    pub async fn generate(&self, input: &GoalInput) -> Result<GeneratedPlan> {
        input
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let image =
            InlineImage::parse(&input.image).map_err(|e| AppError::BadRequest(e.to_string()))?;

        tracing::info!(weight_goal_kg = input.weight_goal_kg, "Generating plan");
        let started = Instant::now();

        let requests = build_requests(&image, input.weight_goal_kg);

        let (analysis, workout, meal) = tokio::try_join!(
            self.run_stage(&requests.analysis),
            self.run_stage(&requests.workout),
            self.run_stage(&requests.meal),
        )?;

        let plan = GeneratedPlan {
            analysis: parse_analysis(analysis),
            workout_plan: parse_structured::<WorkoutPlan>(requests.workout.stage, workout)?,
            meal_plan: parse_structured::<MealPlan>(requests.meal.stage, meal)?,
        };

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            days = plan.workout_plan.weekly_schedule.len(),
            meals = plan.meal_plan.meals.len(),
            "Plan generated"
        );

        Ok(plan)
    }

    /// One provider call, logged with its stage and timing.
    async fn run_stage(&self, request: &CompletionRequest) -> Result<Option<String>> {
        let started = Instant::now();
        let result = self.provider.complete(request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(content) => tracing::info!(
                stage = %request.stage,
                elapsed_ms,
                response_len = content.as_deref().map_or(0, str::len),
                "Stage complete"
            ),
            Err(e) => tracing::warn!(stage = %request.stage, elapsed_ms, error = %e, "Stage failed"),
        }

        result
    }
}
