// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Assembled plan types: the API response and the client snapshot.

use super::{MealPlan, WorkoutPlan};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Response body of `POST /api/generate-plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GeneratedPlan {
    pub analysis: String,
    pub workout_plan: WorkoutPlan,
    pub meal_plan: MealPlan,
}

/// A complete plan as held by the client.
///
/// This is the unit of persistence: the snapshot store holds at most one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserPlan {
    /// The submitted photo as a data URL
    pub photo: String,
    pub weight_goal: f64,
    pub current_analysis: String,
    pub workout_plan: WorkoutPlan,
    pub meal_plan: MealPlan,
    /// RFC 3339 UTC timestamp
    pub created_at: String,
}

impl UserPlan {
    /// Combine a generated plan with the inputs that produced it.
    pub fn assemble(photo: String, weight_goal: f64, plan: GeneratedPlan, created_at: String) -> Self {
        Self {
            photo,
            weight_goal,
            current_analysis: plan.analysis,
            workout_plan: plan.workout_plan,
            meal_plan: plan.meal_plan,
            created_at,
        }
    }
}

/// Request body of `POST /api/generate-plan`.
///
/// Both fields are optional on the wire so that a missing one is reported
/// as a bad request rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GeneratePlanRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_goal: Option<f64>,
}
