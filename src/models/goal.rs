// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weight-loss goal input and its range checks.

use serde::Deserialize;
use validator::Validate;

/// Largest weight-loss goal accepted, in kilograms.
pub const MAX_WEIGHT_GOAL_KG: f64 = 50.0;

/// One plan-generation request after the wire body has been unpacked.
/// Created per request and dropped once the plan is assembled.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GoalInput {
    /// Inline image (data URL) or a remote image URL.
    #[validate(length(min = 1, message = "image must not be empty"))]
    pub image: String,
    #[validate(range(
        exclusive_min = 0.0,
        max = 50.0,
        message = "weight goal must be greater than 0 and at most 50 kg"
    ))]
    pub weight_goal_kg: f64,
}

/// Check a goal against the accepted range (0, 50].
pub fn is_valid_weight_goal(kg: f64) -> bool {
    kg.is_finite() && kg > 0.0 && kg <= MAX_WEIGHT_GOAL_KG
}

/// Parse a goal typed by the user.
///
/// Returns `None` for anything that is not a number in (0, 50].
pub fn parse_weight_goal(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|kg| is_valid_weight_goal(*kg))
}
