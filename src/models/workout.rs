// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly home workout plan returned by the workout stage.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Weekly workout plan.
///
/// Top-level fields default to empty so that an empty `{}` response parses
/// into a plan with no days and no tips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutPlan {
    #[serde(default)]
    pub weekly_schedule: Vec<DayPlan>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl WorkoutPlan {
    /// True when the model returned no schedule at all.
    pub fn is_empty(&self) -> bool {
        self.weekly_schedule.is_empty()
    }

    /// Total number of exercises across the week.
    pub fn exercise_count(&self) -> usize {
        self.weekly_schedule.iter().map(|d| d.exercises.len()).sum()
    }
}

/// One training day (e.g. "Monday - Workout A").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DayPlan {
    pub day: String,
    pub exercises: Vec<Exercise>,
}

/// A single exercise. Every field is free text as written by the model
/// ("3 sets", "12-15 reps", "60s rest").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Exercise {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub rest: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_empty_plan() {
        let plan: WorkoutPlan = serde_json::from_str("{}").unwrap();
        assert!(plan.is_empty());
        assert!(plan.tips.is_empty());
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{
            "weeklySchedule": [
                {"day": "Monday - Workout A", "exercises": [
                    {"name": "Squats", "sets": "3 sets", "reps": "15 reps", "rest": "60s rest"}
                ]}
            ],
            "tips": ["Drink water"]
        }"#;
        let plan: WorkoutPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.weekly_schedule.len(), 1);
        assert_eq!(plan.exercise_count(), 1);
        assert_eq!(plan.weekly_schedule[0].exercises[0].reps, "15 reps");

        let out = serde_json::to_value(&plan).unwrap();
        assert!(out.get("weeklySchedule").is_some());
    }

    #[test]
    fn test_exercise_requires_all_fields() {
        let json = r#"{"weeklySchedule": [{"day": "Monday", "exercises": [{"name": "Plank"}]}]}"#;
        assert!(serde_json::from_str::<WorkoutPlan>(json).is_err());
    }
}
