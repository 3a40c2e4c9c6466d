// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use fitplan::config::Config;
use fitplan::error::AppError;
use fitplan::routes::create_router;
use fitplan::services::prompts::{CompletionRequest, Stage};
use fitplan::services::{CompletionProvider, PlanService};
use fitplan::AppState;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Canned reply for one stage.
#[derive(Clone)]
#[allow(dead_code)]
pub enum Reply {
    Text(String),
    Empty,
    Fail(String),
}

/// Completion provider that answers each stage from a script.
#[derive(Default)]
#[allow(dead_code)]
pub struct ScriptedProvider {
    replies: HashMap<Stage, Reply>,
    calls: Mutex<Vec<CompletionRequest>>,
}

#[allow(dead_code)]
impl ScriptedProvider {
    /// Provider that answers every stage successfully.
    pub fn happy() -> Self {
        Self::default()
            .reply(Stage::Analysis, Reply::Text(ANALYSIS_TEXT.to_string()))
            .reply(Stage::Workout, Reply::Text(workout_json(5, 6)))
            .reply(Stage::Meal, Reply::Text(meal_json(5)))
    }

    pub fn reply(mut self, stage: Stage, reply: Reply) -> Self {
        self.replies.insert(stage, reply);
        self
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, AppError> {
        self.calls.lock().unwrap().push(request.clone());
        match self.replies.get(&request.stage) {
            Some(Reply::Text(text)) => Ok(Some(text.clone())),
            Some(Reply::Empty) | None => Ok(None),
            Some(Reply::Fail(msg)) => Err(AppError::Provider(msg.clone())),
        }
    }
}

#[allow(dead_code)]
pub const ANALYSIS_TEXT: &str =
    "You have a solid base to build on. Your posture looks good. Consistent training will help you reach your goal.";

/// Workout JSON with `days` days of `per_day` exercises.
#[allow(dead_code)]
pub fn workout_json(days: usize, per_day: usize) -> String {
    let names = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
    let schedule: Vec<_> = (0..days)
        .map(|d| {
            json!({
                "day": format!("{} - Workout {}", names[d % names.len()], d + 1),
                "exercises": (0..per_day).map(|e| json!({
                    "name": format!("Exercise {}", e + 1),
                    "sets": "3 sets",
                    "reps": "12-15 reps",
                    "rest": "60s rest"
                })).collect::<Vec<_>>()
            })
        })
        .collect();

    json!({
        "weeklySchedule": schedule,
        "tips": ["Warm up first", "Stay hydrated", "Sleep well"]
    })
    .to_string()
}

/// Meal JSON with `meals` meals of 300 kcal each.
#[allow(dead_code)]
pub fn meal_json(meals: usize) -> String {
    let list: Vec<_> = (0..meals)
        .map(|m| {
            json!({
                "time": format!("{:02}:00", 7 + m * 3),
                "name": format!("Meal {}", m + 1),
                "foods": ["100g chicken breast", "1 cup rice"],
                "calories": 300
            })
        })
        .collect();

    json!({
        "dailyCalories": 300 * meals,
        "meals": list,
        "tips": ["Eat slowly", "Prefer whole foods", "Plan ahead"]
    })
    .to_string()
}

/// A small valid PNG-ish payload as a data URL.
#[allow(dead_code)]
pub fn test_image() -> String {
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==".to_string()
}

/// Create a test app over the given provider.
/// Returns the router and the provider for call inspection.
#[allow(dead_code)]
pub fn create_test_app(provider: ScriptedProvider) -> (axum::Router, Arc<ScriptedProvider>) {
    let provider = Arc::new(provider);
    let state = Arc::new(AppState {
        config: Config::test_default(),
        planner: PlanService::new(provider.clone()),
    });

    (create_router(state), provider)
}
