// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Prompt construction for the three plan stages.
//!
//! Each stage gets a fixed persona and, for the structured stages, the exact
//! JSON shape the parser expects. Nothing here checks that the model will
//! comply; that is the contract parser's job.

use crate::services::image::InlineImage;
use std::fmt;

/// Output ceiling for the body analysis.
pub const ANALYSIS_MAX_TOKENS: u32 = 300;
/// Output ceiling for the workout and meal plans.
pub const PLAN_MAX_TOKENS: u32 = 2000;

const ANALYSIS_PROMPT: &str = "Analyze this body photo and give a brief, motivating assessment of \
the person's current body composition. Be professional, respectful and encouraging. Focus on \
positive aspects and areas for improvement. Maximum 3 sentences.";

const WORKOUT_SHAPE: &str = r#"{
  "weeklySchedule": [
    {
      "day": "Monday - Workout A",
      "exercises": [
        {
          "name": "Exercise name",
          "sets": "3 sets",
          "reps": "12-15 reps",
          "rest": "60s rest"
        }
      ]
    }
  ],
  "tips": [
    "Tip 1",
    "Tip 2",
    "Tip 3"
  ]
}"#;

const MEAL_SHAPE: &str = r#"{
  "dailyCalories": 1800,
  "meals": [
    {
      "time": "07:00",
      "name": "Breakfast",
      "foods": [
        "Food 1 with quantity",
        "Food 2 with quantity"
      ],
      "calories": 400
    }
  ],
  "tips": [
    "Nutrition tip 1",
    "Nutrition tip 2",
    "Nutrition tip 3"
  ]
}"#;

/// The three plan stages, in assembly order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Analysis,
    Workout,
    Meal,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Analysis, Stage::Workout, Stage::Meal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Analysis => "analysis",
            Stage::Workout => "workout",
            Stage::Meal => "meal",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chat role of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

/// One part of a message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text(String),
    /// Image URL or data URL, for vision-capable models
    ImageUrl(String),
}

/// A role-tagged chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: vec![ContentPart::Text(text.into())],
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentPart::Text(text.into())],
        }
    }

    /// User turn carrying text followed by an image.
    pub fn user_with_image(text: impl Into<String>, image: &InlineImage) -> Self {
        Self {
            role: Role::User,
            content: vec![
                ContentPart::Text(text.into()),
                ContentPart::ImageUrl(image.as_str().to_string()),
            ],
        }
    }

    pub fn has_image(&self) -> bool {
        self.content
            .iter()
            .any(|p| matches!(p, ContentPart::ImageUrl(_)))
    }
}

/// Provider-independent description of one completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub stage: Stage,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    /// Ask the provider for its native JSON output mode
    pub json_mode: bool,
}

/// The three independent requests behind one plan.
#[derive(Debug, Clone)]
pub struct PlanRequests {
    pub analysis: CompletionRequest,
    pub workout: CompletionRequest,
    pub meal: CompletionRequest,
}

/// Build the analysis, workout and meal requests for one goal.
pub fn build_requests(image: &InlineImage, weight_goal_kg: f64) -> PlanRequests {
    PlanRequests {
        analysis: analysis_request(image),
        workout: workout_request(weight_goal_kg),
        meal: meal_request(weight_goal_kg),
    }
}

fn analysis_request(image: &InlineImage) -> CompletionRequest {
    CompletionRequest {
        stage: Stage::Analysis,
        messages: vec![Message::user_with_image(ANALYSIS_PROMPT, image)],
        max_tokens: ANALYSIS_MAX_TOKENS,
        json_mode: false,
    }
}

fn workout_request(weight_goal_kg: f64) -> CompletionRequest {
    let system = format!(
        "You are a personal trainer specialized in home workouts. Create a complete, detailed \
weekly workout plan to lose {weight_goal_kg}kg. The plan must use exercises that can be done at \
home with no equipment or with basic household items (bottles, chairs, etc).

Return ONLY valid JSON in the following format:
{WORKOUT_SHAPE}

Create a 5-day plan (Monday to Friday) with 5-6 exercises per day. Include a warm-up and \
stretching. Be specific and practical."
    );

    CompletionRequest {
        stage: Stage::Workout,
        messages: vec![
            Message::system(system),
            Message::user(format!(
                "Create a home workout plan to lose {weight_goal_kg}kg."
            )),
        ],
        max_tokens: PLAN_MAX_TOKENS,
        json_mode: true,
    }
}

fn meal_request(weight_goal_kg: f64) -> CompletionRequest {
    let system = format!(
        "You are a nutritionist specialized in healthy weight loss. Create a complete, balanced \
daily meal plan to lose {weight_goal_kg}kg.

Return ONLY valid JSON in the following format:
{MEAL_SHAPE}

Create 5-6 meals per day (breakfast, morning snack, lunch, afternoon snack, dinner, optional \
supper). Be specific with quantities and calories. Focus on healthy, affordable and practical \
foods."
    );

    CompletionRequest {
        stage: Stage::Meal,
        messages: vec![
            Message::system(system),
            Message::user(format!(
                "Create a meal plan to lose {weight_goal_kg}kg in a healthy way."
            )),
        ],
        max_tokens: PLAN_MAX_TOKENS,
        json_mode: true,
    }
}
