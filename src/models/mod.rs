// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod goal;
pub mod meal;
pub mod plan;
pub mod workout;

pub use goal::GoalInput;
pub use meal::{Meal, MealPlan};
pub use plan::{GeneratePlanRequest, GeneratedPlan, UserPlan};
pub use workout::{DayPlan, Exercise, WorkoutPlan};
