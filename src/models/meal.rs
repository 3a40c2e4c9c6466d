// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily meal plan returned by the meal stage.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Daily meal plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MealPlan {
    #[serde(default)]
    pub daily_calories: u32,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl MealPlan {
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

/// One meal of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Meal {
    /// Time of day, e.g. "07:00"
    pub time: String,
    pub name: String,
    /// Foods with quantities, e.g. "2 boiled eggs"
    pub foods: Vec<String>,
    pub calories: u32,
}
