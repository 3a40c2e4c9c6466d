// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! FitPlan: personal workout and meal plans from a body photo
//!
//! This crate provides the backend API that turns one photo and one
//! weight-loss goal into a body analysis, a weekly home workout plan and a
//! daily meal plan, plus the client that drives it and keeps the latest
//! plan on disk.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::PlanService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub planner: PlanService,
}
