// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod contract;
pub mod image;
pub mod openai;
pub mod planner;
pub mod prompts;

pub use image::{ImageError, InlineImage};
pub use openai::{CompletionProvider, OpenAiClient};
pub use planner::PlanService;
pub use prompts::Stage;
