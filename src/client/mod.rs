// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client side: the plan API caller, the single-slot snapshot store and the
//! upload / generating / results state machine that ties them together.

pub mod api;
pub mod orchestrator;
pub mod snapshot;

pub use api::{HttpPlanApi, PlanApi};
pub use orchestrator::{ClientState, Orchestrator, GENERATING_STAGES};
pub use snapshot::{load_persisted_plan, FileSnapshotStore, MemorySnapshotStore, SnapshotStore};

use crate::services::image::ImageError;

/// User-facing client errors.
///
/// Every downstream failure collapses into `GenerationFailed`; the cause is
/// logged, not shown.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Please choose a photo and set your weight goal")]
    MissingInput,

    #[error("Weight goal must be between 0.1 and 50 kg")]
    InvalidGoal,

    #[error("The photo must be at most 5 MB")]
    ImageTooLarge,

    #[error("The photo could not be read: {0}")]
    Image(String),

    #[error("A plan is already shown; start over to create a new one")]
    PlanExists,

    #[error("Failed to generate plan. Please try again.")]
    GenerationFailed,

    #[error("Could not save plan: {0}")]
    Snapshot(String),
}

impl From<ImageError> for ClientError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::TooLarge { .. } => ClientError::ImageTooLarge,
            other => ClientError::Image(other.to_string()),
        }
    }
}
