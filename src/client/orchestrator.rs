// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client state machine: upload -> generating -> results, with reset.
//!
//! The initial state depends on the snapshot store, which is read exactly
//! once in [`Orchestrator::new`]. After that the store is only written on a
//! successful generation and cleared on reset.

use super::api::PlanApi;
use super::snapshot::{load_persisted_plan, SnapshotStore};
use super::ClientError;
use crate::models::goal::parse_weight_goal;
use crate::models::{GeneratePlanRequest, UserPlan};
use crate::services::image::InlineImage;
use crate::time_utils::format_utc_rfc3339;
use std::path::Path;

/// Status lines shown while generating. They are static: the server sends
/// no per-stage progress.
pub const GENERATING_STAGES: [&str; 3] = [
    "Analyzing body composition",
    "Building workout plan",
    "Creating meal plan",
];

/// Where the client is in the flow.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientState {
    /// Collecting photo and goal
    Upload,
    /// Waiting on the plan request; no interaction possible
    Generating,
    /// Showing an assembled plan
    Results(Box<UserPlan>),
}

impl ClientState {
    pub fn name(&self) -> &'static str {
        match self {
            ClientState::Upload => "upload",
            ClientState::Generating => "generating",
            ClientState::Results(_) => "results",
        }
    }
}

type Observer = Box<dyn Fn(&ClientState) + Send + Sync>;

/// Drives one user's plan from form input to saved results.
pub struct Orchestrator<A: PlanApi, S: SnapshotStore> {
    api: A,
    store: S,
    state: ClientState,
    photo: Option<InlineImage>,
    weight_goal: String,
    observer: Option<Observer>,
}

impl<A: PlanApi, S: SnapshotStore> Orchestrator<A, S> {
    /// Start in `Results` if a saved plan exists, otherwise in `Upload`.
    pub fn new(api: A, store: S) -> Self {
        let state = match load_persisted_plan(&store) {
            Some(plan) => ClientState::Results(Box::new(plan)),
            None => ClientState::Upload,
        };
        tracing::debug!(state = state.name(), "Client initialized");

        Self {
            api,
            store,
            state,
            photo: None,
            weight_goal: String::new(),
            observer: None,
        }
    }

    /// Call `observer` on every state transition.
    pub fn with_observer(mut self, observer: impl Fn(&ClientState) + Send + Sync + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// The plan on display, if any.
    pub fn plan(&self) -> Option<&UserPlan> {
        match &self.state {
            ClientState::Results(plan) => Some(&**plan),
            _ => None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Choose a photo. An oversized photo is rejected and the previous
    /// selection is kept; the state does not change.
    pub fn select_photo(&mut self, bytes: &[u8], mime: &str) -> Result<(), ClientError> {
        self.photo = Some(InlineImage::encode(bytes, mime)?);
        Ok(())
    }

    /// Choose a photo from a file.
    pub fn select_photo_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ClientError> {
        self.photo = Some(InlineImage::from_path(path)?);
        Ok(())
    }

    /// Set the goal as typed. It is parsed and checked on submit.
    pub fn set_weight_goal(&mut self, raw: impl Into<String>) {
        self.weight_goal = raw.into();
    }

    /// Submission is possible only in `Upload` with both fields set.
    pub fn can_submit(&self) -> bool {
        matches!(self.state, ClientState::Upload)
            && self.photo.is_some()
            && !self.weight_goal.trim().is_empty()
    }

    /// Validate the form, request a plan, and save it on success.
    ///
    /// Validation failures issue no request and leave the state at
    /// `Upload`. Any request failure returns to `Upload` with one generic
    /// error; nothing is saved.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        if let ClientState::Results(_) = self.state {
            return Err(ClientError::PlanExists);
        }

        let photo = match (&self.photo, self.weight_goal.trim().is_empty()) {
            (Some(photo), false) => photo.clone(),
            _ => return Err(ClientError::MissingInput),
        };
        let weight_goal = parse_weight_goal(&self.weight_goal).ok_or(ClientError::InvalidGoal)?;

        self.transition(ClientState::Generating);

        let request = GeneratePlanRequest {
            image: Some(photo.as_str().to_string()),
            weight_goal: Some(weight_goal),
        };

        let generated = match self.api.generate(&request).await {
            Ok(generated) => generated,
            Err(e) => {
                tracing::error!(error = %e, "Plan generation failed");
                self.transition(ClientState::Upload);
                return Err(ClientError::GenerationFailed);
            }
        };

        let plan = UserPlan::assemble(
            photo.into_string(),
            weight_goal,
            generated,
            format_utc_rfc3339(chrono::Utc::now()),
        );

        if let Err(e) = self.store.save(&plan) {
            tracing::warn!(error = %e, "Failed to save plan snapshot");
        }

        tracing::info!(
            weight_goal,
            days = plan.workout_plan.weekly_schedule.len(),
            meals = plan.meal_plan.meals.len(),
            "Plan ready"
        );
        self.transition(ClientState::Results(Box::new(plan)));
        Ok(())
    }

    /// Discard the current plan and its snapshot and return to `Upload`.
    ///
    /// A no-op outside `Results`.
    pub fn reset(&mut self) -> Result<(), ClientError> {
        if !matches!(self.state, ClientState::Results(_)) {
            return Ok(());
        }

        self.store
            .clear()
            .map_err(|e| ClientError::Snapshot(e.to_string()))?;

        self.photo = None;
        self.weight_goal.clear();
        self.transition(ClientState::Upload);
        Ok(())
    }

    fn transition(&mut self, next: ClientState) {
        tracing::debug!(from = self.state.name(), to = next.name(), "Client state change");
        self.state = next;
        if let Some(observer) = &self.observer {
            observer(&self.state);
        }
    }
}
