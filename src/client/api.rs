// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client for the plan generation endpoint.

use crate::models::{GeneratePlanRequest, GeneratedPlan};
use async_trait::async_trait;
use serde::Deserialize;

/// The single network call the orchestrator makes.
#[async_trait]
pub trait PlanApi: Send + Sync {
    async fn generate(&self, request: &GeneratePlanRequest) -> Result<GeneratedPlan, ApiError>;
}

/// HTTP implementation against a running FitPlan server.
#[derive(Clone)]
pub struct HttpPlanApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPlanApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PlanApi for HttpPlanApi {
    async fn generate(&self, request: &GeneratePlanRequest) -> Result<GeneratedPlan, ApiError> {
        let url = format!("{}/api/generate-plan", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.details.unwrap_or(b.error))
                .unwrap_or(body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    details: Option<String>,
}

/// Errors from the plan endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),
}
