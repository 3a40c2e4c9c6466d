// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use crate::services::prompts::Stage;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Message shown to callers for every downstream failure.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate plan. Please try again.";

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Model provider error: {0}")]
    Provider(String),

    #[error("{stage} response is not valid plan JSON: {message}")]
    Contract { stage: Stage, message: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub const PROVIDER_AUTH_ERROR: &'static str = "Provider rejected credentials";
    pub const PROVIDER_RATE_LIMIT: &'static str = "Provider rate limit exceeded";

    /// True for errors raised by the model provider or by its output,
    /// which callers see as one generic failure.
    pub fn is_downstream(&self) -> bool {
        matches!(self, AppError::Provider(_) | AppError::Contract { .. })
    }

    pub fn is_provider_auth_error(&self) -> bool {
        matches!(self, AppError::Provider(msg) if msg == Self::PROVIDER_AUTH_ERROR)
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::Provider(msg) => {
                tracing::error!(error = %msg, "Model provider error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "plan_generation_failed",
                    Some(GENERATION_FAILED_MESSAGE.to_string()),
                )
            }
            AppError::Contract { stage, message } => {
                tracing::error!(stage = %stage, error = %message, "Model output violated plan contract");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "plan_generation_failed",
                    Some(GENERATION_FAILED_MESSAGE.to_string()),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
