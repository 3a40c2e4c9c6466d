// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Response contract parsing for the three stages.

use crate::error::{AppError, Result};
use crate::services::prompts::Stage;
use serde::de::DeserializeOwned;

/// Substituted when the analysis stage returns no text.
pub const ANALYSIS_FALLBACK: &str = "Analysis unavailable.";

/// Stand-in for an empty structured response.
const EMPTY_STRUCTURE: &str = "{}";

/// Pass the analysis text through unchanged, or the fallback if it is empty.
pub fn parse_analysis(content: Option<String>) -> String {
    match content {
        Some(text) if !text.is_empty() => text,
        _ => ANALYSIS_FALLBACK.to_string(),
    }
}

/// Parse a structured stage response.
///
/// Missing or empty content becomes `{}` and so an empty plan. Anything
/// else, whitespace included, must deserialize into `T`; a failure is fatal
/// for the whole request.
pub fn parse_structured<T: DeserializeOwned>(stage: Stage, content: Option<String>) -> Result<T> {
    let text = content.unwrap_or_default();
    let text = if text.is_empty() {
        tracing::warn!(stage = %stage, "Empty structured response, using empty plan");
        EMPTY_STRUCTURE
    } else {
        text.as_str()
    };

    serde_json::from_str(text).map_err(|e| AppError::Contract {
        stage,
        message: e.to_string(),
    })
}
