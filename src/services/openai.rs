// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Model invocation: the completion provider seam and the OpenAI
//! chat-completions client behind it.
//!
//! Every failure (network, HTTP status, malformed envelope) is reported as
//! `AppError::Provider`. Nothing is retried.

use crate::config::Config;
use crate::error::AppError;
use crate::services::prompts::{CompletionRequest, ContentPart, Message};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A service that turns one completion request into raw text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Issue one completion call.
    ///
    /// `Ok(None)` means the provider answered but returned no content.
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, AppError>;
}

/// OpenAI chat-completions client.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Create a client for the given endpoint and model.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            config.openai_base_url.clone(),
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            Duration::from_secs(config.openai_timeout_secs),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_body<'a>(&'a self, request: &'a CompletionRequest) -> ChatCompletionBody<'a> {
        ChatCompletionBody {
            model: &self.model,
            messages: request.messages.iter().map(WireMessage::from).collect(),
            max_tokens: request.max_tokens,
            response_format: request.json_mode.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        }
    }

    /// Check response status and map failures to provider errors.
    async fn check_response(
        &self,
        response: reqwest::Response,
    ) -> Result<ChatCompletionResponse, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Provider rate limit hit (429)");
                return Err(AppError::Provider(AppError::PROVIDER_RATE_LIMIT.to_string()));
            }

            if status.as_u16() == 401 {
                return Err(AppError::Provider(AppError::PROVIDER_AUTH_ERROR.to_string()));
            }

            return Err(AppError::Provider(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, AppError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = self.build_body(request);

        tracing::debug!(
            stage = %request.stage,
            model = %self.model,
            max_tokens = request.max_tokens,
            json_mode = request.json_mode,
            "Calling completion endpoint"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Provider(e.to_string()))?;

        let completion = self.check_response(response).await?;

        if let Some(usage) = &completion.usage {
            tracing::debug!(
                stage = %request.stage,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion received"
            );
        }

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Provider("Response contained no choices".to_string()))?;

        Ok(choice.message.content)
    }
}

// ─── Wire types ──────────────────────────────────────────────

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: WireContent<'a>,
}

/// Text-only messages are sent as a plain string, mixed ones as parts.
#[derive(Serialize)]
#[serde(untagged)]
enum WireContent<'a> {
    Text(&'a str),
    Parts(Vec<WirePart<'a>>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WirePart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: WireImageUrl<'a> },
}

#[derive(Serialize)]
struct WireImageUrl<'a> {
    url: &'a str,
}

impl<'a> From<&'a Message> for WireMessage<'a> {
    fn from(message: &'a Message) -> Self {
        let content = match message.content.as_slice() {
            [ContentPart::Text(text)] => WireContent::Text(text),
            parts => WireContent::Parts(
                parts
                    .iter()
                    .map(|p| match p {
                        ContentPart::Text(text) => WirePart::Text { text },
                        ContentPart::ImageUrl(url) => WirePart::ImageUrl {
                            image_url: WireImageUrl { url },
                        },
                    })
                    .collect(),
            ),
        };

        Self {
            role: message.role.as_str(),
            content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}
