// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FitPlan API Server
//!
//! Generates a body analysis, a home workout plan and a meal plan from a
//! photo and a weight-loss goal using a multimodal language model.

use fitplan::{
    config::Config,
    services::{OpenAiClient, PlanService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting FitPlan API");

    // Initialize model provider
    let provider = OpenAiClient::from_config(&config)?;
    tracing::info!(
        model = %provider.model(),
        base_url = %config.openai_base_url,
        "Model provider initialized"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        planner: PlanService::new(Arc::new(provider)),
    });

    // Build router
    let app = fitplan::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fitplan=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
