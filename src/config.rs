//! Application configuration loaded from environment variables.
//!
//! The provider API key is read once at startup and kept in memory.

use std::env;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
const DEFAULT_OPENAI_TIMEOUT_SECS: u64 = 120;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Chat-completions base URL (no trailing slash)
    pub openai_base_url: String,
    /// Vision-capable model used for all three stages
    pub openai_model: String,
    /// Per-request timeout for provider calls
    pub openai_timeout_secs: u64,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,

    // --- Secrets ---
    /// Provider API key
    pub openai_api_key: String,
}

impl Config {
    /// Config for tests only. Points the provider at an unroutable address.
    pub fn test_default() -> Self {
        Self {
            openai_base_url: "http://127.0.0.1:9/v1".to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_timeout_secs: 5,
            frontend_url: "http://localhost:3000".to_string(),
            port: 8080,
            openai_api_key: "test_api_key".to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let openai_api_key = env::var("OPENAI_API_KEY")
            .map(|v| v.trim().to_string())
            .map_err(|_| ConfigError::Missing("OPENAI_API_KEY"))?;
        if openai_api_key.is_empty() {
            return Err(ConfigError::Invalid("OPENAI_API_KEY", "must not be empty"));
        }

        Ok(Self {
            openai_base_url: env::var("OPENAI_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            openai_timeout_secs: env::var("OPENAI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_OPENAI_TIMEOUT_SECS),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            openai_api_key,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}
