//! Application configuration management
//!
//! Configuration is loaded from environment variables at startup and handed
//! to the collaborators explicitly; there is no process-global state. The
//! session secret belongs here rather than on the command line.

use std::env;
use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the contest site
    pub base_url: String,
    /// Session cookie value of an already authenticated account
    pub session: String,
    /// Timeout applied to every standings request
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let session = env::var("ATCODER_SESSION")
            .map_err(|_| ConfigError::Missing("ATCODER_SESSION".to_string()))?;
        if session.trim().is_empty() {
            return Err(ConfigError::InvalidValue("ATCODER_SESSION".to_string()));
        }

        let base_url = normalize_base_url(
            &env::var("ATCODER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        );

        let timeout_seconds: u64 = env::var("HTTP_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| DEFAULT_HTTP_TIMEOUT_SECONDS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HTTP_TIMEOUT_SECONDS".to_string()))?;

        Ok(Self {
            base_url,
            session,
            http_timeout: Duration::from_secs(timeout_seconds),
        })
    }
}

/// Strip trailing slashes so URL joining stays predictable
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
