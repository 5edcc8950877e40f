//! Custom error types and handling
//!
//! This module defines the application's error types, shared by the fetch,
//! filter, aggregation, and export layers. Every failure path surfaces here
//! and aborts the run; nothing is silently swallowed.

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Caller contract violations
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Collaborator-layer errors
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("File error: {0}")]
    File(String),

    // Startup errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Authentication(_) => "AUTHENTICATION_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::File(_) => "FILE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

// Implement From for common error types
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return AppError::Serialization(err.to_string());
        }
        match err.status() {
            Some(status) if status == reqwest::StatusCode::UNAUTHORIZED => {
                AppError::Authentication("Server rejected the session".to_string())
            }
            Some(status) if status == reqwest::StatusCode::FORBIDDEN => {
                AppError::Authentication("Access to the standings was denied".to_string())
            }
            _ => AppError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
