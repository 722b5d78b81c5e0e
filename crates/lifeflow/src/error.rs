//! Error types for lifeflow.

use thiserror::Error;

/// Errors that can occur while talking to the task service or the user.
#[derive(Debug, Error)]
pub enum FlowError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Task service returned a non-success response.
    #[error("Task service error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Every save attempt failed.
    #[error("Gave up trying to save this task after {attempts} attempts")]
    GaveUp { attempts: u32 },

    /// Credentials or settings are missing or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = FlowError> = std::result::Result<T, E>;
