//! Error types shared across ZoomFollow crates.

use std::path::PathBuf;

/// Top-level error type for ZoomFollow operations.
#[derive(Debug, thiserror::Error)]
pub enum ZoomFollowError {
    #[error("Cursor position unavailable: {message}")]
    InputUnavailable { message: String },

    #[error("Platform error: {message}")]
    Platform { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ZoomFollowError.
pub type ZoomFollowResult<T> = Result<T, ZoomFollowError>;

impl ZoomFollowError {
    pub fn input_unavailable(msg: impl Into<String>) -> Self {
        Self::InputUnavailable {
            message: msg.into(),
        }
    }

    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Whether this error only means "no cursor this tick".
    pub fn is_input_unavailable(&self) -> bool {
        matches!(self, Self::InputUnavailable { .. })
    }
}
