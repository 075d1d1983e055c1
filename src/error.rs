/// Errors raised while building, serializing, or writing a scene.
use std::path::PathBuf;
use thiserror::Error;

use crate::core::config::ConfigError;

#[derive(Debug, Error)]
pub enum SceneError {
    /// A construction argument was rejected (empty name, empty text, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to write scene to '{}': {}", path.display(), source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl SceneError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Reject empty strings for the named argument.
pub(crate) fn require_non_empty(value: &str, what: &str) -> Result<(), SceneError> {
    if value.is_empty() {
        return Err(SceneError::invalid(format!("{what} must not be empty")));
    }
    Ok(())
}
