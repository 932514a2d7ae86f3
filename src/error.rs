//! Structured error types for device and strategy lookups.

use serde::Serialize;
use std::path::PathBuf;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Device config errors
    DeviceConfigUnreadable,
    DeviceConfigInvalid,

    // Strategy errors
    StrategyNotFound,

    // Settings errors
    InvalidSettings,
}

/// A page strategy element that the store could not provide.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("page strategy element not found: {strategy}/{element}")]
pub struct StrategyNotFound {
    pub strategy: String,
    pub element: String,
}

impl StrategyNotFound {
    pub fn new(strategy: impl Into<String>, element: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            element: element.into(),
        }
    }
}

/// Errors surfaced to callers of this crate.
#[derive(Debug, thiserror::Error)]
pub enum TalError {
    /// Device config file missing or unreadable.
    #[error("failed to read device config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Device config is not valid JSON or has the wrong shape.
    #[error("invalid device config '{key}': {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    StrategyNotFound(#[from] StrategyNotFound),

    /// Neither the device's strategy nor the default one provides the element.
    #[error(
        "page strategy element '{element}' not found in strategy '{strategy}' or fallback '{}'",
        crate::strategy::DEFAULT_STRATEGY
    )]
    Unresolved { strategy: String, element: String },

    #[error("invalid settings: {0}")]
    Settings(String),
}

impl TalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TalError::Io { .. } => ErrorCode::DeviceConfigUnreadable,
            TalError::Deserialize { .. } => ErrorCode::DeviceConfigInvalid,
            TalError::StrategyNotFound(_) | TalError::Unresolved { .. } => {
                ErrorCode::StrategyNotFound
            }
            TalError::Settings(_) => ErrorCode::InvalidSettings,
        }
    }

    /// JSON body used for error output on the command line.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code(),
            "message": self.to_string(),
        })
    }
}

/// Result type for device and strategy operations.
pub type Result<T> = std::result::Result<T, TalError>;
