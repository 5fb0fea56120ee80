//! Error types for csl-core

use thiserror::Error;

/// Core error type for csl
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: Empty schema name or version where one is required
    #[error("[E003] Empty {context}")]
    EmptyName { context: String },

    /// E004: No current version configured for a schema
    #[error("[E004] No current version configured for schema '{schema}'")]
    UnknownSchema { schema: String },

    /// E005: IO error with file path context
    #[error("[E005] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E006: YAML parse error
    #[error("[E006] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// E007: JSON serialization/deserialization error
    #[error("[E007] JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
