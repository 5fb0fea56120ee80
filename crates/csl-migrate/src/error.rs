//! Error types for csl-migrate

use crate::edge::TransformError;
use thiserror::Error;

/// Migration engine errors
#[derive(Error, Debug)]
pub enum MigrateError {
    /// MG001: No chain of registered edges connects the two versions
    #[error("[MG001] No migration path found for schema '{schema}' from version {from} to {to}.")]
    NoPath {
        schema: String,
        from: String,
        to: String,
    },

    /// MG002: A transform in the chain failed
    ///
    /// `source` is the transform's own error, untouched.
    #[error("[MG002] Migration of schema '{schema}' failed at step {step} ({from} -> {to}): {source}")]
    Transform {
        schema: String,
        /// Zero-based position of the failing edge in the resolved path
        step: usize,
        from: String,
        to: String,
        source: TransformError,
    },

    /// MG003: Strict registration found an edge with the same endpoints
    #[error("[MG003] Duplicate migration for schema '{schema}' from version {from} to {to}")]
    DuplicateEdge {
        schema: String,
        from: String,
        to: String,
    },

    /// MG004: Strict registration found an edge whose endpoints are equal
    #[error("[MG004] Migration for schema '{schema}' maps version {version} onto itself")]
    SelfLoop { schema: String, version: String },
}

impl MigrateError {
    /// Recover the original error returned by a failing transform.
    ///
    /// Returns `None` for every other variant.
    pub fn into_transform_error(self) -> Option<TransformError> {
        match self {
            MigrateError::Transform { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for [`MigrateError`].
pub type MigrateResult<T> = Result<T, MigrateError>;
