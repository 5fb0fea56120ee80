//! Migration edges: one directed transform between two versions of a schema.

use csl_core::{CoreResult, SchemaVersion};
use std::fmt;
use std::sync::Arc;

/// The payload a transform operates on.
///
/// The engine never inspects it; only the transforms know its shape.
pub type Document = serde_json::Value;

/// Error returned by a failing transform.
pub type TransformError = Box<dyn std::error::Error + Send + Sync + 'static>;

type TransformFn = dyn Fn(Document) -> Result<Document, TransformError> + Send + Sync;

/// A registered, directional transform from `from_version` to `to_version`.
#[derive(Clone)]
pub struct MigrationEdge {
    /// Version the input payload conforms to
    pub from_version: SchemaVersion,

    /// Version the output payload conforms to
    pub to_version: SchemaVersion,

    /// Human-readable summary, used for audit logs and listings only
    pub description: String,

    transform: Arc<TransformFn>,
}

impl MigrationEdge {
    /// Create an edge from static declarations.
    ///
    /// Panics if either version is empty. Use [`try_new`](Self::try_new) for
    /// versions that come from untrusted input.
    pub fn new<F>(from: &str, to: &str, description: impl Into<String>, transform: F) -> Self
    where
        F: Fn(Document) -> Result<Document, TransformError> + Send + Sync + 'static,
    {
        Self::from_parts(
            SchemaVersion::new(from),
            SchemaVersion::new(to),
            description,
            transform,
        )
    }

    /// Create an edge, rejecting empty version labels.
    pub fn try_new<F>(
        from: &str,
        to: &str,
        description: impl Into<String>,
        transform: F,
    ) -> CoreResult<Self>
    where
        F: Fn(Document) -> Result<Document, TransformError> + Send + Sync + 'static,
    {
        Ok(Self::from_parts(
            SchemaVersion::parse(from)?,
            SchemaVersion::parse(to)?,
            description,
            transform,
        ))
    }

    fn from_parts<F>(
        from_version: SchemaVersion,
        to_version: SchemaVersion,
        description: impl Into<String>,
        transform: F,
    ) -> Self
    where
        F: Fn(Document) -> Result<Document, TransformError> + Send + Sync + 'static,
    {
        Self {
            from_version,
            to_version,
            description: description.into(),
            transform: Arc::new(transform),
        }
    }

    /// Run this edge's transform on `data`.
    pub fn apply(&self, data: Document) -> Result<Document, TransformError> {
        (self.transform)(data)
    }

    /// Whether both endpoints are the same version.
    pub fn is_self_loop(&self) -> bool {
        self.from_version == self.to_version
    }

    /// Whether this edge connects the same two versions as `other`.
    pub fn same_endpoints(&self, other: &MigrationEdge) -> bool {
        self.from_version == other.from_version && self.to_version == other.to_version
    }
}

impl fmt::Debug for MigrationEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MigrationEdge")
            .field("from_version", &self.from_version)
            .field("to_version", &self.to_version)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for MigrationEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from_version, self.to_version)
    }
}
