//! Versioned document envelope
//!
//! A persisted record tagged with the schema family and version it was
//! written at. Loaders read the envelope, compare `version` against the
//! current version for `schema`, and migrate `data` when they differ.

use crate::error::CoreResult;
use crate::name::{SchemaName, SchemaVersion};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A persisted data object tagged with its schema and version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionedDocument {
    /// Schema family the payload belongs to
    pub schema: SchemaName,

    /// Version the payload currently conforms to
    pub version: SchemaVersion,

    /// The payload itself, opaque to the migration engine
    pub data: Value,
}

impl VersionedDocument {
    /// Parse an envelope from JSON text.
    pub fn from_json(text: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Whether the document is already at `version`.
    pub fn is_at(&self, version: &str) -> bool {
        self.version == version
    }
}
