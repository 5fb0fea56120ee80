//! Built-in migration declarations
//!
//! Each submodule declares the edges for one schema family. Hosts build
//! their registry once at start-up with [`register_all`] (or
//! [`try_register_all`] to refuse duplicates and self-loops) before any
//! migration runs.

pub mod user;

use crate::edge::MigrationEdge;
use crate::error::MigrateResult;
use crate::registry::MigrationRegistry;
use csl_core::SchemaName;
use thiserror::Error;

/// Errors raised by the built-in transforms.
#[derive(Error, Debug)]
pub enum DeclarationError {
    /// The payload is not a JSON object
    #[error("{schema} {version} payload must be a JSON object, found {found}")]
    NotAnObject {
        schema: &'static str,
        version: &'static str,
        found: &'static str,
    },
}

/// Every built-in edge, in registration order.
pub fn builtin_edges() -> Vec<(SchemaName, MigrationEdge)> {
    vec![(SchemaName::new(user::SCHEMA), user::v1_to_v2())]
}

/// Register every built-in edge without validation.
pub fn register_all(registry: &mut MigrationRegistry) {
    for (schema, edge) in builtin_edges() {
        registry.register(schema, edge);
    }
}

/// Register every built-in edge, failing on duplicates and self-loops.
pub fn try_register_all(registry: &mut MigrationRegistry) -> MigrateResult<()> {
    for (schema, edge) in builtin_edges() {
        registry.try_register(schema, edge)?;
    }
    Ok(())
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
