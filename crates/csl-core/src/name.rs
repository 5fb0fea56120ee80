//! Strongly-typed schema names and version labels.

use crate::newtype_string::define_identifier;

define_identifier! {
    /// Name of a schema family (e.g. `User`, `Block`).
    ///
    /// Case-sensitive. Used only as the registry partition key; the engine
    /// never looks inside the schema it names.
    pub struct SchemaName => "schema name";
}

define_identifier! {
    /// A version label such as `1.0.0`.
    ///
    /// Versions are graph-node labels compared by equality only. The
    /// surrounding system uses Semantic Versioning, but no ordering is
    /// derived from the text here, so downgrade edges are as legal as
    /// upgrade edges.
    pub struct SchemaVersion => "schema version";
}

#[cfg(test)]
#[path = "name_test.rs"]
mod tests;
