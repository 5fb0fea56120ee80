//! Migration registry
//!
//! An explicitly constructed catalog of migration edges, partitioned by
//! schema name. Registration happens during start-up through `&mut self`;
//! afterwards the registry is shared by reference (or `Arc`) and only read,
//! so no locking is involved.

use crate::edge::{Document, MigrationEdge};
use crate::error::{MigrateError, MigrateResult};
use crate::executor::apply_path;
use crate::path::resolve_path;
use crate::plan::{MigrationPlan, PlanStep};
use csl_core::SchemaName;
use std::collections::HashMap;

/// Registered migration edges, keyed by schema name.
#[derive(Debug, Default, Clone)]
pub struct MigrationRegistry {
    /// schema name -> edges in registration order
    edges: HashMap<SchemaName, Vec<MigrationEdge>>,
}

impl MigrationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `edge` to the edges of `schema`.
    ///
    /// Never fails and performs no validation: duplicate endpoints and
    /// self-loops are accepted, and the earliest registration wins during
    /// path resolution. Use [`try_register`](Self::try_register) to reject
    /// them.
    pub fn register(&mut self, schema: SchemaName, edge: MigrationEdge) -> &mut Self {
        self.edges.entry(schema).or_default().push(edge);
        self
    }

    /// Append `edge` to `schema`, rejecting self-loops and edges whose
    /// endpoints are already registered for that schema.
    pub fn try_register(
        &mut self,
        schema: SchemaName,
        edge: MigrationEdge,
    ) -> MigrateResult<&mut Self> {
        if edge.is_self_loop() {
            return Err(MigrateError::SelfLoop {
                schema: schema.into_inner(),
                version: edge.from_version.into_inner(),
            });
        }

        if self.edges_for(&schema).iter().any(|e| e.same_endpoints(&edge)) {
            return Err(MigrateError::DuplicateEdge {
                schema: schema.into_inner(),
                from: edge.from_version.into_inner(),
                to: edge.to_version.into_inner(),
            });
        }

        Ok(self.register(schema, edge))
    }

    /// Edges registered for `schema`, in registration order.
    pub fn edges_for(&self, schema: &str) -> &[MigrationEdge] {
        self.edges.get(schema).map(Vec::as_slice).unwrap_or_default()
    }

    /// Names of all schemas with at least one edge, sorted.
    pub fn schemas(&self) -> Vec<&SchemaName> {
        let mut names: Vec<&SchemaName> = self.edges.keys().collect();
        names.sort();
        names
    }

    /// Total number of registered edges across all schemas
    pub fn len(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve the chain of edges from `from` to `to` without running it.
    pub fn plan(&self, schema: &str, from: &str, to: &str) -> MigrateResult<MigrationPlan> {
        let path = self.resolve(schema, from, to)?;
        Ok(MigrationPlan {
            schema: schema.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            steps: path.into_iter().map(PlanStep::from).collect(),
        })
    }

    /// Migrate `data` of `schema` from version `from` to version `to`.
    ///
    /// Fails with [`MigrateError::NoPath`] when the versions are not
    /// connected (including unregistered schemas), before any transform
    /// runs. A failing transform aborts the chain with
    /// [`MigrateError::Transform`]. The result is not validated against the
    /// target version; that is up to the caller.
    pub fn migrate(
        &self,
        schema: &str,
        data: Document,
        from: &str,
        to: &str,
    ) -> MigrateResult<Document> {
        let path = self.resolve(schema, from, to)?;
        apply_path(schema, data, &path)
    }

    fn resolve(&self, schema: &str, from: &str, to: &str) -> MigrateResult<Vec<&MigrationEdge>> {
        let path = resolve_path(self.edges_for(schema), from, to).ok_or_else(|| {
            MigrateError::NoPath {
                schema: schema.to_string(),
                from: from.to_string(),
                to: to.to_string(),
            }
        })?;

        log::debug!(
            "Resolved {} migration {} -> {} in {} step(s)",
            schema,
            from,
            to,
            path.len()
        );
        Ok(path)
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
