//! Registry sanity checks
//!
//! `register` accepts anything; these checks report what a strict registry
//! would have refused, plus version cycles, without changing behavior.

use crate::graph::VersionGraph;
use crate::registry::MigrationRegistry;
use csl_core::{SchemaName, SchemaVersion};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// How serious a [`RegistryIssue`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Warning,
    Error,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueSeverity::Warning => write!(f, "warning"),
            IssueSeverity::Error => write!(f, "error"),
        }
    }
}

/// A problem found in the registered edges of one schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistryIssue {
    /// More than one edge connects the same two versions; only the first
    /// registered is ever used.
    DuplicateEdge {
        schema: String,
        from: String,
        to: String,
        count: usize,
    },

    /// An edge maps a version onto itself and can never be selected.
    SelfLoop { schema: String, version: String },

    /// Migrations lead from some version back to itself through other
    /// versions (e.g. a downgrade edge).
    VersionCycle { schema: String },

    /// A registered version has no migration chain to the schema's
    /// configured current version, so documents stored at it cannot be
    /// upgraded.
    NoPathToCurrent {
        schema: String,
        version: String,
        current: String,
    },
}

impl RegistryIssue {
    pub fn severity(&self) -> IssueSeverity {
        match self {
            RegistryIssue::DuplicateEdge { .. } | RegistryIssue::SelfLoop { .. } => {
                IssueSeverity::Error
            }
            RegistryIssue::VersionCycle { .. } | RegistryIssue::NoPathToCurrent { .. } => {
                IssueSeverity::Warning
            }
        }
    }

    pub fn schema(&self) -> &str {
        match self {
            RegistryIssue::DuplicateEdge { schema, .. }
            | RegistryIssue::SelfLoop { schema, .. }
            | RegistryIssue::VersionCycle { schema }
            | RegistryIssue::NoPathToCurrent { schema, .. } => schema,
        }
    }
}

impl fmt::Display for RegistryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryIssue::DuplicateEdge {
                schema,
                from,
                to,
                count,
            } => write!(
                f,
                "{schema}: {count} migrations from {from} to {to}; only the first registered is used"
            ),
            RegistryIssue::SelfLoop { schema, version } => {
                write!(f, "{schema}: migration maps {version} onto itself")
            }
            RegistryIssue::VersionCycle { schema } => {
                write!(f, "{schema}: migrations form a cycle between versions")
            }
            RegistryIssue::NoPathToCurrent {
                schema,
                version,
                current,
            } => write!(
                f,
                "{schema}: no migration path from {version} to current version {current}"
            ),
        }
    }
}

impl MigrationRegistry {
    /// Report duplicate edges, self-loops, and version cycles for every
    /// schema, ordered by schema name then registration order.
    pub fn check(&self) -> Vec<RegistryIssue> {
        let mut issues = Vec::new();

        for schema in self.schemas() {
            let edges = self.edges_for(schema);

            for (idx, edge) in edges.iter().enumerate() {
                if edge.is_self_loop() {
                    issues.push(RegistryIssue::SelfLoop {
                        schema: schema.to_string(),
                        version: edge.from_version.to_string(),
                    });
                    continue;
                }

                let first_of_kind = !edges[..idx].iter().any(|e| e.same_endpoints(edge));
                let count = edges.iter().filter(|e| e.same_endpoints(edge)).count();
                if first_of_kind && count > 1 {
                    issues.push(RegistryIssue::DuplicateEdge {
                        schema: schema.to_string(),
                        from: edge.from_version.to_string(),
                        to: edge.to_version.to_string(),
                        count,
                    });
                }
            }

            // Self-loops are already reported above
            let graph = VersionGraph::from_edges(edges.iter().filter(|e| !e.is_self_loop()));
            if graph.has_cycle() {
                issues.push(RegistryIssue::VersionCycle {
                    schema: schema.to_string(),
                });
            }
        }

        issues
    }

    /// Report every registered version that cannot reach its schema's
    /// current version. Schemas without a current version, or whose current
    /// version appears in no edge, are skipped.
    pub fn check_current_versions(
        &self,
        current_versions: &BTreeMap<SchemaName, SchemaVersion>,
    ) -> Vec<RegistryIssue> {
        let mut issues = Vec::new();

        for (schema, current) in current_versions {
            let graph = VersionGraph::from_edges(self.edges_for(schema));
            if !graph.contains(current) {
                continue;
            }

            for version in graph.versions() {
                if version == current {
                    continue;
                }
                let reaches_current = graph
                    .reachable_from(version)
                    .into_iter()
                    .any(|v| v == current);
                if !reaches_current {
                    issues.push(RegistryIssue::NoPathToCurrent {
                        schema: schema.to_string(),
                        version: version.to_string(),
                        current: current.to_string(),
                    });
                }
            }
        }

        issues
    }
}
