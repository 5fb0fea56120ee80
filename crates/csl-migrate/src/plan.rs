//! Resolved migration plans

use crate::edge::MigrationEdge;
use serde::Serialize;

/// One step of a resolved plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    pub from: String,
    pub to: String,
    pub description: String,
}

impl From<&MigrationEdge> for PlanStep {
    fn from(edge: &MigrationEdge) -> Self {
        Self {
            from: edge.from_version.to_string(),
            to: edge.to_version.to_string(),
            description: edge.description.clone(),
        }
    }
}

/// The chain of edges a migration would apply, without applying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationPlan {
    pub schema: String,
    pub from: String,
    pub to: String,
    pub steps: Vec<PlanStep>,
}

impl MigrationPlan {
    /// True when source and target versions are equal and nothing runs.
    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Versions visited by the plan, start and end included.
    pub fn versions(&self) -> Vec<&str> {
        std::iter::once(self.from.as_str())
            .chain(self.steps.iter().map(|s| s.to.as_str()))
            .collect()
    }
}
