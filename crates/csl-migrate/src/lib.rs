//! csl-migrate - Versioned data migration engine
//!
//! Stores directed migration edges per schema family, finds the shortest
//! chain of edges between two versions, and applies that chain to an opaque
//! JSON payload.
//!
//! The registry is built once during a registration phase and then shared
//! read-only:
//!
//! ```
//! use csl_migrate::{declarations, MigrationRegistry};
//! use serde_json::json;
//!
//! let mut registry = MigrationRegistry::new();
//! declarations::register_all(&mut registry);
//!
//! let user = json!({"id": "u1", "name": "John", "age": 30});
//! let migrated = registry.migrate("User", user, "1.0.0", "2.0.0").unwrap();
//! assert_eq!(migrated["display_name"], "John");
//! ```

pub mod check;
pub mod declarations;
pub mod edge;
pub mod error;
pub mod executor;
pub mod graph;
pub mod path;
pub mod plan;
pub mod registry;

pub use check::{IssueSeverity, RegistryIssue};
pub use edge::{Document, MigrationEdge, TransformError};
pub use error::{MigrateError, MigrateResult};
pub use executor::apply_path;
pub use graph::VersionGraph;
pub use path::resolve_path;
pub use plan::{MigrationPlan, PlanStep};
pub use registry::MigrationRegistry;
