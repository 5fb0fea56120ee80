//! Chain execution: apply a resolved path to a payload.

use crate::edge::{Document, MigrationEdge};
use crate::error::{MigrateError, MigrateResult};

/// Apply each edge of `path` to `data` in order and return the final value.
///
/// An empty path returns `data` unchanged. The first failing transform ends
/// the chain: its error is returned with the step position attached, and the
/// partially transformed value is dropped so callers can never persist it.
pub fn apply_path(
    schema: &str,
    data: Document,
    path: &[&MigrationEdge],
) -> MigrateResult<Document> {
    let mut current = data;

    for (step, edge) in path.iter().enumerate() {
        log::debug!(
            "Applying {} migration {} -> {} ({}/{}): {}",
            schema,
            edge.from_version,
            edge.to_version,
            step + 1,
            path.len(),
            edge.description
        );

        current = edge
            .apply(current)
            .map_err(|source| MigrateError::Transform {
                schema: schema.to_string(),
                step,
                from: edge.from_version.to_string(),
                to: edge.to_version.to_string(),
                source,
            })?;
    }

    Ok(current)
}

#[cfg(test)]
#[path = "executor_test.rs"]
mod tests;
