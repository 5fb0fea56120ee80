//! Shortest migration path resolution
//!
//! The version graph of a schema is never stored: each call derives it from
//! the schema's edge list and runs a breadth-first search from the start
//! version.

use crate::edge::MigrationEdge;
use std::collections::{HashMap, HashSet, VecDeque};

/// Find the shortest chain of edges leading from `start` to `end`.
///
/// Returns `Some(vec![])` when `start == end`, and `None` when `end` is not
/// reachable. Every edge costs one hop. Outgoing edges of a version are
/// explored in the order they appear in `edges`, so among equally short
/// paths the one using the earliest-registered edge at each branch wins.
/// Runs in O(V + E) with no caching between calls.
pub fn resolve_path<'a>(
    edges: &'a [MigrationEdge],
    start: &str,
    end: &str,
) -> Option<Vec<&'a MigrationEdge>> {
    if start == end {
        return Some(Vec::new());
    }

    // version -> indices of edges leaving it, in registration order
    let mut outgoing: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, edge) in edges.iter().enumerate() {
        outgoing
            .entry(edge.from_version.as_str())
            .or_default()
            .push(idx);
    }

    // version -> index of the edge that first reached it
    let mut reached_by: HashMap<&str, usize> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(start);
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(version) = queue.pop_front() {
        let Some(candidates) = outgoing.get(version) else {
            continue;
        };

        for &idx in candidates {
            let edge = &edges[idx];
            let target = edge.to_version.as_str();

            if target == end {
                return Some(backtrack(edges, &reached_by, idx));
            }

            if visited.insert(target) {
                reached_by.insert(target, idx);
                queue.push_back(target);
            }
        }
    }

    None
}

/// Rebuild the path ending with `last` by walking `reached_by` back to the
/// start version, which never has an entry.
fn backtrack<'a>(
    edges: &'a [MigrationEdge],
    reached_by: &HashMap<&str, usize>,
    last: usize,
) -> Vec<&'a MigrationEdge> {
    let mut path = vec![&edges[last]];
    let mut current = edges[last].from_version.as_str();

    while let Some(&idx) = reached_by.get(current) {
        path.push(&edges[idx]);
        current = edges[idx].from_version.as_str();
    }

    path.reverse();
    path
}

#[cfg(test)]
#[path = "path_test.rs"]
mod tests;
