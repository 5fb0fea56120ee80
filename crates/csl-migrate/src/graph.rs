//! Materialized version graph for inspection
//!
//! Path resolution never uses this graph; it exists so tools can list,
//! explore, and sanity-check the versions registered for a schema.

use crate::edge::MigrationEdge;
use csl_core::SchemaVersion;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, EdgeRef};
use std::collections::HashMap;

/// A directed graph of versions, one edge per registered migration.
#[derive(Debug)]
pub struct VersionGraph {
    /// Edge weights are registration positions
    graph: DiGraph<SchemaVersion, usize>,

    /// Map from version label to node index
    node_map: HashMap<SchemaVersion, NodeIndex>,
}

impl VersionGraph {
    /// Build the graph from edges in registration order
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = &'a MigrationEdge>) -> Self {
        let mut graph = Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        };

        for (position, edge) in edges.into_iter().enumerate() {
            let from = graph.add_version(&edge.from_version);
            let to = graph.add_version(&edge.to_version);
            graph.graph.add_edge(from, to, position);
        }

        graph
    }

    fn add_version(&mut self, version: &SchemaVersion) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(version) {
            return idx;
        }
        let idx = self.graph.add_node(version.clone());
        self.node_map.insert(version.clone(), idx);
        idx
    }

    /// All versions, in order of first appearance
    pub fn versions(&self) -> Vec<&SchemaVersion> {
        self.graph.node_indices().map(|idx| &self.graph[idx]).collect()
    }

    /// Number of migration edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if a version appears in the graph
    pub fn contains(&self, version: &str) -> bool {
        self.node_map.contains_key(version)
    }

    /// Direct successors of `version`, in registration order of the edges
    /// leading to them. Duplicate edges yield duplicate entries.
    pub fn successors(&self, version: &str) -> Vec<&SchemaVersion> {
        let Some(&idx) = self.node_map.get(version) else {
            return Vec::new();
        };

        let mut edges: Vec<_> = self.graph.edges(idx).collect();
        edges.sort_by_key(|e| *e.weight());
        edges.into_iter().map(|e| &self.graph[e.target()]).collect()
    }

    /// Every version reachable from `version` by one or more migrations,
    /// excluding `version` itself unless a cycle leads back to it.
    pub fn reachable_from(&self, version: &str) -> Vec<&SchemaVersion> {
        let Some(&start) = self.node_map.get(version) else {
            return Vec::new();
        };

        let returns_to_start = self
            .graph
            .neighbors_directed(start, petgraph::Direction::Incoming)
            .any(|pred| pred == start || self.reaches(start, pred));

        let mut bfs = Bfs::new(&self.graph, start);
        let mut result = Vec::new();
        while let Some(idx) = bfs.next(&self.graph) {
            if idx != start || returns_to_start {
                result.push(&self.graph[idx]);
            }
        }
        result
    }

    fn reaches(&self, from: NodeIndex, to: NodeIndex) -> bool {
        petgraph::algo::has_path_connecting(&self.graph, from, to, None)
    }

    /// Whether any chain of migrations leads back to a version it started
    /// from. Self-loop edges count.
    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
