use super::*;
use crate::edge::{Document, TransformError};

fn identity(data: Document) -> Result<Document, TransformError> {
    Ok(data)
}

fn edges(pairs: &[(&str, &str)]) -> Vec<MigrationEdge> {
    pairs
        .iter()
        .map(|(from, to)| MigrationEdge::new(from, to, format!("{from}->{to}"), identity))
        .collect()
}

#[test]
fn test_versions_in_first_appearance_order() {
    let edges = edges(&[("1", "2"), ("2", "3"), ("0", "1")]);
    let graph = VersionGraph::from_edges(&edges);
    assert_eq!(graph.versions(), vec!["1", "2", "3", "0"]);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.contains("0"));
    assert!(!graph.contains("4"));
}

#[test]
fn test_successors_follow_registration_order() {
    let edges = edges(&[("1", "3"), ("1", "2"), ("1", "4")]);
    let graph = VersionGraph::from_edges(&edges);
    assert_eq!(graph.successors("1"), vec!["3", "2", "4"]);
    assert!(graph.successors("2").is_empty());
    assert!(graph.successors("missing").is_empty());
}

#[test]
fn test_reachable_from() {
    let edges = edges(&[("1", "2"), ("2", "3"), ("4", "1")]);
    let graph = VersionGraph::from_edges(&edges);

    let mut reachable = graph.reachable_from("1");
    reachable.sort();
    assert_eq!(reachable, vec!["2", "3"]);
    assert!(graph.reachable_from("3").is_empty());
    assert!(graph.reachable_from("missing").is_empty());
}

#[test]
fn test_reachable_includes_start_on_cycle() {
    let edges = edges(&[("1", "2"), ("2", "1")]);
    let graph = VersionGraph::from_edges(&edges);
    let mut reachable = graph.reachable_from("1");
    reachable.sort();
    assert_eq!(reachable, vec!["1", "2"]);
}

#[test]
fn test_cycle_detection() {
    let linear = edges(&[("1", "2"), ("2", "3")]);
    assert!(!VersionGraph::from_edges(&linear).has_cycle());

    let downgrade = edges(&[("1", "2"), ("2", "1")]);
    assert!(VersionGraph::from_edges(&downgrade).has_cycle());

    let self_loop = edges(&[("1", "1")]);
    assert!(VersionGraph::from_edges(&self_loop).has_cycle());
}

#[test]
fn test_empty_graph() {
    let graph = VersionGraph::from_edges(std::iter::empty::<&MigrationEdge>());
    assert!(graph.versions().is_empty());
    assert!(!graph.has_cycle());
}
