//! Cross-linking tests

use super::*;
use std::sync::Arc;

fn graph_of(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::new();
    for id in nodes {
        graph.add_node(Node::new(*id));
    }
    for (source, target) in edges {
        graph.add_edge(Edge::new(*source, *target));
    }
    graph
}

#[test]
fn test_mutual_references_attach_one_edge_each_side() {
    let mut graph = graph_of(&["A", "B"], &[("A", "B"), ("B", "A")]);
    graph.cross_link();

    let a = graph.node("A").unwrap();
    let b = graph.node("B").unwrap();
    assert_eq!(a.edges.len(), 2);
    assert_eq!(b.edges.len(), 2);
    assert_eq!(graph.resolved_edge_count(), 2);
}

#[test]
fn test_both_endpoints_share_the_same_allocation() {
    let mut graph = graph_of(&["A", "B"], &[("A", "B")]);
    graph.cross_link();

    let a = graph.node("A").unwrap();
    let b = graph.node("B").unwrap();
    assert!(Arc::ptr_eq(&a.edges[0], &b.edges[0]));
    assert!(Arc::ptr_eq(&a.edges[0], &graph.edges[0]));
}

#[test]
fn test_dangling_reference_is_skipped_silently() {
    let mut graph = graph_of(&["A"], &[("A", "Ghost")]);
    graph.cross_link();

    // The edge stays in the graph but touches no incident list.
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.resolved_edge_count(), 0);
    assert!(graph.node("A").unwrap().edges.is_empty());
}

#[test]
fn test_self_loop_appears_twice_in_incident_list() {
    let mut graph = graph_of(&["A"], &[("A", "A")]);
    graph.cross_link();

    let a = graph.node("A").unwrap();
    assert_eq!(a.edges.len(), 2);
    assert!(Arc::ptr_eq(&a.edges[0], &a.edges[1]));
    assert_eq!(graph.resolved_edge_count(), 1);
}

#[test]
fn test_duplicate_references_are_preserved() {
    let mut graph = graph_of(&["A", "B"], &[("A", "B"), ("A", "B")]);
    graph.cross_link();

    let b = graph.node("B").unwrap();
    assert_eq!(b.edges.len(), 2);
    assert_ne!(b.edges[0].id, b.edges[1].id);
}

#[test]
fn test_incident_order_follows_edge_order() {
    let mut graph = graph_of(&["A", "B", "C"], &[("B", "A"), ("C", "A"), ("A", "A")]);
    graph.cross_link();

    let a = graph.node("A").unwrap();
    let sources: Vec<&str> = a.edges.iter().map(|e| e.source.as_str()).collect();
    assert_eq!(sources, ["B", "C", "A", "A"]);
}

#[test]
fn test_duplicate_node_ids_resolve_to_first_match() {
    let mut graph = Graph::new();
    graph.add_node(Node::new("A").with_tag("first"));
    graph.add_node(Node::new("A").with_tag("second"));
    graph.add_node(Node::new("B"));
    graph.add_edge(Edge::new("B", "A"));
    graph.cross_link();

    assert_eq!(graph.nodes[0].edges.len(), 1);
    assert!(graph.nodes[1].edges.is_empty());
    assert_eq!(graph.node("A").unwrap().tags, ["first"]);
}

#[test]
fn test_serializes_as_nodes_and_links() {
    let mut graph = graph_of(&["A", "B"], &[("A", "B")]);
    graph.cross_link();

    let json = serde_json::to_value(&graph).unwrap();
    assert!(json.get("nodes").is_some());
    assert!(json.get("links").is_some());
    assert_eq!(json["links"][0]["source"], "A");
    assert_eq!(json["links"][0]["target"], "B");

    // Incident edges flatten to edge ids, not nested edge bodies.
    let incident = &json["nodes"][0]["edges"];
    assert_eq!(incident[0], json["links"][0]["id"]);
}
