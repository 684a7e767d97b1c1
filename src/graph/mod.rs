//! Core graph data structures

mod edge;
mod node;

#[cfg(test)]
mod tests;

pub use edge::{Edge, EdgeId};
pub use node::{LinkTarget, Node, NodeId, Properties, PropertyValue, RouteInfo};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Metadata about a built graph
#[derive(Debug, Clone)]
pub struct GraphMetadata {
    /// When the graph was assembled
    pub built_at: DateTime<Utc>,
    /// Edges attached to both endpoints during cross-linking
    pub resolved_edges: usize,
}

/// A complete note graph: one node per note plus every discovered reference
///
/// Built once per parse invocation. `edges` keeps every discovered reference,
/// dangling ones included; only edges whose two endpoints resolve appear in
/// incident lists. Serializes as `{ nodes, links }` for a force-directed
/// renderer, with each node's incident edges flattened to edge ids.
#[derive(Debug, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    #[serde(rename = "links")]
    pub edges: Vec<Arc<Edge>>,
    #[serde(skip)]
    pub metadata: GraphMetadata,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            metadata: GraphMetadata {
                built_at: Utc::now(),
                resolved_edges: 0,
            },
        }
    }

    /// First node matching `id`, in insertion order
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id.as_str() == id)
    }

    /// Mutable variant of [`Graph::node`]
    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id.as_str() == id)
    }

    /// Add a node to the graph
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Add a discovered reference to the graph
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(Arc::new(edge));
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of discovered references, dangling ones included
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges attached during cross-linking
    pub fn resolved_edge_count(&self) -> usize {
        self.metadata.resolved_edges
    }

    /// Resolve every edge against the node set and attach it to both
    /// endpoints' incident lists
    ///
    /// Runs once, after every node exists. Lookup is first-match by exact id.
    /// An edge with a missing endpoint touches no incident list and raises no
    /// error; a self-loop is attached twice to the same node. Both endpoints
    /// receive the same allocation, so "edges of a node" needs no secondary
    /// index.
    pub fn cross_link(&mut self) {
        let mut resolved = 0;

        for i in 0..self.edges.len() {
            let (source, target) = {
                let edge = &self.edges[i];
                (edge.source.clone(), edge.target.clone())
            };
            let (Some(a), Some(b)) = (self.position(&source), self.position(&target)) else {
                continue;
            };

            let edge = Arc::clone(&self.edges[i]);
            self.nodes[a].edges.push(Arc::clone(&edge));
            self.nodes[b].edges.push(edge);
            resolved += 1;
        }

        self.metadata.resolved_edges = resolved;
    }

    fn position(&self, id: &NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| &n.id == id)
    }
}
