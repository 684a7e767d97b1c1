//! Edge representation shared across both endpoints' incident lists

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::node::NodeId;

/// Unique identifier for an edge
///
/// Nodes are identified by their note-derived id; edges carry their own
/// identity so renderer-side highlight sets can hash them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(Uuid);

impl EdgeId {
    /// Create a new random EdgeId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EdgeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reference discovered in one note's body
///
/// Directed source → target as written. Cross-linking attaches the same
/// allocation to both endpoints' incident lists, so traversal is effectively
/// undirected and a field mutation would be visible from both sides. Edges
/// are treated as immutable after creation.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    /// Create a new edge between two (possibly identical) identifiers
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: EdgeId::new(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// Whether both endpoints name the same node
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
