//! Renderer boundary state
//!
//! The force-directed renderer itself is external; this module keeps the
//! pure state it drives against a parsed graph: hover/drag highlight sets
//! and click-to-navigate resolution. Nothing here draws.

use std::collections::HashSet;

use crate::graph::{EdgeId, LinkTarget, Node, NodeId};

/// Highlight bookkeeping for hover and drag interaction
///
/// Focusing a node lights the node and every incident edge. Membership is
/// set-based, so a self-loop is held once even though the incident list
/// carries it twice.
#[derive(Debug, Default)]
pub struct HighlightState {
    nodes: HashSet<NodeId>,
    edges: HashSet<EdgeId>,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all highlights (hover left the canvas)
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Highlight `node` and its incident edges, replacing any prior focus
    pub fn focus(&mut self, node: &Node) {
        self.clear();
        self.extend(node);
    }

    /// Add `node` and its incident edges without clearing (drag on top of
    /// an existing hover highlight)
    pub fn extend(&mut self, node: &Node) {
        self.nodes.insert(node.id.clone());
        self.edges.extend(node.edges.iter().map(|edge| edge.id));
    }

    pub fn is_node_highlighted(&self, id: &NodeId) -> bool {
        self.nodes.contains(id)
    }

    pub fn is_edge_highlighted(&self, id: &EdgeId) -> bool {
        self.edges.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Navigation resolved from a clicked node's route metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
    /// Where to open; defaults to `Self_` when the metadata names no target
    pub target: LinkTarget,
}

/// Resolve the navigation a click on `node` should trigger, if any
///
/// Nodes whose metadata carries no `url` are inert.
pub fn click_navigation(node: &Node) -> Option<Navigation> {
    let url = node.route.url.clone()?;
    Some(Navigation {
        url,
        target: node.route.target.unwrap_or(LinkTarget::Self_),
    })
}
