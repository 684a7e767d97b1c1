//! Thoughtgraph: note-to-graph resolution engine
//!
//! Turns a batch of interlinked text notes into a node/edge graph for an
//! interactive force-directed renderer: frontmatter metadata is extracted,
//! `[[wiki-style]]` cross-references are scanned and normalized, and the
//! resulting edges are cross-linked bidirectionally onto both endpoint
//! nodes. Malformed metadata and dangling references degrade locally, so a
//! parse call always returns a complete graph.
//!
//! # Core Concepts
//!
//! - **Notes**: named text documents, the only input
//! - **Nodes**: one per note, carrying tags, routing info and open metadata
//! - **Edges**: one per reference occurrence, shared by both endpoints
//!
//! # Example
//!
//! ```
//! use thoughtgraph::{parse, Note};
//!
//! let notes = vec![
//!     Note::new("Recipes.md", "---\ntags: [cooking]\n---\nStart with [[Pasta]]."),
//!     Note::new("Pasta.md", "Back to [[Recipes|the index]]."),
//! ];
//! let graph = parse(&notes);
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.resolved_edge_count(), 2);
//! ```

pub mod diagnostics;
mod graph;
pub mod parse;
pub mod render;
pub mod style;
pub mod vault;

pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, MetadataError, TracingSink};
pub use graph::{
    Edge, EdgeId, Graph, GraphMetadata, LinkTarget, Node, NodeId, Properties, PropertyValue,
    RouteInfo,
};
pub use parse::{normalize_id, parse, Note, NoteParser};
pub use render::{click_navigation, HighlightState, Navigation};
pub use style::{ColorError, Theme};
pub use vault::{load_notes, VaultError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
