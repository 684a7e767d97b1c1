//! Note parsing pipeline
//!
//! Turns a batch of notes into a cross-linked [`Graph`]:
//!
//! - **frontmatter** extracts and decodes each note's optional metadata
//!   preamble (decode failure degrades to an empty record)
//! - **wikilink** scans each note body for `[[reference]]` markers
//! - **normalize** keeps note names and reference targets in one id space
//! - [`NoteParser`] assembles one node per note, one edge per discovered
//!   reference, then cross-links the whole batch at once
//!
//! Extraction and scanning run per note and are order-independent;
//! cross-linking needs the complete node set, so it runs last. A parse call
//! never fails: per-note and per-reference problems degrade locally and the
//! caller always receives a complete graph.
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
//! assert_eq!(graph.node("Pasta").unwrap().edges.len(), 2);
//! ```

pub mod frontmatter;
pub mod normalize;
pub mod wikilink;

pub use normalize::normalize_id;

use std::collections::HashSet;
use std::sync::Arc;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::graph::{Edge, Graph, LinkTarget, Node, PropertyValue};

/// One input text document with a unique name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub name: String,
    pub content: String,
}

impl Note {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Builds a [`Graph`] from a batch of notes
///
/// Each call allocates a fresh graph; the only shared effect is diagnostic
/// emission, which never affects the result. Duplicate note ids are an input
/// precondition violation; they are flagged through the diagnostic channel
/// and resolution keeps the first match.
pub struct NoteParser {
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Default for NoteParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteParser {
    /// Parser reporting diagnostics through `tracing`
    pub fn new() -> Self {
        Self {
            diagnostics: Arc::new(TracingSink),
        }
    }

    /// Parser reporting diagnostics through the given sink
    pub fn with_diagnostics(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { diagnostics: sink }
    }

    /// Parse a batch of notes into a cross-linked graph
    pub fn parse(&self, notes: &[Note]) -> Graph {
        let mut graph = Graph::new();

        for note in notes {
            let node = self.build_node(note);
            let source = node.id.clone();
            graph.add_node(node);

            for target in wikilink::scan(&note.content) {
                graph.add_edge(Edge::new(source.clone(), target));
            }
        }

        self.flag_duplicates(&graph);
        graph.cross_link();

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            resolved = graph.resolved_edge_count(),
            "note graph assembled"
        );
        graph
    }

    /// Compute one note's node: normalized id plus the reserved-key merge
    fn build_node(&self, note: &Note) -> Node {
        let mut node = Node::new(normalize_id(&note.name));

        let Some(block) = frontmatter::extract(&note.content) else {
            return node;
        };
        let meta = match frontmatter::decode(block) {
            Ok(meta) => meta,
            Err(error) => {
                self.diagnostics.report(Diagnostic::MetadataDecode {
                    note: note.name.clone(),
                    error: error.to_string(),
                });
                return node;
            }
        };

        if let Some(PropertyValue::Array(tags)) = meta.get("tags") {
            node.tags = tags
                .iter()
                .filter_map(|tag| tag.as_str().map(str::to_string))
                .collect();
        }
        node.route.url = meta
            .get("url")
            .and_then(PropertyValue::as_str)
            .map(str::to_string);
        node.route.target = meta
            .get("target")
            .and_then(PropertyValue::as_str)
            .and_then(LinkTarget::from_meta);
        node.meta = meta;
        node
    }

    fn flag_duplicates(&self, graph: &Graph) {
        let mut seen = HashSet::new();
        for node in &graph.nodes {
            if !seen.insert(node.id.as_str()) {
                self.diagnostics.report(Diagnostic::DuplicateId {
                    id: node.id.as_str().to_string(),
                });
            }
        }
    }
}

/// Parse a batch of notes with default diagnostics
///
/// Equivalent to `NoteParser::new().parse(notes)`.
pub fn parse(notes: &[Note]) -> Graph {
    NoteParser::new().parse(notes)
}
