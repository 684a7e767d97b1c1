//! Diagnostic side channel for non-fatal parse conditions
//!
//! Parsing never fails: malformed metadata degrades to an empty record and
//! duplicate ids keep first-match resolution. Each such condition is reported
//! exactly once through an injected [`DiagnosticSink`]. Reporting is
//! fire-and-forget; nothing a sink does can affect the returned graph.

use std::fmt;
use std::sync::Mutex;
use thiserror::Error;

/// Failure decoding a note's structured preamble
///
/// Caught inside the parser and degraded to an empty record; it reaches
/// callers only through the diagnostic channel, never as a returned error.
#[derive(Debug, Error)]
#[error("malformed metadata block: {0}")]
pub struct MetadataError(#[from] serde_yaml::Error);

/// A non-fatal condition observed while building a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A note's preamble failed to decode; the note kept empty metadata
    MetadataDecode { note: String, error: String },
    /// Two input notes normalized to the same id; the first wins lookups
    DuplicateId { id: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MetadataDecode { note, error } => {
                write!(f, "metadata for '{note}' ignored: {error}")
            }
            Self::DuplicateId { id } => {
                write!(f, "duplicate node id '{id}'; first note wins")
            }
        }
    }
}

/// Receiver for parse diagnostics
///
/// Implementations must not fail. Dangling references are not diagnostics:
/// they are dropped silently by design.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Default sink: one `tracing` warning per diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(%diagnostic, "note graph diagnostic");
    }
}

/// Collecting sink for tests and embedders that surface diagnostics later
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics reported so far, in arrival order
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Whether nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: Diagnostic) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(diagnostic);
        }
    }
}
