//! Per-tag color theming
//!
//! Runs after parsing and before rendering: a theme assigns every node its
//! display color from the node's first tag. The core pipeline never touches
//! colors.

use std::collections::HashMap;

use crate::graph::Graph;

/// Fallback node color when no theme entry applies
pub const DEFAULT_COLOR: &str = "rgb(195, 200, 211)";

/// Default highlight color for hovered nodes and edges
pub const HOVER_COLOR: &str = "rgb(32, 91, 216)";

/// Tag-driven color assignment for graph nodes
///
/// Lookup is by a node's first tag with any leading `#` removed; the
/// `"default"` map entry, then the theme's fallback color, cover everything
/// else.
#[derive(Debug, Clone)]
pub struct Theme {
    default_color: String,
    hover_color: String,
    tag_colors: HashMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    pub fn new() -> Self {
        Self {
            default_color: DEFAULT_COLOR.to_string(),
            hover_color: HOVER_COLOR.to_string(),
            tag_colors: HashMap::new(),
        }
    }

    /// Override the fallback color
    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    /// Override the hover highlight color
    pub fn with_hover_color(mut self, color: impl Into<String>) -> Self {
        self.hover_color = color.into();
        self
    }

    /// Map a tag (with or without a leading `#`) to a color
    pub fn with_tag_color(mut self, tag: impl Into<String>, color: impl Into<String>) -> Self {
        let tag = tag.into();
        let key = tag.strip_prefix('#').unwrap_or(&tag);
        self.tag_colors.insert(key.to_string(), color.into());
        self
    }

    pub fn default_color(&self) -> &str {
        &self.default_color
    }

    pub fn hover_color(&self) -> &str {
        &self.hover_color
    }

    /// Color for a node carrying `tags`, by first-tag lookup
    pub fn color_for(&self, tags: &[String]) -> &str {
        let fallback = self
            .tag_colors
            .get("default")
            .map(String::as_str)
            .unwrap_or(&self.default_color);

        let Some(first) = tags.first() else {
            return fallback;
        };
        let key = first.strip_prefix('#').unwrap_or(first);
        self.tag_colors
            .get(key)
            .map(String::as_str)
            .unwrap_or(fallback)
    }

    /// Assign every node's display color
    ///
    /// Total and idempotent: after this pass each node has `Some(color)`.
    pub fn apply(&self, graph: &mut Graph) {
        for node in &mut graph.nodes {
            node.color = Some(self.color_for(&node.tags).to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, Note};

    fn tagged(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_first_tag_wins() {
        let theme = Theme::new()
            .with_tag_color("idea", "#ff0000")
            .with_tag_color("draft", "#00ff00");

        assert_eq!(theme.color_for(&tagged(&["idea", "draft"])), "#ff0000");
        assert_eq!(theme.color_for(&tagged(&["draft", "idea"])), "#00ff00");
    }

    #[test]
    fn test_leading_hash_is_ignored_on_both_sides() {
        let theme = Theme::new().with_tag_color("#idea", "#ff0000");
        assert_eq!(theme.color_for(&tagged(&["idea"])), "#ff0000");
        assert_eq!(theme.color_for(&tagged(&["#idea"])), "#ff0000");
    }

    #[test]
    fn test_default_entry_covers_unknown_tags_and_untagged() {
        let theme = Theme::new()
            .with_tag_color("idea", "#ff0000")
            .with_tag_color("default", "#123456");

        assert_eq!(theme.color_for(&tagged(&["unknown"])), "#123456");
        assert_eq!(theme.color_for(&[]), "#123456");
    }

    #[test]
    fn test_builtin_fallback_without_default_entry() {
        let theme = Theme::new().with_tag_color("idea", "#ff0000");
        assert_eq!(theme.color_for(&tagged(&["unknown"])), DEFAULT_COLOR);
        assert_eq!(theme.color_for(&[]), DEFAULT_COLOR);
    }

    #[test]
    fn test_apply_is_total_and_idempotent() {
        let notes = [
            Note::new("A.md", "---\ntags: [idea]\n---\n"),
            Note::new("B.md", "no tags here"),
        ];
        let mut graph = parse(&notes);
        let theme = Theme::new().with_tag_color("idea", "#ff0000");

        theme.apply(&mut graph);
        assert_eq!(graph.node("A").unwrap().color.as_deref(), Some("#ff0000"));
        assert_eq!(
            graph.node("B").unwrap().color.as_deref(),
            Some(DEFAULT_COLOR)
        );

        theme.apply(&mut graph);
        assert_eq!(graph.node("A").unwrap().color.as_deref(), Some("#ff0000"));
    }
}
