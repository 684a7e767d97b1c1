//! Node representation in the note graph

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use super::edge::Edge;

/// Unique identifier for a node
///
/// Derived from a note name with the `.md` suffix stripped; serializes as a
/// plain string and doubles as the join key for reference resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from an already-normalized identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Typed metadata values
///
/// Decoded frontmatter lands here verbatim; nested structures are preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<PropertyValue>),
    Object(HashMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Convert a decoded YAML value into a metadata value
    pub fn from_yaml(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else {
                    Self::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            Value::String(s) => Self::String(s),
            Value::Sequence(items) => {
                Self::Array(items.into_iter().map(Self::from_yaml).collect())
            }
            // Non-string mapping keys have no place in a metadata record.
            Value::Mapping(map) => Self::Object(
                map.into_iter()
                    .filter_map(|(k, v)| {
                        k.as_str().map(|k| (k.to_string(), Self::from_yaml(v)))
                    })
                    .collect(),
            ),
            Value::Tagged(tagged) => Self::from_yaml(tagged.value),
        }
    }

    /// Borrow the string content, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Metadata collection
pub type Properties = HashMap<String, PropertyValue>;

/// Where a node's click-through navigation should open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    Self_,
}

impl LinkTarget {
    /// Parse the `target` metadata key; unrecognized values yield `None`
    pub fn from_meta(value: &str) -> Option<Self> {
        match value {
            "_blank" => Some(Self::Blank),
            "_self" => Some(Self::Self_),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blank => "_blank",
            Self::Self_ => "_self",
        }
    }
}

/// Click-through routing derived from the `url`/`target` metadata keys
///
/// Present on every node; fields are `None` when the metadata omits them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub url: Option<String>,
    pub target: Option<LinkTarget>,
}

/// A node in the note graph, derived from one note
///
/// Two-part representation: a fixed typed core plus the open `meta` mapping
/// carrying every key decoded from the note's preamble. `meta` may repeat
/// `tags`, `url` and `target`; `id` can never be shadowed.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Unique identifier (normalized note name)
    pub id: NodeId,
    /// Free-form labels from the `tags` metadata key; empty when missing or
    /// not a sequence
    pub tags: Vec<String>,
    /// Mirror of the `url`/`target` metadata keys
    pub route: RouteInfo,
    /// Every key decoded from the note's preamble
    pub meta: Properties,
    /// Incident edges, populated by cross-linking
    ///
    /// Append-only; insertion order follows edge discovery order, duplicates
    /// are preserved and a self-loop appears twice.
    #[serde(serialize_with = "serialize_edge_ids")]
    pub edges: Vec<Arc<Edge>>,
    /// Display color assigned by the styling pass, not by parsing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Node {
    /// Create a bare node with default metadata
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            tags: Vec::new(),
            route: RouteInfo::default(),
            meta: Properties::new(),
            edges: Vec::new(),
            color: None,
        }
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add a metadata entry
    pub fn with_meta(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.meta.insert(key.into(), value);
        self
    }
}

/// Incident edges serialize as a list of edge ids; the edge bodies live in
/// the graph's top-level `links` array.
fn serialize_edge_ids<S>(edges: &[Arc<Edge>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(edges.iter().map(|e| &e.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_scalars() {
        let value = PropertyValue::from_yaml(serde_yaml::Value::from(42));
        assert_eq!(value, PropertyValue::Int(42));

        let value = PropertyValue::from_yaml(serde_yaml::Value::from(2.5));
        assert_eq!(value, PropertyValue::Float(2.5));

        let value = PropertyValue::from_yaml(serde_yaml::Value::from(true));
        assert_eq!(value, PropertyValue::Bool(true));

        let value = PropertyValue::from_yaml(serde_yaml::Value::Null);
        assert_eq!(value, PropertyValue::Null);
    }

    #[test]
    fn test_from_yaml_nested() {
        let parsed: serde_yaml::Value =
            serde_yaml::from_str("links:\n  - a\n  - b\n").unwrap();
        let value = PropertyValue::from_yaml(parsed);

        let PropertyValue::Object(map) = value else {
            panic!("expected object");
        };
        assert_eq!(
            map.get("links"),
            Some(&PropertyValue::Array(vec![
                PropertyValue::String("a".into()),
                PropertyValue::String("b".into()),
            ]))
        );
    }

    #[test]
    fn test_link_target_from_meta() {
        assert_eq!(LinkTarget::from_meta("_blank"), Some(LinkTarget::Blank));
        assert_eq!(LinkTarget::from_meta("_self"), Some(LinkTarget::Self_));
        assert_eq!(LinkTarget::from_meta("popup"), None);
        assert_eq!(LinkTarget::from_meta(""), None);
    }

    #[test]
    fn test_route_info_defaults_present() {
        let node = Node::new("A");
        assert_eq!(node.route, RouteInfo { url: None, target: None });
        assert!(node.tags.is_empty());
        assert!(node.meta.is_empty());
    }

    #[test]
    fn test_link_target_serializes_as_literal() {
        let json = serde_json::to_string(&LinkTarget::Blank).unwrap();
        assert_eq!(json, "\"_blank\"");
        let json = serde_json::to_string(&LinkTarget::Self_).unwrap();
        assert_eq!(json, "\"_self\"");
    }
}
