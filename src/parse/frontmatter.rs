//! Metadata extraction from a note's fenced preamble
//!
//! A note may open with a `---` fenced YAML block holding key-value metadata.
//! Extraction locates the block; decoding turns it into a metadata record.
//! Decode failure is non-fatal for the pipeline: the caller degrades to an
//! empty record and reports the error on the diagnostic channel.

use crate::diagnostics::MetadataError;
use crate::graph::{Properties, PropertyValue};

/// Locate the fenced preamble block at the start of `content`
///
/// Leading whitespace is allowed before the opening fence, which must sit
/// alone on its line. The closing fence is the first later line beginning
/// with `---` after optional indent. Returns the inner text, or `None` when
/// no block is present.
pub fn extract(content: &str) -> Option<&str> {
    let trimmed = content.trim_start();
    let rest = trimmed.strip_prefix("---")?;
    let line_end = rest.find('\n')?;
    if !rest[..line_end].trim().is_empty() {
        return None;
    }
    let body = &rest[line_end + 1..];

    let mut search = 0;
    while let Some(offset) = body[search..].find('\n') {
        let at = search + offset;
        if at > 0 && body[at + 1..].trim_start().starts_with("---") {
            return Some(&body[..at]);
        }
        search = at + 1;
    }
    None
}

/// Decode a preamble's inner text into a metadata record
///
/// Any well-formed YAML document is accepted; only mapping documents
/// contribute keys. Malformed input surfaces as [`MetadataError`] for the
/// caller to degrade on.
pub fn decode(text: &str) -> Result<Properties, MetadataError> {
    let value: serde_yaml::Value = serde_yaml::from_str(text)?;
    let serde_yaml::Value::Mapping(mapping) = value else {
        return Ok(Properties::new());
    };
    Ok(mapping
        .into_iter()
        .filter_map(|(key, value)| {
            key.as_str()
                .map(|k| (k.to_string(), PropertyValue::from_yaml(value)))
        })
        .collect())
}
