//! Shared helpers for building test vaults

use thoughtgraph::Note;

/// Note whose frontmatter is built from `key: value` lines
pub fn note_with_meta(name: &str, meta: &[(&str, &str)], body: &str) -> Note {
    let mut content = String::from("---\n");
    for (key, value) in meta {
        content.push_str(key);
        content.push_str(": ");
        content.push_str(value);
        content.push('\n');
    }
    content.push_str("---\n");
    content.push_str(body);
    Note::new(name, content)
}

/// Note whose body references each of `targets` once, in order
pub fn note_with_links(name: &str, targets: &[&str]) -> Note {
    let body = targets
        .iter()
        .map(|t| format!("[[{}]]", t))
        .collect::<Vec<_>>()
        .join(" ");
    Note::new(name, body)
}
