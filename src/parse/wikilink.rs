//! Wiki-style reference scanning
//!
//! `[[Target]]` and `[[Target|display alias]]` markers embedded in a note
//! body name other notes. Scanning is leftmost-first and non-overlapping,
//! and it never fails: unclosed markers simply match nothing.

use super::normalize::normalize_id;

/// Scan `content` for reference targets, in order of first character position
///
/// The inner text before the first `|` is the target; it is trimmed and
/// normalized, and the alias is discarded. A marker never spans a line
/// break.
pub fn scan(content: &str) -> Vec<String> {
    let mut targets = Vec::new();
    let mut rest = content;

    while let Some(open) = rest.find("[[") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("]]") else {
            break;
        };
        let inner = &after_open[..close];
        if inner.contains('\n') {
            // Resume just past the opener so a marker on the next line
            // still matches.
            rest = &rest[open + 2..];
            continue;
        }
        let raw = inner.split('|').next().unwrap_or(inner);
        targets.push(normalize_id(raw.trim()).to_string());
        rest = &after_open[close + 2..];
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_single_reference() {
        assert_eq!(scan("see [[Other Page]] for details"), ["Other Page"]);
    }

    #[test]
    fn test_scan_discards_display_alias() {
        assert_eq!(scan("see [[Bar|display text]]"), ["Bar"]);
        assert_eq!(scan("[[Folder/Note|Display Name]]"), ["Folder/Note"]);
        assert_eq!(scan("[[a|b|c]]"), ["a"]);
    }

    #[test]
    fn test_scan_trims_and_normalizes_targets() {
        assert_eq!(scan("[[ Foo.md ]]"), ["Foo"]);
        assert_eq!(scan("[[Foo]] and [[Foo.md]]"), ["Foo", "Foo"]);
    }

    #[test]
    fn test_scan_preserves_order_and_duplicates() {
        assert_eq!(scan("[[B]] then [[A]] then [[B]]"), ["B", "A", "B"]);
    }

    #[test]
    fn test_scan_empty_body_and_no_markers() {
        assert!(scan("").is_empty());
        assert!(scan("plain text with [single] brackets").is_empty());
    }

    #[test]
    fn test_unclosed_marker_matches_nothing() {
        assert!(scan("dangling [[Foo").is_empty());
        assert_eq!(scan("[[A]] then [[broken"), ["A"]);
    }

    #[test]
    fn test_marker_never_spans_lines() {
        assert!(scan("[[Foo\nBar]]").is_empty());
        assert_eq!(scan("[[Foo\nBar]] [[Baz]]"), ["Baz"]);
    }

    #[test]
    fn test_degenerate_empty_target() {
        assert_eq!(scan("[[]]"), [""]);
        assert_eq!(scan("[[|alias only]]"), [""]);
    }
}
