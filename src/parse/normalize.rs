//! Identifier normalization shared by note names and reference targets

/// Strip a single trailing `.md` from an identifier, if present
///
/// Case-sensitive, exact suffix only. Note names and reference targets both
/// pass through here, so a note `"Foo.md"` and a `[[Foo]]` reference resolve
/// to the same id.
pub fn normalize_id(name: &str) -> &str {
    name.strip_suffix(".md").unwrap_or(name)
}
