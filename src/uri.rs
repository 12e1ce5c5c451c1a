//! RFC 3986 base+reference resolution for `$id` / `$ref` handling.
//!
//! Schema authors write mostly-relative references (`#/defs/foo`,
//! `other.json#bar`, bare `#frag`); resolution against the current base URI
//! is delegated to the `url` crate, which implements the WHATWG URL
//! algorithm (a superset of RFC 3986 merge/normalize semantics suitable for
//! the URIs that appear in JSON Schema documents).
use url::Url;

const DEFAULT_BASE: &str = "json-schema:///";

fn as_url(uri: &str) -> Option<Url> {
    Url::parse(uri).ok()
}

/// Resolve `reference` against `base`, returning an absolute URI string.
///
/// When `base` is empty, an internal placeholder root is used so that
/// purely in-document schemas (no `$id` anywhere) still get a stable,
/// resolvable base.
#[must_use]
pub fn resolve(base: &str, reference: &str) -> String {
    let base = if base.is_empty() { DEFAULT_BASE } else { base };
    if let Some(base_url) = as_url(base) {
        if let Ok(resolved) = base_url.join(reference) {
            return resolved.to_string();
        }
    }
    // Base itself isn't a parseable absolute URL (e.g. a bare relative id
    // used as the very first `$id` in a document with no base at all);
    // fall back to naive concatenation through the placeholder root.
    if let Some(base_url) = as_url(DEFAULT_BASE) {
        if let Ok(joined) = base_url.join(base) {
            if let Ok(resolved) = joined.join(reference) {
                return resolved.to_string();
            }
        }
    }
    reference.to_owned()
}

/// Split an absolute URI into its `base#fragment` parts. The fragment does
/// not include the leading `#`; it is empty if the URI has no fragment.
#[must_use]
pub fn split_fragment(uri: &str) -> (&str, &str) {
    match uri.find('#') {
        Some(index) => (&uri[..index], &uri[index + 1..]),
        None => (uri, ""),
    }
}

/// Strip a trailing empty fragment (`foo#` -> `foo`) so that bare-base and
/// `#`-suffixed spellings of the same resource hash to the same key.
#[must_use]
pub fn normalize(uri: &str) -> String {
    let (base, fragment) = split_fragment(uri);
    if fragment.is_empty() {
        base.to_owned()
    } else {
        format!("{base}#{fragment}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_ref_against_absolute_base() {
        let resolved = resolve("https://example.com/schemas/root.json", "other.json");
        assert_eq!(resolved, "https://example.com/schemas/other.json");
    }

    #[test]
    fn resolves_fragment_only_ref() {
        let resolved = resolve("https://example.com/root.json", "#/defs/foo");
        assert_eq!(resolved, "https://example.com/root.json#/defs/foo");
    }

    #[test]
    fn empty_base_uses_placeholder_root() {
        let resolved = resolve("", "#/defs/foo");
        assert!(resolved.ends_with("#/defs/foo"));
    }

    #[test]
    fn split_fragment_separates_base_and_fragment() {
        assert_eq!(
            split_fragment("https://example.com/x#/a/b"),
            ("https://example.com/x", "/a/b")
        );
        assert_eq!(split_fragment("https://example.com/x"), ("https://example.com/x", ""));
    }
}
