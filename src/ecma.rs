//! Best-effort translation of ECMA-262 `pattern` values to the `regex`
//! crate's dialect, and the Unicode-mode decision for `pattern`/`regex`.
//!
//! Patterns with lookaround or backreferences cannot be translated (the
//! `regex` crate supports neither); such patterns are passed through
//! unchanged and will simply fail to compile, matching `regex`'s contract
//! for the `regex` format check (compile success = valid).

/// Whether `pattern` requires Unicode-aware matching: it contains non-ASCII
/// text, a Unicode property escape, a `\x{...}` hex escape, or any of the
/// Perl character classes `\d \D \w \W \s \S`.
#[must_use]
pub(crate) fn needs_unicode_mode(pattern: &str) -> bool {
    if !pattern.is_ascii() {
        return true;
    }
    if pattern.contains(r"\p{") || pattern.contains(r"\P{") || pattern.contains(r"\x{") {
        return true;
    }
    let bytes = pattern.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'\\' {
            match bytes[i + 1] {
                b'd' | b'D' | b'w' | b'W' | b's' | b'S' => return true,
                _ => {}
            }
            i += 2;
        } else {
            i += 1;
        }
    }
    false
}

/// Rewrite ASCII-only Perl classes (`\d \D \w \W \s \S`) to explicit
/// character classes, matching ECMA-262's ASCII-only default when neither
/// Unicode mode nor a `u` flag is in effect. Applied only when
/// [`needs_unicode_mode`] is `false`; when it is `true`, the pattern is
/// returned unchanged and validated with `regex`'s native (Unicode-aware)
/// classes instead.
#[must_use]
pub(crate) fn to_rust_regex(pattern: &str) -> String {
    if needs_unicode_mode(pattern) {
        return pattern.to_owned();
    }
    let mut out = String::with_capacity(pattern.len());
    let bytes = pattern.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 1 < bytes.len() {
            let replacement: Option<&str> = match bytes[i + 1] {
                b'd' => Some("[0-9]"),
                b'D' => Some("[^0-9]"),
                b'w' => Some("[A-Za-z0-9_]"),
                b'W' => Some("[^A-Za-z0-9_]"),
                b's' => Some("[ \\t\\n\\r\\f\\v]"),
                b'S' => Some("[^ \\t\\n\\r\\f\\v]"),
                _ => None,
            };
            if let Some(replacement) = replacement {
                out.push_str(replacement);
                i += 2;
                continue;
            }
            out.push(bytes[i] as char);
            out.push(bytes[i + 1] as char);
            i += 2;
            continue;
        }
        out.push(bytes[i] as char);
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_only_pattern_rewrites_perl_classes() {
        assert_eq!(to_rust_regex(r"^\d+$"), "^[0-9]+$");
        assert_eq!(to_rust_regex(r"\w-\s"), "[A-Za-z0-9_]-[ \\t\\n\\r\\f\\v]");
    }

    #[test]
    fn unicode_property_escape_triggers_unicode_mode_and_is_untouched() {
        assert!(needs_unicode_mode(r"\p{Letter}+"));
        assert_eq!(to_rust_regex(r"\p{Letter}+"), r"\p{Letter}+");
    }

    #[test]
    fn non_ascii_literal_triggers_unicode_mode() {
        assert!(needs_unicode_mode("café"));
    }
}
