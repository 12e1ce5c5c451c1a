//! RFC 6901 JSON Pointer evaluation over an in-memory schema tree.
use crate::uri;
use serde_json::Value;

/// Unescape a single JSON Pointer reference token: percent-decode first,
/// then `~1` -> `/`, `~0` -> `~` (order matters, per RFC 6901 §4 as amended
/// by the URI fragment encoding used in `$ref`/`$id`).
fn unescape_token(token: &str) -> String {
    let decoded = percent_encoding::percent_decode_str(token)
        .decode_utf8()
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| token.to_owned());
    let mut result = String::with_capacity(decoded.len());
    let mut chars = decoded.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '~' {
            match chars.peek() {
                Some('0') => {
                    result.push('~');
                    chars.next();
                }
                Some('1') => {
                    result.push('/');
                    chars.next();
                }
                _ => result.push('~'),
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Evaluate a JSON Pointer (without the leading `#`) against `root`.
///
/// Returns `None` if any segment is missing or descends into a
/// non-container value.
#[must_use]
pub fn resolve<'a>(root: &'a Value, pointer: &str) -> Option<&'a Value> {
    let pointer = pointer.strip_prefix('#').unwrap_or(pointer);
    if pointer.is_empty() {
        return Some(root);
    }
    let mut current = root;
    for raw_segment in pointer.split('/').skip(1) {
        let segment = unescape_token(raw_segment);
        current = match current {
            Value::Object(map) => map.get(&segment)?,
            Value::Array(items) => {
                let index: usize = segment.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
    }
    Some(current)
}

/// Like [`resolve`], but also tracks the base URI across the walk: every
/// intermediate subschema *below* `root` that carries `$id`/`id` rebinds the
/// running base, per `spec.md` §4.2 step 4. `root`'s own base is `base`
/// as given (it is the resource root the caller already resolved) and is
/// not re-resolved here. Returns the target and the base URI in effect at
/// that target.
#[must_use]
pub(crate) fn resolve_with_base<'a>(root: &'a Value, pointer: &str, base: &str) -> Option<(&'a Value, String)> {
    let pointer = pointer.strip_prefix('#').unwrap_or(pointer);
    let mut current = root;
    let mut current_base = base.to_owned();
    if pointer.is_empty() {
        return Some((current, current_base));
    }
    for raw_segment in pointer.split('/').skip(1) {
        let segment = unescape_token(raw_segment);
        current = match current {
            Value::Object(map) => map.get(&segment)?,
            Value::Array(items) => {
                let index: usize = segment.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
        rebind_base(current, &mut current_base);
    }
    Some((current, current_base))
}

fn rebind_base(schema: &Value, base: &mut String) {
    let Some(id) = schema
        .as_object()
        .and_then(|obj| obj.get("$id").or_else(|| obj.get("id")))
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
    else {
        return;
    };
    *base = uri::resolve(base, id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_property() {
        let doc = json!({"a": {"b": [1, 2, {"c": 3}]}});
        assert_eq!(resolve(&doc, "/a/b/2/c"), Some(&json!(3)));
    }

    #[test]
    fn empty_pointer_returns_root() {
        let doc = json!({"a": 1});
        assert_eq!(resolve(&doc, ""), Some(&doc));
        assert_eq!(resolve(&doc, "#"), Some(&doc));
    }

    #[test]
    fn unescapes_tilde_and_slash_in_order() {
        let doc = json!({"a/b": {"c~d": 1}});
        assert_eq!(resolve(&doc, "/a~1b/c~0d"), Some(&json!(1)));
    }

    #[test]
    fn missing_segment_is_unresolved() {
        let doc = json!({"a": 1});
        assert_eq!(resolve(&doc, "/b"), None);
    }

    #[test]
    fn descending_into_scalar_is_unresolved() {
        let doc = json!({"a": 1});
        assert_eq!(resolve(&doc, "/a/b"), None);
    }

    #[test]
    fn resolve_with_base_rebinds_on_intermediate_id() {
        let doc = json!({
            "$defs": {
                "outer": {
                    "$id": "https://example.com/outer.json",
                    "$defs": {"inner": {"type": "integer"}}
                }
            }
        });
        let (target, base) =
            resolve_with_base(&doc, "/$defs/outer/$defs/inner", "https://example.com/root.json").unwrap();
        assert_eq!(target, &json!({"type": "integer"}));
        assert_eq!(base, "https://example.com/outer.json");
    }

    #[test]
    fn resolve_with_base_keeps_root_base_without_intermediate_id() {
        let doc = json!({"a": {"b": 1}});
        let (target, base) = resolve_with_base(&doc, "/a/b", "https://example.com/root.json").unwrap();
        assert_eq!(target, &json!(1));
        assert_eq!(base, "https://example.com/root.json");
    }
}
