//! Schema registry / indexer (`spec.md` §4.3).
//!
//! Walks a schema tree once per `validate` call, binding every subschema
//! that carries `$id`/`id`, `$anchor`, or `$dynamicAnchor` to an absolute
//! URI. `$ref`/`$recursiveRef`/`$dynamicRef` resolution consults this table
//! before falling back to a JSON Pointer walk of the root document.
use crate::uri;
use ahash::AHashMap;
use serde_json::{Map, Value};

/// Keywords whose presence marks an object as "recognizable as a schema"
/// per `spec.md` §4.3. Not required for indexing (which dispatches on
/// known keyword names directly) but kept as the documented predicate the
/// spec describes, and used by the compiler to sanity-check loaded external
/// documents.
const SCHEMA_MARKER_KEYWORDS: &[&str] = &[
    "type",
    "properties",
    "items",
    "required",
    "minimum",
    "maximum",
    "minLength",
    "maxLength",
    "pattern",
    "format",
    "enum",
    "const",
    "allOf",
    "anyOf",
    "oneOf",
    "not",
    "if",
    "then",
    "else",
    "$ref",
    "$id",
    "id",
    "definitions",
    "$defs",
    "$anchor",
    "$dynamicAnchor",
    "$recursiveAnchor",
    "$recursiveRef",
    "$dynamicRef",
    "$comment",
];

#[must_use]
pub(crate) fn is_schema_like(obj: &Map<String, Value>) -> bool {
    SCHEMA_MARKER_KEYWORDS.iter().any(|k| obj.contains_key(*k))
}

/// Keywords whose value is a name-keyed map of subschemas.
const SCHEMA_MAP_KEYWORDS: &[&str] = &[
    "properties",
    "patternProperties",
    "$defs",
    "definitions",
    "dependentSchemas",
];

/// Keywords whose value is an array of subschemas.
const SCHEMA_ARRAY_KEYWORDS: &[&str] = &["allOf", "anyOf", "oneOf", "prefixItems"];

/// Keywords whose value is always a single subschema (boolean or object).
const SCHEMA_VALUE_KEYWORDS: &[&str] = &[
    "additionalProperties",
    "propertyNames",
    "not",
    "if",
    "then",
    "else",
    "contains",
    "additionalItems",
    "unevaluatedProperties",
    "unevaluatedItems",
    "contentSchema",
];

pub(crate) struct Registry<'s> {
    entries: AHashMap<String, &'s Value>,
}

impl<'s> Registry<'s> {
    #[must_use]
    pub(crate) fn build(root: &'s Value, root_base: &str) -> Self {
        let mut entries = AHashMap::default();
        index(root, root_base, &mut entries);
        Registry { entries }
    }

    #[must_use]
    pub(crate) fn get(&self, uri: &str) -> Option<&'s Value> {
        self.entries.get(&uri::normalize(uri)).copied()
    }

    #[must_use]
    pub(crate) fn contains(&self, uri: &str) -> bool {
        self.entries.contains_key(&uri::normalize(uri))
    }
}

fn id_keyword(obj: &Map<String, Value>) -> Option<&str> {
    obj.get("$id")
        .or_else(|| obj.get("id"))
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

fn index<'s>(schema: &'s Value, base: &str, entries: &mut AHashMap<String, &'s Value>) {
    let Value::Object(obj) = schema else {
        return;
    };
    let mut current_base = base.to_owned();
    if let Some(id) = id_keyword(obj) {
        current_base = uri::resolve(base, id);
        entries.insert(uri::normalize(&current_base), schema);
    }
    if let Some(anchor) = obj.get("$anchor").and_then(Value::as_str) {
        entries.insert(format!("{current_base}#{anchor}"), schema);
    }
    if let Some(anchor) = obj.get("$dynamicAnchor").and_then(Value::as_str) {
        entries.insert(format!("{current_base}#{anchor}"), schema);
    }

    for (key, value) in obj {
        if key == "enum" || key == "const" {
            continue;
        }
        if SCHEMA_MAP_KEYWORDS.contains(&key.as_str()) {
            if let Value::Object(map) = value {
                for sub in map.values() {
                    index(sub, &current_base, entries);
                }
            }
        } else if SCHEMA_ARRAY_KEYWORDS.contains(&key.as_str()) {
            if let Value::Array(items) = value {
                for sub in items {
                    index(sub, &current_base, entries);
                }
            }
        } else if SCHEMA_VALUE_KEYWORDS.contains(&key.as_str()) {
            index(value, &current_base, entries);
        } else if key == "items" {
            match value {
                Value::Array(items) => {
                    for sub in items {
                        index(sub, &current_base, entries);
                    }
                }
                _ => index(value, &current_base, entries),
            }
        } else if key == "dependencies" {
            if let Value::Object(map) = value {
                for sub in map.values() {
                    if sub.is_object() || sub.is_boolean() {
                        index(sub, &current_base, entries);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn indexes_root_id_and_nested_anchor() {
        let schema = json!({
            "$id": "https://example.com/root.json",
            "$defs": {
                "positive": {"$anchor": "positive", "type": "integer", "minimum": 0}
            }
        });
        let registry = Registry::build(&schema, "");
        assert!(registry.contains("https://example.com/root.json"));
        assert!(registry.contains("https://example.com/root.json#positive"));
    }

    #[test]
    fn nested_id_rebinds_base_for_descendants() {
        let schema = json!({
            "$id": "https://example.com/root.json",
            "properties": {
                "child": {
                    "$id": "child.json",
                    "$anchor": "here"
                }
            }
        });
        let registry = Registry::build(&schema, "");
        assert!(registry.contains("https://example.com/child.json"));
        assert!(registry.contains("https://example.com/child.json#here"));
    }

    #[test]
    fn skips_enum_and_const_literal_data() {
        let schema = json!({
            "enum": [{"$id": "not-a-schema"}],
            "const": {"$anchor": "also-not-a-schema"}
        });
        let registry = Registry::build(&schema, "");
        assert!(!registry.contains("not-a-schema"));
    }
}
