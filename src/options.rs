//! Draft selection, per-draft profiles, and the `ValidationOptions` builder.
use serde_json::Value;
use std::{fmt, sync::Arc};

/// A JSON Schema draft version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Draft {
    Draft4,
    Draft6,
    Draft7,
    Draft201909,
    Draft202012,
}

impl Default for Draft {
    fn default() -> Self {
        Draft::Draft202012
    }
}

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Draft::Draft4 => "Draft 4",
            Draft::Draft6 => "Draft 6",
            Draft::Draft7 => "Draft 7",
            Draft::Draft201909 => "Draft 2019-09",
            Draft::Draft202012 => "Draft 2020-12",
        })
    }
}

impl Draft {
    /// Detect a draft from a `$schema` URI using substring matching, per
    /// the rules in the public API contract.
    #[must_use]
    pub fn detect(schema_uri: &str) -> Option<Draft> {
        if schema_uri.contains("draft-04") || schema_uri.contains("draft/4") {
            Some(Draft::Draft4)
        } else if schema_uri.contains("draft-06") || schema_uri.contains("draft/6") {
            Some(Draft::Draft6)
        } else if schema_uri.contains("draft-07") || schema_uri.contains("draft/7") {
            Some(Draft::Draft7)
        } else if schema_uri.contains("2019-09") || schema_uri.contains("draft/2019-09") {
            Some(Draft::Draft201909)
        } else if schema_uri.contains("2020-12") || schema_uri.contains("draft/2020-12") {
            Some(Draft::Draft202012)
        } else {
            None
        }
    }

    /// Inspect the root schema's `$schema` keyword, if any, and detect a draft.
    #[must_use]
    pub fn detect_from_schema(schema: &Value) -> Option<Draft> {
        schema
            .as_object()
            .and_then(|obj| obj.get("$schema"))
            .and_then(Value::as_str)
            .and_then(Draft::detect)
    }

    /// Whether this draft ignores every sibling keyword once `$ref` is present
    /// on the same schema object (true for Draft 4 through Draft 7).
    #[must_use]
    pub fn ref_overrides_siblings(self) -> bool {
        matches!(self, Draft::Draft4 | Draft::Draft6 | Draft::Draft7)
    }

    /// Whether `exclusiveMinimum`/`exclusiveMaximum` are booleans that modify
    /// `minimum`/`maximum` (Draft 4) rather than standalone numeric bounds.
    #[must_use]
    pub fn boolean_exclusive_bounds(self) -> bool {
        matches!(self, Draft::Draft4)
    }

    /// Whether a float with a zero fractional part (e.g. `1.0`) counts as an
    /// `integer`. False only for Draft 4, which requires a JSON-native integer.
    #[must_use]
    pub fn float_is_integer(self) -> bool {
        !matches!(self, Draft::Draft4)
    }

    /// Whether `contentEncoding`/`contentMediaType` are assertions (Draft 7)
    /// or annotation-only (2019-09+) / entirely absent (Draft 4/6).
    #[must_use]
    pub fn content_is_assertion(self) -> bool {
        matches!(self, Draft::Draft7)
    }

    #[must_use]
    pub fn has_content_keywords(self) -> bool {
        !matches!(self, Draft::Draft4 | Draft::Draft6)
    }

    /// Whether `dependentRequired`/`dependentSchemas` exist as their own
    /// keywords (2019-09+), as opposed to the unified `dependencies` (4-7).
    #[must_use]
    pub fn has_split_dependencies(self) -> bool {
        matches!(self, Draft::Draft201909 | Draft::Draft202012)
    }

    /// Whether `$recursiveRef`/`$recursiveAnchor` exist (2019-09 only).
    #[must_use]
    pub fn has_recursive_ref(self) -> bool {
        matches!(self, Draft::Draft201909)
    }

    /// Whether `$dynamicRef`/`$dynamicAnchor` exist (2020-12 only).
    #[must_use]
    pub fn has_dynamic_ref(self) -> bool {
        matches!(self, Draft::Draft202012)
    }

    /// Whether `unevaluatedProperties`/`unevaluatedItems` exist (2019-09+).
    #[must_use]
    pub fn has_unevaluated(self) -> bool {
        matches!(self, Draft::Draft201909 | Draft::Draft202012)
    }

    /// Whether `prefixItems` exists as a separate keyword from `items`
    /// (2020-12 only; earlier drafts overload `items` with array-valued schemas).
    #[must_use]
    pub fn has_prefix_items(self) -> bool {
        matches!(self, Draft::Draft202012)
    }

    /// Default for whether `format` is asserted rather than annotation-only,
    /// absent an explicit `format_assertion` override or vocabulary declaration.
    #[must_use]
    pub fn format_asserts_by_default(self) -> bool {
        matches!(self, Draft::Draft4 | Draft::Draft6 | Draft::Draft7)
    }
}

/// Vocabulary URIs that gate format assertion behaviour in 2019-09/2020-12.
pub mod vocabulary {
    pub const FORMAT_2019: &str = "https://json-schema.org/draft/2019-09/vocab/format";
    pub const FORMAT_ANNOTATION_2020: &str =
        "https://json-schema.org/draft/2020-12/vocab/format-annotation";
    pub const FORMAT_ASSERTION_2020: &str =
        "https://json-schema.org/draft/2020-12/vocab/format-assertion";
}

/// Consumed by the engine to obtain schema documents for URIs that are
/// neither registered in-document nor addressable as a pointer into a
/// registered document. The engine performs no network or filesystem I/O
/// itself; see `spec.md` §1/§6.
pub trait SchemaLoader: Send + Sync {
    /// Return the parsed schema document for `uri`, or `None` if it cannot
    /// be provided.
    fn load(&self, uri: &str) -> Option<Value>;
}

/// The default loader: resolves nothing. Callers who need external
/// references must supply their own [`SchemaLoader`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSchemaLoader;

impl SchemaLoader for NullSchemaLoader {
    fn load(&self, _uri: &str) -> Option<Value> {
        None
    }
}

/// What to do when the active draft cannot be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftDetectionMode {
    /// Default to Draft 2020-12 when `$schema` is missing or unrecognized.
    Permissive,
    /// Raise `EngineError::UnsupportedDraft`/`DraftCannotBeDetected` instead.
    Strict,
}

impl Default for DraftDetectionMode {
    fn default() -> Self {
        DraftDetectionMode::Permissive
    }
}

/// Configuration for a `validate` call, built with [`crate::options`].
#[derive(Clone)]
pub struct ValidationOptions {
    pub(crate) draft: Option<Draft>,
    pub(crate) format_assertion: Option<bool>,
    pub(crate) schema_loader: Arc<dyn SchemaLoader>,
    pub(crate) draft_detection: DraftDetectionMode,
}

impl fmt::Debug for ValidationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationOptions")
            .field("draft", &self.draft)
            .field("format_assertion", &self.format_assertion)
            .field("draft_detection", &self.draft_detection)
            .finish_non_exhaustive()
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            draft: None,
            format_assertion: None,
            schema_loader: Arc::new(NullSchemaLoader),
            draft_detection: DraftDetectionMode::Permissive,
        }
    }
}

impl ValidationOptions {
    /// Force a specific draft instead of autodetecting from `$schema`.
    #[must_use]
    pub fn with_draft(mut self, draft: Draft) -> Self {
        self.draft = Some(draft);
        self
    }

    /// Force format keywords to be asserted, even in drafts that default
    /// them to annotation-only.
    #[must_use]
    pub fn with_format_assertion(mut self, enabled: bool) -> Self {
        self.format_assertion = Some(enabled);
        self
    }

    /// Supply a loader for schemas that cannot be resolved from the
    /// in-document registry.
    #[must_use]
    pub fn with_schema_loader(mut self, loader: impl SchemaLoader + 'static) -> Self {
        self.schema_loader = Arc::new(loader);
        self
    }

    /// Raise a fatal `EngineError` instead of defaulting to Draft 2020-12
    /// when the draft cannot be determined.
    #[must_use]
    pub fn with_strict_draft_detection(mut self) -> Self {
        self.draft_detection = DraftDetectionMode::Strict;
        self
    }

    /// Validate `instance` against `schema` using these options.
    pub fn validate<'s>(
        &self,
        instance: &Value,
        schema: &'s Value,
    ) -> Result<crate::ValidationResult, crate::EngineError> {
        crate::engine::run(instance, schema, self)
    }
}

/// Start building a [`ValidationOptions`].
#[must_use]
pub fn options() -> ValidationOptions {
    ValidationOptions::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_draft_uris() {
        assert_eq!(
            Draft::detect("http://json-schema.org/draft-07/schema#"),
            Some(Draft::Draft7)
        );
        assert_eq!(
            Draft::detect("https://json-schema.org/draft/2020-12/schema"),
            Some(Draft::Draft202012)
        );
        assert_eq!(Draft::detect("not-a-draft-uri"), None);
    }

    #[test]
    fn ref_overrides_siblings_only_pre_2019() {
        assert!(Draft::Draft7.ref_overrides_siblings());
        assert!(!Draft::Draft201909.ref_overrides_siblings());
        assert!(!Draft::Draft202012.ref_overrides_siblings());
    }
}
