//! The evaluation engine: draft detection, initialization, and the
//! recursive `validate_schema` three-pass sweep (`spec.md` §4.1).
use crate::{
    error::{EngineError, ValidationError, ValidationResult},
    options::{self, Draft, ValidationOptions},
    paths::JsonPath,
    registry::Registry,
    uri,
};
use ahash::AHashSet;
use serde_json::{Map, Value};

/// Hard ceiling on nested `validate_schema` recursion (`spec.md` §3/§5).
const MAX_DEPTH: usize = 1000;
/// First threshold: the second occurrence of the same `$ref` URI on the
/// active resolution stack is treated as proof the recursive shape holds.
const REF_CYCLE_BREAK: usize = 2;
/// Hard cap for ordinary schema URIs.
const REF_HARD_CAP: usize = 50;
/// Hard cap for meta-schema URIs (`json-schema.org`), which legitimately
/// recurse deeper while validating schema documents against themselves.
const REF_HARD_CAP_META: usize = 200;

pub(crate) type EngineResult<T> = Result<T, EngineError>;

/// A frame on the dynamic-scope stack, pushed for every `validate_schema`
/// entry. Consulted only by `$dynamicRef`/`$recursiveRef`.
pub(crate) struct DynamicFrame<'s> {
    pub base_uri: String,
    pub dynamic_anchor: Option<String>,
    pub schema: &'s Value,
}

/// The result of validating an instance against a (sub)schema: whether it
/// is valid, plus the properties/items *of that same instance* which some
/// keyword marked as evaluated. Composition keywords merge these sets from
/// their branches per `spec.md` §4.1's merge policy before returning them
/// to their own caller — this is the annotation store of `spec.md` §3,
/// realized as return values instead of a global path-keyed map (see
/// `SPEC_FULL.md` §3 and `DESIGN.md`).
#[derive(Debug, Default, Clone)]
pub(crate) struct Outcome {
    pub valid: bool,
    pub evaluated_properties: AHashSet<String>,
    pub evaluated_items: AHashSet<usize>,
}

impl Outcome {
    #[must_use]
    pub(crate) fn valid() -> Self {
        Outcome {
            valid: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub(crate) fn invalid() -> Self {
        Outcome {
            valid: false,
            ..Default::default()
        }
    }

    #[must_use]
    pub(crate) fn from_valid(valid: bool) -> Self {
        Outcome {
            valid,
            ..Default::default()
        }
    }

    pub(crate) fn merge(&mut self, other: Outcome) {
        self.valid &= other.valid;
        self.evaluated_properties.extend(other.evaluated_properties);
        self.evaluated_items.extend(other.evaluated_items);
    }
}

/// Bundles the per-keyword-invocation context that every keyword handler
/// needs: the instance, the *enclosing* schema object (for sibling lookups
/// such as Draft 4's boolean `exclusiveMinimum`), the instance path for
/// error reporting, and the active draft.
pub(crate) struct Ctx<'a, 's> {
    pub instance: &'a Value,
    pub schema_obj: &'s Map<String, Value>,
    pub path: &'a JsonPath,
    pub draft: Draft,
}

/// All state scoped to a single `validate` call (`spec.md` §3 "Lifecycle").
pub(crate) struct Engine<'s> {
    pub root: &'s Value,
    pub registry: Registry<'s>,
    pub base_uri_stack: Vec<String>,
    pub dynamic_scope: Vec<DynamicFrame<'s>>,
    pub ref_stack: Vec<String>,
    pub depth: usize,
    pub errors: Vec<ValidationError>,
    pub options: ValidationOptions,
    pub active_vocab: Option<AHashSet<String>>,
}

impl<'s> Engine<'s> {
    pub(crate) fn base_uri(&self) -> &str {
        self.base_uri_stack.last().map_or("", String::as_str)
    }

    pub(crate) fn format_assertion(&self, draft: Draft) -> bool {
        if let Some(forced) = self.options.format_assertion {
            return forced;
        }
        if let Some(vocab) = &self.active_vocab {
            if vocab.contains(options::vocabulary::FORMAT_ASSERTION_2020) {
                return true;
            }
            if vocab.contains(options::vocabulary::FORMAT_2019)
                || vocab.contains(options::vocabulary::FORMAT_ANNOTATION_2020)
            {
                return false;
            }
        }
        draft.format_asserts_by_default()
    }

    pub(crate) fn push_error(&mut self, path: JsonPath, keyword: &'static str, message: impl Into<String>) {
        self.errors.push(ValidationError::new(path, keyword, message));
    }

    /// Marks the current length of the error list, for composition keywords
    /// that must evaluate a branch "in isolation" (`spec.md` §4.1 Pass 2)
    /// and discard its leaf errors if the branch is not the one kept.
    pub(crate) fn errors_checkpoint(&self) -> usize {
        self.errors.len()
    }

    /// Drops every error pushed since `checkpoint`.
    pub(crate) fn discard_errors_since(&mut self, checkpoint: usize) {
        self.errors.truncate(checkpoint);
    }
}

/// Detect the draft vocabularies declared on a metaschema reached through
/// `$schema`, if the registry or loader can provide one. Only meaningful
/// from Draft 2019-09 onward; earlier drafts have no `$vocabulary`.
fn detect_vocabularies(root: &Value, schema_uri: Option<&str>) -> Option<AHashSet<String>> {
    let schema_uri = schema_uri?;
    // We only ever recognize the vocabulary declaration when it is inlined
    // on the root document itself (no network fetch of the real
    // metaschema, consistent with `spec.md` §1's scope).
    let _ = schema_uri;
    root.as_object()
        .and_then(|obj| obj.get("$vocabulary"))
        .and_then(Value::as_object)
        .map(|map| map.keys().cloned().collect())
}

/// Top-level entry point: `spec.md` §4.1 "Initialization" through the
/// root `validate_schema` call.
pub(crate) fn run(
    instance: &Value,
    schema: &Value,
    options: &ValidationOptions,
) -> EngineResult<ValidationResult> {
    let schema_uri = schema.as_object().and_then(|o| o.get("$schema")).and_then(Value::as_str);
    let draft = match options.draft {
        Some(draft) => draft,
        None => match schema_uri.and_then(Draft::detect) {
            Some(draft) => draft,
            None => match options.draft_detection {
                options::DraftDetectionMode::Permissive => Draft::default(),
                options::DraftDetectionMode::Strict => {
                    return Err(match schema_uri {
                        Some(uri) => EngineError::UnsupportedDraft {
                            schema_uri: uri.to_owned(),
                        },
                        None => EngineError::DraftCannotBeDetected,
                    });
                }
            },
        },
    };

    // Boolean root schemas never carry `$id`/`$vocabulary`.
    let root_id = schema
        .as_object()
        .and_then(|obj| obj.get("$id").or_else(|| obj.get("id")))
        .and_then(Value::as_str)
        .unwrap_or_default();
    let root_base = if root_id.is_empty() {
        String::new()
    } else {
        uri::resolve("", root_id)
    };

    let registry = Registry::build(schema, &root_base);
    let active_vocab = detect_vocabularies(schema, schema_uri);

    let mut engine = Engine {
        root: schema,
        registry,
        base_uri_stack: vec![root_base],
        dynamic_scope: Vec::new(),
        ref_stack: Vec::new(),
        depth: 0,
        errors: Vec::new(),
        options: options.clone(),
        active_vocab,
    };

    let outcome = validate_schema(&mut engine, instance, schema, &JsonPath::new(), draft)?;
    debug_assert_eq!(engine.base_uri_stack.len(), 1);
    debug_assert!(engine.dynamic_scope.is_empty());

    if outcome.valid {
        Ok(ValidationResult::valid())
    } else {
        Ok(ValidationResult::invalid(engine.errors))
    }
}

/// Does this schema carry a non-empty `$id`/`id`?
fn schema_id<'s>(schema: &'s Value) -> Option<&'s str> {
    schema
        .as_object()
        .and_then(|obj| obj.get("$id").or_else(|| obj.get("id")))
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

fn dynamic_anchor_of(schema: &Value) -> Option<String> {
    schema
        .as_object()
        .and_then(|obj| {
            obj.get("$dynamicAnchor")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .or_else(|| {
                    obj.get("$recursiveAnchor")
                        .and_then(Value::as_bool)
                        .filter(|b| *b)
                        .map(|_| String::from("$recursiveAnchor"))
                })
        })
}

/// The recursive core of the engine: `spec.md` §4.1 steps 1-7.
pub(crate) fn validate_schema<'s>(
    engine: &mut Engine<'s>,
    instance: &Value,
    schema: &'s Value,
    path: &JsonPath,
    draft: Draft,
) -> EngineResult<Outcome> {
    match schema {
        Value::Bool(true) => return Ok(Outcome::valid()),
        Value::Bool(false) => {
            engine.push_error(path.clone(), "false_schema", "the boolean schema `false` rejects every instance");
            return Ok(Outcome::invalid());
        }
        Value::Object(_) => {}
        _ => return Ok(Outcome::valid()),
    }
    let schema_obj = schema.as_object().expect("checked above");

    engine.depth += 1;
    if engine.depth > MAX_DEPTH {
        engine.depth -= 1;
        return Err(EngineError::RecursionDepthExceeded);
    }

    // Step 3: `$id` unconditionally opens a new base-URI resource. See
    // SPEC_FULL.md §4.1 for why this resolves the spec's ambiguous wording
    // in favor of always pushing.
    let pushed_base = if let Some(id) = schema_id(schema) {
        let resolved = uri::resolve(engine.base_uri(), id);
        engine.base_uri_stack.push(resolved);
        true
    } else {
        false
    };

    // Step 4: dynamic-scope frame.
    engine.dynamic_scope.push(DynamicFrame {
        base_uri: engine.base_uri().to_owned(),
        dynamic_anchor: dynamic_anchor_of(schema),
        schema,
    });

    let result = run_sweep(engine, instance, schema_obj, path, draft);

    engine.dynamic_scope.pop();
    if pushed_base {
        engine.base_uri_stack.pop();
    }
    engine.depth -= 1;

    result
}

fn run_sweep<'s>(
    engine: &mut Engine<'s>,
    instance: &Value,
    schema_obj: &'s Map<String, Value>,
    path: &JsonPath,
    draft: Draft,
) -> EngineResult<Outcome> {
    let ctx = Ctx {
        instance,
        schema_obj,
        path,
        draft,
    };

    // Step 5: `$ref` overrides siblings in Draft 4-7.
    if draft.ref_overrides_siblings() {
        if let Some(reference) = schema_obj.get("$ref") {
            return crate::keywords::ref_::validate_ref(engine, &ctx, reference);
        }
    }

    // Pass 1.
    let mut outcome = Outcome::valid();
    for keyword in crate::keywords::PASS1_ORDER {
        if let Some(value) = schema_obj.get(*keyword) {
            if !crate::keywords::is_applicable(keyword, draft, engine.active_vocab.as_ref()) {
                continue;
            }
            let kw_outcome = crate::keywords::dispatch(engine, &ctx, keyword, value)?;
            outcome.merge(kw_outcome);
        }
    }

    // Pass 2: composition keywords.
    let composition_outcome = crate::keywords::composition::run(engine, &ctx)?;
    outcome.merge(composition_outcome);

    // Pass 3: unevaluated keywords, which read the merged annotation set.
    if draft.has_unevaluated() {
        let unevaluated_outcome = crate::keywords::unevaluated::run(engine, &ctx, &outcome)?;
        outcome.merge(unevaluated_outcome);
    }

    Ok(outcome)
}

/// Record that the absolute URI `target` is about to be entered via
/// `$ref`/`$recursiveRef`/`$dynamicRef`, applying the cycle-break
/// thresholds from `spec.md` §4.2 step 2. Returns `true` if resolution
/// should proceed, `false` if the engine should short-circuit to `true`
/// (proof-by-recursion / hard cap).
pub(crate) fn should_enter_ref(engine: &Engine<'_>, target: &str) -> bool {
    let occurrences = engine.ref_stack.iter().filter(|u| u.as_str() == target).count();
    let cap = if target.contains("json-schema.org") {
        REF_HARD_CAP_META
    } else {
        REF_HARD_CAP
    };
    occurrences < REF_CYCLE_BREAK && occurrences < cap
}

/// Test-only fixture: a throwaway [`Engine`] for keyword unit tests that
/// need the type but not a real registry or call stack.
#[cfg(test)]
pub(crate) mod test_support {
    use super::{AHashSet, Engine};
    use crate::{options::ValidationOptions, registry::Registry};
    use once_cell::sync::Lazy;
    use serde_json::Value;

    static EMPTY_ROOT: Lazy<Value> = Lazy::new(|| Value::Bool(true));

    pub(crate) fn empty_engine() -> Engine<'static> {
        Engine {
            root: &EMPTY_ROOT,
            registry: Registry::build(&EMPTY_ROOT, ""),
            base_uri_stack: vec![String::new()],
            dynamic_scope: Vec::new(),
            ref_stack: Vec::new(),
            depth: 0,
            errors: Vec::new(),
            options: ValidationOptions::default(),
            active_vocab: None::<AHashSet<String>>,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(schema: &Value, instance: &Value) -> ValidationResult {
        run(instance, schema, &ValidationOptions::default()).expect("no engine fault")
    }

    #[test]
    fn boolean_true_schema_accepts_everything() {
        assert!(validate(&json!(true), &json!(42)).valid);
        assert!(validate(&json!(true), &json!(null)).valid);
    }

    #[test]
    fn boolean_false_schema_rejects_everything() {
        assert!(!validate(&json!(false), &json!(42)).valid);
    }

    #[test]
    fn empty_schema_accepts_everything() {
        assert!(validate(&json!({}), &json!("anything")).valid);
    }

    #[test]
    fn stack_balance_after_nested_refs() {
        let schema = json!({
            "$defs": {"node": {"type": "object", "properties": {"child": {"$ref": "#/$defs/node"}}}},
            "$ref": "#/$defs/node"
        });
        let instance = json!({"child": {"child": {"child": {}}}});
        assert!(validate(&schema, &instance).valid);
    }
}
