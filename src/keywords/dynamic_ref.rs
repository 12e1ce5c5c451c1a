//! `$dynamicRef` (Draft 2020-12 only, `spec.md` §4.2). A JSON-Pointer
//! fragment behaves exactly like `$ref`; a plain anchor fragment walks the
//! dynamic-scope stack outermost-to-innermost looking for a matching
//! `$dynamicAnchor`, falling back to the statically resolved target.
use super::ref_;
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use crate::uri;
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let Value::String(reference) = value else {
        return Ok(Outcome::valid());
    };
    if reference.contains('/') {
        return ref_::validate_ref(engine, ctx, value);
    }
    let fragment = reference.trim_start_matches('#');

    let dynamic_target = engine.dynamic_scope.iter().find_map(|frame| {
        let candidate = format!("{}#{}", frame.base_uri, fragment);
        engine
            .registry
            .get(&candidate)
            .filter(|schema| {
                schema
                    .as_object()
                    .and_then(|obj| obj.get("$dynamicAnchor"))
                    .and_then(Value::as_str)
                    == Some(fragment)
            })
    });

    if let Some(target) = dynamic_target {
        return validate_schema(engine, ctx.instance, target, ctx.path, ctx.draft);
    }

    // No dynamic match anywhere on the active scope: fall back to the
    // statically resolved target, exactly as a plain `$ref`.
    let absolute = uri::resolve(engine.base_uri(), reference);
    if let Some(target) = engine.registry.get(&absolute) {
        return validate_schema(engine, ctx.instance, target, ctx.path, ctx.draft);
    }
    Ok(Outcome::valid())
}
