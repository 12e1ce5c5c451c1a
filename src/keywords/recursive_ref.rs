//! `$recursiveRef` (Draft 2019-09 only, `spec.md` §4.2). Only the bare `#`
//! form has dynamic behaviour; anything else falls back to `$ref`.
use super::ref_;
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let Value::String(reference) = value else {
        return Ok(Outcome::valid());
    };
    if reference != "#" {
        return ref_::validate_ref(engine, ctx, value);
    }

    // Find the innermost dynamic-scope frame that is a resource root (i.e.
    // carries `$id`), working from the top of the stack downward.
    let resource_root = engine
        .dynamic_scope
        .iter()
        .rev()
        .find(|frame| frame.schema.as_object().is_some_and(|obj| obj.contains_key("$id") || obj.contains_key("id")))
        .map(|frame| frame.schema);
    let Some(resource_root) = resource_root else {
        return Ok(Outcome::valid());
    };

    let anchored = resource_root
        .as_object()
        .and_then(|obj| obj.get("$recursiveAnchor"))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !anchored {
        return validate_schema(engine, ctx.instance, resource_root, ctx.path, ctx.draft);
    }

    // Walk outermost-to-innermost, stopping at the first frame carrying
    // `$recursiveAnchor: true`, or at the resource boundary, whichever first.
    let mut target = resource_root;
    for frame in &engine.dynamic_scope {
        let obj = frame.schema.as_object();
        let has_anchor = obj.and_then(|o| o.get("$recursiveAnchor")).and_then(Value::as_bool).unwrap_or(false);
        if has_anchor {
            target = frame.schema;
            break;
        }
        let is_resource_boundary = obj.is_some_and(|o| o.contains_key("$id") || o.contains_key("id"));
        if is_resource_boundary {
            break;
        }
    }

    validate_schema(engine, ctx.instance, target, ctx.path, ctx.draft)
}
