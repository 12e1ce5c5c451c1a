//! `minimum` (`spec.md` §4.4). In Draft 4, `exclusiveMinimum` is a sibling
//! boolean that turns this bound exclusive; see [`super::exclusive_minimum`].
use super::helpers;
use crate::engine::{Ctx, Engine, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    let (Value::Number(instance), Value::Number(limit)) = (ctx.instance, value) else {
        return Outcome::valid();
    };
    let exclusive = ctx.draft.boolean_exclusive_bounds()
        && ctx.schema_obj.get("exclusiveMinimum").and_then(Value::as_bool) == Some(true);
    let ok = if exclusive {
        helpers::num_gt(instance, limit)
    } else {
        helpers::num_ge(instance, limit)
    };
    if ok {
        Outcome::valid()
    } else {
        engine.push_error(ctx.path.clone(), "minimum", format!("must be >= {limit}"));
        Outcome::invalid()
    }
}
