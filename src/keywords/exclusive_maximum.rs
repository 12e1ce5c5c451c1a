//! `exclusiveMaximum` (`spec.md` §4.4). A standalone numeric bound from
//! Draft 6 onward; in Draft 4 this keyword is a boolean sibling of
//! `maximum` and is handled inside [`super::maximum`] instead.
use super::helpers;
use crate::engine::{Ctx, Engine, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    if ctx.draft.boolean_exclusive_bounds() {
        return Outcome::valid();
    }
    let (Value::Number(instance), Value::Number(limit)) = (ctx.instance, value) else {
        return Outcome::valid();
    };
    if helpers::num_lt(instance, limit) {
        Outcome::valid()
    } else {
        engine.push_error(ctx.path.clone(), "exclusiveMaximum", format!("must be < {limit}"));
        Outcome::invalid()
    }
}
