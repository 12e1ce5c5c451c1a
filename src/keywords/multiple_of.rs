//! `multipleOf` (`spec.md` §4.4).
use super::helpers;
use crate::engine::{Ctx, Engine, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    let (Value::Number(instance), Value::Number(divisor)) = (ctx.instance, value) else {
        return Outcome::valid();
    };
    let (Some(instance), Some(divisor)) = (instance.as_f64(), divisor.as_f64()) else {
        return Outcome::valid();
    };
    if helpers::is_multiple_of(instance, divisor) {
        Outcome::valid()
    } else {
        engine.push_error(ctx.path.clone(), "multipleOf", format!("must be a multiple of {divisor}"));
        Outcome::invalid()
    }
}
