//! `minLength` (`spec.md` §4.4): character count, not byte count.
use crate::engine::{Ctx, Engine, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    let Value::String(s) = ctx.instance else {
        return Outcome::valid();
    };
    let Some(limit) = value.as_u64() else {
        return Outcome::valid();
    };
    if s.chars().count() as u64 >= limit {
        Outcome::valid()
    } else {
        engine.push_error(ctx.path.clone(), "minLength", format!("expected at least {limit} characters"));
        Outcome::invalid()
    }
}
