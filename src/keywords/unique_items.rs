//! `uniqueItems` (`spec.md` §4.4).
use super::equality;
use crate::engine::{Ctx, Engine, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    if value.as_bool() != Some(true) {
        return Outcome::valid();
    }
    let Value::Array(items) = ctx.instance else {
        return Outcome::valid();
    };
    if equality::all_unique(items) {
        Outcome::valid()
    } else {
        engine.push_error(ctx.path.clone(), "uniqueItems", "expected all items to be unique");
        Outcome::invalid()
    }
}
