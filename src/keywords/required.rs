//! `required` (`spec.md` §4.4).
use crate::engine::{Ctx, Engine, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    let Value::Object(instance) = ctx.instance else {
        return Outcome::valid();
    };
    let Value::Array(names) = value else {
        return Outcome::valid();
    };
    let mut valid = true;
    for name in names.iter().filter_map(Value::as_str) {
        if !instance.contains_key(name) {
            engine.push_error(ctx.path.clone(), "required", format!("missing required property {name:?}"));
            valid = false;
        }
    }
    Outcome::from_valid(valid)
}
