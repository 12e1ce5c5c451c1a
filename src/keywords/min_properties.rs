//! `minProperties` (`spec.md` §4.4).
use crate::engine::{Ctx, Engine, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    let (Value::Object(instance), Some(limit)) = (ctx.instance, value.as_u64()) else {
        return Outcome::valid();
    };
    if instance.len() as u64 >= limit {
        Outcome::valid()
    } else {
        engine.push_error(ctx.path.clone(), "minProperties", format!("expected at least {limit} properties"));
        Outcome::invalid()
    }
}
