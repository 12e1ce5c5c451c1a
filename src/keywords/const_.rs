//! `const` (`spec.md` §4.4): value equality against a single literal.
use super::equality;
use crate::engine::{Ctx, Engine, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    if equality::equal(ctx.instance, value) {
        Outcome::valid()
    } else {
        engine.push_error(ctx.path.clone(), "const", format!("value must equal {value}"));
        Outcome::invalid()
    }
}
