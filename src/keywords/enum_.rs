//! `enum` (`spec.md` §4.4): value equality, per [`super::equality`].
use super::equality;
use crate::engine::{Ctx, Engine, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    let Value::Array(options) = value else {
        return Outcome::valid();
    };
    if options.iter().any(|option| equality::equal(ctx.instance, option)) {
        Outcome::valid()
    } else {
        engine.push_error(ctx.path.clone(), "enum", "value does not match any allowed enum member");
        Outcome::invalid()
    }
}
