//! Pass 2 orchestrator (`spec.md` §4.1): runs `allOf`, `anyOf`, `oneOf`,
//! `if`/`then`/`else`, and `not`, merging their outcomes per keyword.
use super::{all_of, any_of, if_, not, one_of};
use crate::engine::{Ctx, Engine, EngineResult, Outcome};

pub(crate) fn run<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>) -> EngineResult<Outcome> {
    let mut outcome = Outcome::valid();

    if let Some(value) = ctx.schema_obj.get("allOf") {
        outcome.merge(all_of::validate(engine, ctx, value)?);
    }
    if let Some(value) = ctx.schema_obj.get("anyOf") {
        outcome.merge(any_of::validate(engine, ctx, value)?);
    }
    if let Some(value) = ctx.schema_obj.get("oneOf") {
        outcome.merge(one_of::validate(engine, ctx, value)?);
    }
    if ctx.schema_obj.contains_key("if") {
        outcome.merge(if_::run(engine, ctx)?);
    }
    if let Some(value) = ctx.schema_obj.get("not") {
        outcome.merge(not::validate(engine, ctx, value)?);
    }

    Ok(outcome)
}
