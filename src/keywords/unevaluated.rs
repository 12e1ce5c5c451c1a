//! Pass 3 orchestrator (`spec.md` §4.1): `unevaluatedProperties` and
//! `unevaluatedItems` read the annotation set merged from Passes 1 and 2.
use super::{unevaluated_items, unevaluated_properties};
use crate::engine::{Ctx, Engine, EngineResult, Outcome};

pub(crate) fn run<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, evaluated: &Outcome) -> EngineResult<Outcome> {
    let mut outcome = Outcome::valid();
    if let Some(value) = ctx.schema_obj.get("unevaluatedProperties") {
        outcome.merge(unevaluated_properties::validate(engine, ctx, value, evaluated)?);
    }
    if let Some(value) = ctx.schema_obj.get("unevaluatedItems") {
        outcome.merge(unevaluated_items::validate(engine, ctx, value, evaluated)?);
    }
    Ok(outcome)
}
