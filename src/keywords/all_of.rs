//! `allOf` (`spec.md` §4.3): every branch must validate; annotations from
//! all branches merge regardless of outcome.
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let Value::Array(branches) = value else {
        return Ok(Outcome::valid());
    };
    let mut outcome = Outcome::valid();
    for branch in branches {
        let sub_outcome = validate_schema(engine, ctx.instance, branch, ctx.path, ctx.draft)?;
        outcome.merge(sub_outcome);
    }
    Ok(outcome)
}
