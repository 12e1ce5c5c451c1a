//! `anyOf` (`spec.md` §4.3): at least one branch must succeed; annotations
//! merge from every branch that does.
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let Value::Array(branches) = value else {
        return Ok(Outcome::valid());
    };
    let mut outcome = Outcome::invalid();
    let mut any_passed = false;
    for branch in branches {
        let checkpoint = engine.errors_checkpoint();
        let sub_outcome = validate_schema(engine, ctx.instance, branch, ctx.path, ctx.draft)?;
        if sub_outcome.valid {
            any_passed = true;
            outcome.evaluated_properties.extend(sub_outcome.evaluated_properties);
            outcome.evaluated_items.extend(sub_outcome.evaluated_items);
        } else {
            engine.discard_errors_since(checkpoint);
        }
    }
    outcome.valid = any_passed;
    if !any_passed {
        engine.push_error(ctx.path.clone(), "anyOf", "instance does not match any branch");
    }
    Ok(outcome)
}
