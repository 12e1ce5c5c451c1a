//! `oneOf` (`spec.md` §4.3): exactly one branch must succeed; only that
//! branch's annotations and errors are kept.
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let Value::Array(branches) = value else {
        return Ok(Outcome::valid());
    };
    let mut matches = Vec::new();
    for branch in branches {
        let checkpoint = engine.errors_checkpoint();
        let sub_outcome = validate_schema(engine, ctx.instance, branch, ctx.path, ctx.draft)?;
        engine.discard_errors_since(checkpoint);
        if sub_outcome.valid {
            matches.push(sub_outcome);
        }
    }

    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => {
            engine.push_error(ctx.path.clone(), "oneOf", "instance does not match any branch");
            Ok(Outcome::invalid())
        }
        n => {
            engine.push_error(ctx.path.clone(), "oneOf", format!("instance matches {n} branches, expected exactly one"));
            Ok(Outcome::invalid())
        }
    }
}
