//! `not` (`spec.md` §4.3): evaluated in isolation, its annotations and
//! leaf errors are always discarded; succeeds iff the inner schema fails.
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let checkpoint = engine.errors_checkpoint();
    let sub_outcome = validate_schema(engine, ctx.instance, value, ctx.path, ctx.draft)?;
    engine.discard_errors_since(checkpoint);
    if sub_outcome.valid {
        engine.push_error(ctx.path.clone(), "not", "instance must not match the given schema");
        Ok(Outcome::invalid())
    } else {
        Ok(Outcome::valid())
    }
}
