//! `if`/`then`/`else` (`spec.md` §4.3). `if` is always evaluated in
//! isolation; only the taken branch's annotations and errors survive.
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};

pub(crate) fn run<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>) -> EngineResult<Outcome> {
    let Some(if_schema) = ctx.schema_obj.get("if") else {
        return Ok(Outcome::valid());
    };
    let then_schema = ctx.schema_obj.get("then");
    let else_schema = ctx.schema_obj.get("else");

    let if_checkpoint = engine.errors_checkpoint();
    let if_outcome = validate_schema(engine, ctx.instance, if_schema, ctx.path, ctx.draft)?;
    engine.discard_errors_since(if_checkpoint);

    if if_outcome.valid {
        match then_schema {
            Some(then_schema) => {
                let mut outcome = if_outcome;
                let then_outcome = validate_schema(engine, ctx.instance, then_schema, ctx.path, ctx.draft)?;
                outcome.merge(then_outcome);
                Ok(outcome)
            }
            None => Ok(if_outcome),
        }
    } else {
        match else_schema {
            Some(else_schema) => validate_schema(engine, ctx.instance, else_schema, ctx.path, ctx.draft),
            None => Ok(Outcome::valid()),
        }
    }
}
