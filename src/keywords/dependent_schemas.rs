//! `dependentSchemas` (`spec.md` §4.4), the 2019-09+ split form: each key
//! present on the instance applies its subschema to the whole instance.
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let Value::Object(deps) = value else {
        return Ok(Outcome::valid());
    };
    let Value::Object(instance) = ctx.instance else {
        return Ok(Outcome::valid());
    };
    let mut outcome = Outcome::valid();
    for (key, subschema) in deps {
        if !instance.contains_key(key) {
            continue;
        }
        let sub_outcome = validate_schema(engine, ctx.instance, subschema, ctx.path, ctx.draft)?;
        outcome.merge(sub_outcome);
    }
    Ok(outcome)
}
