//! `properties` (`spec.md` §4.4). Every matched property that validates
//! successfully is recorded in the outcome's evaluated-properties set, for
//! `additionalProperties`/`unevaluatedProperties` to consult.
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let Value::Object(schemas) = value else {
        return Ok(Outcome::valid());
    };
    let Value::Object(instance) = ctx.instance else {
        return Ok(Outcome::valid());
    };
    let mut outcome = Outcome::valid();
    for (name, subschema) in schemas {
        // Every declared name is marked evaluated whether or not the
        // instance actually has it; only present values are validated.
        outcome.evaluated_properties.insert(name.clone());
        let Some(sub_instance) = instance.get(name) else {
            continue;
        };
        let sub_path = ctx.path.push(name.clone());
        let sub_outcome = validate_schema(engine, sub_instance, subschema, &sub_path, ctx.draft)?;
        outcome.valid &= sub_outcome.valid;
        outcome.evaluated_properties.extend(sub_outcome.evaluated_properties);
        outcome.evaluated_items.extend(sub_outcome.evaluated_items);
    }
    Ok(outcome)
}
