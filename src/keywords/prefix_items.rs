//! `prefixItems` (`spec.md` §4.4), the 2020-12 tuple form: each schema in
//! the array validates the instance element at the same index.
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let Value::Array(schemas) = value else {
        return Ok(Outcome::valid());
    };
    let Value::Array(instance) = ctx.instance else {
        return Ok(Outcome::valid());
    };
    let mut outcome = Outcome::valid();
    for (index, (item, subschema)) in instance.iter().zip(schemas.iter()).enumerate() {
        let sub_path = ctx.path.push(index);
        let sub_outcome = validate_schema(engine, item, subschema, &sub_path, ctx.draft)?;
        if sub_outcome.valid {
            outcome.evaluated_items.insert(index);
        } else {
            outcome.valid = false;
        }
        outcome.evaluated_properties.extend(sub_outcome.evaluated_properties);
        outcome.evaluated_items.extend(sub_outcome.evaluated_items);
    }
    Ok(outcome)
}
