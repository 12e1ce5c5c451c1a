//! `additionalItems` (`spec.md` §4.4), the legacy sibling of a tuple-form
//! `items` array: validates every instance element past the tuple's
//! length. A no-op unless `items` is itself an array on this same schema.
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let Some(Value::Array(tuple_schemas)) = ctx.schema_obj.get("items") else {
        return Ok(Outcome::valid());
    };
    let Value::Array(instance) = ctx.instance else {
        return Ok(Outcome::valid());
    };
    let mut outcome = Outcome::valid();
    for (index, item) in instance.iter().enumerate().skip(tuple_schemas.len()) {
        let sub_path = ctx.path.push(index);
        match value {
            Value::Bool(false) => {
                engine.push_error(sub_path, "additionalItems", "no additional items are allowed");
                outcome.valid = false;
            }
            Value::Bool(true) => {
                outcome.evaluated_items.insert(index);
            }
            _ => {
                let sub_outcome = validate_schema(engine, item, value, &sub_path, ctx.draft)?;
                if sub_outcome.valid {
                    outcome.evaluated_items.insert(index);
                } else {
                    outcome.valid = false;
                }
                outcome.evaluated_properties.extend(sub_outcome.evaluated_properties);
                outcome.evaluated_items.extend(sub_outcome.evaluated_items);
            }
        }
    }
    Ok(outcome)
}
