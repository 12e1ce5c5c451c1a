//! `items` (`spec.md` §4.4). Pre-2020-12 drafts overload this keyword: an
//! array value means per-index tuple validation (with `additionalItems`
//! covering the rest), an object/boolean value means every element is
//! validated against the same subschema. 2020-12 narrows `items` to the
//! single-schema form only, pairing `prefixItems` for the tuple form.
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let Value::Array(instance) = ctx.instance else {
        return Ok(Outcome::valid());
    };

    if !ctx.draft.has_prefix_items() {
        if let Value::Array(schemas) = value {
            return validate_tuple(engine, ctx, instance, schemas);
        }
    }

    // Draft 2020-12: `items` applies only to indices past whatever
    // `prefixItems` already covers on this same schema object.
    let skip = ctx
        .schema_obj
        .get("prefixItems")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);

    let mut outcome = Outcome::valid();
    for (index, item) in instance.iter().enumerate().skip(skip) {
        let sub_path = ctx.path.push(index);
        let sub_outcome = validate_schema(engine, item, value, &sub_path, ctx.draft)?;
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

fn validate_tuple<'s>(
    engine: &mut Engine<'s>,
    ctx: &Ctx<'_, 's>,
    instance: &[Value],
    schemas: &'s [Value],
) -> EngineResult<Outcome> {
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
