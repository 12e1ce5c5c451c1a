//! `additionalProperties` (`spec.md` §4.4). An instance property counts as
//! "additional" when its name is neither a declared `properties` key nor
//! matched by any `patternProperties` regex. Matched-and-valid properties
//! are folded into the evaluated-properties set.
use super::pattern;
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

fn is_declared(ctx: &Ctx<'_, '_>, name: &str) -> bool {
    if ctx
        .schema_obj
        .get("properties")
        .and_then(Value::as_object)
        .is_some_and(|props| props.contains_key(name))
    {
        return true;
    }
    ctx.schema_obj
        .get("patternProperties")
        .and_then(Value::as_object)
        .is_some_and(|patterns| {
            patterns
                .keys()
                .filter_map(|p| pattern::compile(p).ok())
                .any(|re| re.is_match(name))
        })
}

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let Value::Object(instance) = ctx.instance else {
        return Ok(Outcome::valid());
    };
    let mut outcome = Outcome::valid();
    for (name, sub_instance) in instance {
        if is_declared(ctx, name) {
            continue;
        }
        let sub_path = ctx.path.push(name.clone());
        match value {
            Value::Bool(false) => {
                engine.push_error(sub_path, "additionalProperties", format!("additional property '{name}' is not allowed"));
                outcome.valid = false;
            }
            Value::Bool(true) => {
                outcome.evaluated_properties.insert(name.clone());
            }
            _ => {
                let sub_outcome = validate_schema(engine, sub_instance, value, &sub_path, ctx.draft)?;
                if sub_outcome.valid {
                    outcome.evaluated_properties.insert(name.clone());
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
