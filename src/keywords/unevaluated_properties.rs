//! `unevaluatedProperties` (2019-09+, `spec.md` §4.1 Pass 3): for every
//! instance property not already marked evaluated by Pass 1/2, apply this
//! keyword and fold newly-evaluated names back into the annotation set.
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(
    engine: &mut Engine<'s>,
    ctx: &Ctx<'_, 's>,
    value: &'s Value,
    evaluated: &Outcome,
) -> EngineResult<Outcome> {
    let Value::Object(instance) = ctx.instance else {
        return Ok(Outcome::valid());
    };
    let mut outcome = Outcome::valid();
    for (name, sub_instance) in instance {
        if evaluated.evaluated_properties.contains(name) {
            continue;
        }
        let sub_path = ctx.path.push(name.clone());
        match value {
            Value::Bool(false) => {
                engine.push_error(sub_path, "unevaluatedProperties", format!("unevaluated property '{name}' is not allowed"));
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
