//! `unevaluatedItems` (2019-09+, `spec.md` §4.1 Pass 3): for every instance
//! index not already marked evaluated by Pass 1/2, apply this keyword.
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(
    engine: &mut Engine<'s>,
    ctx: &Ctx<'_, 's>,
    value: &'s Value,
    evaluated: &Outcome,
) -> EngineResult<Outcome> {
    let Value::Array(instance) = ctx.instance else {
        return Ok(Outcome::valid());
    };
    let mut outcome = Outcome::valid();
    for (index, item) in instance.iter().enumerate() {
        if evaluated.evaluated_items.contains(&index) {
            continue;
        }
        let sub_path = ctx.path.push(index);
        match value {
            Value::Bool(false) => {
                engine.push_error(sub_path, "unevaluatedItems", format!("unevaluated item at index {index} is not allowed"));
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
