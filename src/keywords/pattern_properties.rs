//! `patternProperties` (`spec.md` §4.4): every instance property whose name
//! matches a declared regex is validated against that regex's subschema.
//! A property can match more than one pattern; all matching subschemas
//! must pass.
use super::pattern;
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let Value::Object(patterns) = value else {
        return Ok(Outcome::valid());
    };
    let Value::Object(instance) = ctx.instance else {
        return Ok(Outcome::valid());
    };
    let mut outcome = Outcome::valid();
    for (raw_pattern, subschema) in patterns {
        let Ok(regex) = pattern::compile(raw_pattern) else {
            continue;
        };
        for (name, sub_instance) in instance {
            if !regex.is_match(name) {
                continue;
            }
            let sub_path = ctx.path.push(name.clone());
            let sub_outcome = validate_schema(engine, sub_instance, subschema, &sub_path, ctx.draft)?;
            if sub_outcome.valid {
                outcome.evaluated_properties.insert(name.clone());
            } else {
                outcome.valid = false;
            }
            outcome.evaluated_properties.extend(sub_outcome.evaluated_properties);
            outcome.evaluated_items.extend(sub_outcome.evaluated_items);
        }
    }
    Ok(outcome)
}
