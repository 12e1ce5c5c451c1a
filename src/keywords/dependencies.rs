//! `dependencies` (`spec.md` §4.4), the legacy Draft 4-7 form: each entry
//! is either an array of required sibling properties, or a subschema the
//! whole instance must satisfy when the key is present.
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
    for (key, dependency) in deps {
        if !instance.contains_key(key) {
            continue;
        }
        match dependency {
            Value::Array(required) => {
                for name in required.iter().filter_map(Value::as_str) {
                    if !instance.contains_key(name) {
                        engine.push_error(
                            ctx.path.clone(),
                            "dependencies",
                            format!("'{name}' is required when '{key}' is present"),
                        );
                        outcome.valid = false;
                    }
                }
            }
            _ => {
                let sub_outcome = validate_schema(engine, ctx.instance, dependency, ctx.path, ctx.draft)?;
                outcome.merge(sub_outcome);
            }
        }
    }
    Ok(outcome)
}
