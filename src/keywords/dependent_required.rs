//! `dependentRequired` (`spec.md` §4.4), the 2019-09+ split form: each
//! entry lists sibling properties required when the key is present.
use crate::engine::{Ctx, Engine, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    let Value::Object(deps) = value else {
        return Outcome::valid();
    };
    let Value::Object(instance) = ctx.instance else {
        return Outcome::valid();
    };
    let mut valid = true;
    for (key, required) in deps {
        if !instance.contains_key(key) {
            continue;
        }
        let Value::Array(required) = required else {
            continue;
        };
        for name in required.iter().filter_map(Value::as_str) {
            if !instance.contains_key(name) {
                engine.push_error(
                    ctx.path.clone(),
                    "dependentRequired",
                    format!("'{name}' is required when '{key}' is present"),
                );
                valid = false;
            }
        }
    }
    Outcome::from_valid(valid)
}
