//! `propertyNames` (`spec.md` §4.4): every instance property *name*,
//! wrapped as a JSON string, is validated against the subschema. Does not
//! itself contribute to the evaluated-properties set — it constrains
//! names, not values.
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let Value::Object(instance) = ctx.instance else {
        return Ok(Outcome::valid());
    };
    let mut valid = true;
    for name in instance.keys() {
        let name_as_value = Value::String(name.clone());
        let sub_path = ctx.path.push(name.clone());
        let sub_outcome = validate_schema(engine, &name_as_value, value, &sub_path, ctx.draft)?;
        valid &= sub_outcome.valid;
    }
    Ok(Outcome::from_valid(valid))
}
