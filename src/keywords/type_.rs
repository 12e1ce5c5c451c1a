//! `type` (`spec.md` §4.4): single name or array of names, checked against
//! the primitive type(s) an instance belongs to.
use crate::{
    engine::{Ctx, Engine, Outcome},
    primitive_type::{primitive_types_of, PrimitiveType},
};
use serde_json::Value;

fn instance_matches(ctx: &Ctx<'_, '_>, expected: &str) -> bool {
    let Some(expected) = PrimitiveType::from_name(expected) else {
        return true;
    };
    if expected == PrimitiveType::Integer && !ctx.draft.float_is_integer() {
        return matches!(ctx.instance, Value::Number(n) if n.is_i64() || n.is_u64());
    }
    primitive_types_of(ctx.instance).contains(&expected)
}

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    let names: Vec<&str> = match value {
        Value::String(s) => vec![s.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => return Outcome::valid(),
    };
    if names.iter().any(|name| instance_matches(ctx, name)) {
        Outcome::valid()
    } else {
        engine.push_error(
            ctx.path.clone(),
            "type",
            format!("expected type {}", names.join(" or ")),
        );
        Outcome::invalid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::Engine, options::Draft};
    use serde_json::{json, Map};

    fn test_engine() -> Engine<'static> {
        crate::engine::test_support::empty_engine()
    }

    #[test]
    fn single_type_name_accepts_matching_instance() {
        let schema_obj = Map::new();
        let path = crate::paths::JsonPath::new();
        let instance = json!("hello");
        let ctx = Ctx {
            instance: &instance,
            schema_obj: &schema_obj,
            path: &path,
            draft: Draft::Draft202012,
        };
        let mut engine = test_engine();
        assert!(validate(&mut engine, &ctx, &json!("string")).valid);
    }

    #[test]
    fn array_of_type_names_rejects_unlisted_type() {
        let schema_obj = Map::new();
        let path = crate::paths::JsonPath::new();
        let instance = json!(true);
        let ctx = Ctx {
            instance: &instance,
            schema_obj: &schema_obj,
            path: &path,
            draft: Draft::Draft202012,
        };
        let mut engine = test_engine();
        assert!(!validate(&mut engine, &ctx, &json!(["string", "number"])).valid);
    }

    #[test]
    fn draft4_requires_exact_integer_for_integer_only_type() {
        let schema_obj = Map::new();
        let path = crate::paths::JsonPath::new();
        let instance = json!(1.0);
        let ctx = Ctx {
            instance: &instance,
            schema_obj: &schema_obj,
            path: &path,
            draft: Draft::Draft4,
        };
        let mut engine = test_engine();
        assert!(!validate(&mut engine, &ctx, &json!("integer")).valid);
    }
}
