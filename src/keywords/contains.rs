//! `contains` (`spec.md` §4.4): counts instance items matching the
//! subschema and checks the count against `minContains`/`maxContains`
//! (defaults 1 and unbounded). Per-item validation errors are discarded;
//! on failure exactly one error is reported. Matching items are marked
//! evaluated.
use crate::engine::{validate_schema, Ctx, Engine, EngineResult, Outcome};
use serde_json::Value;

fn bound(ctx: &Ctx<'_, '_>, keyword: &str) -> Option<u64> {
    ctx.schema_obj.get(keyword).and_then(Value::as_u64)
}

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> EngineResult<Outcome> {
    let Value::Array(instance) = ctx.instance else {
        return Ok(Outcome::valid());
    };
    let min_contains = bound(ctx, "minContains").unwrap_or(1);
    let max_contains = bound(ctx, "maxContains");

    let mut outcome = Outcome::valid();
    let mut matched = 0u64;
    for (index, item) in instance.iter().enumerate() {
        let sub_path = ctx.path.push(index);
        let checkpoint = engine.errors_checkpoint();
        let sub_outcome = validate_schema(engine, item, value, &sub_path, ctx.draft)?;
        engine.discard_errors_since(checkpoint);
        if sub_outcome.valid {
            matched += 1;
            outcome.evaluated_items.insert(index);
            outcome.evaluated_properties.extend(sub_outcome.evaluated_properties);
            outcome.evaluated_items.extend(sub_outcome.evaluated_items);
        }
    }

    if matched < min_contains {
        engine.push_error(
            ctx.path.clone(),
            "contains",
            format!("expected at least {min_contains} matching items, found {matched}"),
        );
        outcome.valid = false;
    } else if let Some(max_contains) = max_contains {
        if matched > max_contains {
            engine.push_error(
                ctx.path.clone(),
                "contains",
                format!("expected at most {max_contains} matching items, found {matched}"),
            );
            outcome.valid = false;
        }
    }

    Ok(outcome)
}
