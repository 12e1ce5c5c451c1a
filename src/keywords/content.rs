//! `contentEncoding`/`contentMediaType` (`spec.md` §4.4). Only Draft 7 ever
//! treats these as assertions; 2019-09+ define them as annotation-only, and
//! `spec.md`'s draft profile table agrees — see `Draft::content_is_assertion`.
use crate::engine::{Ctx, Engine, Outcome};
use serde_json::Value;

fn decoded_bytes(ctx: &Ctx<'_, '_>, instance: &str) -> Option<Vec<u8>> {
    match ctx.schema_obj.get("contentEncoding").and_then(Value::as_str) {
        Some("base64") => base64::Engine::decode(&base64::engine::general_purpose::STANDARD, instance).ok(),
        _ => Some(instance.as_bytes().to_vec()),
    }
}

pub(crate) fn validate_encoding<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    if !ctx.draft.content_is_assertion() {
        return Outcome::valid();
    }
    let (Value::String(instance), Value::String(encoding)) = (ctx.instance, value) else {
        return Outcome::valid();
    };
    let ok = match encoding.as_str() {
        "base64" => base64::Engine::decode(&base64::engine::general_purpose::STANDARD, instance.as_str()).is_ok(),
        _ => true,
    };
    if ok {
        Outcome::valid()
    } else {
        engine.push_error(ctx.path.clone(), "contentEncoding", format!("not valid {encoding} content"));
        Outcome::invalid()
    }
}

pub(crate) fn validate_media_type<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    if !ctx.draft.content_is_assertion() {
        return Outcome::valid();
    }
    let (Value::String(instance), Value::String(media_type)) = (ctx.instance, value) else {
        return Outcome::valid();
    };
    let Some(bytes) = decoded_bytes(ctx, instance) else {
        engine.push_error(ctx.path.clone(), "contentMediaType", "content is not validly encoded");
        return Outcome::invalid();
    };
    let ok = match media_type.as_str() {
        "application/json" => std::str::from_utf8(&bytes)
            .ok()
            .and_then(|s| serde_json::from_str::<Value>(s).ok())
            .is_some(),
        _ => true,
    };
    if ok {
        Outcome::valid()
    } else {
        engine.push_error(ctx.path.clone(), "contentMediaType", format!("content is not valid {media_type}"));
        Outcome::invalid()
    }
}
