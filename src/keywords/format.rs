//! `format` (`spec.md` §4.4, §4.5): dispatches to a named semantic
//! predicate over strings. Unknown format names silently pass. Whether
//! `format` is asserted at all (vs. annotation-only) is decided by
//! [`Engine::format_assertion`] per the active draft/vocabulary.
use crate::engine::{Ctx, Engine, Outcome};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::net::IpAddr;
use std::str::FromStr;

static JSON_POINTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(/(([^/~])|(~[01]))*)*$").expect("valid regex"));
static RELATIVE_JSON_POINTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:0|[1-9][0-9]*)(?:#|(?:/(?:[^~/]|~0|~1)*)*)$").expect("valid regex"));
static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9]):([0-5][0-9]|60)(\.[0-9]+)?(([Zz])|([+-]([01][0-9]|2[0-3]):[0-5][0-9]))$")
        .expect("valid regex")
});
static URI_REFERENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[^\s"'<>\\^`{|}]*$"#).expect("valid regex"));
static URI_TEMPLATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(?:[^\x00-\x20"'<>%\\^`{|}]|%[0-9a-fA-F]{2}|\{[+#./;?&=,!@|]?(?:[a-zA-Z0-9_]|%[0-9a-fA-F]{2})+(?::[1-9][0-9]{0,3}|\*)?(?:,(?:[a-zA-Z0-9_]|%[0-9a-fA-F]{2})+(?::[1-9][0-9]{0,3}|\*)?)*\})*$"#,
    )
    .expect("valid regex")
});
static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^P(?:\d+W|(?:\d+Y)?(?:\d+M)?(?:\d+D)?(?:T(?:\d+H)?(?:\d+M)?(?:\d+(?:\.\d+)?S)?)?)$")
        .expect("valid regex")
});

fn is_valid_duration(s: &str) -> bool {
    if s == "P" {
        return false;
    }
    if !DURATION_RE.is_match(s) {
        return false;
    }
    // Reject the all-empty "PT" form and the trivial "P".
    s != "PT"
}

fn is_valid_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

fn is_valid_hostname(s: &str) -> bool {
    !(s.ends_with('-')
        || s.starts_with('-')
        || s.is_empty()
        || s.chars().count() > 255
        || s.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '.'))
        || s.split('.').any(|part| part.is_empty() || part.chars().count() > 63))
}

fn is_valid_idn_hostname(s: &str) -> bool {
    if s.is_empty() || s.chars().count() > 255 {
        return false;
    }
    idna::domain_to_ascii(s).is_ok()
}

fn is_valid_ipv4(s: &str) -> bool {
    if s.split('.').any(|part| part.len() > 1 && part.starts_with('0')) {
        return false;
    }
    matches!(IpAddr::from_str(s), Ok(IpAddr::V4(_)))
}

fn is_valid_ipv6(s: &str) -> bool {
    if s.contains('%') || s.contains('/') {
        return false;
    }
    matches!(IpAddr::from_str(s), Ok(IpAddr::V6(_)))
}

fn is_valid_uuid(s: &str) -> bool {
    uuid::Uuid::parse_str(s).is_ok() && s.len() == 36
}

fn predicate(name: &str, instance: &str) -> Option<bool> {
    Some(match name {
        "date" => chrono::NaiveDate::parse_from_str(instance, "%Y-%m-%d").is_ok(),
        "time" => TIME_RE.is_match(instance),
        "date-time" => chrono::DateTime::parse_from_rfc3339(instance).is_ok(),
        "duration" => is_valid_duration(instance),
        "email" | "idn-email" => is_valid_email(instance),
        "hostname" => is_valid_hostname(instance),
        "idn-hostname" => is_valid_idn_hostname(instance),
        "ipv4" => is_valid_ipv4(instance),
        "ipv6" => is_valid_ipv6(instance),
        "uri" => url::Url::from_str(instance).is_ok() && instance.is_ascii(),
        "iri" => url::Url::from_str(instance).is_ok(),
        "uri-reference" => URI_REFERENCE_RE.is_match(instance) && instance.is_ascii(),
        "iri-reference" => URI_REFERENCE_RE.is_match(instance),
        "uri-template" => URI_TEMPLATE_RE.is_match(instance),
        "uuid" => is_valid_uuid(instance),
        "regex" => crate::ecma::to_rust_regex(instance).parse::<Regex>().is_ok() || Regex::new(instance).is_ok(),
        "json-pointer" => JSON_POINTER_RE.is_match(instance),
        "relative-json-pointer" => RELATIVE_JSON_POINTER_RE.is_match(instance),
        _ => return None,
    })
}

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    if !engine.format_assertion(ctx.draft) {
        return Outcome::valid();
    }
    let (Value::String(instance), Value::String(format_name)) = (ctx.instance, value) else {
        return Outcome::valid();
    };
    match predicate(format_name, instance) {
        Some(true) | None => Outcome::valid(),
        Some(false) => {
            engine.push_error(ctx.path.clone(), "format", format!("'{instance}' is not a valid '{format_name}'"));
            Outcome::invalid()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_rejects_leading_zero_octet() {
        assert!(!is_valid_ipv4("192.168.001.1"));
        assert!(is_valid_ipv4("192.168.1.1"));
    }

    #[test]
    fn duration_requires_at_least_one_component() {
        assert!(!is_valid_duration("P"));
        assert!(!is_valid_duration("PT"));
        assert!(is_valid_duration("P1D"));
        assert!(is_valid_duration("PT1H"));
    }

    #[test]
    fn uuid_accepts_canonical_form_only() {
        assert!(is_valid_uuid("123e4567-e89b-12d3-a456-426614174000"));
        assert!(!is_valid_uuid("not-a-uuid"));
    }
}
