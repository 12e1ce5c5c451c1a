//! `pattern` (`spec.md` §4.4): ECMA-262 regular expression, translated to
//! the `regex` crate's dialect via [`crate::ecma`].
use crate::{
    ecma,
    engine::{Ctx, Engine, Outcome},
};
use regex::{Regex, RegexBuilder};
use serde_json::Value;

pub(crate) fn validate<'s>(engine: &mut Engine<'s>, ctx: &Ctx<'_, 's>, value: &'s Value) -> Outcome {
    let Value::String(instance) = ctx.instance else {
        return Outcome::valid();
    };
    let Value::String(pattern) = value else {
        return Outcome::valid();
    };
    let Ok(compiled) = compile(pattern) else {
        // An uncompilable pattern is a schema authoring error, not an
        // instance failure; treat it as vacuously satisfied (spec.md §7
        // scopes schema-authoring faults out of `ValidationError`).
        return Outcome::valid();
    };
    if compiled.is_match(instance) {
        Outcome::valid()
    } else {
        engine.push_error(ctx.path.clone(), "pattern", format!("does not match pattern {pattern:?}"));
        Outcome::invalid()
    }
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    let translated = ecma::to_rust_regex(pattern);
    RegexBuilder::new(&translated).unicode(true).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perl_class_translation_compiles_and_matches() {
        let re = compile(r"^\d+$").expect("valid pattern");
        assert!(re.is_match("1234"));
        assert!(!re.is_match("12a4"));
    }
}
