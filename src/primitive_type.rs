//! JSON-Schema type names and the `type` keyword's type-identification rules.
use serde_json::Value;
use std::fmt;

/// One of the seven JSON-Schema primitive type names.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PrimitiveType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrimitiveType::Array => "array",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Null => "null",
            PrimitiveType::Number => "number",
            PrimitiveType::Object => "object",
            PrimitiveType::String => "string",
        })
    }
}

impl PrimitiveType {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "array" => PrimitiveType::Array,
            "boolean" => PrimitiveType::Boolean,
            "integer" => PrimitiveType::Integer,
            "null" => PrimitiveType::Null,
            "number" => PrimitiveType::Number,
            "object" => PrimitiveType::Object,
            "string" => PrimitiveType::String,
            _ => return None,
        })
    }
}

/// Is `value` a JSON integer, i.e. a number with zero fractional part?
///
/// NaN and infinities are never integers, regardless of draft.
#[must_use]
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                true
            } else if let Some(f) = n.as_f64() {
                f.is_finite() && f.fract() == 0.0
            } else {
                false
            }
        }
        _ => false,
    }
}

/// The JSON-Schema type name(s) that `instance` satisfies for the purposes of
/// the `type` keyword, honouring the draft-dependent integer/number overlap.
#[must_use]
pub fn primitive_types_of(value: &Value) -> Vec<PrimitiveType> {
    match value {
        Value::Null => vec![PrimitiveType::Null],
        Value::Bool(_) => vec![PrimitiveType::Boolean],
        Value::String(_) => vec![PrimitiveType::String],
        Value::Array(_) => vec![PrimitiveType::Array],
        Value::Object(_) => vec![PrimitiveType::Object],
        Value::Number(_) => {
            if is_integer(value) {
                vec![PrimitiveType::Integer, PrimitiveType::Number]
            } else {
                vec![PrimitiveType::Number]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_are_both_integer_and_number() {
        assert!(primitive_types_of(&json!(5)).contains(&PrimitiveType::Integer));
        assert!(primitive_types_of(&json!(5)).contains(&PrimitiveType::Number));
    }

    #[test]
    fn floats_with_zero_fraction_are_integers() {
        assert!(is_integer(&json!(1.0)));
        assert!(!is_integer(&json!(1.5)));
    }
}
