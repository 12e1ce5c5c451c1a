//! JSON-value equality as defined for `enum`/`const`/`uniqueItems`: numbers
//! compare by mathematical value regardless of their `i64`/`u64`/`f64`
//! representation, objects compare ignoring key order.
use num_cmp::NumCmp;
use serde_json::{Map, Value};
use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

macro_rules! num_cmp {
    ($left:expr, $right:expr) => {
        if let Some(b) = $right.as_u64() {
            NumCmp::num_eq($left, b)
        } else if let Some(b) = $right.as_i64() {
            NumCmp::num_eq($left, b)
        } else {
            NumCmp::num_eq($left, $right.as_f64().expect("a JSON number is always representable as f64"))
        }
    };
}

#[must_use]
pub(crate) fn equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => {
            if let Some(a) = left.as_u64() {
                num_cmp!(a, right)
            } else if let Some(a) = left.as_i64() {
                num_cmp!(a, right)
            } else {
                let a = left.as_f64().expect("a JSON number is always representable as f64");
                num_cmp!(a, right)
            }
        }
        (Value::Array(left), Value::Array(right)) => equal_arrays(left, right),
        (Value::Object(left), Value::Object(right)) => equal_objects(left, right),
        (left, right) => left == right,
    }
}

#[must_use]
pub(crate) fn equal_arrays(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len() && left.iter().zip(right.iter()).all(|(a, b)| equal(a, b))
}

#[must_use]
pub(crate) fn equal_objects(left: &Map<String, Value>, right: &Map<String, Value>) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .all(|(key, value)| right.get(key).is_some_and(|other| equal(value, other)))
}

struct HashedValue<'a>(&'a Value);

impl Hash for HashedValue<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0 {
            Value::Null => state.write_u8(0),
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => {
                if let Some(v) = n.as_u64() {
                    v.hash(state);
                } else if let Some(v) = n.as_i64() {
                    v.hash(state);
                } else if let Some(v) = n.as_f64() {
                    v.to_bits().hash(state);
                }
            }
            Value::String(s) => s.hash(state),
            Value::Array(items) => {
                for item in items {
                    HashedValue(item).hash(state);
                }
            }
            Value::Object(map) => {
                let mut acc: u64 = 0;
                for (key, value) in map {
                    let mut hasher = DefaultHasher::new();
                    key.hash(&mut hasher);
                    HashedValue(value).hash(&mut hasher);
                    acc ^= hasher.finish();
                }
                state.write_u64(acc);
            }
        }
    }
}

impl PartialEq for HashedValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        equal(self.0, other.0)
    }
}
impl Eq for HashedValue<'_> {}

/// Are all of `items` pairwise distinct under [`equal`]?
#[must_use]
pub(crate) fn all_unique(items: &[Value]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    items.iter().map(HashedValue).all(|item| seen.insert(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_compare_by_value_across_representations() {
        assert!(equal(&json!(1), &json!(1.0)));
        assert!(!equal(&json!(1), &json!(2)));
    }

    #[test]
    fn objects_compare_ignoring_key_order() {
        assert!(equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
    }

    #[test]
    fn all_unique_detects_value_equal_duplicates() {
        assert!(!all_unique(&[json!(1), json!(1.0)]));
        assert!(all_unique(&[json!(1), json!(2)]));
    }
}
