//! Shared numeric comparison helpers for `minimum`/`maximum`/`exclusiveMinimum`/
//! `exclusiveMaximum`/`multipleOf`, comparing across `i64`/`u64`/`f64`
//! representations without the precision loss of casting everything to `f64`.
use num_cmp::NumCmp;
use serde_json::Number;
use std::cmp::Ordering;

fn ordering(instance: &Number, limit: &Number) -> Ordering {
    if let (Some(a), Some(b)) = (instance.as_i64(), limit.as_i64()) {
        return NumCmp::num_cmp(a, b).unwrap_or(Ordering::Equal);
    }
    if let (Some(a), Some(b)) = (instance.as_u64(), limit.as_u64()) {
        return NumCmp::num_cmp(a, b).unwrap_or(Ordering::Equal);
    }
    let a = instance.as_f64().unwrap_or(f64::NAN);
    let b = limit.as_f64().unwrap_or(f64::NAN);
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[must_use]
pub(crate) fn num_ge(instance: &Number, limit: &Number) -> bool {
    ordering(instance, limit) != Ordering::Less
}

#[must_use]
pub(crate) fn num_le(instance: &Number, limit: &Number) -> bool {
    ordering(instance, limit) != Ordering::Greater
}

#[must_use]
pub(crate) fn num_gt(instance: &Number, limit: &Number) -> bool {
    ordering(instance, limit) == Ordering::Greater
}

#[must_use]
pub(crate) fn num_lt(instance: &Number, limit: &Number) -> bool {
    ordering(instance, limit) == Ordering::Less
}

/// Tolerance for the fractional-remainder check in [`is_multiple_of`]. Wide
/// enough to absorb realistic decimal `multipleOf` values (e.g. `0.01`,
/// `0.05`) whose binary float representation makes the true quotient land a
/// little off of an integer.
const MULTIPLE_OF_EPSILON: f64 = 1e-10;

/// Is `instance` an integer multiple of `divisor`, tolerating float
/// imprecision the way the `multipleOf` assertion requires?
#[must_use]
pub(crate) fn is_multiple_of(instance: f64, divisor: f64) -> bool {
    if divisor == 0.0 {
        return false;
    }
    let quotient = instance / divisor;
    if quotient.is_infinite() {
        // The division overflowed; only a finite positive power of two as
        // the divisor can still make this an exact multiple.
        return divisor > 0.0 && divisor.is_finite() && divisor.log2().fract() == 0.0;
    }
    let remainder = quotient.fract();
    remainder.abs() < MULTIPLE_OF_EPSILON || (remainder.abs() - 1.0).abs() < MULTIPLE_OF_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: i64) -> Number {
        Number::from(v)
    }

    #[test]
    fn large_integers_compare_exactly() {
        let huge = Number::from(1u64 << 54);
        let huge_minus_one = Number::from((1u64 << 54) - 1);
        assert!(num_ge(&huge, &huge_minus_one));
        assert!(!num_ge(&huge_minus_one, &huge));
    }

    #[test]
    fn multiple_of_accepts_exact_integer_ratio() {
        assert!(is_multiple_of(10.0, 5.0));
        assert!(!is_multiple_of(10.0, 3.0));
    }

    #[test]
    fn multiple_of_tolerates_decimal_divisor_imprecision() {
        assert!(is_multiple_of(19.9, 0.05));
        assert!(is_multiple_of(1.23, 0.01));
    }

    #[test]
    fn signed_comparison_handles_negative_limit() {
        assert!(num_gt(&n(5), &n(-5)));
        assert!(!num_lt(&n(5), &n(-5)));
    }
}
