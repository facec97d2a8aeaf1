//! Scalar ordering for the ordering match modes.

use std::cmp::Ordering;

use crate::value::{Number, Value};

/// Compares a field value with a query value.
///
/// - number vs number: numeric, across integer and float kinds
/// - text vs text: lexicographic
/// - bool vs bool: `false < true`
/// - number vs text: numeric, after parsing the text as a number
/// - number vs bool: numeric, with `false = 0` and `true = 1`
///
/// Returns `None` for any other pairing, for text that is not a number in a
/// mixed pairing, and for NaN.
pub fn compare_scalars(value: &Value<'_>, query: &Value<'_>) -> Option<Ordering> {
    match (value, query) {
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),

        // Mixed kinds compare as numbers
        (Value::Number(a), Value::Text(b)) => a.compare(Number::parse(b)?),
        (Value::Text(a), Value::Number(b)) => Number::parse(a)?.compare(*b),
        (Value::Number(a), Value::Bool(b)) => a.compare(bool_number(*b)),
        (Value::Bool(a), Value::Number(b)) => bool_number(*a).compare(*b),

        _ => None,
    }
}

fn bool_number(b: bool) -> Number {
    Number::I64(i64::from(b))
}
