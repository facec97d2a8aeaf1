//! Field values as seen by the matcher.
//!
//! [`Value`] is what a [`Record`](crate::Record) hands back for a field. It
//! borrows from the record and covers the scalar kinds a field can hold, plus
//! nested records that dot-paths descend into.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Runtime value of a field, borrowed from the source record.
///
/// # Example
///
/// ```
/// use keysift::{Number, Record, Value};
///
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// impl Record for Task {
///     fn field(&self, name: &str) -> Option<Value<'_>> {
///         match name {
///             "name" => Some(Value::Text(&self.name)),
///             "priority" => Some(Value::Number(Number::from(self.priority))),
///             _ => None,
///         }
///     }
/// }
/// ```
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// Text value (borrowed).
    Text(&'a str),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Field present but null.
    Null,
    /// Nested record, reachable through dot-paths.
    Record(&'a dyn Record),
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `Null` value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this is a `Text` value.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if this is a `Bool` value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if this is a nested record.
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Returns `true` for text, number and bool values.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Text(_) | Value::Number(_) | Value::Bool(_))
    }

    /// Extracts the text value, if present.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the nested record, if present.
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match self {
            Value::Record(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns the text form used by the text-based match modes.
    ///
    /// Null values and nested records have no text form.
    pub fn text(&self) -> Option<Cow<'a, str>> {
        match self {
            Value::Text(s) => Some(Cow::Borrowed(s)),
            Value::Number(n) => Some(Cow::Owned(n.to_text())),
            Value::Bool(true) => Some(Cow::Borrowed("true")),
            Value::Bool(false) => Some(Cow::Borrowed("false")),
            Value::Null | Value::Record(_) => None,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Null => f.write_str("Null"),
            Value::Record(_) => f.write_str("Record(..)"),
        }
    }
}

// Nested records have no identity to compare, so they never compare equal.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

/// A numeric field or query value.
///
/// Signed and unsigned integers keep their own variant so that large values
/// survive untouched. Two integers always compare exactly; a float on
/// either side moves the comparison to `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    /// Widens to `f64`, rounding integers beyond 2^53.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(i) => i as f64,
            Number::U64(u) => u as f64,
            Number::F64(f) => f,
        }
    }

    fn as_i128(self) -> Option<i128> {
        match self {
            Number::I64(i) => Some(i128::from(i)),
            Number::U64(u) => Some(i128::from(u)),
            Number::F64(_) => None,
        }
    }

    /// Orders two numbers of any kind. `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self.as_i128(), other.as_i128()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Parses a number from text, ignoring surrounding whitespace.
    ///
    /// Returns `None` for empty or non-numeric text.
    pub fn parse(text: &str) -> Option<Number> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Some(Number::I64(n));
        }
        if let Ok(n) = trimmed.parse::<u64>() {
            return Some(Number::U64(n));
        }
        trimmed.parse::<f64>().ok().map(Number::F64)
    }

    /// Returns the decimal text form of this number.
    ///
    /// Integral floats print without a fractional part (`1.0` is `"1"`),
    /// negative zero prints as `"0"`, and infinities print as
    /// `"Infinity"` / `"-Infinity"`. Magnitudes from `1e21` up and below
    /// `1e-6` switch to exponent notation with a signed exponent
    /// (`"1e+21"`, `"1.5e-7"`).
    pub fn to_text(self) -> String {
        match self {
            Number::I64(n) => n.to_string(),
            Number::U64(n) => n.to_string(),
            Number::F64(n) if n.is_infinite() => {
                if n.is_sign_positive() {
                    "Infinity".to_string()
                } else {
                    "-Infinity".to_string()
                }
            }
            Number::F64(n) if n == 0.0 => "0".to_string(),
            Number::F64(n) if n.abs() >= 1e21 || n.abs() < 1e-6 => exponent_text(n),
            Number::F64(n) => n.to_string(),
        }
    }
}

fn exponent_text(n: f64) -> String {
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);
