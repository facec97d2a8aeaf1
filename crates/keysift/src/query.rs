//! Owned query values.
//!
//! Unlike [`Value`], which borrows from a record, [`QueryValue`] owns its data
//! so it can be stored in a compiled [`Filter`](crate::Filter) or loaded from a
//! filter description.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::value::{Number, Value};

/// The scalar a filter compares every resolved field against.
///
/// Deserializes from a bare JSON/YAML scalar: `"abc"`, `10`, `2.5`, `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Boolean query.
    Bool(bool),
    /// Numeric query.
    Number(Number),
    /// Text query.
    Text(String),
}

impl QueryValue {
    /// Returns the text form of the query, as used by the text-based modes.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            QueryValue::Text(s) => Cow::Borrowed(s),
            QueryValue::Number(n) => Cow::Owned(n.to_text()),
            QueryValue::Bool(true) => Cow::Borrowed("true"),
            QueryValue::Bool(false) => Cow::Borrowed("false"),
        }
    }

    /// Borrows the query as a runtime value.
    pub fn as_value(&self) -> Value<'_> {
        match self {
            QueryValue::Text(s) => Value::Text(s),
            QueryValue::Number(n) => Value::Number(*n),
            QueryValue::Bool(b) => Value::Bool(*b),
        }
    }
}

impl Default for QueryValue {
    fn default() -> Self {
        QueryValue::Text(String::new())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Text(s)
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Text(s.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(s: &String) -> Self {
        QueryValue::Text(s.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

impl From<Number> for QueryValue {
    fn from(n: Number) -> Self {
        QueryValue::Number(n)
    }
}

macro_rules! query_from_number {
    ($($source:ty),+) => {
        $(
            impl From<$source> for QueryValue {
                fn from(n: $source) -> Self {
                    QueryValue::Number(Number::from(n))
                }
            }
        )+
    };
}

query_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
