//! Field access for filterable records.
//!
//! A [`Record`] exposes its fields by name. Fields that hold other records
//! return [`Value::Record`], which is what dot-paths such as
//! `"comments.text"` descend into.
//!
//! Implementations are provided for `serde_json` values and for string-keyed
//! maps. Structs get one from `#[derive(Record)]` (feature `macros`) or by
//! implementing the trait by hand.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::value::{Number, Value};

/// Types whose fields can be looked up by name.
///
/// # Derive Usage
///
/// ```ignore
/// use keysift::Record;
///
/// #[derive(Record)]
/// struct Comment {
///     #[sift(Number)]
///     id: u32,
///     #[sift(Text)]
///     text: String,
/// }
///
/// #[derive(Record)]
/// struct Post {
///     #[sift(Text)]
///     title: String,
///     #[sift(Nested)]
///     comments: Comment,
/// }
/// ```
///
/// # Manual Implementation
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
pub trait Record {
    /// Returns the value of a field.
    ///
    /// `None` means the record has no such field. A field that exists but
    /// holds nothing is `Some(Value::Null)`.
    fn field(&self, name: &str) -> Option<Value<'_>>;

    /// Returns a static accessor function suitable for
    /// [`Filter::filter_by`](crate::Filter::filter_by).
    fn accessor<'a>(item: &'a Self, name: &str) -> Option<Value<'a>>
    where
        Self: Sized,
    {
        item.field(name)
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        (**self).field(name)
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        (**self).field(name)
    }
}

/// Conversion of a stored field into a [`Value`].
///
/// Map-based records use this to expose their values, and derived records
/// use it for optional fields.
pub trait AsValue {
    /// Borrows this as a runtime value.
    fn as_value(&self) -> Value<'_>;
}

impl AsValue for str {
    fn as_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl AsValue for String {
    fn as_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl AsValue for bool {
    fn as_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl AsValue for Number {
    fn as_value(&self) -> Value<'_> {
        Value::Number(*self)
    }
}

macro_rules! number_as_value {
    ($($source:ty),+) => {
        $(
            impl AsValue for $source {
                fn as_value(&self) -> Value<'_> {
                    Value::Number(Number::from(*self))
                }
            }
        )+
    };
}

number_as_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.as_value(),
            None => Value::Null,
        }
    }
}

impl<T: AsValue + ?Sized> AsValue for &T {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue + ?Sized> AsValue for Box<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

// ============================================================================
// serde_json
// ============================================================================

impl AsValue for serde_json::Value {
    fn as_value(&self) -> Value<'_> {
        match self {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(json_number(n)),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => Value::Record(self),
        }
    }
}

/// Objects are keyed by field name, arrays by decimal index.
/// Scalars have no fields.
impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match self {
            serde_json::Value::Object(map) => map.field(name),
            serde_json::Value::Array(items) => {
                let index: usize = name.parse().ok()?;
                items.get(index).map(AsValue::as_value)
            }
            _ => None,
        }
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.get(name).map(AsValue::as_value)
    }
}

impl AsValue for serde_json::Map<String, serde_json::Value> {
    fn as_value(&self) -> Value<'_> {
        Value::Record(self)
    }
}

fn json_number(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::I64(i)
    } else if let Some(u) = n.as_u64() {
        Number::U64(u)
    } else {
        Number::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}

// ============================================================================
// Sequences, indexed by decimal position
// ============================================================================

impl<T: AsValue> Record for [T] {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        let index: usize = name.parse().ok()?;
        self.get(index).map(AsValue::as_value)
    }
}

impl<T: AsValue> Record for Vec<T> {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.as_slice().field(name)
    }
}

impl<T: AsValue> AsValue for Vec<T> {
    fn as_value(&self) -> Value<'_> {
        Value::Record(self)
    }
}

// ============================================================================
// String-keyed maps
// ============================================================================

impl<V: AsValue, S: BuildHasher> Record for HashMap<String, V, S> {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.get(name).map(AsValue::as_value)
    }
}

impl<V: AsValue, S: BuildHasher> AsValue for HashMap<String, V, S> {
    fn as_value(&self) -> Value<'_> {
        Value::Record(self)
    }
}

impl<V: AsValue> Record for BTreeMap<String, V> {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.get(name).map(AsValue::as_value)
    }
}

impl<V: AsValue> AsValue for BTreeMap<String, V> {
    fn as_value(&self) -> Value<'_> {
        Value::Record(self)
    }
}
