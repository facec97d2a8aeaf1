//! Field specifiers and nested-path resolution.
//!
//! A [`FieldPath`] names either a direct field (`"id"`) or a dot-delimited
//! path into nested records (`"comments.id"`). Resolution walks one segment
//! per level, so its depth is bounded by the number of segments.

use std::fmt;

use crate::matcher::Matcher;
use crate::record::Record;
use crate::value::Value;

/// A parsed field specifier.
///
/// Specifiers containing a `.` are split on every dot. Empty segments are
/// kept and look up a field named `""`.
///
/// ```
/// use keysift::FieldPath;
///
/// let path = FieldPath::parse("comments.text");
/// assert!(path.is_nested());
/// assert_eq!(path.segments(), ["comments", "text"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parses a specifier.
    pub fn parse(spec: &str) -> Self {
        FieldPath {
            raw: spec.to_string(),
            segments: spec.split('.').map(str::to_string).collect(),
        }
    }

    /// Returns the specifier as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the path segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns `true` if this specifier descends into nested records.
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    /// Resolves this path against a record.
    pub fn resolve<'r>(&self, record: &'r dyn Record) -> Option<Value<'r>> {
        resolve(record, &self.segments)
    }

    /// Resolves this path against a record and tests the leaf value.
    pub fn matches(&self, record: &dyn Record, matcher: &Matcher) -> bool {
        resolve_and_match(record, &self.segments, matcher)
    }

    /// Like [`matches`](Self::matches), reading the first segment through an
    /// accessor function instead of the [`Record`] trait.
    pub fn matches_by<T, F>(&self, item: &T, accessor: &F, matcher: &Matcher) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Option<Value<'a>>,
    {
        let Some((first, rest)) = self.segments.split_first() else {
            return false;
        };

        let leaf = match accessor(item, first.as_str()) {
            Some(value) if rest.is_empty() => Some(value),
            Some(Value::Record(nested)) => resolve(nested, rest),
            _ => None,
        };

        leaf.is_some_and(|value| matcher.matches(&value))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for FieldPath {
    fn from(spec: &str) -> Self {
        FieldPath::parse(spec)
    }
}

impl From<String> for FieldPath {
    fn from(spec: String) -> Self {
        FieldPath::parse(&spec)
    }
}

impl From<&String> for FieldPath {
    fn from(spec: &String) -> Self {
        FieldPath::parse(spec)
    }
}

/// Walks `segments` through nested records and returns the leaf value.
///
/// Returns `None` if a segment is missing, if the walk reaches a scalar or
/// null before the last segment, or if `segments` is empty.
pub fn resolve<'r, S: AsRef<str>>(record: &'r dyn Record, segments: &[S]) -> Option<Value<'r>> {
    let (last, parents) = segments.split_last()?;

    let mut current = record;
    for segment in parents {
        match current.field(segment.as_ref())? {
            Value::Record(nested) => current = nested,
            _ => return None,
        }
    }

    current.field(last.as_ref())
}

/// Resolves `segments` against `record` and tests the leaf with `matcher`.
///
/// Any failure to resolve is a non-match.
pub fn resolve_and_match<S: AsRef<str>>(
    record: &dyn Record,
    segments: &[S],
    matcher: &Matcher,
) -> bool {
    resolve(record, segments).is_some_and(|value| matcher.matches(&value))
}
