//! Per-mode value matching.
//!
//! A [`Matcher`] pairs a query with a [`MatchMode`] and answers whether a
//! single field value matches. Pattern modes compile their regular expression
//! once, when the matcher is built, so a matcher can be applied to every
//! record of a collection without recompiling.

use regex::{Regex, RegexBuilder};

use crate::compare::compare_scalars;
use crate::error::Result;
use crate::mode::MatchMode;
use crate::query::QueryValue;
use crate::value::Value;

/// A compiled match predicate for one query and one mode.
///
/// # Example
///
/// ```
/// use keysift::{MatchMode, Matcher, Value};
///
/// let matcher = Matcher::new("abc", MatchMode::Contains).unwrap();
/// assert!(matcher.matches(&Value::Text("x a b c y")));
/// assert!(!matcher.matches(&Value::Text("acb")));
/// ```
#[derive(Debug, Clone)]
pub struct Matcher {
    query: QueryValue,
    mode: MatchMode,
    rule: Rule,
}

#[derive(Debug, Clone)]
enum Rule {
    /// Lowercased query text.
    Equal(String),
    /// Pattern tested against the value text.
    Pattern { regex: Regex, strip_whitespace: bool },
    Ordering,
}

impl Matcher {
    /// Builds a matcher for the given query and mode.
    ///
    /// Fails only if the pattern built from the query cannot be compiled,
    /// which happens when it exceeds the regex size limits.
    pub fn new(query: impl Into<QueryValue>, mode: MatchMode) -> Result<Self> {
        let query = query.into();
        let rule = if mode.is_ordering_mode() {
            Rule::Ordering
        } else if mode.is_pattern_mode() {
            Rule::Pattern {
                regex: compile(&pattern_source(mode, &query.text()))?,
                strip_whitespace: mode.strips_whitespace(),
            }
        } else {
            Rule::Equal(query.text().to_lowercase())
        };

        Ok(Matcher { query, mode, rule })
    }

    /// Returns the query this matcher compares against.
    pub fn query(&self) -> &QueryValue {
        &self.query
    }

    /// Returns the mode of this matcher.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns the compiled pattern, for pattern modes.
    pub fn pattern(&self) -> Option<&Regex> {
        match &self.rule {
            Rule::Pattern { regex, .. } => Some(regex),
            _ => None,
        }
    }

    /// Evaluates this matcher against a field value.
    ///
    /// Null values and nested records never match.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        if !value.is_scalar() {
            return false;
        }

        match &self.rule {
            Rule::Equal(query) => value
                .text()
                .is_some_and(|text| text.to_lowercase() == *query),
            Rule::Pattern {
                regex,
                strip_whitespace,
            } => value.text().is_some_and(|text| {
                if *strip_whitespace {
                    regex.is_match(&strip_whitespace_from(&text))
                } else {
                    regex.is_match(&text)
                }
            }),
            Rule::Ordering => match compare_scalars(value, &self.query.as_value()) {
                Some(ordering) => self.mode.eval_ordering(ordering),
                None => false, // incomparable or NaN
            },
        }
    }
}

/// Tests a single value against a query under the given mode.
///
/// This builds a throwaway [`Matcher`]; prefer building one up front when
/// matching many values. A pattern that fails to compile matches nothing.
pub fn matches(value: &Value<'_>, query: impl Into<QueryValue>, mode: MatchMode) -> bool {
    match Matcher::new(query, mode) {
        Ok(matcher) => matcher.matches(value),
        Err(err) => {
            log::warn!("{} match pattern rejected: {}", mode, err);
            false
        }
    }
}

/// Escapes each query character and joins them with lazy wildcards.
fn fuzzy_pattern(query: &str) -> String {
    let mut buf = [0u8; 4];
    query
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut buf)))
        .collect::<Vec<_>>()
        .join(".*?")
}

/// Builds the regex source for a pattern mode.
fn pattern_source(mode: MatchMode, query: &str) -> String {
    if !mode.strips_whitespace() {
        return fuzzy_pattern(query);
    }

    let needle = regex::escape(&strip_whitespace_from(query));
    match mode {
        MatchMode::StartsWith | MatchMode::StartsWithNoSpace => format!("^{needle}"),
        MatchMode::EndsWith => format!("{needle}$"),
        _ => needle,
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()?)
}

fn strip_whitespace_from(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
