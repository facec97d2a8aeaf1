//! Filter builder and executor.
//!
//! The [`Filter`] struct holds a compiled [`Matcher`] and a list of
//! [`FieldPath`]s. A record is kept when ANY of its fields matches:
//!
//! ```text
//! keep(record) = ∃ path ∈ fields : matcher(resolve(record, path))
//! ```
//!
//! Fields that are missing, null, or whose path runs into a scalar simply do
//! not match. An empty field list matches nothing.

use crate::error::Result;
use crate::matcher::Matcher;
use crate::mode::MatchMode;
use crate::path::FieldPath;
use crate::query::QueryValue;
use crate::record::Record;
use crate::value::Value;

/// Builder for a [`Filter`].
///
/// # Example
///
/// ```
/// use keysift::{Filter, MatchMode};
/// use serde_json::json;
///
/// let records = vec![
///     json!({"id": 1, "name": "test1", "comments": {"text": "hello world"}}),
///     json!({"id": 12, "name": "test2", "comments": {"text": "bye"}}),
/// ];
///
/// let filter = Filter::builder("hello")
///     .field("name")
///     .field("comments.text")
///     .mode(MatchMode::Contains)
///     .build()
///     .unwrap();
///
/// let results = filter.filter(&records);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0]["id"], 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    query: QueryValue,
    fields: Vec<FieldPath>,
    mode: MatchMode,
}

impl FilterBuilder {
    /// Starts a builder for the given query, in the default `fuzzy` mode.
    pub fn new(query: impl Into<QueryValue>) -> Self {
        FilterBuilder {
            query: query.into(),
            ..FilterBuilder::default()
        }
    }

    /// Adds a field specifier (plain name or dot-path).
    pub fn field(mut self, spec: impl Into<FieldPath>) -> Self {
        self.fields.push(spec.into());
        self
    }

    /// Adds several field specifiers.
    pub fn fields<I>(mut self, specs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldPath>,
    {
        self.fields.extend(specs.into_iter().map(Into::into));
        self
    }

    /// Sets the match mode.
    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Compiles the filter.
    ///
    /// Returns an error if the query pattern cannot be compiled.
    pub fn build(self) -> Result<Filter> {
        let matcher = Matcher::new(self.query, self.mode)?;
        log::debug!(
            "compiled {} filter over {} field(s)",
            matcher.mode(),
            self.fields.len()
        );
        Ok(Filter {
            matcher,
            fields: self.fields,
        })
    }
}

/// A compiled filter: one query, one mode, any number of fields.
///
/// A `Filter` holds no mutable state; build it once and apply it to as many
/// collections as needed, from as many threads as needed.
#[derive(Debug, Clone)]
pub struct Filter {
    matcher: Matcher,
    fields: Vec<FieldPath>,
}

impl Filter {
    /// Starts building a filter for the given query.
    pub fn builder(query: impl Into<QueryValue>) -> FilterBuilder {
        FilterBuilder::new(query)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the matcher.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Returns the field specifiers.
    pub fn fields(&self) -> &[FieldPath] {
        &self.fields
    }

    /// Returns the match mode.
    pub fn mode(&self) -> MatchMode {
        self.matcher.mode()
    }

    /// Returns the query.
    pub fn query(&self) -> &QueryValue {
        self.matcher.query()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single record matches this filter.
    pub fn matches<T: Record + ?Sized>(&self, record: &T) -> bool {
        self.matches_dyn(&record)
    }

    fn matches_dyn(&self, record: &dyn Record) -> bool {
        self.fields
            .iter()
            .any(|path| path.matches(record, &self.matcher))
    }

    /// Tests a single item, reading its top-level fields through `accessor`.
    ///
    /// Dot-paths continue through [`Value::Record`] values returned by the
    /// accessor.
    pub fn matches_by<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Option<Value<'a>>,
    {
        self.fields
            .iter()
            .any(|path| path.matches_by(item, &accessor, &self.matcher))
    }

    /// Filters a slice, returning references to matching records in input order.
    pub fn filter<'a, T: Record>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }

    /// Filters a slice through an accessor function.
    pub fn filter_by<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Option<Value<'b>>,
    {
        items
            .iter()
            .filter(|item| self.matches_by(*item, &accessor))
            .collect()
    }

    /// Filters and clones matching records.
    pub fn filter_cloned<T: Record + Clone>(&self, records: &[T]) -> Vec<T> {
        self.filter(records).into_iter().cloned().collect()
    }

    /// Filters a vector in place, keeping only matching records.
    pub fn filter_mut<T: Record>(&self, records: &mut Vec<T>) {
        records.retain(|record| self.matches(record));
    }

    /// Counts the number of matching records.
    pub fn count<T: Record>(&self, records: &[T]) -> usize {
        records.iter().filter(|record| self.matches(*record)).count()
    }

    /// Returns `true` if any record matches.
    pub fn any<T: Record>(&self, records: &[T]) -> bool {
        records.iter().any(|record| self.matches(record))
    }

    /// Returns `true` if all records match.
    pub fn all<T: Record>(&self, records: &[T]) -> bool {
        records.iter().all(|record| self.matches(record))
    }

    /// Finds the first matching record.
    pub fn find<'a, T: Record>(&self, records: &'a [T]) -> Option<&'a T> {
        records.iter().find(|record| self.matches(*record))
    }

    /// Finds the first matching record and returns its index.
    pub fn position<T: Record>(&self, records: &[T]) -> Option<usize> {
        records.iter().position(|record| self.matches(record))
    }

    /// Filters a slice on rayon's thread pool.
    ///
    /// Results are identical to [`filter`](Self::filter), input order included.
    #[cfg(feature = "parallel")]
    pub fn par_filter<'a, T: Record + Sync>(&self, records: &'a [T]) -> Vec<&'a T> {
        use rayon::prelude::*;

        records
            .par_iter()
            .filter(|record| self.matches(*record))
            .collect()
    }
}

/// Filters `records` by `query` across the given field specifiers.
///
/// A record is kept when at least one specifier resolves to a value that
/// matches under `mode`. Pass [`MatchMode::default()`] for fuzzy matching.
///
/// ```
/// use keysift::{filter_data, MatchMode};
/// use serde_json::json;
///
/// let records = vec![
///     json!({"id": 1, "name": "test1"}),
///     json!({"id": 12, "name": "test2"}),
///     json!({"id": 123, "name": "test3"}),
/// ];
///
/// assert_eq!(filter_data("1", &records, &["id"], MatchMode::Equal).len(), 1);
/// assert_eq!(filter_data("1", &records, &["id"], MatchMode::Fuzzy).len(), 3);
/// ```
///
/// A query whose pattern cannot be compiled matches nothing.
pub fn filter_data<'a, T, S>(
    query: impl Into<QueryValue>,
    records: &'a [T],
    specifiers: &[S],
    mode: MatchMode,
) -> Vec<&'a T>
where
    T: Record,
    S: AsRef<str>,
{
    let built = FilterBuilder::new(query)
        .fields(specifiers.iter().map(|spec| FieldPath::parse(spec.as_ref())))
        .mode(mode)
        .build();

    match built {
        Ok(filter) => filter.filter(records),
        Err(err) => {
            log::warn!("{} filter rejected: {}", mode, err);
            Vec::new()
        }
    }
}
