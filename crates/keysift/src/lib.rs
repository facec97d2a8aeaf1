//! Keysift - Key-based filtering for record collections.
//!
//! Keysift keeps the records of a collection whose chosen fields match a
//! query. It supports:
//!
//! - Plain field names and dot-paths into nested records (`"comments.text"`)
//! - Ten match modes: fuzzy, equality, whitespace-insensitive substring and
//!   anchor matching, and ordering comparisons
//! - Records from `serde_json` values, string-keyed maps, hand-written
//!   [`Record`] impls, `#[derive(Record)]` (feature `macros`), or accessor
//!   functions
//! - Filter descriptions loaded from JSON or YAML
//!
//! # Quick Start
//!
//! ```rust
//! use keysift::{filter_data, MatchMode};
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"id": 1, "name": "test1", "comments": {"text": "hello world"}}),
//!     json!({"id": 12, "name": "test2"}),
//!     json!({"id": 123, "name": "test3"}),
//! ];
//!
//! // Exact (case-insensitive) match on one field
//! let exact = filter_data("1", &records, &["id"], MatchMode::Equal);
//! assert_eq!(exact.len(), 1);
//!
//! // Fuzzy is the default mode: "1" appears in all three ids
//! let fuzzy = filter_data("1", &records, &["id"], MatchMode::default());
//! assert_eq!(fuzzy.len(), 3);
//!
//! // Dot-paths reach into nested records
//! let nested = filter_data("hello", &records, &["name", "comments.text"], MatchMode::Contains);
//! assert_eq!(nested.len(), 1);
//! ```
//!
//! # Filter Semantics
//!
//! A record is kept when ANY field specifier matches:
//!
//! ```text
//! keep(record) = ∃ spec ∈ fields : matches(resolve(record, spec), query, mode)
//! ```
//!
//! Missing fields, paths that run into a scalar or null, null leaves and
//! incomparable values are all "no match", never errors. Output keeps the
//! input order.
//!
//! # Match Modes
//!
//! | Tag | Rule |
//! |-----|------|
//! | `fuzzy` | query characters appear in order, gaps (line breaks included) allowed, case-insensitive (default) |
//! | `equal` | case-insensitive equality of text forms (fallback for unknown tags) |
//! | `contains` | substring, whitespace removed from both sides, case-insensitive |
//! | `starts-with` | prefix, whitespace removed, case-insensitive |
//! | `ends-with` | suffix, whitespace removed, case-insensitive |
//! | `starts-with-no-space` | same as `starts-with` |
//! | `greater`, `less`, `greater-equal`, `less-equal` | native ordering of the scalars |

mod compare;
mod config;
mod error;
mod filter;
mod matcher;
mod mode;
mod path;
mod query;
mod record;
mod value;

// Re-export public API
pub use compare::compare_scalars;
pub use config::FilterConfig;
pub use error::{Result, SiftError};
pub use filter::{filter_data, Filter, FilterBuilder};
pub use matcher::{matches, Matcher};
pub use mode::MatchMode;
pub use path::{resolve, resolve_and_match, FieldPath};
pub use query::QueryValue;
pub use record::{AsValue, Record};
pub use value::{Number, Value};

#[cfg(feature = "macros")]
pub use keysift_macros::Record;
