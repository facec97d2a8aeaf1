//! Serializable filter descriptions.
//!
//! A [`FilterConfig`] carries everything needed to build a [`Filter`]: the
//! query, the field specifiers and the mode. It can be embedded in an
//! application's own configuration or loaded from JSON or YAML:
//!
//! ```yaml
//! query: hello
//! fields: [name, comments.text]
//! mode: contains
//! ```
//!
//! `mode` defaults to `fuzzy`; unknown modes fall back to `equal`.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::{Filter, FilterBuilder};
use crate::mode::MatchMode;
use crate::query::QueryValue;

/// A filter description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// The value every field is compared against.
    pub query: QueryValue,
    /// Field specifiers: plain names or dot-paths.
    #[serde(default)]
    pub fields: Vec<String>,
    /// Match mode tag.
    #[serde(default)]
    pub mode: MatchMode,
}

impl FilterConfig {
    /// Creates a description for the given query and fields, in `fuzzy` mode.
    pub fn new<I, S>(query: impl Into<QueryValue>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterConfig {
            query: query.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            mode: MatchMode::default(),
        }
    }

    /// Sets the mode.
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parses a JSON description.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a YAML description.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serializes this description to JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns a builder primed with this description.
    pub fn builder(&self) -> FilterBuilder {
        Filter::builder(self.query.clone())
            .fields(&self.fields)
            .mode(self.mode)
    }

    /// Compiles this description into a [`Filter`].
    pub fn build(&self) -> Result<Filter> {
        self.builder().build()
    }
}
