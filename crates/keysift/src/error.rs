//! Error types for the keysift crate.

use thiserror::Error;

/// Errors that can occur when building filters or loading filter descriptions.
///
/// Filtering itself never fails: missing fields, broken paths and
/// incomparable values all resolve to "no match".
#[derive(Debug, Error)]
pub enum SiftError {
    /// The pattern built from the query could not be compiled.
    #[error("invalid match pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A match mode tag was not recognized by strict parsing.
    #[error("unknown match mode '{0}'")]
    UnknownMode(String),

    /// A JSON filter description could not be parsed.
    #[error("invalid JSON filter description: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML filter description could not be parsed.
    #[error("invalid YAML filter description: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for keysift operations.
pub type Result<T> = std::result::Result<T, SiftError>;
