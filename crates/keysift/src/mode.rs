//! Match modes for filter queries.
//!
//! The [`MatchMode`] enum selects how a resolved field value is compared with
//! the query. Its string tags are part of the public interface and are used
//! by `Display`, `FromStr` and serde.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SiftError;

/// Comparison strategy applied between a field value and the query.
///
/// Modes are grouped by how they compare:
/// - **Text**: `Equal`, `Fuzzy`, `Contains`, `StartsWith`, `EndsWith`,
///   `StartsWithNoSpace` work on the text form of both sides, ignoring case
/// - **Ordering**: `Greater`, `Less`, `GreaterEqual`, `LessEqual` compare the
///   scalars natively
///
/// The default mode is `Fuzzy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Query characters appear in the value in order, gaps allowed.
    #[default]
    Fuzzy,
    /// Case-insensitive equality of the text forms.
    Equal,
    /// Value contains the query, whitespace ignored.
    Contains,
    /// Value starts with the query, whitespace ignored.
    StartsWith,
    /// Value ends with the query, whitespace ignored.
    EndsWith,
    /// Same as `StartsWith`, kept as a separate tag.
    StartsWithNoSpace,
    /// Value greater than query.
    Greater,
    /// Value less than query.
    Less,
    /// Value greater than or equal to query.
    GreaterEqual,
    /// Value less than or equal to query.
    LessEqual,
}

impl MatchMode {
    /// All modes, in tag order.
    pub const ALL: [MatchMode; 10] = [
        MatchMode::Fuzzy,
        MatchMode::Equal,
        MatchMode::Contains,
        MatchMode::StartsWith,
        MatchMode::EndsWith,
        MatchMode::StartsWithNoSpace,
        MatchMode::Greater,
        MatchMode::Less,
        MatchMode::GreaterEqual,
        MatchMode::LessEqual,
    ];

    /// Resolves a tag, falling back to [`MatchMode::Equal`] for unknown tags.
    ///
    /// Use [`str::parse`] for strict parsing.
    pub fn from_tag(tag: &str) -> MatchMode {
        match tag.parse() {
            Ok(mode) => mode,
            Err(_) => {
                log::warn!("unknown match mode '{}', falling back to 'equal'", tag);
                MatchMode::Equal
            }
        }
    }

    /// Returns `true` if this mode compares text through a compiled pattern.
    pub fn is_pattern_mode(self) -> bool {
        matches!(
            self,
            MatchMode::Fuzzy
                | MatchMode::Contains
                | MatchMode::StartsWith
                | MatchMode::EndsWith
                | MatchMode::StartsWithNoSpace
        )
    }

    /// Returns `true` if this mode compares scalars by ordering.
    pub fn is_ordering_mode(self) -> bool {
        matches!(
            self,
            MatchMode::Greater | MatchMode::Less | MatchMode::GreaterEqual | MatchMode::LessEqual
        )
    }

    /// Returns `true` if this mode removes whitespace before comparing.
    pub fn strips_whitespace(self) -> bool {
        self.is_pattern_mode() && self != MatchMode::Fuzzy
    }

    /// Evaluates an ordering mode given the result of comparing value to query.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            MatchMode::Greater => ordering == Ordering::Greater,
            MatchMode::GreaterEqual => ordering != Ordering::Less,
            MatchMode::Less => ordering == Ordering::Less,
            MatchMode::LessEqual => ordering != Ordering::Greater,
            _ => false, // Not an ordering-based mode
        }
    }

    /// Returns the public tag of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Fuzzy => "fuzzy",
            MatchMode::Equal => "equal",
            MatchMode::Contains => "contains",
            MatchMode::StartsWith => "starts-with",
            MatchMode::EndsWith => "ends-with",
            MatchMode::StartsWithNoSpace => "starts-with-no-space",
            MatchMode::Greater => "greater",
            MatchMode::Less => "less",
            MatchMode::GreaterEqual => "greater-equal",
            MatchMode::LessEqual => "less-equal",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| SiftError::UnknownMode(s.to_string()))
    }
}

impl Serialize for MatchMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MatchMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(MatchMode::from_tag(&tag))
    }
}
