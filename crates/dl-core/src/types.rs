//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when turning external strings into engine types.
///
/// The engine itself is total once inputs are parsed; every contract
/// violation surfaces here, at the boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The value was not a zero-padded 24-hour `HH:MM` time.
    #[error("invalid clock time {value:?}, expected zero-padded HH:MM")]
    InvalidClockTime { value: String },

    /// Unknown anchor name.
    #[error("unknown anchor: {value}")]
    UnknownAnchor { value: String },

    /// Unknown time period name.
    #[error("unknown time period: {value}")]
    UnknownPeriod { value: String },

    /// Unknown activity category.
    #[error("unknown category: {value}")]
    UnknownCategory { value: String },
}

/// Generates a validated string ID newtype with common trait implementations.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new ID after validation.
            pub fn new(id: impl Into<String>) -> Result<Self, ParseError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(ParseError::Empty { field: $field_name });
                }
                Ok(Self(id))
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id!(
    /// Identifier of an activity record or of a synthesized group.
    ///
    /// Record IDs come from the caller. Group IDs are the rendered grouping
    /// key, so they are stable across re-renders.
    ItemId, "item ID"
);

impl ItemId {
    /// Builds an ID from a string already known to be non-empty.
    pub(crate) fn from_nonempty(id: String) -> Self {
        debug_assert!(!id.is_empty());
        Self(id)
    }
}

/// Activity category. Records never group across categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Meal,
    Supplement,
    Workout,
    Lifestyle,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [Self::Meal, Self::Supplement, Self::Workout, Self::Lifestyle];

    /// String representation used in grouping keys.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Meal => "meal",
            Self::Supplement => "supplement",
            Self::Workout => "workout",
            Self::Lifestyle => "lifestyle",
        }
    }

    /// Heading for a group of this category.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Meal => "Meal",
            Self::Supplement => "Supplements",
            Self::Workout => "Workout",
            Self::Lifestyle => "Lifestyle",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseError::UnknownCategory {
                value: s.to_string(),
            })
    }
}
