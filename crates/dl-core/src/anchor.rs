//! Anchor events that relative schedules are measured from.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clock::{ClockTime, hm};
use crate::types::ParseError;

/// A named reference point in the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Anchor {
    WakeUp,
    Breakfast,
    MidMorning,
    Lunch,
    Afternoon,
    PreWorkout,
    PostWorkout,
    Dinner,
    Bedtime,
}

impl Anchor {
    pub const ALL: [Self; 9] = [
        Self::WakeUp,
        Self::Breakfast,
        Self::MidMorning,
        Self::Lunch,
        Self::Afternoon,
        Self::PreWorkout,
        Self::PostWorkout,
        Self::Dinner,
        Self::Bedtime,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WakeUp => "wake_up",
            Self::Breakfast => "breakfast",
            Self::MidMorning => "mid_morning",
            Self::Lunch => "lunch",
            Self::Afternoon => "afternoon",
            Self::PreWorkout => "pre_workout",
            Self::PostWorkout => "post_workout",
            Self::Dinner => "dinner",
            Self::Bedtime => "bedtime",
        }
    }

    /// Built-in time used when a table has no override for this anchor.
    #[must_use]
    pub const fn default_time(&self) -> ClockTime {
        match self {
            Self::WakeUp => hm(7, 0),
            Self::Breakfast => hm(8, 0),
            Self::MidMorning => hm(10, 30),
            Self::Lunch => hm(12, 30),
            Self::Afternoon => hm(15, 0),
            Self::PreWorkout => hm(17, 0),
            Self::PostWorkout => hm(18, 30),
            Self::Dinner => hm(19, 0),
            Self::Bedtime => hm(22, 0),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Anchor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ParseError::UnknownAnchor {
                value: s.to_string(),
            })
    }
}

impl Serialize for Anchor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Anchor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Anchor times for one resolution pass.
///
/// Holds only the overrides; anchors without one resolve to
/// [`Anchor::default_time`]. An empty table is the default table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnchorTable {
    overrides: BTreeMap<Anchor, ClockTime>,
}

impl AnchorTable {
    /// Returns a copy of the table with one anchor overridden.
    #[must_use]
    pub fn with(mut self, anchor: Anchor, time: ClockTime) -> Self {
        self.set(anchor, time);
        self
    }

    /// Overrides one anchor, e.g. when a client's actual breakfast time is known.
    pub fn set(&mut self, anchor: Anchor, time: ClockTime) {
        self.overrides.insert(anchor, time);
    }

    /// Effective time for an anchor.
    #[must_use]
    pub fn time(&self, anchor: Anchor) -> ClockTime {
        self.overrides
            .get(&anchor)
            .copied()
            .unwrap_or_else(|| anchor.default_time())
    }

    /// Whether the anchor carries an override.
    #[must_use]
    pub fn is_overridden(&self, anchor: Anchor) -> bool {
        self.overrides.contains_key(&anchor)
    }

    /// Layers `other`'s overrides on top of this table's.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut overrides = self.overrides.clone();
        overrides.extend(other.overrides.iter().map(|(a, t)| (*a, *t)));
        Self { overrides }
    }

    /// Every anchor with its effective time, in day order.
    pub fn iter(&self) -> impl Iterator<Item = (Anchor, ClockTime)> + '_ {
        Anchor::ALL.into_iter().map(|a| (a, self.time(a)))
    }
}
