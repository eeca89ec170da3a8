//! Minute-of-day arithmetic.
//!
//! All engine times are minutes since local midnight. Ranges are half-open
//! `[start, end)` and never wrap past midnight, so `end` may equal
//! [`MINUTES_PER_DAY`] but `start` never does.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::types::ParseError;

/// Minutes in one day; also the exclusive end of the last possible range.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parses a zero-padded 24-hour `HH:MM` string into minutes since midnight.
///
/// Anything else (`8:00`, `24:00`, `08:00:00`) is a contract violation and
/// is reported rather than guessed at.
pub fn time_to_minutes(s: &str) -> Result<u32, ParseError> {
    let invalid = || ParseError::InvalidClockTime {
        value: s.to_string(),
    };

    let well_formed = matches!(
        s.as_bytes(),
        [h1, h2, b':', m1, m2] if [h1, h2, m1, m2].iter().all(|b| b.is_ascii_digit())
    );
    if !well_formed {
        return Err(invalid());
    }

    let time = NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| invalid())?;
    Ok(time.hour() * 60 + time.minute())
}

/// Formats minutes since midnight as zero-padded `HH:MM`.
///
/// `1440` formats as `24:00`, the exclusive end of the day.
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// A validated time of day, stored as minutes since midnight.
///
/// Serializes as an `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Builds a clock time from hour and minute.
    ///
    /// Returns `None` unless `hour < 24` and `minute < 60`.
    #[must_use]
    pub const fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Builds a clock time from minutes since midnight.
    ///
    /// Returns `None` if `minutes` is not inside the day.
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            u16::try_from(minutes).ok().map(Self)
        } else {
            None
        }
    }

    /// Minutes since midnight.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0 as u32
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&minutes_to_time(self.minutes()))
    }
}

impl std::str::FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let minutes = time_to_minutes(s)?;
        Self::from_minutes(minutes).ok_or_else(|| ParseError::InvalidClockTime {
            value: s.to_string(),
        })
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// Builds a `ClockTime` from a literal in const context.
///
/// Panics at compile time on an out-of-range literal.
pub(crate) const fn hm(hour: u16, minute: u16) -> ClockTime {
    match ClockTime::from_hm(hour, minute) {
        Some(time) => time,
        None => panic!("clock literal out of range"),
    }
}
