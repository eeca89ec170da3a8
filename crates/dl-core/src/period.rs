//! Named time-of-day periods and the table mapping them to ranges.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::{ClockTime, MINUTES_PER_DAY, hm};
use crate::types::ParseError;

/// Start of the all-day window (05:00).
pub const ALL_DAY_START: u32 = 5 * 60;

/// End of the all-day window (23:00).
pub const ALL_DAY_END: u32 = 23 * 60;

/// A named part of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    Morning,
    Midday,
    Evening,
    Night,
}

impl TimePeriod {
    pub const ALL: [Self; 4] = [Self::Morning, Self::Midday, Self::Evening, Self::Night];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TimePeriod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseError::UnknownPeriod {
                value: s.to_string(),
            })
    }
}

/// Clock window of one period.
///
/// A window whose `end` is not after its `start` runs past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl PeriodWindow {
    #[must_use]
    pub const fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Whether the window continues into the next day.
    #[must_use]
    pub fn wraps_midnight(&self) -> bool {
        self.end <= self.start
    }

    /// The `[start, end)` range this window covers on one day's timeline.
    ///
    /// Windows that run past midnight are truncated at the end of the day.
    #[must_use]
    pub fn range(&self) -> (u32, u32) {
        let start = self.start.minutes();
        if self.wraps_midnight() {
            (start, MINUTES_PER_DAY)
        } else {
            (start, self.end.minutes())
        }
    }
}

/// Period boundaries. Configuration data, overridable per deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodTable {
    pub morning: PeriodWindow,
    pub midday: PeriodWindow,
    pub evening: PeriodWindow,
    pub night: PeriodWindow,
}

impl Default for PeriodTable {
    fn default() -> Self {
        Self {
            morning: PeriodWindow::new(hm(5, 0), hm(12, 0)),
            midday: PeriodWindow::new(hm(12, 0), hm(17, 0)),
            evening: PeriodWindow::new(hm(17, 0), hm(21, 0)),
            night: PeriodWindow::new(hm(21, 0), hm(5, 0)),
        }
    }
}

impl PeriodTable {
    #[must_use]
    pub const fn window(&self, period: TimePeriod) -> PeriodWindow {
        match period {
            TimePeriod::Morning => self.morning,
            TimePeriod::Midday => self.midday,
            TimePeriod::Evening => self.evening,
            TimePeriod::Night => self.night,
        }
    }

    /// `[start, end)` for a period on the day's timeline.
    #[must_use]
    pub fn range(&self, period: TimePeriod) -> (u32, u32) {
        self.window(period).range()
    }
}
