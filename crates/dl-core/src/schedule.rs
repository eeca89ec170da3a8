//! Scheduling modes and their resolution to minute-of-day values.

use serde::{Deserialize, Serialize};

use crate::anchor::{Anchor, AnchorTable};
use crate::clock::ClockTime;
use crate::period::{ALL_DAY_END, ALL_DAY_START, PeriodTable, TimePeriod};

/// When an activity happens.
///
/// Each mode carries exactly the fields it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Scheduling {
    /// An explicit clock time, optionally with an end.
    Fixed {
        time_start: ClockTime,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time_end: Option<ClockTime>,
    },
    /// Sometime within a named period; the item spans the whole period.
    Period { time_period: TimePeriod },
    /// A signed offset from an anchor event ("30 minutes before lunch").
    Relative { anchor: Anchor, offset_minutes: i32 },
    /// No particular time; spans the visible day window.
    AllDay,
}

/// Effective times for one scheduling record.
///
/// Values are signed and unclamped: a relative offset may land before
/// midnight or past the end of the day. Bounding to the day happens when a
/// display item is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Time used to order items.
    pub sort_minutes: i32,
    /// Start of the occupied range.
    pub start_minutes: i32,
    /// End of the occupied range, when the mode defines one.
    pub end_minutes: Option<i32>,
}

impl Resolution {
    const fn point(minutes: i32) -> Self {
        Self {
            sort_minutes: minutes,
            start_minutes: minutes,
            end_minutes: None,
        }
    }

    const fn span(start: i32, end: i32) -> Self {
        Self {
            sort_minutes: start,
            start_minutes: start,
            end_minutes: Some(end),
        }
    }
}

/// Widens a minute-of-day value into the signed resolver domain.
fn signed(minutes: u32) -> i32 {
    i32::try_from(minutes).unwrap_or(i32::MAX)
}

/// Resolves a scheduling record against anchor and period tables.
///
/// Total over parsed input: unknown anchors and periods cannot reach here.
pub fn resolve(scheduling: &Scheduling, anchors: &AnchorTable, periods: &PeriodTable) -> Resolution {
    match scheduling {
        Scheduling::Fixed {
            time_start,
            time_end,
        } => Resolution {
            sort_minutes: signed(time_start.minutes()),
            start_minutes: signed(time_start.minutes()),
            end_minutes: time_end.map(|end| signed(end.minutes())),
        },
        Scheduling::Period { time_period } => {
            let (start, end) = periods.range(*time_period);
            Resolution::span(signed(start), signed(end))
        }
        Scheduling::Relative {
            anchor,
            offset_minutes,
        } => {
            let anchor_minutes = signed(anchors.time(*anchor).minutes());
            Resolution::point(anchor_minutes.saturating_add(*offset_minutes))
        }
        Scheduling::AllDay => Resolution::span(signed(ALL_DAY_START), signed(ALL_DAY_END)),
    }
}

impl Scheduling {
    /// Mode-specific slot descriptor, e.g. `fixed:08:00` or `period:morning`.
    ///
    /// Depends only on the scheduling fields, never on anchor values, so the
    /// same record always lands in the same slot.
    #[must_use]
    pub fn slot_descriptor(&self) -> String {
        match self {
            Self::Fixed { time_start, .. } => format!("fixed:{time_start}"),
            Self::Period { time_period } => format!("period:{time_period}"),
            Self::Relative {
                anchor,
                offset_minutes,
            } => format!("relative:{anchor}:{offset_minutes:+}"),
            Self::AllDay => "all_day".to_string(),
        }
    }

    /// Name of the active mode.
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::Fixed { .. } => "fixed",
            Self::Period { .. } => "period",
            Self::Relative { .. } => "relative",
            Self::AllDay => "all_day",
        }
    }
}
