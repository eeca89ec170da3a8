//! Display items: records resolved onto the day's timeline.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::clock::MINUTES_PER_DAY;
use crate::config::LayoutConfig;
use crate::group::GroupKey;
use crate::pack::Span;
use crate::record::{ActivityKind, ActivityRecord};
use crate::schedule::{Resolution, resolve};
use crate::types::{Category, ItemId};

/// Summed numeric metadata of a group.
///
/// Integer fields so that totals are independent of summation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
    pub workout_minutes: u32,
}

impl Totals {
    /// Contribution of a single record.
    #[must_use]
    pub const fn of(kind: &ActivityKind) -> Self {
        match *kind {
            ActivityKind::Meal {
                calories,
                protein_g,
                carbs_g,
                fat_g,
                ..
            } => Self {
                calories,
                protein_g,
                carbs_g,
                fat_g,
                workout_minutes: 0,
            },
            ActivityKind::Workout { estimated_minutes } => Self {
                calories: 0,
                protein_g: 0,
                carbs_g: 0,
                fat_g: 0,
                workout_minutes: estimated_minutes,
            },
            ActivityKind::Supplement { .. } | ActivityKind::Lifestyle => Self {
                calories: 0,
                protein_g: 0,
                carbs_g: 0,
                fat_g: 0,
                workout_minutes: 0,
            },
        }
    }
}

impl Add for Totals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories.saturating_add(rhs.calories),
            protein_g: self.protein_g.saturating_add(rhs.protein_g),
            carbs_g: self.carbs_g.saturating_add(rhs.carbs_g),
            fat_g: self.fat_g.saturating_add(rhs.fat_g),
            workout_minutes: self.workout_minutes.saturating_add(rhs.workout_minutes),
        }
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// The records a grouped display item stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub key: GroupKey,
    /// Member names, ordered by display order.
    pub item_names: Vec<String>,
    /// Member record IDs, in the same order as `item_names`.
    pub member_ids: Vec<ItemId>,
    pub totals: Totals,
}

/// A unit handed to the lane packer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub id: ItemId,
    pub category: Category,
    pub title: String,
    /// Unclamped resolver sort time.
    pub sort_minutes: i32,
    pub start_minutes: u32,
    pub end_minutes: u32,
    pub display_order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
}

impl DisplayItem {
    /// An ungrouped item, for callers that lay out their own ranges.
    ///
    /// The packer expects `start_minutes < end_minutes`.
    #[must_use]
    pub fn single(
        id: ItemId,
        category: Category,
        title: impl Into<String>,
        start_minutes: u32,
        end_minutes: u32,
    ) -> Self {
        Self {
            id,
            category,
            title: title.into(),
            sort_minutes: i32::try_from(start_minutes).unwrap_or(i32::MAX),
            start_minutes,
            end_minutes,
            display_order: 0,
            group: None,
        }
    }

    #[must_use]
    pub const fn is_grouped(&self) -> bool {
        self.group.is_some()
    }

    /// Number of records this item represents.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.group.as_ref().map_or(1, |g| g.member_ids.len())
    }

    /// Resolves one record into a one-member group.
    ///
    /// Applies the span policy to open-ended schedules, then bounds the range
    /// to the day.
    #[must_use]
    pub fn expand(record: &ActivityRecord, config: &LayoutConfig) -> Self {
        let resolution = resolve(&record.scheduling, &config.anchors, &config.periods);
        let span = config.spans.default_for(record.category());
        let (start_minutes, end_minutes) = bound_to_day(&record.id, resolution, span);
        let key = GroupKey::for_record(record);

        Self {
            id: record.id.clone(),
            category: record.category(),
            title: key.title().to_string(),
            sort_minutes: resolution.sort_minutes,
            start_minutes,
            end_minutes,
            display_order: record.display_order,
            group: Some(Group {
                key,
                item_names: vec![record.name.clone()],
                member_ids: vec![record.id.clone()],
                totals: Totals::of(&record.kind),
            }),
        }
    }
}

impl Span for DisplayItem {
    fn start_minutes(&self) -> u32 {
        self.start_minutes
    }

    fn end_minutes(&self) -> u32 {
        self.end_minutes
    }
}

/// Turns a resolution into a non-empty `[start, end)` range inside the day.
///
/// - starts outside the day are clamped to the first or last minute
/// - an explicit end before the start runs past midnight and is cut at 24:00
/// - no end, or an end equal to the start, gets `default_span`
fn bound_to_day(id: &ItemId, resolution: Resolution, default_span: u32) -> (u32, u32) {
    let day_end = i32::try_from(MINUTES_PER_DAY).unwrap_or(i32::MAX);
    let raw_start = resolution.start_minutes;

    let start = raw_start.clamp(0, day_end - 1);
    if start != raw_start {
        tracing::warn!(
            item = %id,
            resolved = raw_start,
            clamped = start,
            "resolved start falls outside the day, clamping"
        );
    }

    let span = i32::try_from(default_span).unwrap_or(day_end);
    let wanted_end = match resolution.end_minutes {
        Some(end) if end > raw_start => end,
        Some(end) if end < raw_start => day_end,
        _ => start.saturating_add(span),
    };

    let end = wanted_end.clamp(start + 1, day_end);
    if end < wanted_end {
        tracing::warn!(
            item = %id,
            resolved = wanted_end,
            clamped = end,
            "resolved end runs past midnight, truncating"
        );
    }

    (start.unsigned_abs(), end.unsigned_abs())
}
