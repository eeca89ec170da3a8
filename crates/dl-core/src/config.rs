//! Overridable layout configuration.

use serde::{Deserialize, Serialize};

use crate::anchor::AnchorTable;
use crate::period::PeriodTable;
use crate::types::Category;

/// Default durations for items whose schedule defines no end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanPolicy {
    /// Span of a generic point-in-time item.
    /// Default: 30.
    pub default_minutes: u32,

    /// Span of a workout block. Workouts are always bundled, and a bundle
    /// reads better as a longer block than a single exercise.
    /// Default: 45.
    pub grouped_workout_minutes: u32,
}

impl Default for SpanPolicy {
    fn default() -> Self {
        Self {
            default_minutes: 30,
            grouped_workout_minutes: 45,
        }
    }
}

impl SpanPolicy {
    /// Span to apply to an item of `category` that has no explicit end.
    #[must_use]
    pub const fn default_for(&self, category: Category) -> u32 {
        match category {
            Category::Workout => self.grouped_workout_minutes,
            Category::Meal | Category::Supplement | Category::Lifestyle => self.default_minutes,
        }
    }
}

/// Everything a layout pass reads besides the records themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub periods: PeriodTable,
    pub anchors: AnchorTable,
    pub spans: SpanPolicy,
}

impl LayoutConfig {
    /// Returns a copy with `anchors` layered over the configured anchors.
    #[must_use]
    pub fn with_anchor_overrides(&self, anchors: &AnchorTable) -> Self {
        Self {
            anchors: self.anchors.merged(anchors),
            ..self.clone()
        }
    }
}
