//! The per-day pipeline: resolve, group, pack.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::anchor::AnchorTable;
use crate::config::LayoutConfig;
use crate::group::group;
use crate::item::DisplayItem;
use crate::pack::{Packed, pack};
use crate::query::{lane_count, max_concurrent_items};
use crate::record::ActivityRecord;

/// A display item with its lane.
pub type PackedItem = Packed<DisplayItem>;

/// One day's records plus the anchor times known for that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Overrides layered over the configured anchor table.
    #[serde(default)]
    pub anchors: AnchorTable,
    #[serde(default)]
    pub records: Vec<ActivityRecord>,
}

/// The computed layout for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Packed items in placement order.
    pub items: Vec<PackedItem>,
    pub lane_count: usize,
    pub max_concurrent: usize,
}

/// Lays out one day's records.
pub fn layout_day(records: &[ActivityRecord], config: &LayoutConfig) -> DayLayout {
    let expanded = records
        .iter()
        .map(|record| DisplayItem::expand(record, config))
        .collect();
    let grouped = group(expanded);
    let max_concurrent = max_concurrent_items(&grouped);
    let items = pack(grouped);
    let lanes = lane_count(&items);

    tracing::debug!(
        records = records.len(),
        items = items.len(),
        lanes,
        "laid out day"
    );

    DayLayout {
        date: None,
        items,
        lane_count: lanes,
        max_concurrent,
    }
}

/// Lays out a plan, applying its anchor overrides on top of `config`.
pub fn layout_plan(plan: &DayPlan, config: &LayoutConfig) -> DayLayout {
    let config = config.with_anchor_overrides(&plan.anchors);
    DayLayout {
        date: plan.date,
        ..layout_day(&plan.records, &config)
    }
}

/// Lays out many days in parallel. Output order matches input order.
///
/// Days share nothing, so each runs as an independent pipeline.
pub fn layout_days(plans: &[DayPlan], config: &LayoutConfig) -> Vec<DayLayout> {
    plans
        .par_iter()
        .map(|plan| layout_plan(plan, config))
        .collect()
}
