//! Grouping of records that share a category and a time slot.
//!
//! All breakfast foods at 08:00 collapse into one "Breakfast" block, all
//! supplements taken 30 minutes after breakfast into one "Supplements" block,
//! and so on. Every bucket is wrapped as a group, even a bucket of one, so
//! downstream consumers see one uniform shape.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::item::{DisplayItem, Group, Totals};
use crate::record::{ActivityRecord, MealType};
use crate::types::{Category, ItemId};

/// Identifies the records that collapse into one display item.
///
/// Renders as `category[:meal_type]:slot`, e.g. `meal:breakfast:fixed:08:00`
/// or `workout:period:morning`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    category: Category,
    meal_type: Option<MealType>,
    slot: String,
}

impl GroupKey {
    /// Key for a record. A pure function of its category and scheduling fields.
    #[must_use]
    pub fn for_record(record: &ActivityRecord) -> Self {
        Self {
            category: record.category(),
            meal_type: record.kind.meal_type(),
            slot: record.scheduling.slot_descriptor(),
        }
    }

    /// Heading for the group: the meal type for meals, else the category.
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.meal_type
            .as_ref()
            .map_or_else(|| self.category.label(), MealType::label)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.category)?;
        if let Some(meal_type) = self.meal_type {
            write!(f, "{meal_type}:")?;
        }
        write!(f, "{}", self.slot)
    }
}

impl Serialize for GroupKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Merges display items that share a grouping key.
///
/// Runs one pass per category. Items without group information pass through
/// unchanged. The output is ordered by start time, category and key, so it
/// does not depend on input order. Each group takes the range of its member
/// with the lowest `(display_order, id)`; only the order of member names
/// follows `display_order` with ties kept in input order.
///
/// Grouping its own output again is a no-op.
pub fn group(items: Vec<DisplayItem>) -> Vec<DisplayItem> {
    let mut by_category: BTreeMap<Category, Vec<DisplayItem>> = BTreeMap::new();
    for item in items {
        by_category.entry(item.category).or_default().push(item);
    }

    let mut grouped: Vec<DisplayItem> = by_category
        .into_values()
        .flat_map(group_category)
        .collect();
    grouped.sort_by(|a, b| output_order(a).cmp(&output_order(b)));

    tracing::debug!(items = grouped.len(), "grouped display items");
    grouped
}

fn output_order(item: &DisplayItem) -> (u32, Category, Option<&GroupKey>, &ItemId) {
    (
        item.start_minutes,
        item.category,
        item.group.as_ref().map(|g| &g.key),
        &item.id,
    )
}

fn group_category(items: Vec<DisplayItem>) -> Vec<DisplayItem> {
    let mut out = Vec::new();
    let mut buckets: HashMap<GroupKey, Vec<DisplayItem>> = HashMap::new();

    for item in items {
        match item.group.as_ref().map(|g| g.key.clone()) {
            Some(key) => buckets.entry(key).or_default().push(item),
            None => out.push(item),
        }
    }

    out.extend(
        buckets
            .into_iter()
            .filter_map(|(key, members)| merge(key, members)),
    );
    out
}

/// Synthesizes one item from a bucket. `None` only for an empty bucket.
///
/// The range comes from the member with the lowest `(display_order, id)`.
fn merge(key: GroupKey, mut members: Vec<DisplayItem>) -> Option<DisplayItem> {
    // Stable: equal display orders keep their input order.
    members.sort_by_key(|m| m.display_order);

    let mut item_names = Vec::new();
    let mut member_ids = Vec::new();
    let mut totals = Totals::default();
    for group in members.iter().filter_map(|m| m.group.as_ref()) {
        item_names.extend(group.item_names.iter().cloned());
        member_ids.extend(group.member_ids.iter().cloned());
        totals += group.totals;
    }

    // Range owner ignores input order, unlike the member names above.
    let first = members
        .into_iter()
        .min_by(|a, b| (a.display_order, &a.id).cmp(&(b.display_order, &b.id)))?;
    Some(DisplayItem {
        id: ItemId::from_nonempty(key.to_string()),
        category: first.category,
        title: key.title().to_string(),
        sort_minutes: first.sort_minutes,
        start_minutes: first.start_minutes,
        end_minutes: first.end_minutes,
        display_order: first.display_order,
        group: Some(Group {
            key,
            item_names,
            member_ids,
            totals,
        }),
    })
}
