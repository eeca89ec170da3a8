//! Greedy lane assignment.
//!
//! # Algorithm Summary
//!
//! 1. Sort items by start; equal starts put the longer item first
//! 2. Keep one end time per lane
//! 3. Place each item in the lowest lane whose end is at or before the
//!    item's start, or open a new lane
//!
//! This is interval partitioning, so the number of lanes equals the largest
//! number of items that overlap at any instant.

use serde::Serialize;

/// Anything with a `[start, end)` range in minutes.
///
/// Ranges are expected to be well formed (`start < end`).
pub trait Span {
    /// Inclusive start.
    fn start_minutes(&self) -> u32;

    /// Exclusive end.
    fn end_minutes(&self) -> u32;

    fn duration_minutes(&self) -> u32 {
        self.end_minutes().saturating_sub(self.start_minutes())
    }
}

impl Span for (u32, u32) {
    fn start_minutes(&self) -> u32 {
        self.0
    }

    fn end_minutes(&self) -> u32 {
        self.1
    }
}

/// An item with its assigned lane.
///
/// The lane is a 0-based visual column with no meaning beyond placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Packed<T> {
    #[serde(flatten)]
    pub item: T,
    pub lane: usize,
}

impl<T: Span> Span for Packed<T> {
    fn start_minutes(&self) -> u32 {
        self.item.start_minutes()
    }

    fn end_minutes(&self) -> u32 {
        self.item.end_minutes()
    }
}

/// Assigns every item to the lowest free lane.
///
/// Output is in placement order (start ascending, longer first on ties,
/// input order after that). Touching ranges share a lane.
pub fn pack<T: Span>(items: Vec<T>) -> Vec<Packed<T>> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut sorted = items;
    sorted.sort_by(|a, b| {
        a.start_minutes()
            .cmp(&b.start_minutes())
            .then_with(|| b.duration_minutes().cmp(&a.duration_minutes()))
    });

    // End time of the most recent item in each lane.
    let mut lane_ends: Vec<u32> = Vec::new();
    let mut packed = Vec::with_capacity(sorted.len());

    for item in sorted {
        debug_assert!(
            item.start_minutes() < item.end_minutes(),
            "pack expects non-empty ranges"
        );

        let start = item.start_minutes();
        let lane = if let Some(lane) = lane_ends.iter().position(|&end| end <= start) {
            lane_ends[lane] = item.end_minutes();
            lane
        } else {
            lane_ends.push(item.end_minutes());
            lane_ends.len() - 1
        };

        packed.push(Packed { item, lane });
    }

    tracing::debug!(items = packed.len(), lanes = lane_ends.len(), "packed lanes");
    packed
}
