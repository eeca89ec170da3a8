//! Read-only queries a renderer runs over a packed layout.

use std::collections::BTreeMap;

use crate::pack::{Packed, Span};

/// Number of lanes to draw. Always at least one, even for an empty day.
pub fn lane_count<T>(packed: &[Packed<T>]) -> usize {
    packed.iter().map(|p| p.lane + 1).max().unwrap_or(1)
}

/// Partitions packed items by lane, keeping packer order within each lane.
pub fn group_by_lane<T>(packed: &[Packed<T>]) -> BTreeMap<usize, Vec<&Packed<T>>> {
    let mut lanes: BTreeMap<usize, Vec<&Packed<T>>> = BTreeMap::new();
    for item in packed {
        lanes.entry(item.lane).or_default().push(item);
    }
    lanes
}

/// Whether `[start_a, end_a)` and `[start_b, end_b)` share any instant.
///
/// Touching ranges do not overlap.
pub const fn do_times_overlap(start_a: u32, end_a: u32, start_b: u32, end_b: u32) -> bool {
    start_a < end_b && start_b < end_a
}

/// Largest number of items active at one instant.
///
/// At equal instants ends are processed before starts, so touching items do
/// not count as concurrent; this matches [`lane_count`] after packing.
/// Empty ranges (`start >= end`) are active at no instant and are skipped.
pub fn max_concurrent_items<T: Span>(items: &[T]) -> usize {
    // (minute, delta): -1 sorts before +1 at the same minute.
    let mut events: Vec<(u32, i8)> = items
        .iter()
        .filter(|item| item.start_minutes() < item.end_minutes())
        .flat_map(|item| [(item.start_minutes(), 1), (item.end_minutes(), -1)])
        .collect();
    events.sort_unstable();

    let mut current: usize = 0;
    let mut max = 0;
    for (_, delta) in events {
        if delta > 0 {
            current += 1;
            max = max.max(current);
        } else {
            current -= 1;
        }
    }
    max
}
