//! Scheduling resolution and lane packing for daily activity timelines.
//!
//! This crate contains the engine that turns scheduled activities into a
//! collision-free layout:
//! - Resolution: fixed, period, relative and all-day schedules to minute ranges
//! - Grouping: records sharing a category and time slot become one block
//! - Packing: greedy assignment of blocks to the lowest free lane
//!
//! Everything here is pure and synchronous.

pub mod anchor;
pub mod clock;
mod config;
mod day;
mod group;
mod item;
pub mod pack;
pub mod period;
pub mod query;
mod record;
mod schedule;
mod types;

pub use anchor::{Anchor, AnchorTable};
pub use clock::{ClockTime, MINUTES_PER_DAY, minutes_to_time, time_to_minutes};
pub use config::{LayoutConfig, SpanPolicy};
pub use day::{DayLayout, DayPlan, PackedItem, layout_day, layout_days, layout_plan};
pub use group::{GroupKey, group};
pub use item::{DisplayItem, Group, Totals};
pub use pack::{Packed, Span, pack};
pub use period::{PeriodTable, PeriodWindow, TimePeriod};
pub use query::{do_times_overlap, group_by_lane, lane_count, max_concurrent_items};
pub use record::{ActivityKind, ActivityRecord, MealType};
pub use schedule::{Resolution, Scheduling, resolve};
pub use types::{Category, ItemId, ParseError};
