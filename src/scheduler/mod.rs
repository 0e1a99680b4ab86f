//! Laboratory allocation engine and run statistics.
//!
//! # Algorithm
//!
//! `AllocationEngine` is a greedy, priority-ordered, first-fit matcher.
//! Each request tries its preferred slots first, then every other slot of
//! the `SlotSpace`, taking the first room that seats the class and is not
//! yet occupied. It never revisits a committed request, so the result is
//! not globally optimal, only fast and deterministic.
//!
//! # Statistics
//!
//! `ScheduleStats` reports placed/unplaced counts, the success rate, and
//! the unplaced classes, computed from the stored assignments.

mod engine;
mod occupancy;
mod slot_space;
mod stats;

pub use engine::{AllocationEngine, Phase, Placement};
pub use occupancy::OccupancyIndex;
pub use slot_space::SlotSpace;
pub use stats::ScheduleStats;
