//! Per-room occupancy for the current run.
//!
//! Tracks which slots each laboratory has already been committed to.
//! A room with no entry is free in every slot.

use std::collections::{BTreeSet, HashMap};

use crate::models::{LabId, TimeSlot};

/// Occupied slots per laboratory.
#[derive(Debug, Clone, Default)]
pub struct OccupancyIndex {
    occupied: HashMap<LabId, BTreeSet<TimeSlot>>,
}

impl OccupancyIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `lab_id` is free at `slot`.
    pub fn is_available(&self, lab_id: LabId, slot: &TimeSlot) -> bool {
        !self
            .occupied
            .get(&lab_id)
            .is_some_and(|slots| slots.contains(slot))
    }

    /// Records `lab_id` as busy at `slot`. Idempotent.
    pub fn mark_occupied(&mut self, lab_id: LabId, slot: TimeSlot) {
        self.occupied.entry(lab_id).or_default().insert(slot);
    }

    /// Forgets all occupancy.
    pub fn reset(&mut self) {
        self.occupied.clear();
    }

    /// Number of slots committed for one room.
    pub fn occupied_count(&self, lab_id: LabId) -> usize {
        self.occupied.get(&lab_id).map_or(0, BTreeSet::len)
    }

    /// Whether nothing is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied.values().all(BTreeSet::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_lab_is_available() {
        let index = OccupancyIndex::new();
        assert!(index.is_available(LabId(1), &TimeSlot::new(9, 0, 0)));
        assert!(index.is_empty());
    }

    #[test]
    fn test_mark_and_query() {
        let mut index = OccupancyIndex::new();
        let slot = TimeSlot::new(9, 0, 0);
        index.mark_occupied(LabId(1), slot);

        assert!(!index.is_available(LabId(1), &slot));
        assert!(index.is_available(LabId(1), &TimeSlot::new(9, 0, 1)));
        assert!(index.is_available(LabId(2), &slot));
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut index = OccupancyIndex::new();
        let slot = TimeSlot::new(9, 2, 1);
        index.mark_occupied(LabId(1), slot);
        index.mark_occupied(LabId(1), slot);
        assert_eq!(index.occupied_count(LabId(1)), 1);
        assert_eq!(index.occupied_count(LabId(2)), 0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut index = OccupancyIndex::new();
        index.mark_occupied(LabId(1), TimeSlot::new(9, 0, 0));
        index.mark_occupied(LabId(2), TimeSlot::new(10, 4, 1));
        index.reset();
        assert!(index.is_empty());
        assert!(index.is_available(LabId(1), &TimeSlot::new(9, 0, 0)));
    }
}
