//! Lab request model.
//!
//! A request asks for one laboratory session for a class. It carries the
//! class size, an ordered list of preferred slots, a veto set of excluded
//! slots, and a priority rank.
//!
//! # Priority Convention
//! **Lower value = processed earlier.** This is the reverse of the
//! dispatching convention where a higher priority wins; here priority
//! is an application rank (first come, first served).
//!
//! # Preference vs. Exclusion
//! A slot that appears in both lists is excluded. Exclusion vetoes the
//! slot in every allocation phase.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::TimeSlot;

/// Store-assigned request identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RequestId(pub u32);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req#{}", self.0)
    }
}

/// A stored request for a laboratory session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Unique identifier assigned by the store.
    pub id: RequestId,
    /// Class/section code (e.g. "B210307").
    pub class_id: String,
    /// Number of students attending.
    pub student_count: u32,
    /// Responsible teacher.
    pub teacher: String,
    /// Slots wanted, in the order they should be tried.
    pub preferred_slots: Vec<TimeSlot>,
    /// Slots the class cannot use.
    pub excluded_slots: BTreeSet<TimeSlot>,
    /// Rank; lower = earlier.
    pub priority: i32,
}

/// Request data before the store assigns an id.
///
/// Built with the same `with_*` chain as [`Request`]; the store turns it
/// into a [`Request`] on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRequest {
    /// Class/section code.
    pub class_id: String,
    /// Number of students attending.
    pub student_count: u32,
    /// Responsible teacher.
    pub teacher: String,
    /// Slots wanted, in try order.
    pub preferred_slots: Vec<TimeSlot>,
    /// Slots the class cannot use.
    pub excluded_slots: BTreeSet<TimeSlot>,
    /// Rank; lower = earlier.
    pub priority: i32,
}

impl Request {
    /// Creates a request with no slot preferences.
    pub fn new(
        id: RequestId,
        class_id: impl Into<String>,
        student_count: u32,
        teacher: impl Into<String>,
    ) -> Self {
        NewRequest::new(class_id, student_count, teacher).into_request(id)
    }

    /// Appends preferred slots (kept in the given order, duplicates dropped).
    pub fn with_preferred(mut self, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        push_unique(&mut self.preferred_slots, slots);
        self
    }

    /// Adds excluded slots.
    pub fn with_excluded(mut self, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        self.excluded_slots.extend(slots);
        self
    }

    /// Sets the priority rank.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the slot is vetoed for this request.
    #[inline]
    pub fn is_excluded(&self, slot: &TimeSlot) -> bool {
        self.excluded_slots.contains(slot)
    }

    /// Whether the slot is in the preferred list.
    #[inline]
    pub fn is_preferred(&self, slot: &TimeSlot) -> bool {
        self.preferred_slots.contains(slot)
    }

    /// Preferred slots that survive exclusion, in try order.
    pub fn usable_preferred(&self) -> impl Iterator<Item = &TimeSlot> + '_ {
        self.preferred_slots
            .iter()
            .filter(move |slot| !self.is_excluded(slot))
    }

    /// Human-readable label: `class_id (teacher)`.
    pub fn describe(&self) -> String {
        format!("{} ({})", self.class_id, self.teacher)
    }
}

impl NewRequest {
    /// Creates request data with no slot preferences.
    pub fn new(class_id: impl Into<String>, student_count: u32, teacher: impl Into<String>) -> Self {
        Self {
            class_id: class_id.into(),
            student_count,
            teacher: teacher.into(),
            ..Self::default()
        }
    }

    /// Appends preferred slots (kept in the given order, duplicates dropped).
    pub fn with_preferred(mut self, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        push_unique(&mut self.preferred_slots, slots);
        self
    }

    /// Adds excluded slots.
    pub fn with_excluded(mut self, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        self.excluded_slots.extend(slots);
        self
    }

    /// Sets the priority rank.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Attaches a store-assigned id.
    pub fn into_request(self, id: RequestId) -> Request {
        Request {
            id,
            class_id: self.class_id,
            student_count: self.student_count,
            teacher: self.teacher,
            preferred_slots: self.preferred_slots,
            excluded_slots: self.excluded_slots,
            priority: self.priority,
        }
    }
}

fn push_unique(list: &mut Vec<TimeSlot>, slots: impl IntoIterator<Item = TimeSlot>) {
    for slot in slots {
        if !list.contains(&slot) {
            list.push(slot);
        }
    }
}
