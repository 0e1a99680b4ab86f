//! Laboratory (room) model.
//!
//! A laboratory is the resource requests are placed into. It has a fixed
//! seating capacity and no availability calendar: every room is open in
//! every slot of the slot space unless already occupied.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned laboratory identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LabId(pub u32);

impl fmt::Display for LabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lab#{}", self.0)
    }
}

/// A laboratory room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Laboratory {
    /// Unique identifier assigned by the store.
    pub id: LabId,
    /// Building/room label (e.g. "Building A 301").
    pub location: String,
    /// Number of seats.
    pub capacity: u32,
}

impl Laboratory {
    /// Creates a laboratory.
    pub fn new(id: LabId, location: impl Into<String>, capacity: u32) -> Self {
        Self {
            id,
            location: location.into(),
            capacity,
        }
    }

    /// Whether the room can seat `student_count` students.
    #[inline]
    pub fn fits(&self, student_count: u32) -> bool {
        self.capacity >= student_count
    }
}
