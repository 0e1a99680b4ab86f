//! Assignment (committed schedule entry) model.
//!
//! An assignment records that a request was placed in a laboratory at a
//! slot. Only the allocation engine creates assignments; the store gives
//! each one an id when it is written.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{LabId, RequestId, TimeSlot};

/// Store-assigned assignment identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AssignmentId(pub u32);

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asg#{}", self.0)
    }
}

/// A committed room + slot for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Identifier assigned by the store.
    pub id: AssignmentId,
    /// The satisfied request.
    pub request_id: RequestId,
    /// The room it was placed in.
    pub lab_id: LabId,
    /// When.
    pub time_slot: TimeSlot,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(id: AssignmentId, request_id: RequestId, lab_id: LabId, time_slot: TimeSlot) -> Self {
        Self {
            id,
            request_id,
            lab_id,
            time_slot,
        }
    }

    /// The `(lab, slot)` pair this assignment books.
    #[inline]
    pub fn booking(&self) -> (LabId, TimeSlot) {
        (self.lab_id, self.time_slot)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} @ {}", self.request_id, self.lab_id, self.time_slot)
    }
}
