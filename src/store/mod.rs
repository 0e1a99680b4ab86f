//! Persistence collaborator for the allocation engine.
//!
//! The engine never owns rooms, requests, or assignments; it reads and
//! writes them through [`ScheduleStore`]. Any backend that provides this
//! operation set can drive a scheduling run (a relational database, a
//! file, or the bundled [`InMemoryStore`]).
//!
//! # Ordering Contract
//! - [`list_laboratories`](ScheduleStore::list_laboratories) returns rooms in
//!   creation order. The engine scans rooms in exactly this order.
//! - [`list_requests`](ScheduleStore::list_requests) returns requests sorted by
//!   ascending priority, ties broken by creation order. The engine does not
//!   re-sort.

mod memory;

pub use memory::InMemoryStore;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{
    Assignment, AssignmentId, LabId, Laboratory, NewRequest, Request, RequestId, TimeSlot,
};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind (`laboratory`, `request`).
        entity: &'static str,
        /// Raw id.
        id: u32,
    },
    /// The backend refused the write.
    #[error("write rejected: {0}")]
    WriteRejected(String),
    /// The write would duplicate an existing booking.
    #[error("{lab_id} is already booked at {slot}")]
    Conflict {
        /// Room already booked.
        lab_id: LabId,
        /// Slot already booked.
        slot: TimeSlot,
    },
}

/// One assignment joined with its request and laboratory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Class/section code.
    pub class_id: String,
    /// Responsible teacher.
    pub teacher: String,
    /// Laboratory location.
    pub location: String,
    /// Booked slot.
    pub slot: TimeSlot,
}

impl fmt::Display for TimetableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.class_id, self.teacher, self.location, self.slot
        )
    }
}

/// Storage operations needed by a scheduling run.
///
/// Implementations are synchronous: a call returns only after the write
/// is durable, because the engine decides occupancy from the result.
pub trait ScheduleStore {
    /// All laboratories, in creation order.
    fn list_laboratories(&self) -> StoreResult<Vec<Laboratory>>;

    /// All requests, ascending priority, ties in creation order.
    fn list_requests(&self) -> StoreResult<Vec<Request>>;

    /// Removes every assignment.
    fn clear_assignments(&mut self) -> StoreResult<()>;

    /// Records an assignment and returns its id.
    fn add_assignment(
        &mut self,
        request_id: RequestId,
        lab_id: LabId,
        slot: TimeSlot,
    ) -> StoreResult<AssignmentId>;

    /// All assignments, in write order.
    fn list_assignments(&self) -> StoreResult<Vec<Assignment>>;

    /// Assignments placed in one laboratory.
    fn assignments_for_lab(&self, lab_id: LabId) -> StoreResult<Vec<Assignment>> {
        Ok(self
            .list_assignments()?
            .into_iter()
            .filter(|a| a.lab_id == lab_id)
            .collect())
    }

    /// Assignments whose request belongs to `class_id` (join on request id).
    fn assignments_for_class(&self, class_id: &str) -> StoreResult<Vec<Assignment>> {
        let request_ids: Vec<RequestId> = self
            .list_requests()?
            .into_iter()
            .filter(|r| r.class_id == class_id)
            .map(|r| r.id)
            .collect();
        Ok(self
            .list_assignments()?
            .into_iter()
            .filter(|a| request_ids.contains(&a.request_id))
            .collect())
    }

    /// Every assignment joined with its request and laboratory, in write
    /// order. Assignments whose request or laboratory was deleted are skipped.
    fn timetable(&self) -> StoreResult<Vec<TimetableEntry>> {
        let requests: HashMap<RequestId, Request> = self
            .list_requests()?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();
        let labs: HashMap<LabId, Laboratory> = self
            .list_laboratories()?
            .into_iter()
            .map(|l| (l.id, l))
            .collect();

        Ok(self
            .list_assignments()?
            .into_iter()
            .filter_map(|a| {
                let request = requests.get(&a.request_id)?;
                let lab = labs.get(&a.lab_id)?;
                Some(TimetableEntry {
                    class_id: request.class_id.clone(),
                    teacher: request.teacher.clone(),
                    location: lab.location.clone(),
                    slot: a.time_slot,
                })
            })
            .collect())
    }

    // ==================== Entity lifecycle ====================

    /// Creates a laboratory and returns its id.
    fn add_laboratory(&mut self, location: &str, capacity: u32) -> StoreResult<LabId>;

    /// Deletes a laboratory.
    fn delete_laboratory(&mut self, id: LabId) -> StoreResult<()>;

    /// Fetches one laboratory.
    fn get_laboratory(&self, id: LabId) -> StoreResult<Laboratory>;

    /// Creates a request and returns its id.
    fn add_request(&mut self, request: NewRequest) -> StoreResult<RequestId>;

    /// Deletes a request.
    fn delete_request(&mut self, id: RequestId) -> StoreResult<()>;

    /// Fetches one request.
    fn get_request(&self, id: RequestId) -> StoreResult<Request>;

    /// Removes every assignment, request, and laboratory.
    fn clear_all(&mut self) -> StoreResult<()>;
}
