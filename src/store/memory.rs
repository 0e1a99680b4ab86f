//! In-memory store.
//!
//! Keeps everything in `Vec`s in creation order. Ids start at 1 and are
//! never reused within one store, even after deletes.
//!
//! Writes of specific `(lab, slot)` bookings can be made to fail, which
//! lets callers exercise the engine's handling of persistence failures.
//! Every `add_assignment` call is logged in [`InMemoryStore::write_attempts`],
//! accepted or not.

use std::collections::HashSet;

use super::{ScheduleStore, StoreError, StoreResult};
use crate::models::{
    Assignment, AssignmentId, LabId, Laboratory, NewRequest, Request, RequestId, TimeSlot,
};

/// A [`ScheduleStore`] backed by process memory.
///
/// # Example
///
/// ```
/// use lab_schedule::models::{NewRequest, TimeSlot};
/// use lab_schedule::store::{InMemoryStore, ScheduleStore};
///
/// let mut store = InMemoryStore::new();
/// let lab = store.add_laboratory("A301", 40).unwrap();
/// let req = store
///     .add_request(NewRequest::new("B210307", 33, "Zhu").with_priority(1))
///     .unwrap();
/// store.add_assignment(req, lab, TimeSlot::new(9, 0, 0)).unwrap();
/// assert_eq!(store.assignments_for_class("B210307").unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    laboratories: Vec<Laboratory>,
    requests: Vec<Request>,
    assignments: Vec<Assignment>,
    next_lab_id: u32,
    next_request_id: u32,
    next_assignment_id: u32,
    failing_bookings: HashSet<(LabId, TimeSlot)>,
    write_attempts: Vec<(LabId, TimeSlot)>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every write of the `(lab_id, slot)` booking fail.
    pub fn with_failing_booking(mut self, lab_id: LabId, slot: TimeSlot) -> Self {
        self.failing_bookings.insert((lab_id, slot));
        self
    }

    /// Number of stored assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Every booking passed to `add_assignment`, in call order.
    pub fn write_attempts(&self) -> &[(LabId, TimeSlot)] {
        &self.write_attempts
    }

    fn take_id(counter: &mut u32) -> u32 {
        *counter += 1;
        *counter
    }
}

impl ScheduleStore for InMemoryStore {
    fn list_laboratories(&self) -> StoreResult<Vec<Laboratory>> {
        Ok(self.laboratories.clone())
    }

    fn list_requests(&self) -> StoreResult<Vec<Request>> {
        let mut requests = self.requests.clone();
        // Stable: equal priorities keep creation order.
        requests.sort_by_key(|r| r.priority);
        Ok(requests)
    }

    fn clear_assignments(&mut self) -> StoreResult<()> {
        self.assignments.clear();
        Ok(())
    }

    fn add_assignment(
        &mut self,
        request_id: RequestId,
        lab_id: LabId,
        slot: TimeSlot,
    ) -> StoreResult<AssignmentId> {
        self.write_attempts.push((lab_id, slot));
        if self.failing_bookings.contains(&(lab_id, slot)) {
            return Err(StoreError::WriteRejected(format!(
                "injected failure for {lab_id} at {slot}"
            )));
        }
        if self.assignments.iter().any(|a| a.booking() == (lab_id, slot)) {
            return Err(StoreError::Conflict { lab_id, slot });
        }

        let id = AssignmentId(Self::take_id(&mut self.next_assignment_id));
        self.assignments
            .push(Assignment::new(id, request_id, lab_id, slot));
        Ok(id)
    }

    fn list_assignments(&self) -> StoreResult<Vec<Assignment>> {
        Ok(self.assignments.clone())
    }

    fn add_laboratory(&mut self, location: &str, capacity: u32) -> StoreResult<LabId> {
        let id = LabId(Self::take_id(&mut self.next_lab_id));
        self.laboratories
            .push(Laboratory::new(id, location, capacity));
        Ok(id)
    }

    fn delete_laboratory(&mut self, id: LabId) -> StoreResult<()> {
        let before = self.laboratories.len();
        self.laboratories.retain(|l| l.id != id);
        if self.laboratories.len() == before {
            return Err(StoreError::NotFound {
                entity: "laboratory",
                id: id.0,
            });
        }
        Ok(())
    }

    fn get_laboratory(&self, id: LabId) -> StoreResult<Laboratory> {
        self.laboratories
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "laboratory",
                id: id.0,
            })
    }

    fn add_request(&mut self, request: NewRequest) -> StoreResult<RequestId> {
        let id = RequestId(Self::take_id(&mut self.next_request_id));
        self.requests.push(request.into_request(id));
        Ok(id)
    }

    fn delete_request(&mut self, id: RequestId) -> StoreResult<()> {
        let before = self.requests.len();
        self.requests.retain(|r| r.id != id);
        if self.requests.len() == before {
            return Err(StoreError::NotFound {
                entity: "request",
                id: id.0,
            });
        }
        Ok(())
    }

    fn get_request(&self, id: RequestId) -> StoreResult<Request> {
        self.requests
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "request",
                id: id.0,
            })
    }

    fn clear_all(&mut self) -> StoreResult<()> {
        self.assignments.clear();
        self.requests.clear();
        self.laboratories.clear();
        Ok(())
    }
}
