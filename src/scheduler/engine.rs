//! Two-phase first-fit allocation engine.
//!
//! # Algorithm
//!
//! 1. Reset occupancy and clear stored assignments.
//! 2. Take requests in the order given (ascending priority, stable).
//! 3. Phase 1: for each preferred slot not excluded, scan rooms in order and
//!    commit the first room that fits and is free.
//! 4. Phase 2: if no preferred slot worked, walk the whole slot space in
//!    ascending order, skipping excluded and already-tried preferred slots,
//!    with the same room scan.
//! 5. A request that finds nothing is left unplaced. Earlier commits stay.
//!
//! A commit counts only once the store accepts the write; occupancy is
//! marked after that. A rejected write makes the engine move on to the
//! next room for the same slot.
//!
//! # Complexity
//! O(n * s * r) store writes in the worst case, where n = requests,
//! s = slots in the slot space, r = rooms.

use log::{debug, info, warn};

use crate::models::{LabId, Laboratory, Request, TimeSlot};
use crate::store::{ScheduleStore, StoreResult};

use super::{OccupancyIndex, SlotSpace};

/// Which phase produced a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// One of the request's preferred slots.
    Preferred,
    /// A slot from the slot space outside the preferred list.
    Fallback,
}

/// A committed room + slot for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Room used.
    pub lab_id: LabId,
    /// Slot used.
    pub slot: TimeSlot,
    /// Phase that found it.
    pub phase: Phase,
}

/// Greedy allocation engine.
///
/// Owns the occupancy index for its runs. A run needs `&mut self`, so one
/// engine cannot run twice at the same time.
///
/// # Example
///
/// ```
/// use lab_schedule::models::{NewRequest, TimeSlot};
/// use lab_schedule::scheduler::AllocationEngine;
/// use lab_schedule::store::{InMemoryStore, ScheduleStore};
///
/// let mut store = InMemoryStore::new();
/// store.add_laboratory("A301", 40).unwrap();
/// store
///     .add_request(
///         NewRequest::new("B210307", 33, "Zhu")
///             .with_preferred([TimeSlot::new(9, 0, 0)])
///             .with_priority(1),
///     )
///     .unwrap();
///
/// let mut engine = AllocationEngine::new();
/// let placed = engine.run(&mut store).unwrap();
/// assert_eq!(placed, 1);
/// assert_eq!(store.list_assignments().unwrap()[0].time_slot, TimeSlot::new(9, 0, 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AllocationEngine {
    slot_space: SlotSpace,
    occupancy: OccupancyIndex,
}

impl AllocationEngine {
    /// Creates an engine over the default slot space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine over a custom slot space.
    pub fn with_slot_space(slot_space: SlotSpace) -> Self {
        Self {
            slot_space,
            occupancy: OccupancyIndex::new(),
        }
    }

    /// The fallback slot universe.
    pub fn slot_space(&self) -> &SlotSpace {
        &self.slot_space
    }

    /// Occupancy left by the last run.
    pub fn occupancy(&self) -> &OccupancyIndex {
        &self.occupancy
    }

    /// Loads rooms and requests from the store and schedules them.
    pub fn run<S: ScheduleStore + ?Sized>(&mut self, store: &mut S) -> StoreResult<usize> {
        let rooms = store.list_laboratories()?;
        let requests = store.list_requests()?;
        self.generate_schedule(store, &rooms, &requests)
    }

    /// Schedules `requests` into `rooms` and returns how many were placed.
    ///
    /// `requests` must already be in processing order (ascending priority);
    /// `rooms` are scanned in the order given. With no rooms or no requests
    /// this returns `Ok(0)` without touching occupancy or the store.
    ///
    /// # Errors
    /// Only a failure to clear previous assignments is returned. Failed
    /// assignment writes are absorbed by the search.
    pub fn generate_schedule<S: ScheduleStore + ?Sized>(
        &mut self,
        store: &mut S,
        rooms: &[Laboratory],
        requests: &[Request],
    ) -> StoreResult<usize> {
        if rooms.is_empty() {
            warn!("no laboratories available, nothing scheduled");
            return Ok(0);
        }
        if requests.is_empty() {
            info!("no pending requests, nothing scheduled");
            return Ok(0);
        }

        self.occupancy.reset();
        store.clear_assignments()?;

        info!(
            "scheduling {} requests across {} laboratories ({} slots each)",
            requests.len(),
            rooms.len(),
            self.slot_space.len()
        );

        let mut placed: usize = 0;
        for request in requests {
            if self.allocate_request(store, request, rooms).is_some() {
                placed += 1;
            }
        }

        info!(
            "placed {placed}/{} requests ({:.2}%)",
            requests.len(),
            placed as f64 * 100.0 / requests.len() as f64
        );
        Ok(placed)
    }

    /// Places one request, or returns `None` if no room/slot works.
    ///
    /// Uses the current occupancy; does not reset it.
    pub fn allocate_request<S: ScheduleStore + ?Sized>(
        &mut self,
        store: &mut S,
        request: &Request,
        rooms: &[Laboratory],
    ) -> Option<Placement> {
        let Self {
            slot_space,
            occupancy,
        } = self;

        for slot in request.usable_preferred() {
            if let Some(lab_id) = commit_first_fit(occupancy, store, request, rooms, *slot) {
                debug!("{}: preferred {} in {lab_id}", request.class_id, slot);
                return Some(Placement {
                    lab_id,
                    slot: *slot,
                    phase: Phase::Preferred,
                });
            }
        }

        let fallback = slot_space
            .all_slots()
            .iter()
            .filter(|slot| !request.is_excluded(slot) && !request.is_preferred(slot));
        for slot in fallback {
            if let Some(lab_id) = commit_first_fit(occupancy, store, request, rooms, *slot) {
                debug!("{}: fallback {} in {lab_id}", request.class_id, slot);
                return Some(Placement {
                    lab_id,
                    slot: *slot,
                    phase: Phase::Fallback,
                });
            }
        }

        warn!(
            "could not place {} ({} students, teacher {})",
            request.class_id, request.student_count, request.teacher
        );
        None
    }
}

/// Commits `request` at `slot` in the first room that fits, is free, and
/// whose write succeeds.
fn commit_first_fit<S: ScheduleStore + ?Sized>(
    occupancy: &mut OccupancyIndex,
    store: &mut S,
    request: &Request,
    rooms: &[Laboratory],
    slot: TimeSlot,
) -> Option<LabId> {
    let candidates = rooms
        .iter()
        .filter(|room| room.fits(request.student_count));

    for room in candidates {
        if !occupancy.is_available(room.id, &slot) {
            continue;
        }
        match store.add_assignment(request.id, room.id, slot) {
            Ok(_) => {
                occupancy.mark_occupied(room.id, slot);
                return Some(room.id);
            }
            Err(e) => {
                warn!(
                    "write failed for {} in {} ({}) at {slot}: {e}",
                    request.class_id, room.location, room.id
                );
            }
        }
    }
    None
}
