//! Laboratory scheduling domain models.
//!
//! Provides the value types shared by the allocation engine, the store
//! trait, and statistics.
//!
//! # Domain Mappings
//!
//! | lab-schedule | Generic scheduling |
//! |--------------|--------------------|
//! | Laboratory | Resource (capacity-limited room) |
//! | Request | Task with a single activity |
//! | TimeSlot | Discrete time bucket |
//! | Assignment | Activity → resource × time |

mod assignment;
mod laboratory;
mod request;
mod time_slot;

pub use assignment::{Assignment, AssignmentId};
pub use laboratory::{LabId, Laboratory};
pub use request::{NewRequest, Request, RequestId};
pub use time_slot::{ParseSlotError, TimeSlot};
