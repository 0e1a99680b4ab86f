//! Laboratory room scheduling.
//!
//! Assigns laboratory rooms and fixed half-day slots to class requests,
//! honoring room capacity, per-request preferred and excluded slots, and
//! request priority, without double-booking any room.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeSlot`, `Laboratory`, `Request`, `Assignment`
//! - **`config`**: Slot universe configuration (TOML)
//! - **`scheduler`**: `SlotSpace`, `OccupancyIndex`, `AllocationEngine`, `ScheduleStats`
//! - **`store`**: The `ScheduleStore` persistence trait and an in-memory store
//! - **`validation`**: Optional input integrity checks (duplicate IDs, stray slots)
//!
//! # Example
//!
//! ```
//! use lab_schedule::models::{NewRequest, TimeSlot};
//! use lab_schedule::scheduler::{AllocationEngine, ScheduleStats};
//! use lab_schedule::store::{InMemoryStore, ScheduleStore};
//!
//! let mut store = InMemoryStore::new();
//! store.add_laboratory("A301", 40).unwrap();
//! for (priority, class) in [(1, "B210307"), (2, "B210308")] {
//!     store
//!         .add_request(
//!             NewRequest::new(class, 33, "Zhu")
//!                 .with_preferred([TimeSlot::new(9, 0, 0)])
//!                 .with_priority(priority),
//!         )
//!         .unwrap();
//! }
//!
//! let placed = AllocationEngine::new().run(&mut store).unwrap();
//! assert_eq!(placed, 2);
//!
//! let stats = ScheduleStats::from_store(&store).unwrap();
//! assert!((stats.success_rate - 100.0).abs() < 1e-10);
//! ```
//!
//! # Logging
//!
//! The engine reports progress through the `log` facade. Install any
//! logger in the binary to see it.

pub mod config;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;
