//! Slot universe for a scheduling run.
//!
//! Enumerates every `(week, day, period)` the configuration allows, in
//! ascending order. This is the fallback search space once a request's
//! preferred slots are exhausted.

use crate::config::{ConfigError, SlotSpaceConfig};
use crate::models::TimeSlot;

/// The finite, ordered set of valid slots.
///
/// Built only from a validated [`SlotSpaceConfig`], so it is never empty.
///
/// # Example
///
/// ```
/// use lab_schedule::scheduler::SlotSpace;
/// use lab_schedule::models::TimeSlot;
///
/// let space = SlotSpace::default();
/// assert_eq!(space.len(), 20);
/// assert_eq!(space.all_slots()[0], TimeSlot::new(9, 0, 0));
/// assert_eq!(space.all_slots()[1], TimeSlot::new(9, 0, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSpace {
    config: SlotSpaceConfig,
    slots: Vec<TimeSlot>,
}

impl SlotSpace {
    /// Builds the slot space, rejecting configurations with no slots.
    pub fn from_config(config: SlotSpaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let slots = enumerate(&config);
        Ok(Self { config, slots })
    }

    /// All slots in ascending `(week, day, period)` order.
    #[inline]
    pub fn all_slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Whether `slot` lies inside the configured universe.
    pub fn contains(&self, slot: &TimeSlot) -> bool {
        (self.config.first_week..=self.config.last_week).contains(&slot.week)
            && slot.day < self.config.days_per_week
            && slot.period < self.config.periods_per_day
    }

    /// Number of slots per room.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the space has no slots. Never true for a validated config.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The configuration this space was built from.
    pub fn config(&self) -> &SlotSpaceConfig {
        &self.config
    }
}

impl Default for SlotSpace {
    fn default() -> Self {
        let config = SlotSpaceConfig::default();
        let slots = enumerate(&config);
        Self { config, slots }
    }
}

fn enumerate(config: &SlotSpaceConfig) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    for week in config.first_week..=config.last_week {
        for day in 0..config.days_per_week {
            for period in 0..config.periods_per_day {
                slots.push(TimeSlot::new(week, day, period));
            }
        }
    }
    slots
}
