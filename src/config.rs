//! Slot space configuration.
//!
//! The slot universe is the Cartesian product of a week range, a number
//! of weekdays, and a number of periods per day. The default matches a
//! two-week lab block (weeks 9 and 10, Monday to Friday, morning and
//! afternoon): 20 slots per room.
//!
//! # File Format
//!
//! ```toml
//! [slots]
//! first_week = 9
//! last_week = 10
//! days_per_week = 5
//! periods_per_day = 2
//! ```
//!
//! Every key is optional and falls back to the default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Maximum weekdays a week can have (Monday to Friday).
pub const MAX_DAYS_PER_WEEK: u8 = 5;
/// Maximum periods a day can have (morning, afternoon).
pub const MAX_PERIODS_PER_DAY: u8 = 2;

/// Configuration error. Fatal: reported at startup, never per request.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config text is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// `first_week > last_week`.
    #[error("empty week range: first_week {first} > last_week {last}")]
    EmptyWeekRange {
        /// Configured first week.
        first: u32,
        /// Configured last week.
        last: u32,
    },
    /// `days_per_week` is zero or above [`MAX_DAYS_PER_WEEK`].
    #[error("days_per_week must be in 1..=5, got {0}")]
    InvalidDays(u8),
    /// `periods_per_day` is zero or above [`MAX_PERIODS_PER_DAY`].
    #[error("periods_per_day must be in 1..=2, got {0}")]
    InvalidPeriods(u8),
}

/// Shape of the slot universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotSpaceConfig {
    /// First teaching week (inclusive).
    pub first_week: u32,
    /// Last teaching week (inclusive).
    pub last_week: u32,
    /// Weekdays per week, counted from Monday.
    pub days_per_week: u8,
    /// Periods per day, counted from the morning.
    pub periods_per_day: u8,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    slots: SlotSpaceConfig,
}

impl Default for SlotSpaceConfig {
    fn default() -> Self {
        Self {
            first_week: 9,
            last_week: 10,
            days_per_week: MAX_DAYS_PER_WEEK,
            periods_per_day: MAX_PERIODS_PER_DAY,
        }
    }
}

impl SlotSpaceConfig {
    /// Creates a config covering `first_week..=last_week` with full weeks.
    pub fn weeks(first_week: u32, last_week: u32) -> Self {
        Self {
            first_week,
            last_week,
            ..Self::default()
        }
    }

    /// Sets the weekday count.
    pub fn with_days(mut self, days_per_week: u8) -> Self {
        self.days_per_week = days_per_week;
        self
    }

    /// Sets the period count.
    pub fn with_periods(mut self, periods_per_day: u8) -> Self {
        self.periods_per_day = periods_per_day;
        self
    }

    /// Parses the `[slots]` table from TOML text and validates it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.slots.validate()?;
        Ok(file.slots)
    }

    /// Reads and validates a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Checks that the config describes a non-empty slot universe.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_week > self.last_week {
            return Err(ConfigError::EmptyWeekRange {
                first: self.first_week,
                last: self.last_week,
            });
        }
        if self.days_per_week == 0 || self.days_per_week > MAX_DAYS_PER_WEEK {
            return Err(ConfigError::InvalidDays(self.days_per_week));
        }
        if self.periods_per_day == 0 || self.periods_per_day > MAX_PERIODS_PER_DAY {
            return Err(ConfigError::InvalidPeriods(self.periods_per_day));
        }
        Ok(())
    }
}
