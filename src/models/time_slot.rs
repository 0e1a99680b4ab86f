//! Time slot model.
//!
//! A slot is one half-day block in the teaching calendar: a week number,
//! a weekday (0 = Monday .. 4 = Friday) and a period (0 = morning,
//! 1 = afternoon).
//!
//! # Ordering
//! Slots order lexicographically by `(week, day, period)`. The derived
//! `Ord` relies on the field declaration order, so do not reorder fields.
//!
//! # Text Format
//! A slot is written `week,day,period` (e.g. `9,0,1`). A list of slots
//! joins entries with `;`. The empty string is the empty list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const WEEKDAY_NAMES: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];
const PERIOD_NAMES: [&str; 2] = ["AM", "PM"];

/// A `(week, day, period)` unit of schedulable time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeSlot {
    /// Teaching week number (e.g. 9 or 10).
    pub week: u32,
    /// Weekday index, 0 = Monday.
    pub day: u8,
    /// Period index, 0 = morning, 1 = afternoon.
    pub period: u8,
}

/// Error returned when slot text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseSlotError {
    /// The entry did not have exactly three comma-separated fields.
    #[error("expected `week,day,period`, got `{0}`")]
    WrongArity(String),
    /// A field was not a non-negative integer.
    #[error("invalid {field} in slot `{input}`")]
    InvalidField {
        /// Which field failed (`week`, `day` or `period`).
        field: &'static str,
        /// The offending slot text.
        input: String,
    },
}

impl TimeSlot {
    /// Creates a slot.
    pub fn new(week: u32, day: u8, period: u8) -> Self {
        Self { week, day, period }
    }

    /// Whether this is a morning slot.
    #[inline]
    pub fn is_morning(&self) -> bool {
        self.period == 0
    }

    /// Parses a `;`-separated slot list.
    ///
    /// Whitespace around entries is ignored and empty entries are skipped,
    /// so `""` and `"9,0,0;"` are both accepted.
    pub fn parse_list(input: &str) -> Result<Vec<TimeSlot>, ParseSlotError> {
        input
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }

    /// Formats slots as a `;`-separated list (inverse of [`parse_list`](Self::parse_list)).
    pub fn format_list<'a>(slots: impl IntoIterator<Item = &'a TimeSlot>) -> String {
        slots
            .into_iter()
            .map(|s| format!("{},{},{}", s.week, s.day, s.period))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl FromStr for TimeSlot {
    type Err = ParseSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [week, day, period] = parts.as_slice() else {
            return Err(ParseSlotError::WrongArity(s.to_string()));
        };

        let field_err = |field| ParseSlotError::InvalidField {
            field,
            input: s.to_string(),
        };

        Ok(Self {
            week: week.parse().map_err(|_| field_err("week"))?,
            day: day.parse().map_err(|_| field_err("day"))?,
            period: period.parse().map_err(|_| field_err("period"))?,
        })
    }
}

impl fmt::Display for TimeSlot {
    /// Renders `Week 9 Mon AM`. Out-of-range indices fall back to numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week {} ", self.week)?;
        match WEEKDAY_NAMES.get(self.day as usize) {
            Some(name) => write!(f, "{name} ")?,
            None => write!(f, "Day{} ", self.day)?,
        }
        match PERIOD_NAMES.get(self.period as usize) {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "P{}", self.period),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_week_then_day_then_period() {
        let a = TimeSlot::new(9, 4, 1);
        let b = TimeSlot::new(10, 0, 0);
        let c = TimeSlot::new(9, 0, 1);
        let d = TimeSlot::new(9, 1, 0);
        assert!(a < b);
        assert!(c < d);
        assert!(TimeSlot::new(9, 0, 0) < c);

        let mut slots = vec![b, a, d, c];
        slots.sort();
        assert_eq!(slots, vec![c, d, a, b]);
    }

    #[test]
    fn test_parse_single() {
        let slot: TimeSlot = "9,2,1".parse().unwrap();
        assert_eq!(slot, TimeSlot::new(9, 2, 1));
        assert!(!slot.is_morning());

        let spaced: TimeSlot = " 10 , 0 , 0 ".parse().unwrap();
        assert_eq!(spaced, TimeSlot::new(10, 0, 0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "9,0".parse::<TimeSlot>(),
            Err(ParseSlotError::WrongArity("9,0".into()))
        );
        assert!(matches!(
            "9,x,0".parse::<TimeSlot>(),
            Err(ParseSlotError::InvalidField { field: "day", .. })
        ));
        assert!(matches!(
            "-1,0,0".parse::<TimeSlot>(),
            Err(ParseSlotError::InvalidField { field: "week", .. })
        ));
    }

    #[test]
    fn test_parse_list_skips_empty_entries() {
        assert!(TimeSlot::parse_list("").unwrap().is_empty());
        let slots = TimeSlot::parse_list("9,0,0; 9,1,0;").unwrap();
        assert_eq!(slots, vec![TimeSlot::new(9, 0, 0), TimeSlot::new(9, 1, 0)]);
        assert!(TimeSlot::parse_list("9,0,0;oops").is_err());
    }

    #[test]
    fn test_format_list() {
        let slots = [TimeSlot::new(9, 0, 0), TimeSlot::new(10, 4, 1)];
        let text = TimeSlot::format_list(&slots);
        assert_eq!(text, "9,0,0;10,4,1");
        assert_eq!(TimeSlot::parse_list(&text).unwrap(), slots);
        assert_eq!(TimeSlot::format_list(std::iter::empty()), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeSlot::new(9, 0, 0).to_string(), "Week 9 Mon AM");
        assert_eq!(TimeSlot::new(10, 4, 1).to_string(), "Week 10 Fri PM");
        assert_eq!(TimeSlot::new(1, 6, 3).to_string(), "Week 1 Day6 P3");
    }

    #[test]
    fn test_serde_roundtrip() {
        let slot = TimeSlot::new(9, 3, 1);
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(json, r#"{"week":9,"day":3,"period":1}"#);
        let back: TimeSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
    }
}
