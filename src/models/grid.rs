//! Weekly teaching grid.
//!
//! The timetable runs Monday through Friday. Each day has eight
//! 55-minute teaching slots starting at 07:00, with a fixed break
//! from 10:40 to 11:10. Slots are keyed by an integer start hour
//! (7..=14); hours 10 and 11 are adjacent across the break.
//!
//! Overlap is decided on `(day, start_hour)` equality only; the grid
//! has no sub-hour overlap cases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Teaching weekday. Weekends are never scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(alias = "Lunes")]
    Monday,
    #[serde(alias = "Martes")]
    Tuesday,
    #[serde(alias = "Miercoles", alias = "Miércoles")]
    Wednesday,
    #[serde(alias = "Jueves")]
    Thursday,
    #[serde(alias = "Viernes")]
    Friday,
}

impl Weekday {
    /// All teaching days in calendar order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// English day name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a day label is not a teaching weekday.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a teaching weekday: '{0}'")]
pub struct ParseWeekdayError(pub String);

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    /// Accepts English and Spanish day names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" | "lunes" => Ok(Weekday::Monday),
            "tuesday" | "tue" | "martes" => Ok(Weekday::Tuesday),
            "wednesday" | "wed" | "miercoles" | "miércoles" => Ok(Weekday::Wednesday),
            "thursday" | "thu" | "jueves" => Ok(Weekday::Thursday),
            "friday" | "fri" | "viernes" => Ok(Weekday::Friday),
            _ => Err(ParseWeekdayError(s.to_string())),
        }
    }
}

/// One teaching slot of the daily grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    /// Integer start hour used as the overlap key.
    pub start_hour: u8,
    /// Wall-clock range.
    pub label: &'static str,
}

/// Label of the mandatory mid-morning break.
pub const BREAK_LABEL: &str = "10:40 - 11:10";

/// The eight teaching slots of a day, in order.
pub const DAILY_GRID: [TimeSlot; 8] = [
    TimeSlot { start_hour: 7, label: "07:00 - 07:55" },
    TimeSlot { start_hour: 8, label: "07:55 - 08:50" },
    TimeSlot { start_hour: 9, label: "08:50 - 09:45" },
    TimeSlot { start_hour: 10, label: "09:45 - 10:40" },
    TimeSlot { start_hour: 11, label: "11:10 - 12:05" },
    TimeSlot { start_hour: 12, label: "12:05 - 13:00" },
    TimeSlot { start_hour: 13, label: "13:00 - 13:55" },
    TimeSlot { start_hour: 14, label: "14:00 - 14:55" },
];

/// Whether `hour` is the start hour of a teaching slot.
pub fn is_valid_start_hour(hour: u8) -> bool {
    slot_index(hour).is_some()
}

/// Position of the slot starting at `hour` within the day (0..8).
pub fn slot_index(hour: u8) -> Option<usize> {
    DAILY_GRID.iter().position(|s| s.start_hour == hour)
}

/// The slot starting at `hour`, if any.
pub fn slot_for_hour(hour: u8) -> Option<&'static TimeSlot> {
    DAILY_GRID.iter().find(|s| s.start_hour == hour)
}
