//! Error types for booking-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

use crate::time_of_day::TimeOfDay;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Invalid time format: '{0}' (expected HH:MM)")]
    InvalidTimeFormat(String),

    #[error("Invalid day of week: {0} (expected 0=Sunday through 6=Saturday)")]
    InvalidWeekday(i64),

    #[error("Empty or inverted availability slot: {start}-{end}")]
    EmptyOrInvertedSlot { start: TimeOfDay, end: TimeOfDay },

    #[error("Invalid slot JSON: {0}")]
    InvalidSlotJson(String),

    #[error("Invalid time grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Local time {local} does not exist in {timezone}")]
    NonexistentLocalTime { local: String, timezone: String },

    #[error("Please select a service, date, and time")]
    MissingSelection,

    #[error("Contact name is required")]
    MissingContactName,

    #[error("{time} is not available on {date}")]
    TimeNotAvailable { date: NaiveDate, time: TimeOfDay },
}

pub type Result<T> = std::result::Result<T, BookingError>;
