//! Clock times as minute-of-day values.
//!
//! Slot boundaries and picker candidates are compared as integer minutes since
//! midnight. Parsing accepts the `HH:MM` form used by the booking page and the
//! `HH:MM:SS` form the backend emits for `time` columns; seconds are validated
//! and then dropped.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{BookingError, Result};

/// Number of minutes in a day. Also the exclusive upper bound of a [`TimeOfDay`].
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time with minute precision, `00:00` through `23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from an hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(BookingError::InvalidTimeFormat(format!(
                "{:02}:{:02}",
                hour, minute
            )));
        }
        Ok(Self((hour * 60 + minute) as u16))
    }

    /// Build from minutes since midnight (0-1439).
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(BookingError::InvalidTimeFormat(format!(
                "{} minutes past midnight",
                minutes
            )));
        }
        Ok(Self(minutes))
    }

    /// Callers guarantee `minutes < MINUTES_PER_DAY`.
    pub(crate) const fn from_minutes_unchecked(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Minutes since midnight.
    pub const fn minutes(self) -> u16 {
        self.0
    }

    pub const fn hour(self) -> u32 {
        (self.0 / 60) as u32
    }

    pub const fn minute(self) -> u32 {
        (self.0 % 60) as u32
    }

    /// Add minutes, returning `None` when the result would cross midnight.
    pub fn checked_add_minutes(self, minutes: u16) -> Option<Self> {
        let total = self.0.checked_add(minutes)?;
        (total < MINUTES_PER_DAY).then_some(Self(total))
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or_default()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || BookingError::InvalidTimeFormat(s.to_string());
        let parts: Vec<&str> = s.trim().split(':').collect();

        let (hour, minute) = match parts.as_slice() {
            [h, m] => (parse_field(h, 1..=2), parse_field(m, 2..=2)),
            [h, m, sec] => {
                let seconds = parse_field(sec, 2..=2).ok_or_else(invalid)?;
                if seconds > 59 {
                    return Err(invalid());
                }
                (parse_field(h, 1..=2), parse_field(m, 2..=2))
            }
            _ => return Err(invalid()),
        };

        match (hour, minute) {
            (Some(h), Some(m)) => Self::from_hm(h, m).map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

/// Parse an all-digit field whose length falls within `digits`.
fn parse_field(field: &str, digits: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !digits.contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        use chrono::Timelike;
        Self((t.hour() * 60 + t.minute()) as u16)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
