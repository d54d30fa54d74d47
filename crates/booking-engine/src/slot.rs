//! Recurring weekly availability slots.
//!
//! [`SlotRecord`] is the JSON shape returned by the availability endpoint,
//! with `day_of_week` counted from Sunday (0) and times as strings.
//! [`AvailabilitySlot`] is the validated form the resolver works with: the
//! weekday is a `chrono::Weekday` and the window `[start, end)` is non-empty.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BookingError, Result};
use crate::time_of_day::TimeOfDay;

/// Weekdays in the order the booking page lists them, Sunday first.
pub const WEEK_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Map a Sunday-based day index (0=Sunday..6=Saturday) to a `Weekday`.
pub fn weekday_from_index(day_of_week: i64) -> Result<Weekday> {
    usize::try_from(day_of_week)
        .ok()
        .and_then(|i| WEEK_FROM_SUNDAY.get(i).copied())
        .ok_or(BookingError::InvalidWeekday(day_of_week))
}

/// Sunday-based day index of a `Weekday`.
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// One recurring weekly window `[start, end)` on a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AvailabilitySlot {
    day: Weekday,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl AvailabilitySlot {
    /// Create a slot. Fails with [`BookingError::EmptyOrInvertedSlot`] unless
    /// `start < end`.
    pub fn new(day: Weekday, start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(BookingError::EmptyOrInvertedSlot { start, end });
        }
        Ok(Self { day, start, end })
    }

    /// Create a slot from its wire representation.
    pub fn parse(day_of_week: i64, start: &str, end: &str) -> Result<Self> {
        Self::new(weekday_from_index(day_of_week)?, start.parse()?, end.parse()?)
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Half-open containment: `start <= time < end`.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.start <= time && time < self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

/// An availability slot as served by `GET .../services/{id}/availability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type_id: Option<Uuid>,
    /// 0=Sunday .. 6=Saturday.
    pub day_of_week: i64,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SlotRecord {
    /// Parse a JSON array of slot records.
    pub fn parse_list(json: &str) -> Result<Vec<SlotRecord>> {
        serde_json::from_str(json).map_err(|e| BookingError::InvalidSlotJson(e.to_string()))
    }
}

impl TryFrom<&SlotRecord> for AvailabilitySlot {
    type Error = BookingError;

    fn try_from(record: &SlotRecord) -> Result<Self> {
        AvailabilitySlot::parse(record.day_of_week, &record.start_time, &record.end_time)
    }
}

impl From<&AvailabilitySlot> for SlotRecord {
    fn from(slot: &AvailabilitySlot) -> Self {
        Self {
            id: None,
            service_type_id: None,
            day_of_week: i64::from(weekday_index(slot.day)),
            start_time: slot.start.to_string(),
            end_time: slot.end.to_string(),
            created_at: None,
        }
    }
}

/// How records that fail validation are handled during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlotPolicy {
    /// Fail on the first invalid record.
    Strict,
    /// Drop inverted or empty windows with a warning, so they contribute no
    /// bookable time. Malformed times and weekdays still fail.
    #[default]
    Lenient,
}

/// Validate wire records into slots under the given policy.
pub fn slots_from_records(
    records: &[SlotRecord],
    policy: SlotPolicy,
) -> Result<Vec<AvailabilitySlot>> {
    let mut slots = Vec::with_capacity(records.len());
    for record in records {
        match AvailabilitySlot::try_from(record) {
            Ok(slot) => slots.push(slot),
            Err(err @ BookingError::EmptyOrInvertedSlot { .. })
                if policy == SlotPolicy::Lenient =>
            {
                tracing::warn!(
                    slot_id = ?record.id,
                    day_of_week = record.day_of_week,
                    start_time = %record.start_time,
                    end_time = %record.end_time,
                    error = %err,
                    "dropping empty or inverted availability slot"
                );
            }
            Err(err) => return Err(err),
        }
    }
    Ok(slots)
}
