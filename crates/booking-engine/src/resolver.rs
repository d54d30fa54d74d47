//! Availability resolution: which start times can be booked on a given date.
//!
//! A time is bookable on a date when at least one slot for that date's weekday
//! contains it (`start <= time < end`). Slots on the same day are treated as a
//! union and never merged; overlapping slots simply match the same time twice.
//! A weekday with no slots has nothing bookable.
//!
//! [`AvailabilityResolver::available_times`] walks the [`TimeGrid`] and keeps
//! the candidates that pass that test, so its output is always an ascending
//! subsequence of the grid. Nothing is cached between calls.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::Result;
use crate::grid::TimeGrid;
use crate::slot::{slots_from_records, AvailabilitySlot, SlotPolicy, SlotRecord, WEEK_FROM_SUNDAY};
use crate::time_of_day::TimeOfDay;

/// The weekly availability of one service, paired with the grid the picker
/// offers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityResolver {
    slots: Vec<AvailabilitySlot>,
    grid: TimeGrid,
}

impl AvailabilityResolver {
    /// Resolver over `slots` with the default 08:00-19:30 half-hour grid.
    pub fn new(slots: Vec<AvailabilitySlot>) -> Self {
        Self {
            slots,
            grid: TimeGrid::default(),
        }
    }

    /// Validate wire records and build a resolver from them.
    pub fn from_records(records: &[SlotRecord], policy: SlotPolicy) -> Result<Self> {
        Ok(Self::new(slots_from_records(records, policy)?))
    }

    /// Replace the candidate grid.
    pub fn with_grid(mut self, grid: TimeGrid) -> Self {
        self.grid = grid;
        self
    }

    pub fn slots(&self) -> &[AvailabilitySlot] {
        &self.slots
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Slots that recur on `weekday`.
    pub fn slots_on(&self, weekday: Weekday) -> impl Iterator<Item = &AvailabilitySlot> {
        self.slots.iter().filter(move |s| s.day() == weekday)
    }

    /// Whether `time` on `date` falls inside any slot for that weekday.
    ///
    /// Answers for any time of day, not only grid candidates.
    pub fn is_available_at(&self, date: NaiveDate, time: TimeOfDay) -> bool {
        self.slots_on(date.weekday()).any(|slot| slot.contains(time))
    }

    /// Like [`is_available_at`](Self::is_available_at), taking the time as an
    /// `HH:MM` string.
    ///
    /// # Errors
    /// Returns `BookingError::InvalidTimeFormat` if `time` does not parse, even
    /// when the weekday has no slots.
    pub fn is_time_available(&self, date: NaiveDate, time: &str) -> Result<bool> {
        let time: TimeOfDay = time.parse()?;
        Ok(self.is_available_at(date, time))
    }

    /// Bookable grid candidates on `date`, ascending. `None` (no date picked
    /// yet) yields nothing.
    pub fn available_times(&self, date: Option<NaiveDate>) -> Vec<TimeOfDay> {
        let Some(date) = date else {
            return Vec::new();
        };

        let day_slots: Vec<&AvailabilitySlot> = self.slots_on(date.weekday()).collect();
        if day_slots.is_empty() {
            return Vec::new();
        }

        let times: Vec<TimeOfDay> = self
            .grid
            .times()
            .filter(|t| day_slots.iter().any(|slot| slot.contains(*t)))
            .collect();

        tracing::debug!(
            %date,
            slots = day_slots.len(),
            available = times.len(),
            "resolved available times"
        );
        times
    }

    /// [`available_times`](Self::available_times) formatted as `HH:MM` strings.
    pub fn available_time_slots(&self, date: Option<NaiveDate>) -> Vec<String> {
        self.available_times(date)
            .into_iter()
            .map(|t| t.to_string())
            .collect()
    }

    pub fn has_availability_on(&self, weekday: Weekday) -> bool {
        self.slots_on(weekday).next().is_some()
    }

    /// Weekdays with at least one slot, Sunday first.
    pub fn available_weekdays(&self) -> Vec<Weekday> {
        WEEK_FROM_SUNDAY
            .into_iter()
            .filter(|day| self.has_availability_on(*day))
            .collect()
    }

    /// Slots with bookable minutes the grid never offers: they start before the
    /// first candidate, end after the grid's bound, or contain no candidate.
    pub fn hidden_by_grid(&self) -> Vec<AvailabilitySlot> {
        self.slots
            .iter()
            .filter(|slot| self.grid.hides(slot))
            .copied()
            .collect()
    }
}
