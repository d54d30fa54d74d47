//! Candidate start times offered by the booking page's time picker.
//!
//! The default grid is every 30 minutes from 08:00 through 19:30. Slots that
//! open before 08:00 or close after 20:00 are still bookable as far as the
//! resolver is concerned, but the picker never offers those times; see
//! [`AvailabilityResolver::hidden_by_grid`](crate::AvailabilityResolver::hidden_by_grid).

use crate::error::{BookingError, Result};
use crate::slot::AvailabilitySlot;
use crate::time_of_day::{TimeOfDay, MINUTES_PER_DAY};

const DEFAULT_FIRST_MINUTE: u16 = 8 * 60;
const DEFAULT_END_MINUTE: u16 = 20 * 60;
const DEFAULT_STEP_MINUTES: u16 = 30;

/// An evenly spaced sequence of start times `first, first + step, ...` strictly
/// below `end_minute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeGrid {
    first: TimeOfDay,
    end_minute: u16,
    step_minutes: u16,
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self {
            first: TimeOfDay::from_minutes_unchecked(DEFAULT_FIRST_MINUTE),
            end_minute: DEFAULT_END_MINUTE,
            step_minutes: DEFAULT_STEP_MINUTES,
        }
    }
}

impl TimeGrid {
    /// Build a grid. `end_minute` is exclusive and may be 1440 (midnight at the
    /// end of the day).
    pub fn new(first: TimeOfDay, end_minute: u16, step_minutes: u16) -> Result<Self> {
        if step_minutes == 0 {
            return Err(BookingError::InvalidGrid("step must be positive".to_string()));
        }
        if end_minute > MINUTES_PER_DAY {
            return Err(BookingError::InvalidGrid(format!(
                "end bound {} is past midnight",
                end_minute
            )));
        }
        if first.minutes() >= end_minute {
            return Err(BookingError::InvalidGrid(format!(
                "first time {} is not before the end bound",
                first
            )));
        }
        Ok(Self {
            first,
            end_minute,
            step_minutes,
        })
    }

    /// The smallest grid with the given step that offers every step-aligned
    /// start time inside `slots`. Steps are aligned to midnight. With no slots
    /// the default grid is returned.
    pub fn covering(slots: &[AvailabilitySlot], step_minutes: u16) -> Result<Self> {
        if step_minutes == 0 {
            return Err(BookingError::InvalidGrid("step must be positive".to_string()));
        }
        let (Some(earliest), Some(latest)) = (
            slots.iter().map(|s| s.start().minutes()).min(),
            slots.iter().map(|s| s.end().minutes()).max(),
        ) else {
            return Ok(Self::default());
        };
        let first = TimeOfDay::from_minutes(earliest / step_minutes * step_minutes)?;
        Self::new(first, latest, step_minutes)
    }

    pub fn first(&self) -> TimeOfDay {
        self.first
    }

    pub fn end_minute(&self) -> u16 {
        self.end_minute
    }

    pub fn step_minutes(&self) -> u16 {
        self.step_minutes
    }

    /// All candidate times in ascending order.
    pub fn times(&self) -> impl Iterator<Item = TimeOfDay> {
        let (end_minute, step) = (self.end_minute, self.step_minutes);
        std::iter::successors(Some(self.first), move |t| t.checked_add_minutes(step))
            .take_while(move |t| t.minutes() < end_minute)
    }

    pub fn len(&self) -> usize {
        let span = usize::from(self.end_minute - self.first.minutes());
        span.div_ceil(usize::from(self.step_minutes))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `time` is one of the grid's candidates.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        let m = time.minutes();
        m >= self.first.minutes()
            && m < self.end_minute
            && (m - self.first.minutes()) % self.step_minutes == 0
    }

    /// Whether some minute of `slot` falls outside the grid's span, or the slot
    /// contains no candidate at all.
    pub fn hides(&self, slot: &AvailabilitySlot) -> bool {
        slot.start() < self.first
            || slot.end().minutes() > self.end_minute
            || !self.times().any(|t| slot.contains(t))
    }
}
