//! DST transition policies for localizing a booked start time.
//!
//! A customer picks a wall-clock date and time in the workspace's timezone.
//! During a spring-forward gap that local time does not exist; the policy
//! decides what happens. Ambiguous local times (fall-back overlap) always
//! resolve to the earlier instant.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{BookingError, Result};

/// Longest DST gap searched when resolving a nonexistent local time.
const MAX_GAP_MINUTES: i64 = 180;

/// Policy for local times that fall inside a DST gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DstPolicy {
    /// Reject times in the DST gap (e.g., 2:30 AM during spring forward)
    Skip,
    /// Move to the first valid minute after the gap
    ShiftForward,
    /// Keep the wall clock reading and apply the UTC offset in effect just
    /// before the gap, so 02:30 lands at 03:30 after a one-hour jump
    #[default]
    WallClock,
}

/// Parse an IANA timezone name.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| BookingError::InvalidTimezone(name.to_string()))
}

/// Convert a local date-time in `tz` to UTC under `policy`.
pub fn localize(tz: Tz, local: NaiveDateTime, policy: DstPolicy) -> Result<DateTime<Utc>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            let nonexistent = || BookingError::NonexistentLocalTime {
                local: local.format("%Y-%m-%d %H:%M").to_string(),
                timezone: tz.name().to_string(),
            };
            match policy {
                DstPolicy::Skip => Err(nonexistent()),
                DstPolicy::ShiftForward => (1..=MAX_GAP_MINUTES)
                    .find_map(|m| tz.from_local_datetime(&(local + Duration::minutes(m))).earliest())
                    .map(|dt| dt.with_timezone(&Utc))
                    .ok_or_else(nonexistent),
                DstPolicy::WallClock => (1..=MAX_GAP_MINUTES)
                    .find_map(|m| tz.from_local_datetime(&(local - Duration::minutes(m))).latest())
                    .map(|before| {
                        let offset = before.offset().fix().local_minus_utc();
                        (local - Duration::seconds(i64::from(offset))).and_utc()
                    })
                    .ok_or_else(nonexistent),
            }
        }
    }
}
