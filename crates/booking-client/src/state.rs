//! The outcome of loading a service's availability.
//!
//! A failed fetch is not the same as a service with no slots, even though both
//! offer zero times. Keeping them apart lets the booking page show an error
//! instead of "No times available for this date".

use booking_engine::{AvailabilityResolver, BookingError};
use chrono::NaiveDate;

use crate::error::ClientError;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum AvailabilityState {
    /// No service selected yet.
    #[default]
    NotLoaded,
    Loaded(AvailabilityResolver),
    /// The fetch failed; the message is suitable for display.
    Failed(String),
}

impl AvailabilityState {
    pub fn from_result(result: Result<AvailabilityResolver, ClientError>) -> Self {
        match result {
            Ok(resolver) => Self::Loaded(resolver),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load availability");
                Self::Failed(err.to_string())
            }
        }
    }

    pub fn resolver(&self) -> Option<&AvailabilityResolver> {
        match self {
            Self::Loaded(resolver) => Some(resolver),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Bookable times on `date`; empty unless loaded.
    pub fn available_time_slots(&self, date: Option<NaiveDate>) -> Vec<String> {
        self.resolver()
            .map(|r| r.available_time_slots(date))
            .unwrap_or_default()
    }

    /// Whether `time` is bookable on `date`; `false` unless loaded. A malformed
    /// time is an error in every state.
    pub fn is_time_available(&self, date: NaiveDate, time: &str) -> Result<bool, BookingError> {
        match self.resolver() {
            Some(resolver) => resolver.is_time_available(date, time),
            None => time.parse::<booking_engine::TimeOfDay>().map(|_| false),
        }
    }
}
