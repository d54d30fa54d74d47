//! Booking request construction from the booking page's selection.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dst::{self, DstPolicy};
use crate::error::{BookingError, Result};
use crate::resolver::AvailabilityResolver;
use crate::time_of_day::TimeOfDay;

/// What the customer has picked so far. Any field may still be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingSelection {
    pub service_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeOfDay>,
}

/// Contact form fields as typed by the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

/// Body of `POST /api/public/workspaces/{slug}/bookings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub service_type_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub contact_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BookingRequest {
    /// Validate a selection and contact details and build the request.
    ///
    /// The chosen wall-clock time is interpreted in `timezone` (an IANA name,
    /// usually the workspace's) and converted to UTC under `dst_policy`.
    ///
    /// # Errors
    /// - `MissingSelection` if the service, date or time is unset
    /// - `MissingContactName` if the name is blank
    /// - `TimeNotAvailable` if no slot covers the chosen time
    /// - `InvalidTimezone` / `NonexistentLocalTime` from localization
    pub fn build(
        selection: &BookingSelection,
        contact: &ContactInfo,
        timezone: &str,
        resolver: &AvailabilityResolver,
        dst_policy: DstPolicy,
    ) -> Result<Self> {
        let (Some(service_type_id), Some(date), Some(time)) =
            (selection.service_id, selection.date, selection.time)
        else {
            return Err(BookingError::MissingSelection);
        };

        let contact_name = contact.name.trim();
        if contact_name.is_empty() {
            return Err(BookingError::MissingContactName);
        }

        if !resolver.is_available_at(date, time) {
            return Err(BookingError::TimeNotAvailable { date, time });
        }

        let tz = dst::parse_timezone(timezone)?;
        let scheduled_at = dst::localize(tz, date.and_time(time.to_naive_time()), dst_policy)?;

        Ok(Self {
            service_type_id,
            scheduled_at,
            contact_name: contact_name.to_string(),
            contact_email: non_blank(&contact.email),
            contact_phone: non_blank(&contact.phone),
            notes: non_blank(&contact.notes),
        })
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
