//! Wire records returned by the public booking endpoints.
//!
//! Only the fields the booking page reads are modelled; anything else in the
//! response is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_color() -> String {
    "#3B82F6".to_string()
}

fn default_true() -> bool {
    true
}

/// A tenant's public profile, from `GET /api/public/workspaces/{slug}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: Uuid,
    pub slug: String,
    pub business_name: String,
    /// IANA timezone the workspace's slots are expressed in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

/// A bookable service type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// A booking as echoed back by `POST .../bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: Uuid,
    #[serde(default)]
    pub service_type_id: Option<Uuid>,
    pub scheduled_at: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}
