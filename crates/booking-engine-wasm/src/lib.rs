//! WASM bindings for booking-engine.
//!
//! Lets the booking page resolve time slots in the browser on every date
//! change, without a round trip. Slots cross the boundary as the same JSON the
//! availability endpoint returns, so the page can hand the response body
//! straight through. Inverted or empty windows are dropped, as on the page;
//! malformed slot times are an error.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p booking-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/booking-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/booking_engine_wasm.wasm
//! ```

use booking_engine::slot::weekday_index;
use booking_engine::{AvailabilityResolver, SlotPolicy, SlotRecord};
use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct WeekdayDto {
    day_of_week: u8,
    name: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn resolver_from_json(slots_json: &str) -> Result<AvailabilityResolver, String> {
    let records = SlotRecord::parse_list(slots_json).map_err(|e| e.to_string())?;
    AvailabilityResolver::from_records(&records, SlotPolicy::Lenient).map_err(|e| e.to_string())
}

/// An empty string means no date has been picked yet.
fn parse_date(date: &str) -> Result<Option<NaiveDate>, String> {
    if date.trim().is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(Some)
        .map_err(|e| format!("Invalid date '{}': {}", date, e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

/// Resolve the `HH:MM` times bookable on `date` as a JSON array string.
pub fn available_time_slots_json(slots_json: &str, date: &str) -> Result<String, String> {
    let resolver = resolver_from_json(slots_json)?;
    to_json(&resolver.available_time_slots(parse_date(date)?))
}

/// Whether `time` is bookable on `date`.
pub fn is_time_available_json(slots_json: &str, date: &str, time: &str) -> Result<bool, String> {
    let resolver = resolver_from_json(slots_json)?;
    let Some(date) = parse_date(date)? else {
        return Ok(false);
    };
    resolver
        .is_time_available(date, time)
        .map_err(|e| e.to_string())
}

/// Weekdays with availability as a JSON array of `{day_of_week, name}`.
pub fn available_weekdays_json(slots_json: &str) -> Result<String, String> {
    let resolver = resolver_from_json(slots_json)?;
    let days: Vec<WeekdayDto> = resolver
        .available_weekdays()
        .into_iter()
        .map(|day| WeekdayDto {
            day_of_week: weekday_index(day),
            name: day.to_string(),
        })
        .collect();
    to_json(&days)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Resolve the times bookable on a date.
///
/// # Arguments
/// - `slots_json` -- JSON array of `{day_of_week, start_time, end_time}` records
/// - `date` -- `YYYY-MM-DD`, or an empty string when no date is picked
///
/// Returns a JSON array of `HH:MM` strings in ascending order.
#[wasm_bindgen(js_name = "availableTimeSlots")]
pub fn available_time_slots(slots_json: &str, date: &str) -> Result<String, JsValue> {
    available_time_slots_json(slots_json, date).map_err(|e| JsValue::from_str(&e))
}

/// Check a single `HH:MM` time on a date. Malformed times are an error.
#[wasm_bindgen(js_name = "isTimeAvailable")]
pub fn is_time_available(slots_json: &str, date: &str, time: &str) -> Result<bool, JsValue> {
    is_time_available_json(slots_json, date, time).map_err(|e| JsValue::from_str(&e))
}

/// List weekdays that have at least one slot, Sunday first.
#[wasm_bindgen(js_name = "availableWeekdays")]
pub fn available_weekdays(slots_json: &str) -> Result<String, JsValue> {
    available_weekdays_json(slots_json).map_err(|e| JsValue::from_str(&e))
}
