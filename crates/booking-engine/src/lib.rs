//! # booking-engine
//!
//! Weekly availability resolution for CareOps public booking pages.
//!
//! A service is bookable inside recurring weekly windows ("slots"). Given those
//! slots and a calendar date chosen by the customer, the engine answers which
//! half-hour start times can be offered, and turns a final selection into a
//! booking request anchored in the workspace's timezone.
//!
//! ## Modules
//!
//! - [`time_of_day`] — `HH:MM` clock times as minute-of-day values
//! - [`slot`] — Typed availability slots and their JSON wire records
//! - [`grid`] — The candidate start times offered by the time picker
//! - [`resolver`] — Date + slots → bookable start times
//! - [`dst`] — DST gap policies for localizing a chosen start time
//! - [`booking`] — Booking request construction from a user selection
//! - [`error`] — Error types

pub mod booking;
pub mod dst;
pub mod error;
pub mod grid;
pub mod resolver;
pub mod slot;
pub mod time_of_day;

pub use booking::{BookingRequest, BookingSelection, ContactInfo};
pub use dst::DstPolicy;
pub use error::BookingError;
pub use grid::TimeGrid;
pub use resolver::AvailabilityResolver;
pub use slot::{AvailabilitySlot, SlotPolicy, SlotRecord};
pub use time_of_day::TimeOfDay;
