//! # booking-client
//!
//! Async client for the CareOps public booking API, the REST boundary behind
//! a workspace's booking page.
//!
//! ## Modules
//!
//! - [`client`] — [`BookingClient`]: workspace, services, availability, bookings
//! - [`config`] — Base URL and timeout, with environment overrides
//! - [`models`] — Wire records for workspaces, services and created bookings
//! - [`state`] — [`AvailabilityState`]: the outcome of loading a service's slots
//! - [`error`] — Error types

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod state;

pub use client::BookingClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use models::{BookingRecord, Service, Workspace};
pub use state::AvailabilityState;
