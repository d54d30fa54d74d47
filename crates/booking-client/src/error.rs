//! Error types for booking API calls.

use booking_engine::BookingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status. `detail` is the backend's
    /// own message when it sent one.
    #[error("{detail} (HTTP {status})")]
    Api { status: u16, detail: String },

    #[error(transparent)]
    Booking(#[from] BookingError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
