//! Crate error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Top-level application error.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Price error: {0}")]
    Price(#[from] PriceError),

    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// HTTP-layer errors, shared by the price source and the display.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The display answered with something other than its `OK` acknowledgement.
    #[error("Display rejected update: {0}")]
    Rejected(String),

    #[error("GraphQL error: {0}")]
    GraphQl(String),
}

/// Errors turning a price response into a price series.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("No homes found for this account")]
    NoHomes,

    #[error("Home has no active subscription")]
    NoSubscription,
}

/// Errors while selecting the render window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// A price starts exactly at the reference time, so it is neither
    /// historic nor upcoming. Hour-aligned source data never lands here.
    #[error("Price starting at {starts_at} can't be placed relative to {now}")]
    AmbiguousTimestamp {
        starts_at: DateTime<Utc>,
        now: DateTime<Utc>,
    },
}
