//! HTTP client layer: one low-level client per collaborator.

pub mod awtrix;
pub mod tibber;

pub use awtrix::AwtrixHttp;
pub use tibber::TibberHttp;

use crate::error::HttpError;
use std::time::Duration;

/// Per-request timeout for both collaborators.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn build_client() -> Result<reqwest::Client, HttpError> {
    Ok(reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .pool_max_idle_per_host(2)
        .build()?)
}

/// Maps a non-success status and its body to an error.
pub(crate) fn status_error(status: u16, body: String) -> HttpError {
    match status {
        401 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body),
        429 => HttpError::RateLimited,
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(status_error(401, String::new()), HttpError::Unauthorized));
        assert!(matches!(status_error(404, "x".into()), HttpError::NotFound(b) if b == "x"));
        assert!(matches!(status_error(429, String::new()), HttpError::RateLimited));
        assert!(matches!(status_error(422, "bad".into()), HttpError::BadRequest(b) if b == "bad"));
        assert!(matches!(
            status_error(503, "down".into()),
            HttpError::ServerError { status: 503, .. }
        ));
    }
}
