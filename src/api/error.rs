use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by one API round trip.
///
/// Screens never inspect these beyond existence; they display a short
/// human-readable message and move on. The variants exist so logs carry
/// enough to diagnose a failing call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{method} {url} returned {status}")]
    Status {
        method: String,
        url: String,
        status: StatusCode,
    },

    /// The response body did not match the expected envelope.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// An authenticated call was attempted without a session token.
    #[error("not signed in")]
    NotAuthenticated,
}
