use thiserror::Error;

/// Errors surfaced by the backend API client.
///
/// The client performs no retry, backoff, or local recovery; every
/// failure goes straight to the caller, which decides what to show.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect refused, DNS, closed socket).
    #[error("request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout.
    #[error("request to '{endpoint}' timed out after {seconds}s")]
    Timeout {
        endpoint: &'static str,
        seconds: u64,
    },

    /// Backend answered with a non-success status.
    #[error("'{endpoint}' returned status {status}")]
    Status {
        endpoint: &'static str,
        status: u16,
    },

    /// Response body did not match the expected shape.
    #[error("could not decode '{endpoint}' response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
