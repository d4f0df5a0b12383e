use thiserror::Error;

/// Failure of a single backend request.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request did not finish within the per-request budget
    #[error("Request timeout after {timeout_ms}ms: {url}")]
    Timeout { url: String, timeout_ms: u64 },

    /// The backend answered with a non-success status
    #[error("HTTP error {status}: {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Connection or transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The body was not the JSON shape we expected
    #[error("Failed to parse JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL cannot be joined with an endpoint path
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }
}
