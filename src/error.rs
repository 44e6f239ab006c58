//! API Errors

use thiserror::Error;

/// Failure of a request against the activities API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (connectivity, CORS, aborted)
    #[error("request failed: {0}")]
    Network(String),

    /// Non-2xx response; `detail` is the server's explanation when it sent one
    #[error("server rejected request ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    /// Body was not the JSON we expected
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
