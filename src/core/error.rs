//! Custom error types for the navigator.
//!
//! - [`FetchError`] - Transport failures for listing and source requests
//! - [`ListingError`] - Listing bodies that do not have the expected shape

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection reset, etc.)
    #[error("Network error: {0}")]
    Network(String),
    /// Response status other than 200 or 304; `body` is the raw response text
    #[error("HTTP error: {status}")]
    Http { status: u16, body: String },
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Request aborted after the configured timeout
    #[error("Request timed out")]
    Timeout,
    /// Response body is not the JSON shape the caller expected
    #[error("Decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Text to show in place of the listing.
    ///
    /// HTTP failures show the server's own response body. A timeout has no
    /// body and shows `false`.
    pub fn failure_text(&self) -> String {
        match self {
            Self::Http { body, .. } => body.clone(),
            Self::Timeout => "false".to_string(),
            other => other.to_string(),
        }
    }
}

/// Listing body rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// Body parsed but is not a JSON array
    #[error("listing is not an array")]
    NotAnArray,
    /// Array has no directory header
    #[error("listing is empty")]
    Empty,
    /// Element 0 is not a `{path}` record
    #[error("listing header has no directory path")]
    MissingDirectoryInfo,
    /// Body is not valid JSON or an entry has the wrong field types
    #[error("invalid listing JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ListingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
