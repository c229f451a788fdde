//! API error type
//!
//! Every failure the client can produce is an [`ApiError`]. Variants keep the
//! request URL and the raw data needed to both match on the failure and show
//! it to a user.

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Errors returned by [`CloudClient`](super::client::CloudClient) and the
/// underlying HTTP executor
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read
    #[error("HTTP request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The call did not complete within the configured timeout
    #[error("HTTP request to '{url}' timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    /// The server answered with a status outside 200..300
    ///
    /// `body` is the response text, verbatim for UTF-8 bodies; invalid
    /// UTF-8 sequences are replaced with U+FFFD.
    #[error("HTTP request to '{url}' failed with code {}: {body}", .status.as_u16())]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    /// The response was successful but its body did not match the expected shape
    #[error("failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// One entry of a list response carried an error instead of a value
    ///
    /// `payload` is the entry's error slot as raw JSON text.
    #[error("item {index} of '{url}' returned an error: {payload}")]
    Item {
        url: String,
        index: usize,
        payload: String,
    },

    /// The client was given an unusable token or endpoint
    #[error("invalid client configuration: {0}")]
    Config(String),
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// URL of the call that failed, if the failure happened on the wire
    pub fn url(&self) -> Option<&str> {
        match self {
            ApiError::Transport { url, .. }
            | ApiError::Timeout { url, .. }
            | ApiError::Status { url, .. }
            | ApiError::Decode { url, .. }
            | ApiError::Item { url, .. } => Some(url),
            ApiError::Config(_) => None,
        }
    }

    /// HTTP status of a rejected call
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the server rejected the call with a non-2xx status
    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    /// Returns true for 404 responses
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns true for 401 and 403 responses
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }

    /// Returns true if the call exceeded its timeout
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout { .. })
    }

    /// Returns true if a 2xx body could not be decoded
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode { .. })
    }

    /// Returns true if a list entry carried an error
    #[must_use]
    pub fn is_item(&self) -> bool {
        matches!(self, ApiError::Item { .. })
    }
}
