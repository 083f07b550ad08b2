//! Transport errors for browser HTTP requests.
//!
//! - [`FetchError`] - Failures of the Fetch API before a response body is read
//!
//! Listing-level failures use [`bucketview_core::ListingError`]; a
//! [`FetchError`] converts into its `Network` variant at the service boundary.

use std::fmt;

use bucketview_core::ListingError;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, offline)
    NetworkError(String),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<FetchError> for ListingError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NetworkError(msg) => ListingError::Network(msg),
            other => ListingError::Network(other.to_string()),
        }
    }
}
