//! Error types for configuration and bucket listing.
//!
//! - [`ConfigError`] - Invalid or missing host-provided configuration
//! - [`ListingError`] - A listing request that did not produce a page

use thiserror::Error;

/// Configuration errors raised while reading host-provided settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No bucket identifier was provided.
    #[error("bucket name is not configured (set BUCKET_NAME)")]
    MissingBucket,
    /// Page size is not a number in `1..=1000`.
    #[error("invalid page size '{0}' (expected 1-1000)")]
    InvalidPageSize(String),
}

/// Listing request failures.
///
/// Every variant means the same thing to the navigator: the request did not
/// produce a page, so the currently displayed page stays in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// Transport failure before any HTTP response (CORS, DNS, offline).
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status without a decodable error document.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Error document returned by the storage service.
    #[error("{code}: {message} (HTTP {status})")]
    Service {
        status: u16,
        code: String,
        message: String,
    },
    /// Success status, but the body is not a listing document.
    #[error("malformed listing response: {0}")]
    MalformedResponse(String),
}
