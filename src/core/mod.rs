//! Browser-side services for the explorer.
//!
//! - [`S3ListingService`] - `ListObjectsV2` over the Fetch API
//! - [`error`] - Transport error types

pub mod error;
mod s3;

pub use s3::S3ListingService;
