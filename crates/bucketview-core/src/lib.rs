//! Platform-independent core of the bucket explorer.
//!
//! - [`Navigator`] - Folder/search/pagination state machine
//! - [`ListRequest`], [`ListResponse`], [`ListingService`] - Listing contract
//! - [`ExplorerConfig`] - Bucket settings and URL construction
//! - [`xml`] - S3 `ListObjectsV2` response decoding
//! - `InMemoryBucket` - Test double (feature `mock`)

pub mod config;
pub mod error;
pub mod listing;
#[cfg(feature = "mock")]
pub mod mock;
pub mod navigator;
pub mod path;
pub mod xml;

pub use config::{ExplorerConfig, ResponseOrdering};
pub use error::{ConfigError, ListingError};
pub use listing::{Entry, GroupEntry, LeafEntry, ListRequest, ListResponse, ListingService};
#[cfg(feature = "mock")]
pub use mock::InMemoryBucket;
pub use navigator::{Applied, NavEvent, Navigator};
pub use path::FolderPath;
