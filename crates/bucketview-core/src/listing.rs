//! Listing request/response contract with the storage service.
//!
//! The navigator produces [`ListRequest`]s; something implementing
//! [`ListingService`] turns them into [`ListResponse`]s.

use chrono::{DateTime, Utc};

use crate::error::ListingError;

// =============================================================================
// Entries
// =============================================================================

/// A stored object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafEntry {
    /// Full object key.
    pub key: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time, if the service reported a parseable one.
    pub last_modified: Option<DateTime<Utc>>,
}

/// A virtual folder (common prefix). Always ends with the delimiter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupEntry {
    pub prefix: String,
}

/// One row of a listing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Leaf(LeafEntry),
    Group(GroupEntry),
}

impl Entry {
    /// Object key or group prefix.
    pub fn key(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.key,
            Self::Group(group) => &group.prefix,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// Name relative to `folder_prefix`.
    ///
    /// Falls back to the full key when it does not start with the prefix.
    pub fn name_in<'a>(&'a self, folder_prefix: &str) -> &'a str {
        let key = self.key();
        match key.strip_prefix(folder_prefix) {
            Some(rest) if !rest.is_empty() => rest,
            _ => key,
        }
    }
}

// =============================================================================
// Request / Response
// =============================================================================

/// One outbound listing call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRequest {
    /// Sequence number, strictly increasing per navigator.
    pub seq: u64,
    pub bucket: String,
    pub max_keys: u32,
    pub delimiter: String,
    pub prefix: String,
    /// Token chain the request was issued with. The last token, if any, is
    /// the continuation cursor.
    pub chain: Vec<String>,
}

impl ListRequest {
    /// Cursor sent to the service, if this is not a first page.
    pub fn continuation_token(&self) -> Option<&str> {
        self.chain.last().map(String::as_str)
    }

    /// Page this request lists (1-based).
    pub fn page_number(&self) -> usize {
        self.chain.len() + 1
    }

    /// Query string for an S3 `ListObjectsV2` call, values percent-encoded.
    pub fn query_string(&self) -> String {
        let mut query = format!(
            "list-type=2&delimiter={}&max-keys={}&prefix={}",
            urlencoding::encode(&self.delimiter),
            self.max_keys,
            urlencoding::encode(&self.prefix),
        );
        if let Some(token) = self.continuation_token() {
            query.push_str("&continuation-token=");
            query.push_str(&urlencoding::encode(token));
        }
        query
    }
}

/// Decoded listing page as returned by the service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListResponse {
    pub items: Vec<LeafEntry>,
    pub groups: Vec<GroupEntry>,
    /// More results exist beyond this page.
    pub truncated: bool,
    pub next_continuation_token: Option<String>,
}

impl ListResponse {
    /// Leaves followed by groups, in server order.
    pub fn into_entries(self) -> Vec<Entry> {
        self.items
            .into_iter()
            .map(Entry::Leaf)
            .chain(self.groups.into_iter().map(Entry::Group))
            .collect()
    }
}

// =============================================================================
// Service
// =============================================================================

/// Storage service that answers listing requests.
///
/// Futures are not required to be `Send`: the browser implementation awaits
/// JS promises on a single thread.
#[allow(async_fn_in_trait)]
pub trait ListingService {
    async fn list(&self, request: &ListRequest) -> Result<ListResponse, ListingError>;
}
