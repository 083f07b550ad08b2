//! Folder paths inside the bucket.
//!
//! A [`FolderPath`] is the list of segments of the folder being browsed.
//!
//! # Path Convention
//!
//! - Root: no segments, joined form `""`
//! - Folder `photos/2024/`: segments `["photos", "2024"]`, joined `"photos/2024"`
//! - Segments never contain the delimiter but may be empty: S3 keys such as
//!   `a//x` or `/x` produce groups `a//` and `/`, which map to `["a", ""]`
//!   and `[""]` so that [`FolderPath::folder_prefix`] gives the group back

use std::fmt;

use crate::config::DELIMITER;

/// Current folder as an ordered list of segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FolderPath {
    segments: Vec<String>,
}

impl FolderPath {
    /// The bucket root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a group prefix such as `"b/"` or `"photos/2024/"`.
    ///
    /// One trailing delimiter is trimmed before splitting; every other
    /// segment is kept, empty ones included. `""` is the root.
    pub fn from_prefix(prefix: &str) -> Self {
        if prefix.is_empty() {
            return Self::root();
        }
        let trimmed = prefix.strip_suffix(DELIMITER).unwrap_or(prefix);
        let segments = trimmed.split(DELIMITER).map(str::to_string).collect();
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Path made of the first `count` segments (clamped to the length).
    pub fn truncated(&self, count: usize) -> Self {
        let count = count.min(self.segments.len());
        Self {
            segments: self.segments[..count].to_vec(),
        }
    }

    /// Segments joined with the delimiter, no trailing slash.
    pub fn joined(&self) -> String {
        self.segments.join(DELIMITER)
    }

    /// Listing prefix for this folder: `"a/b/"`, or `""` at root.
    pub fn folder_prefix(&self) -> String {
        if self.is_root() {
            String::new()
        } else {
            format!("{}{}", self.joined(), DELIMITER)
        }
    }

    /// Key of the zero-byte object some backends store for an explicitly
    /// created folder. Always `joined + "/"`, so `"/"` at root.
    pub fn marker_key(&self) -> String {
        format!("{}{}", self.joined(), DELIMITER)
    }

    /// Listing prefix with a search query appended.
    pub fn search_prefix(&self, query: &str) -> String {
        let mut prefix = self.folder_prefix();
        prefix.push_str(query);
        prefix
    }

    /// Last segment, used as the folder title.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.joined())
    }
}
