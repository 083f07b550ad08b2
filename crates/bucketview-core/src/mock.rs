//! In-memory bucket for tests.
//!
//! Mirrors S3 `ListObjectsV2` semantics closely enough to drive the
//! navigator end to end: lexicographic key order, prefix filtering, delimiter
//! roll-up into common prefixes, `max-keys` counting both objects and
//! prefixes, and opaque continuation tokens.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Utc};

use crate::error::ListingError;
use crate::listing::{GroupEntry, LeafEntry, ListRequest, ListResponse, ListingService};

const TOKEN_PREFIX: &str = "after:";

#[derive(Clone, Debug)]
struct StoredObject {
    size: u64,
    last_modified: Option<DateTime<Utc>>,
}

/// A bucket held in memory.
#[derive(Debug, Default)]
pub struct InMemoryBucket {
    objects: BTreeMap<String, StoredObject>,
    failures: RefCell<VecDeque<ListingError>>,
    requests: RefCell<Vec<ListRequest>>,
}

impl InMemoryBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket holding `keys`, each with a size equal to its key length.
    pub fn with_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut bucket = Self::new();
        for key in keys {
            bucket.put(key, key.len() as u64);
        }
        bucket
    }

    pub fn put(&mut self, key: impl Into<String>, size: u64) {
        self.objects.insert(
            key.into(),
            StoredObject {
                size,
                last_modified: None,
            },
        );
    }

    pub fn put_with_time(&mut self, key: impl Into<String>, size: u64, modified: DateTime<Utc>) {
        self.objects.insert(
            key.into(),
            StoredObject {
                size,
                last_modified: Some(modified),
            },
        );
    }

    /// Make the next listing call fail with `error`. Queued failures are
    /// consumed in order.
    pub fn fail_next(&self, error: ListingError) {
        self.failures.borrow_mut().push_back(error);
    }

    /// Every request received so far, failed ones included.
    pub fn requests(&self) -> Vec<ListRequest> {
        self.requests.borrow().clone()
    }

    /// Answer a request synchronously.
    pub fn list_now(&self, request: &ListRequest) -> Result<ListResponse, ListingError> {
        self.requests.borrow_mut().push(request.clone());

        if let Some(error) = self.failures.borrow_mut().pop_front() {
            return Err(error);
        }

        let start_after = match request.continuation_token() {
            Some(token) => Some(decode_token(token)?),
            None => None,
        };

        let prefix = request.prefix.as_str();
        let delimiter = request.delimiter.as_str();
        let max_keys = request.max_keys as usize;

        let mut response = ListResponse::default();
        let mut emitted = 0usize;
        let mut last_emitted: Option<String> = None;

        let candidates = self
            .objects
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .filter(|(key, _)| start_after.as_deref().is_none_or(|after| key.as_str() > after));

        for (key, object) in candidates {
            let rest = &key[prefix.len()..];
            let group = (!delimiter.is_empty())
                .then(|| rest.find(delimiter))
                .flatten()
                .map(|pos| key[..prefix.len() + pos + delimiter.len()].to_string());

            // S3 stops at max-keys as soon as any key remains, even one that
            // would roll into a group already returned
            if emitted == max_keys {
                response.truncated = true;
                break;
            }

            if let Some(group) = &group {
                let seen = last_emitted.as_deref() == Some(group.as_str())
                    || start_after.as_deref().is_some_and(|after| group.as_str() <= after);
                if seen {
                    continue;
                }
            }

            match group {
                Some(group) => {
                    response.groups.push(GroupEntry {
                        prefix: group.clone(),
                    });
                    last_emitted = Some(group);
                }
                None => {
                    response.items.push(LeafEntry {
                        key: key.clone(),
                        size: object.size,
                        last_modified: object.last_modified,
                    });
                    last_emitted = Some(key.clone());
                }
            }
            emitted += 1;
        }

        if response.truncated {
            response.next_continuation_token = last_emitted.map(|k| format!("{}{}", TOKEN_PREFIX, k));
        }

        Ok(response)
    }
}

fn decode_token(token: &str) -> Result<String, ListingError> {
    token
        .strip_prefix(TOKEN_PREFIX)
        .map(str::to_string)
        .ok_or_else(|| ListingError::Service {
            status: 400,
            code: "InvalidArgument".to_string(),
            message: "The continuation token provided is incorrect".to_string(),
        })
}

impl ListingService for InMemoryBucket {
    async fn list(&self, request: &ListRequest) -> Result<ListResponse, ListingError> {
        self.list_now(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prefix: &str, max_keys: u32, token: Option<&str>) -> ListRequest {
        ListRequest {
            seq: 1,
            bucket: "mock".to_string(),
            max_keys,
            delimiter: "/".to_string(),
            prefix: prefix.to_string(),
            chain: token.map(|t| vec![t.to_string()]).unwrap_or_default(),
        }
    }

    fn keys(response: &ListResponse) -> (Vec<&str>, Vec<&str>) {
        (
            response.items.iter().map(|i| i.key.as_str()).collect(),
            response.groups.iter().map(|g| g.prefix.as_str()).collect(),
        )
    }

    #[test]
    fn test_rolls_up_common_prefixes() {
        let bucket = InMemoryBucket::with_keys(["a.txt", "b/x.txt", "b/y.txt", "c/d/e.txt"]);
        let response = bucket.list_now(&request("", 10, None)).unwrap();
        assert_eq!(keys(&response), (vec!["a.txt"], vec!["b/", "c/"]));
        assert!(!response.truncated);
        assert_eq!(response.next_continuation_token, None);
    }

    #[test]
    fn test_prefix_scoping() {
        let bucket = InMemoryBucket::with_keys(["a.txt", "b/", "b/x.txt", "b/y.txt", "bb.txt"]);
        let response = bucket.list_now(&request("b/", 10, None)).unwrap();
        assert_eq!(keys(&response), (vec!["b/", "b/x.txt", "b/y.txt"], vec![]));

        let response = bucket.list_now(&request("b/x", 10, None)).unwrap();
        assert_eq!(keys(&response), (vec!["b/x.txt"], vec![]));
    }

    #[test]
    fn test_pagination() {
        let bucket = InMemoryBucket::with_keys(["1", "2", "3", "d/a", "d/b", "e"]);
        let first = bucket.list_now(&request("", 2, None)).unwrap();
        assert_eq!(keys(&first), (vec!["1", "2"], vec![]));
        assert!(first.truncated);

        let token = first.next_continuation_token.unwrap();
        let second = bucket.list_now(&request("", 2, Some(&token))).unwrap();
        assert_eq!(keys(&second), (vec!["3"], vec!["d/"]));
        assert!(second.truncated);

        let token = second.next_continuation_token.unwrap();
        let third = bucket.list_now(&request("", 2, Some(&token))).unwrap();
        assert_eq!(keys(&third), (vec!["e"], vec![]));
        assert!(!third.truncated);
    }

    #[test]
    fn test_truncated_when_rest_rolls_into_returned_group() {
        let bucket = InMemoryBucket::with_keys(["a.txt", "b/x.txt", "b/y.txt"]);
        let first = bucket.list_now(&request("", 2, None)).unwrap();
        assert_eq!(keys(&first), (vec!["a.txt"], vec!["b/"]));
        assert!(first.truncated);
        assert_eq!(first.next_continuation_token.as_deref(), Some("after:b/"));

        let token = first.next_continuation_token.unwrap();
        let second = bucket.list_now(&request("", 2, Some(&token))).unwrap();
        assert_eq!(keys(&second), (vec![], vec![]));
        assert!(!second.truncated);
        assert_eq!(second.next_continuation_token, None);
    }

    #[test]
    fn test_not_truncated_when_page_is_exactly_full() {
        let bucket = InMemoryBucket::with_keys(["a.txt", "b/x.txt"]);
        let response = bucket.list_now(&request("", 2, None)).unwrap();
        assert_eq!(keys(&response), (vec!["a.txt"], vec!["b/"]));
        assert!(!response.truncated);
    }

    #[test]
    fn test_lists_groups_with_empty_segments() {
        let bucket = InMemoryBucket::with_keys(["/lead.txt", "a//deep.txt", "a/b.txt"]);
        let root = bucket.list_now(&request("", 10, None)).unwrap();
        assert_eq!(keys(&root), (vec![], vec!["/", "a/"]));

        let a = bucket.list_now(&request("a/", 10, None)).unwrap();
        assert_eq!(keys(&a), (vec!["a/b.txt"], vec!["a//"]));

        let nested = bucket.list_now(&request("a//", 10, None)).unwrap();
        assert_eq!(keys(&nested), (vec!["a//deep.txt"], vec![]));
    }

    #[test]
    fn test_scripted_failure_and_request_log() {
        let bucket = InMemoryBucket::with_keys(["a"]);
        bucket.fail_next(ListingError::Http(503));
        assert_eq!(
            bucket.list_now(&request("", 1, None)),
            Err(ListingError::Http(503))
        );
        assert!(bucket.list_now(&request("", 1, None)).is_ok());
        assert_eq!(bucket.requests().len(), 2);
    }

    #[test]
    fn test_rejects_foreign_token() {
        let bucket = InMemoryBucket::with_keys(["a"]);
        let err = bucket.list_now(&request("", 1, Some("garbage"))).unwrap_err();
        assert!(matches!(err, ListingError::Service { status: 400, .. }));
    }
}
