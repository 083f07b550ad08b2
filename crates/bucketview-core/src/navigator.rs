//! Navigation state machine.
//!
//! [`Navigator`] tracks which folder is open, the search text, the pagination
//! token chain and the entries of the last applied page. Navigation methods
//! update that state and return the [`ListRequest`] to send; nothing here
//! performs I/O. Responses come back through [`Navigator::apply`].
//!
//! # Token chain
//!
//! After a successful response that carries a next token, the chain is the
//! request's chain plus that token, so on page `n` of a truncated listing the
//! chain holds `n` tokens. The last page keeps the chain it had when its
//! request was issued. Going back drops two tokens: the cursor for the page
//! after the current one and the cursor for the current page.

use crate::config::{DELIMITER, ExplorerConfig, ResponseOrdering};
use crate::error::ListingError;
use crate::listing::{Entry, ListRequest, ListResponse};
use crate::path::FolderPath;

/// Navigation input from the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Load the first page at the root.
    Initialize,
    /// Open a group prefix (`""` = root).
    OpenGroup(String),
    /// Open the breadcrumb at this index of the current path.
    OpenBreadcrumb(usize),
    /// Replace the search text.
    SetSearchQuery(String),
    NextPage,
    PreviousPage,
}

/// Result of applying a successful response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    /// The response replaced the displayed page.
    Updated,
    /// A newer request was issued after this one; response dropped.
    Stale,
}

/// Explorer navigation state.
#[derive(Clone, Debug)]
pub struct Navigator {
    config: ExplorerConfig,
    path: FolderPath,
    query: String,
    chain: Vec<String>,
    entries: Vec<Entry>,
    truncated: bool,
    page_number: usize,
    last_seq: u64,
}

impl Navigator {
    /// Empty state at the root. Call [`Navigator::initialize`] for page 1.
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            path: FolderPath::root(),
            query: String::new(),
            chain: Vec::new(),
            entries: Vec::new(),
            truncated: false,
            page_number: 1,
            last_seq: 0,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn path(&self) -> &FolderPath {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn token_chain(&self) -> &[String] {
        &self.chain
    }

    /// Entries of the last applied page, unfiltered.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Sequence number of the most recently issued request (0 = none yet).
    pub fn latest_seq(&self) -> u64 {
        self.last_seq
    }

    pub fn can_go_next(&self) -> bool {
        self.truncated
    }

    pub fn can_go_previous(&self) -> bool {
        self.chain.len() >= 2
    }

    /// Entries to render: everything except the current folder's own marker
    /// object.
    pub fn visible_entries(&self) -> impl Iterator<Item = &Entry> {
        let marker = self.path.marker_key();
        self.entries
            .iter()
            .filter(move |entry| !matches!(entry, Entry::Leaf(leaf) if leaf.key == marker))
    }

    /// Listing prefix for the current path and search text.
    pub fn listing_prefix(&self) -> String {
        self.path.search_prefix(&self.query)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Apply a navigation event. `None` means the event was a no-op.
    pub fn handle(&mut self, event: NavEvent) -> Option<ListRequest> {
        match event {
            NavEvent::Initialize => Some(self.initialize()),
            NavEvent::OpenGroup(prefix) => Some(self.open_group(&prefix)),
            NavEvent::OpenBreadcrumb(index) => Some(self.open_breadcrumb(index)),
            NavEvent::SetSearchQuery(text) => Some(self.set_search_query(text)),
            NavEvent::NextPage => self.next_page(),
            NavEvent::PreviousPage => self.previous_page(),
        }
    }

    /// Reset to the root and request the first page.
    pub fn initialize(&mut self) -> ListRequest {
        self.open_path(FolderPath::root())
    }

    /// Open a group prefix such as `"b/"`. Clears the search text.
    pub fn open_group(&mut self, prefix: &str) -> ListRequest {
        self.open_path(FolderPath::from_prefix(prefix))
    }

    /// Open the folder at breadcrumb `index` (0 = first segment).
    pub fn open_breadcrumb(&mut self, index: usize) -> ListRequest {
        let path = self.path.truncated(index.saturating_add(1));
        self.open_path(path)
    }

    /// Replace the search text and restart pagination at page 1.
    pub fn set_search_query(&mut self, text: impl Into<String>) -> ListRequest {
        self.query = text.into();
        self.chain.clear();
        self.issue(Vec::new())
    }

    /// Request the next page, if the current one is truncated.
    pub fn next_page(&mut self) -> Option<ListRequest> {
        if !self.truncated {
            return None;
        }
        Some(self.issue(self.chain.clone()))
    }

    /// Request the previous page, if the chain holds at least two tokens.
    pub fn previous_page(&mut self) -> Option<ListRequest> {
        if self.chain.len() < 2 {
            return None;
        }
        self.chain.truncate(self.chain.len() - 2);
        Some(self.issue(self.chain.clone()))
    }

    fn open_path(&mut self, path: FolderPath) -> ListRequest {
        self.path = path;
        self.query.clear();
        self.chain.clear();
        self.issue(Vec::new())
    }

    fn issue(&mut self, chain: Vec<String>) -> ListRequest {
        self.last_seq += 1;
        ListRequest {
            seq: self.last_seq,
            bucket: self.config.bucket.clone(),
            max_keys: self.config.page_size,
            delimiter: DELIMITER.to_string(),
            prefix: self.listing_prefix(),
            chain,
        }
    }

    // =========================================================================
    // Responses
    // =========================================================================

    /// Apply the outcome of `request`.
    ///
    /// On error the state is left untouched and the error is handed back.
    /// Under [`ResponseOrdering::LatestRequestOnly`] a superseded request
    /// yields [`Applied::Stale`] even when it failed.
    pub fn apply(
        &mut self,
        request: &ListRequest,
        result: Result<ListResponse, ListingError>,
    ) -> Result<Applied, ListingError> {
        // Under strict ordering a superseded request is dropped whether it
        // succeeded or failed
        if self.config.ordering == ResponseOrdering::LatestRequestOnly
            && request.seq != self.last_seq
        {
            return Ok(Applied::Stale);
        }

        let response = result?;

        self.truncated = response.truncated;
        self.page_number = request.page_number();
        if let Some(next) = response.next_continuation_token.clone() {
            let mut chain = request.chain.clone();
            chain.push(next);
            self.chain = chain;
        }
        self.entries = response.into_entries();

        Ok(Applied::Updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{GroupEntry, LeafEntry};

    fn leaf(key: &str, size: u64) -> LeafEntry {
        LeafEntry {
            key: key.to_string(),
            size,
            last_modified: None,
        }
    }

    fn group(prefix: &str) -> GroupEntry {
        GroupEntry {
            prefix: prefix.to_string(),
        }
    }

    fn page(items: Vec<LeafEntry>, groups: Vec<GroupEntry>, next: Option<&str>) -> ListResponse {
        ListResponse {
            items,
            groups,
            truncated: next.is_some(),
            next_continuation_token: next.map(str::to_string),
        }
    }

    fn navigator() -> Navigator {
        Navigator::new(ExplorerConfig::new("my-bucket").with_page_size(2))
    }

    /// Walk forward `pages` pages from the root, each page handing out the
    /// token `t{n}`.
    fn at_page(pages: usize) -> Navigator {
        let mut nav = navigator();
        let mut request = nav.initialize();
        for n in 1..=pages {
            let token = format!("t{}", n);
            nav.apply(&request, Ok(page(vec![], vec![], Some(&token))))
                .unwrap();
            if n < pages {
                request = nav.next_page().unwrap();
            }
        }
        nav
    }

    #[test]
    fn test_initialize_request() {
        let mut nav = navigator();
        let request = nav.initialize();
        assert_eq!(request.seq, 1);
        assert_eq!(request.bucket, "my-bucket");
        assert_eq!(request.max_keys, 2);
        assert_eq!(request.delimiter, "/");
        assert_eq!(request.prefix, "");
        assert_eq!(request.continuation_token(), None);
        assert!(nav.path().is_root());
    }

    #[test]
    fn test_initial_load_scenario() {
        let mut nav = navigator();
        let request = nav.initialize();
        let applied = nav
            .apply(
                &request,
                Ok(page(vec![leaf("a.txt", 10)], vec![group("b/")], Some("t1"))),
            )
            .unwrap();

        assert_eq!(applied, Applied::Updated);
        assert_eq!(nav.page_number(), 1);
        assert!(nav.is_truncated());
        assert_eq!(nav.token_chain(), ["t1"]);
        let keys: Vec<_> = nav.entries().iter().map(Entry::key).collect();
        assert_eq!(keys, ["a.txt", "b/"]);

        let request = nav.next_page().unwrap();
        assert_eq!(request.continuation_token(), Some("t1"));
        nav.apply(&request, Ok(page(vec![], vec![], None))).unwrap();
        assert_eq!(nav.page_number(), 2);
        assert!(!nav.is_truncated());
        assert!(nav.entries().is_empty());
    }

    #[test]
    fn test_open_group() {
        let mut nav = at_page(2);
        nav.set_search_query("zz");

        let request = nav.open_group("b/");
        assert_eq!(nav.path().segments(), ["b"]);
        assert_eq!(nav.query(), "");
        assert!(nav.token_chain().is_empty());
        assert_eq!(request.prefix, "b/");
        assert!(request.chain.is_empty());

        nav.open_group("");
        assert!(nav.path().is_root());
    }

    #[test]
    fn test_open_breadcrumb() {
        let mut nav = navigator();
        nav.open_group("a/b/c/");

        let request = nav.open_breadcrumb(1);
        assert_eq!(nav.path().segments(), ["a", "b"]);
        assert_eq!(request.prefix, "a/b/");

        let request = nav.open_breadcrumb(0);
        assert_eq!(nav.path().segments(), ["a"]);
        assert_eq!(request.prefix, "a/");

        // Past the end keeps the whole path
        nav.open_breadcrumb(9);
        assert_eq!(nav.path().segments(), ["a"]);
    }

    #[test]
    fn test_search_appends_query_and_resets_chain() {
        let mut nav = navigator();
        let request = nav.open_group("b/");
        nav.apply(&request, Ok(page(vec![leaf("b/x.txt", 1)], vec![], Some("t1"))))
            .unwrap();
        let request = nav.next_page().unwrap();
        nav.apply(&request, Ok(page(vec![leaf("b/y.txt", 1)], vec![], Some("t2"))))
            .unwrap();
        assert_eq!(nav.page_number(), 2);

        let request = nav.set_search_query("x");
        assert_eq!(request.prefix, "b/x");
        assert!(request.chain.is_empty());
        assert!(nav.token_chain().is_empty());
        assert_eq!(nav.path().segments(), ["b"]);

        nav.apply(&request, Ok(page(vec![leaf("b/x.txt", 1)], vec![], None)))
            .unwrap();
        assert_eq!(nav.page_number(), 1);
        assert!(nav.token_chain().is_empty());
    }

    #[test]
    fn test_next_page_noop_when_not_truncated() {
        let mut nav = navigator();
        let request = nav.initialize();
        nav.apply(&request, Ok(page(vec![leaf("a.txt", 1)], vec![], None)))
            .unwrap();
        let seq = nav.latest_seq();

        assert!(!nav.can_go_next());
        assert_eq!(nav.next_page(), None);
        assert_eq!(nav.handle(NavEvent::NextPage), None);
        assert_eq!(nav.latest_seq(), seq);
        assert_eq!(nav.page_number(), 1);
    }

    #[test]
    fn test_previous_page_drops_two_tokens() {
        let mut nav = at_page(3);
        assert_eq!(nav.page_number(), 3);
        assert_eq!(nav.token_chain(), ["t1", "t2", "t3"]);
        assert!(nav.can_go_previous());

        let request = nav.previous_page().unwrap();
        assert_eq!(request.chain, ["t1"]);
        assert_eq!(nav.token_chain(), ["t1"]);
        assert_eq!(request.continuation_token(), Some("t1"));

        nav.apply(&request, Ok(page(vec![], vec![], Some("t2"))))
            .unwrap();
        assert_eq!(nav.page_number(), 2);
        assert_eq!(nav.token_chain(), ["t1", "t2"]);

        let request = nav.previous_page().unwrap();
        assert!(request.chain.is_empty());
        nav.apply(&request, Ok(page(vec![], vec![], Some("t1"))))
            .unwrap();
        assert_eq!(nav.page_number(), 1);
        assert_eq!(nav.token_chain(), ["t1"]);
    }

    #[test]
    fn test_previous_page_noop_below_two_tokens() {
        let mut nav = navigator();
        assert_eq!(nav.previous_page(), None);

        // Final page 2: chain keeps its single token, so going back is a no-op
        let request = nav.initialize();
        nav.apply(&request, Ok(page(vec![], vec![], Some("t1"))))
            .unwrap();
        let request = nav.next_page().unwrap();
        nav.apply(&request, Ok(page(vec![], vec![], None))).unwrap();

        assert_eq!(nav.page_number(), 2);
        assert_eq!(nav.token_chain(), ["t1"]);
        assert!(!nav.can_go_previous());
        assert_eq!(nav.handle(NavEvent::PreviousPage), None);
        assert_eq!(nav.token_chain(), ["t1"]);
    }

    #[test]
    fn test_failure_leaves_page_unchanged() {
        let mut nav = navigator();
        let request = nav.initialize();
        nav.apply(&request, Ok(page(vec![leaf("a.txt", 1)], vec![], Some("t1"))))
            .unwrap();

        let request = nav.next_page().unwrap();
        let err = nav
            .apply(&request, Err(ListingError::Network("offline".to_string())))
            .unwrap_err();

        assert_eq!(err, ListingError::Network("offline".to_string()));
        assert_eq!(nav.page_number(), 1);
        assert!(nav.is_truncated());
        assert_eq!(nav.token_chain(), ["t1"]);
        assert_eq!(nav.entries().len(), 1);
    }

    #[test]
    fn test_visible_entries_skip_folder_marker() {
        let mut nav = navigator();
        let request = nav.open_group("b/");
        nav.apply(
            &request,
            Ok(page(
                vec![leaf("b/", 0), leaf("b/x.txt", 1)],
                vec![group("b/c/")],
                None,
            )),
        )
        .unwrap();

        let keys: Vec<_> = nav.visible_entries().map(Entry::key).collect();
        assert_eq!(keys, ["b/x.txt", "b/c/"]);
        assert_eq!(nav.entries().len(), 3);
    }

    #[test]
    fn test_last_arrival_wins() {
        let mut nav = navigator();
        let first = nav.set_search_query("a");
        let second = nav.set_search_query("ab");

        nav.apply(&second, Ok(page(vec![leaf("ab.txt", 1)], vec![], None)))
            .unwrap();
        let applied = nav
            .apply(&first, Ok(page(vec![leaf("a.txt", 1)], vec![], None)))
            .unwrap();

        assert_eq!(applied, Applied::Updated);
        assert_eq!(nav.query(), "ab");
        assert_eq!(nav.entries()[0].key(), "a.txt");
    }

    #[test]
    fn test_latest_request_only_drops_stale() {
        let config = ExplorerConfig::new("my-bucket")
            .with_ordering(ResponseOrdering::LatestRequestOnly);
        let mut nav = Navigator::new(config);
        let first = nav.set_search_query("a");
        let second = nav.set_search_query("ab");
        assert!(second.seq > first.seq);

        nav.apply(&second, Ok(page(vec![leaf("ab.txt", 1)], vec![], None)))
            .unwrap();
        let applied = nav
            .apply(&first, Ok(page(vec![leaf("a.txt", 1)], vec![], Some("t"))))
            .unwrap();

        assert_eq!(applied, Applied::Stale);
        assert_eq!(nav.entries()[0].key(), "ab.txt");
        assert!(nav.token_chain().is_empty());
    }

    #[test]
    fn test_latest_request_only_ignores_stale_failure() {
        let config = ExplorerConfig::new("my-bucket")
            .with_ordering(ResponseOrdering::LatestRequestOnly);
        let mut nav = Navigator::new(config);
        let first = nav.set_search_query("a");
        let second = nav.set_search_query("ab");

        nav.apply(&second, Ok(page(vec![leaf("ab.txt", 1)], vec![], None)))
            .unwrap();
        let applied = nav.apply(&first, Err(ListingError::Http(500)));

        assert_eq!(applied, Ok(Applied::Stale));
        assert_eq!(nav.entries()[0].key(), "ab.txt");
    }

    #[test]
    fn test_latest_request_failure_is_reported() {
        let config = ExplorerConfig::new("my-bucket")
            .with_ordering(ResponseOrdering::LatestRequestOnly);
        let mut nav = Navigator::new(config);
        let request = nav.set_search_query("a");

        assert_eq!(
            nav.apply(&request, Err(ListingError::Http(500))),
            Err(ListingError::Http(500))
        );
    }

    #[test]
    fn test_open_group_with_empty_segments() {
        let mut nav = navigator();

        let request = nav.open_group("a//");
        assert_eq!(nav.path().segments(), ["a", ""]);
        assert_eq!(request.prefix, "a//");

        let request = nav.open_breadcrumb(0);
        assert_eq!(request.prefix, "a/");

        let request = nav.open_group("/");
        assert!(!nav.path().is_root());
        assert_eq!(request.prefix, "/");
    }

    #[test]
    fn test_handle_dispatch() {
        let mut nav = navigator();
        let request = nav.handle(NavEvent::OpenGroup("docs/".to_string())).unwrap();
        assert_eq!(request.prefix, "docs/");
        let request = nav
            .handle(NavEvent::SetSearchQuery("read".to_string()))
            .unwrap();
        assert_eq!(request.prefix, "docs/read");
        let request = nav.handle(NavEvent::OpenBreadcrumb(0)).unwrap();
        assert_eq!(request.prefix, "docs/");
        let request = nav.handle(NavEvent::Initialize).unwrap();
        assert_eq!(request.prefix, "");
        assert_eq!(request.seq, 4);
    }
}
