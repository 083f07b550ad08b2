//! S3 `ListObjectsV2` wire decoding.
//!
//! Success bodies are `<ListBucketResult>` documents; failures are
//! `<Error>` documents. Both are decoded with quick-xml's serde support after
//! a check of the root element, since serde would happily decode an `<Error>`
//! body into an empty listing.

use chrono::{DateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;

use crate::error::ListingError;
use crate::listing::{GroupEntry, LeafEntry, ListResponse};

const LIST_ROOT: &str = "ListBucketResult";
const ERROR_ROOT: &str = "Error";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListBucketResult {
    #[serde(default)]
    contents: Vec<ContentsXml>,
    #[serde(default)]
    common_prefixes: Vec<CommonPrefixXml>,
    #[serde(default)]
    is_truncated: bool,
    #[serde(default)]
    next_continuation_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ContentsXml {
    key: String,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    last_modified: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CommonPrefixXml {
    prefix: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorDocument {
    code: String,
    #[serde(default)]
    message: String,
}

/// Local name of the first element in the document.
fn root_element(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Some(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) | Err(_) => return None,
            _ => {}
        }
    }
}

/// Parse an RFC 3339 timestamp such as `2024-01-05T12:34:56.000Z`.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Decode a successful `ListObjectsV2` response body.
pub fn parse_list_response(xml: &str) -> Result<ListResponse, ListingError> {
    match root_element(xml) {
        Some(root) if root == LIST_ROOT => {}
        Some(root) => {
            return Err(ListingError::MalformedResponse(format!(
                "unexpected root element <{}>",
                root
            )));
        }
        None => {
            return Err(ListingError::MalformedResponse(
                "empty or unreadable document".to_string(),
            ));
        }
    }

    let doc: ListBucketResult = quick_xml::de::from_str(xml)
        .map_err(|e| ListingError::MalformedResponse(e.to_string()))?;

    let items = doc
        .contents
        .into_iter()
        .map(|c| LeafEntry {
            last_modified: c.last_modified.as_deref().and_then(parse_timestamp),
            key: c.key,
            size: c.size,
        })
        .collect();

    let groups = doc
        .common_prefixes
        .into_iter()
        .map(|p| GroupEntry { prefix: p.prefix })
        .collect();

    Ok(ListResponse {
        items,
        groups,
        truncated: doc.is_truncated,
        next_continuation_token: doc.next_continuation_token.filter(|t| !t.is_empty()),
    })
}

/// Decode the body of a failed request.
///
/// Returns [`ListingError::Service`] for S3 error documents and
/// [`ListingError::Http`] for anything else (HTML error pages, empty bodies).
pub fn parse_error_response(status: u16, xml: &str) -> ListingError {
    if root_element(xml).as_deref() != Some(ERROR_ROOT) {
        return ListingError::Http(status);
    }

    match quick_xml::de::from_str::<ErrorDocument>(xml) {
        Ok(doc) => ListingError::Service {
            status,
            code: doc.code,
            message: doc.message,
        },
        Err(_) => ListingError::Http(status),
    }
}
