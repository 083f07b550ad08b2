//! S3 listing over HTTPS.
//!
//! Requests are unsigned: the bucket is expected to allow public listing
//! (or the endpoint to be pre-signed/proxied).

use bucketview_core::{ExplorerConfig, ListRequest, ListResponse, ListingError, ListingService, xml};

use crate::utils::fetch::FetchedText;
use crate::utils::fetch_text;

/// Listing service backed by the bucket's REST endpoint.
#[derive(Clone, Debug)]
pub struct S3ListingService {
    config: ExplorerConfig,
}

impl S3ListingService {
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }
}

impl ListingService for S3ListingService {
    async fn list(&self, request: &ListRequest) -> Result<ListResponse, ListingError> {
        let url = self.config.listing_url(request);
        let fetched = fetch_text(&url).await?;
        decode(fetched)
    }
}

/// Turn a raw HTTP response into a listing page or a listing error.
fn decode(fetched: FetchedText) -> Result<ListResponse, ListingError> {
    if fetched.is_success() {
        xml::parse_list_response(&fetched.body)
    } else {
        Err(xml::parse_error_response(fetched.status, &fetched.body))
    }
}
