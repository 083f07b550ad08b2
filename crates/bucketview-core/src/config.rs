//! Explorer configuration.
//!
//! The host page provides the bucket and a few optional settings as globals.
//! [`ExplorerConfig::from_lookup`] turns those raw strings into a validated
//! config; the lookup function is supplied by the caller so this module has
//! no dependency on the browser.

use crate::error::ConfigError;
use crate::listing::ListRequest;

/// Listing delimiter. Groups keys into virtual folders.
pub const DELIMITER: &str = "/";

/// Default number of keys per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page S3 will return for a single listing call.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Default bucket region.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default domain for object links.
pub const DEFAULT_STORAGE_DOMAIN: &str = "s3.amazonaws.com";

/// Names of the host-provided globals.
pub mod globals {
    pub const BUCKET_NAME: &str = "BUCKET_NAME";
    pub const PAGE_SIZE: &str = "PAGE_SIZE";
    pub const REGION: &str = "REGION";
    pub const STORAGE_DOMAIN: &str = "STORAGE_DOMAIN";
    pub const LISTING_ENDPOINT: &str = "LISTING_ENDPOINT";
    pub const STRICT_RESPONSE_ORDER: &str = "STRICT_RESPONSE_ORDER";

    pub const ALL: &[&str] = &[
        BUCKET_NAME,
        PAGE_SIZE,
        REGION,
        STORAGE_DOMAIN,
        LISTING_ENDPOINT,
        STRICT_RESPONSE_ORDER,
    ];
}

/// How listing responses that resolve out of order are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Every successful response is applied when it resolves.
    #[default]
    LastArrivalWins,
    /// Only the response to the most recently issued request is applied.
    LatestRequestOnly,
}

/// Settings for a single-bucket explorer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Bucket identifier.
    pub bucket: String,
    /// Max keys per listing page.
    pub page_size: u32,
    /// Bucket region, used to derive the listing endpoint.
    pub region: String,
    /// Domain used for object links (`https://{bucket}.{domain}/{key}`).
    pub storage_domain: String,
    /// Listing endpoint override (no trailing slash).
    pub endpoint: Option<String>,
    /// Out-of-order response policy.
    pub ordering: ResponseOrdering,
}

impl ExplorerConfig {
    /// Config for `bucket` with every other setting at its default.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            page_size: DEFAULT_PAGE_SIZE,
            region: DEFAULT_REGION.to_string(),
            storage_domain: DEFAULT_STORAGE_DOMAIN.to_string(),
            endpoint: None,
            ordering: ResponseOrdering::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Build a config from named settings (see [`globals`]).
    ///
    /// Blank values count as unset. Only `BUCKET_NAME` is required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bucket = get(globals::BUCKET_NAME).ok_or(ConfigError::MissingBucket)?;
        let mut config = Self::new(bucket);

        if let Some(raw) = get(globals::PAGE_SIZE) {
            config.page_size = parse_page_size(&raw)?;
        }
        if let Some(region) = get(globals::REGION) {
            config.region = region;
        }
        if let Some(domain) = get(globals::STORAGE_DOMAIN) {
            config.storage_domain = domain;
        }
        config.endpoint = get(globals::LISTING_ENDPOINT)
            .map(|e| e.trim_end_matches('/').to_string())
            .filter(|e| !e.is_empty());
        if get(globals::STRICT_RESPONSE_ORDER).is_some_and(|v| v.eq_ignore_ascii_case("true")) {
            config.ordering = ResponseOrdering::LatestRequestOnly;
        }

        Ok(config)
    }

    /// Base URL for listing calls.
    pub fn listing_endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{}.s3.{}.amazonaws.com", self.bucket, self.region),
        }
    }

    /// Full `ListObjectsV2` URL for a request.
    pub fn listing_url(&self, request: &ListRequest) -> String {
        format!("{}/?{}", self.listing_endpoint(), request.query_string())
    }

    /// Direct link to an object.
    ///
    /// Each key segment is percent-encoded; slashes are kept.
    pub fn object_url(&self, key: &str) -> String {
        let encoded: Vec<_> = key.split(DELIMITER).map(urlencoding::encode).collect();
        format!(
            "https://{}.{}/{}",
            self.bucket,
            self.storage_domain,
            encoded.join(DELIMITER)
        )
    }
}

fn parse_page_size(raw: &str) -> Result<u32, ConfigError> {
    // JS numbers may arrive as "20" or "20.0"
    let value = raw
        .parse::<u32>()
        .ok()
        .or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= f64::from(MAX_PAGE_SIZE))
                .map(|v| v as u32)
        })
        .ok_or_else(|| ConfigError::InvalidPageSize(raw.to_string()))?;

    if (1..=MAX_PAGE_SIZE).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidPageSize(raw.to_string()))
    }
}
