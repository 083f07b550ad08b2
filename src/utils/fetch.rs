//! Network fetching over the browser Fetch API.
//!
//! One GET per call: no timeout race, no retry, no caching. The response
//! status is handed back with the body so callers can decode service error
//! documents.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::core::error::FetchError;

/// Status and text body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedText {
    pub status: u16,
    pub body: String,
}

impl FetchedText {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetch text from a URL using the Fetch API.
///
/// Non-2xx responses are returned as `Ok`; only failures to obtain a
/// response at all are errors.
pub async fn fetch_text(url: &str) -> Result<FetchedText, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            FetchError::NetworkError(
                e.as_string()
                    .or_else(|| {
                        e.dyn_ref::<js_sys::Error>()
                            .map(|err| String::from(err.message()))
                    })
                    .unwrap_or_else(|| "Unknown error".to_string()),
            )
        })?;

    let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;
    let status = resp.status();

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    let body = text.as_string().ok_or(FetchError::InvalidContent)?;
    Ok(FetchedText { status, body })
}
