//! Retrieval of the page's structured-data representation.
//!
//! The JSON endpoint lives at the page's own address: strip any query string
//! and fragment, append `format=json`, and GET it. Retrieval goes through
//! the [`Fetch`] trait so tests and embedders can substitute the transport;
//! [`HttpFetcher`] is the blocking HTTP implementation used by the CLI.
//!
//! There is no retry, no caching, and no timeout beyond the transport's own:
//! the navigation block is non-critical, so a failed retrieval is reported
//! once and the page is left as-is.

use crate::data::PageData;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid page URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("malformed page data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Query marker selecting the structured-data rendition of a page.
const DATA_QUERY: &str = "format=json";

/// Derive the structured-data URL for a page.
///
/// Any existing query string and fragment are dropped before the fixed
/// `format=json` marker is attached.
pub fn data_url(page_url: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(page_url)?;
    url.set_fragment(None);
    url.set_query(Some(DATA_QUERY));
    Ok(url)
}

/// Transport seam for structured-data retrieval.
///
/// Implementations return the raw response body for a successful request and
/// an error for anything else; parsing is the caller's concern.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Blocking HTTP implementation of [`Fetch`].
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let response = self.client.get(url.as_str()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text()?)
    }
}

/// Fetch and parse the structured data for a page.
pub fn fetch_page_data(fetcher: &dyn Fetch, page_url: &str) -> Result<PageData, FetchError> {
    let url = data_url(page_url)?;
    let body = fetcher.fetch(&url)?;
    Ok(serde_json::from_str(&body)?)
}
