//! HTTP client for the GIPHY API.

use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use url::Url;

use crate::config::GiphyConfig;
use crate::decode::{decode_image, DecodedImage};
use crate::error::FetchError;
use crate::model::GiphyResponse;
use crate::query::{PageParams, Query};
use crate::source::{ImageFetcher, PageSource};

/// Content rating every request is constrained to.
pub const CONTENT_RATING: &str = "g";

/// Language sent with keyword searches.
pub const SEARCH_LANGUAGE: &str = "en";

const TRENDING_ENDPOINT: &str = "/gifs/trending";
const SEARCH_ENDPOINT: &str = "/gifs/search";
const USER_AGENT: &str = concat!("gifwall/", env!("CARGO_PKG_VERSION"));

/// Blocking GIPHY client. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct GiphyClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for GiphyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GiphyClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GiphyClient {
    /// Creates a client for the configured base URL and key.
    ///
    /// No request timeout is set; the transport's own timeouts apply.
    pub fn new(config: &GiphyConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(15))
            .build()?;

        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        info!("[GiphyClient] Using API base URL {}", base_url);

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Returns the underlying HTTP client for image downloads.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Builds the request URL for a page.
    pub fn page_url(&self, params: &PageParams) -> Result<Url, FetchError> {
        let endpoint = match params.query {
            Query::Trending => TRENDING_ENDPOINT,
            Query::Search(_) => SEARCH_ENDPOINT,
        };
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            if let Query::Search(keyword) = &params.query {
                pairs.append_pair("q", keyword);
            }
            pairs.append_pair("limit", &params.limit.to_string());
            pairs.append_pair("offset", &params.offset.to_string());
            pairs.append_pair("rating", CONTENT_RATING);
            if !params.query.is_trending() {
                pairs.append_pair("lang", SEARCH_LANGUAGE);
            }
        }

        Ok(url)
    }
}

impl PageSource for GiphyClient {
    fn fetch_page(&self, params: &PageParams) -> Result<GiphyResponse, FetchError> {
        let url = self.page_url(params)?;
        debug!(
            "[GiphyClient] GET {} offset={} limit={}",
            params.query, params.offset, params.limit
        );

        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        Ok(response.json::<GiphyResponse>()?)
    }
}

/// Downloads images over HTTP and decodes them.
#[derive(Clone)]
pub struct HttpImageFetcher {
    http: Client,
}

impl HttpImageFetcher {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch_image(&self, url: &str) -> Result<DecodedImage, FetchError> {
        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let bytes = response.bytes()?;
        Ok(decode_image(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GiphyClient {
        let config = GiphyConfig {
            api_key: "KEY".to_string(),
            base_url: "https://api.giphy.com/v1/".to_string(),
            ..GiphyConfig::default()
        };
        GiphyClient::new(&config).unwrap()
    }

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
    }

    #[test]
    fn test_trending_url() {
        let url = client()
            .page_url(&PageParams::new(Query::Trending, 25, 25))
            .unwrap();
        assert_eq!(url.path(), "/v1/gifs/trending");
        let pairs = pairs(&url);
        assert!(pairs.contains(&("api_key".to_string(), "KEY".to_string())));
        assert!(pairs.contains(&("offset".to_string(), "25".to_string())));
        assert!(pairs.contains(&("limit".to_string(), "25".to_string())));
        assert!(pairs.contains(&("rating".to_string(), "g".to_string())));
        assert!(!pairs.iter().any(|(k, _)| k == "q"));
    }

    #[test]
    fn test_search_url_encodes_keyword() {
        let url = client()
            .page_url(&PageParams::new(Query::Search("cats & dogs".to_string()), 0, 10))
            .unwrap();
        assert_eq!(url.path(), "/v1/gifs/search");
        let pairs = pairs(&url);
        assert!(pairs.contains(&("q".to_string(), "cats & dogs".to_string())));
        assert!(pairs.contains(&("lang".to_string(), "en".to_string())));
        assert!(!url.as_str().contains("cats & dogs"));
    }
}
