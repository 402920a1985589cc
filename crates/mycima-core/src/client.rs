//! HTTP page fetching for MyCima
//!
//! [`PageFetcher`] is the seam the scraper fetches documents through;
//! [`MyCimaClient`] implements it on top of reqwest. Requests are plain
//! single-shot GETs: no retries and no throttling.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{MyCimaError, Result};

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header, the site serves Arabic and English titles
const DEFAULT_ACCEPT_LANGUAGE: &str = "ar,en;q=0.8";

/// Anything able to turn a URL into the HTML of the page behind it.
///
/// Implementations must report transport failures and non-success statuses
/// as errors; an empty body is still a successful fetch.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the raw HTML behind `url`
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Configuration for the MyCima HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Request timeout in seconds (default: none, a slow page just delays the walk)
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

/// HTTP client for MyCima pages
pub struct MyCimaClient {
    client: reqwest::Client,
}

impl MyCimaClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
        );

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PageFetcher for MyCimaClient {
    /// Fetch HTML content from an absolute URL
    ///
    /// # Errors
    /// - `MyCimaError::HttpError` - Network or transport error
    /// - `MyCimaError::NotFound` - Server returned 404
    /// - `MyCimaError::HttpStatus` - Any other non-2xx status
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.text().await?);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MyCimaError::NotFound(url.to_string()));
        }

        Err(MyCimaError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}
