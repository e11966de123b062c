//! Timetable feed HTTP client.
//!
//! Fetches the public feed JSON, optionally via a CORS relay that echoes
//! the target response verbatim.

use reqwest::Url;
use tracing::debug;

use super::error::FeedError;
use super::types::BusFeed;

/// Default timetable feed endpoint.
const DEFAULT_FEED_URL: &str = "http://bus.shibaura-it.ac.jp/db/bus_data.json";

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// URL of the timetable feed.
    pub feed_url: String,
    /// Optional relay endpoint; the feed URL is passed as its `url`
    /// query parameter.
    pub relay_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a config pointing at the default public endpoint.
    pub fn new() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            relay_url: None,
            timeout_secs: 30,
        }
    }

    /// Set a custom feed URL (for testing).
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    /// Route requests through a CORS relay.
    pub fn with_relay(mut self, url: impl Into<String>) -> Self {
        self.relay_url = Some(url.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Timetable feed client.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    request_url: Url,
}

impl FeedClient {
    /// Create a new feed client with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let request_url = match &config.relay_url {
            // The relay takes the target as a query parameter; Url handles
            // the percent-encoding.
            Some(relay) => Url::parse_with_params(relay, [("url", config.feed_url.as_str())])
                .map_err(|_| FeedError::BadUrl(relay.clone()))?,
            None => {
                Url::parse(&config.feed_url).map_err(|_| FeedError::BadUrl(config.feed_url))?
            }
        };

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, request_url })
    }

    /// Fetch and decode the current timetable feed.
    ///
    /// The body is decoded manually rather than with `Response::json` so
    /// that a decode failure can carry a snippet of the offending body
    /// (relays tend to return HTML error pages with a 200 status).
    pub async fn fetch(&self) -> Result<BusFeed, FeedError> {
        debug!(url = %self.request_url, "fetching timetable feed");

        let response = self.http.get(self.request_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FeedError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(200).collect()),
        })
    }
}
