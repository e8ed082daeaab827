//! HTTP transport: one GET per call with a fixed User-Agent.

use std::time::Duration;

use url::Url;

use crate::{cache::ResponseCache, Error};

/// The single static header value sent with every request.
const USER_AGENT: &str = "Mozilla/5.0";

/// Request timeout for API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Performs HTTP GET requests against built API URLs.
///
/// Each call sends exactly one request, with no retries. An optional
/// [`ResponseCache`] can be attached; cached bodies are served for
/// identical URLs until they expire, and successful bodies are stored
/// after each network fetch. Redirects follow the HTTP stack default.
pub struct Transport {
    cache: Option<ResponseCache>,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport {
    /// Creates a transport with no response cache.
    pub fn new() -> Self {
        Self { cache: None }
    }

    /// Creates a transport that caches successful response bodies keyed
    /// by request URL.
    pub fn with_cache(cache: ResponseCache) -> Self {
        Self { cache: Some(cache) }
    }

    /// Fetches `url`, returning the status code and raw body text.
    pub async fn get(&self, url: &Url) -> Result<(u16, String), Error> {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.get(url.as_str()) {
                tracing::debug!("Cache hit for {}", url);
                return Ok((200, body));
            }
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let resp = client.get(url.clone()).send().await.map_err(|e| {
            tracing::error!("Request to {} failed: {}", url, e);
            e
        })?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            e
        })?;

        if status == 200 {
            if let Some(cache) = &self.cache {
                cache.set(url.as_str().to_string(), body.clone());
            }
        }

        Ok((status, body))
    }
}
