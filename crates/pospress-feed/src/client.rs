//! HTTP client shared by the feed fetch and the per-article page fetch.

use std::time::Duration;

use reqwest::Client;

use crate::error::FeedError;
use crate::retry::retry_with_backoff;

/// Outbound HTTP client with bounded timeouts and a retry policy.
///
/// Every request carries the configured `User-Agent` and is capped by the
/// request timeout; exceeding it surfaces as a fetch error. Transient
/// failures (network errors, HTTP 429/5xx) are retried with exponential
/// backoff up to `max_retries` additional attempts.
pub struct FeedClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl FeedClient {
    /// Creates a `FeedClient` with configured timeout, `User-Agent`, and retry policy.
    ///
    /// `max_retries` set to `0` disables retries.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches `url` and returns the response body as text.
    ///
    /// # Errors
    ///
    /// - [`FeedError::UnexpectedStatus`] — non-2xx status (5xx and 429 are
    ///   retried first, other statuses are not).
    /// - [`FeedError::Http`] — network or TLS failure, or timeout, after all
    ///   retries are exhausted.
    pub async fn fetch_text(&self, url: &str) -> Result<String, FeedError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.to_owned();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(
                        reqwest::header::ACCEPT,
                        "application/rss+xml, application/xml;q=0.9, text/html;q=0.8, */*;q=0.7",
                    )
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(FeedError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                Ok(response.text().await?)
            }
        })
        .await
    }
}
