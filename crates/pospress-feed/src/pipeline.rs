//! Feed-enrichment orchestration.

use crate::category::Category;
use crate::client::FeedClient;
use crate::error::FeedError;
use crate::og::resolve_image;
use crate::parse::parse_feed;
use crate::types::{EnrichedArticle, FeedEntry};

/// The feed-enrichment pipeline: one parameterized path from a category to
/// an ordered sequence of enriched article records.
///
/// Each [`run`](FeedPipeline::run) re-fetches and re-scores from scratch;
/// there is no state carried between runs beyond the HTTP client.
pub struct FeedPipeline {
    client: FeedClient,
    feed_url_template: String,
}

impl FeedPipeline {
    /// `feed_url_template` must contain a `{category}` placeholder.
    #[must_use]
    pub fn new(client: FeedClient, feed_url_template: impl Into<String>) -> Self {
        Self {
            client,
            feed_url_template: feed_url_template.into(),
        }
    }

    /// The HTTP client, shared with callers that only need a single fetch
    /// (the direct Open-Graph endpoint).
    #[must_use]
    pub fn client(&self) -> &FeedClient {
        &self.client
    }

    /// Build the feed URL for a validated category.
    #[must_use]
    pub fn feed_url(&self, category: &Category) -> String {
        self.feed_url_template
            .replace("{category}", category.as_str())
    }

    /// Fetch, parse and enrich the feed for `category`.
    ///
    /// Records come back in feed order, one per well-formed entry:
    ///
    /// - an entry missing its title or canonical link is skipped (logged,
    ///   never surfaced to the caller);
    /// - title and summary are scored independently — scoring is total;
    /// - the entry's canonical URL is fetched and its `og:image` resolved;
    ///   any failure there leaves that record's image absent and the run
    ///   continues with the next entry.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] only when the feed itself cannot be fetched or
    /// parsed — that aborts the whole run.
    pub async fn run(&self, category: &Category) -> Result<Vec<EnrichedArticle>, FeedError> {
        let url = self.feed_url(category);
        tracing::info!(category = %category, url = %url, "fetching feed");

        let xml = self.client.fetch_text(&url).await?;
        let items = parse_feed(&xml)?;
        tracing::debug!(category = %category, count = items.len(), "parsed feed items");

        let mut articles = Vec::with_capacity(items.len());
        for item in items {
            let entry = match FeedEntry::from_raw(item) {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(category = %category, error = %e, "skipping malformed feed entry");
                    continue;
                }
            };

            let title_sentiment = pospress_sentiment::score(&entry.title);
            let summary_sentiment = pospress_sentiment::score(&entry.summary);

            let image_url = match resolve_image(&self.client, &entry.id).await {
                Ok(image) => Some(image),
                Err(e) => {
                    tracing::warn!(
                        url = %entry.id,
                        error = %e,
                        "image resolution failed — continuing without image"
                    );
                    None
                }
            };

            articles.push(EnrichedArticle {
                title: entry.title,
                summary: entry.summary,
                title_sentiment,
                summary_sentiment,
                item_url: entry.id,
                image_url,
                published: entry.published,
                published_raw: entry.published_raw,
            });
        }

        tracing::info!(
            category = %category,
            count = articles.len(),
            "feed enrichment complete"
        );
        Ok(articles)
    }
}
