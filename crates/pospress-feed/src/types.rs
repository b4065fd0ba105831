//! Article data contracts: the validated feed entry, the enriched record
//! the pipeline emits, and the two presentation shapes built from it.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use pospress_sentiment::SentimentScore;

use crate::error::FeedError;
use crate::parse::RawItem;

/// Fixed source tag written on every stored record.
pub const SOURCE_TAG: &str = "bbc";

/// A validated feed entry, ready for enrichment.
///
/// `id` is the entry's canonical URL — the `<guid>` value when present,
/// falling back to `<link>`. Both published-time representations are
/// carried: the verbatim feed string and, where it parses as RFC 2822, the
/// structured timestamp.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub title: String,
    pub summary: String,
    pub id: String,
    pub published_raw: Option<String>,
    pub published: Option<DateTime<FixedOffset>>,
}

impl FeedEntry {
    /// Validate a raw parsed item.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::MalformedEntry`] when the title is missing or
    /// the item carries neither a `<guid>` nor a `<link>`.
    pub(crate) fn from_raw(raw: RawItem) -> Result<Self, FeedError> {
        if raw.title.is_empty() {
            return Err(FeedError::MalformedEntry { field: "title" });
        }
        let id = if raw.guid.is_empty() {
            raw.link
        } else {
            raw.guid
        };
        if id.is_empty() {
            return Err(FeedError::MalformedEntry {
                field: "canonical link",
            });
        }

        let published = DateTime::parse_from_rfc2822(&raw.pub_date).ok();
        let published_raw = if raw.pub_date.is_empty() {
            None
        } else {
            Some(raw.pub_date)
        };

        Ok(Self {
            title: raw.title,
            summary: raw.description,
            id,
            published_raw,
            published,
        })
    }
}

/// The pipeline's output record, one per surviving feed entry.
///
/// Immutable once assembled; re-running the pipeline produces a fresh record
/// for the same `item_url`.
#[derive(Debug, Clone)]
pub struct EnrichedArticle {
    pub title: String,
    pub summary: String,
    pub title_sentiment: SentimentScore,
    pub summary_sentiment: SentimentScore,
    pub item_url: String,
    pub image_url: Option<String>,
    pub published: Option<DateTime<FixedOffset>>,
    pub published_raw: Option<String>,
}

impl EnrichedArticle {
    /// Serving shape: structured published time, UTC on the wire.
    #[must_use]
    pub fn into_live(self) -> LiveArticle {
        LiveArticle {
            title: self.title,
            summary: self.summary,
            vader_title: self.title_sentiment,
            vader_summary: self.summary_sentiment,
            item_url: self.item_url,
            image_url: self.image_url,
            published: self.published.map(|dt| dt.with_timezone(&Utc)),
        }
    }

    /// Storage shape: the feed's raw published string, plus the fixed
    /// source tag and the region the feed was fetched for.
    #[must_use]
    pub fn into_stored(self, region: &str) -> StoredArticle {
        StoredArticle {
            title: self.title,
            summary: self.summary,
            vader_title: self.title_sentiment,
            vader_summary: self.summary_sentiment,
            item_url: self.item_url,
            image_url: self.image_url,
            published: self.published_raw,
            source: SOURCE_TAG.to_string(),
            region: region.to_string(),
        }
    }
}

/// Article record as served by the live API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveArticle {
    pub title: String,
    pub summary: String,
    pub vader_title: SentimentScore,
    pub vader_summary: SentimentScore,
    pub item_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub published: Option<DateTime<Utc>>,
}

/// Article record as persisted (and echoed back by the store queries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredArticle {
    pub title: String,
    pub summary: String,
    pub vader_title: SentimentScore,
    pub vader_summary: SentimentScore,
    pub item_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub published: Option<String>,
    pub source: String,
    pub region: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_item() -> RawItem {
        RawItem {
            title: "A headline".to_string(),
            description: "A summary.".to_string(),
            link: "https://www.test.example/news/item?at_medium=RSS".to_string(),
            guid: "https://www.test.example/news/item".to_string(),
            pub_date: "Mon, 22 May 2023 06:04:43 GMT".to_string(),
        }
    }

    #[test]
    fn guid_is_preferred_over_link() {
        let entry = FeedEntry::from_raw(raw_item()).expect("valid entry");
        assert_eq!(entry.id, "https://www.test.example/news/item");
    }

    #[test]
    fn link_is_the_fallback_identifier() {
        let mut raw = raw_item();
        raw.guid.clear();
        let entry = FeedEntry::from_raw(raw).expect("valid entry");
        assert_eq!(entry.id, "https://www.test.example/news/item?at_medium=RSS");
    }

    #[test]
    fn missing_title_is_malformed() {
        let mut raw = raw_item();
        raw.title.clear();
        assert!(matches!(
            FeedEntry::from_raw(raw),
            Err(FeedError::MalformedEntry { field: "title" })
        ));
    }

    #[test]
    fn missing_guid_and_link_is_malformed() {
        let mut raw = raw_item();
        raw.guid.clear();
        raw.link.clear();
        assert!(matches!(
            FeedEntry::from_raw(raw),
            Err(FeedError::MalformedEntry { .. })
        ));
    }

    #[test]
    fn pub_date_is_parsed_and_kept_verbatim() {
        let entry = FeedEntry::from_raw(raw_item()).expect("valid entry");
        assert_eq!(
            entry.published_raw.as_deref(),
            Some("Mon, 22 May 2023 06:04:43 GMT")
        );
        let parsed = entry.published.expect("should parse RFC 2822");
        assert_eq!(parsed.timestamp(), 1_684_735_483);
    }

    #[test]
    fn unparseable_pub_date_keeps_raw_string_only() {
        let mut raw = raw_item();
        raw.pub_date = "sometime last Tuesday".to_string();
        let entry = FeedEntry::from_raw(raw).expect("valid entry");
        assert!(entry.published.is_none());
        assert_eq!(entry.published_raw.as_deref(), Some("sometime last Tuesday"));
    }

    fn enriched() -> EnrichedArticle {
        let entry = FeedEntry::from_raw(raw_item()).expect("valid entry");
        EnrichedArticle {
            title_sentiment: pospress_sentiment::score(&entry.title),
            summary_sentiment: pospress_sentiment::score(&entry.summary),
            title: entry.title,
            summary: entry.summary,
            item_url: entry.id,
            image_url: Some("https://cdn.test.example/hero.jpg".to_string()),
            published: entry.published,
            published_raw: entry.published_raw,
        }
    }

    #[test]
    fn live_shape_serializes_structured_published_time() {
        let live = enriched().into_live();
        let json = serde_json::to_value(&live).expect("serialize");
        assert_eq!(
            json["published"].as_str(),
            Some("2023-05-22T06:04:43Z"),
            "live shape should carry the parsed timestamp"
        );
        assert!(json["vaderTitle"]["compound"].is_number());
        assert_eq!(
            json["itemUrl"].as_str(),
            Some("https://www.test.example/news/item")
        );
    }

    #[test]
    fn stored_shape_keeps_the_raw_published_string() {
        let stored = enriched().into_stored("england");
        let json = serde_json::to_value(&stored).expect("serialize");
        assert_eq!(
            json["published"].as_str(),
            Some("Mon, 22 May 2023 06:04:43 GMT"),
            "stored shape must not parse the published time"
        );
        assert_eq!(json["source"].as_str(), Some("bbc"));
        assert_eq!(json["region"].as_str(), Some("england"));
    }

    #[test]
    fn absent_image_is_omitted_from_the_wire() {
        let mut art = enriched();
        art.image_url = None;
        let json = serde_json::to_value(&art.into_live()).expect("serialize");
        assert!(
            json.get("imageUrl").is_none(),
            "absent image must be omitted, not null"
        );
    }
}
