//! RSS item extraction.
//!
//! Event-based parse of an RSS 2.0 feed body into [`RawItem`]s. Fields that
//! are absent come back as empty strings; validation (which fields are
//! required, which entry is skipped) is the pipeline's job, not the
//! parser's. Description text is kept verbatim — any markup the feed ships
//! inside it travels through to scoring and serving untouched.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::FeedError;

/// One `<item>` as it appeared in the feed, before validation.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawItem {
    pub title: String,
    pub description: String,
    pub link: String,
    pub guid: String,
    pub pub_date: String,
}

/// Parse an RSS feed body into raw items, in document order.
///
/// Handles both plain text and CDATA content for all extracted fields.
/// Text nodes inside `<description>` are accumulated so nested inline tags
/// don't truncate the summary.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] if the XML is malformed.
pub(crate) fn parse_feed(xml: &str) -> Result<Vec<RawItem>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut current = RawItem::default();
    let mut in_item = false;
    let mut in_description = false;
    let mut current_tag = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("").to_string();
                if name == "item" {
                    in_item = true;
                    in_description = false;
                    current = RawItem::default();
                } else if name == "description" && in_item {
                    in_description = true;
                }
                current_tag = name;
            }
            Ok(Event::End(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("");
                if name == "description" {
                    in_description = false;
                }
                if name == "item" && in_item {
                    in_item = false;
                    items.push(std::mem::take(&mut current));
                }
            }
            Ok(Event::Text(e)) => {
                if in_item {
                    let text = e.unescape().unwrap_or_default().into_owned();
                    if in_description {
                        // Accumulate all text nodes inside <description>,
                        // including those emitted after nested tags like <b>.
                        if !current.description.is_empty() {
                            current.description.push(' ');
                        }
                        current.description.push_str(&text);
                    } else {
                        match current_tag.as_str() {
                            "title" => current.title = text,
                            "link" => current.link = text,
                            "guid" => current.guid = text,
                            "pubDate" => current.pub_date = text,
                            _ => {}
                        }
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if in_item {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    if in_description {
                        current.description = text;
                    } else {
                        match current_tag.as_str() {
                            "title" => current.title = text,
                            "link" => current.link = text,
                            "guid" => current.guid = text,
                            "pubDate" => current.pub_date = text,
                            _ => {}
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::Xml(e)),
            _ => {}
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Local News</title>
    <item>
      <title><![CDATA[Manchester Arena attack: Young survivors lack support, study finds]]></title>
      <description><![CDATA[Some young Manchester Arena attack survivors have not received professional support, research finds.]]></description>
      <link>https://www.test.example/news/uk-england-manchester-65644397?at_medium=RSS</link>
      <guid isPermaLink="false">https://www.test.example/news/uk-england-manchester-65644397</guid>
      <pubDate>Mon, 22 May 2023 06:04:43 GMT</pubDate>
    </item>
    <item>
      <title>Plain title without CDATA</title>
      <description>A plain &amp; simple description.</description>
      <link>https://www.test.example/news/plain-item</link>
      <guid>https://www.test.example/news/plain-item-guid</guid>
      <pubDate>Mon, 22 May 2023 09:34:58 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_items_in_document_order() {
        let items = parse_feed(SAMPLE_RSS).expect("should parse valid RSS");
        assert_eq!(items.len(), 2, "expected 2 items, got {}", items.len());
        assert!(items[0].title.starts_with("Manchester Arena attack"));
        assert_eq!(items[1].title, "Plain title without CDATA");
    }

    #[test]
    fn extracts_guid_and_link_separately() {
        let items = parse_feed(SAMPLE_RSS).expect("should parse valid RSS");
        assert_eq!(
            items[0].guid,
            "https://www.test.example/news/uk-england-manchester-65644397"
        );
        assert!(items[0].link.contains("at_medium=RSS"));
        assert_eq!(items[1].guid, "https://www.test.example/news/plain-item-guid");
    }

    #[test]
    fn extracts_pub_date_verbatim() {
        let items = parse_feed(SAMPLE_RSS).expect("should parse valid RSS");
        assert_eq!(items[0].pub_date, "Mon, 22 May 2023 06:04:43 GMT");
    }

    #[test]
    fn unescapes_entities_in_plain_text() {
        let items = parse_feed(SAMPLE_RSS).expect("should parse valid RSS");
        assert_eq!(items[1].description, "A plain & simple description.");
    }

    #[test]
    fn missing_fields_come_back_empty() {
        let xml = r#"<rss version="2.0"><channel><item>
            <title>Only a title</title>
        </item></channel></rss>"#;
        let items = parse_feed(xml).expect("should parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Only a title");
        assert!(items[0].link.is_empty());
        assert!(items[0].guid.is_empty());
        assert!(items[0].pub_date.is_empty());
        assert!(items[0].description.is_empty());
    }

    #[test]
    fn empty_feed_returns_empty_vec() {
        let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel></channel></rss>"#;
        let items = parse_feed(xml).expect("should parse empty RSS");
        assert!(items.is_empty());
    }

    #[test]
    fn truncated_xml_is_handled_gracefully() {
        let xml = "<rss><channel><item><title>Unclosed";
        // quick-xml reads until EOF so this may succeed with no complete items.
        match parse_feed(xml) {
            Ok(items) => assert!(items.is_empty()),
            Err(FeedError::Xml(_)) => {}
            Err(e) => panic!("unexpected error type: {e}"),
        }
    }
}
