//! Open-Graph image resolution.
//!
//! Fetches an article page and pulls the `og:image` meta property out of the
//! returned document with tag-level regex scanning. Relative image URLs are
//! absolutised against the page URL.

use std::sync::LazyLock;

use regex::Regex;

use crate::client::FeedClient;
use crate::error::FeedError;

static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid regex"));

/// Resolve the representative image for an article page.
///
/// One outbound GET per call; no caching — repeated calls re-fetch.
///
/// # Errors
///
/// - [`FeedError::Http`] / [`FeedError::UnexpectedStatus`] — the page fetch
///   failed, timed out, or returned a non-success status.
/// - [`FeedError::MissingImage`] — the page was fetched but declares no
///   usable `og:image` property.
pub async fn resolve_image(client: &FeedClient, page_url: &str) -> Result<String, FeedError> {
    let body = client.fetch_text(page_url).await?;
    extract_og_image(page_url, &body).ok_or_else(|| FeedError::MissingImage {
        url: page_url.to_owned(),
    })
}

/// Extract the `og:image` URL from an HTML document, absolutised against
/// `base_url`. Returns `None` when the tag is absent or its content is empty.
pub(crate) fn extract_og_image(base_url: &str, html: &str) -> Option<String> {
    find_meta_content(html, "property", "og:image")
        .filter(|content| !content.is_empty())
        .and_then(|raw| absolutize_url(base_url, &raw))
}

fn find_meta_content(html: &str, key_attr: &str, key_value: &str) -> Option<String> {
    META_TAG_RE.find_iter(html).find_map(|m| {
        let tag = m.as_str();
        let key = extract_attr(tag, key_attr)?;
        if key.eq_ignore_ascii_case(key_value) {
            extract_attr(tag, "content")
        } else {
            None
        }
    })
}

fn extract_attr(tag: &str, attr: &str) -> Option<String> {
    let pattern = format!(r#"(?is)\b{}\s*=\s*["']([^"']+)["']"#, regex::escape(attr));
    let re = Regex::new(&pattern).expect("valid attr regex");
    re.captures(tag)
        .and_then(|c| c.get(1).map(|m| m.as_str().trim().to_string()))
}

fn absolutize_url(base_url: &str, candidate: &str) -> Option<String> {
    let candidate = candidate.replace("&amp;", "&");
    let base = reqwest::Url::parse(base_url).ok()?;
    base.join(&candidate).ok().map(|u| u.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_og_image_from_meta_tag() {
        let html = r#"<html><head>
            <meta property="og:image" content="https://cdn.test.example/article-hero.jpg">
        </head></html>"#;
        let got = extract_og_image("https://www.test.example/news/item", html);
        assert_eq!(
            got.as_deref(),
            Some("https://cdn.test.example/article-hero.jpg")
        );
    }

    #[test]
    fn handles_reversed_attribute_order() {
        let html =
            r#"<meta content="https://cdn.test.example/hero.png" property="og:image" />"#;
        let got = extract_og_image("https://www.test.example/news/item", html);
        assert_eq!(got.as_deref(), Some("https://cdn.test.example/hero.png"));
    }

    #[test]
    fn absolutizes_relative_image_url() {
        let html = r#"<meta property="og:image" content="/media/hero.jpg">"#;
        let got = extract_og_image("https://www.test.example/news/item", html);
        assert_eq!(
            got.as_deref(),
            Some("https://www.test.example/media/hero.jpg")
        );
    }

    #[test]
    fn missing_tag_returns_none() {
        let html = r#"<html><head><title>No preview image here</title></head></html>"#;
        assert!(extract_og_image("https://www.test.example/news/item", html).is_none());
    }

    #[test]
    fn other_og_properties_are_not_mistaken_for_the_image() {
        let html = r#"
            <meta property="og:title" content="A headline">
            <meta property="og:url" content="https://www.test.example/news/item">
        "#;
        assert!(extract_og_image("https://www.test.example/news/item", html).is_none());
    }

    #[test]
    fn first_og_image_wins_when_duplicated() {
        let html = r#"
            <meta property="og:image" content="https://cdn.test.example/first.jpg">
            <meta property="og:image" content="https://cdn.test.example/second.jpg">
        "#;
        let got = extract_og_image("https://www.test.example/news/item", html);
        assert_eq!(got.as_deref(), Some("https://cdn.test.example/first.jpg"));
    }
}
