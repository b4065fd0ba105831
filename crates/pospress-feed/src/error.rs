use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("feed entry missing required {field}")]
    MalformedEntry { field: &'static str },

    #[error("no Open Graph image tag found at {url}")]
    MissingImage { url: String },

    #[error("invalid category {category:?}: {reason}")]
    InvalidCategory {
        category: String,
        reason: &'static str,
    },
}

impl FeedError {
    /// True for failures of the outbound fetch itself (network error,
    /// timeout, non-success status) as opposed to content problems.
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            FeedError::Http(_) | FeedError::UnexpectedStatus { .. }
        )
    }
}
