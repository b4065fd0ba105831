use crate::error::FeedError;

/// A validated feed category ("england", "technology", ...).
///
/// The raw value is substituted directly into the feed URL template, so it
/// is restricted to a safe character set before any URL is built: after
/// lowercasing, only `a-z`, `0-9`, `-` and `_` are accepted. Path
/// separators, dots and URL metacharacters are rejected outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category(String);

impl Category {
    /// Validate and lowercase a raw category string.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidCategory`] when the value is empty or
    /// contains characters outside the allow-list.
    pub fn parse(raw: &str) -> Result<Self, FeedError> {
        let lowered = raw.trim().to_lowercase();
        if lowered.is_empty() {
            return Err(FeedError::InvalidCategory {
                category: raw.to_string(),
                reason: "category must not be empty",
            });
        }
        if !lowered
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(FeedError::InvalidCategory {
                category: raw.to_string(),
                reason: "only lowercase letters, digits, '-' and '_' are allowed",
            });
        }
        Ok(Self(lowered))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_category() {
        let c = Category::parse("england").expect("valid category");
        assert_eq!(c.as_str(), "england");
    }

    #[test]
    fn lowercases_input() {
        let c = Category::parse("Technology").expect("valid category");
        assert_eq!(c.as_str(), "technology");
    }

    #[test]
    fn accepts_hyphenated_category() {
        assert!(Category::parse("science-and-environment").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            Category::parse("  "),
            Err(FeedError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn rejects_path_traversal() {
        assert!(matches!(
            Category::parse("../admin"),
            Err(FeedError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn rejects_path_separator() {
        assert!(matches!(
            Category::parse("uk/england"),
            Err(FeedError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn rejects_url_metacharacters() {
        for raw in ["england?x=1", "england#frag", "eng land", "england\u{0}"] {
            assert!(
                matches!(Category::parse(raw), Err(FeedError::InvalidCategory { .. })),
                "expected rejection for {raw:?}"
            );
        }
    }
}
