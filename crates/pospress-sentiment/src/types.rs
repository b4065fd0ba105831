use serde::{Deserialize, Serialize};

/// Polarity intensities for one piece of text.
///
/// `negative`, `neutral` and `positive` are proportions in `[0.0, 1.0]` that
/// sum to 1.0 (within float rounding). `compound` is the normalized valence
/// sum in `[-1.0, 1.0]` and is not a linear combination of the other three.
///
/// Wire field names (`neg`/`neu`/`pos`/`compound`) match what API consumers
/// already expect from the VADER score shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    #[serde(rename = "neg")]
    pub negative: f64,
    #[serde(rename = "neu")]
    pub neutral: f64,
    #[serde(rename = "pos")]
    pub positive: f64,
    pub compound: f64,
}

impl SentimentScore {
    /// The score of text with no emotional content: fully neutral.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            negative: 0.0,
            neutral: 1.0,
            positive: 0.0,
            compound: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_vader_field_names() {
        let score = SentimentScore::neutral();
        let json = serde_json::to_value(score).expect("serialize");
        assert!(json.get("neg").is_some(), "expected `neg` field");
        assert!(json.get("neu").is_some(), "expected `neu` field");
        assert!(json.get("pos").is_some(), "expected `pos` field");
        assert!(json.get("compound").is_some(), "expected `compound` field");
        assert!(
            json.get("neutral").is_none(),
            "long field names must not leak onto the wire"
        );
    }
}
