//! VADER-style polarity scoring over the compiled-in lexicon.

use crate::lexicon::{booster_weight, is_negation, valence};
use crate::types::SentimentScore;

/// Normalization constant for the compound score: `s / sqrt(s^2 + ALPHA)`.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Scalar applied to a valence when a negation precedes it.
const NEGATION_SCALAR: f64 = -0.74;

/// Booster damping by distance from the sentiment word (1, 2, 3 tokens back).
const BOOSTER_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

/// How far back a booster or negation can reach, in tokens.
const CONTEXT_WINDOW: usize = 3;

/// Score a text string for sentiment polarity.
///
/// Tokens are lowercased and stripped of leading/trailing punctuation, then
/// matched against the lexicon. A booster within the three preceding tokens
/// scales the hit's intensity; a negation within the same window flips it
/// (`* -0.74`). The `compound` value is the damped-normalized valence sum;
/// the three category intensities are the VADER proportions and always sum
/// to 1.0 for non-empty input.
///
/// Total over all inputs: the empty string, pure whitespace, non-ASCII text
/// and HTML-bearing text all produce a valid score. Text with no lexicon
/// hits (including the empty string) comes back fully neutral. Scoring is
/// deterministic — identical input yields a bit-identical score.
#[must_use]
pub fn score(text: &str) -> SentimentScore {
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect();

    let mut valences: Vec<f64> = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        let mut v = valence(token);
        if v != 0.0 {
            v = apply_context(v, i, &tokens);
        }
        valences.push(v);
    }

    let sum: f64 = valences.iter().sum();
    let compound = if valences.is_empty() {
        0.0
    } else {
        (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
    };

    // Category proportions: each positive hit contributes its valence + 1,
    // each negative hit its magnitude + 1, each neutral token exactly 1.
    let mut pos_sum = 0.0_f64;
    let mut neg_sum = 0.0_f64;
    let mut neu_count = 0.0_f64;
    for &v in &valences {
        if v > 0.0 {
            pos_sum += v + 1.0;
        } else if v < 0.0 {
            neg_sum += v.abs() + 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    let total = pos_sum + neg_sum + neu_count;
    if total == 0.0 {
        return SentimentScore::neutral();
    }

    SentimentScore {
        negative: neg_sum / total,
        neutral: neu_count / total,
        positive: pos_sum / total,
        compound,
    }
}

/// Adjust a sentiment hit for boosters and negations in the preceding window.
///
/// Boosters accumulate (damped with distance); at most one negation applies.
fn apply_context(mut v: f64, index: usize, tokens: &[String]) -> f64 {
    let mut negated = false;
    for distance in 1..=CONTEXT_WINDOW {
        if distance > index {
            break;
        }
        let preceding = &tokens[index - distance];
        if let Some(weight) = booster_weight(preceding) {
            let adjustment = weight * BOOSTER_DAMPING[distance - 1];
            if v > 0.0 {
                v += adjustment;
            } else {
                v -= adjustment;
            }
        }
        if !negated && is_negation(preceding) {
            v *= NEGATION_SCALAR;
            negated = true;
        }
    }
    v
}
