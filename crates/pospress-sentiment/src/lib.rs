//! Lexicon-based polarity scoring for news headlines and summaries.
//!
//! The lexicon and weighting rules are compiled into the binary as `const`
//! tables, so scoring needs no I/O and no per-call setup. [`score`] is total:
//! every input — empty, non-ASCII, HTML-bearing — produces a valid
//! [`SentimentScore`].

mod lexicon;
mod scorer;
mod types;

pub use scorer::score;
pub use types::SentimentScore;
