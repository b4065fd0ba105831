//! Feed-enrichment pipeline: fetch a syndicated news feed, score each
//! entry's title and summary for sentiment, resolve a representative
//! Open-Graph image per entry, and emit validated article records in feed
//! order.

mod category;
mod client;
mod error;
mod og;
mod parse;
mod pipeline;
mod retry;
mod types;

pub use category::Category;
pub use client::FeedClient;
pub use error::FeedError;
pub use og::resolve_image;
pub use pipeline::FeedPipeline;
pub use types::{EnrichedArticle, FeedEntry, LiveArticle, StoredArticle, SOURCE_TAG};
