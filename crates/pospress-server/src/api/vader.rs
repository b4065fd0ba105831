use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use pospress_feed::{Category, LiveArticle, StoredArticle};

use super::{map_db_error, map_feed_error, ApiError, AppState};

/// Strict lower bound on `summary.compound` for the top-positive query.
const TOP_POSITIVE_THRESHOLD: f64 = 0.75;

/// Inclusive bounds for the both-thresholds query.
const STRONG_SUMMARY_THRESHOLD: f64 = 0.5;
const STRONG_TITLE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Serialize)]
pub(super) struct StoreOutcome {
    message: &'static str,
}

/// Either a data envelope or the explicit no-records signal.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(super) enum NewsQueryResponse {
    Data { data: Vec<StoredArticle> },
    Message { message: &'static str },
}

impl NewsQueryResponse {
    fn from_rows(rows: Vec<pospress_db::ScoredArticleRow>) -> Self {
        if rows.is_empty() {
            NewsQueryResponse::Message {
                message: "No news found",
            }
        } else {
            NewsQueryResponse::Data {
                data: rows
                    .into_iter()
                    .map(pospress_db::ScoredArticleRow::into_stored_article)
                    .collect(),
            }
        }
    }
}

/// Run the pipeline for a category and serve the live shape.
pub(super) async fn live(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<LiveArticle>>, ApiError> {
    let category = Category::parse(&category).map_err(|e| map_feed_error(&e))?;
    let articles = state
        .pipeline
        .run(&category)
        .await
        .map_err(|e| map_feed_error(&e))?;

    Ok(Json(
        articles
            .into_iter()
            .map(pospress_feed::EnrichedArticle::into_live)
            .collect(),
    ))
}

/// Score arbitrary text. Total — this endpoint cannot fail.
pub(super) async fn score_text(
    Path(text): Path<String>,
) -> Json<pospress_sentiment::SentimentScore> {
    Json(pospress_sentiment::score(&text))
}

/// Run the pipeline for a region and persist every record (storage shape).
pub(super) async fn store(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<StoreOutcome>, ApiError> {
    let category = Category::parse(&region).map_err(|e| map_feed_error(&e))?;
    let articles = state
        .pipeline
        .run(&category)
        .await
        .map_err(|e| map_feed_error(&e))?;

    let count = articles.len();
    for article in articles {
        let record = article.into_stored(category.as_str());
        pospress_db::insert_scored_article(&state.pool, &record)
            .await
            .map_err(|e| map_db_error(&e))?;
    }
    tracing::info!(region = %category, count, "stored scored articles");

    Ok(Json(StoreOutcome {
        message: "successful",
    }))
}

/// Stored records whose summary compound strictly exceeds 0.75.
pub(super) async fn top_positive(
    State(state): State<AppState>,
) -> Result<Json<NewsQueryResponse>, ApiError> {
    let rows = pospress_db::list_top_positive(&state.pool, TOP_POSITIVE_THRESHOLD)
        .await
        .map_err(|e| map_db_error(&e))?;
    Ok(Json(NewsQueryResponse::from_rows(rows)))
}

/// Stored records passing both compound thresholds.
pub(super) async fn all_strong(
    State(state): State<AppState>,
) -> Result<Json<NewsQueryResponse>, ApiError> {
    let rows = pospress_db::list_strong(
        &state.pool,
        STRONG_SUMMARY_THRESHOLD,
        STRONG_TITLE_THRESHOLD,
    )
    .await
    .map_err(|e| map_db_error(&e))?;
    Ok(Json(NewsQueryResponse::from_rows(rows)))
}
