//! Database operations for the `scored_articles` table.
//!
//! The table is append-only: there is no unique key on `item_url` and no
//! upsert path, so concurrent pipeline runs may store duplicate rows.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use pospress_feed::StoredArticle;
use pospress_sentiment::SentimentScore;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `scored_articles` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ScoredArticleRow {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub item_url: String,
    pub image_url: Option<String>,
    pub published: Option<String>,
    pub source: String,
    pub region: String,
    pub title_negative: f64,
    pub title_neutral: f64,
    pub title_positive: f64,
    pub title_compound: f64,
    pub summary_negative: f64,
    pub summary_neutral: f64,
    pub summary_positive: f64,
    pub summary_compound: f64,
    pub created_at: DateTime<Utc>,
}

impl ScoredArticleRow {
    /// Rebuild the article record shape the row was flattened from.
    #[must_use]
    pub fn into_stored_article(self) -> StoredArticle {
        StoredArticle {
            title: self.title,
            summary: self.summary,
            vader_title: SentimentScore {
                negative: self.title_negative,
                neutral: self.title_neutral,
                positive: self.title_positive,
                compound: self.title_compound,
            },
            vader_summary: SentimentScore {
                negative: self.summary_negative,
                neutral: self.summary_neutral,
                positive: self.summary_positive,
                compound: self.summary_compound,
            },
            item_url: self.item_url,
            image_url: self.image_url,
            published: self.published,
            source: self.source,
            region: self.region,
        }
    }
}

const SELECT_COLUMNS: &str = "id, title, summary, item_url, image_url, published, source, region, \
     title_negative, title_neutral, title_positive, title_compound, \
     summary_negative, summary_neutral, summary_positive, summary_compound, \
     created_at";

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Insert a scored article and return its generated id. Append-only.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_scored_article(
    pool: &PgPool,
    article: &StoredArticle,
) -> Result<i64, DbError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO scored_articles \
             (title, summary, item_url, image_url, published, source, region, \
              title_negative, title_neutral, title_positive, title_compound, \
              summary_negative, summary_neutral, summary_positive, summary_compound) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
         RETURNING id",
    )
    .bind(&article.title)
    .bind(&article.summary)
    .bind(&article.item_url)
    .bind(&article.image_url)
    .bind(&article.published)
    .bind(&article.source)
    .bind(&article.region)
    .bind(article.vader_title.negative)
    .bind(article.vader_title.neutral)
    .bind(article.vader_title.positive)
    .bind(article.vader_title.compound)
    .bind(article.vader_summary.negative)
    .bind(article.vader_summary.neutral)
    .bind(article.vader_summary.positive)
    .bind(article.vader_summary.compound)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Rows whose summary compound strictly exceeds `threshold`.
///
/// No explicit ordering — callers must not assume a stable order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_top_positive(
    pool: &PgPool,
    threshold: f64,
) -> Result<Vec<ScoredArticleRow>, DbError> {
    let sql = format!("SELECT {SELECT_COLUMNS} FROM scored_articles WHERE summary_compound > $1");
    let rows = sqlx::query_as::<_, ScoredArticleRow>(&sql)
        .bind(threshold)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Rows passing both thresholds: `summary_compound >= summary_threshold`
/// AND `title_compound >= title_threshold` (inclusive).
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_strong(
    pool: &PgPool,
    summary_threshold: f64,
    title_threshold: f64,
) -> Result<Vec<ScoredArticleRow>, DbError> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} FROM scored_articles \
         WHERE summary_compound >= $1 AND title_compound >= $2"
    );
    let rows = sqlx::query_as::<_, ScoredArticleRow>(&sql)
        .bind(summary_threshold)
        .bind(title_threshold)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}
