//! Integration tests for the `scored_articles` queries.
//!
//! Each test gets a fresh database via `#[sqlx::test]` with the workspace
//! migrations applied.

use pospress_db::{insert_scored_article, list_strong, list_top_positive};
use pospress_feed::StoredArticle;
use pospress_sentiment::SentimentScore;

fn score(compound: f64) -> SentimentScore {
    SentimentScore {
        negative: 0.0,
        neutral: 1.0,
        positive: 0.0,
        compound,
    }
}

fn article(slug: &str, title_compound: f64, summary_compound: f64) -> StoredArticle {
    StoredArticle {
        title: format!("Headline {slug}"),
        summary: format!("Summary for {slug}."),
        vader_title: score(title_compound),
        vader_summary: score(summary_compound),
        item_url: format!("https://www.test.example/news/{slug}"),
        image_url: Some(format!("https://cdn.test.example/{slug}.jpg")),
        published: Some("Mon, 22 May 2023 06:04:43 GMT".to_string()),
        source: "bbc".to_string(),
        region: "england".to_string(),
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn insert_returns_generated_id_and_round_trips(pool: sqlx::PgPool) {
    let stored = article("round-trip", 0.4, 0.8);
    let id = insert_scored_article(&pool, &stored)
        .await
        .expect("insert should succeed");
    assert!(id > 0);

    let rows = list_top_positive(&pool, 0.75)
        .await
        .expect("query should succeed");
    assert_eq!(rows.len(), 1);
    let got = rows.into_iter().next().unwrap().into_stored_article();
    assert_eq!(got, stored);
}

#[sqlx::test(migrations = "../../migrations")]
async fn inserts_are_append_only(pool: sqlx::PgPool) {
    let stored = article("duplicate", 0.6, 0.9);
    insert_scored_article(&pool, &stored).await.expect("first insert");
    insert_scored_article(&pool, &stored).await.expect("second insert");

    let rows = list_top_positive(&pool, 0.75).await.expect("query");
    assert_eq!(
        rows.len(),
        2,
        "same item_url twice must produce two rows — no dedup key"
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn top_positive_threshold_is_strict(pool: sqlx::PgPool) {
    insert_scored_article(&pool, &article("well-above", 0.0, 0.9))
        .await
        .expect("insert");
    insert_scored_article(&pool, &article("exactly-at", 0.0, 0.75))
        .await
        .expect("insert");
    insert_scored_article(&pool, &article("below", 0.0, 0.2))
        .await
        .expect("insert");
    insert_scored_article(&pool, &article("negative", 0.0, -0.6))
        .await
        .expect("insert");

    let rows = list_top_positive(&pool, 0.75).await.expect("query");
    assert_eq!(rows.len(), 1, "only the strictly-above row qualifies");
    for row in &rows {
        assert!(
            row.summary_compound > 0.75,
            "returned row with summary_compound {} <= 0.75",
            row.summary_compound
        );
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn strong_query_requires_both_thresholds(pool: sqlx::PgPool) {
    insert_scored_article(&pool, &article("both-strong", 0.7, 0.8))
        .await
        .expect("insert");
    insert_scored_article(&pool, &article("title-only", 0.7, 0.1))
        .await
        .expect("insert");
    insert_scored_article(&pool, &article("summary-only", 0.1, 0.8))
        .await
        .expect("insert");
    insert_scored_article(&pool, &article("exactly-at-both", 0.5, 0.5))
        .await
        .expect("insert");

    let rows = list_strong(&pool, 0.5, 0.5).await.expect("query");
    assert_eq!(
        rows.len(),
        2,
        "both-strong and exactly-at-both qualify (thresholds are inclusive)"
    );
    for row in &rows {
        assert!(row.summary_compound >= 0.5);
        assert!(row.title_compound >= 0.5);
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn empty_result_is_ok_not_error(pool: sqlx::PgPool) {
    let rows = list_top_positive(&pool, 0.75).await.expect("query");
    assert!(rows.is_empty(), "no rows is a plain empty Vec, not an error");

    let rows = list_strong(&pool, 0.5, 0.5).await.expect("query");
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn absent_image_round_trips_as_none(pool: sqlx::PgPool) {
    let mut stored = article("no-image", 0.6, 0.9);
    stored.image_url = None;
    insert_scored_article(&pool, &stored).await.expect("insert");

    let rows = list_top_positive(&pool, 0.75).await.expect("query");
    assert_eq!(rows.len(), 1);
    assert!(rows[0].image_url.is_none());
}
