//! Background job scheduler.
//!
//! Registers the periodic feed-refresh job at server startup: on each tick
//! the storage-variant pipeline runs for the configured region and every
//! produced record is appended to the store. Job failures are logged, never
//! propagated — the scheduled run and HTTP-triggered runs are independent
//! invocations of the same pipeline and are not coordinated.

use std::sync::Arc;

use sqlx::PgPool;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use pospress_core::AppConfig;
use pospress_feed::{Category, FeedPipeline};

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive for
/// the lifetime of the process. Dropping it shuts down all scheduled jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised or
/// started, or if the configured cron expression is invalid.
pub async fn build_scheduler(
    pool: PgPool,
    pipeline: Arc<FeedPipeline>,
    config: &AppConfig,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;
    register_feed_refresh_job(&scheduler, pool, pipeline, config).await?;
    scheduler.start().await?;
    Ok(scheduler)
}

/// Register the recurring storage-variant refresh job.
async fn register_feed_refresh_job(
    scheduler: &JobScheduler,
    pool: PgPool,
    pipeline: Arc<FeedPipeline>,
    config: &AppConfig,
) -> Result<(), JobSchedulerError> {
    let cron = config.refresh_cron.clone();
    let region: Arc<str> = config.refresh_region.as_str().into();
    let pool = Arc::new(pool);

    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let pool = Arc::clone(&pool);
        let pipeline = Arc::clone(&pipeline);
        let region = Arc::clone(&region);

        Box::pin(async move {
            tracing::info!(region = %region, "scheduler: starting feed refresh run");
            run_feed_refresh(&pool, &pipeline, &region).await;
            tracing::info!(region = %region, "scheduler: feed refresh run complete");
        })
    })?;

    scheduler.add(job).await?;
    tracing::info!(cron = %config.refresh_cron, region = %config.refresh_region, "scheduler: registered feed refresh job");
    Ok(())
}

/// One refresh run: enrich the feed and append every record to the store.
///
/// All errors are logged rather than propagated so a bad tick never takes
/// the scheduler down. Records that fail to insert are skipped individually.
async fn run_feed_refresh(pool: &PgPool, pipeline: &FeedPipeline, region: &str) {
    let category = match Category::parse(region) {
        Ok(category) => category,
        Err(e) => {
            tracing::error!(region = %region, error = %e, "scheduler: configured refresh region is invalid");
            return;
        }
    };

    let articles = match pipeline.run(&category).await {
        Ok(articles) => articles,
        Err(e) => {
            tracing::error!(region = %region, error = %e, "scheduler: feed refresh fetch failed");
            return;
        }
    };

    let mut stored = 0_usize;
    for article in articles {
        let record = article.into_stored(category.as_str());
        match pospress_db::insert_scored_article(pool, &record).await {
            Ok(_) => stored += 1,
            Err(e) => {
                tracing::warn!(url = %record.item_url, error = %e, "scheduler: failed to store article");
            }
        }
    }

    tracing::info!(region = %region, stored, "scheduler: stored refreshed articles");
}
