mod og;
mod vader;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use pospress_feed::{FeedError, FeedPipeline};

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub pipeline: Arc<FeedPipeline>,
}

/// Structured error envelope: every user-visible failure is `{"error": msg}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Map pipeline failures onto HTTP statuses: bad input is the caller's
/// fault, upstream fetch failures are a gateway problem, the rest is ours.
pub(super) fn map_feed_error(error: &FeedError) -> ApiError {
    match error {
        FeedError::InvalidCategory { .. } => {
            ApiError::new(StatusCode::BAD_REQUEST, error.to_string())
        }
        FeedError::MissingImage { .. } => ApiError::new(StatusCode::NOT_FOUND, error.to_string()),
        e if e.is_fetch_failure() => {
            tracing::error!(error = %error, "upstream fetch failed");
            ApiError::new(StatusCode::BAD_GATEWAY, error.to_string())
        }
        _ => {
            tracing::error!(error = %error, "feed processing failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}

pub(super) fn map_db_error(error: &pospress_db::DbError) -> ApiError {
    tracing::error!(error = %error, "database query failed");
    ApiError::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "database query failed",
    )
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthCheck {
    healthcheck: &'static str,
}

async fn health() -> Json<HealthCheck> {
    Json(HealthCheck {
        healthcheck: "Everything OK!",
    })
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/healthcheck", get(health))
        .route("/api/v1/vader/live/{category}", get(vader::live))
        .route("/api/v1/vader/score/{text}", get(vader::score_text))
        .route("/api/v1/vader/store/{region}", get(vader::store))
        .route("/api/v1/vader/summary/pos/top", get(vader::top_positive))
        .route("/api/v1/vader/all", get(vader::all_strong))
        .route("/api/v1/og/", post(og::resolve))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}
