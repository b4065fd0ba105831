use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{map_feed_error, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct OgQuery {
    url: String,
}

#[derive(Debug, Serialize)]
pub(super) struct OgResponse {
    image: String,
}

/// Resolve the Open-Graph image for an arbitrary page URL.
pub(super) async fn resolve(
    State(state): State<AppState>,
    Query(query): Query<OgQuery>,
) -> Result<Json<OgResponse>, ApiError> {
    let url = reqwest::Url::parse(&query.url)
        .map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, format!("invalid url: {e}")))?;

    let image = pospress_feed::resolve_image(state.pipeline.client(), url.as_str())
        .await
        .map_err(|e| map_feed_error(&e))?;

    Ok(Json(OgResponse { image }))
}
