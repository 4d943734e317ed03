//! Instance segmentation endpoints

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::Envelope;
use crate::error::{ApiError, ApiResult};
use crate::services::segmentation::DEFAULT_CLEANUP_HOURS;
use crate::services::{EnvironmentStatus, SegmentationResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationRequest {
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CleanupParams {
    pub hours: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct CleanupResponse {
    pub removed: usize,
}

/// POST /api/segmentation
pub async fn segment_image(
    State(state): State<AppState>,
    payload: Result<Json<SegmentationRequest>, JsonRejection>,
) -> ApiResult<Json<Envelope<SegmentationResult>>> {
    let Json(request) = payload?;
    let image_url = request
        .image_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("imageUrl is required".to_string()))?;

    let result = state.track(state.segmentation.run(image_url.trim()).await).await?;
    Ok(Envelope::data_with_message(result, "Segmentation completed successfully"))
}

/// GET /api/segmentation/environment
pub async fn environment(State(state): State<AppState>) -> Json<Envelope<EnvironmentStatus>> {
    Envelope::data(state.segmentation.check_environment())
}

/// DELETE /api/segmentation/cleanup?hours=N
pub async fn cleanup(
    State(state): State<AppState>,
    Query(params): Query<CleanupParams>,
) -> Json<Envelope<CleanupResponse>> {
    let hours = params.hours.unwrap_or(DEFAULT_CLEANUP_HOURS);
    let removed = state.segmentation.cleanup(hours).await;
    Envelope::data_with_message(
        CleanupResponse { removed },
        format!("Removed {} segmentation files older than {}h", removed, hours),
    )
}

/// Build segmentation routes
pub fn segmentation_routes() -> Router<AppState> {
    Router::new()
        .route("/api/segmentation", post(segment_image))
        .route("/api/segmentation/environment", get(environment))
        .route("/api/segmentation/cleanup", delete(cleanup))
}
