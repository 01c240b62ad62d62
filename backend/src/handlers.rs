// Handlers for the trail API endpoints
// Every handler borrows the shared read-only store from AppState.

use axum::{
    extract::{OriginalUri, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::{SecondsFormat, Utc};
use shared::{ApiIndex, HealthStatus};

use crate::cors::WithoutCors;
use crate::error::AppError;
use crate::gpx_export::{encode_trail_as_gpx, GPX_CONTENT_TYPE};
use crate::models::{Trail, TrailDetail};
use crate::AppState;

/// Trail served by `/api/gpx`.
pub const GPX_TRAIL_ID: &str = "1";

pub const API_TITLE: &str = "思源啞口登山步道 API";

pub const ENDPOINTS: [&str; 4] = [
    "/api/trails - Get all trails",
    "/api/trail/{id} - Get trail coordinates",
    "/api/gpx - Get GPX format",
    "/api/health - Health check",
];

/// GET /api/health
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// GET /api/trails - List all trails, newest first
pub async fn list_trails(State(state): State<AppState>) -> Result<Json<Vec<Trail>>, AppError> {
    let trails = state.db.list_trails().await?;
    Ok(Json(trails))
}

/// GET /api/trail/{id} - Trail metadata plus its ordered coordinates
pub async fn get_trail(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<TrailDetail>, AppError> {
    let trail_id = trail_id_from_path(uri.path());
    let trail = state
        .db
        .find_trail(trail_id)
        .await?
        .ok_or(AppError::TrailNotFound)?;
    let coordinates = state.db.trail_coordinates(trail_id).await?;

    Ok(Json(TrailDetail { trail, coordinates }))
}

/// Third `/`-separated segment of a `/api/trail/...` path, still
/// percent-encoded. Empty when the path stops at `/api/trail/`.
pub fn trail_id_from_path(path: &str) -> &str {
    path.split('/').nth(3).unwrap_or_default()
}

/// GET /api/gpx - Default trail as a GPX document
pub async fn export_gpx(State(state): State<AppState>) -> Result<Response, AppError> {
    let trail = state.db.find_trail(GPX_TRAIL_ID).await?;
    let coordinates = state.db.trail_coordinates(GPX_TRAIL_ID).await?;

    let Some(trail) = trail.filter(|_| !coordinates.is_empty()) else {
        tracing::warn!("GPX export requested but trail {} has no data", GPX_TRAIL_ID);
        return Ok(gpx_not_found());
    };

    let document = encode_trail_as_gpx(&trail, &coordinates, Utc::now())?;
    tracing::info!(
        "Exported trail {} as GPX with {} points",
        trail.id,
        coordinates.len()
    );

    Ok(([(CONTENT_TYPE, GPX_CONTENT_TYPE)], document).into_response())
}

/// Plain-text 404 for the GPX route, sent without CORS headers.
fn gpx_not_found() -> Response {
    (StatusCode::NOT_FOUND, Extension(WithoutCors), "Trail not found").into_response()
}

/// Fallback for every unmatched path or method
pub async fn api_index() -> Json<ApiIndex> {
    Json(ApiIndex {
        message: API_TITLE.to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}
