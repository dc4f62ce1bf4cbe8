use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::error::ApiError;
use crate::AppState;

/// GET /api/projects - all projects, newest first
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let rows = state
        .upstream
        .select_ordered("projects", "created_at.desc")
        .await
        .map_err(|e| ApiError::from_upstream("Failed to fetch projects", e))?;
    Ok(Json(rows))
}

/// GET /api/projects/:id - single project, or 404 when the id filter
/// matches nothing (the upstream itself never 404s on a filter).
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let row = state
        .upstream
        .select_by_id("projects", &id)
        .await
        .map_err(|e| ApiError::from_upstream("Failed to fetch project", e))?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;
    Ok(Json(row))
}
