use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::auth::AdminUser;
use crate::error::ApiError;
use crate::types::{ProjectCreate, ProjectUpdate};
use crate::AppState;

/// POST /api/projects - insert a project, answer the stored representation
pub async fn create(
    State(state): State<AppState>,
    _user: AdminUser,
    Json(project): Json<ProjectCreate>,
) -> Result<Json<Value>, ApiError> {
    let created = state
        .upstream
        .insert("projects", &project)
        .await
        .map_err(|e| ApiError::from_upstream("Failed to create project", e))?;
    Ok(Json(created))
}

/// PUT /api/projects/:id - partial update; only caller-supplied fields are
/// forwarded. An upstream acknowledgement without a body answers a plain
/// status instead of a representation.
pub async fn update(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(id): Path<String>,
    Json(patch): Json<ProjectUpdate>,
) -> Result<Json<Value>, ApiError> {
    let updated = state
        .upstream
        .update_by_id("projects", &id, &patch)
        .await
        .map_err(|e| ApiError::from_upstream("Failed to update project", e))?;
    Ok(Json(updated.unwrap_or_else(|| json!({"status": "updated"}))))
}

/// DELETE /api/projects/:id
pub async fn delete(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .upstream
        .delete_by_id("projects", &id)
        .await
        .map_err(|e| ApiError::from_upstream("Failed to delete project", e))?;
    Ok(Json(json!({"status": "deleted"})))
}
