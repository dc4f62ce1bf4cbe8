use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::auth::AdminUser;
use crate::error::ApiError;
use crate::types::SkillCreate;
use crate::AppState;

/// POST /api/skills - insert a skill, answer the stored representation
pub async fn create(
    State(state): State<AppState>,
    _user: AdminUser,
    Json(skill): Json<SkillCreate>,
) -> Result<Json<Value>, ApiError> {
    let created = state
        .upstream
        .insert("skills", &skill)
        .await
        .map_err(|e| ApiError::from_upstream("Failed to create skill", e))?;
    Ok(Json(created))
}

/// DELETE /api/skills/:id
pub async fn delete(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .upstream
        .delete_by_id("skills", &id)
        .await
        .map_err(|e| ApiError::from_upstream("Failed to delete skill", e))?;
    Ok(Json(json!({"status": "deleted"})))
}
