use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::ApiError;
use crate::AppState;

/// GET /api/skills - all skills, oldest first
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let rows = state
        .upstream
        .select_ordered("skills", "created_at.asc")
        .await
        .map_err(|e| ApiError::from_upstream("Failed to fetch skills", e))?;
    Ok(Json(rows))
}
