use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::types::ContactMessage;
use crate::AppState;

/// POST /api/contact - store a visitor message upstream. The caller only
/// learns that the message was accepted, never the stored row.
pub async fn submit(
    State(state): State<AppState>,
    Json(msg): Json<ContactMessage>,
) -> Result<Json<Value>, ApiError> {
    state
        .upstream
        .insert("messages", &msg)
        .await
        .map_err(|e| ApiError::from_upstream("Failed to save message", e))?;

    Ok(Json(json!({
        "status": "ok",
        "message": "Message sent successfully",
    })))
}
