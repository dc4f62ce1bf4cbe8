use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::{json, Value};

use crate::auth::AdminUser;
use crate::error::ApiError;
use crate::AppState;

const BUCKET: &str = "project-images";
const KEY_PREFIX: &str = "projects";
const DEFAULT_CONTENT_TYPE: &str = "image/png";

/// POST /api/upload - read the uploaded file into memory, forward it into
/// the public bucket, answer the deterministic public URL.
///
/// The object key reuses the caller's filename verbatim under a fixed
/// prefix; re-uploading the same name overwrites the existing object
/// (upstream overwrite-by-key semantics, kept as-is).
pub async fn post(
    State(state): State<AppState>,
    _user: AdminUser,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let mut file = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| ApiError::bad_request("Missing filename"))?;
            let content_type = field
                .content_type()
                .map(str::to_string)
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;
            file = Some((filename, content_type, bytes));
            break;
        }
    }
    let (filename, content_type, bytes) =
        file.ok_or_else(|| ApiError::bad_request("Missing file field"))?;

    let key = format!("{}/{}", KEY_PREFIX, filename);
    state
        .upstream
        .upload_object(BUCKET, &key, bytes.to_vec(), &content_type)
        .await
        .map_err(|e| ApiError::from_upstream("Failed to upload image", e))?;

    Ok(Json(json!({ "url": state.upstream.public_url(BUCKET, &key) })))
}
