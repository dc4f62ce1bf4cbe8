use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use serde_json::Value;

use crate::error::ApiError;
use crate::upstream::UpstreamError;
use crate::AppState;

/// Upstream-verified admin identity, extracted on every privileged request.
///
/// The payload is whatever the upstream auth endpoint returned for the token;
/// current handlers only care that verification succeeded, but the identity
/// is available to them. Validity is never cached: each privileged request
/// costs exactly one verification round trip.
#[derive(Clone, Debug)]
pub struct AdminUser(pub Value);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

        let raw = header_value
            .to_str()
            .map_err(|_| ApiError::unauthorized("Invalid authorization header"))?;

        let token = strip_bearer(raw);

        let identity = state.upstream.verify_token(token).await.map_err(|err| match err {
            UpstreamError::Status { status, .. } => {
                // Rejected token. Upstream detail stays in the logs.
                tracing::warn!(%status, "upstream auth rejected token");
                ApiError::unauthorized("Invalid or expired token")
            }
            other => ApiError::from_upstream("Failed to verify token", other),
        })?;

        Ok(AdminUser(identity))
    }
}

/// The upstream accepts the raw token; only the scheme prefix is stripped.
fn strip_bearer(raw: &str) -> &str {
    raw.strip_prefix("Bearer ").unwrap_or(raw)
}
