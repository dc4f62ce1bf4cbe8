// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::upstream::UpstreamError;

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// Upstream detail is never carried here: whatever the upstream answered is
/// logged at the point of mapping and replaced with a fixed message.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error (upstream answered with a status we don't forward)
    UpstreamFailure(String),

    // 502 Bad Gateway (upstream could not be reached)
    BadGateway(String),

    // 504 Gateway Timeout (upstream call exceeded the configured timeout)
    GatewayTimeout(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::UpstreamFailure(msg)
            | ApiError::BadGateway(msg)
            | ApiError::GatewayTimeout(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::UpstreamFailure(_) => "INTERNAL_SERVER_ERROR",
            ApiError::BadGateway(_) => "BAD_GATEWAY",
            ApiError::GatewayTimeout(_) => "GATEWAY_TIMEOUT",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "error": true,
            "message": self.message(),
            "code": self.error_code(),
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn upstream_failure(message: impl Into<String>) -> Self {
        ApiError::UpstreamFailure(message.into())
    }

    /// Map an upstream client failure to the fixed, action-specific message.
    /// The real cause is logged; the client only sees `action`.
    pub fn from_upstream(action: &'static str, err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status, body } => {
                tracing::error!(%status, body = %body, "{}", action);
                ApiError::upstream_failure(action)
            }
            UpstreamError::Http(e) if e.is_timeout() => {
                tracing::error!(error = %e, "{}: upstream timed out", action);
                ApiError::GatewayTimeout("Upstream request timed out".to_string())
            }
            UpstreamError::Http(e) if e.is_decode() => {
                tracing::error!(error = %e, "{}: undecodable upstream response", action);
                ApiError::upstream_failure(action)
            }
            UpstreamError::Http(e) => {
                tracing::error!(error = %e, "{}: upstream unreachable", action);
                ApiError::BadGateway("Failed to reach upstream service".to_string())
            }
            UpstreamError::Decode(e) => {
                tracing::error!(error = %e, "{}: undecodable upstream response", action);
                ApiError::upstream_failure(action)
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
