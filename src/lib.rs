use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod types;
pub mod upstream;

use crate::config::AppConfig;
use crate::upstream::Upstream;

/// Shared state handed to every handler. Built once at startup; nothing in
/// here is mutable across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub upstream: Upstream,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let config = Arc::new(config);
        let upstream = Upstream::new(config.clone())?;
        Ok(Self { config, upstream })
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/api/health", get(health))
        // Resource routes (public reads, admin-gated writes)
        .merge(project_routes())
        .merge(skill_routes())
        .merge(contact_routes())
        .merge(upload_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn project_routes() -> Router<AppState> {
    use handlers::{protected, public};

    Router::new()
        .route(
            "/api/projects",
            get(public::project_list).post(protected::project_create),
        )
        .route(
            "/api/projects/:id",
            get(public::project_get)
                .put(protected::project_update)
                .delete(protected::project_delete),
        )
}

fn skill_routes() -> Router<AppState> {
    use axum::routing::delete;
    use handlers::{protected, public};

    Router::new()
        .route(
            "/api/skills",
            get(public::skill_list).post(protected::skill_create),
        )
        .route("/api/skills/:id", delete(protected::skill_delete))
}

fn contact_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::public;

    Router::new().route("/api/contact", post(public::contact_submit))
}

fn upload_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::protected;

    Router::new().route("/api/upload", post(protected::upload_post))
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Portfolio API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "health": "/api/health",
    }))
}

/// GET /api/health - liveness only; never touches the upstream.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
