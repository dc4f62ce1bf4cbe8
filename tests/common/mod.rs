#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;

use portfolio_api::config::AppConfig;
use portfolio_api::{app, AppState};

/// One request observed by the fake upstream.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("recorded body is not JSON")
    }
}

/// In-process stand-in for the upstream platform. Records every request it
/// receives and answers with whatever the test configured for that
/// method+path; unconfigured routes answer 404 so a test cannot silently
/// depend on a response it never set up.
#[derive(Clone, Default)]
pub struct FakeUpstream {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<HashMap<(Method, String), (StatusCode, String)>>>,
}

impl FakeUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: StatusCode, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert((method, path.to_string()), (status, body.to_string()));
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Recorded requests hitting `path`, ignoring the query string.
    pub fn recorded_for(&self, method: &Method, path: &str) -> Vec<RecordedRequest> {
        self.recorded()
            .into_iter()
            .filter(|r| &r.method == method && r.path == path)
            .collect()
    }

    async fn handle(
        State(fake): State<FakeUpstream>,
        method: Method,
        uri: Uri,
        headers: HeaderMap,
        body: Bytes,
    ) -> (StatusCode, [(&'static str, &'static str); 1], String) {
        let path = uri.path().to_string();
        fake.requests.lock().unwrap().push(RecordedRequest {
            method: method.clone(),
            path: path.clone(),
            query: uri.query().unwrap_or("").to_string(),
            headers,
            body,
        });

        let response = fake.responses.lock().unwrap().get(&(method, path)).cloned();
        match response {
            Some((status, body)) => (status, [("content-type", "application/json")], body),
            None => (
                StatusCode::NOT_FOUND,
                [("content-type", "application/json")],
                r#"{"message":"no response configured for this route"}"#.to_string(),
            ),
        }
    }

    /// Bind to an ephemeral port and serve; returns the base URL.
    pub async fn spawn(&self) -> Result<String> {
        let router = Router::new()
            .fallback(Self::handle)
            .with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("fake upstream");
        });
        Ok(format!("http://{}", addr))
    }
}

pub struct TestApp {
    pub base_url: String,
    pub upstream_url: String,
    pub upstream: FakeUpstream,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Configure the fake auth endpoint to accept tokens.
    pub fn accept_tokens(&self) {
        self.upstream.respond(
            Method::GET,
            "/auth/v1/user",
            StatusCode::OK,
            r#"{"id":"admin-user","email":"admin@example.com"}"#,
        );
    }

    /// Configure the fake auth endpoint to reject tokens.
    pub fn reject_tokens(&self) {
        self.upstream.respond(
            Method::GET,
            "/auth/v1/user",
            StatusCode::UNAUTHORIZED,
            r#"{"message":"JWT expired"}"#,
        );
    }
}

/// Spin up the API under test against a fresh fake upstream, both on
/// ephemeral ports.
pub async fn spawn_app() -> Result<TestApp> {
    let upstream = FakeUpstream::new();
    let upstream_url = upstream.spawn().await?;

    let state = AppState::new(AppConfig {
        supabase_url: upstream_url.clone(),
        service_key: "service-key".to_string(),
        anon_key: "anon-key".to_string(),
        port: 0,
        upstream_timeout_secs: 5,
    })?;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.expect("test server");
    });

    Ok(TestApp {
        base_url: format!("http://{}", addr),
        upstream_url,
        upstream,
        client: reqwest::Client::new(),
    })
}
