//! Client for the upstream platform: REST rows under `/rest/v1/{table}`,
//! token verification under `/auth/v1/user`, objects under `/storage/v1`.
//!
//! One pooled `reqwest::Client` is built at startup with a bounded timeout
//! and shared by every request for the life of the process.

pub mod rest;
pub mod storage;

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use thiserror::Error;

use crate::config::AppConfig;

/// Errors from the upstream client.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered, but with a status the forwarder does not relay.
    /// The body is kept for logging only; it is never sent to a caller.
    #[error("upstream returned {status}")]
    Status { status: reqwest::StatusCode, body: String },

    /// Transport-level failure: timeout, DNS, refused connection, or an
    /// undecodable response stream.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("invalid upstream response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Pooled client plus credentials for all outbound upstream calls.
#[derive(Clone)]
pub struct Upstream {
    http: reqwest::Client,
    config: Arc<AppConfig>,
}

impl Upstream {
    pub fn new(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout())
            .build()?;
        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.supabase_url
    }

    /// Confirm a caller token against the upstream identity endpoint.
    /// 200 yields the opaque identity payload; anything else is a rejection.
    pub async fn verify_token(&self, token: &str) -> Result<Value, UpstreamError> {
        let url = format!("{}/auth/v1/user", self.base_url());
        let res = self
            .http
            .get(&url)
            .header("apikey", &self.config.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await?;

        if res.status() != reqwest::StatusCode::OK {
            return Err(Self::status_error(res).await);
        }
        Ok(res.json().await?)
    }

    async fn status_error(res: reqwest::Response) -> UpstreamError {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        UpstreamError::Status { status, body }
    }
}
