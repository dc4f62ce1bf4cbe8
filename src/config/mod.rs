use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Process-wide configuration, read from the environment once at startup and
/// passed explicitly through [`crate::AppState`]. Never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the upstream platform, without a trailing slash.
    pub supabase_url: String,
    /// Service-role credential used for REST and storage calls.
    pub service_key: String,
    /// Anonymous credential used when verifying caller tokens.
    pub anon_key: String,
    pub port: u16,
    pub upstream_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let supabase_url = normalize_base_url(
            &env::var("SUPABASE_URL").unwrap_or_else(|_| "https://placeholder.supabase.co".to_string()),
        );

        if url::Url::parse(&supabase_url).is_err() {
            tracing::warn!(%supabase_url, "SUPABASE_URL does not parse as a URL");
        }

        Self {
            supabase_url,
            service_key: env::var("SUPABASE_SERVICE_KEY")
                .unwrap_or_else(|_| "placeholder-key".to_string()),
            anon_key: env::var("SUPABASE_ANON_KEY")
                .unwrap_or_else(|_| "placeholder-anon-key".to_string()),
            port: env::var("PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(8000),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

/// Trim trailing slashes so joined endpoint paths stay stable.
fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}
