//! Object storage forwarder. Keys are caller-controlled and uploads
//! overwrite by key, matching the upstream's last-write-wins semantics.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use super::{Upstream, UpstreamError};

impl Upstream {
    /// POST raw bytes to `{bucket}/{key}` with the declared content type.
    pub async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), UpstreamError> {
        let url = format!("{}/storage/v1/object/{}/{}", self.base_url(), bucket, key);
        let res = self
            .http
            .post(&url)
            .header("apikey", &self.config.service_key)
            .bearer_auth(&self.config.service_key)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !matches!(res.status(), StatusCode::OK | StatusCode::CREATED) {
            return Err(Self::status_error(res).await);
        }
        Ok(())
    }

    /// Public read URL for an object in a public bucket. Pure string
    /// substitution from the base URL and key; the upload response body
    /// is never consulted.
    pub fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.base_url(), bucket, key)
    }
}
