//! REST forwarder: each method is a 1:1 translation of one local action
//! into one upstream call. No retries; a failed call is terminal.

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use super::{Upstream, UpstreamError};

impl Upstream {
    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url(), table)
    }

    /// GET a whole table with a fixed ordering clause, e.g. `created_at.desc`.
    pub async fn select_ordered(&self, table: &str, order: &str) -> Result<Value, UpstreamError> {
        let res = self
            .http
            .get(self.rest_url(table))
            .query(&[("order", order)])
            .header("apikey", &self.config.service_key)
            .bearer_auth(&self.config.service_key)
            .send()
            .await?;

        if res.status() != StatusCode::OK {
            return Err(Self::status_error(res).await);
        }
        Ok(res.json().await?)
    }

    /// GET one row by equality filter. The upstream answers an empty list
    /// rather than a 404 when nothing matches, so absence comes back as
    /// `None` and the handler decides what not-found means.
    pub async fn select_by_id(&self, table: &str, id: &str) -> Result<Option<Value>, UpstreamError> {
        let res = self
            .http
            .get(self.rest_url(table))
            .query(&[("id", format!("eq.{}", id))])
            .header("apikey", &self.config.service_key)
            .bearer_auth(&self.config.service_key)
            .send()
            .await?;

        if res.status() != StatusCode::OK {
            return Err(Self::status_error(res).await);
        }
        let rows: Vec<Value> = res.json().await?;
        Ok(rows.into_iter().next())
    }

    /// POST one row, asking the upstream to return the stored representation.
    pub async fn insert<T: Serialize>(&self, table: &str, payload: &T) -> Result<Value, UpstreamError> {
        let res = self
            .http
            .post(self.rest_url(table))
            .header("apikey", &self.config.service_key)
            .bearer_auth(&self.config.service_key)
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?;

        if !matches!(res.status(), StatusCode::OK | StatusCode::CREATED) {
            return Err(Self::status_error(res).await);
        }
        Ok(res.json().await?)
    }

    /// PATCH the row matching `id` with exactly the serialized fields of
    /// `payload`. A 204 or empty 200 body yields `None`: the upstream
    /// acknowledged without a representation.
    pub async fn update_by_id<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        payload: &T,
    ) -> Result<Option<Value>, UpstreamError> {
        let res = self
            .http
            .patch(self.rest_url(table))
            .query(&[("id", format!("eq.{}", id))])
            .header("apikey", &self.config.service_key)
            .bearer_auth(&self.config.service_key)
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?;

        match res.status() {
            StatusCode::NO_CONTENT => Ok(None),
            StatusCode::OK => {
                let text = res.text().await?;
                if text.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(serde_json::from_str(&text)?))
                }
            }
            _ => Err(Self::status_error(res).await),
        }
    }

    /// DELETE the row matching `id`. Both 200 and 204 count as deleted.
    pub async fn delete_by_id(&self, table: &str, id: &str) -> Result<(), UpstreamError> {
        let res = self
            .http
            .delete(self.rest_url(table))
            .query(&[("id", format!("eq.{}", id))])
            .header("apikey", &self.config.service_key)
            .bearer_auth(&self.config.service_key)
            .send()
            .await?;

        if !matches!(res.status(), StatusCode::OK | StatusCode::NO_CONTENT) {
            return Err(Self::status_error(res).await);
        }
        Ok(())
    }
}
