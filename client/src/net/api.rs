//! REST client for the co-pilot backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures are distinct [`ApiError`] variants
//! so callers can log precisely and still degrade to a single user-facing
//! outcome (stale data, apology message).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Alert, HealthStatus, QueryAnswer, Snapshot};
#[cfg(feature = "hydrate")]
use super::types::QueryRequest;
#[cfg(any(test, feature = "hydrate"))]
use super::types::{AlertsResponse, QueryResponse};
use crate::config;

/// Failure talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("backend returned status {0}")]
    Status(u16),
    /// The body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// No HTTP transport in this build (server-side rendering).
    #[error("backend unavailable outside the browser")]
    Unavailable,
}

/// Operations the dashboard needs from the backend.
#[async_trait(?Send)]
pub trait DashboardBackend {
    /// `GET /api/data`: equipment, production, and carbon summary.
    async fn fetch_snapshot(&self) -> Result<Snapshot, ApiError>;

    /// `GET /api/alerts`: maintenance alerts in backend order.
    async fn fetch_alerts(&self) -> Result<Vec<Alert>, ApiError>;

    /// `POST /api/query` with the user's raw question.
    async fn query(&self, question: &str) -> Result<QueryAnswer, ApiError>;

    /// `GET /api/health`.
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

/// [`DashboardBackend`] over HTTP against a fixed base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    base_url: String,
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(config::backend_base_url())
    }
}

impl HttpBackend {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(feature = "hydrate")]
    async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let url = endpoint(&self.base_url, path);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_body(resp).await
    }
}

#[cfg(feature = "hydrate")]
async fn read_body(resp: gloo_net::http::Response) -> Result<String, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[async_trait(?Send)]
impl DashboardBackend for HttpBackend {
    async fn fetch_snapshot(&self) -> Result<Snapshot, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            decode_snapshot(&self.get_text("/api/data").await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_alerts(&self) -> Result<Vec<Alert>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            decode_alerts(&self.get_text("/api/alerts").await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn query(&self, question: &str) -> Result<QueryAnswer, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = endpoint(&self.base_url, "/api/query");
            let resp = gloo_net::http::Request::post(&url)
                .json(&QueryRequest { query: question })
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            decode_query(&read_body(resp).await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = question;
            Err(ApiError::Unavailable)
        }
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            decode_health(&self.get_text("/api/health").await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

/// Join the base URL and an absolute API path.
#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_snapshot(body: &str) -> Result<Snapshot, ApiError> {
    decode(body)
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_alerts(body: &str) -> Result<Vec<Alert>, ApiError> {
    decode::<AlertsResponse>(body).map(|resp| resp.alerts)
}

/// A query reply without answer text is treated as malformed.
#[cfg(any(test, feature = "hydrate"))]
fn decode_query(body: &str) -> Result<QueryAnswer, ApiError> {
    let resp: QueryResponse = decode(body)?;
    let text = resp
        .response
        .ok_or_else(|| ApiError::Decode("missing `response` text".to_owned()))?;
    let data = resp.data.filter(|value| !value.is_null());
    Ok(QueryAnswer { text, data })
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_health(body: &str) -> Result<HealthStatus, ApiError> {
    decode(body)
}
