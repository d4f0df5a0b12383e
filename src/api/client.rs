//! HTTP client for the metrics backend.
//!
//! The backend exposes five read-only JSON endpoints. A dashboard load
//! needs all five; they are requested concurrently and each one is guarded
//! by its own timeout.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::FetchError;
use super::models::{
    Category, CategoryHistoryPoint, DashboardSnapshot, DataSource, Statistics, Stream,
    StreamHistoryPoint,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Anything that can produce a full dashboard snapshot for an hours window.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn fetch_snapshot(&self, hours: u32) -> Result<DashboardSnapshot, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    /// Parsed base with a trailing slash, `None` when `base_url` is unusable
    base: Option<Url>,
    timeout: Duration,
    http_client: reqwest::Client,
}

/// Parses the base URL so that relative endpoint paths join below it.
fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(raw).map_err(|_| FetchError::InvalidUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl(raw.to_string()));
    }

    let path = format!("{}/", url.path().trim_end_matches('/'));
    url.set_path(&path);
    Ok(url)
}

impl ApiClient {
    /// An unusable base URL is not fatal here; every request then fails
    /// with `FetchError::InvalidUrl` and the dashboard falls back to mock data.
    pub fn new(config: &ApiConfig) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let base = match parse_base_url(&base_url) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::error!(error = %e, "❌ Backend URL rejected");
                None
            }
        };

        Self {
            base_url,
            base,
            timeout: Duration::from_millis(config.timeout_ms),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(&ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, FetchError> {
        let base = self
            .base
            .as_ref()
            .ok_or_else(|| FetchError::InvalidUrl(self.base_url.clone()))?;
        base.join(path.trim_start_matches('/'))
            .map_err(|_| FetchError::InvalidUrl(format!("{}/{}", self.base_url, path)))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let endpoint = self.endpoint_url(path)?;
        let url = endpoint.to_string();
        let timeout_ms = self.timeout.as_millis() as u64;
        let started = Instant::now();

        tracing::debug!(url = %url, query = ?query, "📡 API request sent");

        let request = self.http_client.get(endpoint).query(query);
        let result = tokio::time::timeout(self.timeout, async {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    url: url.clone(),
                    status,
                });
            }

            let body = response.bytes().await?;
            serde_json::from_slice::<T>(&body).map_err(|source| FetchError::Decode {
                url: url.clone(),
                source,
            })
        })
        .await;

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(_) => Err(FetchError::Timeout {
                url: url.clone(),
                timeout_ms,
            }),
        };

        match &outcome {
            Ok(_) => tracing::debug!(
                url = %url,
                duration_ms = started.elapsed().as_millis() as u64,
                "📨 API response received"
            ),
            Err(e) => tracing::warn!(url = %url, error = %e, "❌ API request failed"),
        }

        outcome
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.get_json("categories", &[]).await
    }

    pub async fn fetch_streams(&self) -> Result<Vec<Stream>, FetchError> {
        self.get_json("streams", &[]).await
    }

    pub async fn fetch_category_history(
        &self,
        hours: u32,
    ) -> Result<Vec<CategoryHistoryPoint>, FetchError> {
        self.get_json("categories/history", &[("hours", hours.to_string())])
            .await
    }

    pub async fn fetch_stream_history(
        &self,
        hours: u32,
    ) -> Result<Vec<StreamHistoryPoint>, FetchError> {
        self.get_json("streams/history", &[("hours", hours.to_string())])
            .await
    }

    pub async fn fetch_statistics(&self) -> Result<Statistics, FetchError> {
        self.get_json("statistics", &[]).await
    }
}

#[async_trait]
impl MetricsSource for ApiClient {
    /// All five endpoints at once. The first failure fails the whole load.
    async fn fetch_snapshot(&self, hours: u32) -> Result<DashboardSnapshot, FetchError> {
        let started = Instant::now();

        let (categories, streams, category_history, stream_history, statistics) = tokio::try_join!(
            self.fetch_categories(),
            self.fetch_streams(),
            self.fetch_category_history(hours),
            self.fetch_stream_history(hours),
            self.fetch_statistics(),
        )?;

        tracing::info!(
            hours,
            categories = categories.len(),
            streams = streams.len(),
            category_history = category_history.len(),
            stream_history = stream_history.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "✅ Dashboard snapshot fetched"
        );

        Ok(DashboardSnapshot {
            categories,
            streams,
            category_history,
            stream_history,
            statistics,
            source: DataSource::Api,
        })
    }
}
