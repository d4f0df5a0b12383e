//! Metrics backend access: record types and the HTTP client.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, ApiConfig, MetricsSource, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use error::FetchError;
pub use models::{
    Category, CategoryHistoryPoint, DashboardSnapshot, DataSource, HistoryMetrics, HistoryPoint,
    Statistics, Stream, StreamHistoryPoint,
};
