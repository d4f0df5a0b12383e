//! Record types returned by the metrics backend.
//!
//! Every record is a plain snapshot. The dashboard never mutates them in
//! place; a new fetch replaces the whole collection.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// A directory category and its current audience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category: String,
    pub viewers: u64,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub image_url: String,
    /// Scrape time as written by the collector
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Number of live streams, when the backend reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streams: Option<u64>,
}

impl Category {
    pub fn tag_list(&self) -> Vec<&str> {
        split_tags(&self.tags)
    }
}

/// A live channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    pub channel: String,
    pub category: String,
    #[serde(default)]
    pub title: String,
    pub viewers: u64,
    #[serde(default)]
    pub tags: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Stream {
    pub fn tag_list(&self) -> Vec<&str> {
        split_tags(&self.tags)
    }
}

fn split_tags(tags: &str) -> Vec<&str> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty() && *t != "No Tags")
        .collect()
}

/// Hourly aggregate shared by category and stream history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryMetrics {
    pub hour: u32,
    pub day: u32,
    pub month: u32,
    pub avg_viewers: f64,
    pub max_viewers: u64,
    pub min_viewers: u64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryHistoryPoint {
    pub category: String,
    #[serde(flatten)]
    pub metrics: HistoryMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamHistoryPoint {
    pub channel: String,
    #[serde(flatten)]
    pub metrics: HistoryMetrics,
}

/// Common view over category and stream history points.
pub trait HistoryPoint {
    /// Category name or channel name
    fn subject(&self) -> &str;
    fn metrics(&self) -> &HistoryMetrics;
}

impl HistoryPoint for CategoryHistoryPoint {
    fn subject(&self) -> &str {
        &self.category
    }

    fn metrics(&self) -> &HistoryMetrics {
        &self.metrics
    }
}

impl HistoryPoint for StreamHistoryPoint {
    fn subject(&self) -> &str {
        &self.channel
    }

    fn metrics(&self) -> &HistoryMetrics {
        &self.metrics
    }
}

/// Summary returned by `/statistics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub top_categories: Vec<Category>,
    #[serde(default)]
    pub top_streams: Vec<Stream>,
    #[serde(default)]
    pub total_viewers: u64,
    pub last_update: String,
}

impl Statistics {
    /// `last_update` in local time. The backend sends a naive ISO timestamp,
    /// which is read as local time; an explicit offset is honoured.
    pub fn last_update_local(&self) -> Option<DateTime<Local>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&self.last_update) {
            return Some(parsed.with_timezone(&Local));
        }

        NaiveDateTime::parse_from_str(&self.last_update, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
    }

    /// Display form of `last_update`, falling back to the raw string.
    pub fn last_update_display(&self) -> String {
        self.last_update_local()
            .map(|t| t.format("%Y/%m/%d %H:%M:%S").to_string())
            .unwrap_or_else(|| self.last_update.clone())
    }
}

/// Where the current collections came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum DataSource {
    #[default]
    #[display("none")]
    Empty,
    #[display("api")]
    Api,
    #[display("mock")]
    Mock,
}

/// The five collections of one load.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub categories: Vec<Category>,
    pub streams: Vec<Stream>,
    pub category_history: Vec<CategoryHistoryPoint>,
    pub stream_history: Vec<StreamHistoryPoint>,
    pub statistics: Statistics,
    pub source: DataSource,
}
