use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// 履歴の表示期間
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "24h")]
    #[display("Last 24 Hours")]
    Last24Hours,
    #[serde(rename = "7d")]
    #[display("Last 7 Days")]
    Last7Days,
    #[serde(rename = "30d")]
    #[display("Last 30 Days")]
    Last30Days,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::Last24Hours,
        TimeRange::Last7Days,
        TimeRange::Last30Days,
    ];

    /// APIの `hours` パラメータ
    pub fn hours(&self) -> u32 {
        match self {
            TimeRange::Last24Hours => 24,
            TimeRange::Last7Days => 168,
            TimeRange::Last30Days => 720,
        }
    }

    /// 設定ファイル・CLIで使うキー
    pub fn as_key(&self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "24h",
            TimeRange::Last7Days => "7d",
            TimeRange::Last30Days => "30d",
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "24h" => Ok(TimeRange::Last24Hours),
            "7d" => Ok(TimeRange::Last7Days),
            "30d" => Ok(TimeRange::Last30Days),
            other => Err(DashboardError::invalid_value("time_range", other)),
        }
    }
}

/// 表示テーマ
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Light => ViewMode::Dark,
            ViewMode::Dark => ViewMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ViewMode::Dark
    }
}

impl std::str::FromStr for ViewMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ViewMode::Light),
            "dark" => Ok(ViewMode::Dark),
            other => Err(DashboardError::invalid_value("view_mode", other)),
        }
    }
}
