//! アプリケーション設定管理モジュール
//!
//! XDGディレクトリを使用した設定ファイルの永続化と管理を提供します。

use anyhow::{Context, Result};
use directories::ProjectDirs;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use crate::api::ApiConfig;
use crate::gui::models::{TimeRange, ViewMode};

/// ウィンドウ設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
    pub maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 900,
            x: 100,
            y: 100,
            maximized: false,
        }
    }
}

/// ログ設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// カスタムログディレクトリ（Noneの場合はXDGデフォルト使用）
    pub log_dir: Option<PathBuf>,
    /// ログレベル (trace/debug/info/warn/error)
    pub log_level: String,
    /// ファイル出力有効化
    pub enable_file_logging: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_level: "info".to_string(),
            enable_file_logging: false,
        }
    }
}

impl LogConfig {
    /// ログ出力先。未指定ならXDGのデータディレクトリ配下
    pub fn resolve_log_dir(&self) -> Option<PathBuf> {
        self.log_dir.clone().or_else(|| {
            ProjectDirs::from("dev", "sifyfy", "streamscope")
                .map(|dirs| dirs.data_local_dir().join("logs"))
        })
    }
}

/// 起動時の表示設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub time_range: TimeRange,
    pub view_mode: ViewMode,
}

/// アプリケーション設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// バックエンドAPI
    pub api: ApiConfig,

    /// 表示設定
    pub ui: UiConfig,

    /// ウィンドウ設定
    pub window: WindowConfig,

    /// ログ設定
    pub log: LogConfig,
}

/// 設定管理マネージャー
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    pub fn new() -> Result<Self> {
        Self::with_path(Self::get_config_path()?)
    }

    /// 任意のパスを使う設定マネージャー（`--config` 指定時）
    pub fn with_path(config_path: impl Into<PathBuf>) -> Result<Self> {
        let config_path = config_path.into();

        // 設定ディレクトリを作成（存在しない場合）
        if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Ok(Self { config_path })
    }

    /// XDGディレクトリに基づく設定ファイルパスを取得
    fn get_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("dev", "sifyfy", "streamscope")
            .context("Failed to get project directories")?;

        let config_file = project_dirs.config_dir().join("config.toml");

        debug!("Config file path: {}", config_file.display());

        Ok(config_file)
    }

    /// 設定を読み込み
    pub fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            info!(
                "Config file not found, using default settings: {}",
                self.config_path.display()
            );
            return Ok(AppConfig::default());
        }

        let config_content = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config: AppConfig = toml::from_str(&config_content).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        info!(
            "✅ Configuration loaded from: {}",
            self.config_path.display()
        );

        Ok(config)
    }

    /// 設定を保存
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        let config_content =
            toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, config_content).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        info!("💾 Configuration saved to: {}", self.config_path.display());

        Ok(())
    }

    /// ウィンドウ設定のみ更新して保存
    pub fn save_window_config(&self, window: &WindowConfig) -> Result<()> {
        let mut config = self.load_config()?;
        config.window = window.clone();
        self.save_config(&config)
    }

    /// 設定ファイルパスを取得
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

/// 起動時に確定した設定（CLI上書き済み）
static ACTIVE_CONFIG: OnceLock<Mutex<AppConfig>> = OnceLock::new();

/// 起動時の設定を登録する
pub fn install_active_config(config: AppConfig) {
    let slot = ACTIVE_CONFIG.get_or_init(|| Mutex::new(AppConfig::default()));
    *slot.lock() = config;
}

/// 現在の設定を取得（未登録ならデフォルト）
pub fn active_config() -> AppConfig {
    match ACTIVE_CONFIG.get() {
        Some(slot) => slot.lock().clone(),
        None => {
            warn!("⚠️ Active config not installed, using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config, deserialized);
        assert!(serialized.contains("time_range = \"24h\""));
        assert!(serialized.contains("view_mode = \"light\""));
    }

    #[test]
    fn test_config_manager_save_load() {
        let temp_dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("test_config.toml")).unwrap();

        let mut original_config = AppConfig::default();
        original_config.api.base_url = "http://metrics.internal:9000/api".to_string();
        original_config.ui.time_range = TimeRange::Last7Days;
        original_config.ui.view_mode = ViewMode::Dark;

        // 保存
        manager.save_config(&original_config).unwrap();
        assert!(manager.config_path().exists());

        // 読み込み
        let loaded_config = manager.load_config().unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_config_load_nonexistent_file() {
        let temp_dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("nonexistent.toml")).unwrap();

        // 存在しないファイルの読み込み時はデフォルトが返される
        let loaded_config = manager.load_config().unwrap();
        assert_eq!(loaded_config, AppConfig::default());
        assert_eq!(loaded_config.api.timeout_ms, 5000);
    }

    #[test]
    fn test_config_load_corrupted_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("corrupted.toml");

        // 破損したTOMLファイルを作成
        std::fs::write(&config_path, "invalid toml content [unclosed section").unwrap();

        let manager = ConfigManager::with_path(config_path).unwrap();

        let result = manager.load_config();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_load_partial_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("partial.toml");

        let partial_toml = r#"
[api]
base_url = "http://127.0.0.1:8000/api"

[ui]
view_mode = "dark"
"#;
        std::fs::write(&config_path, partial_toml).unwrap();

        let manager = ConfigManager::with_path(config_path).unwrap();
        let loaded_config = manager.load_config().unwrap();

        // 指定されたフィールドは読み込まれ、省略されたフィールドはデフォルト値になる
        assert_eq!(loaded_config.api.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(loaded_config.api.timeout_ms, 5000);
        assert_eq!(loaded_config.ui.view_mode, ViewMode::Dark);
        assert_eq!(loaded_config.ui.time_range, TimeRange::Last24Hours);
        assert_eq!(loaded_config.window, WindowConfig::default());
    }

    #[test]
    fn test_save_window_config_keeps_other_settings() {
        let temp_dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("window.toml")).unwrap();

        let mut config = AppConfig::default();
        config.api.timeout_ms = 1500;
        manager.save_config(&config).unwrap();

        let window = WindowConfig {
            width: 1600,
            height: 1000,
            x: 10,
            y: 20,
            maximized: true,
        };
        manager.save_window_config(&window).unwrap();

        let loaded = manager.load_config().unwrap();
        assert_eq!(loaded.window, window);
        assert_eq!(loaded.api.timeout_ms, 1500);
    }

    #[test]
    fn test_config_save_invalid_path() {
        let manager = ConfigManager {
            config_path: PathBuf::from("/nonexistent/directory/config.toml"),
        };

        // 存在しないディレクトリへの保存は失敗する
        assert!(manager.save_config(&AppConfig::default()).is_err());
    }

    #[test]
    fn test_resolve_log_dir_prefers_custom() {
        let log = LogConfig {
            log_dir: Some(PathBuf::from("/tmp/streamscope-logs")),
            ..LogConfig::default()
        };
        assert_eq!(
            log.resolve_log_dir(),
            Some(PathBuf::from("/tmp/streamscope-logs"))
        );
    }
}
