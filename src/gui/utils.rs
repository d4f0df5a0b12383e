// GUI用ユーティリティ関数

use tracing::{debug, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::DashboardError;
use crate::gui::config_manager::{LogConfig, WindowConfig};

/// ログファイル名の接頭辞（日付ごとにローテーション）
const LOG_FILE_PREFIX: &str = "streamscope.log";

/// `RUST_LOG` があればそれを、なければ設定のレベルを使う
fn build_env_filter(level: &str) -> Result<EnvFilter, DashboardError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| DashboardError::Logging(format!("Invalid log filter '{}': {}", level, e)))
}

/// ログ初期化
///
/// ファイル出力が有効な場合は返される `WorkerGuard` を終了まで保持すること。
pub fn init_logging(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_filter(build_env_filter(&config.log_level)?);

    let log_dir = config
        .enable_file_logging
        .then(|| config.resolve_log_dir())
        .flatten();

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(build_env_filter(&config.log_level)?);

            tracing_subscriber::registry()
                .with(console_layer)
                .with(file_layer)
                .try_init()?;

            debug!("📁 File logging enabled: {}", dir.display());
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry().with(console_layer).try_init()?;
            Ok(None)
        }
    }
}

/// UI更新のパフォーマンス測定
pub struct UiUpdateTimer {
    start: std::time::Instant,
    context: String,
}

impl UiUpdateTimer {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            start: std::time::Instant::now(),
            context: context.into(),
        }
    }
}

impl Drop for UiUpdateTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        if duration.as_millis() > 16 {
            // 60fps以下の場合警告
            warn!(
                context = %self.context,
                duration_ms = duration.as_millis(),
                "⚠️ Slow UI update detected"
            );
        } else {
            debug!(
                context = %self.context,
                duration_ms = duration.as_millis(),
                "✅ UI update completed"
            );
        }
    }
}

/// デスクトップサイズを取得（Tao/DioxusのEventLoopを使用）
pub fn get_primary_monitor_size() -> Option<(u32, u32)> {
    let event_loop = dioxus::desktop::tao::event_loop::EventLoop::new();
    event_loop.primary_monitor().map(|monitor| {
        let size = monitor.size();
        (size.width, size.height)
    })
}

/// ウィンドウ位置・サイズを画面内に収める
pub fn clamp_window_to_screen(config: &mut WindowConfig, screen: Option<(u32, u32)>) {
    match screen {
        Some((screen_width, screen_height)) => {
            // ウィンドウサイズがスクリーンより大きい場合は調整
            if config.width > screen_width {
                config.width = screen_width.min(1280);
            }
            if config.height > screen_height {
                config.height = screen_height.min(900);
            }

            // ウィンドウがスクリーン範囲外にある場合は調整
            if config.x < 0 || config.x > (screen_width as i32) - (config.width as i32) {
                config.x = 100;
            }
            if config.y < 0 || config.y > (screen_height as i32) - (config.height as i32) {
                config.y = 100;
            }
        }
        None => {
            // フォールバック: 基本的な検証のみ
            config.x = config.x.max(0);
            config.y = config.y.max(0);
            config.width = config.width.max(800);
            config.height = config.height.max(600);
        }
    }
}

/// ウィンドウ位置がデスクトップ範囲内にあるかチェック
pub fn validate_window_bounds(config: &mut WindowConfig) {
    let screen = get_primary_monitor_size();
    match screen {
        Some((w, h)) => debug!("🖥️ プライマリモニターサイズ: {}x{}", w, h),
        None => warn!("⚠️ モニター情報を取得できませんでした。基本的な検証のみ実行"),
    }
    clamp_window_to_screen(config, screen);
}
