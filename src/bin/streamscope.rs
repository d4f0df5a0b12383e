use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::prelude::*;
use parking_lot::Mutex;
use streamscope::{
    gui::{components::MainWindow, config_manager, styles::CssClasses, utils},
    DashboardError, TimeRange,
};

/// ウィンドウ設定の保存用
static LAST_WINDOW_CONFIG: Mutex<Option<config_manager::WindowConfig>> =
    parking_lot::const_mutex(None);

/// `--config` で指定された設定ファイル
static CONFIG_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Twitch Analytics Dashboard
#[derive(Parser, Debug)]
#[command(name = "streamscope")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Metrics backend base URL (overrides the config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace/debug/info/warn/error)
    #[arg(long)]
    log_level: Option<String>,

    /// Path to an alternative config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial time range (24h/7d/30d)
    #[arg(long)]
    time_range: Option<TimeRange>,
}

fn open_config_manager() -> anyhow::Result<config_manager::ConfigManager> {
    match CONFIG_PATH.get().cloned().flatten() {
        Some(path) => config_manager::ConfigManager::with_path(path),
        None => config_manager::ConfigManager::new(),
    }
}

fn app() -> Element {
    let window = dioxus::desktop::use_window();

    // ウィンドウ状態を定期的に記録（終了時に保存する）
    use_effect({
        let window = window.clone();
        move || {
            let window = window.clone();
            spawn(async move {
                let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(1));
                loop {
                    interval.tick().await;

                    let current_size = window.inner_size();
                    let current_position = window.outer_position().unwrap_or_default();

                    *LAST_WINDOW_CONFIG.lock() = Some(config_manager::WindowConfig {
                        width: current_size.width,
                        height: current_size.height,
                        x: current_position.x,
                        y: current_position.y,
                        maximized: window.is_maximized(),
                    });
                }
            });
        }
    });

    rsx! {
        div {
            class: CssClasses::APP,
            style: "
                min-height: 100vh;
                margin: 0;
                padding: 0;
                font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            ",

            MainWindow {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _ = CONFIG_PATH.set(args.config.clone());

    let config_manager = open_config_manager()?;
    let config_load = config_manager.load_config();
    let mut config = match &config_load {
        Ok(config) => config.clone(),
        Err(_) => config_manager::AppConfig::default(),
    };

    // CLI引数で上書き
    if let Some(api_url) = args.api_url {
        config.api.base_url = api_url;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.api.timeout_ms = timeout_ms;
    }
    if let Some(log_level) = args.log_level {
        config.log.log_level = log_level;
    }
    if let Some(time_range) = args.time_range {
        config.ui.time_range = time_range;
    }

    // tokio-consoleの初期化（プロファイリング用）
    #[cfg(feature = "debug-tokio")]
    console_subscriber::init();

    // ファイル出力のガードは終了まで保持する
    #[cfg(not(feature = "debug-tokio"))]
    let _log_guard = utils::init_logging(&config.log)?;

    if let Err(e) = &config_load {
        tracing::warn!("設定読み込みエラー、デフォルト設定を使用: {:#}", e);
    }

    tracing::info!("🎬 Starting streamscope - Twitch Analytics Dashboard");
    tracing::debug!("📋 Config file: {}", config_manager.config_path().display());
    tracing::info!(
        "🌐 Backend: {} (timeout {}ms, range {})",
        config.api.base_url,
        config.api.timeout_ms,
        config.ui.time_range
    );

    // ウィンドウ位置をデスクトップ範囲内に調整
    utils::validate_window_bounds(&mut config.window);

    tracing::info!(
        "🪟 ウィンドウ設定: {}x{} at ({}, {}), 最大化: {}",
        config.window.width,
        config.window.height,
        config.window.x,
        config.window.y,
        config.window.maximized
    );

    let window = config.window.clone();
    config_manager::install_active_config(config);

    let launch_builder = dioxus::LaunchBuilder::desktop().with_cfg(
        dioxus::desktop::Config::new().with_window(
            dioxus::desktop::tao::window::WindowBuilder::new()
                .with_title("streamscope - Twitch Analytics Dashboard")
                .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(
                    window.width as f64,
                    window.height as f64,
                ))
                .with_position(dioxus::desktop::tao::dpi::LogicalPosition::new(
                    window.x as f64,
                    window.y as f64,
                ))
                .with_maximized(window.maximized)
                .with_resizable(true),
        ),
    );

    // Ctrl+Cシグナルハンドラー
    ctrlc::set_handler(move || {
        tracing::info!("🛑 終了シグナルを受信しました");
        save_window_config_on_exit();
        std::process::exit(0);
    })
    .map_err(|e| DashboardError::configuration(format!("Failed to set signal handler: {}", e)))?;

    launch_builder.launch(app);

    // 正常終了時の設定保存
    save_window_config_on_exit();

    tracing::info!("👋 streamscope shutting down");
    Ok(())
}

/// 終了時にウィンドウ設定を保存
fn save_window_config_on_exit() {
    let Some(window_config) = LAST_WINDOW_CONFIG.lock().clone() else {
        tracing::warn!("保存する最新のウィンドウ設定が見つかりませんでした");
        return;
    };

    let result = open_config_manager()
        .and_then(|manager| manager.save_window_config(&window_config));

    match result {
        Ok(()) => tracing::info!(
            "💾 ウィンドウ設定を保存しました: {}x{} at ({}, {}), 最大化: {}",
            window_config.width,
            window_config.height,
            window_config.x,
            window_config.y,
            window_config.maximized
        ),
        Err(e) => tracing::error!("設定保存エラー: {:#}", e),
    }
}
