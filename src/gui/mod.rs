// Core modules
pub mod config_manager; // 設定管理モジュール
pub mod models;
pub mod state_management;
pub mod utils;

// チャートモデル（描画非依存）
pub mod charts;

// Dioxus UI components
pub mod components;
pub mod hooks;
pub mod styles;

pub use components::MainWindow;
pub use state_management::DashboardState;
