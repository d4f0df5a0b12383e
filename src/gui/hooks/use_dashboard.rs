//! ダッシュボード用カスタムフック
//!
//! 状態シグナルとAPIクライアントをまとめ、期間が変わるたびに再読み込みする。

use chrono::Local;
use dioxus::prelude::*;
use std::sync::Arc;

use crate::analytics::mock_data::mock_snapshot;
use crate::api::{ApiClient, DashboardSnapshot, MetricsSource};
use crate::gui::config_manager::active_config;
use crate::gui::models::TimeRange;
use crate::gui::state_management::DashboardState;

/// API失敗時に表示するモックデータ
fn fallback_snapshot() -> DashboardSnapshot {
    mock_snapshot(Local::now(), &mut rand::thread_rng())
}

/// ダッシュボードハンドル
#[derive(Clone)]
pub struct DashboardHandle {
    pub state: Signal<DashboardState>,
    pub time_range: Signal<TimeRange>,
    source: Arc<dyn MetricsSource>,
}

impl PartialEq for DashboardHandle {
    fn eq(&self, _other: &Self) -> bool {
        // Signalの比較は困難なので、常にfalseとして扱う
        false
    }
}

impl DashboardHandle {
    /// 指定期間で全データを読み込む（失敗時はモックデータ）
    fn load(&self, range: TimeRange) {
        let mut state = self.state;
        let source = Arc::clone(&self.source);
        let token = state.write().begin_load();

        tracing::info!(hours = range.hours(), "📡 Loading dashboard data");

        spawn(async move {
            let result = source.fetch_snapshot(range.hours()).await;
            state.write().finish_load(token, result, fallback_snapshot);
        });
    }

    /// 手動リフレッシュ（失敗時は直前のデータを維持）
    pub fn refresh(&self) {
        let mut state = self.state;
        let source = Arc::clone(&self.source);
        let hours = self.time_range.peek().hours();
        let token = state.write().begin_refresh();

        tracing::info!(hours = hours, "🔄 Refreshing dashboard data");

        spawn(async move {
            let result = source.fetch_snapshot(hours).await;
            state.write().finish_refresh(token, result);
        });
    }

    /// 期間を変更する。変更があれば effect 経由で再読み込みされる
    pub fn set_time_range(&self, range: TimeRange) {
        let mut state = self.state;
        let mut time_range = self.time_range;
        if state.write().set_time_range(range) {
            time_range.set(range);
        }
    }

    pub fn select_category(&self, name: &str) {
        let mut state = self.state;
        state.write().select_category(name);
    }

    pub fn select_streamer(&self, channel: &str) {
        let mut state = self.state;
        state.write().select_streamer(channel);
    }

    pub fn toggle_view_mode(&self) {
        let mut state = self.state;
        let mode = state.write().toggle_view_mode();
        tracing::debug!("🎨 View mode switched to {}", mode);
    }

    pub fn toggle_data_table(&self) {
        let mut state = self.state;
        state.write().toggle_data_table();
    }
}

/// ダッシュボードの状態とデータ取得を提供するフック
pub fn use_dashboard() -> DashboardHandle {
    let config = use_hook(active_config);
    let source: Arc<dyn MetricsSource> =
        use_hook(|| Arc::new(ApiClient::new(&config.api)) as Arc<dyn MetricsSource>);

    let state = use_signal(|| DashboardState::new(config.ui.time_range, config.ui.view_mode));
    let time_range = use_signal(|| config.ui.time_range);

    let handle = DashboardHandle {
        state,
        time_range,
        source,
    };

    // 期間が変わるたびに読み込み直す（初回表示時も含む）
    use_effect({
        let handle = handle.clone();
        move || {
            let range = time_range();
            handle.load(range);
        }
    });

    handle
}
