//! 状態ストアとデータ取得の統合テスト
//!
//! 差し替え可能な `MetricsSource` を使い、読み込み・フォールバック・
//! リフレッシュの流れを確認する。

use async_trait::async_trait;
use chrono::{Local, TimeZone};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use streamscope::analytics::mock_snapshot;
use streamscope::api::{DashboardSnapshot, DataSource, FetchError, MetricsSource};
use streamscope::gui::state_management::REFRESH_FAILED_MESSAGE;
use streamscope::{DashboardState, TimeRange, ViewMode};

fn api_snapshot() -> DashboardSnapshot {
    let now = Local.with_ymd_and_hms(2025, 6, 10, 15, 30, 0).unwrap();
    let mut snapshot = mock_snapshot(now, &mut StdRng::seed_from_u64(1));
    snapshot.source = DataSource::Api;
    snapshot
}

fn fallback() -> DashboardSnapshot {
    let now = Local.with_ymd_and_hms(2025, 6, 10, 15, 30, 0).unwrap();
    mock_snapshot(now, &mut StdRng::seed_from_u64(2))
}

fn timeout_error() -> FetchError {
    FetchError::Timeout {
        url: "http://localhost:8000/api/categories".to_string(),
        timeout_ms: 5000,
    }
}

/// 呼び出しごとに用意した結果を順に返すテスト用ソース
struct ScriptedSource {
    responses: Mutex<Vec<Result<DashboardSnapshot, FetchError>>>,
    requested_hours: Mutex<Vec<u32>>,
}

impl ScriptedSource {
    fn new(mut responses: Vec<Result<DashboardSnapshot, FetchError>>) -> Self {
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
            requested_hours: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MetricsSource for ScriptedSource {
    async fn fetch_snapshot(&self, hours: u32) -> Result<DashboardSnapshot, FetchError> {
        self.requested_hours.lock().push(hours);
        self.responses
            .lock()
            .pop()
            .unwrap_or_else(|| Err(timeout_error()))
    }
}

async fn load(state: &mut DashboardState, source: &dyn MetricsSource) {
    let token = state.begin_load();
    let result = source.fetch_snapshot(state.time_range.hours()).await;
    assert!(state.finish_load(token, result, fallback));
}

async fn refresh(state: &mut DashboardState, source: &dyn MetricsSource) {
    let token = state.begin_refresh();
    let result = source.fetch_snapshot(state.time_range.hours()).await;
    assert!(state.finish_refresh(token, result));
}

#[cfg(test)]
mod load_tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_load_fills_state() {
        let source = ScriptedSource::new(vec![Ok(api_snapshot())]);
        let mut state = DashboardState::new(TimeRange::Last24Hours, ViewMode::Light);
        assert!(state.loading);

        load(&mut state, &source).await;

        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.data_source, DataSource::Api);
        assert_eq!(state.selected_category.as_deref(), Some("Just Chatting"));
        assert_eq!(state.selected_streamer.as_deref(), Some("xQc"));
        assert_eq!(*source.requested_hours.lock(), vec![24]);
    }

    #[tokio::test]
    async fn test_failed_load_switches_to_mock_data() {
        let source = ScriptedSource::new(vec![Err(timeout_error())]);
        let mut state = DashboardState::new(TimeRange::Last7Days, ViewMode::Dark);

        load(&mut state, &source).await;

        assert_eq!(state.data_source, DataSource::Mock);
        assert_eq!(
            state.error.as_deref(),
            Some("Request timeout after 5000ms: http://localhost:8000/api/categories")
        );
        assert!(!state.categories.is_empty());
        assert_eq!(state.selected_category.as_deref(), Some("Just Chatting"));
        assert_eq!(*source.requested_hours.lock(), vec![168]);
    }

    #[tokio::test]
    async fn test_time_range_change_keeps_selection() {
        let source = ScriptedSource::new(vec![Ok(api_snapshot()), Ok(api_snapshot())]);
        let mut state = DashboardState::new(TimeRange::Last24Hours, ViewMode::Light);

        load(&mut state, &source).await;
        assert!(state.select_category("Valorant"));

        assert!(state.set_time_range(TimeRange::Last30Days));
        load(&mut state, &source).await;

        // 既存の選択は上書きされない
        assert_eq!(state.selected_category.as_deref(), Some("Valorant"));
        assert_eq!(*source.requested_hours.lock(), vec![24, 720]);
    }

    #[tokio::test]
    async fn test_superseded_load_is_ignored() {
        let mut state = DashboardState::new(TimeRange::Last24Hours, ViewMode::Light);

        let first = state.begin_load();
        let second = state.begin_load();

        // 後から始めた読み込みが先に完了
        assert!(state.finish_load(second, Ok(api_snapshot()), fallback));
        assert!(!state.finish_load(first, Err(timeout_error()), fallback));

        assert_eq!(state.data_source, DataSource::Api);
        assert!(state.error.is_none());
    }
}

#[cfg(test)]
mod refresh_tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_refresh_keeps_last_data() {
        let source = ScriptedSource::new(vec![Ok(api_snapshot()), Err(timeout_error())]);
        let mut state = DashboardState::new(TimeRange::Last24Hours, ViewMode::Light);

        load(&mut state, &source).await;
        let categories_before = state.categories.clone();

        refresh(&mut state, &source).await;

        assert_eq!(state.error.as_deref(), Some(REFRESH_FAILED_MESSAGE));
        assert_eq!(state.categories, categories_before);
        assert_eq!(state.data_source, DataSource::Api);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_successful_refresh_clears_error() {
        let source = ScriptedSource::new(vec![Err(timeout_error()), Ok(api_snapshot())]);
        let mut state = DashboardState::new(TimeRange::Last24Hours, ViewMode::Light);

        load(&mut state, &source).await;
        assert!(state.error.is_some());

        refresh(&mut state, &source).await;

        assert!(state.error.is_none());
        assert_eq!(state.data_source, DataSource::Api);
    }
}
