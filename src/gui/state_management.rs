use crate::analytics::history::{subject_summary, SubjectSummary};
use crate::api::{
    Category, CategoryHistoryPoint, DashboardSnapshot, DataSource, FetchError, Statistics, Stream,
    StreamHistoryPoint,
};
use crate::gui::models::{TimeRange, ViewMode};
use crate::gui::styles::theme::ThemeColors;

/// 手動リフレッシュ失敗時の表示メッセージ
pub const REFRESH_FAILED_MESSAGE: &str = "Failed to refresh data. Using last known data.";

/// 読み込み要求の世代トークン
///
/// 新しい読み込みを開始すると古いトークンの結果は破棄される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// ダッシュボード全体の状態
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub categories: Vec<Category>,
    pub streams: Vec<Stream>,
    pub category_history: Vec<CategoryHistoryPoint>,
    pub stream_history: Vec<StreamHistoryPoint>,
    pub statistics: Option<Statistics>,
    pub selected_category: Option<String>,
    pub selected_streamer: Option<String>,
    pub time_range: TimeRange,
    pub loading: bool,
    pub error: Option<String>,
    pub show_data_table: bool,
    pub view_mode: ViewMode,
    pub data_source: DataSource,
    generation: u64,
}

impl DashboardState {
    pub fn new(time_range: TimeRange, view_mode: ViewMode) -> Self {
        Self {
            time_range,
            view_mode,
            loading: true,
            ..Self::default()
        }
    }

    fn next_token(&mut self) -> LoadToken {
        self.generation += 1;
        LoadToken(self.generation)
    }

    fn is_current(&self, token: LoadToken) -> bool {
        token.0 == self.generation
    }

    /// 期間変更・起動時の読み込み開始
    pub fn begin_load(&mut self) -> LoadToken {
        self.loading = true;
        self.error = None;
        self.next_token()
    }

    /// 読み込み結果の反映
    ///
    /// 失敗時はエラーを記録し、`fallback` のモックデータで全体を置き換える。
    /// 古いトークンの結果は無視して `false` を返す。
    pub fn finish_load<F>(
        &mut self,
        token: LoadToken,
        result: Result<DashboardSnapshot, FetchError>,
        fallback: F,
    ) -> bool
    where
        F: FnOnce() -> DashboardSnapshot,
    {
        if !self.is_current(token) {
            tracing::debug!(token = token.0, current = self.generation, "⏭️ Stale load result discarded");
            return false;
        }

        match result {
            Ok(snapshot) => self.apply_snapshot(snapshot),
            Err(e) => {
                tracing::error!(error = %e, "❌ Error fetching data, loading mock data as fallback");
                self.error = Some(e.to_string());
                self.apply_snapshot(fallback());
            }
        }

        self.fill_default_selections();
        self.loading = false;
        true
    }

    /// 手動リフレッシュ開始（エラー表示は維持）
    pub fn begin_refresh(&mut self) -> LoadToken {
        self.loading = true;
        self.next_token()
    }

    /// リフレッシュ結果の反映。失敗時は最後のデータを保持する
    pub fn finish_refresh(
        &mut self,
        token: LoadToken,
        result: Result<DashboardSnapshot, FetchError>,
    ) -> bool {
        if !self.is_current(token) {
            tracing::debug!(token = token.0, current = self.generation, "⏭️ Stale refresh result discarded");
            return false;
        }

        match result {
            Ok(snapshot) => {
                self.apply_snapshot(snapshot);
                self.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "❌ Error refreshing data");
                self.error = Some(REFRESH_FAILED_MESSAGE.to_string());
            }
        }

        self.loading = false;
        true
    }

    fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        tracing::info!(
            source = %snapshot.source,
            categories = snapshot.categories.len(),
            streams = snapshot.streams.len(),
            "🔄 Dashboard data replaced"
        );

        self.categories = snapshot.categories;
        self.streams = snapshot.streams;
        self.category_history = snapshot.category_history;
        self.stream_history = snapshot.stream_history;
        self.statistics = Some(snapshot.statistics);
        self.data_source = snapshot.source;
    }

    /// 未選択の場合のみ先頭のカテゴリ・配信者を選択する
    fn fill_default_selections(&mut self) {
        if self.selected_category.is_none() {
            self.selected_category = self.categories.first().map(|c| c.category.clone());
        }
        if self.selected_streamer.is_none() {
            self.selected_streamer = self.streams.first().map(|s| s.channel.clone());
        }
    }

    /// カテゴリ選択。既に選択済みなら何もしない
    pub fn select_category(&mut self, name: &str) -> bool {
        if self.selected_category.as_deref() == Some(name) {
            return false;
        }
        tracing::debug!(category = name, "🎯 Category selected");
        self.selected_category = Some(name.to_string());
        true
    }

    pub fn select_streamer(&mut self, channel: &str) -> bool {
        if self.selected_streamer.as_deref() == Some(channel) {
            return false;
        }
        tracing::debug!(channel = channel, "🎯 Streamer selected");
        self.selected_streamer = Some(channel.to_string());
        true
    }

    pub fn set_time_range(&mut self, range: TimeRange) -> bool {
        if self.time_range == range {
            return false;
        }
        tracing::info!("🕒 Time range changed: {} → {}", self.time_range, range);
        self.time_range = range;
        true
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }

    pub fn toggle_data_table(&mut self) -> bool {
        self.show_data_table = !self.show_data_table;
        self.show_data_table
    }

    pub fn theme(&self) -> ThemeColors {
        ThemeColors::for_mode(self.view_mode)
    }

    pub fn total_viewers(&self) -> u64 {
        self.statistics.as_ref().map_or(0, |s| s.total_viewers)
    }

    pub fn top_category_name(&self) -> Option<&str> {
        self.categories.first().map(|c| c.category.as_str())
    }

    pub fn top_streamer_name(&self) -> Option<&str> {
        self.streams.first().map(|s| s.channel.as_str())
    }

    /// カテゴリの配信数。APIが返さない場合は配信一覧から数える
    pub fn category_stream_count(&self, name: &str) -> u64 {
        self.categories
            .iter()
            .find(|c| c.category == name)
            .and_then(|c| c.streams)
            .unwrap_or_else(|| self.streams.iter().filter(|s| s.category == name).count() as u64)
    }

    /// 選択中配信者の期間集計
    pub fn selected_streamer_summary(&self) -> Option<SubjectSummary> {
        let channel = self.selected_streamer.as_deref()?;
        subject_summary(&self.stream_history, channel)
    }

    pub fn last_update_display(&self) -> Option<String> {
        self.statistics.as_ref().map(|s| s.last_update_display())
    }
}
