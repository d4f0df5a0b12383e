//! テーマとスタイルヘルパー

use crate::gui::models::ViewMode;

/// CSS クラス名の定数
pub struct CssClasses;

impl CssClasses {
    // アプリケーション
    pub const APP: &'static str = "app";
    pub const MAIN_WINDOW: &'static str = "main-window";
    pub const CONTENT: &'static str = "dashboard-content";

    // ヘッダー
    pub const APP_HEADER: &'static str = "app-header";
    pub const APP_TITLE: &'static str = "app-title";
    pub const HEADER_CONTROLS: &'static str = "header-controls";

    // ボタン
    pub const BTN: &'static str = "btn";
    pub const BTN_OUTLINE: &'static str = "btn-outline";
    pub const BTN_SMALL: &'static str = "btn-small";

    // カード
    pub const CARD: &'static str = "card";
    pub const CARD_HEADER: &'static str = "card-header";
    pub const CARD_BODY: &'static str = "card-body";
    pub const STATS_GRID: &'static str = "stats-grid";
    pub const STAT_VALUE: &'static str = "stat-value";
    pub const PROGRESS: &'static str = "progress";

    // チャート
    pub const CHART_ROW_WIDE_LEFT: &'static str = "chart-row wide-left";
    pub const CHART_ROW_WIDE_MAIN: &'static str = "chart-row wide-main";
    pub const CHART_CONTAINER: &'static str = "chart-container";
    pub const CHART_EMPTY: &'static str = "chart-empty";

    // テーブル
    pub const DATA_TABLE: &'static str = "data-table";
    pub const ROW_SELECTED: &'static str = "row-selected";

    // ステータス
    pub const ERROR_ALERT: &'static str = "error-alert";
    pub const LOADING: &'static str = "loading";
    pub const SPINNER: &'static str = "spinner";
    pub const UPDATE_LIST: &'static str = "update-list";
    pub const SOURCE_BADGE: &'static str = "source-badge";

    // フッター
    pub const FOOTER: &'static str = "app-footer";
}

/// テーマの配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: &'static str,
    pub text: &'static str,
    pub axis: &'static str,
    pub grid: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub card_bg: &'static str,
    pub gradient_start: &'static str,
    pub gradient_end: &'static str,
}

impl ThemeColors {
    pub const LIGHT: ThemeColors = ThemeColors {
        background: "#f8f9fa",
        text: "#333",
        axis: "#666",
        grid: "#eee",
        primary: "#9146ff",
        secondary: "#7952b3",
        accent: "#38a3a5",
        card_bg: "#ffffff",
        gradient_start: "rgba(145, 70, 255, 0.8)",
        gradient_end: "rgba(145, 70, 255, 0.2)",
    };

    pub const DARK: ThemeColors = ThemeColors {
        background: "#1f1f1f",
        text: "#e0e0e0",
        axis: "#888",
        grid: "#333",
        primary: "#9146ff",
        secondary: "#7952b3",
        accent: "#38a3a5",
        card_bg: "#2d2d2d",
        gradient_start: "rgba(145, 70, 255, 0.8)",
        gradient_end: "rgba(145, 70, 255, 0.2)",
    };

    pub fn for_mode(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Light => Self::LIGHT,
            ViewMode::Dark => Self::DARK,
        }
    }

    /// 面グラフのグラデーション（offset, 色）
    pub fn area_gradient_stops(&self) -> [(&'static str, &'static str); 2] {
        [("0%", self.gradient_start), ("100%", self.gradient_end)]
    }

    /// ルート要素に渡すCSS変数
    pub fn css_variables(&self) -> String {
        format!(
            "--bg: {}; --text: {}; --axis: {}; --grid: {}; --primary: {}; --secondary: {}; --accent: {}; --card-bg: {};",
            self.background,
            self.text,
            self.axis,
            self.grid,
            self.primary,
            self.secondary,
            self.accent,
            self.card_bg
        )
    }
}

/// ルート要素のクラス（テーマ別）
pub fn get_theme_class(mode: ViewMode) -> String {
    format!("{} theme-{}", CssClasses::MAIN_WINDOW, mode)
}

/// ボタンの状態に応じたCSSクラスを取得
pub fn get_button_class(small: bool, active: bool) -> String {
    let mut classes = format!("{} {}", CssClasses::BTN, CssClasses::BTN_OUTLINE);
    if small {
        classes.push(' ');
        classes.push_str(CssClasses::BTN_SMALL);
    }
    if active {
        classes.push_str(" active");
    }
    classes
}

/// CSSの埋め込み用ヘルパー
pub fn get_embedded_css() -> &'static str {
    include_str!("theme.css")
}
