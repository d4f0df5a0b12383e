use dioxus::prelude::*;

use crate::gui::{
    components::{
        CategoryPanel, DashboardFooter, DashboardHeader, ErrorAlert, LatestUpdates,
        LoadingSpinner, StatCards, StreamerPanel, TimeSeriesPanel,
    },
    hooks::use_dashboard,
    styles::{
        theme::{get_embedded_css, get_theme_class},
        CssClasses,
    },
    utils::UiUpdateTimer,
};

/// メインウィンドウコンポーネント
#[component]
pub fn MainWindow() -> Element {
    let _timer = UiUpdateTimer::new("MainWindow");
    let handle = use_dashboard();

    let state = handle.state.read();
    let view_mode = state.view_mode;
    let css_variables = state.theme().css_variables();
    let loading = state.loading;
    let error = state.error.clone();
    let total_viewers = state.total_viewers();
    let category_count = state.categories.len();
    let stream_count = state.streams.len();
    drop(state);

    tracing::debug!(
        "🖥️ MainWindow: Rendering (loading={}, mode={})",
        loading,
        view_mode
    );

    rsx! {
        // CSSスタイルをdocument headに注入
        document::Style {
            {get_embedded_css()}
        }

        div {
            class: get_theme_class(view_mode),
            style: css_variables,

            DashboardHeader { handle: handle.clone() }

            div {
                class: CssClasses::CONTENT,

                if let Some(message) = error {
                    ErrorAlert { message }
                }

                if loading {
                    LoadingSpinner {}
                } else {
                    StatCards { total_viewers, category_count, stream_count }

                    div {
                        class: CssClasses::CHART_ROW_WIDE_LEFT,
                        CategoryPanel { handle: handle.clone() }
                        StreamerPanel { handle: handle.clone() }
                    }

                    div {
                        class: CssClasses::CHART_ROW_WIDE_MAIN,
                        TimeSeriesPanel { handle: handle.clone() }
                        LatestUpdates { handle: handle.clone() }
                    }
                }

                DashboardFooter {}
            }
        }
    }
}
