use dioxus::prelude::*;

use crate::gui::styles::CssClasses;

/// エラー表示
#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx! {
        div {
            class: CssClasses::ERROR_ALERT,
            role: "alert",
            span { style: "font-size: 1.4rem;", "⚠️" }
            div { "{message}" }
        }
    }
}

/// 読み込み中表示
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: CssClasses::LOADING,
            div { class: CssClasses::SPINNER, role: "status" }
            p { style: "margin-top: 16px;", "Loading data..." }
        }
    }
}

#[component]
pub fn DashboardFooter() -> Element {
    rsx! {
        div {
            class: CssClasses::FOOTER,
            p {
                style: "margin: 0;",
                "© 2025 Twitch Analytics Dashboard - Real-time streaming data visualizations"
            }
        }
    }
}
