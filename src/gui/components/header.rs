use dioxus::prelude::*;

use crate::gui::hooks::DashboardHandle;
use crate::gui::models::TimeRange;
use crate::gui::styles::{theme::get_button_class, CssClasses};

/// ヘッダー（リフレッシュ・期間選択・ダークモード切替）
#[component]
pub fn DashboardHeader(handle: DashboardHandle) -> Element {
    let state = handle.state.read();
    let current_range = state.time_range;
    let is_dark = state.view_mode.is_dark();
    let loading = state.loading;
    drop(state);

    let refresh_handle = handle.clone();
    let range_handle = handle.clone();
    let theme_handle = handle.clone();

    rsx! {
        div {
            class: CssClasses::APP_HEADER,

            h1 {
                class: CssClasses::APP_TITLE,
                span { style: "color: var(--primary); margin-right: 12px;", "📺" }
                "Twitch Analytics Dashboard"
            }

            div {
                class: CssClasses::HEADER_CONTROLS,

                button {
                    class: get_button_class(false, false),
                    disabled: loading,
                    onclick: move |_| {
                        tracing::info!("🔄 Refresh button clicked");
                        refresh_handle.refresh();
                    },
                    "🔄 Refresh"
                }

                select {
                    value: current_range.as_key(),
                    onchange: move |event| {
                        match event.value().parse::<TimeRange>() {
                            Ok(range) => range_handle.set_time_range(range),
                            Err(e) => tracing::warn!("⚠️ {}", e),
                        }
                    },
                    for range in TimeRange::ALL {
                        option {
                            key: "{range.as_key()}",
                            value: range.as_key(),
                            selected: range == current_range,
                            "🕒 {range}"
                        }
                    }
                }

                label {
                    class: "theme-switch",
                    input {
                        r#type: "checkbox",
                        checked: is_dark,
                        onchange: move |_| theme_handle.toggle_view_mode(),
                    }
                    if is_dark { "🌙" } else { "☀️" }
                }
            }
        }
    }
}
