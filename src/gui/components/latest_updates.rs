use dioxus::prelude::*;

use crate::api::DataSource;
use crate::gui::charts::{format_count, format_thousands};
use crate::gui::hooks::DashboardHandle;
use crate::gui::styles::CssClasses;

/// 最終更新・トップ情報・選択配信者の集計
#[component]
pub fn LatestUpdates(handle: DashboardHandle) -> Element {
    let state = handle.state.read();

    let last_update = state.last_update_display();
    let top_category = state.top_category_name().unwrap_or("N/A").to_string();
    let top_streamer = state.top_streamer_name().unwrap_or("N/A").to_string();
    let selected_streamer = state.selected_streamer.clone();
    let summary = state.selected_streamer_summary();
    let source = state.data_source;
    drop(state);

    rsx! {
        div {
            class: CssClasses::CARD,
            style: "height: 100%;",

            div {
                class: CssClasses::CARD_HEADER,
                h5 { "Latest Updates" }
                if source != DataSource::Empty {
                    span { class: CssClasses::SOURCE_BADGE, "{source}" }
                }
            }

            ul {
                class: CssClasses::UPDATE_LIST,

                if let Some(last_update) = last_update {
                    UpdateRow { label: "Last update", value: last_update }
                }
                UpdateRow { label: "Top category", value: top_category }
                UpdateRow { label: "Top streamer", value: top_streamer }

                if let (Some(channel), Some(summary)) = (selected_streamer, summary) {
                    UpdateRow { label: "Selected", value: channel }
                    UpdateRow { label: "Avg viewers", value: format_thousands(summary.average_viewers) }
                    UpdateRow { label: "Peak", value: format_count(summary.peak_viewers) }
                    UpdateRow { label: "Lowest", value: format_count(summary.lowest_viewers) }
                    UpdateRow { label: "Hours tracked", value: summary.hours.to_string() }
                }
            }
        }
    }
}

#[component]
fn UpdateRow(label: String, value: String) -> Element {
    rsx! {
        li {
            span { class: "label", "{label}" }
            span { style: "font-weight: 500;", "{value}" }
        }
    }
}
