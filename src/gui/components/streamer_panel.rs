use dioxus::prelude::*;

use crate::gui::charts::streamer_chart;
use crate::gui::components::chart_svg::BarChartView;
use crate::gui::hooks::DashboardHandle;
use crate::gui::styles::CssClasses;

/// 選択カテゴリの上位配信者
#[component]
pub fn StreamerPanel(handle: DashboardHandle) -> Element {
    let state = handle.state.read();
    let theme = state.theme();
    let model = streamer_chart(
        &state.streams,
        state.selected_category.as_deref(),
        state.selected_streamer.as_deref(),
        &theme,
    );
    drop(state);

    rsx! {
        div {
            class: CssClasses::CARD,
            div {
                class: CssClasses::CARD_HEADER,
                h5 { "Top Streamers" }
            }
            div {
                class: CssClasses::CARD_BODY,
                div {
                    class: CssClasses::CHART_CONTAINER,
                    BarChartView {
                        model,
                        theme,
                        on_select: move |channel: String| handle.select_streamer(&channel),
                    }
                }
            }
        }
    }
}
