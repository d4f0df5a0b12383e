use dioxus::prelude::*;

use crate::gui::charts::{category::CATEGORY_CHART_LIMIT, category_chart, format_count};
use crate::gui::components::chart_svg::BarChartView;
use crate::gui::hooks::DashboardHandle;
use crate::gui::styles::{theme::get_button_class, CssClasses};

/// 上位カテゴリ（グラフ・表の切り替え）
#[component]
pub fn CategoryPanel(handle: DashboardHandle) -> Element {
    let state = handle.state.read();
    let theme = state.theme();
    let show_table = state.show_data_table;
    let selected = state.selected_category.clone();

    let model = category_chart(&state.categories, selected.as_deref(), &theme);
    let rows: Vec<(usize, String, String, u64)> = state
        .categories
        .iter()
        .take(CATEGORY_CHART_LIMIT)
        .enumerate()
        .map(|(i, c)| {
            (
                i + 1,
                c.category.clone(),
                format_count(c.viewers),
                state.category_stream_count(&c.category),
            )
        })
        .collect();
    drop(state);

    let toggle_handle = handle.clone();
    let chart_handle = handle.clone();

    rsx! {
        div {
            class: CssClasses::CARD,

            div {
                class: CssClasses::CARD_HEADER,
                h5 { "Top Categories by Viewers" }
                button {
                    class: get_button_class(true, false),
                    onclick: move |_| toggle_handle.toggle_data_table(),
                    if show_table { "📊 Show Chart" } else { "📋 Show Table" }
                }
            }

            div {
                class: CssClasses::CARD_BODY,

                if show_table {
                    div {
                        style: "max-height: 320px; overflow-y: auto;",
                        table {
                            class: CssClasses::DATA_TABLE,
                            thead {
                                tr {
                                    th { "Rank" }
                                    th { "Category" }
                                    th { class: "text-end", "Viewers" }
                                    th { class: "text-end", "Streams" }
                                }
                            }
                            tbody {
                                for (rank, name, viewers, streams) in rows {
                                    {
                                        let row_class = if selected.as_deref() == Some(name.as_str()) {
                                            CssClasses::ROW_SELECTED
                                        } else {
                                            ""
                                        };
                                        let row_handle = handle.clone();
                                        let click_name = name.clone();
                                        rsx! {
                                            tr {
                                                key: "{name}",
                                                class: row_class,
                                                onclick: move |_| row_handle.select_category(&click_name),
                                                td { "{rank}" }
                                                td { "{name}" }
                                                td { class: "text-end", "{viewers}" }
                                                td { class: "text-end", "{streams}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                } else {
                    div {
                        class: CssClasses::CHART_CONTAINER,
                        BarChartView {
                            model,
                            theme,
                            on_select: move |name: String| chart_handle.select_category(&name),
                        }
                    }
                }
            }
        }
    }
}
