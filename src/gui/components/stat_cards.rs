use dioxus::prelude::*;

use crate::gui::charts::format_count;
use crate::gui::styles::CssClasses;

/// 集計カード3枚（総視聴者数・カテゴリ数・配信数）
#[component]
pub fn StatCards(total_viewers: u64, category_count: usize, stream_count: usize) -> Element {
    rsx! {
        div {
            class: CssClasses::STATS_GRID,

            StatCard {
                title: "Total Viewers",
                value: format_count(total_viewers),
                icon: "👥",
            }

            StatCard {
                title: "Top Categories",
                value: category_count.to_string(),
                icon: "🏷️",
            }

            StatCard {
                title: "Active Streams",
                value: stream_count.to_string(),
                icon: "📡",
            }
        }
    }
}

/// 統計カード
#[component]
fn StatCard(title: String, value: String, icon: String) -> Element {
    rsx! {
        div {
            class: CssClasses::CARD,
            div {
                class: CssClasses::CARD_BODY,
                div {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        margin-bottom: 16px;
                    ",
                    span {
                        style: "
                            font-size: 1.4rem;
                            padding: 8px;
                            border-radius: 50%;
                            background: rgba(13, 110, 253, 0.2);
                        ",
                        "{icon}"
                    }
                    h5 { style: "margin: 0;", "{title}" }
                }
                div { class: CssClasses::STAT_VALUE, "{value}" }
                div {
                    class: CssClasses::PROGRESS,
                    div { style: "width: 100%; height: 100%;" }
                }
            }
        }
    }
}
