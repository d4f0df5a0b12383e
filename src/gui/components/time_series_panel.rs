use chrono::Local;
use dioxus::prelude::*;

use crate::analytics::history::category_series;
use crate::gui::charts::time_series::{DOT_RADIUS, DOT_RADIUS_HOVER};
use crate::gui::charts::{time_series_chart, TimeSeriesModel};
use crate::gui::components::chart_svg::{
    AxisBottom, AxisLeft, ChartPlaceholder, ChartTitle, GridLines, YAxisTitle,
};
use crate::gui::hooks::DashboardHandle;
use crate::gui::styles::{CssClasses, ThemeColors};

/// 選択カテゴリの視聴者数推移
#[component]
pub fn TimeSeriesPanel(handle: DashboardHandle) -> Element {
    let state = handle.state;

    // 合成データは乱数を使うため、状態が変わったときだけ作り直す
    let model = use_memo(move || {
        let state = state.read();
        let category = state.selected_category.clone()?;
        let series = category_series(
            &state.category_history,
            &state.categories,
            &category,
            Local::now(),
            &mut rand::thread_rng(),
        );
        Some(time_series_chart(&series, &category))
    });
    let theme = state.read().theme();

    rsx! {
        div {
            class: CssClasses::CARD,
            div {
                class: CssClasses::CARD_HEADER,
                h5 { "Viewer Evolution" }
            }
            div {
                class: CssClasses::CARD_BODY,
                div {
                    class: CssClasses::CHART_CONTAINER,
                    {
                        match model() {
                            Some(model) if !model.is_empty() => rsx! {
                                TimeSeriesView { model, theme }
                            },
                            Some(_) => rsx! {
                                ChartPlaceholder { message: "No history available for this category" }
                            },
                            None => rsx! {
                                ChartPlaceholder { message: "Select a category to see its evolution" }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TimeSeriesView(model: TimeSeriesModel, theme: ThemeColors) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    let frame = model.frame;
    let inner_width = frame.inner_width();
    let inner_height = frame.inner_height();
    let x_title_x = inner_width / 2.0;
    let x_title_y = inner_height + frame.margin.bottom - 10.0;
    let tooltip = hovered().and_then(|i| model.dots.get(i).cloned()).map(|dot| {
        let transform = format!("translate({},{})", dot.cx, dot.cy - 15.0);
        (transform, dot.tooltip)
    });

    rsx! {
        svg {
            view_box: frame.view_box(),
            preserve_aspect_ratio: "xMidYMid meet",
            g {
                transform: frame.inner_transform(),

                GridLines { positions: model.grid.clone(), width: inner_width, color: theme.grid }

                if let Some(band) = model.band_path.clone() {
                    path { d: band, fill: theme.secondary, fill_opacity: "0.2" }
                }

                defs {
                    linearGradient {
                        id: "areaGradient",
                        x1: "0%",
                        y1: "0%",
                        x2: "0%",
                        y2: "100%",
                        for (offset, color) in theme.area_gradient_stops() {
                            stop { key: "{offset}", offset: offset, stop_color: color }
                        }
                    }
                }

                path { d: model.area_path.clone(), fill: "url(#areaGradient)" }
                path {
                    d: model.line_path.clone(),
                    fill: "none",
                    stroke: theme.primary,
                    stroke_width: "2",
                }

                for (i, dot) in model.dots.iter().enumerate() {
                    {
                        let is_hovered = hovered() == Some(i);
                        let radius = if is_hovered { DOT_RADIUS_HOVER } else { DOT_RADIUS };
                        let stroke = if is_hovered { theme.text } else { "none" };
                        rsx! {
                            circle {
                                key: "{i}",
                                class: "dot",
                                cx: "{dot.cx}",
                                cy: "{dot.cy}",
                                r: "{radius}",
                                fill: theme.primary,
                                stroke: stroke,
                                stroke_width: "2",
                                onmouseenter: move |_| hovered.set(Some(i)),
                                onmouseleave: move |_| hovered.set(None),
                            }
                        }
                    }
                }

                AxisBottom {
                    ticks: model.x_ticks.clone(),
                    width: inner_width,
                    height: inner_height,
                    rotate: false,
                    axis_color: theme.axis,
                    text_color: theme.text,
                }
                AxisLeft {
                    ticks: model.y_ticks.clone(),
                    height: inner_height,
                    axis_color: theme.axis,
                    text_color: theme.text,
                }

                ChartTitle { title: model.title.clone(), frame, color: theme.text }
                YAxisTitle { title: model.y_title, frame, offset: 20.0, color: theme.text }
                text {
                    x: "{x_title_x}",
                    y: "{x_title_y}",
                    text_anchor: "middle",
                    font_size: "12",
                    fill: theme.text,
                    "{model.x_title}"
                }

                if let Some((transform, label)) = tooltip {
                    g {
                        class: "tooltip",
                        transform: transform,
                        rect {
                            x: "-60",
                            y: "-30",
                            width: "120",
                            height: "30",
                            rx: "5",
                            fill: theme.card_bg,
                            stroke: theme.text,
                            stroke_width: "1",
                        }
                        text {
                            x: "0",
                            y: "-10",
                            text_anchor: "middle",
                            font_size: "12",
                            fill: theme.text,
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
