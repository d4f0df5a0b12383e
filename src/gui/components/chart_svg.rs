//! チャート共通のSVG部品

use dioxus::prelude::*;

use crate::gui::charts::{AxisTick, BarChartModel, ChartFrame};
use crate::gui::styles::{CssClasses, ThemeColors};

/// 横方向のグリッド線
#[component]
pub fn GridLines(positions: Vec<f64>, width: f64, color: &'static str) -> Element {
    rsx! {
        g {
            class: "grid",
            for (i, y) in positions.into_iter().enumerate() {
                line {
                    key: "{i}",
                    x1: "0",
                    x2: "{width}",
                    y1: "{y}",
                    y2: "{y}",
                    stroke: color,
                    stroke_opacity: "0.3",
                }
            }
        }
    }
}

/// 左側のy軸
#[component]
pub fn AxisLeft(ticks: Vec<AxisTick>, height: f64, axis_color: &'static str, text_color: &'static str) -> Element {
    rsx! {
        g {
            class: "axis axis-left",
            line { x1: "0", x2: "0", y1: "0", y2: "{height}", stroke: axis_color }
            for (i, tick) in ticks.into_iter().enumerate() {
                g {
                    key: "{i}",
                    transform: "translate(0,{tick.position})",
                    line { x1: "-6", x2: "0", stroke: axis_color }
                    text {
                        x: "-9",
                        dy: "0.32em",
                        text_anchor: "end",
                        font_size: "10",
                        fill: text_color,
                        "{tick.label}"
                    }
                }
            }
        }
    }
}

/// 下側のx軸（`rotate` で -45° 回転ラベル）
#[component]
pub fn AxisBottom(
    ticks: Vec<AxisTick>,
    width: f64,
    height: f64,
    rotate: bool,
    axis_color: &'static str,
    text_color: &'static str,
) -> Element {
    rsx! {
        g {
            class: "axis axis-bottom",
            transform: "translate(0,{height})",
            line { x1: "0", x2: "{width}", y1: "0", y2: "0", stroke: axis_color }
            for (i, tick) in ticks.into_iter().enumerate() {
                g {
                    key: "{i}",
                    transform: "translate({tick.position},0)",
                    line { y1: "0", y2: "6", stroke: axis_color }
                    if rotate {
                        text {
                            transform: "translate(-10,9)rotate(-45)",
                            text_anchor: "end",
                            font_size: "10",
                            fill: text_color,
                            "{tick.label}"
                        }
                    } else {
                        text {
                            y: "9",
                            dy: "0.71em",
                            text_anchor: "middle",
                            font_size: "10",
                            fill: text_color,
                            "{tick.label}"
                        }
                    }
                }
            }
        }
    }
}

/// チャート上部のタイトル
#[component]
pub fn ChartTitle(title: String, frame: ChartFrame, color: &'static str) -> Element {
    let x = frame.inner_width() / 2.0;
    let y = -frame.margin.top / 2.0;

    rsx! {
        text {
            x: "{x}",
            y: "{y}",
            text_anchor: "middle",
            font_size: "16",
            font_weight: "bold",
            fill: color,
            "{title}"
        }
    }
}

/// 縦書きのy軸タイトル
#[component]
pub fn YAxisTitle(title: &'static str, frame: ChartFrame, offset: f64, color: &'static str) -> Element {
    let x = -frame.inner_height() / 2.0;
    let y = -frame.margin.left + offset;

    rsx! {
        text {
            transform: "rotate(-90)",
            x: "{x}",
            y: "{y}",
            dy: "1em",
            text_anchor: "middle",
            font_size: "12",
            fill: color,
            "{title}"
        }
    }
}

/// データがない場合の表示
#[component]
pub fn ChartPlaceholder(message: String) -> Element {
    rsx! {
        div { class: CssClasses::CHART_EMPTY, "{message}" }
    }
}

/// 棒グラフの描画（クリックで選択）
#[component]
pub fn BarChartView(model: BarChartModel, theme: ThemeColors, on_select: EventHandler<String>) -> Element {
    let mut hovered = use_signal(|| None::<String>);

    if model.is_empty() {
        return rsx! {
            ChartPlaceholder { message: "No data available" }
        };
    }

    let frame = model.frame;
    let inner_width = frame.inner_width();
    let inner_height = frame.inner_height();

    rsx! {
        svg {
            view_box: frame.view_box(),
            preserve_aspect_ratio: "xMidYMid meet",
            g {
                transform: frame.inner_transform(),

                GridLines { positions: model.grid.clone(), width: inner_width, color: theme.grid }

                for bar in model.bars.iter().cloned() {
                    {
                        let is_hovered = hovered().as_deref() == Some(bar.key.as_str());
                        let opacity = if is_hovered { 0.9 } else { bar.opacity };
                        let stroke = if is_hovered { theme.accent } else { "none" };
                        let enter_key = bar.key.clone();
                        let click_key = bar.key.clone();
                        rsx! {
                            rect {
                                key: "{bar.key}",
                                class: "bar",
                                x: "{bar.x}",
                                y: "{bar.y}",
                                width: "{bar.width}",
                                height: "{bar.height}",
                                rx: "4",
                                fill: bar.color,
                                opacity: "{opacity}",
                                stroke: stroke,
                                stroke_width: "2",
                                style: "cursor: pointer;",
                                onmouseenter: move |_| hovered.set(Some(enter_key.clone())),
                                onmouseleave: move |_| hovered.set(None),
                                onclick: move |_| on_select.call(click_key.clone()),
                            }
                        }
                    }
                }

                for bar in model.bars.iter() {
                    text {
                        key: "label-{bar.key}",
                        class: "bar-label",
                        x: "{bar.label_x}",
                        y: "{bar.label_y}",
                        text_anchor: "middle",
                        font_size: "10",
                        fill: theme.text,
                        "{bar.value_label}"
                    }
                }

                AxisBottom {
                    ticks: model.x_ticks.clone(),
                    width: inner_width,
                    height: inner_height,
                    rotate: model.rotate_x_labels,
                    axis_color: theme.axis,
                    text_color: theme.text,
                }
                AxisLeft {
                    ticks: model.y_ticks.clone(),
                    height: inner_height,
                    axis_color: theme.axis,
                    text_color: theme.text,
                }
                YAxisTitle { title: model.y_title, frame, offset: 0.0, color: theme.text }
                ChartTitle { title: model.title.clone(), frame, color: theme.text }
            }
        }
    }
}
