//! 棒グラフ共通のモデル

use super::frame::{AxisTick, ChartFrame, GRID_TICK_COUNT, Y_TICK_COUNT};
use super::scale::{BandScale, LinearScale};

/// 棒1本分の描画情報
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub key: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
    pub opacity: f64,
    pub selected: bool,
    pub value_label: String,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartModel {
    pub frame: ChartFrame,
    pub title: String,
    pub y_title: &'static str,
    pub bars: Vec<BarDatum>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub grid: Vec<f64>,
    /// x軸ラベルを -45° 回転させるか
    pub rotate_x_labels: bool,
}

impl BarChartModel {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// 棒の入力値
#[derive(Debug, Clone)]
pub(crate) struct BarEntry {
    pub key: String,
    pub value: f64,
    pub color: &'static str,
    pub opacity: f64,
    pub selected: bool,
}

pub(crate) struct BarLayout {
    pub frame: ChartFrame,
    pub padding: f64,
    pub y_max: f64,
    pub format: fn(f64) -> String,
    pub title: String,
    pub y_title: &'static str,
    pub rotate_x_labels: bool,
}

pub(crate) fn build_bar_chart(layout: BarLayout, entries: Vec<BarEntry>) -> BarChartModel {
    let frame = layout.frame;
    let inner_height = frame.inner_height();

    if entries.is_empty() {
        return BarChartModel {
            frame,
            title: layout.title,
            y_title: layout.y_title,
            bars: Vec::new(),
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            grid: Vec::new(),
            rotate_x_labels: layout.rotate_x_labels,
        };
    }

    let x = BandScale::new(
        entries.iter().map(|e| e.key.clone()).collect(),
        (0.0, frame.inner_width()),
        layout.padding,
    );
    let y = LinearScale::new((0.0, layout.y_max), (inner_height, 0.0));
    let bandwidth = x.bandwidth();

    let mut bars = Vec::with_capacity(entries.len());
    let mut x_ticks = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(left) = x.position(&entry.key) else {
            continue;
        };
        let top = y.scale(entry.value);
        x_ticks.push(AxisTick {
            position: left + bandwidth / 2.0,
            label: entry.key.clone(),
        });
        bars.push(BarDatum {
            x: left,
            y: top,
            width: bandwidth,
            height: (inner_height - top).max(0.0),
            color: entry.color,
            opacity: entry.opacity,
            selected: entry.selected,
            value_label: (layout.format)(entry.value),
            label_x: left + bandwidth / 2.0,
            label_y: top - 5.0,
            key: entry.key,
        });
    }

    let y_ticks = y
        .ticks(Y_TICK_COUNT)
        .into_iter()
        .map(|v| AxisTick {
            position: y.scale(v),
            label: (layout.format)(v),
        })
        .collect();
    let grid = y
        .ticks(GRID_TICK_COUNT)
        .into_iter()
        .map(|v| y.scale(v))
        .collect();

    BarChartModel {
        frame,
        title: layout.title,
        y_title: layout.y_title,
        bars,
        x_ticks,
        y_ticks,
        grid,
        rotate_x_labels: layout.rotate_x_labels,
    }
}
