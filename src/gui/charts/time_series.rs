//! 視聴者数推移の時系列チャート

use chrono::{DateTime, Local};

use super::curve::{monotone_area_path, monotone_line_path};
use super::format::{format_hour_minute, format_month_day, format_si, format_thousands};
use super::frame::{AxisTick, ChartFrame, Margin, GRID_TICK_COUNT, Y_HEADROOM, Y_TICK_COUNT};
use super::scale::{LinearScale, TimeScale, DAY};
use crate::analytics::history::{CategorySeries, SeriesOrigin};

const MARGIN: Margin = Margin::new(20.0, 30.0, 50.0, 60.0);
const X_TICK_COUNT: usize = 6;

pub const DOT_RADIUS: f64 = 4.0;
pub const DOT_RADIUS_HOVER: f64 = 6.0;

/// データ点（マウスオーバーでツールチップを出す）
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesDot {
    pub time: DateTime<Local>,
    pub cx: f64,
    pub cy: f64,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesModel {
    pub frame: ChartFrame,
    pub title: String,
    pub y_title: &'static str,
    pub x_title: &'static str,
    /// 最小〜最大の帯。先頭点に最小・最大がない場合は描かない
    pub band_path: Option<String>,
    pub area_path: String,
    pub line_path: String,
    pub dots: Vec<TimeSeriesDot>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub grid: Vec<f64>,
    pub origin: SeriesOrigin,
}

impl TimeSeriesModel {
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}

pub fn time_series_title(category: &str) -> String {
    format!("Viewer evolution - {}", category)
}

/// 時系列のモデルを作る
pub fn time_series_chart(series: &CategorySeries, category: &str) -> TimeSeriesModel {
    let frame = ChartFrame::new(MARGIN);
    let inner_height = frame.inner_height();
    let points = &series.points;

    let mut model = TimeSeriesModel {
        frame,
        title: time_series_title(category),
        y_title: "Viewers",
        x_title: "Hour",
        band_path: None,
        area_path: String::new(),
        line_path: String::new(),
        dots: Vec::new(),
        x_ticks: Vec::new(),
        y_ticks: Vec::new(),
        grid: Vec::new(),
        origin: series.origin,
    };

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return model;
    };

    let x = TimeScale::new((first.time, last.time), (0.0, frame.inner_width()));
    let y_max = points
        .iter()
        .map(|p| {
            if p.max_viewers > 0.0 {
                p.max_viewers
            } else {
                p.viewers
            }
        })
        .fold(0.0, f64::max)
        * Y_HEADROOM;
    let y = LinearScale::new((0.0, y_max), (inner_height, 0.0));

    if first.min_viewers > 0.0 && first.max_viewers > 0.0 {
        let upper: Vec<(f64, f64)> = points
            .iter()
            .map(|p| (x.scale(p.time), y.scale(p.max_viewers)))
            .collect();
        let lower: Vec<(f64, f64)> = points
            .iter()
            .map(|p| (x.scale(p.time), y.scale(p.min_viewers)))
            .collect();
        model.band_path = Some(monotone_area_path(&upper, &lower));
    }

    let line: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (x.scale(p.time), y.scale(p.viewers)))
        .collect();
    let baseline: Vec<(f64, f64)> = line.iter().map(|&(px, _)| (px, inner_height)).collect();
    model.area_path = monotone_area_path(&line, &baseline);
    model.line_path = monotone_line_path(&line);

    model.dots = points
        .iter()
        .zip(&line)
        .map(|(p, &(cx, cy))| TimeSeriesDot {
            time: p.time,
            cx,
            cy,
            tooltip: format!("{} viewers", format_thousands(p.viewers)),
        })
        .collect();

    let tick_label: fn(&DateTime<Local>) -> String = if x.tick_interval(X_TICK_COUNT) >= DAY {
        format_month_day
    } else {
        format_hour_minute
    };
    model.x_ticks = x
        .ticks(X_TICK_COUNT)
        .into_iter()
        .map(|t| AxisTick {
            position: x.scale(t),
            label: tick_label(&t),
        })
        .collect();
    model.y_ticks = y
        .ticks(Y_TICK_COUNT)
        .into_iter()
        .map(|v| AxisTick {
            position: y.scale(v),
            label: format_si(v),
        })
        .collect();
    model.grid = y
        .ticks(GRID_TICK_COUNT)
        .into_iter()
        .map(|v| y.scale(v))
        .collect();

    model
}
