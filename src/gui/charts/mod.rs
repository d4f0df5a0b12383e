//! チャートモデル
//!
//! 状態から描画用の座標・ラベルを計算する純粋関数群。
//! Dioxus には依存せず、描画は `gui::components::chart_svg` が行う。

pub mod bar;
pub mod category;
pub mod curve;
pub mod format;
pub mod frame;
pub mod scale;
pub mod streamer;
pub mod time_series;

pub use bar::{BarChartModel, BarDatum};
pub use category::category_chart;
pub use format::{format_count, format_si, format_thousands};
pub use frame::{AxisTick, ChartFrame, Margin, CHART_HEIGHT, CHART_WIDTH};
pub use scale::{BandScale, LinearScale, TimeScale};
pub use streamer::streamer_chart;
pub use time_series::{time_series_chart, TimeSeriesDot, TimeSeriesModel};
