//! 上位カテゴリの棒グラフ

use super::bar::{build_bar_chart, BarChartModel, BarEntry, BarLayout};
use super::format::format_si;
use super::frame::{ChartFrame, Margin, Y_HEADROOM};
use crate::api::Category;
use crate::gui::styles::ThemeColors;

pub const CATEGORY_CHART_LIMIT: usize = 10;
pub const CATEGORY_CHART_TITLE: &str = "Top 10 Categories by Viewers";
const MARGIN: Margin = Margin::new(20.0, 30.0, 90.0, 60.0);

/// カテゴリ棒グラフのモデルを作る
///
/// y軸の上限は表示する10件ではなく全カテゴリの最大値から決める。
pub fn category_chart(
    categories: &[Category],
    selected: Option<&str>,
    theme: &ThemeColors,
) -> BarChartModel {
    let y_max = categories
        .iter()
        .map(|c| c.viewers)
        .max()
        .unwrap_or(0) as f64
        * Y_HEADROOM;

    let entries = categories
        .iter()
        .take(CATEGORY_CHART_LIMIT)
        .map(|c| {
            let is_selected = selected == Some(c.category.as_str());
            BarEntry {
                key: c.category.clone(),
                value: c.viewers as f64,
                color: if is_selected {
                    theme.primary
                } else {
                    theme.secondary
                },
                opacity: if is_selected { 1.0 } else { 0.7 },
                selected: is_selected,
            }
        })
        .collect();

    build_bar_chart(
        BarLayout {
            frame: ChartFrame::new(MARGIN),
            padding: 0.2,
            y_max,
            format: format_si,
            title: CATEGORY_CHART_TITLE.to_string(),
            y_title: "Number of viewers",
            rotate_x_labels: true,
        },
        entries,
    )
}
