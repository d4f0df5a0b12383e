//! 上位配信者の棒グラフ

use super::bar::{build_bar_chart, BarChartModel, BarEntry, BarLayout};
use super::format::format_thousands;
use super::frame::{ChartFrame, Margin, Y_HEADROOM};
use crate::analytics::history::top_streams;
use crate::api::Stream;
use crate::gui::styles::ThemeColors;

pub const STREAMER_CHART_LIMIT: usize = 5;
const MARGIN: Margin = Margin::new(20.0, 30.0, 50.0, 60.0);

/// 順位ごとの色（1位はテーマの primary、5位は accent）
pub fn rank_colors(theme: &ThemeColors) -> [&'static str; STREAMER_CHART_LIMIT] {
    [theme.primary, "#9d86d9", "#b9a3e3", "#d3c7eb", theme.accent]
}

pub fn streamer_chart_title(selected_category: Option<&str>) -> String {
    match selected_category {
        Some(category) => format!("Top Streamers - {}", category),
        None => "Top Streamers".to_string(),
    }
}

/// 選択カテゴリの上位5配信者
pub fn streamer_chart(
    streams: &[Stream],
    selected_category: Option<&str>,
    selected_streamer: Option<&str>,
    theme: &ThemeColors,
) -> BarChartModel {
    let top = top_streams(streams, selected_category, STREAMER_CHART_LIMIT);
    let colors = rank_colors(theme);
    let y_max = top.iter().map(|s| s.viewers).max().unwrap_or(0) as f64 * Y_HEADROOM;

    let entries = top
        .iter()
        .enumerate()
        .map(|(rank, stream)| {
            let is_selected = selected_streamer == Some(stream.channel.as_str());
            BarEntry {
                key: stream.channel.clone(),
                value: stream.viewers as f64,
                color: if is_selected {
                    theme.primary
                } else {
                    colors[rank % colors.len()]
                },
                opacity: if is_selected { 1.0 } else { 0.7 },
                selected: is_selected,
            }
        })
        .collect();

    build_bar_chart(
        BarLayout {
            frame: ChartFrame::new(MARGIN),
            padding: 0.3,
            y_max,
            format: format_thousands,
            title: streamer_chart_title(selected_category),
            y_title: "Viewers",
            rotate_x_labels: false,
        },
        entries,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::mock_data::mock_streams;

    #[test]
    fn test_top_five_of_selected_category() {
        let streams = mock_streams();
        let model = streamer_chart(&streams, Some("Just Chatting"), None, &ThemeColors::LIGHT);

        let keys: Vec<&str> = model.bars.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["xQc", "KaiCenat", "ibai", "zackrawrr"]);
        assert_eq!(model.title, "Top Streamers - Just Chatting");
        assert_eq!(model.bars[0].value_label, "87,000");
        assert_eq!(model.bars[1].color, "#9d86d9");
    }

    #[test]
    fn test_all_streams_without_category() {
        let streams = mock_streams();
        let model = streamer_chart(&streams, None, Some("Caedrel"), &ThemeColors::DARK);

        assert_eq!(model.bars.len(), STREAMER_CHART_LIMIT);
        assert_eq!(model.title, "Top Streamers");

        let selected = model.bars.iter().find(|b| b.selected).unwrap();
        assert_eq!(selected.key, "Caedrel");
        assert_eq!(selected.color, ThemeColors::DARK.primary);
        assert_eq!(selected.opacity, 1.0);

        // 5位は accent
        assert_eq!(model.bars[4].color, ThemeColors::DARK.accent);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let streams = mock_streams();
        let model = streamer_chart(&streams, Some("Poker"), None, &ThemeColors::LIGHT);
        assert!(model.is_empty());
    }
}
