//! 履歴データの加工
//!
//! APIの履歴は「月・日・時」のみを持つため、表示用の時刻への変換と
//! 対象ごとの絞り込みをここで行う。

use chrono::{DateTime, Datelike, Duration, Local, LocalResult, NaiveDate, TimeZone};
use rand::Rng;

use crate::api::{Category, HistoryMetrics, HistoryPoint, Stream};

/// 時系列チャートの1点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub time: DateTime<Local>,
    pub viewers: f64,
    pub min_viewers: f64,
    pub max_viewers: f64,
}

/// 時系列データの出所
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOrigin {
    History,
    Synthetic,
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    pub points: Vec<SeriesPoint>,
    pub origin: SeriesOrigin,
}

/// 前年扱いにしない未来側の許容幅
const FUTURE_TOLERANCE_DAYS: i64 = 1;

/// 月・日・時から時刻を復元する
///
/// 年は `now` から取る。1日以上先の時刻になる場合だけ前年とみなす（年末年始の跨ぎ）。
/// バックエンドとの時計のずれ程度の未来はそのまま扱う。
pub fn history_timestamp(metrics: &HistoryMetrics, now: DateTime<Local>) -> Option<DateTime<Local>> {
    let at_year = |year: i32| -> Option<DateTime<Local>> {
        let naive = NaiveDate::from_ymd_opt(year, metrics.month, metrics.day)?
            .and_hms_opt(metrics.hour, 0, 0)?;
        match Local.from_local_datetime(&naive) {
            LocalResult::Single(t) => Some(t),
            LocalResult::Ambiguous(earliest, _) => Some(earliest),
            LocalResult::None => None,
        }
    };

    let candidate = at_year(now.year())?;
    if candidate > now + Duration::days(FUTURE_TOLERANCE_DAYS) {
        at_year(now.year() - 1)
    } else {
        Some(candidate)
    }
}

/// 選択中カテゴリの時系列を作る
///
/// 履歴に該当カテゴリがなければ、現在の視聴者数から24時間分を合成する。
/// カテゴリ自体が見つからなければ空。
pub fn category_series<P, R>(
    history: &[P],
    categories: &[Category],
    selected: &str,
    now: DateTime<Local>,
    rng: &mut R,
) -> CategorySeries
where
    P: HistoryPoint,
    R: Rng + ?Sized,
{
    let mut points: Vec<SeriesPoint> = history
        .iter()
        .filter(|p| p.subject() == selected)
        .filter_map(|p| {
            let m = p.metrics();
            history_timestamp(m, now).map(|time| SeriesPoint {
                time,
                viewers: m.avg_viewers,
                min_viewers: m.min_viewers as f64,
                max_viewers: m.max_viewers as f64,
            })
        })
        .collect();

    if !points.is_empty() {
        points.sort_by_key(|p| p.time);
        return CategorySeries {
            points,
            origin: SeriesOrigin::History,
        };
    }

    let Some(category) = categories.iter().find(|c| c.category == selected) else {
        return CategorySeries {
            points: Vec::new(),
            origin: SeriesOrigin::Empty,
        };
    };

    tracing::debug!(category = selected, "📈 No history for category, synthesizing series");

    let base = category.viewers as f64;
    let points = (0..24)
        .map(|i| {
            let factor: f64 = rng.gen_range(0.8..1.2);
            let viewers = (base * factor).round();
            SeriesPoint {
                time: now - Duration::hours(24 - i),
                viewers,
                min_viewers: (viewers * 0.9).round(),
                max_viewers: (viewers * 1.1).round(),
            }
        })
        .collect();

    CategorySeries {
        points,
        origin: SeriesOrigin::Synthetic,
    }
}

/// 選択カテゴリの配信を視聴者数の降順で上位 `limit` 件
///
/// カテゴリ未選択なら全配信が対象。
pub fn top_streams<'a>(streams: &'a [Stream], selected_category: Option<&str>, limit: usize) -> Vec<&'a Stream> {
    let mut filtered: Vec<&Stream> = streams
        .iter()
        .filter(|s| selected_category.map_or(true, |c| s.category == c))
        .collect();
    filtered.sort_by(|a, b| b.viewers.cmp(&a.viewers));
    filtered.truncate(limit);
    filtered
}

/// 1対象分の期間集計
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectSummary {
    pub average_viewers: f64,
    pub peak_viewers: u64,
    pub lowest_viewers: u64,
    pub samples: u64,
    pub hours: usize,
}

/// 対象（カテゴリ名・チャンネル名）の履歴を集計する。履歴がなければ `None`
pub fn subject_summary<P: HistoryPoint>(history: &[P], subject: &str) -> Option<SubjectSummary> {
    let metrics: Vec<&HistoryMetrics> = history
        .iter()
        .filter(|p| p.subject() == subject)
        .map(|p| p.metrics())
        .collect();

    if metrics.is_empty() {
        return None;
    }

    let hours = metrics.len();
    Some(SubjectSummary {
        average_viewers: metrics.iter().map(|m| m.avg_viewers).sum::<f64>() / hours as f64,
        peak_viewers: metrics.iter().map(|m| m.max_viewers).max().unwrap_or(0),
        lowest_viewers: metrics.iter().map(|m| m.min_viewers).min().unwrap_or(0),
        samples: metrics.iter().map(|m| m.count).sum(),
        hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CategoryHistoryPoint, StreamHistoryPoint};
    use chrono::Timelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 10, 15, 30, 0).unwrap()
    }

    fn metrics(month: u32, day: u32, hour: u32, avg: f64) -> HistoryMetrics {
        HistoryMetrics {
            hour,
            day,
            month,
            avg_viewers: avg,
            max_viewers: (avg * 1.2).round() as u64,
            min_viewers: (avg * 0.8).round() as u64,
            count: 10,
        }
    }

    fn category(name: &str, viewers: u64) -> Category {
        Category {
            category: name.to_string(),
            viewers,
            tags: String::new(),
            image_url: String::new(),
            timestamp: None,
            streams: None,
        }
    }

    fn stream(channel: &str, category: &str, viewers: u64) -> Stream {
        Stream {
            channel: channel.to_string(),
            category: category.to_string(),
            title: String::new(),
            viewers,
            tags: String::new(),
            timestamp: None,
        }
    }

    #[test]
    fn test_history_timestamp_same_year() {
        let t = history_timestamp(&metrics(6, 9, 22, 1.0), now()).unwrap();
        assert_eq!((t.year(), t.month(), t.day(), t.hour()), (2025, 6, 9, 22));
    }

    #[test]
    fn test_history_timestamp_rolls_back_future_dates() {
        let t = history_timestamp(&metrics(12, 31, 23, 1.0), now()).unwrap();
        assert_eq!(t.year(), 2024);
    }

    #[test]
    fn test_history_timestamp_keeps_slightly_future_hour() {
        // バックエンドの時計が少し進んでいる場合
        let now = Local.with_ymd_and_hms(2025, 6, 10, 15, 59, 58).unwrap();
        let t = history_timestamp(&metrics(6, 10, 16, 1.0), now).unwrap();
        assert_eq!((t.year(), t.month(), t.day(), t.hour()), (2025, 6, 10, 16));
    }

    #[test]
    fn test_history_timestamp_new_year_wrap() {
        let now = Local.with_ymd_and_hms(2025, 1, 1, 2, 0, 0).unwrap();
        let t = history_timestamp(&metrics(12, 31, 23, 1.0), now).unwrap();
        assert_eq!((t.year(), t.month(), t.day()), (2024, 12, 31));
    }

    #[test]
    fn test_history_timestamp_invalid_date() {
        assert!(history_timestamp(&metrics(2, 30, 1, 1.0), now()).is_none());
    }

    #[test]
    fn test_category_series_filters_and_sorts() {
        let history = vec![
            CategoryHistoryPoint { category: "Chess".into(), metrics: metrics(6, 10, 9, 300.0) },
            CategoryHistoryPoint { category: "Music".into(), metrics: metrics(6, 10, 8, 999.0) },
            CategoryHistoryPoint { category: "Chess".into(), metrics: metrics(6, 9, 23, 100.0) },
            CategoryHistoryPoint { category: "Chess".into(), metrics: metrics(6, 10, 3, 200.0) },
        ];
        let mut rng = StdRng::seed_from_u64(1);

        let series = category_series(&history, &[], "Chess", now(), &mut rng);

        assert_eq!(series.origin, SeriesOrigin::History);
        let viewers: Vec<f64> = series.points.iter().map(|p| p.viewers).collect();
        assert_eq!(viewers, vec![100.0, 200.0, 300.0]);
        assert!(series.points.windows(2).all(|w| w[0].time < w[1].time));
    }

    #[test]
    fn test_category_series_synthesizes_without_history() {
        let history: Vec<CategoryHistoryPoint> = vec![];
        let categories = vec![category("Chess", 10_000)];
        let mut rng = StdRng::seed_from_u64(3);

        let series = category_series(&history, &categories, "Chess", now(), &mut rng);

        assert_eq!(series.origin, SeriesOrigin::Synthetic);
        assert_eq!(series.points.len(), 24);
        for p in &series.points {
            assert!(p.viewers >= 8_000.0 && p.viewers <= 12_000.0);
            assert_eq!(p.min_viewers, (p.viewers * 0.9).round());
            assert_eq!(p.max_viewers, (p.viewers * 1.1).round());
        }
        assert_eq!(series.points[0].time, now() - Duration::hours(24));
    }

    #[test]
    fn test_category_series_unknown_category_is_empty() {
        let history: Vec<CategoryHistoryPoint> = vec![];
        let mut rng = StdRng::seed_from_u64(3);

        let series = category_series(&history, &[category("Chess", 1)], "Music", now(), &mut rng);

        assert_eq!(series.origin, SeriesOrigin::Empty);
        assert!(series.points.is_empty());
    }

    #[test]
    fn test_top_streams_filters_sorts_and_truncates() {
        let streams = vec![
            stream("a", "Chess", 10),
            stream("b", "Music", 500),
            stream("c", "Chess", 30),
            stream("d", "Chess", 20),
        ];

        let top: Vec<&str> = top_streams(&streams, Some("Chess"), 2)
            .iter()
            .map(|s| s.channel.as_str())
            .collect();
        assert_eq!(top, vec!["c", "d"]);

        let all: Vec<&str> = top_streams(&streams, None, 5)
            .iter()
            .map(|s| s.channel.as_str())
            .collect();
        assert_eq!(all, vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn test_subject_summary() {
        let history = vec![
            StreamHistoryPoint { channel: "xQc".into(), metrics: metrics(6, 10, 1, 100.0) },
            StreamHistoryPoint { channel: "xQc".into(), metrics: metrics(6, 10, 2, 300.0) },
            StreamHistoryPoint { channel: "other".into(), metrics: metrics(6, 10, 2, 9999.0) },
        ];

        let summary = subject_summary(&history, "xQc").unwrap();
        assert_eq!(summary.average_viewers, 200.0);
        assert_eq!(summary.peak_viewers, 360);
        assert_eq!(summary.lowest_viewers, 80);
        assert_eq!(summary.samples, 20);
        assert_eq!(summary.hours, 2);

        assert!(subject_summary(&history, "nobody").is_none());
    }
}
