//! 開発・オフライン用のモックデータ
//!
//! APIサーバーに接続できない場合、ダッシュボード全体をこのデータで表示する。

use chrono::{DateTime, Datelike, Duration, Local, Timelike};
use rand::Rng;

use crate::api::{
    Category, CategoryHistoryPoint, DashboardSnapshot, DataSource, HistoryMetrics, Statistics,
    Stream, StreamHistoryPoint,
};

/// 履歴を生成する時間数
pub const MOCK_HISTORY_HOURS: i64 = 24;
/// 履歴を生成する上位件数
pub const MOCK_HISTORY_SUBJECTS: usize = 5;
/// statisticsに含める上位件数
pub const MOCK_STATISTICS_TOP: usize = 10;

const CATEGORY_SEED: &[(&str, u64, &str)] = &[
    ("Just Chatting", 380_000, "IRL, Talk Show"),
    ("Grand Theft Auto V", 190_000, "Action, Adventure Game"),
    ("League of Legends", 160_000, "MOBA, Strategy"),
    ("Counter-Strike", 120_000, "FPS, Shooter"),
    ("Valorant", 95_000, "FPS, Shooter"),
    ("Fortnite", 70_000, "Shooter, Battle Royale"),
    ("Minecraft", 64_000, "Survival, Simulation"),
    ("Dota 2", 58_000, "MOBA, Strategy"),
    ("World of Warcraft", 41_000, "RPG, MMO"),
    ("Apex Legends", 36_000, "FPS, Battle Royale"),
    ("Music", 22_000, "Creative, Performance"),
    ("Chess", 12_000, "Strategy, Board Game"),
];

const STREAM_SEED: &[(&str, &str, &str, u64, &str)] = &[
    ("xQc", "Just Chatting", "OPENING CASES !gamble", 87_000, "English"),
    ("KaiCenat", "Just Chatting", "MAFIATHON DAY 12", 64_000, "English"),
    ("ibai", "Just Chatting", "VELADA PREVIEW", 52_000, "Español"),
    ("zackrawrr", "Just Chatting", "news & reacts", 31_000, "English"),
    ("summit1g", "Grand Theft Auto V", "NoPixel | Charles", 28_000, "English, Roleplay"),
    ("Tarik", "Valorant", "VCT WATCH PARTY", 41_000, "English, Esports"),
    ("Caedrel", "League of Legends", "LEC CO-STREAM", 45_000, "English, Esports"),
    ("ohnePixel", "Counter-Strike", "MAJOR PICKEMS", 33_000, "English"),
    ("s1mple", "Counter-Strike", "FPL grind", 22_000, "Русский"),
    ("Tfue", "Fortnite", "ranked arena", 19_000, "English"),
    ("Tubbo", "Minecraft", "SMP day 4", 17_000, "English"),
    ("Gorgc", "Dota 2", "immortal ranked", 15_000, "English"),
    ("Asmongold", "World of Warcraft", "NEW PATCH TODAY", 38_000, "English"),
    ("ImperialHal", "Apex Legends", "ALGS scrims", 12_000, "English, Esports"),
    ("GMHikaru", "Chess", "speedrun to 3200", 9_000, "English"),
];

/// モックのカテゴリ一覧（視聴者数の降順）
pub fn mock_categories() -> Vec<Category> {
    CATEGORY_SEED
        .iter()
        .map(|(name, viewers, tags)| Category {
            category: name.to_string(),
            viewers: *viewers,
            tags: tags.to_string(),
            image_url: "/api/placeholder/60/80".to_string(),
            timestamp: None,
            streams: None,
        })
        .collect()
}

/// モックの配信一覧（視聴者数の降順）
pub fn mock_streams() -> Vec<Stream> {
    let mut streams: Vec<Stream> = STREAM_SEED
        .iter()
        .map(|(channel, category, title, viewers, tags)| Stream {
            channel: channel.to_string(),
            category: category.to_string(),
            title: title.to_string(),
            viewers: *viewers,
            tags: tags.to_string(),
            timestamp: None,
        })
        .collect();
    streams.sort_by(|a, b| b.viewers.cmp(&a.viewers));
    streams
}

/// `now` の24時間前から1時間刻みの集計値を生成する
///
/// 各点は `base * U(0.8, 1.2)`、最大値はその1.2倍、最小値は0.8倍。
fn generate_hourly_metrics<R: Rng + ?Sized>(
    base_viewers: u64,
    now: DateTime<Local>,
    sample_range: (u64, u64),
    rng: &mut R,
) -> Vec<HistoryMetrics> {
    (0..MOCK_HISTORY_HOURS)
        .map(|i| {
            let at = now - Duration::hours(MOCK_HISTORY_HOURS - i);
            let factor: f64 = rng.gen_range(0.8..1.2);
            let viewers = (base_viewers as f64 * factor).round();

            HistoryMetrics {
                hour: at.hour(),
                day: at.day(),
                month: at.month(),
                avg_viewers: viewers,
                max_viewers: (viewers * 1.2).round() as u64,
                min_viewers: (viewers * 0.8).round() as u64,
                count: rng.gen_range(sample_range.0..=sample_range.1),
            }
        })
        .collect()
}

pub fn generate_category_history<R: Rng + ?Sized>(
    category: &str,
    base_viewers: u64,
    now: DateTime<Local>,
    rng: &mut R,
) -> Vec<CategoryHistoryPoint> {
    generate_hourly_metrics(base_viewers, now, (10, 30), rng)
        .into_iter()
        .map(|metrics| CategoryHistoryPoint {
            category: category.to_string(),
            metrics,
        })
        .collect()
}

pub fn generate_stream_history<R: Rng + ?Sized>(
    channel: &str,
    base_viewers: u64,
    now: DateTime<Local>,
    rng: &mut R,
) -> Vec<StreamHistoryPoint> {
    generate_hourly_metrics(base_viewers, now, (5, 15), rng)
        .into_iter()
        .map(|metrics| StreamHistoryPoint {
            channel: channel.to_string(),
            metrics,
        })
        .collect()
}

/// API取得失敗時に使用するスナップショット一式
pub fn mock_snapshot<R: Rng + ?Sized>(now: DateTime<Local>, rng: &mut R) -> DashboardSnapshot {
    let categories = mock_categories();
    let streams = mock_streams();

    let category_history = categories
        .iter()
        .take(MOCK_HISTORY_SUBJECTS)
        .flat_map(|c| generate_category_history(&c.category, c.viewers, now, rng))
        .collect();

    let stream_history = streams
        .iter()
        .take(MOCK_HISTORY_SUBJECTS)
        .flat_map(|s| generate_stream_history(&s.channel, s.viewers, now, rng))
        .collect();

    let statistics = Statistics {
        top_categories: categories.iter().take(MOCK_STATISTICS_TOP).cloned().collect(),
        top_streams: streams.iter().take(MOCK_STATISTICS_TOP).cloned().collect(),
        total_viewers: categories.iter().map(|c| c.viewers).sum(),
        last_update: now.to_rfc3339(),
    };

    tracing::debug!(
        categories = categories.len(),
        streams = streams.len(),
        "🧪 Mock snapshot generated"
    );

    DashboardSnapshot {
        categories,
        streams,
        category_history,
        stream_history,
        statistics,
        source: DataSource::Mock,
    }
}
