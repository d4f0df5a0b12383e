//! チャート用スケール（連続値・バンド・時刻）

use chrono::{DateTime, Duration, Local, TimeZone, Timelike};

/// 目盛りの間隔を 1, 2, 5 × 10^n から選ぶ
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start).abs() / count.max(1) as f64;
    if raw == 0.0 || !raw.is_finite() {
        return 0.0;
    }

    let mut step = 10f64.powi(raw.log10().floor() as i32);
    let error = raw / step;
    if error >= 50f64.sqrt() {
        step *= 10.0;
    } else if error >= 10f64.sqrt() {
        step *= 5.0;
    } else if error >= 2f64.sqrt() {
        step *= 2.0;
    }
    step
}

/// 連続値スケール
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// おおよそ `count` 個の切りの良い目盛り値
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };

        let step = tick_step(lo, hi, count);
        if step == 0.0 {
            return vec![lo];
        }

        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// カテゴリ軸のバンドスケール
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    pub domain: Vec<String>,
    pub range: (f64, f64),
    pub padding: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        Self {
            domain,
            range,
            padding,
        }
    }

    fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let width = self.range.1 - self.range.0;
        width / (n - self.padding + self.padding * 2.0).max(1.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// バンド左端の位置。ドメイン外なら `None`
    pub fn position(&self, key: &str) -> Option<f64> {
        let index = self.domain.iter().position(|d| d == key)?;
        let n = self.domain.len() as f64;
        let step = self.step();
        let width = self.range.1 - self.range.0;
        let start = self.range.0 + (width - step * (n - self.padding)) / 2.0;
        Some(start + step * index as f64)
    }

    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth() / 2.0)
    }
}

pub(crate) const MINUTE: i64 = 60;
pub(crate) const HOUR: i64 = 60 * MINUTE;
pub(crate) const DAY: i64 = 24 * HOUR;

/// 時刻目盛りの候補間隔（秒）
const TIME_INTERVALS: [i64; 12] = [
    MINUTE,
    5 * MINUTE,
    15 * MINUTE,
    30 * MINUTE,
    HOUR,
    3 * HOUR,
    6 * HOUR,
    12 * HOUR,
    DAY,
    2 * DAY,
    7 * DAY,
    30 * DAY,
];

/// 時刻スケール
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub domain: (DateTime<Local>, DateTime<Local>),
    pub range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (DateTime<Local>, DateTime<Local>), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, time: DateTime<Local>) -> f64 {
        let d0 = self.domain.0.timestamp_millis() as f64;
        let d1 = self.domain.1.timestamp_millis() as f64;
        LinearScale::new((d0, d1), self.range).scale(time.timestamp_millis() as f64)
    }

    /// `count` 個前後になる目盛り間隔（秒）
    pub fn tick_interval(&self, count: usize) -> i64 {
        let span = (self.domain.1 - self.domain.0).num_seconds().abs() as f64;
        let target = span / count.max(1) as f64;

        let index = TIME_INTERVALS
            .iter()
            .position(|&interval| interval as f64 >= target)
            .unwrap_or(TIME_INTERVALS.len() - 1);

        if index > 0 {
            let lower = TIME_INTERVALS[index - 1] as f64;
            let upper = TIME_INTERVALS[index] as f64;
            if target / lower < upper / target {
                return TIME_INTERVALS[index - 1];
            }
        }
        TIME_INTERVALS[index]
    }

    /// 区切りの良い時刻に揃えた目盛り
    pub fn ticks(&self, count: usize) -> Vec<DateTime<Local>> {
        let (start, end) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        let interval = self.tick_interval(count);

        let Some(mut tick) = align_up(start, interval) else {
            return Vec::new();
        };

        let mut ticks = Vec::new();
        while tick <= end {
            ticks.push(tick);
            tick += Duration::seconds(interval);
        }
        ticks
    }
}

/// `time` 以降で最初の区切り時刻（日単位以上はローカル0時）
fn align_up(time: DateTime<Local>, interval: i64) -> Option<DateTime<Local>> {
    let midnight = Local
        .from_local_datetime(&time.date_naive().and_hms_opt(0, 0, 0)?)
        .earliest()?;

    if interval >= DAY {
        return Some(if midnight < time {
            midnight + Duration::days(1)
        } else {
            midnight
        });
    }

    let seconds_of_day = time.num_seconds_from_midnight() as i64;
    let aligned = (seconds_of_day + interval - 1) / interval * interval;
    Some(midnight + Duration::seconds(aligned))
}
