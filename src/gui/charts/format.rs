//! 数値・時刻の表示フォーマット

use chrono::{DateTime, Local};

const SI_PREFIXES: [&str; 9] = ["p", "n", "µ", "m", "", "k", "M", "G", "T"];
const SI_ZERO_INDEX: i32 = 4;

/// 有効数字2桁のSI表記（例: 380000 → "380k", 1500 → "1.5k"）
pub fn format_si(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0.0".to_string();
    }

    let rounded = round_significant(value, 2);
    let exponent = rounded.abs().log10().floor() as i32;
    let group = exponent.div_euclid(3).clamp(-SI_ZERO_INDEX, SI_PREFIXES.len() as i32 - 1 - SI_ZERO_INDEX);
    let scaled = rounded / 10f64.powi(group * 3);
    let integer_digits = exponent - group * 3 + 1;
    let decimals = (2 - integer_digits).max(0) as usize;

    format!(
        "{:.*}{}",
        decimals,
        scaled,
        SI_PREFIXES[(group + SI_ZERO_INDEX) as usize]
    )
}

fn round_significant(value: f64, digits: i32) -> f64 {
    let exponent = value.abs().log10().floor() as i32;
    let shift = exponent - (digits - 1);
    if shift >= 0 {
        let step = 10f64.powi(shift);
        (value / step).round() * step
    } else {
        let factor = 10f64.powi(-shift);
        (value * factor).round() / factor
    }
}

/// 3桁区切り（例: 87000 → "87,000"）。小数は四捨五入する
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_count(value: u64) -> String {
    format_thousands(value as f64)
}

pub fn format_hour_minute(time: &DateTime<Local>) -> String {
    time.format("%H:%M").to_string()
}

pub fn format_month_day(time: &DateTime<Local>) -> String {
    time.format("%m/%d").to_string()
}
