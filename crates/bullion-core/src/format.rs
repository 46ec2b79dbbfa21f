//! Display formatting for prices, changes and timestamps.
//!
//! Everything here is pure and total: odd input yields a neutral string,
//! never a panic.

use time::UtcOffset;

use crate::UtcDateTime;

/// Shown in place of a timestamp that cannot be parsed.
pub const TIMESTAMP_FALLBACK: &str = "Just now";

/// Shown in place of a zero-sentinel market stat.
pub const MISSING_STAT: &str = "-";

/// `$2,700.00`-style USD with exactly two decimals.
pub fn format_currency(value: f64) -> String {
    format_usd(value, 2)
}

/// Headline variant rounded half-up to a whole dollar, e.g. `$35`.
pub fn format_currency_whole(value: f64) -> String {
    format_usd(round_half_up(value), 0)
}

/// `+$0.50 (+1.45%)`, `-$0.50 (-1.45%)`, or `$0.00 (0.00%)` for no change.
pub fn format_change(change: f64, change_percent: f64) -> String {
    let sign = if change > 0.0 {
        "+"
    } else if change < 0.0 {
        "-"
    } else {
        ""
    };
    let percent = if change_percent.is_finite() {
        change_percent.abs()
    } else {
        0.0
    };

    format!(
        "{sign}{} ({sign}{percent:.2}%)",
        format_currency(change.abs())
    )
}

/// Medium date / short time in UTC, e.g. `Dec 12, 2025, 5:18 PM`.
pub fn format_timestamp(input: &str) -> String {
    format_timestamp_in(input, UtcOffset::UTC)
}

pub fn format_timestamp_in(input: &str, offset: UtcOffset) -> String {
    UtcDateTime::parse_lenient(input)
        .ok()
        .and_then(|timestamp| timestamp.format_medium(offset))
        .unwrap_or_else(|| String::from(TIMESTAMP_FALLBACK))
}

/// Market stat cell: currency for real values, `-` for the zero sentinel.
pub fn format_stat(value: f64) -> String {
    if value > 0.0 {
        format_currency(value)
    } else {
        String::from(MISSING_STAT)
    }
}

/// Nearest integer, halves rounded towards positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn format_usd(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let magnitude = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match magnitude.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (magnitude.as_str(), None),
    };

    let is_zero = magnitude.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    let mut rendered = format!("{sign}${}", group_thousands(whole));
    if let Some(fraction) = fraction {
        rendered.push('.');
        rendered.push_str(fraction);
    }
    rendered
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
