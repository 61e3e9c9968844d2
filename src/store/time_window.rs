use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

const WINDOW_SEPARATOR: &str = " - ";

static CLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d{1,2})(?::(\d{2}))?\s*(AM|PM)\s*$").expect("clock pattern is a valid regex")
});

/// Start and end labels of a shift, as split from a `"8 AM - 12 PM"` style string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftWindow {
    pub start: String,
    pub end: String,
}

impl ShiftWindow {
    /// Splits on the literal `" - "`. Without a separator both ends are the whole label.
    pub fn split(label: &str) -> Self {
        let start = label.split(WINDOW_SEPARATOR).next().unwrap_or(label);
        let end = label.rsplit(WINDOW_SEPARATOR).next().unwrap_or(label);
        ShiftWindow {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Parses `"08:00 AM"`, `"8 AM"` or `"12:30 pm"`.
pub fn parse_clock(label: &str) -> Option<NaiveTime> {
    let caps = CLOCK_PATTERN.captures(label)?;
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if !(1..=12).contains(&hour) {
        return None;
    }
    let is_pm = caps.get(3)?.as_str().eq_ignore_ascii_case("PM");
    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Hours between two clock labels. An end at or before the start wraps past midnight.
pub fn window_hours(start: &str, end: &str) -> Option<f64> {
    let start = parse_clock(start)?;
    let end = parse_clock(end)?;
    let start_minutes = start.hour() * 60 + start.minute();
    let mut end_minutes = end.hour() * 60 + end.minute();
    if end_minutes <= start_minutes {
        end_minutes += 24 * 60;
    }
    Some(f64::from(end_minutes - start_minutes) / 60.0)
}
