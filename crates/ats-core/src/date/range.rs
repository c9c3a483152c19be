use std::collections::HashSet;

use chrono::{Datelike, Months, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::precision::ResolvedDate;
use super::token::parse_date_token;

/// One period of employment: a resolved start and a resolved end (the end of
/// an open range carries the injected today, see
/// [`DatePrecision::Present`](super::DatePrecision::Present)).
///
/// Invariant: `start.date <= end.date`. Candidates violating it are discarded
/// during extraction, never swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: ResolvedDate,
    pub end: ResolvedDate,
}

impl DateRange {
    /// Inclusive whole-month span: the start month counts as fully worked,
    /// so 2020-01 through 2021-01 is 13 months.
    pub fn months(&self) -> u32 {
        let span = (self.end.date.year() - self.start.date.year()) * 12
            + (self.end.date.month() as i32 - self.start.date.month() as i32)
            + 1;
        span.max(0) as u32
    }
}

/// Bounds on what counts as a plausible resume date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeWindow {
    pub min_year: i32,
    /// How far past `today` a date may reach.
    pub horizon_months: u32,
}

impl Default for RangeWindow {
    fn default() -> Self {
        Self {
            min_year: 1950,
            horizon_months: 12,
        }
    }
}

impl RangeWindow {
    pub fn from_env() -> Self {
        Self {
            min_year: std::env::var("ATS_MIN_PLAUSIBLE_YEAR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1950),
            horizon_months: std::env::var("ATS_DATE_HORIZON_MONTHS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(12),
        }
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        if date.year() < self.min_year {
            return false;
        }
        match today.checked_add_months(Months::new(self.horizon_months)) {
            Some(horizon) => date <= horizon,
            None => false,
        }
    }
}

const MONTH_PATTERN: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?\
|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

lazy_static! {
    // "<date> <sep> <date|present|current>" where <date> is a month name
    // (optional day), MM/YYYY, YYYY-MM or a bare year, and <sep> is a
    // hyphen, en/em dash or the word "to".
    static ref RANGE_RE: Regex = Regex::new(&format!(
        r"(?i)\b(?P<start>(?:{m})\.?\s+(?:\d{{1,2}}\s+)?\d{{4}}|\d{{1,2}}/\d{{4}}|\d{{4}}-\d{{1,2}}|\d{{4}})\s*(?:to|[-–—])\s*(?P<end>present|current|(?:{m})\.?\s+(?:\d{{1,2}}\s+)?\d{{4}}|\d{{1,2}}/\d{{4}}|\d{{4}}-\d{{1,2}}|\d{{4}})\b",
        m = MONTH_PATTERN,
    ))
    .unwrap();
}

/// Scan normalized text (see [`normalize_for_dates`](crate::normalize::normalize_for_dates))
/// for candidate employment ranges.
///
/// Candidates are dropped when either end fails to parse, when the resolved
/// start is strictly after the resolved end, or when either date falls
/// outside `window`. Survivors are deduplicated by resolved year/month pair,
/// first occurrence wins.
pub fn extract_date_ranges(text: &str, today: NaiveDate, window: &RangeWindow) -> Vec<DateRange> {
    let mut seen: HashSet<(i32, u32, i32, u32)> = HashSet::new();
    let mut ranges = Vec::new();

    for caps in RANGE_RE.captures_iter(text) {
        let (Some(start_raw), Some(end_raw)) = (caps.name("start"), caps.name("end")) else {
            continue;
        };

        let Some(start) = parse_date_token(start_raw.as_str(), today) else {
            continue;
        };
        let Some(end) = parse_date_token(end_raw.as_str(), today) else {
            continue;
        };

        if start.date > end.date {
            debug!(start = %start.date, end = %end.date, "dropping inverted date range");
            continue;
        }
        if !window.contains(start.date, today) || !window.contains(end.date, today) {
            debug!(start = %start.date, end = %end.date, "dropping out-of-window date range");
            continue;
        }

        let key = (
            start.date.year(),
            start.date.month(),
            end.date.year(),
            end.date.month(),
        );
        if !seen.insert(key) {
            continue;
        }

        ranges.push(DateRange { start, end });
    }

    ranges
}
