use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::precision::{DatePrecision, ResolvedDate};

lazy_static! {
    // "january 5 2020" / "jan. 5 2020"
    static ref MONTH_DAY_YEAR_RE: Regex =
        Regex::new(r"^([a-z]+)\.?\s+(\d{1,2})\s+(\d{4})$").unwrap();
    // "january 2020" / "jan 2020" / "sept. 2020"
    static ref MONTH_YEAR_RE: Regex = Regex::new(r"^([a-z]+)\.?\s+(\d{4})$").unwrap();
    // "03/2020"
    static ref MONTH_SLASH_YEAR_RE: Regex = Regex::new(r"^(\d{1,2})/(\d{4})$").unwrap();
    // "2020-03" (4-digit first component implies year-first ordering)
    static ref YEAR_DASH_MONTH_RE: Regex = Regex::new(r"^(\d{4})-(\d{1,2})$").unwrap();
    // "03-2020"
    static ref MONTH_DASH_YEAR_RE: Regex = Regex::new(r"^(\d{1,2})-(\d{4})$").unwrap();
    // "2020"
    static ref YEAR_ONLY_RE: Regex = Regex::new(r"^(\d{4})$").unwrap();
}

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Month name or abbreviation (3+ letter prefix, optional trailing period)
/// to month number.
fn month_number(name: &str) -> Option<u32> {
    let name = name.trim_end_matches('.');
    if name.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|full| full.starts_with(name))
        .map(|i| i as u32 + 1)
}

/// Resolve one date-like token to a calendar date.
///
/// Formats are tried most-specific-first:
/// 1. `<month> <day> <year>`
/// 2. `<month> <year>`
/// 3. `MM/YYYY`
/// 4. `YYYY-MM`
/// 5. `MM-YYYY`
/// 6. `YYYY` (pinned to January 1)
///
/// The literals `present` and `current` resolve to `today`. Tokens missing a
/// day resolve to day 1. Anything unrecognized (including out-of-range month
/// or day components) returns `None`; no error escapes this path.
pub fn parse_date_token(raw: &str, today: NaiveDate) -> Option<ResolvedDate> {
    let token = raw.trim().to_lowercase().replace(',', "");
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    if token == "present" || token == "current" {
        return Some(ResolvedDate {
            date: today,
            precision: DatePrecision::Present,
        });
    }

    if let Some(caps) = MONTH_DAY_YEAR_RE.captures(token) {
        let month = month_number(caps.get(1)?.as_str())?;
        let day: u32 = caps.get(2)?.as_str().parse().ok()?;
        let year: i32 = caps.get(3)?.as_str().parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;

        return Some(ResolvedDate {
            date,
            precision: DatePrecision::Day,
        });
    }

    if let Some(caps) = MONTH_YEAR_RE.captures(token) {
        let month = month_number(caps.get(1)?.as_str())?;
        let year: i32 = caps.get(2)?.as_str().parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, 1)?;

        return Some(ResolvedDate {
            date,
            precision: DatePrecision::Month,
        });
    }

    if let Some(caps) = MONTH_SLASH_YEAR_RE.captures(token) {
        let month: u32 = caps.get(1)?.as_str().parse().ok()?;
        let year: i32 = caps.get(2)?.as_str().parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, 1)?;

        return Some(ResolvedDate {
            date,
            precision: DatePrecision::Month,
        });
    }

    if let Some(caps) = YEAR_DASH_MONTH_RE.captures(token) {
        let year: i32 = caps.get(1)?.as_str().parse().ok()?;
        let month: u32 = caps.get(2)?.as_str().parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, 1)?;

        return Some(ResolvedDate {
            date,
            precision: DatePrecision::Month,
        });
    }

    if let Some(caps) = MONTH_DASH_YEAR_RE.captures(token) {
        let month: u32 = caps.get(1)?.as_str().parse().ok()?;
        let year: i32 = caps.get(2)?.as_str().parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, 1)?;

        return Some(ResolvedDate {
            date,
            precision: DatePrecision::Month,
        });
    }

    if let Some(caps) = YEAR_ONLY_RE.captures(token) {
        let year: i32 = caps.get(1)?.as_str().parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, 1, 1)?;

        return Some(ResolvedDate {
            date,
            precision: DatePrecision::Year,
        });
    }

    None
}
