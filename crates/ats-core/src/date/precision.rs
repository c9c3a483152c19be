use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How much of a calendar date was actually written in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatePrecision {
    /// Month name, day and year all present
    Day,
    /// Month and year only (day defaults to 1)
    Month,
    /// Bare 4-digit year (resolves to January 1)
    Year,
    /// The literal "present"/"current" (resolves to the injected today)
    Present,
}

impl DatePrecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatePrecision::Day => "day",
            DatePrecision::Month => "month",
            DatePrecision::Year => "year",
            DatePrecision::Present => "present",
        }
    }
}

/// A date token resolved to a concrete calendar date.
///
/// Coarser tokens are pinned to the first day of the coarsest known unit, so
/// `date` is always fully populated; `precision` records what was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDate {
    pub date: NaiveDate,
    pub precision: DatePrecision,
}
