pub mod titles;

use crate::date::DateRange;

/// Where an experience estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceSource {
    /// Summed from n extracted date ranges
    DateRanges(usize),
    /// Low-confidence fallback: n recognized job-title phrases
    TitleHeuristic(usize),
    /// No signal at all
    NotFound,
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceConfig {
    /// Cap on a single range's contribution, to suppress misparse outliers.
    pub max_months_per_range: u32,
    /// Assumed duration per distinct title in the fallback path.
    pub fallback_months_per_title: u32,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            max_months_per_range: 120,
            fallback_months_per_title: 12,
        }
    }
}

impl ExperienceConfig {
    pub fn from_env() -> Self {
        Self {
            max_months_per_range: std::env::var("ATS_MAX_MONTHS_PER_RANGE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            fallback_months_per_title: std::env::var("ATS_FALLBACK_MONTHS_PER_TITLE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(12),
        }
    }
}

/// Accumulated elapsed time across all validated ranges. Computed fresh per
/// scoring call; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceTally {
    pub total_months: u32,
    pub source: ExperienceSource,
}

impl ExperienceTally {
    pub fn years(&self) -> u32 {
        self.total_months / 12
    }

    pub fn remainder_months(&self) -> u32 {
        self.total_months % 12
    }

    pub fn as_years(&self) -> f64 {
        f64::from(self.total_months) / 12.0
    }

    /// Display string for downstream UIs: `"<Y> year(s), <M> month(s)"`,
    /// omitting a zero unit when the other is non-zero, `"Not Found"` when
    /// there was no signal at all.
    pub fn display(&self) -> String {
        if self.source == ExperienceSource::NotFound {
            return "Not Found".to_string();
        }

        let years = self.years();
        let months = self.remainder_months();
        match (years, months) {
            (0, 0) => "0 month(s)".to_string(),
            (y, 0) => format!("{y} year(s)"),
            (0, m) => format!("{m} month(s)"),
            (y, m) => format!("{y} year(s), {m} month(s)"),
        }
    }
}

/// Sum elapsed months across validated ranges.
///
/// When no ranges were found at all, falls back to counting recognized
/// job-title phrases in the cleaned text and assuming a fixed duration per
/// distinct title. When even that finds nothing the tally is the
/// `NotFound` sentinel (0 months, `"Not Found"` display).
pub fn tally_experience(
    ranges: &[DateRange],
    clean_text: &str,
    config: &ExperienceConfig,
) -> ExperienceTally {
    if !ranges.is_empty() {
        let total_months = ranges
            .iter()
            .map(|r| r.months().min(config.max_months_per_range))
            .sum();

        return ExperienceTally {
            total_months,
            source: ExperienceSource::DateRanges(ranges.len()),
        };
    }

    let title_count = titles::count_distinct_titles(clean_text);
    if title_count > 0 {
        return ExperienceTally {
            total_months: title_count as u32 * config.fallback_months_per_title,
            source: ExperienceSource::TitleHeuristic(title_count),
        };
    }

    ExperienceTally {
        total_months: 0,
        source: ExperienceSource::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::{extract_date_ranges, RangeWindow};
    use crate::normalize::normalize_for_dates;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn ranges_from(text: &str) -> Vec<crate::date::DateRange> {
        extract_date_ranges(
            &normalize_for_dates(text),
            today(),
            &RangeWindow::default(),
        )
    }

    #[test]
    fn sums_months_across_ranges() {
        // jan 2019 - dec 2020 inclusive = 24, mar 2021 - 2024-03 inclusive = 37
        let ranges = ranges_from("Jan 2019 - Dec 2020 and Mar 2021 - Present");
        let tally = tally_experience(&ranges, "", &ExperienceConfig::default());

        assert_eq!(tally.total_months, 61);
        assert_eq!(tally.source, ExperienceSource::DateRanges(2));
        assert_eq!(tally.display(), "5 year(s), 1 month(s)");
    }

    #[test]
    fn single_year_range_counts_thirteen_months_inclusive() {
        let ranges = ranges_from("2020-01 - 2021-01");
        let tally = tally_experience(&ranges, "", &ExperienceConfig::default());
        assert_eq!(tally.total_months, 13);
    }

    #[test]
    fn caps_outlier_ranges() {
        let ranges = ranges_from("1960 - 2020");
        let tally = tally_experience(&ranges, "", &ExperienceConfig::default());
        assert_eq!(tally.total_months, 120);
    }

    #[test]
    fn falls_back_to_title_heuristic() {
        let tally = tally_experience(
            &[],
            "data analyst turned product manager",
            &ExperienceConfig::default(),
        );
        assert_eq!(tally.total_months, 24);
        assert_eq!(tally.source, ExperienceSource::TitleHeuristic(2));
        assert_eq!(tally.display(), "2 year(s)");
    }

    #[test]
    fn no_signal_yields_not_found_sentinel() {
        let tally = tally_experience(&[], "hobbies include chess", &ExperienceConfig::default());
        assert_eq!(tally.total_months, 0);
        assert_eq!(tally.source, ExperienceSource::NotFound);
        assert_eq!(tally.display(), "Not Found");
        assert_eq!(tally.as_years(), 0.0);
    }

    #[test]
    fn display_omits_zero_units() {
        let months_only = ExperienceTally {
            total_months: 7,
            source: ExperienceSource::DateRanges(1),
        };
        assert_eq!(months_only.display(), "7 month(s)");

        let both = ExperienceTally {
            total_months: 26,
            source: ExperienceSource::DateRanges(2),
        };
        assert_eq!(both.display(), "2 year(s), 2 month(s)");
    }
}
