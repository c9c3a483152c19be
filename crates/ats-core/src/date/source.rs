use chrono::NaiveDate;
use tracing::warn;

use super::range::{extract_date_ranges, DateRange, RangeWindow};

/// A source of candidate employment ranges.
///
/// The regex scanner is the implemented source; an NER-assisted tokenizer can
/// plug in behind the same interface and be selected via `ATS_DATE_SOURCE`
/// without touching the aggregation path.
pub trait DateRangeSource: Send + Sync {
    /// Implementation name ("regex")
    fn name(&self) -> &'static str;

    /// Extract validated, deduplicated ranges from normalized resume text.
    /// `today` resolves open-ended ranges and anchors the plausibility window.
    fn extract_ranges(&self, text: &str, today: NaiveDate) -> Vec<DateRange>;
}

/// Pattern-based range extraction (see [`extract_date_ranges`]).
pub struct RegexDateSource {
    window: RangeWindow,
}

impl RegexDateSource {
    pub fn new(window: RangeWindow) -> Self {
        Self { window }
    }
}

impl Default for RegexDateSource {
    fn default() -> Self {
        Self::new(RangeWindow::default())
    }
}

impl DateRangeSource for RegexDateSource {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn extract_ranges(&self, text: &str, today: NaiveDate) -> Vec<DateRange> {
        extract_date_ranges(text, today, &self.window)
    }
}

/// Date-source factory.
pub fn create_date_source(name: &str, window: RangeWindow) -> Box<dyn DateRangeSource> {
    match name {
        "regex" => Box::new(RegexDateSource::new(window)),
        other => {
            warn!(source = other, "unknown date source; falling back to regex");
            Box::new(RegexDateSource::new(window))
        }
    }
}

/// Build the configured date source from the environment
/// (`ATS_DATE_SOURCE`, plus the `RangeWindow` variables).
pub fn load_source_from_env() -> Box<dyn DateRangeSource> {
    let name = std::env::var("ATS_DATE_SOURCE").unwrap_or_else(|_| "regex".into());
    create_date_source(&name, RangeWindow::from_env())
}
