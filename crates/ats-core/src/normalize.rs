use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]+").unwrap());

// Keeps `/`, `-`, en/em dashes and `.` so numeric date forms and abbreviated
// month names survive; everything else becomes a space.
static DATE_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s/\-–—.]+").unwrap());

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize free text for keyword matching.
///
/// Contract:
/// 1. NFKC fold (PDF extraction yields ligatures and fullwidth forms)
/// 2. lowercase
/// 3. strip everything outside `[a-z0-9 ]` ("b.tech" becomes "btech")
/// 4. collapse runs of whitespace to a single space, trim
pub fn clean_text(text: &str) -> String {
    let folded: String = text.nfkc().collect();
    let lowered = folded.to_lowercase();
    let stripped = NON_ALNUM.replace_all(&lowered, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Normalize free text for date-range extraction.
///
/// Same fold/lowercase as [`clean_text`], but commas are dropped and the
/// separator characters date ranges are written with are preserved.
pub fn normalize_for_dates(text: &str) -> String {
    let folded: String = text.nfkc().collect();
    let lowered = folded.to_lowercase().replace(',', "");
    let stripped = DATE_NOISE.replace_all(&lowered, " ");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_lowercases_and_strips_punctuation() {
        assert_eq!(clean_text("Senior C++ Developer!"), "senior c developer");
        assert_eq!(clean_text("B.Tech, 2019"), "btech 2019");
        assert_eq!(clean_text("  Python |  SQL  "), "python sql");
    }

    #[test]
    fn clean_text_folds_unicode_forms() {
        assert_eq!(clean_text("ｑｕａｌｉﬁｅｄ"), "qualified");
    }

    #[test]
    fn clean_text_handles_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("  \t\n "), "");
    }

    #[test]
    fn date_normalization_preserves_range_separators() {
        assert_eq!(
            normalize_for_dates("Jan 5, 2020 – Mar 2021"),
            "jan 5 2020 – mar 2021"
        );
        assert_eq!(normalize_for_dates("03/2020 - 05/2021"), "03/2020 - 05/2021");
        assert_eq!(normalize_for_dates("• 2019-03 to Present"), "2019-03 to present");
    }
}
