/// Job-title phrases recognized by the low-confidence fallback estimator.
///
/// Phrases are matched against cleaned text, so they must be lowercase with
/// no punctuation. The list is deliberately non-overlapping: no phrase is a
/// substring of another, so each hit counts one distinct title.
const TITLE_VOCABULARY: &[&str] = &[
    "software engineer",
    "software developer",
    "web developer",
    "frontend developer",
    "backend developer",
    "full stack developer",
    "mobile developer",
    "data analyst",
    "data scientist",
    "data engineer",
    "machine learning engineer",
    "devops engineer",
    "cloud engineer",
    "qa engineer",
    "test engineer",
    "security analyst",
    "system administrator",
    "database administrator",
    "business analyst",
    "product manager",
    "project manager",
    "ui designer",
    "ux designer",
    "technical writer",
    "intern",
];

/// Count distinct vocabulary titles present in cleaned resume text.
pub fn count_distinct_titles(clean_text: &str) -> usize {
    TITLE_VOCABULARY
        .iter()
        .filter(|title| clean_text.contains(*title))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_title_once() {
        let text = "worked as software engineer then senior software engineer";
        assert_eq!(count_distinct_titles(text), 1);
    }

    #[test]
    fn counts_distinct_titles() {
        let text = "data analyst before becoming a product manager";
        assert_eq!(count_distinct_titles(text), 2);
    }

    #[test]
    fn no_titles_yields_zero() {
        assert_eq!(count_distinct_titles("gardening enthusiast"), 0);
    }

    #[test]
    fn vocabulary_phrases_are_non_overlapping() {
        for a in TITLE_VOCABULARY {
            for b in TITLE_VOCABULARY {
                if a != b {
                    assert!(!a.contains(b), "{b} is a substring of {a}");
                }
            }
        }
    }
}
