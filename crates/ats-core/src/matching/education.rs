use std::collections::BTreeSet;

use crate::normalize::clean_text;

/// Qualification abbreviation → forms as they appear in cleaned resume text
/// (lowercased, punctuation stripped, so "M.C.A" arrives as "mca" and
/// "B.Tech" as "btech").
static QUALIFICATION_FORMS: &[(&str, &[&str])] = &[
    (
        "mca",
        &[
            "master of computer application",
            "master of computer applications",
            "master in computer application",
            "mca",
        ],
    ),
    (
        "btech",
        &[
            "bachelor of technology",
            "bachelor in technology",
            "b tech",
            "btech",
        ],
    ),
    ("bsc", &["bachelor of science", "b sc", "bsc"]),
    ("msc", &["master of science", "m sc", "msc"]),
    ("mba", &["master of business administration", "mba"]),
    ("diploma", &["diploma"]),
    ("bcom", &["bachelor of commerce", "b com", "bcom"]),
    ("be", &["bachelor of engineering", "b e"]),
];

// Whole-word phrase containment; plain substring would let short forms like
// "b e" match inside "job experience".
fn contains_phrase(text: &str, phrase: &str) -> bool {
    format!(" {text} ").contains(&format!(" {phrase} "))
}

/// Qualification abbreviations recognized anywhere in cleaned resume text.
pub fn resume_qualifications(clean_resume: &str) -> BTreeSet<&'static str> {
    QUALIFICATION_FORMS
        .iter()
        .filter(|(_, forms)| forms.iter().any(|form| contains_phrase(clean_resume, form)))
        .map(|(abbr, _)| *abbr)
        .collect()
}

/// Normalize one required-qualification entry (abbreviation or full form) to
/// its abbreviation; unknown entries come back cleaned but otherwise as-is.
pub fn normalize_qualification(entry: &str) -> String {
    let cleaned = clean_text(entry);
    QUALIFICATION_FORMS
        .iter()
        .find(|(abbr, forms)| *abbr == cleaned || forms.contains(&cleaned.as_str()))
        .map(|(abbr, _)| (*abbr).to_string())
        .unwrap_or(cleaned)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationMatch {
    pub matched: bool,
    /// Abbreviations present in both the resume and the requirement.
    pub qualifications: Vec<String>,
}

/// True iff any qualification abbreviation normalized from the resume text
/// intersects the required qualification set, case-insensitively. Required
/// entries may be abbreviations or full forms.
pub fn match_education(clean_resume: &str, required: &[String]) -> EducationMatch {
    let held: BTreeSet<String> = resume_qualifications(clean_resume)
        .into_iter()
        .map(str::to_string)
        .collect();
    let wanted: BTreeSet<String> = required
        .iter()
        .map(|entry| normalize_qualification(entry))
        .collect();

    let qualifications: Vec<String> = held.intersection(&wanted).cloned().collect();

    EducationMatch {
        matched: !qualifications.is_empty(),
        qualifications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn full_form_in_resume_matches_required_abbreviation() {
        let resume = clean_text("Bachelor of Technology, CS, 2019");
        let result = match_education(&resume, &required(&["btech"]));

        assert!(result.matched);
        assert_eq!(result.qualifications, vec!["btech".to_string()]);
    }

    #[test]
    fn abbreviated_resume_forms_match_full_form_requirements() {
        let resume = clean_text("M.C.A from State University");
        let result = match_education(&resume, &required(&["Master of Computer Application"]));
        assert!(result.matched);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let resume = clean_text("MASTER OF SCIENCE in Physics");
        assert!(match_education(&resume, &required(&["MSC"])).matched);
    }

    #[test]
    fn unknown_requirements_do_not_match() {
        let resume = clean_text("Bachelor of Technology");
        assert!(!match_education(&resume, &required(&["phd"])).matched);
    }

    #[test]
    fn empty_inputs_do_not_match() {
        assert!(!match_education("", &required(&["btech"])).matched);
        assert!(!match_education("bachelor of technology", &[]).matched);
    }

    #[test]
    fn short_forms_only_match_as_whole_words() {
        let resume = clean_text("job experience: lab equipment maintenance");
        assert!(resume_qualifications(&resume).is_empty());

        let degree = clean_text("Bachelor of Engineering, Mechanical");
        assert!(resume_qualifications(&degree).contains("be"));
    }

    #[test]
    fn resume_can_hold_multiple_qualifications() {
        let resume = clean_text("B.Sc followed by Master of Business Administration");
        let held = resume_qualifications(&resume);
        assert!(held.contains("bsc"));
        assert!(held.contains("mba"));
    }
}
