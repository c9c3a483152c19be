use crate::normalize::clean_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationMatch {
    pub matched: bool,
    /// The first preferred location found, in its caller-supplied form.
    pub matched_location: Option<String>,
}

/// The job record carries preferred locations as one comma-separated field
/// ("Bangalore, India"). Each candidate is cleaned and checked for substring
/// containment in the cleaned resume text.
pub fn match_location(clean_resume: &str, location_field: &str) -> LocationMatch {
    for candidate in location_field.split(',') {
        let needle = clean_text(candidate);
        if !needle.is_empty() && clean_resume.contains(&needle) {
            return LocationMatch {
                matched: true,
                matched_location: Some(candidate.trim().to_string()),
            };
        }
    }

    LocationMatch {
        matched: false,
        matched_location: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_listed_location_matches() {
        let resume = clean_text("Currently based in Bangalore.");
        let result = match_location(&resume, "Mumbai, Bangalore");

        assert!(result.matched);
        assert_eq!(result.matched_location.as_deref(), Some("Bangalore"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let resume = clean_text("Open to roles in NEW YORK");
        assert!(match_location(&resume, "New York").matched);
    }

    #[test]
    fn no_match_when_absent() {
        let resume = clean_text("Based in Pune");
        let result = match_location(&resume, "Mumbai, Delhi");
        assert!(!result.matched);
        assert_eq!(result.matched_location, None);
    }

    #[test]
    fn empty_location_field_never_matches() {
        assert!(!match_location("anywhere", "").matched);
        assert!(!match_location("anywhere", " , ").matched);
    }
}
