use crate::normalize::clean_text;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    /// Required skills found in the resume, in their caller-supplied form.
    pub matched_skills: Vec<String>,
    /// `|matched| / |required|`; 0.0 when the required list is empty.
    pub fraction: f64,
}

/// Case-insensitive substring containment of each required skill in the
/// cleaned resume text.
pub fn match_skills(clean_resume: &str, required: &[String]) -> SkillMatch {
    if required.is_empty() {
        return SkillMatch {
            matched_skills: Vec::new(),
            fraction: 0.0,
        };
    }

    let matched_skills: Vec<String> = required
        .iter()
        .filter(|skill| {
            let needle = clean_text(skill);
            !needle.is_empty() && clean_resume.contains(&needle)
        })
        .cloned()
        .collect();

    let fraction = matched_skills.len() as f64 / required.len() as f64;

    SkillMatch {
        matched_skills,
        fraction,
    }
}
