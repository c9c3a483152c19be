use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::weights::{Weights, ATS_WEIGHTS};
use super::{education, location, skills};
use crate::date::{load_source_from_env, DateRangeSource};
use crate::embedding::{load_provider_from_env, SimilarityProvider};
use crate::experience::{tally_experience, ExperienceConfig};
use crate::normalize::{clean_text, normalize_for_dates};
use crate::JobRequirement;

#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weights: Weights,
    pub experience: ExperienceConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ATS_WEIGHTS,
            experience: ExperienceConfig::default(),
        }
    }
}

impl ScoringConfig {
    /// Weights are fixed; only the experience bounds are environment-tunable.
    pub fn from_env() -> Self {
        Self {
            weights: ATS_WEIGHTS,
            experience: ExperienceConfig::from_env(),
        }
    }
}

/// Per-signal detail record, shape-compatible with the downstream display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub cosine_similarity: f64,
    pub skills_matched: Vec<String>,
    pub experience_years: String,
    pub education_matched: bool,
    pub location_matched: bool,
}

/// The five weighted component fractions, each in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoreBreakdown {
    pub similarity: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub location: f64,
}

/// One scoring outcome for a (resume, job) pair. Immutable; computed fresh
/// per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Composite ATS score in [0.0, 100.0]
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub details: ScoreDetails,
}

/// Composes the five signals into the final score.
///
/// The similarity provider and date source are injected once at construction
/// and only read afterwards, so one scorer can serve concurrent scoring
/// calls for independent (resume, job) pairs.
pub struct AtsScorer {
    similarity: Box<dyn SimilarityProvider>,
    date_source: Box<dyn DateRangeSource>,
    config: ScoringConfig,
}

impl AtsScorer {
    pub fn new(
        similarity: Box<dyn SimilarityProvider>,
        date_source: Box<dyn DateRangeSource>,
        config: ScoringConfig,
    ) -> Self {
        Self {
            similarity,
            date_source,
            config,
        }
    }

    /// Build a scorer with environment-configured collaborators.
    pub fn from_env() -> Self {
        Self::new(
            load_provider_from_env(),
            load_source_from_env(),
            ScoringConfig::from_env(),
        )
    }

    /// Score with the current date as the processing date.
    pub fn score(&self, resume_text: &str, job: &JobRequirement) -> MatchResult {
        self.score_at(resume_text, job, Utc::now().date_naive())
    }

    /// Score with an explicit processing date. Open-ended ranges resolve to
    /// `today`, which makes results reproducible under a pinned date.
    pub fn score_at(&self, resume_text: &str, job: &JobRequirement, today: NaiveDate) -> MatchResult {
        let clean_resume = clean_text(resume_text);
        let clean_jd = clean_text(&job.job_description);

        let cosine = f64::from(self.similarity.text_similarity(&clean_resume, &clean_jd));

        let skill_match = skills::match_skills(&clean_resume, &job.skills_required);

        let date_text = normalize_for_dates(resume_text);
        let ranges = self.date_source.extract_ranges(&date_text, today);
        let tally = tally_experience(&ranges, &clean_resume, &self.config.experience);
        let experience_fraction = if job.experience_required > 0.0 {
            (tally.as_years() / job.experience_required).min(1.0)
        } else {
            0.0
        };

        let education = education::match_education(&clean_resume, &job.qualification);
        let location = location::match_location(&clean_resume, &job.location);

        let breakdown = ScoreBreakdown {
            similarity: cosine,
            skills: skill_match.fraction,
            experience: experience_fraction,
            education: if education.matched { 1.0 } else { 0.0 },
            location: if location.matched { 1.0 } else { 0.0 },
        };

        let weights = self.config.weights;
        let total = (breakdown.similarity * weights.similarity
            + breakdown.skills * weights.skills
            + breakdown.experience * weights.experience
            + breakdown.education * weights.education
            + breakdown.location * weights.location)
            * 100.0;

        MatchResult {
            score: round2(total),
            breakdown,
            details: ScoreDetails {
                cosine_similarity: round2(cosine),
                skills_matched: skill_match.matched_skills,
                experience_years: tally.display(),
                education_matched: education.matched,
                location_matched: location.matched,
            },
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
