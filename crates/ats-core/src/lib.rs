pub mod date;
pub mod embedding;
pub mod experience;
pub mod extract;
pub mod logging;
pub mod matching;
pub mod normalize;

use serde::{Deserialize, Serialize};

/// Job-record fields supplied by the surrounding posting workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRequirement {
    pub skills_required: Vec<String>,
    /// Required experience in years
    pub experience_required: f64,
    /// Accepted qualifications, as abbreviations or full forms
    pub qualification: Vec<String>,
    /// Comma-separated preferred locations
    pub location: String,
    pub job_description: String,
}
