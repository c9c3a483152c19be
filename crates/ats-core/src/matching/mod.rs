pub mod education;
pub mod location;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use scoring::{AtsScorer, MatchResult, ScoreBreakdown, ScoreDetails, ScoringConfig};
pub use weights::{Weights, ATS_WEIGHTS};
