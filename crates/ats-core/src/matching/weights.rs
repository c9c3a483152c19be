/// Fixed signal weights for the composite ATS score.
///
/// Semantic similarity dominates; the four structured signals share the
/// remaining half.
pub const ATS_WEIGHTS: Weights = Weights {
    similarity: 0.5,
    skills: 0.2,
    experience: 0.1,
    education: 0.1,
    location: 0.1,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub similarity: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub location: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.similarity + self.skills + self.experience + self.education + self.location
    }
}
