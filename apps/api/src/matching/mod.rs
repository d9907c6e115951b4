//! Catalog matching — candidate signals scored against one catalog entry.
//!
//! Every scorer returns a `ScoreBreakdown`: four clamped sub-scores, the
//! policy-weighted overall match, and which catalog skills were covered.
//! Nothing is rounded here; rounding belongs to the output records.

pub mod career;
pub mod policy;
pub mod resume;
pub mod skills;

use serde::Serialize;

pub use policy::{confidence, round1, round3, ScoringPolicy, SubScores};
pub use skills::SkillCoverage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub policy: ScoringPolicy,
    pub sub_scores: SubScores,
    pub overall_match: f64,
    pub confidence: f64,
    pub required: SkillCoverage,
    pub preferred: SkillCoverage,
}

impl ScoreBreakdown {
    pub fn new(
        policy: ScoringPolicy,
        sub_scores: SubScores,
        required: SkillCoverage,
        preferred: SkillCoverage,
    ) -> Self {
        let sub_scores = sub_scores.clamped();
        let overall_match = policy.combine(&sub_scores);
        Self {
            policy,
            sub_scores,
            overall_match,
            confidence: confidence(overall_match),
            required,
            preferred,
        }
    }

    pub fn skill_match(&self) -> f64 {
        self.sub_scores.skill
    }
}
