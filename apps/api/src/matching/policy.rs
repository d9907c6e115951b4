//! Fixed weightings for each scoring call site.
//!
//! Career recommendation and resume analysis weigh the same four dimensions
//! differently and compute them differently; each call site picks its own
//! policy and the two are never blended.

use serde::Serialize;

/// Weights for the four sub-scores. Each policy's weights sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolicyWeights {
    pub skill: f64,
    pub experience: f64,
    pub education: f64,
    /// Interest match (career) or keyword score (resume).
    pub context: f64,
}

impl PolicyWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.experience + self.education + self.context
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// `0.4*skill + 0.3*interest + 0.2*experience + 0.1*education_bonus`
    CareerRecommendation,
    /// `0.4*skill + 0.25*experience + 0.2*education + 0.15*keyword`
    ResumeAnalysis,
    /// Unknown job role: `0.6*skill + 0.4*experience`.
    ResumeFallback,
}

impl ScoringPolicy {
    pub const fn weights(self) -> PolicyWeights {
        match self {
            Self::CareerRecommendation => PolicyWeights {
                skill: 0.4,
                experience: 0.2,
                education: 0.1,
                context: 0.3,
            },
            Self::ResumeAnalysis => PolicyWeights {
                skill: 0.4,
                experience: 0.25,
                education: 0.2,
                context: 0.15,
            },
            Self::ResumeFallback => PolicyWeights {
                skill: 0.6,
                experience: 0.4,
                education: 0.0,
                context: 0.0,
            },
        }
    }

    /// Weighted overall match. Sub-scores are clamped before combining.
    pub fn combine(self, scores: &SubScores) -> f64 {
        let s = scores.clamped();
        let w = self.weights();
        (w.skill * s.skill + w.experience * s.experience + w.education * s.education
            + w.context * s.context)
            .clamp(0.0, 100.0)
    }
}

/// The four sub-scores, each on a 0–100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SubScores {
    pub skill: f64,
    pub experience: f64,
    pub education: f64,
    pub context: f64,
}

impl SubScores {
    pub fn clamped(&self) -> Self {
        Self {
            skill: clamp_percent(self.skill),
            experience: clamp_percent(self.experience),
            education: clamp_percent(self.education),
            context: clamp_percent(self.context),
        }
    }
}

pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Damped certainty: never reaches 1.0.
pub fn confidence(overall_match: f64) -> f64 {
    (overall_match / 100.0).min(0.95)
}

/// Output rounding for scores (one decimal).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Output rounding for confidence (three decimals).
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ScoringPolicy; 3] = [
        ScoringPolicy::CareerRecommendation,
        ScoringPolicy::ResumeAnalysis,
        ScoringPolicy::ResumeFallback,
    ];

    #[test]
    fn test_weights_sum_to_one() {
        for policy in ALL {
            let sum = policy.weights().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{policy:?} sums to {sum}");
        }
    }

    #[test]
    fn test_career_combination() {
        let scores = SubScores {
            skill: 60.0,
            experience: 100.0,
            education: 10.0,
            context: 50.0,
        };
        let overall = ScoringPolicy::CareerRecommendation.combine(&scores);
        assert!((overall - 60.0).abs() < 1e-9, "overall was {overall}");
    }

    #[test]
    fn test_resume_combination() {
        let scores = SubScores {
            skill: 50.0,
            experience: 40.0,
            education: 100.0,
            context: 60.0,
        };
        // 20 + 10 + 20 + 9
        let overall = ScoringPolicy::ResumeAnalysis.combine(&scores);
        assert!((overall - 59.0).abs() < 1e-9, "overall was {overall}");
    }

    #[test]
    fn test_fallback_ignores_education_and_context() {
        let scores = SubScores {
            skill: 30.0,
            experience: 40.0,
            education: 50.0,
            context: 50.0,
        };
        let overall = ScoringPolicy::ResumeFallback.combine(&scores);
        assert!((overall - 34.0).abs() < 1e-9, "overall was {overall}");
    }

    #[test]
    fn test_out_of_range_sub_scores_are_clamped() {
        let scores = SubScores {
            skill: 250.0,
            experience: -40.0,
            education: f64::NAN,
            context: 100.0,
        };
        for policy in ALL {
            let overall = policy.combine(&scores);
            assert!((0.0..=100.0).contains(&overall), "{policy:?} gave {overall}");
        }
    }

    #[test]
    fn test_confidence_is_capped() {
        assert_eq!(confidence(100.0), 0.95);
        assert_eq!(confidence(95.0), 0.95);
        assert!((confidence(42.0) - 0.42).abs() < 1e-12);
        assert_eq!(confidence(0.0), 0.0);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round1(59.96), 60.0);
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round3(0.12345), 0.123);
    }
}
