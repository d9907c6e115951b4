use crate::catalog::JobRole;
use crate::extraction::ExtractedSignals;

use super::policy::{ScoringPolicy, SubScores};
use super::skills::{weighted_skill_score, SkillCoverage};
use super::ScoreBreakdown;

const POINTS_PER_YEAR: f64 = 20.0;
const POINTS_PER_SKILL: f64 = 10.0;
const POINTS_PER_KEYWORD: f64 = 20.0;
/// Education and keyword scores reported by the fallback formula.
const NEUTRAL_SCORE: f64 = 50.0;
const FALLBACK_MATCHES: usize = 5;

/// Scores a resume against a job role, or with the generic fallback formula
/// when the role is not in the catalog.
pub fn score_resume(
    resume_text: &str,
    signals: &ExtractedSignals,
    role: Option<&JobRole>,
) -> ScoreBreakdown {
    let Some(role) = role else {
        return score_unknown_role(signals);
    };

    let required = SkillCoverage::compute(role.required_skills, &signals.skills);
    let preferred = SkillCoverage::compute(role.preferred_skills, &signals.skills);

    let sub_scores = SubScores {
        skill: weighted_skill_score(&required, &preferred),
        experience: experience_score(signals.experience_years),
        education: education_score(&signals.education, role.education_keywords),
        context: keyword_score(&resume_text.to_lowercase(), role.experience_keywords),
    };

    ScoreBreakdown::new(ScoringPolicy::ResumeAnalysis, sub_scores, required, preferred)
}

fn score_unknown_role(signals: &ExtractedSignals) -> ScoreBreakdown {
    let sub_scores = SubScores {
        skill: (signals.skills.len() as f64 * POINTS_PER_SKILL).min(100.0),
        experience: experience_score(signals.experience_years),
        education: NEUTRAL_SCORE,
        context: NEUTRAL_SCORE,
    };

    let required = SkillCoverage {
        matched: signals.skills.iter().take(FALLBACK_MATCHES).cloned().collect(),
        missing: Vec::new(),
    };

    ScoreBreakdown::new(
        ScoringPolicy::ResumeFallback,
        sub_scores,
        required,
        SkillCoverage::default(),
    )
}

/// 20 points per year, capped at 100.
pub fn experience_score(years: u32) -> f64 {
    (years as f64 * POINTS_PER_YEAR).min(100.0)
}

/// 100 for a relevant degree, 50 for any degree, 0 for none.
pub fn education_score(education: &[String], keywords: &[&str]) -> f64 {
    let relevant = education.iter().any(|mention| {
        let mention = mention.to_lowercase();
        keywords.iter().any(|k| mention.contains(k))
    });

    if relevant {
        100.0
    } else if !education.is_empty() {
        50.0
    } else {
        0.0
    }
}

/// 20 points per role keyword present anywhere in the text, capped at 100.
pub fn keyword_score(text_lower: &str, keywords: &[&str]) -> f64 {
    let hits = keywords.iter().filter(|k| text_lower.contains(*k)).count();
    (hits as f64 * POINTS_PER_KEYWORD).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::extraction::SignalExtractor;

    fn role(name: &str) -> &'static JobRole {
        Catalog::builtin().role(name).unwrap()
    }

    #[test]
    fn test_experience_score_is_linear_and_capped() {
        assert_eq!(experience_score(0), 0.0);
        assert_eq!(experience_score(2), 40.0);
        assert_eq!(experience_score(5), 100.0);
        assert_eq!(experience_score(9), 100.0);
    }

    #[test]
    fn test_education_score_tiers() {
        let keywords = ["computer science", "software engineering"];
        assert_eq!(education_score(&["computer science".to_string()], &keywords), 100.0);
        assert_eq!(education_score(&["fine arts".to_string()], &keywords), 50.0);
        assert_eq!(education_score(&[], &keywords), 0.0);
    }

    #[test]
    fn test_keyword_score_counts_and_caps() {
        let keywords = ["backend", "server", "api", "database", "microservices"];
        assert_eq!(keyword_score("wrote backend api code", &keywords), 40.0);
        assert_eq!(
            keyword_score("backend server api database microservices", &keywords),
            100.0
        );
        assert_eq!(keyword_score("", &keywords), 0.0);
    }

    #[test]
    fn test_known_role_scoring() {
        let text = "Backend developer. Built REST api microservices in Python and Java with SQL. \
                    2019-2023. Bachelor of Computer Science";
        let signals = SignalExtractor::default().extract(text);
        let score = score_resume(text, &signals, Some(role("Backend Developer")));

        assert_eq!(score.policy, ScoringPolicy::ResumeAnalysis);
        assert_eq!(score.required.missing, vec!["node.js", "api", "microservices"]);
        assert_eq!(score.sub_scores.experience, 80.0);
        assert_eq!(score.sub_scores.education, 100.0);
        assert_eq!(score.sub_scores.context, 60.0);
    }

    #[test]
    fn test_unknown_role_uses_fallback() {
        let text = "python java sql docker aws. 2021-2024";
        let signals = SignalExtractor::default().extract(text);
        let score = score_resume(text, &signals, None);

        assert_eq!(score.policy, ScoringPolicy::ResumeFallback);
        assert_eq!(score.sub_scores.skill, 50.0);
        assert_eq!(score.sub_scores.experience, 60.0);
        assert_eq!(score.sub_scores.education, 50.0);
        assert_eq!(score.sub_scores.context, 50.0);
        assert!((score.overall_match - 54.0).abs() < 1e-9);
        assert_eq!(score.required.matched.len(), 5);
        assert!(score.required.missing.is_empty());
    }
}
