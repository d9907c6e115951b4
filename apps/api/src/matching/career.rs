use crate::catalog::{CareerProfile, ExperienceLevel};
use crate::extraction::CandidateProfile;

use super::policy::{ScoringPolicy, SubScores};
use super::skills::{skills_overlap, weighted_skill_score, SkillCoverage};
use super::ScoreBreakdown;

/// Interest score used when either side has nothing to compare.
const NEUTRAL_INTEREST: f64 = 50.0;
const SENIOR_THRESHOLD_YEARS: u32 = 5;

/// Scores a candidate against one career under `CareerRecommendation`.
pub fn score_career(candidate: &CandidateProfile, career: &CareerProfile) -> ScoreBreakdown {
    let required = SkillCoverage::compute(career.required_skills, &candidate.skills);
    let preferred = SkillCoverage::compute(career.preferred_skills, &candidate.skills);

    let aspirations: Vec<String> = candidate
        .interests
        .iter()
        .chain(candidate.goals.iter())
        .cloned()
        .collect();

    let sub_scores = SubScores {
        skill: weighted_skill_score(&required, &preferred),
        experience: experience_match(candidate.experience_years, career),
        education: education_bonus(&candidate.education),
        context: interest_match(&aspirations, career.interest_tags),
    };

    ScoreBreakdown::new(ScoringPolicy::CareerRecommendation, sub_scores, required, preferred)
}

/// 100 unless the career has no band for the candidate's seniority.
pub fn experience_match(years: u32, career: &CareerProfile) -> f64 {
    if years == 0 && !career.accepts(ExperienceLevel::Entry) {
        60.0
    } else if years >= SENIOR_THRESHOLD_YEARS && !career.accepts(ExperienceLevel::Senior) {
        80.0
    } else {
        100.0
    }
}

/// Flat bonus for advanced degrees. A master's/MBA mention takes precedence.
pub fn education_bonus(education: &str) -> f64 {
    let education = education.to_lowercase();
    if education.contains("master") || education.contains("mba") {
        10.0
    } else if education.contains("phd") || education.contains("doctorate") {
        15.0
    } else {
        0.0
    }
}

/// Share of interest tags hit by the candidate's interests and goals.
///
/// Counts candidate items with at least one overlapping tag, so the ratio can
/// exceed 1 before the cap.
pub fn interest_match(aspirations: &[String], tags: &[&str]) -> f64 {
    let aspirations: Vec<String> = aspirations
        .iter()
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();

    if aspirations.is_empty() || tags.is_empty() {
        return NEUTRAL_INTEREST;
    }

    let hits = aspirations
        .iter()
        .filter(|a| tags.iter().any(|t| skills_overlap(a, &t.to_lowercase())))
        .count();

    (hits as f64 / tags.len() as f64 * 100.0).min(100.0)
}
