//! Career ranking — every career scored against one candidate, best first.

pub mod handlers;
pub mod insights;
pub mod salary;

use serde::Serialize;

use crate::catalog::{Catalog, CareerProfile, GrowthPotential};
use crate::extraction::CandidateProfile;
use crate::matching::career::score_career;
use crate::matching::{round1, round3, ScoreBreakdown};

use self::insights::generate_insights;
use self::salary::{adjust_salary, AdjustedSalary};

pub const MAX_RECOMMENDATIONS: usize = 5;
const MAX_LISTED_SKILLS: usize = 5;
const MAX_LISTED_INDUSTRIES: usize = 3;

/// One ranked career, rounded for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerRecommendation {
    pub career: String,
    pub match_percentage: f64,
    pub skill_match: f64,
    pub interest_match: f64,
    pub experience_match: f64,
    pub education_bonus: f64,
    pub confidence: f64,
    pub salary_range: AdjustedSalary,
    pub industries: Vec<String>,
    pub experience_level: &'static str,
    pub growth_potential: GrowthPotential,
    pub remote_friendly: bool,
    pub matched_required_skills: Vec<String>,
    pub missing_required_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingResult {
    pub recommendations: Vec<CareerRecommendation>,
    pub insights: Vec<String>,
}

/// Scores every career, sorts by overall match (stable, so ties keep catalog
/// order) and keeps the top five.
pub fn rank_careers(catalog: &Catalog, candidate: &CandidateProfile) -> RankingResult {
    let mut scored: Vec<(&CareerProfile, ScoreBreakdown)> = catalog
        .careers()
        .iter()
        .map(|career| (career, score_career(candidate, career)))
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.overall_match.total_cmp(&a.overall_match));

    let recommendations: Vec<CareerRecommendation> = scored
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(career, score)| to_recommendation(career, &score, candidate.experience_years))
        .collect();

    let insights = generate_insights(candidate, recommendations.first());

    RankingResult {
        recommendations,
        insights,
    }
}

fn to_recommendation(
    career: &CareerProfile,
    score: &ScoreBreakdown,
    experience_years: u32,
) -> CareerRecommendation {
    CareerRecommendation {
        career: career.name.to_string(),
        match_percentage: round1(score.overall_match),
        skill_match: round1(score.skill_match()),
        interest_match: round1(score.sub_scores.context),
        experience_match: round1(score.sub_scores.experience),
        education_bonus: round1(score.sub_scores.education),
        confidence: round3(score.confidence),
        salary_range: adjust_salary(career.salary_range, experience_years, score.skill_match()),
        industries: career
            .industries
            .iter()
            .take(MAX_LISTED_INDUSTRIES)
            .map(|s| s.to_string())
            .collect(),
        experience_level: experience_level(experience_years),
        growth_potential: career.growth_potential,
        remote_friendly: career.remote_friendly,
        matched_required_skills: score.required.matched.iter().take(MAX_LISTED_SKILLS).cloned().collect(),
        missing_required_skills: score.required.missing.iter().take(MAX_LISTED_SKILLS).cloned().collect(),
    }
}

pub fn experience_level(years: u32) -> &'static str {
    match years {
        0 => "Entry Level",
        1..=3 => "Junior Level",
        4..=7 => "Mid Level",
        _ => "Senior Level",
    }
}
