//! Resume analysis — decoded resume text scored against one job role.

pub mod advice;
pub mod handlers;

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::extraction::SignalExtractor;
use crate::matching::resume::score_resume;
use crate::matching::{round1, round3};

use self::advice::{
    apply_verdict, experience_summary, improvement_suggestions, resume_recommendations,
    OverallRating, Suggestions,
};

const MAX_LISTED_SKILLS: usize = 10;
const MAX_LISTED_MATCHES: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Could not extract text from the resume. Please ensure the file is not corrupted.")]
    EmptyText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    /// Skill match formatted as `"x.x%"`.
    pub skill_match: String,
    pub experience_level: String,
    pub overall_rating: OverallRating,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeAnalysis {
    pub job_role: String,
    /// False when the role is not in the catalog and the generic formula was used.
    pub role_recognized: bool,
    pub match_percentage: f64,
    pub skill_match: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub keyword_score: f64,
    pub confidence: f64,
    pub similarity_score: f64,
    pub extracted_skills: Vec<String>,
    pub skill_categories: BTreeMap<String, Vec<String>>,
    pub organizations: Vec<String>,
    pub education: Vec<String>,
    pub experience_years: u32,
    pub required_skill_matches: Vec<String>,
    pub missing_required_skills: Vec<String>,
    pub preferred_skill_matches: Vec<String>,
    pub missing_preferred_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub suggestions: Suggestions,
    pub overall_rating: OverallRating,
    pub analysis_summary: AnalysisSummary,
}

/// Extracts signals from `text`, scores them against `job_role` and builds the
/// advice. Unknown roles fall back to the generic formula.
pub fn analyze_resume(
    catalog: &Catalog,
    extractor: &SignalExtractor,
    text: &str,
    job_role: &str,
) -> Result<ResumeAnalysis, AnalysisError> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyText);
    }

    let signals = extractor.extract(text);
    let role = catalog.role(job_role);
    let score = score_resume(text, &signals, role);

    let recommendations =
        resume_recommendations(&score, signals.skills.len(), signals.experience_years);
    let suggestions = improvement_suggestions(&score);
    let overall_rating = OverallRating::from_match(score.overall_match);
    let match_percentage = round1(score.overall_match);
    let skill_match = round1(score.skill_match());

    Ok(ResumeAnalysis {
        job_role: job_role.to_string(),
        role_recognized: role.is_some(),
        match_percentage,
        skill_match,
        experience_score: round1(score.sub_scores.experience),
        education_score: round1(score.sub_scores.education),
        keyword_score: round1(score.sub_scores.context),
        confidence: round3(score.confidence),
        similarity_score: round3(score.overall_match / 100.0),
        extracted_skills: signals.skills.iter().take(MAX_LISTED_SKILLS).cloned().collect(),
        skill_categories: signals.skill_categories,
        organizations: signals.organizations,
        education: signals.education,
        experience_years: signals.experience_years,
        required_skill_matches: first(&score.required.matched),
        missing_required_skills: first(&score.required.missing),
        preferred_skill_matches: first(&score.preferred.matched),
        missing_preferred_skills: first(&score.preferred.missing),
        recommendations,
        suggestions,
        overall_rating,
        analysis_summary: AnalysisSummary {
            skill_match: format!("{skill_match:.1}%"),
            experience_level: experience_summary(signals.experience_years),
            overall_rating,
            recommendation: apply_verdict(score.overall_match),
        },
    })
}

fn first(skills: &[String]) -> Vec<String> {
    skills.iter().take(MAX_LISTED_MATCHES).cloned().collect()
}
