//! Skills-gap analysis for one target career, with learning
//! resources for what is missing.

pub mod handlers;
pub mod learning;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::matching::{round1, SkillCoverage};

use self::learning::{learning_recommendations, LearningResources};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsGap {
    pub career: String,
    pub matched_required: Vec<String>,
    pub missing_required: Vec<String>,
    pub matched_preferred: Vec<String>,
    pub missing_preferred: Vec<String>,
    /// Share of required skills covered, 0–100.
    pub skill_match_percentage: f64,
    pub learning_recommendations: Vec<LearningResources>,
}

/// Gap between `skills` and the career named `career`. `None` when the career
/// is not in the catalog.
pub fn skills_gap(catalog: &Catalog, skills: &[String], career: &str) -> Option<SkillsGap> {
    let profile = catalog.career(career)?;

    let required = SkillCoverage::compute(profile.required_skills, skills);
    let preferred = SkillCoverage::compute(profile.preferred_skills, skills);

    Some(SkillsGap {
        career: profile.name.to_string(),
        skill_match_percentage: round1(required.percentage()),
        learning_recommendations: learning_recommendations(&required.missing),
        matched_required: required.matched,
        missing_required: required.missing,
        matched_preferred: preferred.matched,
        missing_preferred: preferred.missing,
    })
}
